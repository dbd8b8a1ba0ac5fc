//! Calendar countdown to the All Access Goals deadline.
//!
//! This is calendar arithmetic, not elapsed-seconds arithmetic: borrowing a
//! month adds the actual length of the month preceding the target month
//! (28-31 days), never a fixed 30.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// The All Access Goals deadline: Pentecost 2033, June 5.
pub fn pentecost_2033() -> NaiveDate {
    NaiveDate::from_ymd_opt(2033, 6, 5).expect("2033-06-05 is a valid date")
}

/// Time left until a target date, or the fact that it has passed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Countdown {
    /// All components are >= 0 and at least one is nonzero.
    Remaining { years: u32, months: u32, days: u32 },
    /// The target date is today or in the past.
    Passed,
}

impl std::fmt::Display for Countdown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Countdown::Remaining { years, months, days } => {
                write!(f, "{years}Y {months}M {days}D")
            }
            Countdown::Passed => write!(f, "TIME'S UP"),
        }
    }
}

fn days_in_month(year: i32, month: u32) -> i64 {
    let first = NaiveDate::from_ymd_opt(year, month, 1).expect("month is in 1..=12");
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .expect("first of next month is a valid date");
    (next - first).num_days()
}

/// Component-wise calendar difference between `today` and `target`.
///
/// Negative days borrow from months (adding the length of the month
/// immediately preceding the target month); negative months borrow from
/// years. A non-positive result collapses to [`Countdown::Passed`].
pub fn time_until(target: NaiveDate, today: NaiveDate) -> Countdown {
    let mut years = target.year() - today.year();
    let mut months = target.month() as i32 - today.month() as i32;
    let mut days = target.day() as i64 - today.day() as i64;

    // Borrow walks backwards from the target month so that each step adds
    // that month's real length. A 31st-of-the-month "today" can need two
    // steps when the month preceding the target is short.
    let mut borrow_year = target.year();
    let mut borrow_month = target.month();
    while days < 0 {
        months -= 1;
        if borrow_month == 1 {
            borrow_year -= 1;
            borrow_month = 12;
        } else {
            borrow_month -= 1;
        }
        days += days_in_month(borrow_year, borrow_month);
    }
    while months < 0 {
        years -= 1;
        months += 12;
    }

    if years < 0 || (years == 0 && months == 0 && days == 0) {
        Countdown::Passed
    } else {
        Countdown::Remaining {
            years: years as u32,
            months: months as u32,
            days: days as u32,
        }
    }
}

/// Countdown to [`pentecost_2033`].
pub fn time_until_deadline(today: NaiveDate) -> Countdown {
    time_until(pentecost_2033(), today)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn whole_years_apart() {
        assert_eq!(
            time_until(date(2033, 6, 5), date(2026, 6, 5)),
            Countdown::Remaining { years: 7, months: 0, days: 0 }
        );
    }

    #[test]
    fn day_borrow_uses_the_preceding_month_length() {
        // Borrowing into June pulls May's 31 days: 5 - 20 + 31 = 16.
        assert_eq!(
            time_until(date(2033, 6, 5), date(2026, 3, 20)),
            Countdown::Remaining { years: 7, months: 2, days: 16 }
        );
    }

    #[test]
    fn day_borrow_across_february() {
        // Jan 30 + 1 month lands past Feb 28, so the borrow walks through
        // both February (28) and January (31): -29 + 28 + 31 = 30.
        assert_eq!(
            time_until(date(2033, 3, 1), date(2033, 1, 30)),
            Countdown::Remaining { years: 0, months: 0, days: 30 }
        );
        // 2032 is a leap year: February's 29 days absorb the borrow exactly.
        assert_eq!(
            time_until(date(2032, 3, 1), date(2032, 1, 30)),
            Countdown::Remaining { years: 0, months: 1, days: 0 }
        );
    }

    #[test]
    fn month_borrow_after_day_borrow() {
        // days < 0 and months hits -1 after the borrow: decrement years.
        assert_eq!(
            time_until(date(2033, 6, 5), date(2032, 6, 20)),
            Countdown::Remaining { years: 0, months: 11, days: 16 }
        );
    }

    #[test]
    fn deadline_day_itself_is_passed() {
        assert_eq!(time_until(date(2033, 6, 5), date(2033, 6, 5)), Countdown::Passed);
    }

    #[test]
    fn one_day_past_target_is_passed_not_negative() {
        assert_eq!(time_until(date(2033, 6, 5), date(2033, 6, 6)), Countdown::Passed);
        assert_eq!(time_until_deadline(date(2033, 6, 6)), Countdown::Passed);
    }

    #[test]
    fn years_past_target_is_passed() {
        assert_eq!(time_until(date(2033, 6, 5), date(2040, 1, 1)), Countdown::Passed);
    }

    #[test]
    fn one_day_left() {
        assert_eq!(
            time_until(date(2033, 6, 5), date(2033, 6, 4)),
            Countdown::Remaining { years: 0, months: 0, days: 1 }
        );
    }

    #[test]
    fn display_formats() {
        let remaining = Countdown::Remaining { years: 7, months: 2, days: 16 };
        assert_eq!(remaining.to_string(), "7Y 2M 16D");
        assert_eq!(Countdown::Passed.to_string(), "TIME'S UP");
    }
}
