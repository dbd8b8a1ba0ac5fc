//! Coercion helpers for loosely-typed spreadsheet cells.
//!
//! Source files disagree on header padding and number formatting, so every
//! value funnels through these two functions before the rules see it.

/// Trim surrounding whitespace from a column header.
///
/// Header matching against the known field names must tolerate the stray
/// padding that spreadsheet exports introduce.
pub fn normalize_header(raw: &str) -> &str {
    raw.trim()
}

/// Parse a cell as a number, tolerating thousands separators and padding.
///
/// Returns `None` when the cleaned string is not a finite number. Callers
/// that need a numeric default must coalesce explicitly: `unwrap_or(0.0)` in
/// count positions, a nonzero floor in denominator positions. This function
/// never picks one for them.
pub fn parse_number(raw: &str) -> Option<f64> {
    let cleaned: String = raw.chars().filter(|c| *c != ',' && !c.is_whitespace()).collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|n| n.is_finite())
}
