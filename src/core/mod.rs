pub mod fields;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Header of the overall goal status column ("Goal Met in the Language",
/// "Translation Not Started", ...).
pub const ACCESS_STATUS: &str = "All Access Status";
/// Header of the activity sub-status column ("Work In Progress",
/// "Expressed Need", ...).
pub const TRANSLATION_STATUS: &str = "Translation Status";
/// Header of the numeric goal-size column (chapters).
pub const CHAPTER_GOAL: &str = "All Access Chapter Goal";

/// One language row from the source table.
///
/// The three fields the rules consume are typed and coerced up front
/// (`fields::parse_number` for the goal); everything else the source file
/// carries passes through `extra` untouched for display.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LanguageRecord {
    pub access_status: Option<String>,
    pub translation_status: Option<String>,
    pub chapter_goal: Option<f64>,
    #[serde(default)]
    pub extra: BTreeMap<String, String>,
}

impl LanguageRecord {
    /// Build a record from `(header, cell)` pairs.
    ///
    /// Headers are trimmed before matching, empty cells are dropped, and an
    /// unparseable goal cell degrades to `None` rather than failing the row.
    pub fn from_fields<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut record = Self::default();
        for (header, cell) in pairs {
            let header = fields::normalize_header(header.as_ref());
            let cell = cell.as_ref().trim();
            if cell.is_empty() {
                continue;
            }
            match header {
                ACCESS_STATUS => record.access_status = Some(cell.to_string()),
                TRANSLATION_STATUS => record.translation_status = Some(cell.to_string()),
                CHAPTER_GOAL => record.chapter_goal = fields::parse_number(cell),
                _ => {
                    record.extra.insert(header.to_string(), cell.to_string());
                }
            }
        }
        record
    }

    /// True when no column carried a value; such rows are skipped at ingest.
    pub fn is_blank(&self) -> bool {
        self.access_status.is_none()
            && self.translation_status.is_none()
            && self.chapter_goal.is_none()
            && self.extra.is_empty()
    }

    pub fn access_status(&self) -> &str {
        self.access_status.as_deref().unwrap_or("")
    }

    pub fn translation_status(&self) -> &str {
        self.translation_status.as_deref().unwrap_or("")
    }

    pub fn language_name(&self) -> &str {
        self.extra
            .get("Language Name")
            .map(String::as_str)
            .unwrap_or("Unknown")
    }

    pub fn country(&self) -> &str {
        self.extra.get("Country").map(String::as_str).unwrap_or("Unknown")
    }
}

/// Size-of-goal bucket. Assignment tests run in declaration order and the
/// first match wins; the open-ended `TwoFullBibles` test must therefore run
/// last.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ScopeBucket {
    /// Scripture portion, 25 chapters.
    Portion,
    /// New Testament, 260 chapters.
    NewTestament,
    /// Full Bible, 1,189 chapters.
    FullBible,
    /// A second Full-Bible-equivalent translation, 2,000 chapters or more.
    TwoFullBibles,
}

impl ScopeBucket {
    pub const ALL: [ScopeBucket; 4] = [
        ScopeBucket::Portion,
        ScopeBucket::NewTestament,
        ScopeBucket::FullBible,
        ScopeBucket::TwoFullBibles,
    ];

    /// Short label as shown in the dashboards.
    pub fn label(&self) -> &'static str {
        match self {
            ScopeBucket::Portion => "Portion",
            ScopeBucket::NewTestament => "NT",
            ScopeBucket::FullBible => "FB",
            ScopeBucket::TwoFullBibles => "Two FB",
        }
    }
}

impl std::fmt::Display for ScopeBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Per-bucket counters.
///
/// The buckets are not exhaustive: a record whose goal matches no bucket
/// counts toward none of them, so `total()` may undercount the row count the
/// counters were derived from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopeCounts {
    pub portion: usize,
    pub nt: usize,
    pub fb: usize,
    pub two_fb: usize,
}

impl ScopeCounts {
    pub fn get(&self, bucket: ScopeBucket) -> usize {
        match bucket {
            ScopeBucket::Portion => self.portion,
            ScopeBucket::NewTestament => self.nt,
            ScopeBucket::FullBible => self.fb,
            ScopeBucket::TwoFullBibles => self.two_fb,
        }
    }

    pub fn increment(&mut self, bucket: ScopeBucket) {
        match bucket {
            ScopeBucket::Portion => self.portion += 1,
            ScopeBucket::NewTestament => self.nt += 1,
            ScopeBucket::FullBible => self.fb += 1,
            ScopeBucket::TwoFullBibles => self.two_fb += 1,
        }
    }

    /// Sum over the four buckets (not necessarily the underlying row count).
    pub fn total(&self) -> usize {
        self.portion + self.nt + self.fb + self.two_fb
    }

    pub fn iter(&self) -> impl Iterator<Item = (ScopeBucket, usize)> + '_ {
        ScopeBucket::ALL.iter().map(|b| (*b, self.get(*b)))
    }
}
