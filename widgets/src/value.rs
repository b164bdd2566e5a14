//! Cell values for the data table.
//!
//! Rows are opaque to the table; a [`crate::Column`] accessor lifts one
//! field of a row into a [`CellValue`], which the table knows how to
//! display and order. The ordering mirrors what a spreadsheet user
//! expects: missing values sink to the bottom of an ascending sort,
//! numbers compare numerically, timestamps compare by instant, and
//! everything else falls back to case-insensitive text.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};

/// A single table cell value, as produced by a column accessor.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Absent value (`Option::None` in the source row).
    Missing,
    /// Numeric value.
    Number(f64),
    /// Point in time.
    Instant(DateTime<Utc>),
    /// Anything else, compared as text.
    Text(String),
}

impl CellValue {
    /// Total order over cell values.
    ///
    /// `Missing` ranks lowest. Two numbers compare numerically, two
    /// instants by instant; any other pairing compares the display
    /// text case-insensitively. Ties report `Equal` so a stable sort
    /// keeps their prior relative order.
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Missing, Self::Missing) => Ordering::Equal,
            (Self::Missing, _) => Ordering::Less,
            (_, Self::Missing) => Ordering::Greater,
            (Self::Number(a), Self::Number(b)) => a.total_cmp(b),
            (Self::Instant(a), Self::Instant(b)) => a.cmp(b),
            // Mixed kinds (and plain text) compare as case-insensitive text.
            (a, b) => a
                .display_text()
                .to_lowercase()
                .cmp(&b.display_text().to_lowercase()),
        }
    }

    /// The text the default cell renderer shows for this value.
    pub fn display_text(&self) -> String {
        match self {
            Self::Missing => String::new(),
            Self::Number(n) => {
                // Render integral numbers without a trailing ".0".
                if n.fract() == 0.0 && n.is_finite() {
                    format!("{n:.0}")
                } else {
                    format!("{n}")
                }
            }
            Self::Instant(t) => t.format("%Y-%m-%d %H:%M").to_string(),
            Self::Text(s) => s.clone(),
        }
    }

    /// Whether this value is absent.
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<f32> for CellValue {
    fn from(n: f32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<i32> for CellValue {
    fn from(n: i32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<u32> for CellValue {
    fn from(n: u32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        Self::Number(n as f64)
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        Self::Text(b.to_string())
    }
}

impl From<DateTime<Utc>> for CellValue {
    fn from(t: DateTime<Utc>) -> Self {
        Self::Instant(t)
    }
}

impl<V> From<Option<V>> for CellValue
where
    V: Into<CellValue>,
{
    fn from(opt: Option<V>) -> Self {
        opt.map(Into::into).unwrap_or(Self::Missing)
    }
}

#[cfg(test)]
mod cell_value_tests {
    use std::cmp::Ordering;

    use chrono::{TimeZone, Utc};

    use super::CellValue;

    #[test]
    fn missing_ranks_lowest() {
        let missing = CellValue::Missing;
        assert_eq!(missing.compare(&CellValue::from(0.0)), Ordering::Less);
        assert_eq!(missing.compare(&CellValue::from("")), Ordering::Less);
        assert_eq!(CellValue::from("a").compare(&missing), Ordering::Greater);
        assert_eq!(missing.compare(&CellValue::Missing), Ordering::Equal);
    }

    #[test]
    fn numbers_compare_numerically() {
        // A lexicographic comparison would put "9" after "10".
        assert_eq!(
            CellValue::from(9.0).compare(&CellValue::from(10.0)),
            Ordering::Less
        );
        assert_eq!(
            CellValue::from(-1.5).compare(&CellValue::from(-1.5)),
            Ordering::Equal
        );
    }

    #[test]
    fn instants_compare_by_instant() {
        let earlier = Utc.with_ymd_and_hms(2023, 1, 2, 0, 0, 0).unwrap();
        let later = Utc.with_ymd_and_hms(2024, 6, 1, 12, 30, 0).unwrap();
        assert_eq!(
            CellValue::from(earlier).compare(&CellValue::from(later)),
            Ordering::Less
        );
    }

    #[test]
    fn text_compares_case_insensitively() {
        assert_eq!(
            CellValue::from("alice").compare(&CellValue::from("Bob")),
            Ordering::Less
        );
        assert_eq!(
            CellValue::from("ALICE").compare(&CellValue::from("alice")),
            Ordering::Equal
        );
    }

    #[test]
    fn mixed_kinds_fall_back_to_text() {
        // "25" (number) vs "3" (text): string comparison puts "25" first.
        assert_eq!(
            CellValue::from(25.0).compare(&CellValue::from("3")),
            Ordering::Less
        );
    }

    #[test]
    fn display_text_formats_integral_numbers_without_fraction() {
        assert_eq!(CellValue::from(25.0).display_text(), "25");
        assert_eq!(CellValue::from(2.5).display_text(), "2.5");
        assert_eq!(CellValue::Missing.display_text(), "");
    }

    #[test]
    fn option_none_becomes_missing() {
        let none: Option<i32> = None;
        assert!(CellValue::from(none).is_missing());
        assert_eq!(CellValue::from(Some(3)), CellValue::Number(3.0));
    }
}
