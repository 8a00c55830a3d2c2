//! Sort key values and field format validation

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::Serialize;
use std::cmp::Ordering;
use std::sync::OnceLock;

/// A typed comparison key produced by [`crate::core::record::Sortable::sort_key`]
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum SortKey {
    Text(String),
    Rank(u8),
    Integer(i64),
    Float(f64),
    Timestamp(DateTime<Utc>),
}

impl SortKey {
    /// Build a text key from any display string
    pub fn text(value: &str) -> Self {
        SortKey::Text(value.to_string())
    }

    /// Total ascending order over keys
    ///
    /// Keys for one field always share a variant; cross-variant comparison
    /// falls back to the variant position so the order stays total.
    pub fn compare(&self, other: &SortKey) -> Ordering {
        match (self, other) {
            (SortKey::Text(a), SortKey::Text(b)) => collate(a, b),
            (SortKey::Rank(a), SortKey::Rank(b)) => a.cmp(b),
            (SortKey::Integer(a), SortKey::Integer(b)) => a.cmp(b),
            (SortKey::Float(a), SortKey::Float(b)) => a.total_cmp(b),
            (SortKey::Timestamp(a), SortKey::Timestamp(b)) => a.cmp(b),
            _ => self.position().cmp(&other.position()),
        }
    }

    fn position(&self) -> u8 {
        match self {
            SortKey::Text(_) => 0,
            SortKey::Rank(_) => 1,
            SortKey::Integer(_) => 2,
            SortKey::Float(_) => 3,
            SortKey::Timestamp(_) => 4,
        }
    }
}

/// Case-insensitive comparison with byte order as the tie-break.
///
/// Matches the collation the pages display: mixed-case ids and titles sort
/// together regardless of case.
fn collate(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Field format validators used by the record store's seed checks
#[derive(Debug, Clone)]
pub enum FieldFormat {
    Email,
    Url,
    Custom(Regex),
}

impl FieldFormat {
    /// Validate a field value against this format
    pub fn validate(&self, value: &str) -> bool {
        match self {
            FieldFormat::Email => Self::is_valid_email(value),
            FieldFormat::Url => Self::is_valid_url(value),
            FieldFormat::Custom(regex) => regex.is_match(value),
        }
    }

    fn is_valid_email(email: &str) -> bool {
        static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
        let regex = EMAIL_REGEX.get_or_init(|| {
            Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap()
        });
        regex.is_match(email)
    }

    fn is_valid_url(url: &str) -> bool {
        static URL_REGEX: OnceLock<Regex> = OnceLock::new();
        let regex = URL_REGEX.get_or_init(|| Regex::new(r"^https?://[^\s/$.?#].[^\s]*$").unwrap());
        regex.is_match(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_compare_is_case_insensitive() {
        let a = SortKey::text("TCK-1002");
        let b = SortKey::text("tck-1010");
        assert_eq!(a.compare(&b), Ordering::Less);

        let upper = SortKey::text("Bravo");
        let lower = SortKey::text("alpha");
        assert_eq!(upper.compare(&lower), Ordering::Greater);
    }

    #[test]
    fn test_text_compare_breaks_ties_by_byte_order() {
        let upper = SortKey::text("Alpha");
        let lower = SortKey::text("alpha");
        // "Alpha" < "alpha" in byte order once the lowercase forms tie
        assert_eq!(upper.compare(&lower), Ordering::Less);
        assert_eq!(upper.compare(&upper), Ordering::Equal);
    }

    #[test]
    fn test_rank_compare() {
        assert_eq!(SortKey::Rank(0).compare(&SortKey::Rank(3)), Ordering::Less);
        assert_eq!(SortKey::Rank(3).compare(&SortKey::Rank(3)), Ordering::Equal);
    }

    #[test]
    fn test_float_compare_is_total() {
        let a = SortKey::Float(12_500.0);
        let b = SortKey::Float(48_000.0);
        assert_eq!(a.compare(&b), Ordering::Less);
        assert_eq!(b.compare(&b), Ordering::Equal);
    }

    #[test]
    fn test_timestamp_compare() {
        let earlier = SortKey::Timestamp("2025-06-01T10:00:00Z".parse().unwrap());
        let later = SortKey::Timestamp("2025-06-02T10:00:00Z".parse().unwrap());
        assert_eq!(earlier.compare(&later), Ordering::Less);
    }

    #[test]
    fn test_email_validation() {
        let format = FieldFormat::Email;

        assert!(format.validate("test@example.com"));
        assert!(format.validate("user.name+tag@example.co.uk"));
        assert!(!format.validate("invalid-email"));
        assert!(!format.validate("@example.com"));
    }

    #[test]
    fn test_url_validation() {
        let format = FieldFormat::Url;

        assert!(format.validate("https://example.com"));
        assert!(format.validate("http://test.com/path?query=1"));
        assert!(!format.validate("not a url"));
    }

    #[test]
    fn test_custom_regex_validation() {
        let format = FieldFormat::Custom(Regex::new(r"^[A-Z]{3}-\d{3,}$").unwrap());

        assert!(format.validate("TCK-1042"));
        assert!(format.validate("ORG-001"));
        assert!(!format.validate("tck-1042"));
        assert!(!format.validate("TCK-42"));
    }
}
