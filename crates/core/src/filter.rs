//! Search predicates shared by the entity queries.
//!
//! Narrowing queries are conjunctions of independent, optional predicates.
//! An omitted (or empty) filter value means "no constraint".

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Case-insensitive string equality.
#[must_use]
pub fn eq_ignore_case(left: &str, right: &str) -> bool {
    left.chars()
        .flat_map(char::to_lowercase)
        .eq(right.chars().flat_map(char::to_lowercase))
}

/// Case-insensitive substring match.
#[must_use]
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Returns the filter value if it constrains anything.
#[must_use]
pub fn active_filter(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Inclusive timestamp bounds. Either side may be open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// Lower bound (inclusive).
    pub start: Option<DateTime<Utc>>,
    /// Upper bound (inclusive).
    pub end: Option<DateTime<Utc>>,
}

impl DateRange {
    /// Creates a range from optional bounds.
    #[must_use]
    pub const fn new(start: Option<DateTime<Utc>>, end: Option<DateTime<Utc>>) -> Self {
        Self { start, end }
    }

    /// Returns true if both bounds are set and the end precedes the start.
    /// Such a range contains nothing.
    #[must_use]
    pub fn is_inverted(&self) -> bool {
        matches!((self.start, self.end), (Some(start), Some(end)) if end < start)
    }

    /// Returns true if `at` lies within the bounds.
    #[must_use]
    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        self.start.is_none_or(|start| at >= start) && self.end.is_none_or(|end| at <= end)
    }
}

/// Sorts records newest first by the given timestamp. Ties keep insertion order.
pub fn sort_newest_first<T>(records: &mut [T], timestamp: impl Fn(&T) -> DateTime<Utc>) {
    records.sort_by(|a, b| timestamp(b).cmp(&timestamp(a)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use rstest::rstest;

    #[rstest]
    #[case("Admin", "admin", true)]
    #[case("ADMIN", "Admin", true)]
    #[case("admin", "admin1", false)]
    #[case("", "", true)]
    fn test_eq_ignore_case(#[case] left: &str, #[case] right: &str, #[case] expected: bool) {
        assert_eq!(eq_ignore_case(left, right), expected);
    }

    #[test]
    fn test_contains_ignore_case() {
        assert!(contains_ignore_case("john.doe@email.com", "DOE"));
        assert!(!contains_ignore_case("john.doe@email.com", "smith"));
    }

    #[test]
    fn test_active_filter_treats_empty_as_absent() {
        assert_eq!(active_filter(None), None);
        assert_eq!(active_filter(Some("")), None);
        assert_eq!(active_filter(Some("CREATE")), Some("CREATE"));
    }

    #[test]
    fn test_date_range_bounds_are_inclusive() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 1, 31, 0, 0, 0).unwrap();
        let range = DateRange::new(Some(start), Some(end));

        assert!(range.contains(start));
        assert!(range.contains(end));
        assert!(!range.contains(start - Duration::seconds(1)));
        assert!(!range.contains(end + Duration::seconds(1)));
        assert!(!range.is_inverted());
    }

    #[test]
    fn test_open_range_contains_everything() {
        let range = DateRange::default();
        assert!(range.contains(Utc::now()));
        assert!(!range.is_inverted());
    }

    #[test]
    fn test_inverted_range_contains_nothing() {
        let start = Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let range = DateRange::new(Some(start), Some(end));

        assert!(range.is_inverted());
        assert!(!range.contains(Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap()));
    }

    #[test]
    fn test_sort_newest_first_is_stable() {
        let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let mut rows = vec![(1, base), (2, base + Duration::hours(1)), (3, base)];
        sort_newest_first(&mut rows, |row| row.1);
        let ids: Vec<_> = rows.iter().map(|row| row.0).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }
}
