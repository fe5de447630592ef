//! Disabled/special date descriptors and range matching.
//!
//! A caller supplies a read-only list of [`DateRangeDescriptor`]s for
//! "disabled dates" (which reject commits) and "special dates" (a styling
//! query only). The state machine re-evaluates the list on every commit
//! attempt and never mutates it.

use chrono::{Datelike, NaiveDate, Weekday};

/// One disabled-dates (or special-dates) rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateRangeDescriptor {
    /// Every date strictly after the given one.
    After(NaiveDate),
    /// Every date strictly before the given one.
    Before(NaiveDate),
    /// An inclusive date range.
    Between { start: NaiveDate, end: NaiveDate },
    /// An explicit list of dates.
    Specific(Vec<NaiveDate>),
    /// Recurring weekdays.
    Weekdays(Vec<Weekday>),
    /// Saturdays and Sundays.
    Weekends,
}

impl DateRangeDescriptor {
    /// Whether this rule matches the given date.
    ///
    /// `Between` tolerates reversed bounds by normalizing them.
    pub fn contains(&self, date: NaiveDate) -> bool {
        match self {
            Self::After(bound) => date > *bound,
            Self::Before(bound) => date < *bound,
            Self::Between { start, end } => {
                let (lo, hi) = if start <= end {
                    (*start, *end)
                } else {
                    (*end, *start)
                };
                lo <= date && date <= hi
            }
            Self::Specific(dates) => dates.contains(&date),
            Self::Weekdays(weekdays) => weekdays.contains(&date.weekday()),
            Self::Weekends => {
                matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
            }
        }
    }
}

/// Whether any rule in the list matches the date.
pub fn date_in_ranges(date: NaiveDate, ranges: &[DateRangeDescriptor]) -> bool {
    ranges.iter().any(|range| range.contains(date))
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // ── Individual descriptors ───────────────────────────────────────

    #[test]
    fn after_is_strict() {
        let rule = DateRangeDescriptor::After(date(2018, 9, 8));
        assert!(rule.contains(date(2018, 9, 9)));
        assert!(!rule.contains(date(2018, 9, 8)));
        assert!(!rule.contains(date(2018, 9, 7)));
    }

    #[test]
    fn before_is_strict() {
        let rule = DateRangeDescriptor::Before(date(2018, 9, 2));
        assert!(rule.contains(date(2018, 9, 1)));
        assert!(!rule.contains(date(2018, 9, 2)));
    }

    #[test]
    fn between_is_inclusive() {
        let rule = DateRangeDescriptor::Between {
            start: date(2018, 9, 2),
            end: date(2018, 9, 8),
        };
        assert!(rule.contains(date(2018, 9, 2)));
        assert!(rule.contains(date(2018, 9, 5)));
        assert!(rule.contains(date(2018, 9, 8)));
        assert!(!rule.contains(date(2018, 9, 1)));
        assert!(!rule.contains(date(2018, 9, 9)));
    }

    #[test]
    fn between_normalizes_reversed_bounds() {
        let rule = DateRangeDescriptor::Between {
            start: date(2018, 9, 8),
            end: date(2018, 9, 2),
        };
        assert!(rule.contains(date(2018, 9, 5)));
    }

    #[test]
    fn specific_dates() {
        let rule =
            DateRangeDescriptor::Specific(vec![date(2018, 9, 2), date(2018, 12, 25)]);
        assert!(rule.contains(date(2018, 12, 25)));
        assert!(!rule.contains(date(2018, 12, 24)));
    }

    #[test]
    fn recurring_weekdays() {
        let rule = DateRangeDescriptor::Weekdays(vec![Weekday::Mon, Weekday::Fri]);
        // 2018-09-03 was a Monday.
        assert!(rule.contains(date(2018, 9, 3)));
        assert!(rule.contains(date(2018, 9, 7)));
        assert!(!rule.contains(date(2018, 9, 4)));
    }

    #[test]
    fn weekends() {
        let rule = DateRangeDescriptor::Weekends;
        // 2018-09-01 was a Saturday.
        assert!(rule.contains(date(2018, 9, 1)));
        assert!(rule.contains(date(2018, 9, 2)));
        assert!(!rule.contains(date(2018, 9, 3)));
    }

    // ── Lists ────────────────────────────────────────────────────────

    #[test]
    fn any_rule_matches() {
        let rules = vec![
            DateRangeDescriptor::Before(date(2018, 1, 1)),
            DateRangeDescriptor::Weekends,
        ];
        assert!(date_in_ranges(date(2017, 6, 1), &rules));
        assert!(date_in_ranges(date(2018, 9, 1), &rules));
        assert!(!date_in_ranges(date(2018, 9, 3), &rules));
    }

    #[test]
    fn empty_list_matches_nothing() {
        assert!(!date_in_ranges(date(2018, 9, 1), &[]));
    }
}
