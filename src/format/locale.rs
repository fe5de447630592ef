//! Locale name tables for month and weekday rendering.
//!
//! A [`Locale`] carries the month/weekday names used when a pattern contains
//! text parts (`MMM`, `MMMM`, `E`, `EEEE`) and the default pattern used when
//! an editor is configured without one. The locale never changes the token
//! grammar — only which names are rendered and matched.

use chrono::Weekday;

/// Month and weekday name tables for one locale.
///
/// The built-in locale is `en`. Hosts with other locales construct one with
/// [`Locale::custom`] and their own tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locale {
    id: String,
    months_short: [String; 12],
    months_long: [String; 12],
    weekdays_short: [String; 7],
    weekdays_long: [String; 7],
    default_pattern: String,
}

const EN_MONTHS_SHORT: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];
const EN_MONTHS_LONG: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];
// Monday-first, matching `Weekday::num_days_from_monday`.
const EN_WEEKDAYS_SHORT: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
const EN_WEEKDAYS_LONG: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

impl Locale {
    /// The built-in English locale.
    pub fn en() -> Self {
        Self::custom(
            "en",
            EN_MONTHS_SHORT,
            EN_MONTHS_LONG,
            EN_WEEKDAYS_SHORT,
            EN_WEEKDAYS_LONG,
            "MM/dd/yyyy",
        )
    }

    /// Build a locale from explicit name tables.
    ///
    /// `months_*` are January-first; `weekdays_*` are Monday-first.
    pub fn custom(
        id: impl Into<String>,
        months_short: [&str; 12],
        months_long: [&str; 12],
        weekdays_short: [&str; 7],
        weekdays_long: [&str; 7],
        default_pattern: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            months_short: months_short.map(String::from),
            months_long: months_long.map(String::from),
            weekdays_short: weekdays_short.map(String::from),
            weekdays_long: weekdays_long.map(String::from),
            default_pattern: default_pattern.into(),
        }
    }

    /// Locale identifier, e.g. `en`.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The pattern used when an editor is configured without one.
    pub fn default_pattern(&self) -> &str {
        &self.default_pattern
    }

    /// Abbreviated name for a 1-based month number. Out-of-range months
    /// return an empty string.
    pub fn month_short(&self, month: u32) -> &str {
        self.month_name(&self.months_short, month)
    }

    /// Full name for a 1-based month number.
    pub fn month_long(&self, month: u32) -> &str {
        self.month_name(&self.months_long, month)
    }

    /// Abbreviated weekday name.
    pub fn weekday_short(&self, weekday: Weekday) -> &str {
        &self.weekdays_short[weekday.num_days_from_monday() as usize]
    }

    /// Full weekday name.
    pub fn weekday_long(&self, weekday: Weekday) -> &str {
        &self.weekdays_long[weekday.num_days_from_monday() as usize]
    }

    /// Width in chars of the widest abbreviated month name.
    pub fn month_short_width(&self) -> usize {
        Self::widest(&self.months_short)
    }

    /// Width in chars of the widest full month name.
    pub fn month_long_width(&self) -> usize {
        Self::widest(&self.months_long)
    }

    /// Width in chars of the widest abbreviated weekday name.
    pub fn weekday_short_width(&self) -> usize {
        Self::widest(&self.weekdays_short)
    }

    /// Width in chars of the widest full weekday name.
    pub fn weekday_long_width(&self) -> usize {
        Self::widest(&self.weekdays_long)
    }

    /// Resolve a month name (short or long, case-insensitive) back to its
    /// 1-based number.
    pub fn month_from_name(&self, name: &str) -> Option<u32> {
        let lower = name.to_lowercase();
        let position = |table: &[String; 12]| {
            table
                .iter()
                .position(|candidate| candidate.to_lowercase() == lower)
        };
        position(&self.months_short)
            .or_else(|| position(&self.months_long))
            .map(|index| index as u32 + 1)
    }

    // -----------------------------------------------------------------------
    // Internal helpers
    // -----------------------------------------------------------------------

    fn month_name<'a>(&self, table: &'a [String; 12], month: u32) -> &'a str {
        if (1..=12).contains(&month) {
            &table[(month - 1) as usize]
        } else {
            ""
        }
    }

    fn widest(table: &[String]) -> usize {
        table
            .iter()
            .map(|name| name.chars().count())
            .max()
            .unwrap_or(0)
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::en()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
