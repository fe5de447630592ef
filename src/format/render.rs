//! Display-mode date rendering.
//!
//! Renders a committed date through parsed parts for *display* (the value
//! shown when the editor is not focused): numeric parts unpadded, two-digit
//! parts zero-padded, text parts as locale names, weekday parts derived from
//! the date. Edit-mode rendering (fixed cell widths, prompt padding) lives in
//! [`crate::mask`].

use chrono::{Datelike, NaiveDate};

use crate::format::locale::Locale;
use crate::format::parser::{DateFormatParts, PartFormat, PartKind};

/// Format a date for display under the given parts and locale.
pub fn format_date(date: NaiveDate, parts: &DateFormatParts, locale: &Locale) -> String {
    let mut out = String::with_capacity(parts.rendered_len());

    for part in parts.parts() {
        match part.kind {
            PartKind::Day => match part.format {
                PartFormat::TwoDigit => out.push_str(&format!("{:02}", date.day())),
                _ => out.push_str(&date.day().to_string()),
            },
            PartKind::Month => match part.format {
                PartFormat::Numeric => out.push_str(&date.month().to_string()),
                PartFormat::TwoDigit => out.push_str(&format!("{:02}", date.month())),
                PartFormat::Short => out.push_str(locale.month_short(date.month())),
                PartFormat::Long => out.push_str(locale.month_long(date.month())),
            },
            PartKind::Year => match part.format {
                PartFormat::TwoDigit => {
                    out.push_str(&format!("{:02}", date.year().rem_euclid(100)));
                }
                _ => out.push_str(&date.year().to_string()),
            },
            PartKind::Weekday => match part.format {
                PartFormat::Long => out.push_str(locale.weekday_long(date.weekday())),
                _ => out.push_str(locale.weekday_short(date.weekday())),
            },
            PartKind::Literal => out.push_str(&part.text),
        }
    }

    out
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

    fn render(pattern: &str, d: NaiveDate) -> String {
        let locale = Locale::en();
        let parts = DateFormatParts::parse(pattern, &locale);
        format_date(d, &parts, &locale)
    }

    #[test]
    fn two_digit_parts_are_padded() {
        assert_eq!(render("dd-MM-yy", date(2011, 10, 20)), "20-10-11");
        assert_eq!(render("dd-MM-yy", date(2012, 3, 5)), "05-03-12");
    }

    #[test]
    fn numeric_parts_are_unpadded() {
        assert_eq!(render("d/M/y", date(2012, 3, 5)), "5/3/2012");
    }

    #[test]
    fn display_format_with_full_year() {
        // The spec scenario's blur display.
        assert_eq!(render("dd.MM.y", date(2012, 11, 21)), "21.11.2012");
    }

    #[test]
    fn month_names() {
        assert_eq!(render("dd MMM yyyy", date(2018, 9, 2)), "02 Sep 2018");
        assert_eq!(render("MMMM d, y", date(2018, 9, 2)), "September 2, 2018");
    }

    #[test]
    fn weekday_derived_from_date() {
        // 2018-09-02 was a Sunday.
        assert_eq!(render("EEE dd", date(2018, 9, 2)), "Sun 02");
        assert_eq!(render("EEEE", date(2018, 9, 2)), "Sunday");
    }

    #[test]
    fn quoted_literal_rendered_verbatim() {
        assert_eq!(render("d' of 'MMMM", date(2018, 9, 2)), "2 of September");
    }

    #[test]
    fn two_digit_year_wraps_century() {
        assert_eq!(render("yy", date(2000, 1, 1)), "00");
        assert_eq!(render("yy", date(1999, 1, 1)), "99");
    }
}
