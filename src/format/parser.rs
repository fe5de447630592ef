//! Format-pattern parser: tokens to typed, positioned date parts.
//!
//! Parses a pattern like `dd-MM-yy` into an ordered [`DateFormatParts`]
//! sequence. Positions are **character offsets in the rendered edit string**,
//! not the pattern: numeric day/month and two-digit-year parts occupy 2
//! cells, full-year parts 4, text parts as many cells as the widest locale
//! name of their class. Parts are contiguous, non-overlapping, and together
//! span the whole rendered string.
//!
//! Unknown tokens become literals; parsing never fails. An unparseable
//! pattern therefore degrades to a single run of literal parts.

use crate::format::locale::Locale;
use crate::format::tokenizer::{tokenize, Token};

// ---------------------------------------------------------------------------
// DateFormatPart
// ---------------------------------------------------------------------------

/// Which date component a part carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartKind {
    Day,
    Month,
    Year,
    Weekday,
    Literal,
}

/// How a part is rendered: numeric (minimum digits), zero-padded two-digit,
/// abbreviated name, or full name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartFormat {
    Numeric,
    TwoDigit,
    Short,
    Long,
}

/// One segment of a parsed format pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFormatPart {
    pub kind: PartKind,
    pub format: PartFormat,
    /// Start offset (chars) in the rendered string, inclusive.
    pub start: usize,
    /// End offset (chars) in the rendered string, exclusive.
    pub end: usize,
    /// Literal text; empty for non-literal parts.
    pub text: String,
}

impl DateFormatPart {
    /// Width of this part in rendered cells.
    pub fn width(&self) -> usize {
        self.end - self.start
    }

    /// Whether this part accepts user edits (day, month, year).
    ///
    /// Weekday parts are display-only: their value is derived from the date,
    /// so they are excluded from editing and completeness checks.
    pub fn is_editable(&self) -> bool {
        matches!(self.kind, PartKind::Day | PartKind::Month | PartKind::Year)
    }

    /// Whether this part renders as a name rather than digits.
    pub fn is_text(&self) -> bool {
        matches!(self.format, PartFormat::Short | PartFormat::Long)
            && self.kind != PartKind::Literal
    }

    /// Maximum numeric value for digit entry into this part.
    ///
    /// Commit-time validation applies the real calendar bounds; this is the
    /// per-keystroke cap (day 31, month 12, year by digit width).
    pub fn max_value(&self) -> u32 {
        match self.kind {
            PartKind::Day => 31,
            PartKind::Month => 12,
            PartKind::Year => {
                if self.format == PartFormat::TwoDigit {
                    99
                } else {
                    9999
                }
            }
            PartKind::Weekday | PartKind::Literal => 0,
        }
    }
}

// ---------------------------------------------------------------------------
// DateFormatParts
// ---------------------------------------------------------------------------

/// Ordered, immutable sequence of [`DateFormatPart`]s for one
/// (pattern, locale) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFormatParts {
    pattern: String,
    parts: Vec<DateFormatPart>,
    rendered_len: usize,
}

impl DateFormatParts {
    /// Parse a format pattern against a locale.
    ///
    /// Pure: the same (pattern, locale) always yields the same parts.
    pub fn parse(pattern: &str, locale: &Locale) -> Self {
        let mut parts: Vec<DateFormatPart> = Vec::new();
        let mut offset = 0usize;

        for (token, text) in tokenize(pattern) {
            let (kind, format, width, literal) = match token {
                Token::DayNumeric => (PartKind::Day, PartFormat::Numeric, 2, None),
                Token::DayTwoDigit => (PartKind::Day, PartFormat::TwoDigit, 2, None),
                Token::MonthNumeric => (PartKind::Month, PartFormat::Numeric, 2, None),
                Token::MonthTwoDigit => (PartKind::Month, PartFormat::TwoDigit, 2, None),
                Token::MonthShort => (
                    PartKind::Month,
                    PartFormat::Short,
                    locale.month_short_width(),
                    None,
                ),
                Token::MonthLong => (
                    PartKind::Month,
                    PartFormat::Long,
                    locale.month_long_width(),
                    None,
                ),
                Token::YearNumeric | Token::YearFour => {
                    (PartKind::Year, PartFormat::Numeric, 4, None)
                }
                Token::YearTwo => (PartKind::Year, PartFormat::TwoDigit, 2, None),
                Token::WeekdayShort => (
                    PartKind::Weekday,
                    PartFormat::Short,
                    locale.weekday_short_width(),
                    None,
                ),
                Token::WeekdayLong => (
                    PartKind::Weekday,
                    PartFormat::Long,
                    locale.weekday_long_width(),
                    None,
                ),
                Token::Quoted => {
                    // Strip the surrounding quotes; `''` renders nothing.
                    let inner: String = text[1..text.len() - 1].to_string();
                    if inner.is_empty() {
                        continue;
                    }
                    let width = inner.chars().count();
                    (PartKind::Literal, PartFormat::Numeric, width, Some(inner))
                }
                Token::Literal => {
                    let width = text.chars().count();
                    (PartKind::Literal, PartFormat::Numeric, width, Some(text))
                }
            };

            if let Some(literal_text) = literal {
                // Merge runs of adjacent literals into one part.
                if let Some(last) = parts.last_mut() {
                    if last.kind == PartKind::Literal {
                        last.text.push_str(&literal_text);
                        last.end += literal_text.chars().count();
                        offset = last.end;
                        continue;
                    }
                }
                parts.push(DateFormatPart {
                    kind,
                    format,
                    start: offset,
                    end: offset + width,
                    text: literal_text,
                });
            } else {
                parts.push(DateFormatPart {
                    kind,
                    format,
                    start: offset,
                    end: offset + width,
                    text: String::new(),
                });
            }
            offset += width;
        }

        Self {
            pattern: pattern.to_string(),
            rendered_len: offset,
            parts,
        }
    }

    /// The source pattern.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// All parts, in order.
    pub fn parts(&self) -> &[DateFormatPart] {
        &self.parts
    }

    /// Length in chars of any string rendered under this pattern.
    pub fn rendered_len(&self) -> usize {
        self.rendered_len
    }

    /// Editable parts (day/month/year), in order.
    pub fn editable(&self) -> impl Iterator<Item = &DateFormatPart> {
        self.parts.iter().filter(|part| part.is_editable())
    }

    /// The first editable part of the given kind.
    pub fn find(&self, kind: PartKind) -> Option<&DateFormatPart> {
        self.parts.iter().find(|part| part.kind == kind)
    }

    /// The editable part whose cells strictly contain `caret`.
    ///
    /// Used for typing: a caret sitting on a literal belongs to no part and
    /// must first advance to the next editable cell.
    pub fn editable_containing(&self, caret: usize) -> Option<&DateFormatPart> {
        self.editable()
            .find(|part| part.start <= caret && caret < part.end)
    }

    /// The editable part targeted by a spin at `caret`.
    ///
    /// Boundaries are inclusive on both sides so a caret resting just after
    /// a freshly-filled part still spins that part.
    pub fn spin_target(&self, caret: usize) -> Option<&DateFormatPart> {
        self.editable()
            .find(|part| part.start <= caret && caret <= part.end)
    }

    /// The first editable part starting at or after `caret`.
    pub fn next_editable_from(&self, caret: usize) -> Option<&DateFormatPart> {
        self.editable().find(|part| part.start >= caret)
    }

    /// The editable part after the given one, if any.
    pub fn editable_after(&self, part: &DateFormatPart) -> Option<&DateFormatPart> {
        self.editable().find(|candidate| candidate.start >= part.end)
    }

    /// Start position of the first editable part (caret home position).
    pub fn first_editable_start(&self) -> usize {
        self.editable().next().map_or(0, |part| part.start)
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(pattern: &str) -> DateFormatParts {
        DateFormatParts::parse(pattern, &Locale::en())
    }

    // ── Structure ────────────────────────────────────────────────────

    #[test]
    fn parts_are_contiguous_and_span_pattern() {
        let parts = parse("dd-MM-yy");
        let mut expected_start = 0;
        for part in parts.parts() {
            assert_eq!(part.start, expected_start);
            expected_start = part.end;
        }
        assert_eq!(expected_start, parts.rendered_len());
        assert_eq!(parts.rendered_len(), 8);
    }

    #[test]
    fn two_digit_pattern_layout() {
        let parts = parse("dd-MM-yy");
        let kinds: Vec<_> = parts.parts().iter().map(|p| p.kind).collect();
        assert_eq!(
            kinds,
            vec![
                PartKind::Day,
                PartKind::Literal,
                PartKind::Month,
                PartKind::Literal,
                PartKind::Year,
            ]
        );
        assert_eq!(parts.parts()[0].start..parts.parts()[0].end, 0..2);
        assert_eq!(parts.parts()[2].start..parts.parts()[2].end, 3..5);
        assert_eq!(parts.parts()[4].start..parts.parts()[4].end, 6..8);
    }

    #[test]
    fn numeric_parts_are_two_cells() {
        // d and M occupy two rendered cells even though the token is one char.
        let parts = parse("d/M/yyyy");
        assert_eq!(parts.parts()[0].width(), 2);
        assert_eq!(parts.parts()[2].width(), 2);
        assert_eq!(parts.parts()[4].width(), 4);
        assert_eq!(parts.rendered_len(), 10);
    }

    #[test]
    fn full_year_is_four_cells() {
        let parts = parse("yyyy");
        assert_eq!(parts.parts()[0].width(), 4);
        assert_eq!(parts.parts()[0].format, PartFormat::Numeric);
    }

    #[test]
    fn adjacent_literals_merge() {
        let parts = parse("EEE, dd");
        // Weekday, then ", " merged into one literal, then day.
        assert_eq!(parts.parts().len(), 3);
        assert_eq!(parts.parts()[1].kind, PartKind::Literal);
        assert_eq!(parts.parts()[1].text, ", ");
    }

    #[test]
    fn quoted_literal_strips_quotes() {
        let parts = parse("d' of 'MMMM");
        assert_eq!(parts.parts()[1].kind, PartKind::Literal);
        assert_eq!(parts.parts()[1].text, " of ");
        assert_eq!(parts.parts()[1].width(), 4);
    }

    #[test]
    fn text_month_width_from_locale() {
        let parts = parse("dd MMM");
        assert_eq!(parts.parts()[2].width(), 3);
        let parts = parse("dd MMMM");
        // September
        assert_eq!(parts.parts()[2].width(), 9);
    }

    #[test]
    fn unknown_tokens_become_literals() {
        let parts = parse("QQ-dd");
        assert_eq!(parts.parts()[0].kind, PartKind::Literal);
        assert_eq!(parts.parts()[0].text, "QQ-");
        assert_eq!(parts.parts()[1].kind, PartKind::Day);
    }

    #[test]
    fn all_literal_pattern_never_fails() {
        let parts = parse("::--::");
        assert_eq!(parts.parts().len(), 1);
        assert_eq!(parts.parts()[0].kind, PartKind::Literal);
        assert!(parts.editable().next().is_none());
    }

    #[test]
    fn empty_pattern() {
        let parts = parse("");
        assert!(parts.parts().is_empty());
        assert_eq!(parts.rendered_len(), 0);
        assert_eq!(parts.first_editable_start(), 0);
    }

    // ── Lookup ───────────────────────────────────────────────────────

    #[test]
    fn editable_containing_is_strict() {
        let parts = parse("dd-MM-yy");
        assert_eq!(parts.editable_containing(0).unwrap().kind, PartKind::Day);
        assert_eq!(parts.editable_containing(1).unwrap().kind, PartKind::Day);
        // Caret 2 sits on the literal separator.
        assert!(parts.editable_containing(2).is_none());
        assert_eq!(parts.editable_containing(3).unwrap().kind, PartKind::Month);
        assert_eq!(parts.editable_containing(7).unwrap().kind, PartKind::Year);
        assert!(parts.editable_containing(8).is_none());
    }

    #[test]
    fn spin_target_includes_boundaries() {
        let parts = parse("dd-MM-yy");
        assert_eq!(parts.spin_target(0).unwrap().kind, PartKind::Day);
        // Caret 2 is the day part's exclusive end: spin still hits the day.
        assert_eq!(parts.spin_target(2).unwrap().kind, PartKind::Day);
        assert_eq!(parts.spin_target(3).unwrap().kind, PartKind::Month);
        assert_eq!(parts.spin_target(7).unwrap().kind, PartKind::Year);
        assert_eq!(parts.spin_target(8).unwrap().kind, PartKind::Year);
    }

    #[test]
    fn spin_target_ignores_weekday() {
        let parts = parse("EEE dd");
        // Caret inside the weekday cells resolves to no spin target.
        assert!(parts.spin_target(1).is_none());
        assert_eq!(parts.spin_target(4).unwrap().kind, PartKind::Day);
    }

    #[test]
    fn next_editable_from_literal() {
        let parts = parse("dd-MM-yy");
        assert_eq!(parts.next_editable_from(2).unwrap().kind, PartKind::Month);
        assert!(parts.next_editable_from(7).is_none());
    }

    #[test]
    fn editable_after_chains_parts() {
        let parts = parse("dd-MM-yy");
        let day = parts.find(PartKind::Day).unwrap();
        let month = parts.editable_after(day).unwrap();
        assert_eq!(month.kind, PartKind::Month);
        let year = parts.editable_after(month).unwrap();
        assert_eq!(year.kind, PartKind::Year);
        assert!(parts.editable_after(year).is_none());
    }

    #[test]
    fn first_editable_start_skips_leading_literal() {
        let parts = parse("[dd]");
        assert_eq!(parts.first_editable_start(), 1);
    }

    // ── Part metadata ────────────────────────────────────────────────

    #[test]
    fn max_values_per_part() {
        let parts = parse("dd-MM-yy");
        assert_eq!(parts.find(PartKind::Day).unwrap().max_value(), 31);
        assert_eq!(parts.find(PartKind::Month).unwrap().max_value(), 12);
        assert_eq!(parts.find(PartKind::Year).unwrap().max_value(), 99);
        let parts = parse("yyyy");
        assert_eq!(parts.find(PartKind::Year).unwrap().max_value(), 9999);
    }

    #[test]
    fn weekday_is_not_editable() {
        let parts = parse("EEE dd");
        let weekday = parts.find(PartKind::Weekday).unwrap();
        assert!(!weekday.is_editable());
        assert!(weekday.is_text());
    }

    #[test]
    fn text_detection() {
        let parts = parse("MMM");
        assert!(parts.parts()[0].is_text());
        let parts = parse("MM");
        assert!(!parts.parts()[0].is_text());
    }

    #[test]
    fn same_input_same_output() {
        let a = parse("dd/MM/yyyy");
        let b = parse("dd/MM/yyyy");
        assert_eq!(a, b);
    }
}
