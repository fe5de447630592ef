//! logos-based date-format pattern tokenizer.
//!
//! Token priority in logos is determined by:
//! 1. Longest match wins (e.g. `dd` as DayTwoDigit beats two `d` tokens)
//! 2. Explicit priority breaks ties (the catch-all literal rule is lowest)
//!
//! Our ordering ensures:
//! - `MMMM` matches [`Token::MonthLong`], not `MM` + `MM`
//! - `EEEE` matches [`Token::WeekdayLong`], not three `E`s plus one
//! - any character outside the token grammar falls through to
//!   [`Token::Literal`] — an unknown pattern is never a parse error.

use logos::Logos;

/// Format-pattern token produced by the lexer.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    // ── Day ──────────────────────────────────────────────────────────

    /// Day of month, zero-padded: `dd`.
    #[token("dd")]
    DayTwoDigit,

    /// Day of month, minimum digits: `d`.
    #[token("d")]
    DayNumeric,

    // ── Month ────────────────────────────────────────────────────────

    /// Full month name: `MMMM`.
    #[token("MMMM")]
    MonthLong,

    /// Abbreviated month name: `MMM`.
    #[token("MMM")]
    MonthShort,

    /// Month number, zero-padded: `MM`.
    #[token("MM")]
    MonthTwoDigit,

    /// Month number, minimum digits: `M`.
    #[token("M")]
    MonthNumeric,

    // ── Year ─────────────────────────────────────────────────────────

    /// Four-digit year: `yyyy`.
    #[token("yyyy")]
    YearFour,

    /// Two-digit year: `yy`.
    #[token("yy")]
    YearTwo,

    /// Year, minimum digits: `y`.
    #[token("y")]
    YearNumeric,

    // ── Weekday ──────────────────────────────────────────────────────

    /// Full weekday name: `EEEE`.
    #[token("EEEE")]
    WeekdayLong,

    /// Abbreviated weekday name: `E`, `EE`, or `EEE`.
    #[regex("E{1,3}")]
    WeekdayShort,

    // ── Literals ─────────────────────────────────────────────────────

    /// Quoted literal text: `'of'` renders as `of`.
    #[regex(r"'[^']*'")]
    Quoted,

    /// Any other single character: separators, spaces, unknown tokens.
    #[regex(r".", priority = 0)]
    Literal,
}

/// Tokenize a format pattern into a vector of `(Token, &str)` pairs.
///
/// There is no whitespace skipping — spaces in a date pattern are literal
/// separators. Tokens that fail to lex are skipped.
pub fn tokenize(pattern: &str) -> Vec<(Token, String)> {
    let lexer = Token::lexer(pattern);
    lexer
        .spanned()
        .filter_map(|(result, span)| {
            result.ok().map(|token| (token, pattern[span].to_string()))
        })
        .collect()
}
