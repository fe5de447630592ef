//! Input mask and prompt string derived from parsed format parts.
//!
//! The mask shows one placeholder cell per expected character of each
//! editable part (`N` for digits, `A` for name cells) and copies literals
//! verbatim. The prompt string is the mask with every placeholder replaced
//! by the prompt character — the "empty" display value. Both are pure
//! functions of the parts and the prompt character.
//!
//! Edit-mode rendering keeps every part at its fixed cell width so the
//! buffer length never changes during an edit session.

use chrono::{Datelike, NaiveDate};

use crate::format::locale::Locale;
use crate::format::parser::{DateFormatParts, PartFormat, PartKind};

/// Placeholder glyph shown for an unfilled cell unless configured otherwise.
pub const DEFAULT_PROMPT_CHAR: char = '_';

// ---------------------------------------------------------------------------
// Completeness
// ---------------------------------------------------------------------------

/// How much of the buffer's editable parts are filled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completeness {
    /// No editable part has any filled cell.
    Empty,
    /// Some editable parts are filled or partly filled, others are not.
    Partial,
    /// Every editable part is fully filled.
    Complete,
}

// ---------------------------------------------------------------------------
// InputMask
// ---------------------------------------------------------------------------

/// The editable input mask and its prompt string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputMask {
    mask: String,
    prompt: String,
    prompt_char: char,
}

impl InputMask {
    /// Derive the mask and prompt string from parsed parts.
    pub fn new(parts: &DateFormatParts, prompt_char: char) -> Self {
        let mut mask = String::with_capacity(parts.rendered_len());
        let mut prompt = String::with_capacity(parts.rendered_len());

        for part in parts.parts() {
            match part.kind {
                PartKind::Literal => {
                    mask.push_str(&part.text);
                    prompt.push_str(&part.text);
                }
                _ => {
                    let cell = if part.is_text() { 'A' } else { 'N' };
                    for _ in 0..part.width() {
                        mask.push(cell);
                        prompt.push(prompt_char);
                    }
                }
            }
        }

        Self {
            mask,
            prompt,
            prompt_char,
        }
    }

    /// The mask string, e.g. `NN-NN-NN` for `dd-MM-yy`.
    pub fn mask(&self) -> &str {
        &self.mask
    }

    /// The mask with placeholders replaced by the prompt character.
    pub fn prompt_string(&self) -> &str {
        &self.prompt
    }

    /// The configured prompt character.
    pub fn prompt_char(&self) -> char {
        self.prompt_char
    }

    /// Mask length in chars; equals the rendered length of any date under
    /// the same pattern.
    pub fn len(&self) -> usize {
        self.mask.chars().count()
    }

    /// Whether the mask has no cells at all (empty pattern).
    pub fn is_empty(&self) -> bool {
        self.mask.is_empty()
    }

    /// Render a date into an edit-mode buffer: every part at its fixed cell
    /// width, numeric parts zero-padded, names padded with trailing prompt
    /// characters.
    pub fn render_date(
        &self,
        date: NaiveDate,
        parts: &DateFormatParts,
        locale: &Locale,
    ) -> String {
        let mut out = String::with_capacity(self.len());

        for part in parts.parts() {
            match part.kind {
                PartKind::Day => out.push_str(&format!("{:02}", date.day())),
                PartKind::Month => match part.format {
                    PartFormat::Numeric | PartFormat::TwoDigit => {
                        out.push_str(&format!("{:02}", date.month()));
                    }
                    PartFormat::Short => {
                        self.push_padded(&mut out, locale.month_short(date.month()), part.width());
                    }
                    PartFormat::Long => {
                        self.push_padded(&mut out, locale.month_long(date.month()), part.width());
                    }
                },
                PartKind::Year => match part.format {
                    PartFormat::TwoDigit => {
                        out.push_str(&format!("{:02}", date.year().rem_euclid(100)));
                    }
                    _ => out.push_str(&format!("{:04}", date.year())),
                },
                PartKind::Weekday => {
                    let name = match part.format {
                        PartFormat::Long => locale.weekday_long(date.weekday()),
                        _ => locale.weekday_short(date.weekday()),
                    };
                    self.push_padded(&mut out, name, part.width());
                }
                PartKind::Literal => out.push_str(&part.text),
            }
        }

        out
    }

    /// Classify a buffer: scan every editable part for prompt characters.
    ///
    /// Weekday and literal parts never count; a pattern without editable
    /// parts is always `Empty`.
    pub fn classify(&self, buffer: &str, parts: &DateFormatParts) -> Completeness {
        let cells: Vec<char> = buffer.chars().collect();
        let mut any_editable = false;
        let mut all_clean = true;
        let mut all_empty = true;

        for part in parts.editable() {
            any_editable = true;
            for index in part.start..part.end {
                let is_prompt = cells
                    .get(index)
                    .map_or(true, |cell| *cell == self.prompt_char);
                if is_prompt {
                    all_clean = false;
                } else {
                    all_empty = false;
                }
            }
        }

        if !any_editable || all_empty {
            Completeness::Empty
        } else if all_clean {
            Completeness::Complete
        } else {
            Completeness::Partial
        }
    }

    // -----------------------------------------------------------------------
    // Internal helpers
    // -----------------------------------------------------------------------

    /// Push a name padded with trailing prompt chars to the cell width.
    fn push_padded(&self, out: &mut String, name: &str, width: usize) {
        let mut written = 0;
        for ch in name.chars().take(width) {
            out.push(ch);
            written += 1;
        }
        for _ in written..width {
            out.push(self.prompt_char);
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
