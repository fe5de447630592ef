//! The live edit buffer: a fixed-length array of cells.
//!
//! The buffer is exclusively owned by the editor session. All operations are
//! cell-indexed (char offsets), so part ranges from
//! [`DateFormatParts`](crate::format::DateFormatParts) index it directly.

use crate::format::parser::DateFormatPart;

/// Fixed-length cell buffer for one edit session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct EditBuffer {
    cells: Vec<char>,
}

impl EditBuffer {
    /// Build a buffer from an initial string (usually the prompt string or a
    /// rendered date).
    pub(crate) fn from_str(initial: &str) -> Self {
        Self {
            cells: initial.chars().collect(),
        }
    }

    /// The buffer as a display string.
    pub(crate) fn display(&self) -> String {
        self.cells.iter().collect()
    }

    /// Number of cells.
    pub(crate) fn len(&self) -> usize {
        self.cells.len()
    }

    /// Overwrite one cell; out-of-range indices are ignored.
    pub(crate) fn set(&mut self, index: usize, ch: char) {
        if let Some(cell) = self.cells.get_mut(index) {
            *cell = ch;
        }
    }

    /// The text of one part's cells.
    pub(crate) fn part_text(&self, part: &DateFormatPart) -> String {
        self.cells
            .iter()
            .skip(part.start)
            .take(part.width())
            .collect()
    }

    /// Whether every cell of the part is the prompt character.
    pub(crate) fn part_is_empty(&self, part: &DateFormatPart, prompt_char: char) -> bool {
        (part.start..part.end).all(|index| self.cells.get(index) == Some(&prompt_char))
    }

    /// Read a numeric part. `None` when any cell is still a prompt character
    /// or not a digit.
    pub(crate) fn read_numeric(&self, part: &DateFormatPart, prompt_char: char) -> Option<u32> {
        let mut value: u32 = 0;
        for index in part.start..part.end {
            let cell = *self.cells.get(index)?;
            if cell == prompt_char {
                return None;
            }
            let digit = cell.to_digit(10)?;
            value = value * 10 + digit;
        }
        Some(value)
    }

    /// Write a numeric part, zero-padded to the part width.
    pub(crate) fn write_numeric(&mut self, part: &DateFormatPart, value: u32) {
        let text = format!("{:0width$}", value, width = part.width());
        // Keep only the trailing cells if the value somehow overflows.
        let chars: Vec<char> = text.chars().collect();
        let skip = chars.len().saturating_sub(part.width());
        for (offset, ch) in chars.into_iter().skip(skip).enumerate() {
            self.set(part.start + offset, ch);
        }
    }

    /// Write a name into a text part, padded with trailing prompt chars.
    pub(crate) fn write_name(&mut self, part: &DateFormatPart, name: &str, prompt_char: char) {
        let mut offset = 0;
        for ch in name.chars().take(part.width()) {
            self.set(part.start + offset, ch);
            offset += 1;
        }
        while offset < part.width() {
            self.set(part.start + offset, prompt_char);
            offset += 1;
        }
    }

    /// Reset every cell of the part to the prompt character.
    pub(crate) fn clear_part(&mut self, part: &DateFormatPart, prompt_char: char) {
        for index in part.start..part.end {
            self.set(index, prompt_char);
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
