//! The date state machine: edit events in, display strings and committed
//! values out.
//!
//! A [`DateEditor`] owns the edit buffer, caret, and committed value for one
//! input control. Every operation runs synchronously within the event that
//! triggered it. Malformed keystrokes are dropped without any signal; only a
//! complete-but-invalid date or a complete-but-disabled date produce
//! observable [`Notification`]s. Nothing in here can fail the host.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};

use crate::calendar::{
    date_in_ranges, days_in_month, full_year_from_two_digit, DateRangeDescriptor, MAX_MONTH,
    MAX_YEAR, MIN_YEAR,
};
use crate::editor::buffer::EditBuffer;
use crate::editor::notify::{Notification, Notifier};
use crate::editor::spin::step;
use crate::event::input::EditEvent;
use crate::format::{format_date, DateFormatPart, DateFormatParts, Locale, PartFormat, PartKind};
use crate::mask::{Completeness, InputMask, DEFAULT_PROMPT_CHAR};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Why a complete buffer failed to parse into a date.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateParseError {
    #[error("{part:?} part is not completely filled")]
    IncompletePart { part: PartKind },
    #[error("{part:?} value {value} is out of range")]
    OutOfRange { part: PartKind, value: u32 },
    #[error("day {day} does not exist in {year:04}-{month:02}")]
    InvalidCalendarDate { year: i32, month: u32, day: u32 },
    #[error("pattern has no year part and no committed value to take it from")]
    MissingYear,
}

// ---------------------------------------------------------------------------
// Commit outcome
// ---------------------------------------------------------------------------

/// Result of a commit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    /// A new value was committed (value-committed was notified).
    Committed(NaiveDateTime),
    /// The buffer re-parsed to the already-committed value; no notification.
    Unchanged(NaiveDateTime),
    /// Complete but not a real calendar date (validation-failed notified).
    Invalid,
    /// Complete but matched by the disabled-dates list (notified).
    Disabled(NaiveDateTime),
    /// The buffer still has unfilled parts; nothing happened.
    Incomplete,
}

// ---------------------------------------------------------------------------
// EditorConfig
// ---------------------------------------------------------------------------

/// Plain configuration for a [`DateEditor`].
///
/// Replaces the reactive property setters of a host-framework component:
/// construct one explicitly, hand it to [`DateEditor::new`], and use the
/// editor's `set_*` operations to reconfigure later.
///
/// # Examples
///
/// ```ignore
/// let editor = DateEditor::new(
///     EditorConfig::new()
///         .with_pattern("dd-MM-yy")
///         .with_display_pattern("dd.MM.y")
///         .with_spin_loop(false),
/// );
/// ```
#[derive(Debug, Clone)]
pub struct EditorConfig {
    pattern: Option<String>,
    display_pattern: Option<String>,
    locale: Locale,
    prompt_char: char,
    spin_loop: bool,
    disabled_dates: Vec<DateRangeDescriptor>,
    special_dates: Vec<DateRangeDescriptor>,
}

impl EditorConfig {
    /// Configuration with locale defaults: `en`, the locale's default
    /// pattern, prompt `_`, spin loop on, no disabled or special dates.
    pub fn new() -> Self {
        Self {
            pattern: None,
            display_pattern: None,
            locale: Locale::en(),
            prompt_char: DEFAULT_PROMPT_CHAR,
            spin_loop: true,
            disabled_dates: Vec::new(),
            special_dates: Vec::new(),
        }
    }

    /// Set the edit pattern (builder pattern).
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    /// Set a separate display pattern used when the editor is not focused.
    pub fn with_display_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.display_pattern = Some(pattern.into());
        self
    }

    /// Set the locale.
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Set the prompt character.
    pub fn with_prompt_char(mut self, prompt_char: char) -> Self {
        self.prompt_char = prompt_char;
        self
    }

    /// Spin behavior at part boundaries: wrap when `true`, clamp otherwise.
    pub fn with_spin_loop(mut self, spin_loop: bool) -> Self {
        self.spin_loop = spin_loop;
        self
    }

    /// Set the disabled-dates list.
    pub fn with_disabled_dates(mut self, ranges: Vec<DateRangeDescriptor>) -> Self {
        self.disabled_dates = ranges;
        self
    }

    /// Set the special-dates list (a styling query; never affects commits).
    pub fn with_special_dates(mut self, ranges: Vec<DateRangeDescriptor>) -> Self {
        self.special_dates = ranges;
        self
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// DateEditor
// ---------------------------------------------------------------------------

/// Masked date editor session: buffer, caret, committed value.
#[derive(Debug)]
pub struct DateEditor {
    pattern: String,
    display_pattern: Option<String>,
    locale: Locale,
    prompt_char: char,
    spin_loop: bool,
    disabled_dates: Vec<DateRangeDescriptor>,
    special_dates: Vec<DateRangeDescriptor>,

    parts: DateFormatParts,
    display_parts: DateFormatParts,
    mask: InputMask,

    buffer: EditBuffer,
    caret: usize,
    editing: bool,
    value: Option<NaiveDateTime>,
    /// Rejected complete-but-invalid text, kept so the user can correct it.
    invalid_text: Option<String>,

    notifier: Notifier,
}

impl DateEditor {
    /// Build an editor from explicit configuration.
    pub fn new(config: EditorConfig) -> Self {
        let pattern = config
            .pattern
            .unwrap_or_else(|| config.locale.default_pattern().to_string());
        let parts = DateFormatParts::parse(&pattern, &config.locale);
        let display_parts = match &config.display_pattern {
            Some(display) => DateFormatParts::parse(display, &config.locale),
            None => parts.clone(),
        };
        let mask = InputMask::new(&parts, config.prompt_char);
        let buffer = EditBuffer::from_str(mask.prompt_string());
        let caret = parts.first_editable_start();

        Self {
            pattern,
            display_pattern: config.display_pattern,
            locale: config.locale,
            prompt_char: config.prompt_char,
            spin_loop: config.spin_loop,
            disabled_dates: config.disabled_dates,
            special_dates: config.special_dates,
            parts,
            display_parts,
            mask,
            buffer,
            caret,
            editing: false,
            value: None,
            invalid_text: None,
            notifier: Notifier::new(),
        }
    }

    /// Editor over the given pattern with all other settings defaulted.
    pub fn with_pattern(pattern: impl Into<String>) -> Self {
        Self::new(EditorConfig::new().with_pattern(pattern))
    }

    // -----------------------------------------------------------------------
    // Exposed state
    // -----------------------------------------------------------------------

    /// The string to render in the input right now.
    ///
    /// While editing this is the live buffer. Otherwise it is retained
    /// invalid text, the committed value under the display pattern, or the
    /// prompt string.
    pub fn display(&self) -> String {
        if self.editing {
            return self.buffer.display();
        }
        if let Some(text) = &self.invalid_text {
            return text.clone();
        }
        match self.value {
            Some(value) => format_date(value.date(), &self.display_parts, &self.locale),
            None => self.mask.prompt_string().to_string(),
        }
    }

    /// Where the host should place the caret.
    pub fn caret(&self) -> usize {
        self.caret
    }

    /// The authoritative committed value.
    pub fn value(&self) -> Option<NaiveDateTime> {
        self.value
    }

    /// Completeness of the current buffer (or of the committed state when
    /// not editing).
    pub fn completeness(&self) -> Completeness {
        if self.editing {
            self.mask.classify(&self.buffer.display(), &self.parts)
        } else if self.value.is_some() || self.invalid_text.is_some() {
            Completeness::Complete
        } else {
            Completeness::Empty
        }
    }

    /// Whether an edit session is active.
    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// The derived input mask.
    pub fn input_mask(&self) -> &InputMask {
        &self.mask
    }

    /// The parsed edit-pattern parts.
    pub fn parts(&self) -> &DateFormatParts {
        &self.parts
    }

    /// Whether the disabled-dates list matches the date.
    pub fn is_disabled(&self, date: NaiveDate) -> bool {
        date_in_ranges(date, &self.disabled_dates)
    }

    /// Whether the special-dates list matches the date.
    pub fn is_special(&self, date: NaiveDate) -> bool {
        date_in_ranges(date, &self.special_dates)
    }

    /// Register a notification subscriber.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&Notification) + 'static) {
        self.notifier.subscribe(subscriber);
    }

    // -----------------------------------------------------------------------
    // Event dispatch
    // -----------------------------------------------------------------------

    /// Apply one normalized input event.
    pub fn handle(&mut self, event: EditEvent) -> Completeness {
        match event {
            EditEvent::Focus => {
                self.focus();
                self.completeness()
            }
            EditEvent::Blur => self.blur(),
            EditEvent::Char(ch) => self.type_char(ch),
            EditEvent::Backspace => self.backspace(),
            EditEvent::Delete => self.delete(),
            EditEvent::SpinUp => self.spin(1),
            EditEvent::SpinDown => self.spin(-1),
            EditEvent::Wheel { delta_y } => {
                // Wheel spins only during an active edit session, and a
                // positive (downward) delta decrements.
                if self.editing {
                    self.spin(if delta_y > 0 { -1 } else { 1 })
                } else {
                    self.completeness()
                }
            }
            EditEvent::SetCaret(position) => {
                self.set_caret(position);
                self.completeness()
            }
            EditEvent::CaretLeft => {
                self.set_caret(self.caret.saturating_sub(1));
                self.completeness()
            }
            EditEvent::CaretRight => {
                self.set_caret(self.caret + 1);
                self.completeness()
            }
        }
    }

    // -----------------------------------------------------------------------
    // Operations
    // -----------------------------------------------------------------------

    /// Begin an edit session: seed the buffer from retained invalid text,
    /// the committed value, or the prompt string; caret to the first
    /// editable cell.
    pub fn focus(&mut self) {
        self.editing = true;
        self.buffer = match (&self.invalid_text, self.value) {
            (Some(text), _) => EditBuffer::from_str(text),
            (None, Some(value)) => EditBuffer::from_str(&self.mask.render_date(
                value.date(),
                &self.parts,
                &self.locale,
            )),
            (None, None) => EditBuffer::from_str(self.mask.prompt_string()),
        };
        self.caret = self.parts.first_editable_start();
    }

    /// End the edit session.
    ///
    /// A complete buffer goes through the commit flow; a partial or empty
    /// buffer is discarded — no partial edit survives a blur.
    pub fn blur(&mut self) -> Completeness {
        if !self.editing {
            return self.completeness();
        }
        let completeness = self.completeness();
        match completeness {
            Completeness::Complete => {
                self.commit_internal();
            }
            Completeness::Partial | Completeness::Empty => {
                self.invalid_text = None;
            }
        }
        self.editing = false;
        self.buffer = EditBuffer::from_str(self.mask.prompt_string());
        self.caret = self.parts.first_editable_start();
        completeness
    }

    /// Overwrite-mode digit entry at the caret.
    ///
    /// Non-digits, digits into text parts, and digits that would push the
    /// active part past its maximum are ignored. A first digit too large to
    /// start a two-cell part (day 4–9, month 2–9) is auto-completed with a
    /// leading zero. Filling a part advances the caret to the next editable
    /// part; a completed buffer triggers a commit attempt.
    pub fn type_char(&mut self, ch: char) -> Completeness {
        if !self.editing {
            self.focus();
        }
        let Some(digit) = ch.to_digit(10) else {
            return self.completeness();
        };

        let part = match self.parts.editable_containing(self.caret) {
            Some(part) => part.clone(),
            None => match self.parts.next_editable_from(self.caret) {
                Some(part) => {
                    let part = part.clone();
                    self.caret = part.start;
                    part
                }
                None => return self.completeness(),
            },
        };
        if part.is_text() {
            return self.completeness();
        }

        let max = part.max_value();
        let rel = self.caret - part.start;

        // First digit too large for a two-cell part: prefix the zero and
        // consider the part filled.
        if rel == 0 && part.width() == 2 && digit * 10 > max {
            self.buffer.write_numeric(&part, digit);
            self.advance_past(&part);
            return self.finish_edit();
        }

        // Would the part exceed its maximum with this digit in place?
        // Unfilled cells count as zero.
        let mut cells: Vec<char> = self.buffer.part_text(&part).chars().collect();
        if rel < cells.len() {
            cells[rel] = ch;
        }
        let candidate = cells.iter().fold(0u32, |acc, cell| {
            acc * 10 + cell.to_digit(10).unwrap_or(0)
        });
        if candidate > max {
            return self.completeness();
        }

        self.buffer.set(self.caret, ch);
        self.caret += 1;
        if self.caret >= part.end {
            self.advance_past(&part);
        }
        self.finish_edit()
    }

    /// Clear the part under the caret back to prompt characters.
    ///
    /// Any partial edit invalidates the committed value until the buffer is
    /// re-completed.
    pub fn backspace(&mut self) -> Completeness {
        self.clear_part_at_caret()
    }

    /// Same part-level clearing as [`DateEditor::backspace`].
    pub fn delete(&mut self) -> Completeness {
        self.clear_part_at_caret()
    }

    /// Spin the part under the caret by `delta`.
    ///
    /// Month wraps or clamps at 1..=12 per the spin-loop flag; day at
    /// 1..=days-in-month with month/year context resolved from the buffer,
    /// then the committed value; year always clamps. An empty part is seeded
    /// from the committed value's component (day/month fall back to their
    /// minimum, year to 2000) without applying the delta. A buffer completed
    /// by a spin triggers a commit attempt.
    pub fn spin(&mut self, delta: i32) -> Completeness {
        if !self.editing {
            self.focus();
        }
        let Some(part) = self.parts.spin_target(self.caret).cloned() else {
            return self.completeness();
        };

        match part.kind {
            PartKind::Day => self.spin_day(&part, delta),
            PartKind::Month => self.spin_month(&part, delta),
            PartKind::Year => self.spin_year(&part, delta),
            PartKind::Weekday | PartKind::Literal => {}
        }
        self.finish_edit()
    }

    /// Attempt to commit the current buffer. Only complete buffers are
    /// considered; see [`CommitOutcome`].
    pub fn commit(&mut self) -> CommitOutcome {
        self.commit_internal()
    }

    /// Replace the committed value programmatically.
    pub fn set_value(&mut self, value: Option<NaiveDateTime>) {
        self.value = value;
        self.invalid_text = None;
        if self.editing {
            self.focus();
        }
    }

    /// Move the caret, clamped to the buffer.
    pub fn set_caret(&mut self, position: usize) {
        self.caret = position.min(self.mask.len());
    }

    // -----------------------------------------------------------------------
    // Reconfiguration
    // -----------------------------------------------------------------------

    /// Replace the edit pattern. Discards any in-flight edit.
    pub fn set_pattern(&mut self, pattern: impl Into<String>) {
        self.pattern = pattern.into();
        self.rebuild();
    }

    /// Replace or clear the display pattern.
    pub fn set_display_pattern(&mut self, pattern: Option<String>) {
        self.display_pattern = pattern;
        self.rebuild();
    }

    /// Replace the locale. Discards any in-flight edit.
    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
        self.rebuild();
    }

    /// Replace the prompt character. Discards any in-flight edit.
    pub fn set_prompt_char(&mut self, prompt_char: char) {
        self.prompt_char = prompt_char;
        self.rebuild();
    }

    /// Toggle wrap-vs-clamp spin behavior.
    pub fn set_spin_loop(&mut self, spin_loop: bool) {
        self.spin_loop = spin_loop;
    }

    /// Replace the disabled-dates list.
    pub fn set_disabled_dates(&mut self, ranges: Vec<DateRangeDescriptor>) {
        self.disabled_dates = ranges;
    }

    /// Replace the special-dates list.
    pub fn set_special_dates(&mut self, ranges: Vec<DateRangeDescriptor>) {
        self.special_dates = ranges;
    }

    // -----------------------------------------------------------------------
    // Internal helpers
    // -----------------------------------------------------------------------

    /// Recompute parts and mask after reconfiguration; in-flight edits and
    /// retained invalid text no longer match the geometry and are dropped.
    fn rebuild(&mut self) {
        self.parts = DateFormatParts::parse(&self.pattern, &self.locale);
        self.display_parts = match &self.display_pattern {
            Some(display) => DateFormatParts::parse(display, &self.locale),
            None => self.parts.clone(),
        };
        self.mask = InputMask::new(&self.parts, self.prompt_char);
        self.buffer = EditBuffer::from_str(self.mask.prompt_string());
        self.caret = self.parts.first_editable_start();
        self.editing = false;
        self.invalid_text = None;
    }

    /// Caret to the start of the editable part after `part` (or its end).
    fn advance_past(&mut self, part: &DateFormatPart) {
        self.caret = self
            .parts
            .editable_after(part)
            .map_or(part.end, |next| next.start);
    }

    /// Classify, committing if the edit made the buffer complete.
    fn finish_edit(&mut self) -> Completeness {
        let completeness = self.mask.classify(&self.buffer.display(), &self.parts);
        if completeness == Completeness::Complete {
            self.commit_internal();
        }
        completeness
    }

    fn clear_part_at_caret(&mut self) -> Completeness {
        if !self.editing {
            self.focus();
        }
        let part = self
            .parts
            .spin_target(self.caret)
            .or_else(|| {
                self.parts
                    .editable()
                    .filter(|part| part.end <= self.caret)
                    .last()
            })
            .cloned();
        let Some(part) = part else {
            return self.completeness();
        };
        self.buffer.clear_part(&part, self.prompt_char);
        self.caret = part.start;
        self.value = None;
        self.completeness()
    }

    fn spin_day(&mut self, part: &DateFormatPart, delta: i32) {
        let seed = self.value.map(|value| value.day());
        let current = match self.buffer.read_numeric(part, self.prompt_char) {
            Some(current) => current,
            None => {
                self.buffer.write_numeric(part, seed.unwrap_or(1));
                return;
            }
        };
        let year = self
            .buffer_year()
            .or_else(|| self.value.map(|value| value.year()))
            .unwrap_or(2000);
        let month = self
            .buffer_month()
            .or_else(|| self.value.map(|value| value.month()))
            .unwrap_or(0);
        let max = days_in_month(year, month);
        let next = step(current as i64, 1, max as i64, delta as i64, self.spin_loop);
        self.buffer.write_numeric(part, next as u32);
    }

    fn spin_month(&mut self, part: &DateFormatPart, delta: i32) {
        let seed = self.value.map(|value| value.month());
        let current = match self.read_month(part) {
            Some(current) => current,
            None => {
                self.write_month(part, seed.unwrap_or(1));
                return;
            }
        };
        let next = step(current as i64, 1, MAX_MONTH as i64, delta as i64, self.spin_loop);
        self.write_month(part, next as u32);
    }

    fn spin_year(&mut self, part: &DateFormatPart, delta: i32) {
        let seed = self.value.map(|value| value.year());
        let current = match self.buffer.read_numeric(part, self.prompt_char) {
            Some(raw) => {
                if part.format == PartFormat::TwoDigit {
                    full_year_from_two_digit(raw)
                } else {
                    raw as i32
                }
            }
            None => {
                self.write_year(part, seed.unwrap_or(2000));
                return;
            }
        };
        // The year has no wraparound; it clamps at its representable range.
        let next = step(
            current as i64,
            MIN_YEAR as i64,
            MAX_YEAR as i64,
            delta as i64,
            false,
        );
        self.write_year(part, next as i32);
    }

    fn write_year(&mut self, part: &DateFormatPart, year: i32) {
        let rendered = if part.format == PartFormat::TwoDigit {
            year.rem_euclid(100) as u32
        } else {
            year.clamp(MIN_YEAR, MAX_YEAR) as u32
        };
        self.buffer.write_numeric(part, rendered);
    }

    fn read_month(&self, part: &DateFormatPart) -> Option<u32> {
        if part.is_text() {
            let text = self.buffer.part_text(part);
            let name: String = text
                .chars()
                .filter(|ch| *ch != self.prompt_char)
                .collect();
            self.locale.month_from_name(name.trim())
        } else {
            self.buffer.read_numeric(part, self.prompt_char)
        }
    }

    fn write_month(&mut self, part: &DateFormatPart, month: u32) {
        match part.format {
            PartFormat::Short => {
                let name = self.locale.month_short(month).to_string();
                self.buffer.write_name(part, &name, self.prompt_char);
            }
            PartFormat::Long => {
                let name = self.locale.month_long(month).to_string();
                self.buffer.write_name(part, &name, self.prompt_char);
            }
            PartFormat::Numeric | PartFormat::TwoDigit => {
                self.buffer.write_numeric(part, month);
            }
        }
    }

    /// Month context from the buffer, for day bounds.
    fn buffer_month(&self) -> Option<u32> {
        let part = self.parts.find(PartKind::Month)?.clone();
        self.read_month(&part)
    }

    /// Year context from the buffer, for day bounds (leap Februaries).
    fn buffer_year(&self) -> Option<i32> {
        let part = self.parts.find(PartKind::Year)?;
        let raw = self.buffer.read_numeric(part, self.prompt_char)?;
        Some(if part.format == PartFormat::TwoDigit {
            full_year_from_two_digit(raw)
        } else {
            raw as i32
        })
    }

    /// Parse the buffer into a calendar date. Range checks run per part
    /// before chrono has the final say on the calendar combination.
    fn parse_buffer(&self) -> Result<NaiveDate, DateParseError> {
        let day = match self.parts.find(PartKind::Day) {
            Some(part) => self
                .buffer
                .read_numeric(part, self.prompt_char)
                .ok_or(DateParseError::IncompletePart { part: PartKind::Day })?,
            None => self.value.map_or(1, |value| value.day()),
        };
        let month = match self.parts.find(PartKind::Month) {
            Some(part) => self
                .read_month(part)
                .ok_or(DateParseError::IncompletePart {
                    part: PartKind::Month,
                })?,
            None => self.value.map_or(1, |value| value.month()),
        };
        let year = match self.parts.find(PartKind::Year) {
            Some(part) => {
                let raw = self
                    .buffer
                    .read_numeric(part, self.prompt_char)
                    .ok_or(DateParseError::IncompletePart {
                        part: PartKind::Year,
                    })?;
                if part.format == PartFormat::TwoDigit {
                    full_year_from_two_digit(raw)
                } else {
                    raw as i32
                }
            }
            None => self.value.map(|value| value.year()).ok_or(DateParseError::MissingYear)?,
        };

        if !(1..=MAX_MONTH).contains(&month) {
            return Err(DateParseError::OutOfRange {
                part: PartKind::Month,
                value: month,
            });
        }
        if !(1..=31).contains(&day) {
            return Err(DateParseError::OutOfRange {
                part: PartKind::Day,
                value: day,
            });
        }
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(DateParseError::OutOfRange {
                part: PartKind::Year,
                value: year.max(0) as u32,
            });
        }

        NaiveDate::from_ymd_opt(year, month, day).ok_or(DateParseError::InvalidCalendarDate {
            year,
            month,
            day,
        })
    }

    /// The commit flow: range checks, calendar construction, disabled-dates
    /// check, then value replacement with time-of-day carried forward.
    fn commit_internal(&mut self) -> CommitOutcome {
        if self.mask.classify(&self.buffer.display(), &self.parts) != Completeness::Complete {
            return CommitOutcome::Incomplete;
        }

        let text = self.buffer.display();
        let date = match self.parse_buffer() {
            Ok(date) => date,
            Err(_) => {
                self.invalid_text = Some(text.clone());
                let notification = Notification::ValidationFailed {
                    rejected: text,
                    previous: self.value,
                };
                self.notifier.emit(&notification);
                return CommitOutcome::Invalid;
            }
        };

        let time = self.value.map_or(NaiveTime::MIN, |value| value.time());
        let candidate = NaiveDateTime::new(date, time);

        if date_in_ranges(date, &self.disabled_dates) {
            let notification = Notification::DisabledDateRejected { candidate };
            self.notifier.emit(&notification);
            return CommitOutcome::Disabled(candidate);
        }

        self.invalid_text = None;
        if self.value == Some(candidate) {
            return CommitOutcome::Unchanged(candidate);
        }
        self.value = Some(candidate);
        let notification = Notification::ValueCommitted { value: candidate };
        self.notifier.emit(&notification);
        CommitOutcome::Committed(candidate)
    }
}

// ===========================================================================
// Tests
// ===========================================================================
