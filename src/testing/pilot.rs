//! Pilot: programmatic interaction with a headless editor.
//!
//! The `Pilot` wraps a [`Driver`] around a recording host and provides
//! methods to simulate user input (typing, spinning, focus changes), then
//! inspect the display, caret, committed value, notifications, and a
//! render transcript for snapshot-style assertions.

use std::cell::RefCell;
use std::rc::Rc;

use crate::editor::notify::Notification;
use crate::editor::{DateEditor, EditorConfig};
use crate::event::input::EditEvent;
use crate::host::{Driver, Host};
use crate::mask::Completeness;

// ---------------------------------------------------------------------------
// RecordingHost
// ---------------------------------------------------------------------------

/// Host that records every render and caret placement as transcript lines.
#[derive(Default)]
pub struct RecordingHost {
    lines: Vec<String>,
    pending: Option<String>,
}

impl RecordingHost {
    /// One line per dispatched event: `<display> [caret <n>]`.
    pub fn transcript(&self) -> String {
        self.lines.join("\n")
    }
}

impl Host for RecordingHost {
    fn render(&mut self, display: &str) {
        self.pending = Some(display.to_string());
    }

    fn place_caret(&mut self, caret: usize) {
        let display = self.pending.take().unwrap_or_default();
        self.lines.push(format!("{display} [caret {caret}]"));
    }
}

// ---------------------------------------------------------------------------
// Pilot
// ---------------------------------------------------------------------------

/// A headless editor driver for testing.
///
/// # Examples
///
/// ```ignore
/// let mut pilot = Pilot::new("dd-MM-yy");
/// pilot.focus();
/// pilot.type_text("201011");
/// assert_eq!(pilot.display(), "20-10-11");
/// ```
pub struct Pilot {
    driver: Driver<RecordingHost>,
    notifications: Rc<RefCell<Vec<Notification>>>,
}

impl Pilot {
    /// Pilot over an editor with the given pattern and default settings.
    pub fn new(pattern: &str) -> Self {
        Self::with_editor(DateEditor::new(EditorConfig::new().with_pattern(pattern)))
    }

    /// Pilot over a fully configured editor.
    pub fn with_editor(mut editor: DateEditor) -> Self {
        let notifications = Rc::new(RefCell::new(Vec::new()));
        let sink = notifications.clone();
        editor.subscribe(move |notification| sink.borrow_mut().push(notification.clone()));
        Self {
            driver: Driver::new(editor, RecordingHost::default()),
            notifications,
        }
    }

    // ── Input simulation ─────────────────────────────────────────────

    /// Send any event through the driver.
    pub fn send(&mut self, event: EditEvent) {
        self.driver.dispatch(event);
    }

    /// Begin an edit session.
    pub fn focus(&mut self) {
        self.send(EditEvent::Focus);
    }

    /// End the edit session.
    pub fn blur(&mut self) {
        self.send(EditEvent::Blur);
    }

    /// Type each character of `text` as an individual keystroke.
    pub fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            self.send(EditEvent::Char(ch));
        }
    }

    /// Press backspace.
    pub fn press_backspace(&mut self) {
        self.send(EditEvent::Backspace);
    }

    /// Press delete.
    pub fn press_delete(&mut self) {
        self.send(EditEvent::Delete);
    }

    /// Spin the part under the caret up.
    pub fn spin_up(&mut self) {
        self.send(EditEvent::SpinUp);
    }

    /// Spin the part under the caret down.
    pub fn spin_down(&mut self) {
        self.send(EditEvent::SpinDown);
    }

    /// Send a wheel tick with the given delta.
    pub fn wheel(&mut self, delta_y: i32) {
        self.send(EditEvent::Wheel { delta_y });
    }

    /// Place the caret.
    pub fn set_caret(&mut self, position: usize) {
        self.send(EditEvent::SetCaret(position));
    }

    // ── Inspection ───────────────────────────────────────────────────

    /// The editor's current display string.
    pub fn display(&self) -> String {
        self.driver.editor().display()
    }

    /// The editor's caret position.
    pub fn caret(&self) -> usize {
        self.driver.editor().caret()
    }

    /// The committed value.
    pub fn value(&self) -> Option<chrono::NaiveDateTime> {
        self.driver.editor().value()
    }

    /// Buffer completeness.
    pub fn completeness(&self) -> Completeness {
        self.driver.editor().completeness()
    }

    /// All notifications seen so far, in order.
    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications.borrow().clone()
    }

    /// The recorded render transcript.
    pub fn transcript(&self) -> String {
        self.driver.host().transcript()
    }

    /// Mutable access to the underlying editor for reconfiguration.
    pub fn editor_mut(&mut self) -> &mut DateEditor {
        self.driver.editor_mut()
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pilot_types_a_date() {
        let mut pilot = Pilot::new("dd-MM-yy");
        pilot.focus();
        pilot.type_text("201011");
        assert_eq!(pilot.display(), "20-10-11");
        assert_eq!(pilot.completeness(), Completeness::Complete);
        assert!(pilot.value().is_some());
    }

    #[test]
    fn pilot_records_transcript() {
        let mut pilot = Pilot::new("dd-MM-yy");
        pilot.focus();
        pilot.type_text("5");
        assert_eq!(
            pilot.transcript(),
            "__-__-__ [caret 0]\n05-__-__ [caret 3]"
        );
    }

    #[test]
    fn pilot_collects_notifications() {
        let mut pilot = Pilot::new("dd-MM-yyyy");
        pilot.focus();
        pilot.type_text("31022020");
        let notifications = pilot.notifications();
        assert_eq!(notifications.len(), 1);
        assert!(matches!(
            notifications[0],
            Notification::ValidationFailed { .. }
        ));
    }

    #[test]
    fn pilot_spin_sequence() {
        let mut pilot = Pilot::new("dd-MM-yy");
        pilot.focus();
        pilot.spin_up();
        assert_eq!(pilot.display(), "01-__-__");
        pilot.spin_up();
        assert_eq!(pilot.display(), "02-__-__");
        pilot.spin_down();
        pilot.spin_down();
        assert_eq!(pilot.display(), "31-__-__");
    }
}
