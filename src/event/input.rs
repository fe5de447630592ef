//! Normalized edit events wrapping crossterm for decoupling.
//!
//! The editor core never reads terminal or DOM state directly: it receives
//! [`EditEvent`]s from the host layer. Crossterm events are converted via
//! the `from_*` helpers so the rest of the crate never depends on crossterm
//! directly, and non-terminal hosts can construct [`EditEvent`]s themselves.

/// One normalized input event for a [`DateEditor`](crate::editor::DateEditor).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditEvent {
    /// The input gained focus: begin an edit session.
    Focus,
    /// The input lost focus: commit or discard.
    Blur,
    /// A character was typed at the caret.
    Char(char),
    /// Backspace: clear the part under the caret.
    Backspace,
    /// Delete: same part-level clearing as backspace.
    Delete,
    /// Arrow-up style spin (+1).
    SpinUp,
    /// Arrow-down style spin (-1).
    SpinDown,
    /// Mouse wheel with a raw delta; positive (scrolling down) spins -1.
    Wheel { delta_y: i32 },
    /// Host-driven caret placement (e.g. a mouse click in the input).
    SetCaret(usize),
    /// Move the caret one cell left.
    CaretLeft,
    /// Move the caret one cell right.
    CaretRight,
}

impl EditEvent {
    /// Convert a crossterm key event.
    ///
    /// Returns `None` for keys that have no meaning in a date editor
    /// (function keys, page movement, etc.).
    pub fn from_key(event: crossterm::event::KeyEvent) -> Option<Self> {
        match event.code {
            crossterm::event::KeyCode::Char(ch) => Some(EditEvent::Char(ch)),
            crossterm::event::KeyCode::Backspace => Some(EditEvent::Backspace),
            crossterm::event::KeyCode::Delete => Some(EditEvent::Delete),
            crossterm::event::KeyCode::Up => Some(EditEvent::SpinUp),
            crossterm::event::KeyCode::Down => Some(EditEvent::SpinDown),
            crossterm::event::KeyCode::Left => Some(EditEvent::CaretLeft),
            crossterm::event::KeyCode::Right => Some(EditEvent::CaretRight),
            crossterm::event::KeyCode::Home => Some(EditEvent::SetCaret(0)),
            _ => None,
        }
    }

    /// Convert a crossterm mouse event (scroll wheel only).
    pub fn from_mouse(event: crossterm::event::MouseEvent) -> Option<Self> {
        match event.kind {
            crossterm::event::MouseEventKind::ScrollUp => Some(EditEvent::SpinUp),
            crossterm::event::MouseEventKind::ScrollDown => Some(EditEvent::SpinDown),
            _ => None,
        }
    }

    /// Convert any crossterm event the editor can respond to.
    pub fn from_crossterm(event: crossterm::event::Event) -> Option<Self> {
        match event {
            crossterm::event::Event::Key(key) => Self::from_key(key),
            crossterm::event::Event::Mouse(mouse) => Self::from_mouse(mouse),
            crossterm::event::Event::FocusGained => Some(EditEvent::Focus),
            crossterm::event::Event::FocusLost => Some(EditEvent::Blur),
            _ => None,
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
