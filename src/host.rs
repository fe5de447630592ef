//! Host capability interface and event driver.
//!
//! The editor core never touches a screen: it calls into a [`Host`] the
//! embedder provides. The [`Driver`] owns an editor/host pair and pumps
//! [`EditEvent`]s through them. Caret placement is scheduled on a deferred
//! queue that drains after the current event's render and before the next
//! event is accepted — the synchronous equivalent of "after the current
//! render pass, before the next user input".

use std::collections::VecDeque;

use crate::editor::DateEditor;
use crate::event::input::EditEvent;

// ---------------------------------------------------------------------------
// Host
// ---------------------------------------------------------------------------

/// What the embedding UI must be able to do for the editor.
pub trait Host {
    /// Show the display string in the input control.
    fn render(&mut self, display: &str);

    /// Place the caret. Called from the deferred queue, after `render`.
    fn place_caret(&mut self, caret: usize);
}

// ---------------------------------------------------------------------------
// Driver
// ---------------------------------------------------------------------------

/// Owns a [`DateEditor`] and a [`Host`], dispatching events between them.
pub struct Driver<H: Host> {
    editor: DateEditor,
    host: H,
    deferred: VecDeque<Box<dyn FnOnce(&mut H)>>,
}

impl<H: Host> Driver<H> {
    /// Pair an editor with a host.
    pub fn new(editor: DateEditor, host: H) -> Self {
        Self {
            editor,
            host,
            deferred: VecDeque::new(),
        }
    }

    /// Apply one event: editor first, then render, then the deferred caret
    /// placement. The queue is fully drained before this method returns, so
    /// deferred work always lands between this event and the next.
    pub fn dispatch(&mut self, event: EditEvent) {
        self.editor.handle(event);
        let display = self.editor.display();
        self.host.render(&display);

        let caret = self.editor.caret();
        self.defer(move |host| host.place_caret(caret));
        self.flush();
    }

    /// Queue work to run after the current render, before the next event.
    pub fn defer(&mut self, task: impl FnOnce(&mut H) + 'static) {
        self.deferred.push_back(Box::new(task));
    }

    /// Drain the deferred queue. Tasks queued by running tasks run in the
    /// same drain.
    pub fn flush(&mut self) {
        while let Some(task) = self.deferred.pop_front() {
            task(&mut self.host);
        }
    }

    /// The wrapped editor.
    pub fn editor(&self) -> &DateEditor {
        &self.editor
    }

    /// Mutable access for subscriptions and reconfiguration.
    pub fn editor_mut(&mut self) -> &mut DateEditor {
        &mut self.editor
    }

    /// The wrapped host.
    pub fn host(&self) -> &H {
        &self.host
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    /// Test host recording every call in order.
    #[derive(Default)]
    struct RecordingHost {
        log: Vec<String>,
    }

    impl Host for RecordingHost {
        fn render(&mut self, display: &str) {
            self.log.push(format!("render:{display}"));
        }

        fn place_caret(&mut self, caret: usize) {
            self.log.push(format!("caret:{caret}"));
        }
    }

    fn driver() -> Driver<RecordingHost> {
        let mut editor = DateEditor::with_pattern("dd-MM-yy");
        editor.set_value(Some(
            NaiveDate::from_ymd_opt(2011, 10, 20)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
        ));
        Driver::new(editor, RecordingHost::default())
    }

    #[test]
    fn dispatch_renders_then_places_caret() {
        let mut driver = driver();
        driver.dispatch(EditEvent::Focus);
        assert_eq!(
            driver.host().log,
            vec!["render:20-10-11".to_string(), "caret:0".to_string()]
        );
    }

    #[test]
    fn caret_placement_reflects_part_advance() {
        let mut driver = driver();
        driver.dispatch(EditEvent::Focus);
        driver.dispatch(EditEvent::Char('2'));
        driver.dispatch(EditEvent::Char('1'));
        // Day filled: the deferred placement lands at the month part.
        assert_eq!(
            driver.host().log.last(),
            Some(&"caret:3".to_string())
        );
        assert_eq!(driver.editor().display(), "21-10-11");
    }

    #[test]
    fn deferred_runs_after_render_within_same_dispatch() {
        let mut driver = driver();
        driver.dispatch(EditEvent::Focus);
        driver.dispatch(EditEvent::SpinUp);
        let log = &driver.host().log;
        // For every dispatch the render precedes its caret placement.
        let render_pos = log.iter().rposition(|e| e.starts_with("render:")).unwrap();
        let caret_pos = log.iter().rposition(|e| e.starts_with("caret:")).unwrap();
        assert!(render_pos < caret_pos);
        assert_eq!(log[render_pos], "render:21-10-11");
    }

    #[test]
    fn manual_defer_and_flush() {
        let mut driver = driver();
        driver.defer(|host| {
            host.render("first");
        });
        driver.defer(|host| {
            host.place_caret(7);
        });
        driver.flush();
        assert_eq!(
            driver.host().log,
            vec!["render:first".to_string(), "caret:7".to_string()]
        );
    }

    #[test]
    fn editor_mut_allows_reconfiguration() {
        let mut driver = driver();
        driver.editor_mut().set_prompt_char('#');
        driver.dispatch(EditEvent::Blur);
        // The committed value survives reconfiguration and renders on blur.
        assert_eq!(driver.host().log[0], "render:20-10-11");
    }
}
