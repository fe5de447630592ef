//! Observable editor notifications.
//!
//! The state machine reports exactly three externally visible outcomes:
//! a committed value, a complete-but-invalid date, and a complete-but-
//! disabled date. Everything else (ignored keystrokes, partial edits) is
//! silent. Subscribers are boxed callbacks invoked synchronously at the end
//! of the operation that produced the notification.

use std::fmt;

use chrono::NaiveDateTime;

/// One observable editor outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// The buffer was complete but not a real calendar date.
    ///
    /// The buffer retains the rejected text so the user can correct it; the
    /// committed value is unchanged.
    ValidationFailed {
        rejected: String,
        previous: Option<NaiveDateTime>,
    },
    /// The buffer parsed to a date matched by the disabled-dates list.
    DisabledDateRejected { candidate: NaiveDateTime },
    /// A new value was committed.
    ValueCommitted { value: NaiveDateTime },
}

/// Subscriber callback list.
pub(crate) struct Notifier {
    subscribers: Vec<Box<dyn FnMut(&Notification)>>,
}

impl Notifier {
    pub(crate) fn new() -> Self {
        Self {
            subscribers: Vec::new(),
        }
    }

    pub(crate) fn subscribe(&mut self, subscriber: impl FnMut(&Notification) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    pub(crate) fn emit(&mut self, notification: &Notification) {
        for subscriber in &mut self.subscribers {
            subscriber(notification);
        }
    }
}

impl fmt::Debug for Notifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notifier")
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn emit_reaches_all_subscribers() {
        let seen_a = Rc::new(RefCell::new(Vec::new()));
        let seen_b = Rc::new(RefCell::new(Vec::new()));
        let mut notifier = Notifier::new();

        let sink = seen_a.clone();
        notifier.subscribe(move |n| sink.borrow_mut().push(n.clone()));
        let sink = seen_b.clone();
        notifier.subscribe(move |n| sink.borrow_mut().push(n.clone()));

        let notification = Notification::ValidationFailed {
            rejected: "31-02-20".into(),
            previous: None,
        };
        notifier.emit(&notification);

        assert_eq!(seen_a.borrow().as_slice(), &[notification.clone()]);
        assert_eq!(seen_b.borrow().as_slice(), &[notification]);
    }

    #[test]
    fn emit_without_subscribers_is_noop() {
        let mut notifier = Notifier::new();
        notifier.emit(&Notification::ValidationFailed {
            rejected: String::new(),
            previous: None,
        });
    }

    #[test]
    fn debug_shows_subscriber_count() {
        let mut notifier = Notifier::new();
        notifier.subscribe(|_| {});
        let dbg = format!("{:?}", notifier);
        assert!(dbg.contains("Notifier"));
        assert!(dbg.contains('1'));
    }
}
