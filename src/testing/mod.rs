//! Headless testing framework: Pilot and the recording host.
//!
//! Use the [`Pilot`] to drive a [`DateEditor`](crate::editor::DateEditor)
//! through scripted edit sessions without a UI, then assert on the display,
//! value, notifications, or the render transcript.

pub mod pilot;

pub use pilot::{Pilot, RecordingHost};
