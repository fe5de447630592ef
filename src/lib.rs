//! # datemask
//!
//! A masked date-input editing engine: the logic of a date-picker's text
//! editor with the UI stripped away. Given a format pattern like `dd-MM-yy`,
//! datemask derives an input mask, then turns discrete edit events
//! (keystrokes, spins, focus changes) into a coherent fixed-width display
//! string and, when complete, a validated calendar date.
//!
//! Bad input never fails the host: malformed keystrokes are dropped
//! silently, and only a complete-but-invalid or complete-but-disabled date
//! raises an observable notification.
//!
//! ## Core Systems
//!
//! - **[`format`]** — Pattern engine: logos tokenizer, typed part parser,
//!   locale name tables, display rendering
//! - **[`mask`]** — Input mask / prompt string derivation, edit-mode
//!   rendering, completeness classification
//! - **[`calendar`]** — Days-in-month and leap-year tables, two-digit-year
//!   pivot, disabled/special date range descriptors
//! - **[`editor`]** — The date state machine: focus/blur, typing, spinning,
//!   commit validation, notifications
//! - **[`event`]** — Normalized edit events with crossterm conversions
//! - **[`host`]** — Capability interface the core renders through, with a
//!   deferred queue for post-render caret placement
//! - **[`testing`]** — Pilot for driving headless edit sessions in tests

// Foundation
pub mod calendar;
pub mod format;

// Masking and the state machine
pub mod editor;
pub mod mask;

// Host integration
pub mod event;
pub mod host;

// Test support
pub mod testing;
