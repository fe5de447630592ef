//! Normalized input events, decoupled from the host event source.

pub mod input;

pub use input::EditEvent;
