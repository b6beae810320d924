//! Utility helpers shared across widget modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Time, id generation, and deferred scheduling are injected capabilities so
//! the widget logic stays deterministic under test and browser glue stays at
//! the edges.

pub mod clock;
pub mod deferred;
pub mod ids;
pub mod time_label;
