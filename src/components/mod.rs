//! Leptos components for the messaging widget.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the widget and forward user events to the controller
//! held in context. Transitions and entry animations are CSS only.

pub mod icons;
pub mod messaging_panel;
pub mod messaging_widget;
