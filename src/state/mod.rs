//! Client-side widget state.
//!
//! DESIGN
//! ======
//! State is plain data so the component layer can hold it in a signal while
//! tests drive it directly.

pub mod messaging;
