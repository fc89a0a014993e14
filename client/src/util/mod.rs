//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure formatting helpers live here so preview and editor components stay
//! thin and the string logic is testable without a DOM.

pub mod preview;
