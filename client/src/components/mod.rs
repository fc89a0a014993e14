//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the builder chrome and the page preview while reading and
//! writing the shared `BuilderState` from Leptos context.

pub mod drop_zone;
pub mod palette;
pub mod preview_item;
pub mod preview_panel;
pub mod property_editor;
pub mod sidebar;
