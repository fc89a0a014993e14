//! Page model shared by the builder client and its host.
//!
//! This crate owns the in-memory representation of a page under construction:
//! the ordered component instances, which one is open in the property editor,
//! the drag/drop state machine that appends new instances, and the carousel
//! slide cursor used by previews. It has no UI or browser dependencies so every
//! rule here can be exercised with plain unit tests.

pub mod carousel;
pub mod component;
pub mod drop_surface;
pub mod edit;
pub mod error;
pub mod page;
pub mod sanitize;

pub use carousel::CarouselCursor;
pub use component::{CarouselProps, ComponentInstance, ComponentKind, ComponentProps, ImagePosition, ImageProps, TextProps};
pub use drop_surface::{DragState, DropSurface, DropZone};
pub use edit::{PropertyEdit, parse_dimension};
pub use error::ModelError;
pub use page::PageModel;
pub use sanitize::{AllowListSanitizer, HtmlSanitizer, sanitize_rich_text};
