//! Drag-and-drop state machine between the palette and the page.
//!
//! ARCHITECTURE
//! ============
//! The palette starts a drag with a component kind. The edit and preview
//! panels report enter/leave/drop. Only a drop on the preview panel appends
//! to the page; the edit panel highlights while hovered but a drop there has
//! no effect. Any drag that ends without a drop discards its pending kind.

#[cfg(test)]
#[path = "drop_surface_test.rs"]
mod drop_surface_test;

use crate::component::ComponentKind;
use crate::page::PageModel;

/// Panel that reacts to an in-flight drag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropZone {
    /// Sidebar holding the palette and property editor. Highlight only.
    Edit,
    /// Page preview. The only zone that accepts drops.
    Preview,
}

/// Current drag lifecycle position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragState {
    /// No drag in progress.
    #[default]
    Idle,
    /// A palette template is being dragged outside any zone.
    Dragging(ComponentKind),
    /// A palette template is over `zone`.
    Hovering { kind: ComponentKind, zone: DropZone },
}

/// Tracks one drag at a time from palette to page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DropSurface {
    state: DragState,
}

impl DropSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> DragState {
        self.state
    }

    /// Kind carried by the drag in progress, if any.
    #[must_use]
    pub fn active_kind(&self) -> Option<ComponentKind> {
        match self.state {
            DragState::Idle => None,
            DragState::Dragging(kind) | DragState::Hovering { kind, .. } => Some(kind),
        }
    }

    /// Whether `zone` should render its hover highlight.
    #[must_use]
    pub fn is_highlighted(&self, zone: DropZone) -> bool {
        matches!(self.state, DragState::Hovering { zone: hovered, .. } if hovered == zone)
    }

    /// A palette template started dragging. Replaces any stale drag.
    pub fn begin_drag(&mut self, kind: ComponentKind) {
        self.state = DragState::Dragging(kind);
    }

    /// The drag entered `zone`. Ignored when nothing is being dragged.
    pub fn enter(&mut self, zone: DropZone) {
        if let Some(kind) = self.active_kind() {
            self.state = DragState::Hovering { kind, zone };
        }
    }

    /// The drag left `zone` without dropping.
    pub fn leave(&mut self, zone: DropZone) {
        if let DragState::Hovering { kind, zone: hovered } = self.state {
            if hovered == zone {
                self.state = DragState::Dragging(kind);
            }
        }
    }

    /// The drag was released over `zone`. Appends to `page` and returns the
    /// new index only for a preview drop with a kind in flight. Always ends
    /// the drag.
    pub fn drop_on(&mut self, zone: DropZone, page: &mut PageModel) -> Option<usize> {
        let kind = self.active_kind();
        self.state = DragState::Idle;
        match (zone, kind) {
            (DropZone::Preview, Some(kind)) => Some(page.append(kind)),
            _ => None,
        }
    }

    /// The drag ended without a drop (released outside every zone).
    pub fn cancel(&mut self) {
        self.state = DragState::Idle;
    }
}
