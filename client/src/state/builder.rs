//! Builder session state: the page under construction and the drag in flight.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `RwSignal<BuilderState>` is provided at the app root. The palette,
//! both drop zones, the preview items and the property editor all read and
//! write through the methods here so every mutation is logged in one place
//! and model errors never reach the view as panics.

#[cfg(test)]
#[path = "builder_test.rs"]
mod builder_test;

use pagebuilder_model::{
    CarouselProps, ComponentInstance, ComponentKind, ComponentProps, DropSurface, DropZone, ImageProps, ModelError,
    PageModel, PropertyEdit, TextProps,
};
use uuid::Uuid;

/// Page contents plus the palette drag lifecycle.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BuilderState {
    pub page: PageModel,
    pub drag: DropSurface,
}

impl BuilderState {
    /// Start dragging the palette template tagged `tag`.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::UnknownKind`] for a tag outside the palette; the
    /// drag state is left untouched.
    pub fn begin_drag(&mut self, tag: &str) -> Result<ComponentKind, ModelError> {
        let kind = tag.parse::<ComponentKind>().inspect_err(|err| {
            log::warn!("drag rejected: {err} ({})", err.code());
        })?;
        self.drag.begin_drag(kind);
        log::debug!("drag started: {kind}");
        Ok(kind)
    }

    /// Returns `true` when the highlight state changed.
    pub fn drag_enter(&mut self, zone: DropZone) -> bool {
        let before = self.drag;
        self.drag.enter(zone);
        before != self.drag
    }

    /// Returns `true` when the highlight state changed.
    pub fn drag_leave(&mut self, zone: DropZone) -> bool {
        let before = self.drag;
        self.drag.leave(zone);
        before != self.drag
    }

    /// Returns `true` when a drag was actually in flight.
    pub fn cancel_drag(&mut self) -> bool {
        let before = self.drag;
        self.drag.cancel();
        before != self.drag
    }

    /// Finish the drag over `zone`. Returns the appended index for a preview drop.
    pub fn drop_on(&mut self, zone: DropZone) -> Option<usize> {
        let kind = self.drag.active_kind();
        let appended = self.drag.drop_on(zone, &mut self.page);
        match (appended, kind) {
            (Some(index), Some(kind)) => log::info!("appended {kind} at index {index}"),
            (None, Some(kind)) => log::debug!("drop of {kind} on {zone:?} ignored"),
            _ => {}
        }
        appended
    }

    /// Open the instance at `index` in the property editor.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::IndexOutOfRange`] for a stale index.
    pub fn select(&mut self, index: usize) -> Result<(), ModelError> {
        self.page.select(index).inspect_err(|err| {
            log::warn!("select failed: {err} ({})", err.code());
        })
    }

    /// Open the instance with `id`, wherever it currently sits.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::InstanceNotFound`] when the instance is gone; the
    /// selection is left as it was.
    pub fn select_id(&mut self, id: Uuid) -> Result<(), ModelError> {
        let index = self.page.index_of(id).ok_or(ModelError::InstanceNotFound(id)).inspect_err(|err| {
            log::warn!("select failed: {err} ({})", err.code());
        })?;
        self.select(index)
    }

    pub fn deselect(&mut self) {
        self.page.deselect();
    }

    /// Apply `edit` to the selected instance.
    ///
    /// # Errors
    ///
    /// Propagates [`PageModel::edit_selected`] errors after logging them.
    pub fn edit(&mut self, edit: PropertyEdit) -> Result<(), ModelError> {
        let property = edit.property();
        self.page.edit_selected(edit).inspect_err(|err| {
            log::warn!("edit of `{property}` rejected: {err} ({})", err.code());
        })
    }

    /// Delete the selected instance and close the editor.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::NothingSelected`] without a selection.
    pub fn remove_selected(&mut self) -> Result<ComponentInstance, ModelError> {
        let index = self.page.editing_index().ok_or(ModelError::NothingSelected)?;
        let removed = self.page.remove(index)?;
        log::info!("removed {} at index {index}", removed.kind());
        Ok(removed)
    }

    #[must_use]
    pub fn is_selected(&self, id: Uuid) -> bool {
        self.page.editing().is_some_and(|instance| instance.id() == id)
    }

    #[must_use]
    pub fn text_props(&self, id: Uuid) -> Option<TextProps> {
        match self.page.find(id)?.props() {
            ComponentProps::Text(props) => Some(props.clone()),
            _ => None,
        }
    }

    #[must_use]
    pub fn image_props(&self, id: Uuid) -> Option<ImageProps> {
        match self.page.find(id)?.props() {
            ComponentProps::Image(props) => Some(props.clone()),
            _ => None,
        }
    }

    #[must_use]
    pub fn carousel_props(&self, id: Uuid) -> Option<CarouselProps> {
        match self.page.find(id)?.props() {
            ComponentProps::Carousel(props) => Some(props.clone()),
            _ => None,
        }
    }
}
