//! Ordered page contents and the property editor's target.
//!
//! DESIGN
//! ======
//! `PageModel` is the single source of truth for the builder. Insertion order
//! is display order and no mutation reorders instances. The editing index is
//! kept valid by every operation that can shrink the list, so the editor can
//! never point at a removed instance.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use uuid::Uuid;

use crate::component::{ComponentInstance, ComponentKind};
use crate::edit::PropertyEdit;
use crate::error::ModelError;

/// Component instances in display order plus the selected editing index.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PageModel {
    instances: Vec<ComponentInstance>,
    editing: Option<usize>,
}

impl PageModel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn instances(&self) -> &[ComponentInstance] {
        &self.instances
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ComponentInstance> {
        self.instances.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Current position of the instance with `id`.
    #[must_use]
    pub fn index_of(&self, id: Uuid) -> Option<usize> {
        self.instances.iter().position(|instance| instance.id() == id)
    }

    #[must_use]
    pub fn find(&self, id: Uuid) -> Option<&ComponentInstance> {
        self.instances.iter().find(|instance| instance.id() == id)
    }

    /// Index of the instance open in the property editor.
    #[must_use]
    pub fn editing_index(&self) -> Option<usize> {
        self.editing
    }

    /// Instance open in the property editor.
    #[must_use]
    pub fn editing(&self) -> Option<&ComponentInstance> {
        self.editing.and_then(|index| self.instances.get(index))
    }

    /// Append a default instance of `kind` and return its index. The
    /// selection is left as it was.
    pub fn append(&mut self, kind: ComponentKind) -> usize {
        self.instances.push(ComponentInstance::new(kind));
        self.instances.len() - 1
    }

    /// Open the instance at `index` in the property editor.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::IndexOutOfRange`] if `index` is not a live position.
    pub fn select(&mut self, index: usize) -> Result<(), ModelError> {
        self.check_index(index)?;
        self.editing = Some(index);
        Ok(())
    }

    pub fn deselect(&mut self) {
        self.editing = None;
    }

    /// Replace the instance at `index` in place. Length and every other
    /// position are unchanged.
    ///
    /// # Errors
    ///
    /// - [`ModelError::IndexOutOfRange`] if `index` is not a live position.
    /// - [`ModelError::KindMismatch`] if `instance` has a different kind.
    pub fn update_at(&mut self, index: usize, instance: ComponentInstance) -> Result<(), ModelError> {
        let len = self.instances.len();
        let slot = self
            .instances
            .get_mut(index)
            .ok_or(ModelError::IndexOutOfRange { index, len })?;
        if slot.kind() != instance.kind() {
            return Err(ModelError::KindMismatch { expected: slot.kind(), found: instance.kind() });
        }
        *slot = instance;
        Ok(())
    }

    /// Remove and return the instance at `index`.
    ///
    /// Removing the edited instance clears the selection; removing one before
    /// it shifts the selection so it still names the same instance.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::IndexOutOfRange`] if `index` is not a live position.
    pub fn remove(&mut self, index: usize) -> Result<ComponentInstance, ModelError> {
        self.check_index(index)?;
        let removed = self.instances.remove(index);
        self.editing = match self.editing {
            Some(editing) if editing == index => None,
            Some(editing) if editing > index => Some(editing - 1),
            other => other,
        };
        Ok(removed)
    }

    /// Apply `edit` to the selected instance.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::NothingSelected`] without a selection, or any
    /// error from [`ComponentInstance::apply`].
    pub fn edit_selected(&mut self, edit: PropertyEdit) -> Result<(), ModelError> {
        let index = self.editing.ok_or(ModelError::NothingSelected)?;
        let current = self.get(index).ok_or(ModelError::IndexOutOfRange { index, len: self.len() })?;
        let next = current.apply(edit)?;
        self.update_at(index, next)
    }

    fn check_index(&self, index: usize) -> Result<(), ModelError> {
        if index < self.instances.len() {
            Ok(())
        } else {
            Err(ModelError::IndexOutOfRange { index, len: self.instances.len() })
        }
    }
}
