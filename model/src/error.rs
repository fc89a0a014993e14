//! Error type for page model operations.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use uuid::Uuid;

use crate::component::ComponentKind;

/// Rejected page model operation. The model is left unchanged whenever one of
/// these is returned.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ModelError {
    /// A palette tag that does not name a component kind.
    #[error("unknown component kind: {0:?}")]
    UnknownKind(String),
    /// Index past the end of the instance list.
    #[error("index {index} out of range for {len} instances")]
    IndexOutOfRange { index: usize, len: usize },
    /// No live instance carries this id.
    #[error("no instance with id {0}")]
    InstanceNotFound(Uuid),
    /// Replacement instance would change the kind at a position.
    #[error("kind mismatch: expected {expected}, found {found}")]
    KindMismatch { expected: ComponentKind, found: ComponentKind },
    /// Edit issued while the property editor has no target.
    #[error("no instance selected")]
    NothingSelected,
    /// Edit names a property the instance's kind does not have.
    #[error("{kind} component has no `{property}` property")]
    PropertyNotApplicable { kind: ComponentKind, property: &'static str },
    /// Carousel image slot past the end of the slot list.
    #[error("image slot {slot} out of range for {len} slots")]
    SlotOutOfRange { slot: usize, len: usize },
    /// Numeric field input that is not a finite number.
    #[error("invalid number: {0:?}")]
    InvalidNumber(String),
}

impl ModelError {
    /// Stable, grepable code for log lines.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnknownKind(_) => "E_UNKNOWN_KIND",
            Self::IndexOutOfRange { .. } => "E_INDEX_OUT_OF_RANGE",
            Self::InstanceNotFound(_) => "E_INSTANCE_NOT_FOUND",
            Self::KindMismatch { .. } => "E_KIND_MISMATCH",
            Self::NothingSelected => "E_NOTHING_SELECTED",
            Self::PropertyNotApplicable { .. } => "E_PROPERTY_NOT_APPLICABLE",
            Self::SlotOutOfRange { .. } => "E_SLOT_OUT_OF_RANGE",
            Self::InvalidNumber(_) => "E_INVALID_NUMBER",
        }
    }
}
