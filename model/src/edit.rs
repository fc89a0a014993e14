//! Property edits issued by the property editor.
//!
//! Every form field maps to one [`PropertyEdit`]. Applying an edit never
//! mutates the instance in place; it produces the next instance value, which
//! the page then swaps in positionally.

#[cfg(test)]
#[path = "edit_test.rs"]
mod edit_test;

use crate::component::{ComponentInstance, ComponentProps, ImagePosition};
use crate::error::ModelError;

/// A single field change from the property editor.
#[derive(Clone, Debug, PartialEq)]
pub enum PropertyEdit {
    /// Text markup.
    TextValue(String),
    /// Image URL.
    ImageSrc(String),
    /// Image fallback description.
    ImageAlt(String),
    /// Image or carousel width in px.
    Width(f64),
    /// Image or carousel height in px.
    Height(f64),
    /// Image alignment.
    ImagePosition(ImagePosition),
    /// Replace the URL in an existing carousel slot.
    CarouselImage { slot: usize, url: String },
    /// Append an empty carousel slot.
    AddCarouselSlot,
}

impl PropertyEdit {
    /// Name of the property this edit writes.
    #[must_use]
    pub fn property(&self) -> &'static str {
        match self {
            Self::TextValue(_) => "value",
            Self::ImageSrc(_) => "src",
            Self::ImageAlt(_) => "alt",
            Self::Width(_) => "width",
            Self::Height(_) => "height",
            Self::ImagePosition(_) => "position",
            Self::CarouselImage { .. } | Self::AddCarouselSlot => "images",
        }
    }
}

impl ComponentInstance {
    /// Next value of this instance with `edit` applied. Same id and kind.
    ///
    /// # Errors
    ///
    /// - [`ModelError::PropertyNotApplicable`] if the kind lacks the property.
    /// - [`ModelError::SlotOutOfRange`] for a carousel slot past the end.
    /// - [`ModelError::InvalidNumber`] for a non-finite dimension.
    pub fn apply(&self, edit: PropertyEdit) -> Result<Self, ModelError> {
        if let PropertyEdit::Width(n) | PropertyEdit::Height(n) = edit {
            if !n.is_finite() {
                return Err(ModelError::InvalidNumber(n.to_string()));
            }
        }

        let mut props = self.props().clone();
        match (&mut props, edit) {
            (ComponentProps::Text(text), PropertyEdit::TextValue(value)) => text.value = value,
            (ComponentProps::Image(image), PropertyEdit::ImageSrc(src)) => image.src = src,
            (ComponentProps::Image(image), PropertyEdit::ImageAlt(alt)) => image.alt = alt,
            (ComponentProps::Image(image), PropertyEdit::Width(width)) => image.width = width,
            (ComponentProps::Image(image), PropertyEdit::Height(height)) => image.height = height,
            (ComponentProps::Image(image), PropertyEdit::ImagePosition(position)) => image.position = position,
            (ComponentProps::Carousel(carousel), PropertyEdit::Width(width)) => carousel.width = width,
            (ComponentProps::Carousel(carousel), PropertyEdit::Height(height)) => carousel.height = height,
            (ComponentProps::Carousel(carousel), PropertyEdit::CarouselImage { slot, url }) => {
                let len = carousel.images.len();
                let target = carousel
                    .images
                    .get_mut(slot)
                    .ok_or(ModelError::SlotOutOfRange { slot, len })?;
                *target = url;
            }
            (ComponentProps::Carousel(carousel), PropertyEdit::AddCarouselSlot) => carousel.images.push(String::new()),
            (props, edit) => {
                return Err(ModelError::PropertyNotApplicable { kind: props.kind(), property: edit.property() });
            }
        }

        self.with_props(props)
    }
}

/// Parse a width/height field. Empty input means 0; any finite number is
/// accepted, including negatives and fractions.
///
/// # Errors
///
/// Returns [`ModelError::InvalidNumber`] for non-numeric or non-finite input.
pub fn parse_dimension(raw: &str) -> Result<f64, ModelError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    match trimmed.parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(n),
        _ => Err(ModelError::InvalidNumber(trimmed.to_owned())),
    }
}
