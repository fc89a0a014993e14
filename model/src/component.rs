//! Component kinds and their typed property sets.
//!
//! DESIGN
//! ======
//! Each kind carries its own property struct inside [`ComponentProps`], so a
//! text instance can never be asked for an image `src`. An instance's kind is
//! the variant it was created with; replacements must keep it.

#[cfg(test)]
#[path = "component_test.rs"]
mod component_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ModelError;

// =============================================================================
// KINDS
// =============================================================================

/// Category of a placed component, fixed at creation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    Text,
    Image,
    Carousel,
}

impl ComponentKind {
    /// Palette order.
    pub const ALL: [Self; 3] = [Self::Text, Self::Image, Self::Carousel];

    /// Tag carried by drag events and serialized instances.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Image => "image",
            Self::Carousel => "carousel",
        }
    }

    /// Display name used by the palette and the selection outline.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Text => "Text component",
            Self::Image => "Image component",
            Self::Carousel => "Carousel component",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComponentKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "text" => Ok(Self::Text),
            "image" => Ok(Self::Image),
            "carousel" => Ok(Self::Carousel),
            other => Err(ModelError::UnknownKind(other.to_owned())),
        }
    }
}

/// Horizontal alignment of an image inside its row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImagePosition {
    Start,
    #[default]
    Center,
    End,
}

impl ImagePosition {
    pub const ALL: [Self; 3] = [Self::Start, Self::Center, Self::End];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Center => "center",
            Self::End => "end",
        }
    }

    /// CSS `justify-content` value for a flex row.
    #[must_use]
    pub fn justify_content(self) -> &'static str {
        match self {
            Self::Start => "flex-start",
            Self::Center => "center",
            Self::End => "flex-end",
        }
    }
}

// =============================================================================
// PROPERTIES
// =============================================================================

/// Rich-text block. `value` is raw markup and must be sanitized before display.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TextProps {
    pub value: String,
}

/// Single image. Zero or negative dimensions mean "use the stylesheet size".
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageProps {
    pub src: String,
    pub alt: String,
    pub width: f64,
    pub height: f64,
    pub position: ImagePosition,
}

/// Horizontally sliding image strip.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CarouselProps {
    pub images: Vec<String>,
    pub width: f64,
    pub height: f64,
}

/// Kind-specific properties. Serializes as `{"type": ..., "props": {...}}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "props", rename_all = "lowercase")]
pub enum ComponentProps {
    Text(TextProps),
    Image(ImageProps),
    Carousel(CarouselProps),
}

impl ComponentProps {
    /// Render-ready defaults for a freshly dropped instance.
    #[must_use]
    pub fn defaults(kind: ComponentKind) -> Self {
        match kind {
            ComponentKind::Text => Self::Text(TextProps::default()),
            ComponentKind::Image => Self::Image(ImageProps::default()),
            ComponentKind::Carousel => Self::Carousel(CarouselProps::default()),
        }
    }

    #[must_use]
    pub fn kind(&self) -> ComponentKind {
        match self {
            Self::Text(_) => ComponentKind::Text,
            Self::Image(_) => ComponentKind::Image,
            Self::Carousel(_) => ComponentKind::Carousel,
        }
    }
}

// =============================================================================
// INSTANCE
// =============================================================================

/// One component placed on the page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComponentInstance {
    id: Uuid,
    #[serde(flatten)]
    props: ComponentProps,
}

impl ComponentInstance {
    /// New instance of `kind` with its default properties and a fresh id.
    #[must_use]
    pub fn new(kind: ComponentKind) -> Self {
        Self { id: Uuid::new_v4(), props: ComponentProps::defaults(kind) }
    }

    /// Render key; stable for the life of the instance.
    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> ComponentKind {
        self.props.kind()
    }

    #[must_use]
    pub fn props(&self) -> &ComponentProps {
        &self.props
    }

    /// Copy of this instance carrying `props`, keeping the same id.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::KindMismatch`] if `props` is a different kind.
    pub fn with_props(&self, props: ComponentProps) -> Result<Self, ModelError> {
        if props.kind() != self.kind() {
            return Err(ModelError::KindMismatch { expected: self.kind(), found: props.kind() });
        }
        Ok(Self { id: self.id, props })
    }
}
