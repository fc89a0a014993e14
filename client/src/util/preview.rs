//! Display fallbacks and inline-style builders for preview components.

#[cfg(test)]
#[path = "preview_test.rs"]
mod preview_test;

/// Shown when an image component has no `src` yet.
pub const PLACEHOLDER_IMAGE_URL: &str =
    "https://images.pexels.com/photos/1181244/pexels-photo-1181244.jpeg?auto=compress&cs=tinysrgb&w=1260&h=750&dpr=2";

pub const PLACEHOLDER_IMAGE_ALT: &str = "Image description";

pub const EMPTY_CAROUSEL_MESSAGE: &str = "Carousel: add an image first";

pub fn image_src(src: &str) -> String {
    if src.trim().is_empty() { PLACEHOLDER_IMAGE_URL.to_owned() } else { src.to_owned() }
}

pub fn image_alt(alt: &str) -> String {
    if alt.trim().is_empty() { PLACEHOLDER_IMAGE_ALT.to_owned() } else { alt.to_owned() }
}

/// Inline `width`/`height` declarations. Non-positive sides are omitted so
/// the stylesheet size applies.
pub fn size_style(width: f64, height: f64) -> String {
    let mut style = String::new();
    if width > 0.0 {
        style.push_str(&format!("width: {}px;", format_dimension(width)));
    }
    if height > 0.0 {
        style.push_str(&format!("height: {}px;", format_dimension(height)));
    }
    style
}

/// Value shown in a numeric editor field. Zero renders empty.
pub fn format_dimension(value: f64) -> String {
    if value.abs() < f64::EPSILON { String::new() } else { format!("{value}") }
}

/// Whether a carousel renders its strip rather than the empty message.
pub fn has_slides(len: usize) -> bool {
    len > 0
}

/// Transform for the carousel slide strip.
pub fn strip_offset_style(offset_percent: usize) -> String {
    format!("transform: translateX(-{offset_percent}%);")
}
