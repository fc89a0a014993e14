//! Allow-list HTML sanitizer for text component markup.
//!
//! SYSTEM CONTEXT
//! ==============
//! Text components hold raw user markup that the preview injects as HTML.
//! Everything outside the allow-list below is removed before it reaches the
//! DOM: disallowed tags are unwrapped (their text kept), `<script>`/`<style>`
//! bodies are dropped, and only `href`/`target` attributes survive. Link URLs
//! are limited to ammonia's safe scheme set, so `javascript:` hrefs are cut.

#[cfg(test)]
#[path = "sanitize_test.rs"]
mod sanitize_test;

use std::collections::HashMap;

/// Tags that pass through unchanged.
pub const ALLOWED_TAGS: &[&str] = &[
    "h1", "h2", "h3", "h4", "h5", "h6", "p", "br", "hr", "strong", "em", "a", "ul", "ol", "li", "code", "pre", "div",
    "table", "tr", "td", "th",
];

/// Attributes kept on any allowed tag.
pub const ALLOWED_ATTRIBUTES: &[&str] = &["href", "target"];

/// Seam between the preview and the sanitizer implementation.
pub trait HtmlSanitizer {
    /// Return `input` with only allow-listed markup left.
    fn sanitize(&self, input: &str) -> String;
}

/// [`HtmlSanitizer`] backed by `ammonia` with the builder's allow-list.
pub struct AllowListSanitizer {
    builder: ammonia::Builder<'static>,
}

impl AllowListSanitizer {
    #[must_use]
    pub fn new() -> Self {
        let mut builder = ammonia::Builder::default();
        builder
            .tags(ALLOWED_TAGS.iter().copied().collect())
            .tag_attributes(HashMap::new())
            .generic_attributes(ALLOWED_ATTRIBUTES.iter().copied().collect())
            // No injected rel: the allow-list defines the output attributes.
            .link_rel(None);
        Self { builder }
    }
}

impl Default for AllowListSanitizer {
    fn default() -> Self {
        Self::new()
    }
}

impl HtmlSanitizer for AllowListSanitizer {
    fn sanitize(&self, input: &str) -> String {
        restore_pre_newline(&self.builder.clean(input).to_string())
    }
}

/// Parsing drops a newline directly after `<pre>` and serialization does not
/// write it back, so a block whose content starts with a newline would lose
/// one on every pass. Cleaned `<pre>` tags carry no attributes, and a literal
/// `<pre>` in text is escaped, so the bare tag is the only match.
fn restore_pre_newline(html: &str) -> String {
    html.replace("<pre>\n", "<pre>\n\n")
}

thread_local! {
    static RICH_TEXT: AllowListSanitizer = AllowListSanitizer::new();
}

/// Sanitize text component markup with the shared allow-list sanitizer.
#[must_use]
pub fn sanitize_rich_text(input: &str) -> String {
    RICH_TEXT.with(|sanitizer| sanitizer.sanitize(input))
}
