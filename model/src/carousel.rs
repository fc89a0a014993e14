//! Slide cursor for carousel previews.
//!
//! The cursor is view state owned by one mounted carousel preview. It is not
//! stored in the page, so it starts at the first slide whenever a preview is
//! mounted. All movement clamps; there is no wraparound.

#[cfg(test)]
#[path = "carousel_test.rs"]
mod carousel_test;

/// Index of the visible slide, clamped against the current image count.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CarouselCursor {
    index: usize,
}

impl CarouselCursor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Visible slide for `len` images, or `None` when there are none.
    #[must_use]
    pub fn current(self, len: usize) -> Option<usize> {
        len.checked_sub(1).map(|last| self.index.min(last))
    }

    /// Move one slide forward, stopping at the last image.
    pub fn next(&mut self, len: usize) {
        self.index = match len.checked_sub(1) {
            Some(last) => (self.index.min(last) + 1).min(last),
            None => 0,
        };
    }

    /// Move one slide back, stopping at the first image.
    pub fn prev(&mut self, len: usize) {
        self.index = self.current(len).map_or(0, |current| current.saturating_sub(1));
    }

    /// Horizontal strip offset in percent of one slide width.
    #[must_use]
    pub fn offset_percent(self, len: usize) -> usize {
        self.current(len).unwrap_or(0) * 100
    }

    /// Prev/next controls only make sense with something to move between.
    #[must_use]
    pub fn has_controls(len: usize) -> bool {
        len > 1
    }
}
