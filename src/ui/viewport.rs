//! Scroll window over the palette's rendered rows.
//!
//! Scrolling follows "nearest edge" semantics: a row that is already visible
//! never moves the window, and a row outside it scrolls the window only far
//! enough to bring that row to the closest edge.

use std::ops::Range;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    offset: usize,
    height: usize,
}

impl Viewport {
    #[must_use]
    pub const fn new(height: usize) -> Self {
        Self { offset: 0, height }
    }

    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Sets the number of visible rows. The offset is kept.
    pub fn resize(&mut self, height: usize) {
        self.height = height;
    }

    pub fn reset(&mut self) {
        self.offset = 0;
    }

    #[must_use]
    pub const fn is_visible(&self, row: usize) -> bool {
        row >= self.offset && row < self.offset + self.height
    }

    /// Scrolls just enough to make `row` visible. Returns whether the window
    /// moved.
    ///
    /// # Examples
    ///
    /// ```
    /// use docportal::ui::Viewport;
    ///
    /// let mut viewport = Viewport::new(5);
    /// assert!(!viewport.reveal(3));
    /// assert!(viewport.reveal(7));
    /// assert_eq!(viewport.offset(), 3);
    /// assert!(viewport.reveal(1));
    /// assert_eq!(viewport.offset(), 1);
    /// ```
    pub fn reveal(&mut self, row: usize) -> bool {
        if self.height == 0 || self.is_visible(row) {
            return false;
        }
        self.offset = if row < self.offset {
            row
        } else {
            row + 1 - self.height
        };
        true
    }

    /// Reveals every row in `rows`, favouring the first when the range is
    /// taller than the window. Returns whether the window moved.
    pub fn reveal_range(&mut self, rows: Range<usize>) -> bool {
        if rows.is_empty() {
            return false;
        }
        let tail = self.reveal(rows.end - 1);
        let head = self.reveal(rows.start);
        tail || head
    }

    /// Rows to draw out of `total`, clamping a stale offset after the list
    /// shrank.
    #[must_use]
    pub fn visible_range(&self, total: usize) -> Range<usize> {
        let start = self.offset.min(total.saturating_sub(self.height));
        let end = (start + self.height).min(total);
        start..end
    }
}
