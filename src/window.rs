//! Windowed-rendering math for virtualized lists.
//!
//! A [`Window`] describes a fixed-height scroll viewport over rows of
//! uniform height and answers one question: given a scroll offset, which
//! slice of the full item sequence intersects the viewport? Rendering only
//! that slice bounds the amount of drawn content by the viewport size
//! instead of the item count.
//!
//! The computation is a pure function of `(scroll_offset, item_count)`, so
//! out-of-order or repeated scroll events cannot corrupt state: every event
//! recomputes the whole window from scratch.

/// A half-open `[start, end)` range of visible item indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleRange {
    /// Index of the first visible item.
    pub start: usize,
    /// One past the index of the last visible item.
    pub end: usize,
}

impl VisibleRange {
    /// Number of items in the range.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if no items are visible.
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Iterates over the indices in the range.
    pub fn indices(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }
}

/// A fixed-height viewport over uniform-height rows.
///
/// Heights are measured in terminal rows. Variable-height rows are not
/// supported; both heights must be positive, and a zero `item_height` is a
/// precondition violation on the caller (division by zero), not a
/// recoverable error.
///
/// # Examples
///
/// ```
/// use backoffice_widgets::window::Window;
///
/// // A 10-row viewport over single-row items, scrolled down 25 rows.
/// let window = Window::new(10, 1);
/// let range = window.visible(25, 1_000);
/// assert_eq!(range.start, 25);
/// assert_eq!(range.end, 36); // 10 rows + 1 row of slack
/// assert!(range.len() <= window.max_visible());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    viewport_height: usize,
    item_height: usize,
}

impl Window {
    /// Creates a window from a viewport height and a per-item height.
    ///
    /// Both heights must be positive.
    pub fn new(viewport_height: usize, item_height: usize) -> Self {
        debug_assert!(viewport_height > 0, "viewport height must be positive");
        debug_assert!(item_height > 0, "item height must be positive");
        Self {
            viewport_height,
            item_height,
        }
    }

    /// Viewport height in rows.
    pub fn viewport_height(&self) -> usize {
        self.viewport_height
    }

    /// Per-item height in rows.
    pub fn item_height(&self) -> usize {
        self.item_height
    }

    /// Upper bound on the number of items any visible range can contain:
    /// the rows that fit the viewport plus one row of slack, so a partially
    /// scrolled-off row at each edge never leaves a blank gap.
    pub fn max_visible(&self) -> usize {
        self.viewport_height.div_ceil(self.item_height) + 1
    }

    /// Computes the visible index range for a scroll offset.
    ///
    /// The first visible item is `scroll_offset / item_height`; the range
    /// extends [`max_visible`](Self::max_visible) items or to the end of
    /// the sequence, whichever comes first. Offsets past the end of the
    /// content produce an empty range at `item_count`.
    pub fn visible(&self, scroll_offset: usize, item_count: usize) -> VisibleRange {
        let start = (scroll_offset / self.item_height).min(item_count);
        let end = (start + self.max_visible()).min(item_count);
        VisibleRange { start, end }
    }

    /// Total content height in rows: the size of the scroll spacer that
    /// makes scroll metrics reflect the full item count.
    pub fn content_height(&self, item_count: usize) -> usize {
        item_count * self.item_height
    }

    /// Top offset of the item at `index`, in rows.
    pub fn offset_of(&self, index: usize) -> usize {
        index * self.item_height
    }

    /// The largest useful scroll offset: scrolling further than this leaves
    /// trailing blank space in the viewport.
    pub fn max_scroll_offset(&self, item_count: usize) -> usize {
        self.content_height(item_count)
            .saturating_sub(self.viewport_height)
    }

    /// Clamps an offset into `[0, max_scroll_offset]`.
    pub fn clamp_offset(&self, scroll_offset: usize, item_count: usize) -> usize {
        scroll_offset.min(self.max_scroll_offset(item_count))
    }

    /// Returns the smallest adjustment of `scroll_offset` that brings the
    /// item at `index` fully into the viewport.
    ///
    /// Used for cursor-follows-keyboard navigation: the offset is left
    /// unchanged when the item is already fully visible.
    pub fn scroll_into_view(
        &self,
        scroll_offset: usize,
        index: usize,
        item_count: usize,
    ) -> usize {
        let top = self.offset_of(index);
        let bottom = top + self.item_height;

        let adjusted = if top < scroll_offset {
            top
        } else if bottom > scroll_offset + self.viewport_height {
            bottom.saturating_sub(self.viewport_height)
        } else {
            scroll_offset
        };
        self.clamp_offset(adjusted, item_count)
    }
}
