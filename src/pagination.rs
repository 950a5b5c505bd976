//! Caller-owned pagination state and page arithmetic.
//!
//! The table component never owns pagination: the host page holds a
//! [`Pagination`] value plus a server-reported page count, hands both to
//! the table every render, and receives a fresh `Pagination` through a
//! callback when the user navigates. All navigation helpers here are pure
//! and clamp at the boundaries instead of wrapping.

/// The `(page_index, page_size)` pair describing which page of a larger
/// dataset is displayed.
///
/// `page_index` is zero-based. `page_size` is always at least 1; values
/// below that are clamped on construction.
///
/// # Examples
///
/// ```
/// use backoffice_widgets::pagination::Pagination;
///
/// let page = Pagination::new(0, 25);
/// assert!(page.on_first_page());
///
/// let page = page.next(4);
/// assert_eq!(page.page_index, 1);
///
/// // Navigation clamps; it never wraps.
/// let page = page.last(4).next(4);
/// assert_eq!(page.page_index, 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Zero-based index of the displayed page.
    pub page_index: usize,
    page_size: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page_index: 0,
            page_size: 10,
        }
    }
}

impl Pagination {
    /// Creates pagination state; `page_size` is clamped to at least 1.
    pub fn new(page_index: usize, page_size: usize) -> Self {
        Self {
            page_index,
            page_size: page_size.max(1),
        }
    }

    /// Items per page (always >= 1).
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Returns the state with a different page size, clamped to at least 1.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Jumps to the first page.
    pub fn first(self) -> Self {
        Self {
            page_index: 0,
            ..self
        }
    }

    /// Moves one page back, stopping at the first page.
    pub fn prev(self) -> Self {
        Self {
            page_index: self.page_index.saturating_sub(1),
            ..self
        }
    }

    /// Moves one page forward, stopping at the last page.
    pub fn next(self, page_count: usize) -> Self {
        let last = page_count.saturating_sub(1);
        Self {
            page_index: (self.page_index + 1).min(last),
            ..self
        }
    }

    /// Jumps to the last page.
    pub fn last(self, page_count: usize) -> Self {
        Self {
            page_index: page_count.saturating_sub(1),
            ..self
        }
    }

    /// Clamps the page index into `[0, page_count)`.
    pub fn clamp(self, page_count: usize) -> Self {
        Self {
            page_index: self.page_index.min(page_count.saturating_sub(1)),
            ..self
        }
    }

    /// Returns true when no backward navigation is possible.
    pub fn on_first_page(&self) -> bool {
        self.page_index == 0
    }

    /// Returns true when no forward navigation is possible.
    pub fn on_last_page(&self, page_count: usize) -> bool {
        self.page_index >= page_count.saturating_sub(1)
    }

    /// Slice bounds for the current page over in-memory data of `len`
    /// items, usable directly as `&rows[start..end]`.
    pub fn slice_bounds(&self, len: usize) -> (usize, usize) {
        let start = (self.page_index * self.page_size).min(len);
        let end = (start + self.page_size).min(len);
        (start, end)
    }

    /// Number of items actually present on the current page, which is less
    /// than `page_size` on a partial last page.
    pub fn items_on_page(&self, len: usize) -> usize {
        let (start, end) = self.slice_bounds(len);
        end - start
    }
}

/// Derives a page count from a total item count, the way a caller turns a
/// server-reported total into the `page_count` input of the table.
///
/// Zero items still produce one (empty) page.
pub fn page_count_for(total_items: usize, page_size: usize) -> usize {
    if total_items == 0 {
        1
    } else {
        total_items.div_ceil(page_size.max(1))
    }
}
