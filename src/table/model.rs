//! Column descriptors, model struct, and page-change plumbing for the
//! table.

use super::keys::TableKeyMap;
use super::style::TableStyles;
use crate::pagination::Pagination;
use bubbletea_rs::Cmd;

/// Produces the cell text for one row.
pub type CellRenderer<R> = Box<dyn Fn(&R) -> String + Send + Sync>;

/// Pagination sink: invoked with the requested state when the user
/// navigates. The caller refetches and hands fresh rows back; the table
/// itself never fetches or slices data.
pub type OnPaginationChange = Box<dyn Fn(Pagination) -> Option<Cmd> + Send + Sync>;

/// A column descriptor: how one data field is keyed, labeled, and
/// rendered.
///
/// Keys must be unique within a table; a duplicate key is a contract
/// violation on the caller, checked at construction in debug builds.
///
/// # Examples
///
/// ```
/// use backoffice_widgets::table::Column;
///
/// struct Client {
///     name: String,
///     city: String,
/// }
///
/// let columns = vec![
///     Column::new("name", "Name", |c: &Client| c.name.clone()),
///     Column::new("city", "City", |c: &Client| c.city.clone()).with_width(12),
/// ];
/// assert_eq!(columns[1].width(), Some(12));
/// ```
pub struct Column<R> {
    key: String,
    title: String,
    width: Option<usize>,
    render: CellRenderer<R>,
}

impl<R> Column<R> {
    /// Creates a column with an accessor key, a header title, and a cell
    /// renderer.
    pub fn new(
        key: impl Into<String>,
        title: impl Into<String>,
        render: impl Fn(&R) -> String + Send + Sync + 'static,
    ) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            width: None,
            render: Box::new(render),
        }
    }

    /// Fixes the column to a display width instead of sizing to content.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    /// The unique accessor key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The header label.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The fixed width, if any.
    pub fn width(&self) -> Option<usize> {
        self.width
    }

    /// Renders the cell text for `row`.
    pub fn cell(&self, row: &R) -> String {
        (self.render)(row)
    }
}

/// A column-driven table renderer over caller-owned rows and pagination.
///
/// The table is a pure projection of `(columns, rows, is_loading,
/// pagination, page_count)`: it never mutates rows, never fetches, and
/// never changes pages on its own. Page navigation only reports the
/// requested [`Pagination`] through the `on_pagination_change` callback;
/// the caller updates its own state and passes fresh inputs back down.
pub struct Model<R> {
    pub(super) columns: Vec<Column<R>>,
    pub(super) rows: Vec<R>,
    pub(super) is_loading: bool,
    pub(super) pagination: Pagination,
    pub(super) page_count: usize,
    pub(super) cursor: usize,
    pub(super) loading_text: String,
    pub(super) empty_text: String,
    pub(super) styles: TableStyles,
    pub(super) keymap: TableKeyMap,
    pub(super) on_pagination_change: Option<OnPaginationChange>,
}

impl<R> Model<R> {
    /// Creates a table with the given column schema and no rows.
    pub fn new(columns: Vec<Column<R>>) -> Self {
        debug_assert!(
            columns
                .iter()
                .enumerate()
                .all(|(i, c)| columns[..i].iter().all(|p| p.key() != c.key())),
            "column keys must be unique"
        );
        Self {
            columns,
            rows: Vec::new(),
            is_loading: false,
            pagination: Pagination::default(),
            page_count: 1,
            cursor: 0,
            loading_text: "Loading…".to_string(),
            empty_text: "No Data".to_string(),
            styles: TableStyles::default(),
            keymap: TableKeyMap::default(),
            on_pagination_change: None,
        }
    }

    /// Sets the initial rows (builder pattern).
    pub fn with_rows(mut self, rows: Vec<R>) -> Self {
        self.set_rows(rows);
        self
    }

    /// Replaces the visual styles (builder pattern).
    pub fn with_styles(mut self, styles: TableStyles) -> Self {
        self.styles = styles;
        self
    }

    /// Replaces the key bindings (builder pattern).
    pub fn with_keymap(mut self, keymap: TableKeyMap) -> Self {
        self.keymap = keymap;
        self
    }

    /// Sets the pagination state shown by the controls (builder pattern).
    pub fn with_pagination(mut self, pagination: Pagination, page_count: usize) -> Self {
        self.set_pagination(pagination, page_count);
        self
    }

    /// Registers the pagination sink callback (builder pattern).
    pub fn on_pagination_change<F>(mut self, callback: F) -> Self
    where
        F: Fn(Pagination) -> Option<Cmd> + Send + Sync + 'static,
    {
        self.on_pagination_change = Some(Box::new(callback));
        self
    }

    /// Replaces the displayed rows, resetting the row highlight.
    pub fn set_rows(&mut self, rows: Vec<R>) {
        self.rows = rows;
        self.cursor = 0;
    }

    /// Sets whether an empty table shows the loading indicator instead of
    /// the "No Data" placeholder.
    pub fn set_loading(&mut self, is_loading: bool) {
        self.is_loading = is_loading;
    }

    /// Updates the caller-owned pagination state and page count shown by
    /// the controls.
    pub fn set_pagination(&mut self, pagination: Pagination, page_count: usize) {
        self.pagination = pagination;
        self.page_count = page_count;
    }

    /// The displayed rows.
    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    /// The column schema.
    pub fn columns(&self) -> &[Column<R>] {
        &self.columns
    }

    /// The pagination state currently displayed.
    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    /// The caller-supplied page count.
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Whether the loading indicator is active.
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// The highlighted row, if any rows are displayed.
    pub fn selected_row(&self) -> Option<&R> {
        self.rows.get(self.cursor)
    }

    /// Index of the highlighted row.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Moves the row highlight up one row, stopping at the top.
    pub fn move_row_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Moves the row highlight down one row, stopping at the bottom.
    pub fn move_row_down(&mut self) {
        if !self.rows.is_empty() {
            self.cursor = (self.cursor + 1).min(self.rows.len() - 1);
        }
    }

    /// Requests the first page.
    pub fn go_to_first_page(&mut self) -> Option<Cmd> {
        self.request_page(self.pagination.first())
    }

    /// Requests the previous page. Disabled (no request) on the first
    /// page rather than wrapping.
    pub fn go_to_prev_page(&mut self) -> Option<Cmd> {
        self.request_page(self.pagination.prev())
    }

    /// Requests the next page. Disabled (no request) on the last page
    /// rather than wrapping.
    pub fn go_to_next_page(&mut self) -> Option<Cmd> {
        self.request_page(self.pagination.next(self.page_count))
    }

    /// Requests the last page.
    pub fn go_to_last_page(&mut self) -> Option<Cmd> {
        self.request_page(self.pagination.last(self.page_count))
    }

    // Pagination is caller-owned: the table reports the requested state
    // and leaves its own display state untouched until the caller hands
    // back fresh inputs. Boundary navigation requests nothing.
    fn request_page(&self, requested: Pagination) -> Option<Cmd> {
        if requested == self.pagination {
            return None;
        }
        self.on_pagination_change
            .as_ref()
            .and_then(|callback| callback(requested))
    }
}
