//! Generic paginated data table driven by column descriptors.
//!
//! The table renders rows it is handed, nothing more: data fetching,
//! pagination state, and the total page count all live with the caller.
//! One header cell per [`Column`], one body row per record, a loading or
//! "No Data" placeholder when the row set is empty, and a page-controls
//! row that appears only when there is more than one page. Navigating
//! pages invokes the caller's `on_pagination_change` callback with the
//! requested [`Pagination`](crate::pagination::Pagination); the caller
//! refetches and passes updated rows back down.
//!
//! # Examples
//!
//! ```
//! use backoffice_widgets::pagination::{page_count_for, Pagination};
//! use backoffice_widgets::table::{Column, Model};
//!
//! struct Booking {
//!     reference: String,
//!     nights: u32,
//! }
//!
//! let columns = vec![
//!     Column::new("reference", "Reference", |b: &Booking| b.reference.clone()),
//!     Column::new("nights", "Nights", |b: &Booking| b.nights.to_string()),
//! ];
//!
//! // The caller owns pagination and derives the page count from a
//! // server-reported total.
//! let pagination = Pagination::new(0, 25);
//! let page_count = page_count_for(93, pagination.page_size());
//!
//! let table = Model::new(columns)
//!     .with_rows(vec![Booking { reference: "BK-001".into(), nights: 3 }])
//!     .with_pagination(pagination, page_count);
//!
//! let rendered = table.view_string();
//! assert!(rendered.contains("BK-001"));
//! ```

mod keys;
mod model;
mod rendering;
pub mod style;

pub use keys::TableKeyMap;
pub use model::{CellRenderer, Column, Model, OnPaginationChange};
pub use style::TableStyles;

use bubbletea_rs::{Cmd, KeyMsg, Model as BubbleTeaModel, Msg};

impl<R> Model<R> {
    /// Handles a key message: row highlighting and page navigation.
    ///
    /// Returned commands come from the pagination callback; navigation at
    /// a boundary requests nothing.
    pub fn handle_key(&mut self, key_msg: &KeyMsg) -> Option<Cmd> {
        if self.keymap.row_up.matches(key_msg) {
            self.move_row_up();
        } else if self.keymap.row_down.matches(key_msg) {
            self.move_row_down();
        } else if self.keymap.first_page.matches(key_msg) {
            return self.go_to_first_page();
        } else if self.keymap.prev_page.matches(key_msg) {
            return self.go_to_prev_page();
        } else if self.keymap.next_page.matches(key_msg) {
            return self.go_to_next_page();
        } else if self.keymap.last_page.matches(key_msg) {
            return self.go_to_last_page();
        }
        None
    }

    /// Renders the table as a string: header, body (or placeholder), and
    /// the page controls when more than one page exists.
    ///
    /// A pure projection of the current inputs: identical state renders
    /// identical output.
    pub fn view_string(&self) -> String {
        let mut sections = vec![self.view_header(), self.view_body()];
        let controls = self.view_controls();
        if !controls.is_empty() {
            sections.push(controls);
        }
        sections.join("\n")
    }
}

impl<R: Send + Sync + 'static> BubbleTeaModel for Model<R> {
    fn init() -> (Self, Option<Cmd>) {
        (Self::new(Vec::new()), None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        let key_msg = msg.downcast_ref::<KeyMsg>()?;
        self.handle_key(key_msg)
    }

    fn view(&self) -> String {
        self.view_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagination::Pagination;
    use crossterm::event::{KeyCode, KeyModifiers};
    use std::sync::{Arc, Mutex};

    #[derive(Clone)]
    struct Product {
        name: String,
        price: u32,
    }

    fn columns() -> Vec<Column<Product>> {
        vec![
            Column::new("name", "Name", |p: &Product| p.name.clone()),
            Column::new("price", "Price", |p: &Product| format!("${}", p.price)),
        ]
    }

    fn products(n: usize) -> Vec<Product> {
        (0..n)
            .map(|i| Product {
                name: format!("Product {i}"),
                price: 10 + i as u32,
            })
            .collect()
    }

    fn key(code: KeyCode) -> KeyMsg {
        KeyMsg {
            key: code,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_renders_header_and_cells() {
        let table = Model::new(columns()).with_rows(products(2));
        let rendered = table.view_string();

        assert!(rendered.contains("Name"));
        assert!(rendered.contains("Price"));
        assert!(rendered.contains("Product 0"));
        assert!(rendered.contains("$11"));
    }

    #[test]
    fn test_view_is_pure() {
        let table = Model::new(columns())
            .with_rows(products(5))
            .with_pagination(Pagination::new(1, 5), 4);

        assert_eq!(table.view_string(), table.view_string());
    }

    #[test]
    fn test_empty_and_loading_are_distinct() {
        let mut table = Model::new(columns());

        table.set_loading(true);
        let loading = table.view_string();
        assert!(loading.contains("Loading…"));
        assert!(!loading.contains("No Data"));

        table.set_loading(false);
        let empty = table.view_string();
        assert!(empty.contains("No Data"));
        assert!(!empty.contains("Loading…"));
    }

    #[test]
    fn test_controls_hidden_for_single_page() {
        let table = Model::new(columns())
            .with_rows(products(3))
            .with_pagination(Pagination::new(0, 10), 1);

        let rendered = table.view_string();
        assert!(!rendered.contains("first"));
        assert!(!rendered.contains("next"));
    }

    #[test]
    fn test_controls_present_on_both_boundaries() {
        // Disabled controls are still rendered: same labels on every page.
        let labels = ["« first", "‹ prev", "next ›", "last »"];

        let first = Model::new(columns())
            .with_rows(products(3))
            .with_pagination(Pagination::new(0, 10), 4);
        let last = Model::new(columns())
            .with_rows(products(3))
            .with_pagination(Pagination::new(3, 10), 4);

        for label in labels {
            assert!(first.view_string().contains(label));
            assert!(last.view_string().contains(label));
        }
        assert!(first.view_string().contains("1/4"));
        assert!(last.view_string().contains("4/4"));
    }

    #[test]
    fn test_navigation_requests_pages_through_callback() {
        let requested: Arc<Mutex<Vec<Pagination>>> = Arc::new(Mutex::new(vec![]));
        let sink = Arc::clone(&requested);

        let mut table = Model::new(columns())
            .with_rows(products(3))
            .with_pagination(Pagination::new(1, 10), 4)
            .on_pagination_change(move |p| {
                sink.lock().unwrap().push(p);
                None
            });

        table.go_to_next_page();
        table.go_to_first_page();
        table.go_to_last_page();

        let seen = requested.lock().unwrap();
        assert_eq!(seen.len(), 3);
        assert_eq!(seen[0].page_index, 2);
        assert_eq!(seen[1].page_index, 0);
        assert_eq!(seen[2].page_index, 3);

        // The table never moves its own displayed page.
        assert_eq!(table.pagination().page_index, 1);
    }

    #[test]
    fn test_boundary_navigation_requests_nothing() {
        let requested: Arc<Mutex<Vec<Pagination>>> = Arc::new(Mutex::new(vec![]));
        let sink = Arc::clone(&requested);

        let mut table = Model::new(columns())
            .with_pagination(Pagination::new(0, 10), 3)
            .on_pagination_change(move |p| {
                sink.lock().unwrap().push(p);
                None
            });

        table.go_to_prev_page();
        table.go_to_first_page();
        assert!(requested.lock().unwrap().is_empty());

        table.set_pagination(Pagination::new(2, 10), 3);
        table.go_to_next_page();
        table.go_to_last_page();
        assert!(requested.lock().unwrap().is_empty());
    }

    #[test]
    fn test_key_handling_drives_navigation() {
        let requested: Arc<Mutex<Vec<Pagination>>> = Arc::new(Mutex::new(vec![]));
        let sink = Arc::clone(&requested);

        let mut table = Model::new(columns())
            .with_rows(products(3))
            .with_pagination(Pagination::new(1, 10), 4)
            .on_pagination_change(move |p| {
                sink.lock().unwrap().push(p);
                None
            });

        table.handle_key(&key(KeyCode::Right));
        table.handle_key(&key(KeyCode::Left));
        let seen = requested.lock().unwrap();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].page_index, 2);
        assert_eq!(seen[1].page_index, 0);
    }

    #[test]
    fn test_row_highlight_moves_within_bounds() {
        let mut table = Model::new(columns()).with_rows(products(3));
        assert_eq!(table.cursor(), 0);

        table.move_row_up();
        assert_eq!(table.cursor(), 0);

        table.move_row_down();
        table.move_row_down();
        table.move_row_down();
        assert_eq!(table.cursor(), 2);
        assert_eq!(table.selected_row().unwrap().name, "Product 2");
    }

    #[test]
    fn test_set_rows_resets_highlight() {
        let mut table = Model::new(columns()).with_rows(products(3));
        table.move_row_down();
        table.set_rows(products(1));
        assert_eq!(table.cursor(), 0);
    }

    #[test]
    fn test_fixed_width_column_truncates_cells() {
        let cols = vec![Column::new("name", "Name", |p: &Product| p.name.clone()).with_width(6)];
        let table = Model::new(cols)
            .with_styles({
                // Plain styles so cell text is inspectable.
                let mut styles = TableStyles::default();
                styles.cell = lipgloss_extras::prelude::Style::new();
                styles.selected_row = lipgloss_extras::prelude::Style::new();
                styles
            })
            .with_rows(products(1));

        // "Product 0" truncated into six columns.
        assert!(table.view_string().contains("Produ…"));
    }
}
