//! Back-office building blocks for bubbletea-rs applications.
//!
//! This crate provides the two widgets every admin screen ends up
//! needing, plus the small pieces they are built from:
//!
//! - [`select`]: a searchable option list with windowed rendering. Only
//!   the rows that fit the viewport are materialized, so a list with tens
//!   of thousands of options renders in constant time. Single-select and
//!   multi-select share one model, parameterized by
//!   [`SelectionMode`](selection::SelectionMode).
//! - [`table`]: a column-driven paginated data table. Rows and pagination
//!   state are owned by the caller; the table renders what it is given
//!   and reports page-navigation requests through a callback.
//!
//! The supporting modules are usable on their own:
//!
//! - [`window`]: the windowing arithmetic behind the select list.
//! - [`filter`]: case-insensitive substring and fuzzy option filtering.
//! - [`selection`]: ordered, duplicate-free selected-value sets.
//! - [`pagination`]: page index/size state and page-count math.
//! - [`key`]: key bindings with help text, shared by both widgets.
//!
//! # Examples
//!
//! ```
//! use backoffice_widgets::select::Model as Select;
//! use backoffice_widgets::selection::SelectionMode;
//!
//! let countries = vec!["Portugal".to_string(), "Poland".to_string()];
//! let mut select = Select::new(countries, SelectionMode::Replace, 10, 1);
//!
//! select.open();
//! select.set_query("port");
//! assert_eq!(select.len(), 1);
//! ```

pub mod filter;
pub mod key;
pub mod pagination;
pub mod select;
pub mod selection;
pub mod table;
pub mod window;

use bubbletea_rs::Cmd;

/// Common interface for focusable components.
///
/// Components receive key input only while focused; an application with
/// several widgets on screen moves focus between them and routes messages
/// to the focused one.
pub trait Component {
    /// Focuses the component, optionally returning a command to run.
    fn focus(&mut self) -> Option<Cmd>;

    /// Removes focus from the component.
    fn blur(&mut self);

    /// Whether the component currently has focus.
    fn focused(&self) -> bool;
}

/// Convenience re-exports for typical usage.
///
/// ```
/// use backoffice_widgets::prelude::*;
/// ```
pub mod prelude {
    pub use crate::filter::{FilterMode, FilteredItem, Item};
    pub use crate::key::{Binding, KeyMap};
    pub use crate::pagination::{page_count_for, Pagination};
    pub use crate::select::{Model as Select, OnSelect, SelectKeyMap, SelectStyles};
    pub use crate::selection::{Selection, SelectionMode};
    pub use crate::table::{
        CellRenderer, Column, Model as Table, OnPaginationChange, TableKeyMap, TableStyles,
    };
    pub use crate::window::{VisibleRange, Window};
    pub use crate::Component;
}
