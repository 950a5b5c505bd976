//! Key bindings for the paginated table component.

use crate::key::{Binding, KeyMap};
use crossterm::event::KeyCode;

/// Key bindings for row highlighting and page navigation.
#[derive(Debug, Clone)]
pub struct TableKeyMap {
    /// Move the row highlight up.
    pub row_up: Binding,
    /// Move the row highlight down.
    pub row_down: Binding,
    /// Request the first page.
    pub first_page: Binding,
    /// Request the previous page.
    pub prev_page: Binding,
    /// Request the next page.
    pub next_page: Binding,
    /// Request the last page.
    pub last_page: Binding,
}

impl Default for TableKeyMap {
    fn default() -> Self {
        Self {
            row_up: Binding::new(vec![KeyCode::Up, KeyCode::Char('k')]).with_help("↑/k", "up"),
            row_down: Binding::new(vec![KeyCode::Down, KeyCode::Char('j')])
                .with_help("↓/j", "down"),
            first_page: Binding::new(vec![KeyCode::Home, KeyCode::Char('g')])
                .with_help("g/home", "first page"),
            prev_page: Binding::new(vec![KeyCode::Left, KeyCode::Char('h'), KeyCode::PageUp])
                .with_help("←/h/pgup", "prev page"),
            next_page: Binding::new(vec![KeyCode::Right, KeyCode::Char('l'), KeyCode::PageDown])
                .with_help("→/l/pgdn", "next page"),
            last_page: Binding::new(vec![KeyCode::End, KeyCode::Char('G')])
                .with_help("G/end", "last page"),
        }
    }
}

impl KeyMap for TableKeyMap {
    fn short_help(&self) -> Vec<&Binding> {
        vec![&self.row_up, &self.row_down, &self.prev_page, &self.next_page]
    }

    fn full_help(&self) -> Vec<Vec<&Binding>> {
        vec![
            vec![&self.row_up, &self.row_down],
            vec![
                &self.first_page,
                &self.prev_page,
                &self.next_page,
                &self.last_page,
            ],
        ]
    }
}
