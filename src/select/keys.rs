//! Key bindings for the virtualized select component.
//!
//! Navigation follows terminal conventions: arrows plus vim-style keys for
//! cursor movement, page keys for jumping by a viewport, Enter to pick the
//! highlighted option. Because the query input captures plain characters,
//! the letter aliases (`j`/`k`/`g`/`G`) only apply while the query line is
//! not capturing, which the select model decides.

use crate::key::{Binding, KeyMap};
use crossterm::event::{KeyCode, KeyModifiers};

/// Key bindings for select navigation, picking, and dismissal.
#[derive(Debug, Clone)]
pub struct SelectKeyMap {
    /// Move the highlight up one option.
    pub cursor_up: Binding,
    /// Move the highlight down one option.
    pub cursor_down: Binding,
    /// Jump up by one viewport of options.
    pub page_up: Binding,
    /// Jump down by one viewport of options.
    pub page_down: Binding,
    /// Jump to the first option.
    pub go_to_start: Binding,
    /// Jump to the last option.
    pub go_to_end: Binding,
    /// Pick the highlighted option.
    pub pick: Binding,
    /// Toggle the filtered subset in or out of the selection (multi-select).
    pub pick_all: Binding,
    /// Clear the query, or close the popover when the query is empty.
    pub dismiss: Binding,
}

impl Default for SelectKeyMap {
    fn default() -> Self {
        Self {
            cursor_up: Binding::new(vec![KeyCode::Up]).with_help("↑", "up"),
            cursor_down: Binding::new(vec![KeyCode::Down]).with_help("↓", "down"),
            page_up: Binding::new(vec![KeyCode::PageUp]).with_help("pgup", "page up"),
            page_down: Binding::new(vec![KeyCode::PageDown]).with_help("pgdn", "page down"),
            go_to_start: Binding::new(vec![KeyCode::Home]).with_help("home", "first option"),
            go_to_end: Binding::new(vec![KeyCode::End]).with_help("end", "last option"),
            pick: Binding::new(vec![KeyCode::Enter]).with_help("enter", "select"),
            pick_all: Binding::new(vec![])
                .with_chord(KeyCode::Char('a'), KeyModifiers::CONTROL)
                .with_help("ctrl+a", "toggle all"),
            dismiss: Binding::new(vec![KeyCode::Esc]).with_help("esc", "clear/close"),
        }
    }
}

impl KeyMap for SelectKeyMap {
    fn short_help(&self) -> Vec<&Binding> {
        vec![&self.cursor_up, &self.cursor_down, &self.pick, &self.dismiss]
    }

    fn full_help(&self) -> Vec<Vec<&Binding>> {
        vec![
            vec![
                &self.cursor_up,
                &self.cursor_down,
                &self.page_up,
                &self.page_down,
                &self.go_to_start,
                &self.go_to_end,
            ],
            vec![&self.pick, &self.pick_all, &self.dismiss],
        ]
    }
}
