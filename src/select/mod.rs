//! Virtualized, searchable option list with pluggable selection policy.
//!
//! The select renders a popover of options inside a fixed-height viewport
//! and only draws the rows intersecting the current scroll window, so very
//! large option lists (countries, cities, account numbers) stay cheap to
//! render. Typing narrows the options with a case-insensitive substring
//! filter (fuzzy matching is available via
//! [`FilterMode::Fuzzy`](crate::filter::FilterMode)); every query edit
//! re-filters from scratch and resets the scroll position.
//!
//! One component covers both the single- and multi-select variants: the
//! windowing, filtering, and navigation logic is shared and only the
//! [`SelectionMode`](crate::selection::SelectionMode) policy differs.
//!
//! # Examples
//!
//! ```
//! use backoffice_widgets::select::Model;
//! use backoffice_widgets::selection::SelectionMode;
//!
//! let options: Vec<String> = (0..5_000).map(|i| format!("Account {i:04}")).collect();
//!
//! // An 8-row popover over single-row options.
//! let mut select = Model::new(options, SelectionMode::Toggle, 8, 1);
//! select.open();
//!
//! // Only the visible window is rendered, no matter the item count.
//! let range = select.visible_range();
//! assert!(range.len() <= select.window().max_visible());
//! ```

mod keys;
mod model;
mod rendering;
pub mod style;

pub use keys::SelectKeyMap;
pub use model::{Model, OnSelect};
pub use style::SelectStyles;

use crate::filter::Item;
use crate::selection::SelectionMode;
use bubbletea_rs::{Cmd, KeyMsg, Model as BubbleTeaModel, Msg};
use crossterm::event::{KeyCode, KeyModifiers};

impl<I: Item + Send + Sync + 'static> BubbleTeaModel for Model<I> {
    fn init() -> (Self, Option<Cmd>) {
        (Self::new(vec![], SelectionMode::Replace, 10, 1), None)
    }

    /// Routes key input to query editing, navigation, and picking.
    ///
    /// While the popover is closed the component ignores input; the host
    /// decides when to open it. Plain characters and backspace edit the
    /// query; everything else goes through the keymap.
    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if !self.is_open() {
            return None;
        }
        let key_msg = msg.downcast_ref::<KeyMsg>()?;

        if self.keymap.dismiss.matches(key_msg) {
            if self.query().is_empty() {
                self.close();
            } else {
                self.clear_query();
            }
            return None;
        }
        if self.keymap.pick.matches(key_msg) {
            return self.pick_highlighted();
        }
        if self.keymap.pick_all.matches(key_msg) {
            return self.pick_all_filtered();
        }
        if self.keymap.cursor_up.matches(key_msg) {
            self.move_up();
        } else if self.keymap.cursor_down.matches(key_msg) {
            self.move_down();
        } else if self.keymap.page_up.matches(key_msg) {
            self.move_page_up();
        } else if self.keymap.page_down.matches(key_msg) {
            self.move_page_down();
        } else if self.keymap.go_to_start.matches(key_msg) {
            self.move_to_start();
        } else if self.keymap.go_to_end.matches(key_msg) {
            self.move_to_end();
        } else {
            match key_msg.key {
                KeyCode::Char(c)
                    if !key_msg
                        .modifiers
                        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
                {
                    self.push_query_char(c);
                }
                KeyCode::Backspace => self.pop_query_char(),
                _ => {}
            }
        }
        None
    }

    /// Renders the closed summary line, or the open popover: query line,
    /// windowed options (or the "no options found" placeholder), and the
    /// match-count status line.
    fn view(&self) -> String {
        if !self.is_open() {
            return self.view_summary();
        }

        let mut sections = vec![self.view_query(), self.view_options()];
        if self.show_status {
            sections.push(self.view_status());
        }
        sections.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::FilterMode;
    use std::sync::{Arc, Mutex};

    fn labels(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("option {i:04}")).collect()
    }

    fn key(code: KeyCode) -> Msg {
        Box::new(KeyMsg {
            key: code,
            modifiers: KeyModifiers::NONE,
        }) as Msg
    }

    #[test]
    fn test_rendered_rows_are_bounded_by_window() {
        let mut select = Model::new(labels(10_000), SelectionMode::Replace, 10, 1);
        select.open();

        let rendered = select.view_options();
        let rows = rendered.lines().count();
        assert_eq!(rows, select.window().max_visible());
        assert_eq!(rows, 11);
    }

    #[test]
    fn test_scrolling_renders_the_right_slice() {
        let mut select = Model::new(labels(500), SelectionMode::Replace, 10, 1);
        select.open();
        select.set_scroll_offset(123);

        let rendered = select.view_options();
        assert!(rendered.contains("option 0123"));
        assert!(rendered.contains("option 0133"));
        assert!(!rendered.contains("option 0122"));
        assert!(!rendered.contains("option 0134"));
    }

    #[test]
    fn test_query_edit_resets_scroll_and_cursor() {
        let mut select = Model::new(labels(500), SelectionMode::Replace, 10, 1);
        select.open();
        select.move_to_end();
        assert!(select.scroll_offset() > 0);

        select.push_query_char('1');
        assert_eq!(select.scroll_offset(), 0);
        assert_eq!(select.cursor(), 0);
    }

    #[test]
    fn test_filtering_is_substring_and_case_insensitive() {
        let items: Vec<String> = vec!["Paris".into(), "parma".into(), "Lyon".into()];
        let mut select = Model::new(items, SelectionMode::Replace, 5, 1);
        select.open();
        select.set_query("PAR");
        assert_eq!(select.len(), 2);
    }

    #[test]
    fn test_empty_filter_shows_placeholder() {
        let mut select = Model::new(labels(20), SelectionMode::Replace, 5, 1);
        select.open();
        select.set_query("does-not-match");
        assert!(select.is_empty());
        assert!(select.view_options().contains("No options found."));
    }

    #[test]
    fn test_replace_pick_closes_and_emits() {
        let seen: Arc<Mutex<Vec<Vec<String>>>> = Arc::new(Mutex::new(vec![]));
        let sink = Arc::clone(&seen);

        let items: Vec<String> = vec!["alpha".into(), "beta".into()];
        let mut select = Model::new(items, SelectionMode::Replace, 5, 1).on_select(move |values| {
            sink.lock().unwrap().push(values.to_vec());
            None
        });

        select.open();
        select.move_down();
        select.pick_highlighted();

        assert!(!select.is_open());
        assert_eq!(select.selected_values(), ["beta"]);
        assert_eq!(seen.lock().unwrap().as_slice(), [vec!["beta".to_string()]]);
    }

    #[test]
    fn test_replace_reselect_is_noop_not_deselect() {
        let items: Vec<String> = vec!["alpha".into(), "beta".into()];
        let mut select = Model::new(items, SelectionMode::Replace, 5, 1);

        select.open();
        select.pick_highlighted();
        assert_eq!(select.selected_values(), ["alpha"]);

        select.open();
        select.pick_highlighted();
        assert_eq!(select.selected_values(), ["alpha"]);
        assert!(!select.is_open());
    }

    #[test]
    fn test_toggle_pick_stays_open_and_toggles_membership() {
        let items: Vec<String> = vec!["a".into(), "b".into(), "c".into()];
        let mut select = Model::new(items, SelectionMode::Toggle, 5, 1);

        select.open();
        select.move_down();
        select.pick_highlighted(); // select "b"
        assert_eq!(select.selected_values(), ["b"]);

        select.move_to_start();
        select.pick_highlighted(); // select "a"
        assert_eq!(select.selected_values(), ["b", "a"]);

        select.move_down();
        select.pick_highlighted(); // deselect "b"
        assert_eq!(select.selected_values(), ["a"]);
        assert!(select.is_open());
    }

    #[test]
    fn test_pick_all_preserves_selection_outside_filtered_subset() {
        let items: Vec<String> = vec!["red".into(), "green".into(), "grey".into()];
        let mut select = Model::new(items, SelectionMode::Toggle, 5, 1);

        select.open();
        select.pick_highlighted(); // select "red"
        select.set_query("gr");
        select.pick_all_filtered();
        assert_eq!(select.selected_values(), ["red", "green", "grey"]);

        // A second toggle removes only the filtered subset.
        select.pick_all_filtered();
        assert_eq!(select.selected_values(), ["red"]);
    }

    #[test]
    fn test_update_routes_typed_characters_to_query() {
        let mut select = Model::new(labels(50), SelectionMode::Replace, 5, 1);
        select.open();

        select.update(key(KeyCode::Char('0')));
        select.update(key(KeyCode::Char('0')));
        select.update(key(KeyCode::Char('7')));
        assert_eq!(select.query(), "007");
        assert_eq!(select.len(), 1);

        select.update(key(KeyCode::Backspace));
        assert_eq!(select.query(), "00");
    }

    #[test]
    fn test_dismiss_clears_query_then_closes() {
        let mut select = Model::new(labels(10), SelectionMode::Replace, 5, 1);
        select.open();
        select.set_query("3");

        select.update(key(KeyCode::Esc));
        assert!(select.is_open());
        assert_eq!(select.query(), "");

        select.update(key(KeyCode::Esc));
        assert!(!select.is_open());
    }

    #[test]
    fn test_view_is_pure() {
        let mut select = Model::new(labels(50), SelectionMode::Toggle, 8, 1);
        select.open();
        select.set_query("1");
        select.move_down();

        assert_eq!(select.view(), select.view());
    }

    #[test]
    fn test_fuzzy_mode_matches_subsequences() {
        let items: Vec<String> = vec!["production".into(), "staging".into()];
        let mut select =
            Model::new(items, SelectionMode::Replace, 5, 1).with_filter_mode(FilterMode::Fuzzy);
        select.open();
        select.set_query("prdn");
        assert_eq!(select.len(), 1);
    }

    #[test]
    fn test_multirow_options_pad_to_item_height() {
        let mut select = Model::new(labels(100), SelectionMode::Replace, 10, 2);
        select.open();

        let rendered = select.view_options();
        let rows = rendered.lines().count();
        // ceil(10/2) + 1 = 6 options, each two rows, minus the trailing
        // blank line trimmed by lines().
        assert_eq!(select.window().max_visible(), 6);
        assert_eq!(rows, 11);
    }
}
