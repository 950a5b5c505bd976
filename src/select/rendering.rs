//! View rendering for the select component.
//!
//! Only the options inside the visible window are drawn; an option taller
//! than one row is padded with blank lines so scroll geometry stays
//! consistent with the window math.

use super::style::{CURSOR_MARKER, SELECTED_MARKER};
use super::Model;
use crate::filter::Item;
use crate::selection::SelectionMode;

impl<I: Item> Model<I> {
    /// Renders the query line ("Filter: <query>").
    pub(super) fn view_query(&self) -> String {
        format!(
            "{}{}",
            self.styles.prompt.clone().render(&self.prompt),
            self.styles.query.clone().render(&self.query)
        )
    }

    /// Renders the windowed option rows, or the empty placeholder.
    pub(super) fn view_options(&self) -> String {
        if self.filtered.is_empty() {
            return self.styles.placeholder.clone().render(&self.placeholder);
        }

        let range = self.visible_range();
        let mut lines = Vec::with_capacity(range.len() * self.window.item_height());

        for i in range.indices() {
            let option = &self.filtered[i];
            let value = option.item.to_string();

            let cursor = if i == self.cursor { CURSOR_MARKER } else { " " };
            let is_selected = self.selection.contains(&value);
            let line = match self.mode {
                SelectionMode::Toggle => {
                    let mark = if is_selected { SELECTED_MARKER } else { " " };
                    format!("{} {} {}", cursor, mark, value)
                }
                SelectionMode::Replace => format!("{} {}", cursor, value),
            };

            let styled = if i == self.cursor {
                self.styles.highlighted.clone().render(&line)
            } else if is_selected {
                self.styles.selected.clone().render(&line)
            } else {
                self.styles.option.clone().render(&line)
            };
            lines.push(styled);

            // Uniform row height: pad multi-row options with blank lines.
            for _ in 1..self.window.item_height() {
                lines.push(String::new());
            }
        }

        lines.join("\n")
    }

    /// Renders the match-count status line.
    pub(super) fn view_status(&self) -> String {
        let mut status = format!("{}/{} options", self.len(), self.total_len());
        if self.mode == SelectionMode::Toggle && !self.selection.is_empty() {
            status.push_str(&format!(" · {} selected", self.selection.len()));
        }
        self.styles.status.clone().render(&status)
    }

    /// Renders the closed-popover summary: the selected values, or the
    /// empty-selection hint.
    pub(super) fn view_summary(&self) -> String {
        if self.selection.is_empty() {
            self.styles.placeholder.clone().render(&self.summary_empty)
        } else {
            self.styles
                .summary
                .clone()
                .render(&self.selection.values().join(", "))
        }
    }
}
