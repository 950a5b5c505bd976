//! View rendering for the table: header, body, placeholders, and page
//! controls.
//!
//! Cell layout is display-width aware: widths are measured after stripping
//! ANSI escapes so styled cell content lines up, and truncation is
//! grapheme-safe.

use super::Model;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

const COLUMN_GAP: &str = "  ";
const ELLIPSIS: &str = "…";

/// Display width of `text` with ANSI escape sequences ignored.
fn display_width(text: &str) -> usize {
    strip_ansi_escapes::strip_str(text).width()
}

/// Pads `text` with spaces to `width` columns, truncating with an ellipsis
/// when it is too wide. Styled (ANSI-carrying) text is only padded, never
/// truncated, since cutting inside an escape sequence would corrupt it.
fn fit(text: &str, width: usize) -> String {
    let current = display_width(text);
    if current <= width {
        let mut out = String::from(text);
        out.push_str(&" ".repeat(width - current));
        return out;
    }
    if text.width() != current {
        // Styled text wider than the column: leave it alone.
        return String::from(text);
    }

    let mut out = String::new();
    let mut used = 0;
    for grapheme in text.graphemes(true) {
        let w = grapheme.width();
        if used + w > width.saturating_sub(1) {
            break;
        }
        out.push_str(grapheme);
        used += w;
    }
    out.push_str(ELLIPSIS);
    out.push_str(&" ".repeat(width.saturating_sub(used + 1)));
    out
}

impl<R> Model<R> {
    // A column sizes to its widest content (header included) unless the
    // descriptor fixes a width. Pure function of columns and rows.
    fn column_width(&self, index: usize) -> usize {
        let column = &self.columns[index];
        if let Some(width) = column.width() {
            return width;
        }
        self.rows
            .iter()
            .map(|row| display_width(&column.cell(row)))
            .chain(std::iter::once(display_width(column.title())))
            .max()
            .unwrap_or(0)
    }

    /// Renders the header row: one label per column descriptor.
    pub(super) fn view_header(&self) -> String {
        let cells: Vec<String> = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, column)| fit(column.title(), self.column_width(i)))
            .collect();
        self.styles.header.clone().render(&cells.join(COLUMN_GAP))
    }

    /// Renders the body rows, or the loading/empty placeholder when there
    /// are no rows.
    pub(super) fn view_body(&self) -> String {
        if self.rows.is_empty() {
            return if self.is_loading {
                self.styles.loading.clone().render(&self.loading_text)
            } else {
                self.styles.empty.clone().render(&self.empty_text)
            };
        }

        let widths: Vec<usize> = (0..self.columns.len())
            .map(|i| self.column_width(i))
            .collect();

        let mut lines = Vec::with_capacity(self.rows.len());
        for (row_index, row) in self.rows.iter().enumerate() {
            let cells: Vec<String> = self
                .columns
                .iter()
                .zip(widths.iter())
                .map(|(column, &width)| fit(&column.cell(row), width))
                .collect();
            let line = cells.join(COLUMN_GAP);

            let styled = if row_index == self.cursor {
                self.styles.selected_row.clone().render(&line)
            } else {
                self.styles.cell.clone().render(&line)
            };
            lines.push(styled);
        }
        lines.join("\n")
    }

    /// Renders the page controls row, or nothing when a single page holds
    /// everything.
    ///
    /// Controls that cannot navigate further are rendered in the disabled
    /// style rather than dropped, so the row never shifts layout.
    pub(super) fn view_controls(&self) -> String {
        if self.page_count <= 1 {
            return String::new();
        }

        let at_first = self.pagination.on_first_page();
        let at_last = self.pagination.on_last_page(self.page_count);

        let control = |label: &str, disabled: bool| {
            if disabled {
                self.styles.control_disabled.clone().render(label)
            } else {
                self.styles.control.clone().render(label)
            }
        };

        let indicator = self.styles.page_indicator.clone().render(&format!(
            "{}/{}",
            self.pagination.page_index + 1,
            self.page_count
        ));

        [
            control("« first", at_first),
            control("‹ prev", at_first),
            indicator,
            control("next ›", at_last),
            control("last »", at_last),
        ]
        .join(COLUMN_GAP)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_pads_to_width() {
        assert_eq!(fit("ab", 5), "ab   ");
        assert_eq!(fit("abcde", 5), "abcde");
    }

    #[test]
    fn test_fit_truncates_with_ellipsis() {
        assert_eq!(fit("abcdefgh", 5), "abcd…");
        assert_eq!(display_width(&fit("abcdefgh", 5)), 5);
    }

    #[test]
    fn test_fit_is_width_aware_for_wide_glyphs() {
        // "日本語" is six columns wide.
        assert_eq!(display_width("日本語"), 6);
        let fitted = fit("日本語", 5);
        assert_eq!(display_width(&fitted), 5);
        assert!(fitted.ends_with(ELLIPSIS) || fitted.contains(ELLIPSIS));
    }

    #[test]
    fn test_display_width_ignores_ansi() {
        let styled = "\u{1b}[1mbold\u{1b}[0m";
        assert_eq!(display_width(styled), 4);
    }
}
