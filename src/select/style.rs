//! Styling for the virtualized select component.
//!
//! Defaults use `AdaptiveColor` throughout so the component reads well on
//! both light and dark terminals.

use lipgloss_extras::prelude::*;

/// Marker drawn in front of the highlighted option.
pub const CURSOR_MARKER: &str = ">";

/// Marker drawn in front of selected options in multi-select mode.
pub const SELECTED_MARKER: &str = "✓";

/// Visual styles for every element of the select.
#[derive(Debug, Clone)]
pub struct SelectStyles {
    /// The "Filter:"-style prompt in front of the query text.
    pub prompt: Style,
    /// The query text itself.
    pub query: Style,
    /// An option row that is neither highlighted nor selected.
    pub option: Style,
    /// The option row under the cursor.
    pub highlighted: Style,
    /// Rows whose value is part of the current selection.
    pub selected: Style,
    /// The "no options found" placeholder.
    pub placeholder: Style,
    /// The closed-popover summary line.
    pub summary: Style,
    /// The match-count status line under the options.
    pub status: Style,
}

impl Default for SelectStyles {
    fn default() -> Self {
        let subdued = AdaptiveColor {
            Light: "#9B9B9B",
            Dark: "#5C5C5C",
        };

        Self {
            prompt: Style::new().foreground(AdaptiveColor {
                Light: "#04B575",
                Dark: "#ECFD65",
            }),
            query: Style::new(),
            option: Style::new(),
            highlighted: Style::new()
                .foreground(AdaptiveColor {
                    Light: "#EE6FF8",
                    Dark: "#EE6FF8",
                })
                .bold(true),
            selected: Style::new().foreground(AdaptiveColor {
                Light: "#04B575",
                Dark: "#04B575",
            }),
            placeholder: Style::new().foreground(subdued.clone()).faint(true),
            summary: Style::new(),
            status: Style::new().foreground(subdued),
        }
    }
}
