//! Styling for the paginated table component.

use lipgloss_extras::prelude::*;

/// Visual styles for the table's header, body, placeholders, and page
/// controls.
///
/// Disabled page controls get their own style instead of being hidden, so
/// the controls row keeps a stable layout at the page boundaries.
#[derive(Debug, Clone)]
pub struct TableStyles {
    /// Column header row.
    pub header: Style,
    /// Ordinary body cells.
    pub cell: Style,
    /// The highlighted row.
    pub selected_row: Style,
    /// The "No Data" placeholder.
    pub empty: Style,
    /// The loading indicator.
    pub loading: Style,
    /// Enabled page controls.
    pub control: Style,
    /// Disabled page controls (still rendered, visually dimmed).
    pub control_disabled: Style,
    /// The "page x/y" indicator between the controls.
    pub page_indicator: Style,
}

impl Default for TableStyles {
    fn default() -> Self {
        let subdued = AdaptiveColor {
            Light: "#9B9B9B",
            Dark: "#5C5C5C",
        };

        Self {
            header: Style::new().bold(true),
            cell: Style::new(),
            selected_row: Style::new()
                .foreground(AdaptiveColor {
                    Light: "#EE6FF8",
                    Dark: "#EE6FF8",
                })
                .bold(true),
            empty: Style::new().foreground(subdued.clone()).faint(true),
            loading: Style::new().foreground(subdued.clone()),
            control: Style::new().foreground(AdaptiveColor {
                Light: "#1A56DB",
                Dark: "#7AA2F7",
            }),
            control_disabled: Style::new().foreground(subdued.clone()).faint(true),
            page_indicator: Style::new().foreground(subdued),
        }
    }
}
