//! Model struct, construction, and state transitions for the select.

use super::keys::SelectKeyMap;
use super::style::SelectStyles;
use crate::filter::{self, FilterMode, FilteredItem, Item};
use crate::selection::{Selection, SelectionMode};
use crate::window::{VisibleRange, Window};
use crate::Component;
use bubbletea_rs::Cmd;

/// Selection sink: invoked with the selected values (one entry in replace
/// mode, insertion-ordered entries in toggle mode) whenever a pick changes
/// or re-confirms the selection.
pub type OnSelect = Box<dyn Fn(&[String]) -> Option<Cmd> + Send + Sync>;

/// A searchable option list that renders only the rows intersecting its
/// scroll viewport.
///
/// The model owns its query, cursor, and scroll state exclusively; domain
/// data flows in through [`set_items`](Model::set_items) and selection
/// changes flow out through the `on_select` callback. Rendering is a pure
/// function of the current state, and the number of rendered option rows is
/// bounded by [`Window::max_visible`] regardless of how many items exist.
///
/// # Examples
///
/// ```
/// use backoffice_widgets::select::Model;
/// use backoffice_widgets::selection::SelectionMode;
///
/// let countries: Vec<String> = ["Argentina", "Australia", "Austria"]
///     .iter()
///     .map(|s| s.to_string())
///     .collect();
///
/// let mut select = Model::new(countries, SelectionMode::Replace, 8, 1);
/// select.open();
/// select.set_query("aust");
/// assert_eq!(select.len(), 2);
/// ```
pub struct Model<I: Item> {
    pub(super) items: Vec<I>,
    pub(super) filtered: Vec<FilteredItem<I>>,
    pub(super) query: String,
    pub(super) mode: SelectionMode,
    pub(super) filter_mode: FilterMode,
    pub(super) selection: Selection,
    pub(super) window: Window,
    pub(super) cursor: usize,
    pub(super) scroll_offset: usize,
    pub(super) open: bool,
    pub(super) focused: bool,
    pub(super) prompt: String,
    pub(super) placeholder: String,
    pub(super) summary_empty: String,
    pub(super) show_status: bool,
    pub(super) styles: SelectStyles,
    pub(super) keymap: SelectKeyMap,
    pub(super) on_select: Option<OnSelect>,
}

impl<I: Item> Model<I> {
    /// Creates a select over `items` with the given selection policy and
    /// viewport geometry (`viewport_height` rows total, `item_height` rows
    /// per option; both must be positive).
    pub fn new(
        items: Vec<I>,
        mode: SelectionMode,
        viewport_height: usize,
        item_height: usize,
    ) -> Self {
        let filter_mode = FilterMode::default();
        let filtered = filter::apply(filter_mode, &items, "");
        Self {
            items,
            filtered,
            query: String::new(),
            mode,
            filter_mode,
            selection: Selection::new(),
            window: Window::new(viewport_height, item_height),
            cursor: 0,
            scroll_offset: 0,
            open: false,
            focused: false,
            prompt: "Filter: ".to_string(),
            placeholder: "No options found.".to_string(),
            summary_empty: "Select…".to_string(),
            show_status: true,
            styles: SelectStyles::default(),
            keymap: SelectKeyMap::default(),
            on_select: None,
        }
    }

    /// Sets the query-matching algorithm (builder pattern).
    pub fn with_filter_mode(mut self, filter_mode: FilterMode) -> Self {
        self.filter_mode = filter_mode;
        self.refilter();
        self
    }

    /// Replaces the visual styles (builder pattern).
    pub fn with_styles(mut self, styles: SelectStyles) -> Self {
        self.styles = styles;
        self
    }

    /// Replaces the key bindings (builder pattern).
    pub fn with_keymap(mut self, keymap: SelectKeyMap) -> Self {
        self.keymap = keymap;
        self
    }

    /// Sets the query prompt text (builder pattern).
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Sets the empty-result placeholder text (builder pattern).
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Seeds the selection, e.g. when editing an existing record
    /// (builder pattern).
    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    /// Registers the selection sink callback (builder pattern).
    pub fn on_select<F>(mut self, callback: F) -> Self
    where
        F: Fn(&[String]) -> Option<Cmd> + Send + Sync + 'static,
    {
        self.on_select = Some(Box::new(callback));
        self
    }

    /// Hides the match-count status line (builder pattern).
    pub fn without_status(mut self) -> Self {
        self.show_status = false;
        self
    }

    /// Number of options matching the current query.
    pub fn len(&self) -> usize {
        self.filtered.len()
    }

    /// Returns true if no options match the current query.
    pub fn is_empty(&self) -> bool {
        self.filtered.is_empty()
    }

    /// Total number of options, ignoring the query.
    pub fn total_len(&self) -> usize {
        self.items.len()
    }

    /// The current query text.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The current selection.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// The selected values in insertion order.
    pub fn selected_values(&self) -> &[String] {
        self.selection.values()
    }

    /// The configured selection policy.
    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Index of the highlighted option within the filtered set.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Current scroll offset in rows.
    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// The viewport geometry.
    pub fn window(&self) -> Window {
        self.window
    }

    /// Whether the popover is open.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Opens the popover.
    pub fn open(&mut self) {
        self.open = true;
    }

    /// Closes the popover. Query and scroll state reset so the next open
    /// starts from an unfiltered list.
    pub fn close(&mut self) {
        self.open = false;
        self.query.clear();
        self.refilter();
    }

    /// Replaces the option list. The selection is kept as-is; values that
    /// no longer correspond to any option remain selected until toggled.
    pub fn set_items(&mut self, items: Vec<I>) {
        self.items = items;
        self.refilter();
    }

    /// Replaces the query and re-filters.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.refilter();
    }

    /// Appends one character to the query.
    pub fn push_query_char(&mut self, c: char) {
        self.query.push(c);
        self.refilter();
    }

    /// Removes the last character from the query.
    pub fn pop_query_char(&mut self) {
        self.query.pop();
        self.refilter();
    }

    /// Clears the query, restoring the full option list.
    pub fn clear_query(&mut self) {
        self.query.clear();
        self.refilter();
    }

    // Every query change rebuilds the filtered set from scratch and resets
    // cursor and scroll, matching a viewport remount.
    pub(super) fn refilter(&mut self) {
        self.filtered = filter::apply(self.filter_mode, &self.items, &self.query);
        self.cursor = 0;
        self.scroll_offset = 0;
    }

    /// The slice of filtered options intersecting the viewport.
    pub fn visible_range(&self) -> VisibleRange {
        self.window.visible(self.scroll_offset, self.filtered.len())
    }

    /// Sets the scroll offset directly, clamped to the content height.
    pub fn set_scroll_offset(&mut self, offset: usize) {
        self.scroll_offset = self.window.clamp_offset(offset, self.filtered.len());
    }

    /// Moves the highlight up one option.
    pub fn move_up(&mut self) {
        self.move_cursor_to(self.cursor.saturating_sub(1));
    }

    /// Moves the highlight down one option.
    pub fn move_down(&mut self) {
        self.move_cursor_to(self.cursor + 1);
    }

    /// Moves the highlight up one viewport worth of options.
    pub fn move_page_up(&mut self) {
        self.move_cursor_to(self.cursor.saturating_sub(self.options_per_page()));
    }

    /// Moves the highlight down one viewport worth of options.
    pub fn move_page_down(&mut self) {
        self.move_cursor_to(self.cursor + self.options_per_page());
    }

    /// Moves the highlight to the first option.
    pub fn move_to_start(&mut self) {
        self.move_cursor_to(0);
    }

    /// Moves the highlight to the last option.
    pub fn move_to_end(&mut self) {
        self.move_cursor_to(self.filtered.len().saturating_sub(1));
    }

    fn options_per_page(&self) -> usize {
        (self.window.viewport_height() / self.window.item_height()).max(1)
    }

    fn move_cursor_to(&mut self, target: usize) {
        if self.filtered.is_empty() {
            self.cursor = 0;
            self.scroll_offset = 0;
            return;
        }
        self.cursor = target.min(self.filtered.len() - 1);
        self.scroll_offset =
            self.window
                .scroll_into_view(self.scroll_offset, self.cursor, self.filtered.len());
    }

    /// Applies the selection policy to the highlighted option.
    ///
    /// Replace mode sets the selection and closes the popover — also on a
    /// re-select of the current value, which is a no-op re-select rather
    /// than a deselect. Toggle mode flips membership and keeps the popover
    /// open. Either way the selection sink fires with the current values.
    pub fn pick_highlighted(&mut self) -> Option<Cmd> {
        let value = self.filtered.get(self.cursor)?.item.to_string();
        self.selection.pick(self.mode, value);
        if self.mode == SelectionMode::Replace {
            self.close();
        }
        self.emit_selection()
    }

    /// Toggles the currently filtered subset in or out of the selection
    /// (toggle mode only).
    ///
    /// When every filtered value is already selected, the subset is
    /// removed; otherwise the missing values are appended. Selected values
    /// outside the filtered subset are always preserved.
    pub fn pick_all_filtered(&mut self) -> Option<Cmd> {
        if self.mode != SelectionMode::Toggle || self.filtered.is_empty() {
            return None;
        }

        let values: Vec<String> = self.filtered.iter().map(|f| f.item.to_string()).collect();
        let all_selected = values.iter().all(|v| self.selection.contains(v));
        if all_selected {
            for value in &values {
                self.selection.remove(value);
            }
        } else {
            for value in values {
                self.selection.insert(value);
            }
        }
        self.emit_selection()
    }

    fn emit_selection(&self) -> Option<Cmd> {
        self.on_select
            .as_ref()
            .and_then(|callback| callback(self.selection.values()))
    }
}

impl<I: Item> Component for Model<I> {
    fn focus(&mut self) -> Option<Cmd> {
        self.focused = true;
        None
    }

    fn blur(&mut self) {
        self.focused = false;
    }

    fn focused(&self) -> bool {
        self.focused
    }
}
