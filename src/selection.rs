//! Selection state shared by single- and multi-select option lists.
//!
//! Instead of two near-duplicate list components, one windowed-list
//! primitive is parameterized by a [`SelectionMode`] policy: `Replace` for
//! single-select semantics and `Toggle` for multi-select membership. The
//! [`Selection`] set is insertion-ordered and duplicate-free in both modes.

/// Policy applied when the user picks a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMode {
    /// Single-select: picking a value replaces the current selection.
    /// Picking the already-selected value is a no-op re-select, not a
    /// deselect.
    #[default]
    Replace,
    /// Multi-select: picking a value toggles its membership.
    Toggle,
}

/// An insertion-ordered, duplicate-free set of selected values.
///
/// # Examples
///
/// ```
/// use backoffice_widgets::selection::{Selection, SelectionMode};
///
/// let mut selection = Selection::new();
/// selection.pick(SelectionMode::Toggle, "b");
/// selection.pick(SelectionMode::Toggle, "a");
/// assert_eq!(selection.values(), ["b", "a"]);
///
/// // Toggling an existing value removes it; order of the rest is stable.
/// selection.pick(SelectionMode::Toggle, "b");
/// assert_eq!(selection.values(), ["a"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    values: Vec<String>,
}

impl Selection {
    /// Creates an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a selection pre-populated with values, dropping duplicates
    /// while keeping first-occurrence order.
    pub fn from_values<S: Into<String>>(values: impl IntoIterator<Item = S>) -> Self {
        let mut selection = Self::new();
        for value in values {
            selection.insert(value);
        }
        selection
    }

    /// Returns the selected values in insertion order.
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// The most useful accessor for single-select: the sole (first) value.
    pub fn first(&self) -> Option<&str> {
        self.values.first().map(String::as_str)
    }

    /// Number of selected values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns true if `value` is selected.
    pub fn contains(&self, value: &str) -> bool {
        self.values.iter().any(|v| v == value)
    }

    /// Removes every selected value.
    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Appends `value` if it is not already selected.
    pub fn insert(&mut self, value: impl Into<String>) {
        let value = value.into();
        if !self.contains(&value) {
            self.values.push(value);
        }
    }

    /// Removes `value`, returning whether it was selected.
    pub fn remove(&mut self, value: &str) -> bool {
        let before = self.values.len();
        self.values.retain(|v| v != value);
        before != self.values.len()
    }

    /// Replaces the whole selection with a single value.
    pub fn replace(&mut self, value: impl Into<String>) {
        self.values.clear();
        self.values.push(value.into());
    }

    /// Toggles membership of `value`.
    pub fn toggle(&mut self, value: impl Into<String>) {
        let value = value.into();
        if !self.remove(&value) {
            self.values.push(value);
        }
    }

    /// Applies the mode's policy for picking `value`.
    pub fn pick(&mut self, mode: SelectionMode, value: impl Into<String>) {
        match mode {
            SelectionMode::Replace => self.replace(value),
            SelectionMode::Toggle => self.toggle(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_sequence_preserves_insertion_order() {
        // Options a/b/c: select "b", then "a", then "b" again.
        let mut selection = Selection::new();
        selection.pick(SelectionMode::Toggle, "b");
        assert_eq!(selection.values(), ["b"]);

        selection.pick(SelectionMode::Toggle, "a");
        assert_eq!(selection.values(), ["b", "a"]);

        selection.pick(SelectionMode::Toggle, "b");
        assert_eq!(selection.values(), ["a"]);
    }

    #[test]
    fn test_replace_reselect_is_not_a_deselect() {
        let mut selection = Selection::new();
        selection.pick(SelectionMode::Replace, "x");
        selection.pick(SelectionMode::Replace, "x");
        assert_eq!(selection.values(), ["x"]);

        selection.pick(SelectionMode::Replace, "y");
        assert_eq!(selection.values(), ["y"]);
    }

    #[test]
    fn test_insert_is_duplicate_free() {
        let mut selection = Selection::from_values(["a", "b", "a", "c", "b"]);
        assert_eq!(selection.values(), ["a", "b", "c"]);

        selection.insert("b");
        assert_eq!(selection.len(), 3);
    }

    #[test]
    fn test_remove_and_contains() {
        let mut selection = Selection::from_values(["a", "b"]);
        assert!(selection.contains("a"));
        assert!(selection.remove("a"));
        assert!(!selection.remove("a"));
        assert!(!selection.contains("a"));
        assert_eq!(selection.values(), ["b"]);
    }

    #[test]
    fn test_first_for_single_select() {
        let mut selection = Selection::new();
        assert_eq!(selection.first(), None);
        selection.replace("only");
        assert_eq!(selection.first(), Some("only"));
    }
}
