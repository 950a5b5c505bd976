//! Query filtering for option lists.
//!
//! Filtering narrows the candidate set before the window math runs: the
//! select component filters its items on every query edit, then applies the
//! same visible-range computation to the filtered sequence. Results always
//! preserve the original item order and carry the original indices so
//! selection state survives re-filtering.

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use std::fmt::Display;

/// Trait for values that can be listed and filtered.
///
/// # Examples
///
/// ```
/// use backoffice_widgets::filter::Item;
///
/// #[derive(Clone)]
/// struct Country {
///     name: String,
///     iso: String,
/// }
///
/// impl std::fmt::Display for Country {
///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
///         write!(f, "{}", self.name)
///     }
/// }
///
/// impl Item for Country {
///     fn filter_value(&self) -> String {
///         // Search matches both the name and the ISO code.
///         format!("{} {}", self.name, self.iso)
///     }
/// }
/// ```
pub trait Item: Display + Clone {
    /// Returns the text the filter query is matched against.
    fn filter_value(&self) -> String;
}

impl Item for String {
    fn filter_value(&self) -> String {
        self.clone()
    }
}

impl Item for &'static str {
    fn filter_value(&self) -> String {
        (*self).to_string()
    }
}

/// How the query is matched against item filter values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    /// Case-insensitive substring match.
    #[default]
    Substring,
    /// Fuzzy subsequence match (skim algorithm).
    Fuzzy,
}

/// A filtered item together with its index in the unfiltered sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilteredItem<I> {
    /// Original index of this item in the full item list.
    pub index: usize,
    /// The item itself.
    pub item: I,
}

/// Filters `items` by `query`, preserving order and original indices.
///
/// An empty query returns every item unchanged, and filtering is a pure
/// function of `(mode, items, query)`: applying the same query twice yields
/// the same result as applying it once.
///
/// # Examples
///
/// ```
/// use backoffice_widgets::filter::{apply, FilterMode};
///
/// let items = vec!["Berlin", "Bern", "Lisbon"];
/// let hits = apply(FilterMode::Substring, &items, "ber");
/// assert_eq!(hits.len(), 2);
/// assert_eq!(hits[0].index, 0);
/// assert_eq!(hits[1].index, 1);
///
/// assert_eq!(apply(FilterMode::Substring, &items, "").len(), 3);
/// ```
pub fn apply<I: Item>(mode: FilterMode, items: &[I], query: &str) -> Vec<FilteredItem<I>> {
    if query.is_empty() {
        return items
            .iter()
            .enumerate()
            .map(|(index, item)| FilteredItem {
                index,
                item: item.clone(),
            })
            .collect();
    }

    match mode {
        FilterMode::Substring => {
            let needle = query.to_lowercase();
            items
                .iter()
                .enumerate()
                .filter(|(_, item)| item.filter_value().to_lowercase().contains(&needle))
                .map(|(index, item)| FilteredItem {
                    index,
                    item: item.clone(),
                })
                .collect()
        }
        FilterMode::Fuzzy => {
            let matcher = SkimMatcherV2::default();
            items
                .iter()
                .enumerate()
                .filter(|(_, item)| matcher.fuzzy_match(&item.filter_value(), query).is_some())
                .map(|(index, item)| FilteredItem {
                    index,
                    item: item.clone(),
                })
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels() -> Vec<String> {
        ["Argentina", "Australia", "Austria", "Brazil", "Portugal"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn test_substring_is_case_insensitive() {
        let items = labels();
        let hits = apply(FilterMode::Substring, &items, "AUST");
        let names: Vec<&str> = hits.iter().map(|f| f.item.as_str()).collect();
        assert_eq!(names, vec!["Australia", "Austria"]);
    }

    #[test]
    fn test_empty_query_returns_all_in_order() {
        let items = labels();
        let hits = apply(FilterMode::Substring, &items, "");
        assert_eq!(hits.len(), items.len());
        for (i, hit) in hits.iter().enumerate() {
            assert_eq!(hit.index, i);
            assert_eq!(hit.item, items[i]);
        }
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let items = labels();
        let once = apply(FilterMode::Substring, &items, "ra");
        let survivors: Vec<String> = once.iter().map(|f| f.item.clone()).collect();
        let twice = apply(FilterMode::Substring, &survivors, "ra");

        assert_eq!(once.len(), twice.len());
        for (a, b) in once.iter().zip(twice.iter()) {
            assert_eq!(a.item, b.item);
        }
    }

    #[test]
    fn test_original_indices_are_preserved() {
        let items = labels();
        let hits = apply(FilterMode::Substring, &items, "l");
        // "Australia", "Brazil", "Portugal"
        let indices: Vec<usize> = hits.iter().map(|f| f.index).collect();
        assert_eq!(indices, vec![1, 3, 4]);
    }

    #[test]
    fn test_no_matches_yields_empty() {
        let items = labels();
        assert!(apply(FilterMode::Substring, &items, "zzz").is_empty());
    }

    #[test]
    fn test_fuzzy_matches_subsequences() {
        let items = labels();
        let hits = apply(FilterMode::Fuzzy, &items, "ptg");
        let names: Vec<&str> = hits.iter().map(|f| f.item.as_str()).collect();
        assert_eq!(names, vec!["Portugal"]);
    }

    #[test]
    fn test_duplicate_labels_are_kept() {
        let items: Vec<String> = vec!["Lyon".into(), "Lyon".into(), "Nice".into()];
        let hits = apply(FilterMode::Substring, &items, "lyon");
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].index, 0);
        assert_eq!(hits[1].index, 1);
    }
}
