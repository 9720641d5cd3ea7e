//! Filter engine.
//!
//! Options are filtered by a case-insensitive substring match against their
//! label. Filtering never reorders or mutates the option list: the result is
//! always a subsequence of the input in its original order.
//!
//! The same matcher drives [`highlight_ranges`], so every option that survives
//! the filter has at least one highlighted range for a non-blank term.

use std::ops::Range;
use std::sync::Arc;

use horizon_dropdown_core::logging::targets;

use crate::option::{DropdownOption, OptionList};

/// A lowercased search term, prepared once and matched many times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matcher {
    needle: Vec<char>,
}

impl Matcher {
    /// Prepare `term` for case-insensitive matching.
    pub fn new(term: &str) -> Self {
        Self {
            needle: term.chars().flat_map(char::to_lowercase).collect(),
        }
    }

    /// An empty matcher matches every label.
    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    /// Byte length of the match starting exactly at the start of `haystack`.
    fn match_len(&self, haystack: &str) -> Option<usize> {
        let mut pending = self.needle.iter();
        let mut remaining = self.needle.len();

        for (offset, ch) in haystack.char_indices() {
            for lower in ch.to_lowercase() {
                if remaining == 0 {
                    // Needle ended inside a multi-char lowercase expansion.
                    return None;
                }
                if pending.next() != Some(&lower) {
                    return None;
                }
                remaining -= 1;
            }
            if remaining == 0 {
                return Some(offset + ch.len_utf8());
            }
        }
        None
    }

    /// Find the first match in `haystack`, as a byte range.
    pub fn find(&self, haystack: &str) -> Option<Range<usize>> {
        self.find_from(haystack, 0)
    }

    fn find_from(&self, haystack: &str, from: usize) -> Option<Range<usize>> {
        if self.is_empty() {
            return None;
        }
        haystack[from..].char_indices().find_map(|(offset, _)| {
            let start = from + offset;
            self.match_len(&haystack[start..])
                .map(|len| start..start + len)
        })
    }

    /// All non-overlapping matches in `haystack`, left to right.
    pub fn find_all(&self, haystack: &str) -> Vec<Range<usize>> {
        let mut ranges = Vec::new();
        let mut from = 0;
        while from < haystack.len() {
            match self.find_from(haystack, from) {
                Some(range) => {
                    from = range.end;
                    ranges.push(range);
                }
                None => break,
            }
        }
        ranges
    }

    /// Check whether `haystack` contains the term.
    pub fn matches(&self, haystack: &str) -> bool {
        self.is_empty() || self.find(haystack).is_some()
    }
}

/// Filter `options` by `term`, keeping the original order.
///
/// An empty term returns every option.
pub fn filter<'a>(options: &'a [DropdownOption], term: &str) -> Vec<&'a DropdownOption> {
    let matcher = Matcher::new(term);
    options
        .iter()
        .filter(|option| matcher.matches(&option.label))
        .collect()
}

/// Indices into `options` of the entries that match `term`.
pub fn filter_indices(options: &[DropdownOption], term: &str) -> Vec<usize> {
    let matcher = Matcher::new(term);
    options
        .iter()
        .enumerate()
        .filter(|(_, option)| matcher.matches(&option.label))
        .map(|(index, _)| index)
        .collect()
}

/// Byte ranges of `label` to highlight for `term`.
///
/// A blank (empty or whitespace-only) term highlights nothing.
pub fn highlight_ranges(label: &str, term: &str) -> Vec<Range<usize>> {
    if term.trim().is_empty() {
        return Vec::new();
    }
    Matcher::new(term).find_all(label)
}

/// Memoizes the last filter result.
///
/// The cache is keyed on the identity of the option list and the search term.
/// It is a pure optimization: [`FilterCache::get`] always returns exactly what
/// [`filter_indices`] would.
#[derive(Debug, Default)]
pub struct FilterCache {
    key: Option<(usize, String)>,
    indices: Vec<usize>,
}

impl FilterCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Matching indices for `(options, term)`, recomputed only when either changed.
    pub fn get(&mut self, options: &OptionList, term: &str) -> &[usize] {
        let identity = Arc::as_ptr(options) as *const DropdownOption as usize;
        let hit = matches!(&self.key, Some((id, cached)) if *id == identity && cached == term);
        if !hit {
            self.indices = filter_indices(options, term);
            tracing::trace!(
                target: targets::FILTER,
                term,
                matched = self.indices.len(),
                total = options.len(),
                "filter recomputed"
            );
            self.key = Some((identity, term.to_string()));
        }
        &self.indices
    }

    /// Forget the cached result.
    pub fn invalidate(&mut self) {
        self.key = None;
        self.indices.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::option::option_list;

    fn sample() -> OptionList {
        option_list([("1", "Option 1"), ("2", "Option 2"), ("3", "Option 3")])
    }

    fn labels(options: &[&DropdownOption]) -> Vec<String> {
        options.iter().map(|o| o.label.clone()).collect()
    }

    #[test]
    fn test_empty_term_is_identity() {
        let options = sample();
        assert_eq!(filter(&options, "").len(), 3);
        assert_eq!(filter_indices(&options, ""), vec![0, 1, 2]);
    }

    #[test]
    fn test_case_insensitive_substring() {
        let options = option_list([
            ("chocolate", "Chocolate"),
            ("strawberry", "Strawberry"),
            ("vanilla", "Vanilla"),
        ]);
        assert_eq!(labels(&filter(&options, "LA")), vec!["Chocolate", "Vanilla"]);
        assert_eq!(labels(&filter(&options, "berry")), vec!["Strawberry"]);
    }

    #[test]
    fn test_matches_label_not_value() {
        let options = option_list([("secret-id", "Visible")]);
        assert!(filter(&options, "secret").is_empty());
        assert_eq!(filter(&options, "vis").len(), 1);
    }

    #[test]
    fn test_no_matches() {
        assert!(filter(&sample(), "zzz").is_empty());
    }

    #[test]
    fn test_highlight_all_occurrences() {
        assert_eq!(highlight_ranges("Option 1", "opt"), vec![0..3]);
        assert_eq!(highlight_ranges("banana", "AN"), vec![1..3, 3..5]);
        assert_eq!(highlight_ranges("aaaa", "aa"), vec![0..2, 2..4]);
    }

    #[test]
    fn test_blank_term_highlights_nothing() {
        assert!(highlight_ranges("Option 1", "").is_empty());
        assert!(highlight_ranges("Option 1", "  ").is_empty());
        // Whitespace still filters.
        assert_eq!(filter(&sample(), " ").len(), 3);
    }

    #[test]
    fn test_regex_metacharacters_are_literal() {
        let options = option_list([("a", "C++ (legacy)"), ("b", "Rust")]);
        assert_eq!(labels(&filter(&options, "c++ (")), vec!["C++ (legacy)"]);
        assert_eq!(highlight_ranges("C++ (legacy)", "+ ("), vec![2..5]);
    }

    #[test]
    fn test_non_ascii_ranges_are_char_boundaries() {
        let label = "Crème Brûlée";
        let ranges = highlight_ranges(label, "BRÛ");
        assert_eq!(ranges.len(), 1);
        assert_eq!(&label[ranges[0].clone()], "Brû");
    }

    #[test]
    fn test_cache_hits_and_invalidates() {
        let options = sample();
        let mut cache = FilterCache::new();
        assert_eq!(cache.get(&options, "2"), &[1]);
        assert_eq!(cache.get(&options, "2"), &[1]);
        assert_eq!(cache.get(&options, ""), &[0, 1, 2]);

        let replaced = option_list([("9", "Option 2")]);
        assert_eq!(cache.get(&replaced, ""), &[0]);

        cache.invalidate();
        assert_eq!(cache.get(&options, "3"), &[2]);
    }
}
