//! Property tests for filtering and selection.

use std::collections::HashMap;

use horizon_dropdown::filter::filter_indices;
use horizon_dropdown::{
    Dropdown, DropdownOption, FilterCache, SelectionMode, SelectionSet, filter, highlight_ranges,
    option_list,
};
use proptest::prelude::*;

fn labels() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-zA-Z0-9 ]{0,12}", 0..24)
}

fn options_from(labels: &[String]) -> Vec<DropdownOption> {
    labels
        .iter()
        .enumerate()
        .map(|(i, label)| DropdownOption::new(i.to_string(), label.clone()))
        .collect()
}

proptest! {
    #[test]
    fn prop_filter_is_ordered_subsequence(labels in labels(), term in "[a-zA-Z ]{0,3}") {
        let options = options_from(&labels);
        let result = filter(&options, &term);
        let needle = term.to_lowercase();

        let mut last = None;
        for option in &result {
            prop_assert!(option.label.to_lowercase().contains(&needle));
            let position = options.iter().position(|o| o.value == option.value);
            prop_assert!(position > last);
            last = position;
        }

        let expected = options
            .iter()
            .filter(|o| o.label.to_lowercase().contains(&needle))
            .count();
        prop_assert_eq!(result.len(), expected);
    }

    #[test]
    fn prop_empty_term_is_identity(labels in labels()) {
        let options = options_from(&labels);
        prop_assert_eq!(filter_indices(&options, ""), (0..options.len()).collect::<Vec<_>>());
    }

    #[test]
    fn prop_survivors_are_highlighted(labels in labels(), term in "[a-z]{1,3}") {
        let options = options_from(&labels);
        for option in filter(&options, &term) {
            let ranges = highlight_ranges(&option.label, &term);
            prop_assert!(!ranges.is_empty());
            for range in ranges {
                prop_assert!(option.label[range].eq_ignore_ascii_case(&term));
            }
        }
    }

    #[test]
    fn prop_cache_agrees_with_filter(labels in labels(), terms in prop::collection::vec("[a-z]{0,2}", 1..8)) {
        let options = option_list(options_from(&labels));
        let mut cache = FilterCache::new();
        for term in &terms {
            let expected = filter_indices(&options, term);
            prop_assert_eq!(cache.get(&options, term), expected.as_slice());
        }
    }

    #[test]
    fn prop_single_select_holds_at_most_one(toggles in prop::collection::vec(0usize..5, 0..32)) {
        let options = options_from(&["a", "b", "c", "d", "e"].map(String::from));
        let mut set = SelectionSet::new();
        let mut last = None;
        for &index in &toggles {
            set.toggle(&options[index], SelectionMode::Single);
            prop_assert!(set.len() <= 1);
            last = if last == Some(index) { None } else { Some(index) };
        }
        let expected: Vec<String> = last.map(|i| options[i].value.clone()).into_iter().collect();
        prop_assert_eq!(set.values().map(str::to_string).collect::<Vec<_>>(), expected);
    }

    #[test]
    fn prop_multi_select_keeps_odd_toggles(toggles in prop::collection::vec(0usize..6, 0..40)) {
        let options = options_from(&["a", "b", "c", "d", "e", "f"].map(String::from));
        let mut set = SelectionSet::new();
        let mut counts: HashMap<usize, usize> = HashMap::new();
        let mut last_toggle: HashMap<usize, usize> = HashMap::new();

        for (step, &index) in toggles.iter().enumerate() {
            set.toggle(&options[index], SelectionMode::Multiple);
            *counts.entry(index).or_default() += 1;
            last_toggle.insert(index, step);
        }

        // Selected exactly when toggled an odd number of times, ordered by
        // the toggle that last added it.
        let mut expected: Vec<usize> = counts
            .iter()
            .filter(|(_, count)| *count % 2 == 1)
            .map(|(index, _)| *index)
            .collect();
        expected.sort_by_key(|index| last_toggle[index]);
        let expected: Vec<String> = expected.iter().map(|&i| options[i].value.clone()).collect();

        let actual: Vec<String> = set.values().map(str::to_string).collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn prop_selection_stays_within_options(
        toggles in prop::collection::vec(0usize..6, 0..20),
        keep in prop::collection::vec(any::<bool>(), 6),
    ) {
        let all = options_from(&["a", "b", "c", "d", "e", "f"].map(String::from));
        let dropdown = Dropdown::new(all.clone()).unwrap().with_multiple(true);
        for &index in &toggles {
            dropdown.toggle_option(&all[index].value).unwrap();
        }

        let kept: Vec<DropdownOption> = all
            .iter()
            .zip(&keep)
            .filter(|(_, keep)| **keep)
            .map(|(option, _)| option.clone())
            .collect();
        dropdown.set_options(kept.clone()).unwrap();

        for selected in dropdown.selected() {
            prop_assert!(kept.contains(&selected));
        }
    }

    #[test]
    fn prop_control_toggle_twice_restores(term in "[a-z]{0,4}", open_first in any::<bool>()) {
        let dropdown = Dropdown::new([("1", "Option 1"), ("2", "Option 2")]).unwrap();
        if open_first {
            dropdown.open();
            dropdown.set_search_term(term);
        }
        let before = (dropdown.view(), dropdown.search_term());
        dropdown.activate_control();
        dropdown.activate_control();
        // The close on the way resets the search term.
        if open_first {
            prop_assert!(dropdown.is_open());
            prop_assert_eq!(dropdown.search_term(), "");
        } else {
            prop_assert_eq!((dropdown.view(), dropdown.search_term()), before);
        }
    }
}
