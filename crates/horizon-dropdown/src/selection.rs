//! Selection engine.
//!
//! [`SelectionSet`] is an ordered set of options keyed by value. Toggling
//! follows [`SelectionMode`]:
//!
//! - **Single**: toggling the selected option clears the selection, toggling
//!   any other option replaces it.
//! - **Multiple**: toggling an unselected option appends it, toggling a
//!   selected option removes it. Order is the order options were added.

use serde::{Deserialize, Serialize};

use crate::option::DropdownOption;

/// How toggles combine with the current selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SelectionMode {
    /// At most one option is selected.
    #[default]
    Single,
    /// Any number of options may be selected.
    Multiple,
}

impl SelectionMode {
    /// Mode for the `multiple` configuration flag.
    pub fn from_multiple(multiple: bool) -> Self {
        if multiple { Self::Multiple } else { Self::Single }
    }

    /// Whether the panel stays open after a pick.
    pub fn keeps_open_after_commit(&self) -> bool {
        matches!(self, Self::Multiple)
    }
}

/// An ordered selection without duplicate values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    items: Vec<DropdownOption>,
}

impl SelectionSet {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of selected options.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether an option with `value` is selected.
    pub fn contains(&self, value: &str) -> bool {
        self.items.iter().any(|item| item.value == value)
    }

    /// Selected options in selection order.
    pub fn as_slice(&self) -> &[DropdownOption] {
        &self.items
    }

    /// Iterate over selected values.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|item| item.value.as_str())
    }

    /// An owned copy of the selection, as handed to change listeners.
    pub fn snapshot(&self) -> Vec<DropdownOption> {
        self.items.clone()
    }

    /// Toggle `option` in place.
    pub fn toggle(&mut self, option: &DropdownOption, mode: SelectionMode) {
        let was_selected = self.contains(&option.value);
        match mode {
            SelectionMode::Single => {
                self.items.clear();
                if !was_selected {
                    self.items.push(option.clone());
                }
            }
            SelectionMode::Multiple => {
                if was_selected {
                    self.items.retain(|item| item.value != option.value);
                } else {
                    self.items.push(option.clone());
                }
            }
        }
    }

    /// Drop every selected option whose value is not in `options`.
    ///
    /// Labels of the remaining entries are refreshed from `options`. Returns
    /// `true` if the selection changed.
    pub fn retain_known(&mut self, options: &[DropdownOption]) -> bool {
        let before = self.items.len();
        self.items.retain_mut(|item| {
            match options.iter().find(|option| option.value == item.value) {
                Some(current) => {
                    item.label.clone_from(&current.label);
                    true
                }
                None => false,
            }
        });
        self.items.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opt(n: u32) -> DropdownOption {
        DropdownOption::new(n.to_string(), format!("Option {n}"))
    }

    fn values(set: &SelectionSet) -> Vec<&str> {
        set.values().collect()
    }

    #[test]
    fn test_single_select_replaces() {
        let mut set = SelectionSet::new();
        set.toggle(&opt(1), SelectionMode::Single);
        set.toggle(&opt(2), SelectionMode::Single);
        assert_eq!(values(&set), vec!["2"]);
    }

    #[test]
    fn test_single_select_toggles_off() {
        let mut set = SelectionSet::new();
        set.toggle(&opt(1), SelectionMode::Single);
        set.toggle(&opt(1), SelectionMode::Single);
        assert!(set.is_empty());
    }

    #[test]
    fn test_multi_select_appends_in_click_order() {
        let mut set = SelectionSet::new();
        for n in [3, 1, 2] {
            set.toggle(&opt(n), SelectionMode::Multiple);
        }
        assert_eq!(values(&set), vec!["3", "1", "2"]);
    }

    #[test]
    fn test_multi_select_removes() {
        let mut set = SelectionSet::new();
        set.toggle(&opt(1), SelectionMode::Multiple);
        set.toggle(&opt(2), SelectionMode::Multiple);
        set.toggle(&opt(1), SelectionMode::Multiple);
        assert_eq!(set.snapshot(), vec![opt(2)]);
    }

    #[test]
    fn test_retain_known_prunes_and_refreshes_labels() {
        let mut set = SelectionSet::new();
        set.toggle(&opt(1), SelectionMode::Multiple);
        set.toggle(&opt(2), SelectionMode::Multiple);

        let options = vec![DropdownOption::new("2", "Two"), opt(3)];
        assert!(set.retain_known(&options));
        assert_eq!(values(&set), vec!["2"]);
        assert_eq!(set.as_slice()[0].label, "Two");
        assert!(!set.retain_known(&options));
    }

    #[test]
    fn test_mode_from_flag() {
        assert_eq!(SelectionMode::from_multiple(true), SelectionMode::Multiple);
        assert!(!SelectionMode::from_multiple(false).keeps_open_after_commit());
    }
}
