//! Option model.
//!
//! A [`DropdownOption`] is a `(value, label)` pair supplied by the host. The
//! value identifies the option (selection membership and equality), the label
//! is what the user sees and what the search field matches against.

use std::collections::HashSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{DropdownError, Result};

/// A selectable entry in a dropdown.
///
/// Two options are equal when their values are equal; labels are display text
/// only.
#[derive(Debug, Clone, Eq, Serialize, Deserialize)]
pub struct DropdownOption {
    /// Unique identifier of the option.
    pub value: String,
    /// Display text.
    pub label: String,
}

impl DropdownOption {
    /// Create a new option.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

impl PartialEq for DropdownOption {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl std::hash::Hash for DropdownOption {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<V: Into<String>, L: Into<String>> From<(V, L)> for DropdownOption {
    fn from((value, label): (V, L)) -> Self {
        Self::new(value, label)
    }
}

/// The host's option list, shared read-only with the widget.
pub type OptionList = Arc<[DropdownOption]>;

/// Build an [`OptionList`] from anything that yields options.
pub fn option_list<I, O>(options: I) -> OptionList
where
    I: IntoIterator<Item = O>,
    O: Into<DropdownOption>,
{
    options.into_iter().map(Into::into).collect()
}

/// Check that every value in `options` is unique.
pub fn validate_options(options: &[DropdownOption]) -> Result<()> {
    let mut seen = HashSet::with_capacity(options.len());
    for option in options {
        if !seen.insert(option.value.as_str()) {
            return Err(DropdownError::duplicate_value(&option.value));
        }
    }
    Ok(())
}

/// Find an option by value.
pub fn find_option<'a>(options: &'a [DropdownOption], value: &str) -> Option<&'a DropdownOption> {
    options.iter().find(|option| option.value == value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_is_by_value() {
        let a = DropdownOption::new("1", "Option 1");
        let b = DropdownOption::new("1", "Renamed");
        let c = DropdownOption::new("2", "Option 1");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_option_list_from_tuples() {
        let list = option_list([("1", "Option 1"), ("2", "Option 2")]);
        assert_eq!(list.len(), 2);
        assert_eq!(list[1].label, "Option 2");
    }

    #[test]
    fn test_validate_rejects_duplicates() {
        let list = option_list([("a", "A"), ("b", "B"), ("a", "Again")]);
        assert_eq!(
            validate_options(&list),
            Err(DropdownError::duplicate_value("a"))
        );
        assert!(validate_options(&list[..2]).is_ok());
    }

    #[test]
    fn test_find_option() {
        let list = option_list([("chocolate", "Chocolate"), ("vanilla", "Vanilla")]);
        assert_eq!(
            find_option(&list, "vanilla").map(|o| o.label.as_str()),
            Some("Vanilla")
        );
        assert!(find_option(&list, "Vanilla").is_none());
    }

    #[test]
    fn test_option_serde() {
        let option: DropdownOption =
            serde_json::from_str(r#"{"value":"1","label":"Option 1"}"#).expect("valid json");
        assert_eq!(option, DropdownOption::new("1", "Option 1"));
        assert_eq!(option.label, "Option 1");
    }
}
