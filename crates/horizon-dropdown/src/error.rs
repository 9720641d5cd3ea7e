//! Error types for the dropdown widget.

/// Result type alias for dropdown operations.
pub type Result<T> = std::result::Result<T, DropdownError>;

/// Errors reported by the dropdown widget.
///
/// None of these leave the widget in a changed state: the offending call is
/// rejected and the previous selection, search term and open state are kept.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DropdownError {
    /// A toggle named a value that is not in the current option list.
    #[error("Option '{value}' is not in the option list")]
    UnknownOption { value: String },

    /// The option list contains the same value twice.
    #[error("Duplicate option value '{value}'")]
    DuplicateValue { value: String },
}

impl DropdownError {
    /// Create an unknown-option error.
    pub fn unknown_option(value: impl Into<String>) -> Self {
        Self::UnknownOption {
            value: value.into(),
        }
    }

    /// Create a duplicate-value error.
    pub fn duplicate_value(value: impl Into<String>) -> Self {
        Self::DuplicateValue {
            value: value.into(),
        }
    }
}
