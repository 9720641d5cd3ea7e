//! Dropdown configuration.
//!
//! [`DropdownConfig`] is a plain value: hosts can build it in code, through
//! the `with_*` builders on [`Dropdown`](crate::Dropdown), or load it from any
//! serde format. Missing fields take their defaults.
//!
//! ```
//! use horizon_dropdown::DropdownConfig;
//!
//! let config: DropdownConfig = serde_json::from_str(r#"{ "multiple": true }"#).unwrap();
//! assert!(config.multiple);
//! assert!(config.with_search);
//! assert_eq!(config.placeholder, "Select an option");
//! ```

use serde::{Deserialize, Serialize};

use crate::placement::PanelMetrics;
use crate::selection::SelectionMode;

/// Placeholder shown on the control surface when nothing is selected.
pub const DEFAULT_PLACEHOLDER: &str = "Select an option";

/// Static configuration of one dropdown.
///
/// `multiple` and `portal` are fixed once the dropdown is constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DropdownConfig {
    pub placeholder: String,
    /// Allow several options to be selected.
    pub multiple: bool,
    /// Show the search field inside the panel.
    pub with_search: bool,
    /// Render the panel in the detached overlay layer.
    pub portal: bool,
    /// Outlined control surface (border) rather than filled.
    pub outlined: bool,
    pub metrics: PanelMetrics,
}

impl Default for DropdownConfig {
    fn default() -> Self {
        Self {
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            multiple: false,
            with_search: true,
            portal: false,
            outlined: true,
            metrics: PanelMetrics::default(),
        }
    }
}

impl DropdownConfig {
    pub fn selection_mode(&self) -> SelectionMode {
        SelectionMode::from_multiple(self.multiple)
    }
}
