//! Layout-agnostic description of a dropdown.
//!
//! [`DropdownView`] is what a renderer consumes. It says *what* to draw (the
//! control surface with its placeholder or chips, the search field, the option
//! rows) without saying *where*: placement of the panel is decided separately
//! by a [`PanelPresenter`](crate::placement::PanelPresenter), so the inline
//! and overlay render paths share this one description.

use crate::delegate::RowContent;

/// Text shown in the list when no option matches the search term.
pub const NO_RESULTS_TEXT: &str = "No options found";

/// Placeholder of the search field.
pub const SEARCH_PLACEHOLDER: &str = "Search...";

/// Everything a renderer needs to draw one dropdown.
#[derive(Debug, Clone, PartialEq)]
pub struct DropdownView {
    pub control: ControlView,
    pub panel: PanelView,
}

/// Open/close indicator on the control surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indicator {
    /// Chevron pointing down.
    Collapsed,
    /// Chevron rotated 180 degrees.
    Expanded,
}

/// Border treatment of the control surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlStyle {
    /// Light background with a border.
    Outlined,
    /// Filled background, no border.
    Filled,
}

/// The always-visible button.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlView {
    /// Placeholder text, present only while nothing is selected.
    pub placeholder: Option<String>,
    /// One chip per selected option, in selection order.
    pub chips: Vec<ChipView>,
    pub indicator: Indicator,
    pub style: ControlStyle,
}

/// A selected option shown on the control surface, with a remove button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChipView {
    pub value: String,
    pub label: String,
}

/// The collapsible panel with search field and option list.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelView {
    pub open: bool,
    /// Present when the dropdown is configured with a search field.
    pub search: Option<SearchFieldView>,
    pub rows: Vec<RowView>,
    /// Index of the first row scrolled into view.
    pub scroll_row: usize,
}

impl PanelView {
    /// Number of rows the user can pick.
    pub fn selectable_row_count(&self) -> usize {
        self.rows.iter().filter(|row| row.is_selectable()).count()
    }

    /// Whether the list shows the "no results" placeholder.
    pub fn is_empty_result(&self) -> bool {
        matches!(self.rows.as_slice(), [RowView::Empty { .. }])
    }
}

/// The search input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchFieldView {
    pub text: String,
    pub placeholder: &'static str,
    pub focused: bool,
    /// The clear button is shown only while there is text to clear.
    pub show_clear_button: bool,
}

/// One row of the option list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowView {
    /// A selectable option.
    Option {
        value: String,
        content: RowContent,
        selected: bool,
        /// Highlighted by keyboard navigation.
        active: bool,
    },
    /// The placeholder shown when nothing matches.
    Empty { message: &'static str },
}

impl RowView {
    /// Whether clicking this row picks an option.
    pub fn is_selectable(&self) -> bool {
        matches!(self, Self::Option { .. })
    }

    /// Value of the option on this row, if any.
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::Option { value, .. } => Some(value),
            Self::Empty { .. } => None,
        }
    }

    /// Whether the option on this row is selected.
    pub fn is_selected(&self) -> bool {
        matches!(self, Self::Option { selected: true, .. })
    }
}
