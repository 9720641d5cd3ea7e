//! Horizon Dropdown - a searchable, multi-select dropdown widget.
//!
//! The widget is headless: it owns the option list, the selection, the search
//! term and the open/close state, and describes what to draw through
//! [`DropdownView`] and where to put the option panel through
//! [`PanelPlacement`]. The panel can live inline below the control surface or
//! in a detached overlay layer (`portal`), which escapes ancestor clipping.
//!
//! This crate re-exports everything from `horizon-dropdown-core`.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use horizon_dropdown::{DocumentEvents, Dropdown, PanelPlacement, PointerPressEvent, Rect};
//!
//! let document = Arc::new(DocumentEvents::new());
//! let mut dropdown = Dropdown::new([
//!     ("chocolate", "Chocolate"),
//!     ("strawberry", "Strawberry"),
//!     ("vanilla", "Vanilla"),
//! ])
//! .unwrap()
//! .with_placeholder("Pick a flavor")
//! .with_portal(true)
//! .with_document(document.clone())
//! .with_on_change(|selected| println!("now selected: {selected:?}"));
//! dropdown.mount();
//! dropdown.set_control_geometry(Some(Rect::new(20.0, 20.0, 240.0, 40.0)));
//!
//! // Click the control surface.
//! document.dispatch_pointer_press(PointerPressEvent::left((30.0, 30.0)));
//! assert!(dropdown.is_open());
//!
//! dropdown.set_search_term("LA");
//! let view = dropdown.view();
//! assert_eq!(view.panel.rows.len(), 2);
//! assert!(matches!(dropdown.panel_placement(), PanelPlacement::Overlay { .. }));
//!
//! // Click somewhere else.
//! document.dispatch_pointer_press(PointerPressEvent::left((600.0, 600.0)));
//! assert!(!dropdown.is_open());
//! assert_eq!(dropdown.search_term(), "");
//! ```
//!
//! # Logging
//!
//! Events are logged with `tracing` under the targets in
//! [`logging::targets`]; rejected toggles are logged at `warn`.

pub use horizon_dropdown_core::*;

pub mod config;
pub mod delegate;
pub mod dropdown;
mod error;
pub mod filter;
pub mod option;
pub mod placement;
pub mod selection;
pub mod state;
pub mod view;

pub use config::{DEFAULT_PLACEHOLDER, DropdownConfig};
pub use delegate::{DefaultOptionDelegate, OptionDelegate, RowContent, SpanStyle, TextSpan};
pub use dropdown::Dropdown;
pub use error::{DropdownError, Result};
pub use filter::{FilterCache, Matcher, filter, highlight_ranges};
pub use option::{DropdownOption, OptionList, option_list};
pub use placement::{
    InlinePresenter, OverlayPresenter, PanelLayer, PanelMetrics, PanelPlacement, PanelPresenter,
    PlacementContext,
};
pub use selection::{SelectionMode, SelectionSet};
pub use state::{CloseReason, OpenState};
pub use view::{
    ChipView, ControlStyle, ControlView, DropdownView, Indicator, NO_RESULTS_TEXT, PanelView,
    RowView, SEARCH_PLACEHOLDER, SearchFieldView,
};
