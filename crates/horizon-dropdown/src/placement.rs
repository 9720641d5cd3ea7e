//! Panel placement strategies.
//!
//! The option panel can be presented two ways:
//!
//! - [`InlinePresenter`]: the panel is a sibling directly below the control
//!   surface, inside the normal layout tree (and therefore subject to ancestor
//!   clipping). It is always present; opening and closing only toggles its
//!   opacity and interactivity so a renderer can animate the transition.
//! - [`OverlayPresenter`]: the panel is rendered in a top-level overlay layer,
//!   anchored to the control surface's left/bottom edge in document
//!   coordinates, with its width pinned to the control's width. It exists only
//!   while open.
//!
//! Both consume the same [`PlacementContext`] and produce a
//! [`PanelPlacement`]; everything else about the dropdown is shared.

use std::fmt;

use horizon_dropdown_core::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Which layer the panel is rendered into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelLayer {
    /// Inside the normal layout tree.
    Inline,
    /// In a detached top-level layer.
    Overlay,
}

/// Fixed sizes used to lay out the panel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelMetrics {
    /// Height of the search field.
    pub search_height: f32,
    /// Height of one option row.
    pub row_height: f32,
    /// The option list scrolls beyond this height.
    pub max_list_height: f32,
    /// Width of the clear button at the right end of the search field.
    pub clear_button_width: f32,
}

impl Default for PanelMetrics {
    fn default() -> Self {
        Self {
            search_height: 40.0,
            row_height: 40.0,
            max_list_height: 240.0,
            clear_button_width: 32.0,
        }
    }
}

impl PanelMetrics {
    /// Number of rows that fit in the list without scrolling.
    pub fn visible_rows(&self) -> usize {
        if self.row_height <= 0.0 {
            return 1;
        }
        ((self.max_list_height / self.row_height).floor() as usize).max(1)
    }

    /// Height of the list for `row_count` rows.
    pub fn list_height(&self, row_count: usize) -> f32 {
        (row_count as f32 * self.row_height).min(self.max_list_height)
    }

    /// Total panel height.
    pub fn panel_height(&self, with_search: bool, row_count: usize) -> f32 {
        let search = if with_search { self.search_height } else { 0.0 };
        search + self.list_height(row_count)
    }

    /// Split a panel rectangle into its parts.
    pub fn layout(&self, panel: Rect, with_search: bool, show_clear_button: bool) -> PanelLayout {
        let search_height = if with_search { self.search_height } else { 0.0 };
        let search = with_search.then(|| {
            Rect::new(panel.left(), panel.top(), panel.width(), search_height)
        });
        let clear_button = search.filter(|_| show_clear_button).map(|field| {
            Rect::new(
                field.right() - self.clear_button_width,
                field.top(),
                self.clear_button_width,
                field.height(),
            )
        });
        let list = Rect::new(
            panel.left(),
            panel.top() + search_height,
            panel.width(),
            (panel.height() - search_height).max(0.0),
        );
        PanelLayout {
            search,
            clear_button,
            list,
        }
    }

    /// Row index under `point` in `list`, honoring the scroll position.
    pub fn row_at(&self, list: Rect, point: Point, scroll_row: usize, row_count: usize) -> Option<usize> {
        if !list.contains(point) || self.row_height <= 0.0 {
            return None;
        }
        let visual = ((point.y - list.top()) / self.row_height) as usize;
        let row = scroll_row + visual;
        (row < row_count).then_some(row)
    }
}

/// The parts of a laid-out panel, in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelLayout {
    pub search: Option<Rect>,
    pub clear_button: Option<Rect>,
    pub list: Rect,
}

/// Inputs to a presenter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementContext {
    /// Control surface rectangle in document coordinates, if measured.
    pub anchor: Option<Rect>,
    /// Whether the panel is open.
    pub open: bool,
    /// Height the panel's content needs.
    pub panel_height: f32,
}

/// Where (and whether) the panel is rendered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanelPlacement {
    /// In the layout tree below the control. `rect` is known once the control
    /// has been measured; `visible` drives opacity and interactivity.
    Inline { rect: Option<Rect>, visible: bool },
    /// In the overlay layer at `rect`.
    Overlay { rect: Rect },
    /// Not rendered at all.
    Hidden,
    /// Open in overlay mode, but the control has not been measured yet. The
    /// panel is not rendered until geometry arrives.
    Deferred,
}

impl PanelPlacement {
    /// Rectangle that receives pointer input, if any.
    pub fn interactive_rect(&self) -> Option<Rect> {
        match self {
            Self::Inline {
                rect,
                visible: true,
            } => *rect,
            Self::Overlay { rect } => Some(*rect),
            _ => None,
        }
    }

    /// Whether the panel accepts pointer input.
    pub fn is_interactive(&self) -> bool {
        matches!(
            self,
            Self::Inline { visible: true, .. } | Self::Overlay { .. }
        )
    }

    /// Opacity a renderer should use.
    pub fn opacity(&self) -> f32 {
        if self.is_interactive() { 1.0 } else { 0.0 }
    }

    /// Layer the panel is rendered into, or `None` if not rendered.
    pub fn layer(&self) -> Option<PanelLayer> {
        match self {
            Self::Inline { .. } => Some(PanelLayer::Inline),
            Self::Overlay { .. } => Some(PanelLayer::Overlay),
            Self::Hidden | Self::Deferred => None,
        }
    }
}

/// A strategy for presenting the option panel.
pub trait PanelPresenter: Send + Sync + fmt::Debug {
    /// The layer this presenter renders into.
    fn layer(&self) -> PanelLayer;

    /// Decide the panel's placement.
    fn place(&self, context: &PlacementContext) -> PanelPlacement;
}

/// Presents the panel inline, below the control surface.
#[derive(Debug, Clone, Copy, Default)]
pub struct InlinePresenter;

impl PanelPresenter for InlinePresenter {
    fn layer(&self) -> PanelLayer {
        PanelLayer::Inline
    }

    fn place(&self, context: &PlacementContext) -> PanelPlacement {
        PanelPlacement::Inline {
            rect: context
                .anchor
                .map(|anchor| below_align_left(anchor, context.panel_height)),
            visible: context.open,
        }
    }
}

/// Presents the panel in the detached overlay layer.
#[derive(Debug, Clone, Copy, Default)]
pub struct OverlayPresenter;

impl PanelPresenter for OverlayPresenter {
    fn layer(&self) -> PanelLayer {
        PanelLayer::Overlay
    }

    fn place(&self, context: &PlacementContext) -> PanelPlacement {
        if !context.open {
            return PanelPlacement::Hidden;
        }
        match context.anchor {
            Some(anchor) => PanelPlacement::Overlay {
                rect: below_align_left(anchor, context.panel_height),
            },
            None => PanelPlacement::Deferred,
        }
    }
}

/// The presenter for the `portal` configuration flag.
pub fn presenter_for(portal: bool) -> Box<dyn PanelPresenter> {
    if portal {
        Box::new(OverlayPresenter)
    } else {
        Box::new(InlinePresenter)
    }
}

/// Left edge aligned with the anchor, top at the anchor's bottom, same width.
fn below_align_left(anchor: Rect, height: f32) -> Rect {
    Rect::from_origin_size(anchor.bottom_left(), (anchor.width(), height).into())
}
