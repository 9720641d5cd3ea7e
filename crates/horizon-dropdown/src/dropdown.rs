//! The dropdown widget.
//!
//! [`Dropdown`] ties the option model, filter engine, selection engine and
//! open/close state machine together. It is headless: a renderer asks it for a
//! [`DropdownView`] and a [`PanelPlacement`] and draws those, and feeds input
//! back in through the document event hub or the `handle_*` methods.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use horizon_dropdown::{Dropdown, DropdownOption};
//! use horizon_dropdown_core::{DocumentEvents, Key, KeyPressEvent};
//!
//! let document = Arc::new(DocumentEvents::new());
//! let mut dropdown = Dropdown::new(vec![
//!     DropdownOption::new("1", "Option 1"),
//!     DropdownOption::new("2", "Option 2"),
//! ])
//! .unwrap()
//! .with_multiple(true)
//! .with_document(document.clone());
//! dropdown.mount();
//!
//! dropdown.selection_changed().connect(|selected| {
//!     println!("selected: {selected:?}");
//! });
//!
//! dropdown.activate_control();
//! dropdown.toggle_option("2").unwrap();
//! assert!(dropdown.is_open());
//!
//! document.dispatch_key_press(KeyPressEvent::key(Key::Escape));
//! assert!(!dropdown.is_open());
//! assert_eq!(dropdown.selected_values(), vec!["2".to_string()]);
//! ```
//!
//! # Signals
//!
//! - `selection_changed(Vec<DropdownOption>)`: after every successful toggle
//!   and after `set_options` pruned the selection.
//! - `open_changed(bool)`: whenever the panel opens or closes.
//! - `search_changed(String)`: whenever the search term changes.
//!
//! Signals are emitted after the widget's internal lock is released, so
//! connected slots may call back into the widget.

use std::fmt;
use std::sync::{Arc, Weak};

use horizon_dropdown_core::logging::targets;
use horizon_dropdown_core::{
    ConnectionGuard, DocumentEvents, Key, KeyPressEvent, MouseButton, Point, PointerPressEvent,
    Rect, Signal, WheelEvent,
};
use parking_lot::Mutex;

use crate::config::DropdownConfig;
use crate::delegate::{DefaultOptionDelegate, OptionDelegate};
use crate::error::{DropdownError, Result};
use crate::filter::FilterCache;
use crate::option::{DropdownOption, OptionList, find_option, validate_options};
use crate::placement::{PanelLayer, PanelPlacement, PanelPresenter, PlacementContext, presenter_for};
use crate::selection::SelectionSet;
use crate::state::{CloseReason, InteractionState, OpenState, Transition};
use crate::view::{
    ChipView, ControlStyle, ControlView, DropdownView, Indicator, NO_RESULTS_TEXT, PanelView,
    RowView, SEARCH_PLACEHOLDER, SearchFieldView,
};

// =========================================================================
// Hit testing
// =========================================================================

/// Parts of the dropdown for hit testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DropdownPart {
    Control,
    SearchField,
    ClearSearch,
    /// A row of the filtered list.
    Row(usize),
    /// Inside the panel but not on anything actionable.
    Panel,
    Outside,
}

/// A change to report once the state lock is released.
#[derive(Debug)]
enum Notification {
    SelectionChanged(Vec<DropdownOption>),
    OpenChanged(bool),
    SearchChanged(String),
}

// =========================================================================
// State
// =========================================================================

struct DropdownInner {
    config: DropdownConfig,
    options: OptionList,
    selection: SelectionSet,
    interaction: InteractionState,
    filter_cache: FilterCache,
    delegate: Arc<dyn OptionDelegate>,
    presenter: Box<dyn PanelPresenter>,
    /// Control surface in viewport coordinates, once measured.
    control_rect: Option<Rect>,
    scroll_offset: Point,
    /// Overlay anchor in document coordinates, captured on open.
    overlay_anchor: Option<Rect>,
}

impl DropdownInner {
    fn new(options: OptionList) -> Self {
        let config = DropdownConfig::default();
        Self {
            presenter: presenter_for(config.portal),
            config,
            options,
            selection: SelectionSet::new(),
            interaction: InteractionState::new(),
            filter_cache: FilterCache::new(),
            delegate: Arc::new(DefaultOptionDelegate),
            control_rect: None,
            scroll_offset: Point::ZERO,
            overlay_anchor: None,
        }
    }

    fn control_document_rect(&self) -> Option<Rect> {
        self.control_rect
            .map(|rect| rect.translated(self.scroll_offset))
    }

    fn filtered_len(&mut self) -> usize {
        self.filter_cache
            .get(&self.options, self.interaction.search_term())
            .len()
    }

    fn filtered_option(&mut self, row: usize) -> Option<DropdownOption> {
        let indices = self
            .filter_cache
            .get(&self.options, self.interaction.search_term());
        indices.get(row).map(|&index| self.options[index].clone())
    }

    fn record(&self, transition: Transition, notes: &mut Vec<Notification>) {
        if transition.search_changed {
            notes.push(Notification::SearchChanged(
                self.interaction.search_term().to_string(),
            ));
        }
        if transition.open_changed {
            notes.push(Notification::OpenChanged(self.interaction.is_open()));
        }
    }

    fn search_edited(&self, changed: bool, notes: &mut Vec<Notification>) -> bool {
        if changed {
            notes.push(Notification::SearchChanged(
                self.interaction.search_term().to_string(),
            ));
        }
        changed
    }

    // =========================================================================
    // Open/close
    // =========================================================================

    fn open(&mut self, notes: &mut Vec<Notification>) {
        let transition = self.interaction.open(self.config.with_search);
        if transition.open_changed {
            self.overlay_anchor = self.control_document_rect();
            tracing::trace!(
                target: targets::DROPDOWN,
                search_focused = self.interaction.is_search_focused(),
                "panel opened"
            );
        }
        self.record(transition, notes);
    }

    fn close(&mut self, reason: CloseReason, notes: &mut Vec<Notification>) {
        let transition = self.interaction.close();
        if transition.open_changed {
            self.overlay_anchor = None;
            tracing::trace!(target: targets::DROPDOWN, ?reason, "panel closed");
        }
        self.record(transition, notes);
    }

    fn toggle_open(&mut self, notes: &mut Vec<Notification>) {
        if self.interaction.is_open() {
            self.close(CloseReason::ControlToggled, notes);
        } else {
            self.open(notes);
        }
    }

    // =========================================================================
    // Selection
    // =========================================================================

    fn commit(&mut self, value: &str, notes: &mut Vec<Notification>) -> Result<()> {
        let Some(option) = find_option(&self.options, value).cloned() else {
            tracing::warn!(target: targets::DROPDOWN, value, "rejected toggle of unknown option");
            return Err(DropdownError::unknown_option(value));
        };
        self.commit_option(&option, notes);
        Ok(())
    }

    /// Toggle an option taken from the current list.
    fn commit_option(&mut self, option: &DropdownOption, notes: &mut Vec<Notification>) {
        let mode = self.config.selection_mode();
        self.selection.toggle(&option, mode);
        let cleared = self.interaction.clear_search();
        self.search_edited(cleared, notes);
        notes.push(Notification::SelectionChanged(self.selection.snapshot()));
        tracing::debug!(
            target: targets::DROPDOWN,
            value = %option.value,
            selected = self.selection.len(),
            "selection committed"
        );

        if !mode.keeps_open_after_commit() {
            self.close(CloseReason::SelectionCommitted, notes);
        }
    }

    fn replace_options(&mut self, options: OptionList, notes: &mut Vec<Notification>) {
        self.options = options;
        self.filter_cache.invalidate();
        let row_count = self.filtered_len();
        self.interaction.clamp_active_row(row_count);
        if self.selection.retain_known(&self.options) {
            tracing::debug!(
                target: targets::DROPDOWN,
                selected = self.selection.len(),
                "selection pruned to new option list"
            );
            notes.push(Notification::SelectionChanged(self.selection.snapshot()));
        }
    }

    // =========================================================================
    // Geometry
    // =========================================================================

    fn set_control_geometry(&mut self, rect: Option<Rect>) {
        let previous = self.control_rect;
        self.control_rect = rect;

        if !self.interaction.is_open() || self.presenter.layer() != PanelLayer::Overlay {
            return;
        }
        let Some(current) = rect else {
            return;
        };
        let resized = previous.is_none_or(|previous| previous.size != current.size);
        if resized || self.overlay_anchor.is_none() {
            self.overlay_anchor = self.control_document_rect();
            tracing::trace!(
                target: targets::PLACEMENT,
                anchor = ?self.overlay_anchor,
                "overlay anchor re-synchronized"
            );
        }
    }

    fn panel_height(&mut self) -> f32 {
        let rows = self.filtered_len().max(1);
        self.config.metrics.panel_height(self.config.with_search, rows)
    }

    fn placement(&mut self) -> PanelPlacement {
        let anchor = match self.presenter.layer() {
            PanelLayer::Inline => self.control_document_rect(),
            PanelLayer::Overlay => self.overlay_anchor,
        };
        let context = PlacementContext {
            anchor,
            open: self.interaction.is_open(),
            panel_height: self.panel_height(),
        };
        self.presenter.place(&context)
    }

    fn hit_test(&mut self, point: Point) -> DropdownPart {
        if self
            .control_document_rect()
            .is_some_and(|rect| rect.contains(point))
        {
            return DropdownPart::Control;
        }

        let Some(panel) = self.placement().interactive_rect() else {
            return DropdownPart::Outside;
        };
        if !panel.contains(point) {
            return DropdownPart::Outside;
        }

        let metrics = self.config.metrics;
        let show_clear = !self.interaction.search_term().is_empty();
        let layout = metrics.layout(panel, self.config.with_search, show_clear);

        if layout.clear_button.is_some_and(|rect| rect.contains(point)) {
            DropdownPart::ClearSearch
        } else if layout.search.is_some_and(|rect| rect.contains(point)) {
            DropdownPart::SearchField
        } else {
            let row_count = self.filtered_len();
            metrics
                .row_at(layout.list, point, self.interaction.scroll_row(), row_count)
                .map_or(DropdownPart::Panel, DropdownPart::Row)
        }
    }

    // =========================================================================
    // Event handling
    // =========================================================================

    fn handle_pointer_press(
        &mut self,
        event: &PointerPressEvent,
        notes: &mut Vec<Notification>,
    ) -> bool {
        if self.control_rect.is_none() {
            // Without geometry there is no way to tell inside from outside.
            return false;
        }

        let part = self.hit_test(event.position);
        tracing::trace!(target: targets::DROPDOWN, ?part, button = ?event.button, "pointer press");

        if part == DropdownPart::Outside {
            if !self.interaction.is_open() {
                return false;
            }
            self.close(CloseReason::OutsidePress, notes);
            return true;
        }

        if event.button != MouseButton::Left {
            return true;
        }

        match part {
            DropdownPart::Control => self.toggle_open(notes),
            DropdownPart::SearchField => self.interaction.set_search_focused(true),
            DropdownPart::ClearSearch => {
                let cleared = self.interaction.clear_search();
                self.search_edited(cleared, notes);
                self.interaction.set_search_focused(true);
            }
            DropdownPart::Row(row) => {
                if let Some(option) = self.filtered_option(row) {
                    self.commit_option(&option, notes);
                }
            }
            DropdownPart::Panel | DropdownPart::Outside => {}
        }
        true
    }

    fn handle_key_press(&mut self, event: &KeyPressEvent, notes: &mut Vec<Notification>) -> bool {
        if !self.interaction.is_open() {
            return false;
        }

        let editing = self.config.with_search && self.interaction.is_search_focused();
        match event.key {
            Key::Escape => {
                self.close(CloseReason::Escape, notes);
                true
            }
            Key::ArrowDown | Key::ArrowUp => {
                let delta = if event.key == Key::ArrowDown { 1 } else { -1 };
                let row_count = self.filtered_len();
                let visible_rows = self.config.metrics.visible_rows();
                self.interaction
                    .move_active_row(delta, row_count, visible_rows);
                true
            }
            Key::Enter => {
                let option = self
                    .interaction
                    .active_row()
                    .and_then(|row| self.filtered_option(row));
                if let Some(option) = option {
                    self.commit_option(&option, notes);
                }
                true
            }
            Key::Backspace if editing => {
                let changed = self.interaction.delete_backward();
                self.search_edited(changed, notes)
            }
            _ => match event.insertable_text() {
                Some(text) if editing => {
                    let changed = self.interaction.insert_text(text);
                    self.search_edited(changed, notes)
                }
                _ => false,
            },
        }
    }

    fn set_scroll_row(&mut self, row: usize) -> bool {
        let row_count = self.filtered_len();
        let visible_rows = self.config.metrics.visible_rows();
        self.interaction
            .set_scroll_row(row, row_count, visible_rows)
    }

    fn handle_wheel(&mut self, event: &WheelEvent) -> bool {
        if !self.interaction.is_open() {
            return false;
        }
        let delta = event.row_delta();
        if delta == 0 {
            return false;
        }
        let Some(panel) = self.placement().interactive_rect() else {
            return false;
        };
        let show_clear = !self.interaction.search_term().is_empty();
        let layout = self
            .config
            .metrics
            .layout(panel, self.config.with_search, show_clear);
        if !layout.list.contains(event.position) {
            return false;
        }

        let row = self.interaction.scroll_row().saturating_add_signed(delta);
        let scrolled = self.set_scroll_row(row);
        tracing::trace!(
            target: targets::DROPDOWN,
            delta,
            scroll_row = self.interaction.scroll_row(),
            scrolled,
            "wheel over option list"
        );
        // Wheel events over the list are consumed even at the ends.
        true
    }

    // =========================================================================
    // View
    // =========================================================================

    fn view(&mut self) -> DropdownView {
        let open = self.interaction.is_open();
        let control = ControlView {
            placeholder: self
                .selection
                .is_empty()
                .then(|| self.config.placeholder.clone()),
            chips: self
                .selection
                .as_slice()
                .iter()
                .map(|option| ChipView {
                    value: option.value.clone(),
                    label: option.label.clone(),
                })
                .collect(),
            indicator: if open {
                Indicator::Expanded
            } else {
                Indicator::Collapsed
            },
            style: if self.config.outlined {
                ControlStyle::Outlined
            } else {
                ControlStyle::Filled
            },
        };

        let term = self.interaction.search_term();
        let search = self.config.with_search.then(|| SearchFieldView {
            text: term.to_string(),
            placeholder: SEARCH_PLACEHOLDER,
            focused: self.interaction.is_search_focused(),
            show_clear_button: !term.is_empty(),
        });

        let active_row = self.interaction.active_row();
        let indices = self.filter_cache.get(&self.options, term);
        let rows = if indices.is_empty() {
            vec![RowView::Empty {
                message: NO_RESULTS_TEXT,
            }]
        } else {
            indices
                .iter()
                .enumerate()
                .map(|(row, &index)| {
                    let option = &self.options[index];
                    RowView::Option {
                        value: option.value.clone(),
                        content: self.delegate.row_content(option, term),
                        selected: self.selection.contains(&option.value),
                        active: active_row == Some(row),
                    }
                })
                .collect()
        };

        DropdownView {
            control,
            panel: PanelView {
                open,
                search,
                rows,
                scroll_row: self.interaction.scroll_row(),
            },
        }
    }
}

// =========================================================================
// Shared handle
// =========================================================================

/// State plus signals, shared with the document listeners.
struct Shared {
    inner: Mutex<DropdownInner>,
    selection_changed: Signal<Vec<DropdownOption>>,
    open_changed: Signal<bool>,
    search_changed: Signal<String>,
}

impl Shared {
    /// Run `f` under the state lock, then emit what it recorded.
    fn update<R>(&self, f: impl FnOnce(&mut DropdownInner, &mut Vec<Notification>) -> R) -> R {
        let mut notes = Vec::new();
        let result = {
            let mut inner = self.inner.lock();
            f(&mut inner, &mut notes)
        };
        self.notify(notes);
        result
    }

    fn notify(&self, notes: Vec<Notification>) {
        for note in notes {
            match note {
                Notification::SelectionChanged(selected) => self.selection_changed.emit(selected),
                Notification::OpenChanged(open) => self.open_changed.emit(open),
                Notification::SearchChanged(term) => self.search_changed.emit(term),
            }
        }
    }
}

/// Document subscriptions held while mounted.
struct Listeners {
    _key: ConnectionGuard<KeyPressEvent>,
    _pointer: ConnectionGuard<PointerPressEvent>,
}

// =========================================================================
// Dropdown
// =========================================================================

/// A searchable, optionally multi-select dropdown.
///
/// Created closed with an empty selection. While mounted it listens to the
/// [`DocumentEvents`] hub for key and pointer presses; dropping the dropdown
/// (or calling [`unmount`](Self::unmount)) releases those listeners.
pub struct Dropdown {
    shared: Arc<Shared>,
    document: Arc<DocumentEvents>,
    listeners: Option<Listeners>,
}

impl Dropdown {
    /// Create a dropdown over `options`.
    ///
    /// Fails with [`DropdownError::DuplicateValue`] if two options share a value.
    pub fn new<I, O>(options: I) -> Result<Self>
    where
        I: IntoIterator<Item = O>,
        O: Into<DropdownOption>,
    {
        Self::from_list(crate::option::option_list(options))
    }

    /// Create a dropdown sharing the host's option list.
    pub fn from_list(options: OptionList) -> Result<Self> {
        validate_options(&options)?;
        Ok(Self {
            shared: Arc::new(Shared {
                inner: Mutex::new(DropdownInner::new(options)),
                selection_changed: Signal::new(),
                open_changed: Signal::new(),
                search_changed: Signal::new(),
            }),
            document: DocumentEvents::global(),
            listeners: None,
        })
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// Replace the whole configuration using builder pattern.
    pub fn with_config(self, config: DropdownConfig) -> Self {
        {
            let mut inner = self.shared.inner.lock();
            inner.presenter = presenter_for(config.portal);
            inner.config = config;
        }
        self
    }

    fn configure(self, f: impl FnOnce(&mut DropdownConfig)) -> Self {
        {
            let mut inner = self.shared.inner.lock();
            f(&mut inner.config);
            inner.presenter = presenter_for(inner.config.portal);
        }
        self
    }

    /// Set the control surface placeholder using builder pattern.
    pub fn with_placeholder(self, placeholder: impl Into<String>) -> Self {
        let placeholder = placeholder.into();
        self.configure(|config| config.placeholder = placeholder)
    }

    /// Allow multiple selections using builder pattern.
    pub fn with_multiple(self, multiple: bool) -> Self {
        self.configure(|config| config.multiple = multiple)
    }

    /// Show or hide the search field using builder pattern.
    pub fn with_search(self, with_search: bool) -> Self {
        self.configure(|config| config.with_search = with_search)
    }

    /// Render the panel in the overlay layer using builder pattern.
    pub fn with_portal(self, portal: bool) -> Self {
        self.configure(|config| config.portal = portal)
    }

    /// Choose the outlined or filled control style using builder pattern.
    pub fn with_outlined(self, outlined: bool) -> Self {
        self.configure(|config| config.outlined = outlined)
    }

    /// Set a custom row delegate using builder pattern.
    pub fn with_delegate(self, delegate: impl OptionDelegate + 'static) -> Self {
        self.shared.inner.lock().delegate = Arc::new(delegate);
        self
    }

    /// Connect a selection listener using builder pattern.
    pub fn with_on_change<F>(self, on_change: F) -> Self
    where
        F: Fn(&Vec<DropdownOption>) + Send + Sync + 'static,
    {
        self.shared.selection_changed.connect(on_change);
        self
    }

    /// Listen to `document` instead of the global hub.
    ///
    /// Takes effect at the next [`mount`](Self::mount).
    pub fn with_document(mut self, document: Arc<DocumentEvents>) -> Self {
        self.document = document;
        self
    }

    /// Get the configuration.
    pub fn config(&self) -> DropdownConfig {
        self.shared.inner.lock().config.clone()
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Subscribe to document key and pointer presses.
    ///
    /// Does nothing if already mounted.
    pub fn mount(&mut self) {
        if self.listeners.is_some() {
            return;
        }

        let weak: Weak<Shared> = Arc::downgrade(&self.shared);
        let key = self.document.subscribe_key_press(move |event| {
            if let Some(shared) = weak.upgrade() {
                shared.update(|inner, notes| inner.handle_key_press(event, notes));
            }
        });

        let weak: Weak<Shared> = Arc::downgrade(&self.shared);
        let pointer = self.document.subscribe_pointer_press(move |event| {
            if let Some(shared) = weak.upgrade() {
                shared.update(|inner, notes| inner.handle_pointer_press(event, notes));
            }
        });

        self.listeners = Some(Listeners {
            _key: key,
            _pointer: pointer,
        });
        tracing::debug!(target: targets::DROPDOWN, "dropdown mounted");
    }

    /// Release the document listeners and close the panel.
    pub fn unmount(&mut self) {
        if self.listeners.take().is_none() {
            return;
        }
        self.shared
            .update(|inner, notes| inner.close(CloseReason::Unmounted, notes));
        tracing::debug!(target: targets::DROPDOWN, "dropdown unmounted");
    }

    /// Check if the dropdown is listening to the document.
    pub fn is_mounted(&self) -> bool {
        self.listeners.is_some()
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// The current option list.
    pub fn options(&self) -> OptionList {
        self.shared.inner.lock().options.clone()
    }

    /// Selected options in selection order.
    pub fn selected(&self) -> Vec<DropdownOption> {
        self.shared.inner.lock().selection.snapshot()
    }

    /// Values of the selected options in selection order.
    pub fn selected_values(&self) -> Vec<String> {
        self.shared
            .inner
            .lock()
            .selection
            .values()
            .map(str::to_string)
            .collect()
    }

    pub fn is_open(&self) -> bool {
        self.shared.inner.lock().interaction.is_open()
    }

    pub fn open_state(&self) -> OpenState {
        self.shared.inner.lock().interaction.open_state()
    }

    pub fn search_term(&self) -> String {
        self.shared.inner.lock().interaction.search_term().to_string()
    }

    pub fn is_search_focused(&self) -> bool {
        self.shared.inner.lock().interaction.is_search_focused()
    }

    /// Options matching the current search term, in list order.
    pub fn filtered_options(&self) -> Vec<DropdownOption> {
        let mut inner = self.shared.inner.lock();
        let inner = &mut *inner;
        inner
            .filter_cache
            .get(&inner.options, inner.interaction.search_term())
            .iter()
            .map(|&index| inner.options[index].clone())
            .collect()
    }

    /// Describe what to render.
    pub fn view(&self) -> DropdownView {
        self.shared.inner.lock().view()
    }

    /// Where the panel goes.
    pub fn panel_placement(&self) -> PanelPlacement {
        self.shared.inner.lock().placement()
    }

    // =========================================================================
    // Signals
    // =========================================================================

    /// Emitted with a snapshot of the selection whenever it changes.
    pub fn selection_changed(&self) -> &Signal<Vec<DropdownOption>> {
        &self.shared.selection_changed
    }

    /// Emitted with the new open state whenever the panel opens or closes.
    pub fn open_changed(&self) -> &Signal<bool> {
        &self.shared.open_changed
    }

    /// Emitted with the new term whenever the search term changes.
    pub fn search_changed(&self) -> &Signal<String> {
        &self.shared.search_changed
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Activate the control surface: open if closed, close if open.
    pub fn activate_control(&self) {
        self.shared.update(|inner, notes| inner.toggle_open(notes));
    }

    /// Open the panel.
    pub fn open(&self) {
        self.shared.update(|inner, notes| inner.open(notes));
    }

    /// Close the panel.
    pub fn close(&self) {
        self.shared
            .update(|inner, notes| inner.close(CloseReason::Programmatic, notes));
    }

    /// Replace the search term, as typing into the search field does.
    ///
    /// The search field only exists while the panel is open and `with_search`
    /// is set; otherwise this does nothing. Returns `true` if the term changed.
    pub fn set_search_term(&self, term: impl Into<String>) -> bool {
        let term = term.into();
        self.shared.update(|inner, notes| {
            if !inner.interaction.is_open() || !inner.config.with_search {
                return false;
            }
            let changed = inner.interaction.set_search_term(term);
            inner.search_edited(changed, notes)
        })
    }

    /// Reset the search term to the empty string.
    pub fn clear_search(&self) {
        self.shared.update(|inner, notes| {
            let changed = inner.interaction.clear_search();
            inner.search_edited(changed, notes);
        });
    }

    /// Toggle the option with `value`, as picking its row does.
    ///
    /// The search term is cleared and `selection_changed` fires. In
    /// single-select mode the panel closes. Unknown values are rejected with
    /// [`DropdownError::UnknownOption`] and change nothing.
    pub fn toggle_option(&self, value: &str) -> Result<()> {
        self.shared.update(|inner, notes| inner.commit(value, notes))
    }

    /// Remove a selected option, as its chip's remove button does.
    ///
    /// Returns `Ok(false)` if `value` is not selected.
    pub fn remove_selected(&self, value: &str) -> Result<bool> {
        self.shared.update(|inner, notes| {
            if !inner.selection.contains(value) {
                return Ok(false);
            }
            inner.commit(value, notes).map(|()| true)
        })
    }

    /// Replace the option list.
    ///
    /// Selected options that are no longer present are dropped, firing
    /// `selection_changed`.
    pub fn set_options<I, O>(&self, options: I) -> Result<()>
    where
        I: IntoIterator<Item = O>,
        O: Into<DropdownOption>,
    {
        self.set_option_list(crate::option::option_list(options))
    }

    /// Replace the option list with a shared one.
    pub fn set_option_list(&self, options: OptionList) -> Result<()> {
        validate_options(&options)?;
        self.shared
            .update(|inner, notes| inner.replace_options(options, notes));
        Ok(())
    }

    /// Report the control surface's rectangle in viewport coordinates.
    ///
    /// `None` means the control has not been laid out.
    pub fn set_control_geometry(&self, rect: Option<Rect>) {
        self.shared.inner.lock().set_control_geometry(rect);
    }

    /// First visible row of the option list.
    pub fn scroll_row(&self) -> usize {
        self.shared.inner.lock().interaction.scroll_row()
    }

    /// Scroll the option list so `row` is the first visible row.
    ///
    /// Clamped so the last window of rows stays full. Returns `true` if the
    /// scroll position changed.
    pub fn set_scroll_row(&self, row: usize) -> bool {
        self.shared.inner.lock().set_scroll_row(row)
    }

    /// Report the document scroll offset.
    pub fn set_scroll_offset(&self, offset: Point) {
        self.shared.inner.lock().scroll_offset = offset;
    }

    /// Handle a pointer press in document coordinates.
    ///
    /// Mounted dropdowns receive these from the document hub. Returns `true`
    /// if the press concerned this dropdown.
    #[tracing::instrument(skip_all, target = "horizon_dropdown::dropdown", level = "trace")]
    pub fn handle_pointer_press(&self, event: &PointerPressEvent) -> bool {
        self.shared
            .update(|inner, notes| inner.handle_pointer_press(event, notes))
    }

    /// Handle a wheel event in document coordinates.
    ///
    /// Scrolls the option list one row per event while the pointer is over
    /// it. Returns `true` if the event was consumed.
    #[tracing::instrument(skip_all, target = "horizon_dropdown::dropdown", level = "trace")]
    pub fn handle_wheel(&self, event: &WheelEvent) -> bool {
        self.shared.inner.lock().handle_wheel(event)
    }

    /// Handle a key press.
    ///
    /// Mounted dropdowns receive these from the document hub. Returns `true`
    /// if the key was consumed.
    #[tracing::instrument(skip_all, target = "horizon_dropdown::dropdown", level = "trace")]
    pub fn handle_key_press(&self, event: &KeyPressEvent) -> bool {
        self.shared
            .update(|inner, notes| inner.handle_key_press(event, notes))
    }
}

impl fmt::Debug for Dropdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.shared.inner.lock();
        f.debug_struct("Dropdown")
            .field("options", &inner.options.len())
            .field("selected", &inner.selection.as_slice())
            .field("open", &inner.interaction.open_state())
            .field("search_term", &inner.interaction.search_term())
            .field("layer", &inner.presenter.layer())
            .field("mounted", &self.listeners.is_some())
            .finish()
    }
}
