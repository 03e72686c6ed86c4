//! Select interaction state machine
//!
//! One controller drives a plain dropdown, a filterable autocomplete, and a
//! createable autocomplete. The host feeds it input events; after each event
//! it renders [`SelectController::view`].
//!
//! # Phases
//!
//! ```text
//! Closed --click/key--> Browsing            (plain dropdown)
//! Closed --click/key--> Filtering           (autocomplete / createable)
//! Filtering --text--> Filtering             (query replaced, highlight cleared)
//! Browsing|Filtering --Up/Down--> same      (highlight moves)
//! Browsing|Filtering --select/Enter/Escape/outside click--> Closed
//! ```
//!
//! Every path into `Closed` resets the query, display text, and highlight,
//! and releases the document click listener held while open.
//!
//! # Example
//!
//! ```ignore
//! use thorin_cn::prelude::*;
//! use thorin_platform::DocumentListeners;
//!
//! let listeners = DocumentListeners::new();
//! let mut fruit = SelectController::new(
//!     SelectConfig { createable: true, ..Default::default() },
//!     vec![SelectOption::new("a", "Apple"), SelectOption::new("b", "Banana")],
//!     &listeners,
//! )?
//! .on_change(|event| println!("Selected: {}", event.value))
//! .on_create(|query| println!("Create: {}", query));
//!
//! fruit.toggle();
//! fruit.set_query("Cherry");
//! ```

use std::sync::Arc;

use serde::Serialize;
use thorin_platform::{
    ControlId, DocumentListeners, FocusEvent, Key, KeyboardEvent, ListenerGuard,
};

use super::aria::{self, ComboboxAria, ListboxAria, OptionAria};
use super::config::{SelectConfig, SelectDefinition};
use super::filter::{filter_options, VisibleOption};
use super::list::{Direction, OptionList};
use super::option::{find_option, validate_options, SelectOption};
use super::view::{RowView, SelectView};
use crate::error::Result;

/// Change notification payload
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChangeEvent {
    /// The newly selected value
    pub value: String,
    /// Form field name of the control
    pub name: Option<String>,
}

/// Callback for committed selections
pub type ChangeCallback = Arc<dyn Fn(&ChangeEvent) + Send + Sync>;
/// Callback for create commits; receives the raw query
pub type CreateCallback = Arc<dyn Fn(&str) + Send + Sync>;
/// Callback for focus and blur
pub type FocusCallback = Arc<dyn Fn(&FocusEvent) + Send + Sync>;

/// Interaction phase derived from the state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub enum SelectPhase {
    /// Menu hidden
    #[default]
    Closed,
    /// Menu shown, plain dropdown
    Browsing,
    /// Menu shown, filter input active
    Filtering,
}

/// Which element should hold focus
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub enum FocusTarget {
    /// The combobox container
    #[default]
    Container,
    /// The filter input shown while filtering
    FilterInput,
}

/// What the controller did with a key press
///
/// Anything other than `Ignored` should stop propagation and suppress the
/// host's default action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyOutcome {
    /// The key opened the menu and had no other effect
    Opened,
    /// The key was consumed by the open menu
    Handled,
    /// The key is not reserved; let it through (e.g. to the filter input)
    Ignored,
}

impl KeyOutcome {
    /// Whether the host should prevent the default action
    pub fn is_consumed(&self) -> bool {
        !matches!(self, KeyOutcome::Ignored)
    }
}

/// Mutable interaction state
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SelectState {
    /// Committed selection; empty means none
    pub selected_value: String,
    /// Text typed into the filter input
    pub query: String,
    /// Text shown in the filter input
    pub display_text: String,
    /// Highlighted visible row
    pub highlighted: Option<usize>,
    /// Whether the menu is open
    pub open: bool,
}

impl SelectState {
    fn reset_query(&mut self) {
        self.query.clear();
        self.display_text.clear();
        self.highlighted = None;
    }
}

/// A resolved commit target
enum Commit {
    Value(String),
    Create(String),
}

/// Select/combobox controller
///
/// A controller belongs to the UI thread that owns its
/// [`DocumentListeners`] and is not `Send`. Its callbacks are
/// `Send + Sync` so hosts can reuse handlers that forward to other threads.
pub struct SelectController {
    id: ControlId,
    config: SelectConfig,
    options: Vec<SelectOption>,
    state: SelectState,
    /// Last external value seen by `sync_value`
    external_value: Option<String>,
    listeners: DocumentListeners,
    /// Held exactly while the menu is open
    outside_click: Option<ListenerGuard>,
    on_change: Option<ChangeCallback>,
    on_create: Option<CreateCallback>,
    on_focus: Option<FocusCallback>,
    on_blur: Option<FocusCallback>,
}

impl std::fmt::Debug for SelectController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectController")
            .field("id", &self.id)
            .field("config", &self.config)
            .field("options", &self.options.len())
            .field("state", &self.state)
            .field("listening", &self.outside_click.is_some())
            .finish()
    }
}

/// Visible rows for a query under a configuration
fn visible_rows<'a>(
    config: &SelectConfig,
    options: &'a [SelectOption],
    query: &str,
) -> OptionList<'a> {
    filter_options(options, query, config.filter_mode(query)).into()
}

fn check_options(options: &[SelectOption]) -> Result<()> {
    if cfg!(debug_assertions) {
        validate_options(options)
    } else {
        if let Err(err) = validate_options(options) {
            tracing::warn!(error = %err, "select options are not unique; first match wins");
        }
        Ok(())
    }
}

impl SelectController {
    /// Mount a controller
    ///
    /// In debug builds the options are checked for duplicate values. A
    /// configured `value` is synced as the initial external value.
    pub fn new(
        config: SelectConfig,
        options: Vec<SelectOption>,
        listeners: &DocumentListeners,
    ) -> Result<Self> {
        check_options(&options)?;
        let id = ControlId::from_host(config.id.as_deref());
        tracing::debug!(control = %id, options = options.len(), "select mounted");

        let initial = config.value.clone();
        let mut controller = Self {
            id,
            config,
            options,
            state: SelectState::default(),
            external_value: None,
            listeners: listeners.clone(),
            outside_click: None,
            on_change: None,
            on_create: None,
            on_focus: None,
            on_blur: None,
        };
        if let Some(value) = initial {
            controller.sync_value(Some(&value));
        }
        Ok(controller)
    }

    /// Mount a controller from a parsed definition
    pub fn from_definition(
        definition: SelectDefinition,
        listeners: &DocumentListeners,
    ) -> Result<Self> {
        Self::new(definition.config, definition.options, listeners)
    }

    /// Set the change handler
    pub fn on_change<F>(mut self, callback: F) -> Self
    where
        F: Fn(&ChangeEvent) + Send + Sync + 'static,
    {
        self.on_change = Some(Arc::new(callback));
        self
    }

    /// Set the create handler
    pub fn on_create<F>(mut self, callback: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.on_create = Some(Arc::new(callback));
        self
    }

    /// Set the focus handler
    pub fn on_focus<F>(mut self, callback: F) -> Self
    where
        F: Fn(&FocusEvent) + Send + Sync + 'static,
    {
        self.on_focus = Some(Arc::new(callback));
        self
    }

    /// Set the blur handler
    pub fn on_blur<F>(mut self, callback: F) -> Self
    where
        F: Fn(&FocusEvent) + Send + Sync + 'static,
    {
        self.on_blur = Some(Arc::new(callback));
        self
    }

    /// Start with an externally controlled value
    pub fn value(mut self, value: impl Into<String>) -> Self {
        let value = value.into();
        self.sync_value(Some(&value));
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Control id
    pub fn id(&self) -> &ControlId {
        &self.id
    }

    /// Current configuration
    pub fn config(&self) -> &SelectConfig {
        &self.config
    }

    /// Source options
    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    /// Interaction state
    pub fn state(&self) -> &SelectState {
        &self.state
    }

    /// Committed value; empty when nothing is selected
    pub fn selected_value(&self) -> &str {
        &self.state.selected_value
    }

    /// The committed option, if the value matches one
    pub fn selected_option(&self) -> Option<&SelectOption> {
        find_option(&self.options, &self.state.selected_value)
    }

    /// Whether typed text narrows the options
    pub fn is_filtering(&self) -> bool {
        self.config.is_filtering()
    }

    /// Whether the menu is shown
    pub fn is_open(&self) -> bool {
        self.state.open && !self.config.disabled
    }

    /// Current interaction phase
    pub fn phase(&self) -> SelectPhase {
        match (self.is_open(), self.is_filtering()) {
            (false, _) => SelectPhase::Closed,
            (true, false) => SelectPhase::Browsing,
            (true, true) => SelectPhase::Filtering,
        }
    }

    /// Element that should receive focus now
    ///
    /// Focus landing on the hidden form input is redirected here too.
    pub fn focus_target(&self) -> FocusTarget {
        if self.phase() == SelectPhase::Filtering {
            FocusTarget::FilterInput
        } else {
            FocusTarget::Container
        }
    }

    /// Rows visible for the current query
    pub fn visible_options(&self) -> OptionList<'_> {
        visible_rows(&self.config, &self.options, &self.state.query)
    }

    // =========================================================================
    // Host updates
    // =========================================================================

    /// Replace the source options
    ///
    /// A highlight that no longer points at a navigable row is cleared. The
    /// display text always follows whatever row the highlight lands on.
    pub fn set_options(&mut self, options: Vec<SelectOption>) -> Result<()> {
        check_options(&options)?;
        self.options = options;

        let list = visible_rows(&self.config, &self.options, &self.state.query);
        let highlighted = list.revalidate(self.state.highlighted);
        if highlighted.is_some() || highlighted != self.state.highlighted {
            self.state.display_text = list.display_text(highlighted, &self.state.query);
        }
        self.state.highlighted = highlighted;
        Ok(())
    }

    /// Enable or disable the whole control
    ///
    /// Disabling an open control closes it.
    pub fn set_disabled(&mut self, disabled: bool) {
        if disabled && self.state.open {
            self.close();
        }
        self.config.disabled = disabled;
    }

    /// Set or clear the validation error
    pub fn set_error(&mut self, error: Option<String>) {
        self.config.error = error;
    }

    /// Reconcile with the externally controlled value
    ///
    /// Call whenever the host's value input may have changed. Only an actual
    /// change of the external value is acted on; when it then differs from
    /// the internal selection, the external value wins. No change
    /// notification is fired.
    pub fn sync_value(&mut self, external: Option<&str>) {
        if self.external_value.as_deref() == external {
            return;
        }
        self.external_value = external.map(str::to_string);

        if let Some(value) = external {
            if value != self.state.selected_value {
                tracing::debug!(control = %self.id, value, "select value synced from host");
                self.state.selected_value = value.to_string();
            }
        }
    }

    // =========================================================================
    // Open / close
    // =========================================================================

    /// Open the menu
    pub fn open(&mut self) {
        if self.config.disabled || self.state.open {
            return;
        }
        self.state.open = true;
        self.outside_click = Some(self.listeners.subscribe(self.id.clone()));
        tracing::debug!(control = %self.id, phase = ?self.phase(), "select opened");
    }

    /// Close the menu and reset query, display text, and highlight
    pub fn close(&mut self) {
        let was_open = self.state.open;
        self.state.open = false;
        self.state.reset_query();
        self.outside_click = None;
        if was_open {
            tracing::debug!(control = %self.id, "select closed");
        }
    }

    /// Container click
    ///
    /// A plain dropdown toggles. A filtering control only opens; it closes
    /// through selection, Escape, or an outside click.
    pub fn toggle(&mut self) {
        if self.config.disabled {
            return;
        }
        if self.state.open {
            if !self.is_filtering() {
                self.close();
            }
        } else {
            self.open();
        }
    }

    /// A document click landed outside this control
    pub fn outside_click(&mut self) {
        if self.state.open {
            tracing::trace!(control = %self.id, "outside click");
            self.close();
        }
    }

    // =========================================================================
    // Keyboard
    // =========================================================================

    /// Key press on the container or the filter input
    ///
    /// While closed, any key press opens the menu and does nothing else.
    pub fn key_down(&mut self, event: &KeyboardEvent) -> KeyOutcome {
        if !event.is_pressed() || self.config.disabled {
            return KeyOutcome::Ignored;
        }

        if !self.state.open {
            self.open();
            return KeyOutcome::Opened;
        }

        match event.key {
            Key::Up => self.move_highlight(Direction::Previous),
            Key::Down => self.move_highlight(Direction::Next),
            Key::Enter => {
                self.select_highlighted();
                self.close();
            }
            Key::Escape => self.close(),
            _ => return KeyOutcome::Ignored,
        }
        KeyOutcome::Handled
    }

    /// Move the highlight to the next eligible row
    pub fn move_highlight(&mut self, direction: Direction) {
        if !self.is_open() {
            return;
        }
        let list = visible_rows(&self.config, &self.options, &self.state.query);
        let highlighted = list.step(self.state.highlighted, direction);
        self.state.display_text = list.display_text(highlighted, &self.state.query);
        self.state.highlighted = highlighted;
        tracing::trace!(control = %self.id, ?highlighted, "highlight moved");
    }

    // =========================================================================
    // Filter input
    // =========================================================================

    /// Replace the query text
    ///
    /// Only applies while open in filtering mode; returns whether it did.
    pub fn set_query(&mut self, text: impl Into<String>) -> bool {
        if !self.is_open() || !self.is_filtering() {
            return false;
        }
        let text = text.into();
        self.state.display_text = text.clone();
        self.state.query = text;
        self.state.highlighted = None;
        true
    }

    /// Clear the query without closing
    pub fn clear_query(&mut self) {
        self.state.reset_query();
    }

    // =========================================================================
    // Pointer
    // =========================================================================

    /// Pointer over the row at `index`
    ///
    /// Disabled rows clear the highlight instead of taking it.
    pub fn hover_row(&mut self, index: usize) {
        if !self.is_open() {
            return;
        }
        let list = visible_rows(&self.config, &self.options, &self.state.query);
        let highlighted = Some(index).filter(|&i| list.is_navigable(i));
        self.state.display_text = list.display_text(highlighted, &self.state.query);
        self.state.highlighted = highlighted;
    }

    /// Pointer left the option list
    pub fn leave_list(&mut self) {
        self.state.highlighted = None;
        self.state.display_text = self.state.query.clone();
    }

    /// Pointer click on the row at `index`
    pub fn click_row(&mut self, index: usize) -> bool {
        self.select_row(index)
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Commit the visible row at `index` and close
    ///
    /// Real options become the selection and fire `on_change`; the create
    /// row fires `on_create` with the raw query. Disabled or missing rows
    /// are ignored and leave the menu as it is, as is any row while closed.
    pub fn select_row(&mut self, index: usize) -> bool {
        if !self.is_open() {
            return false;
        }
        let commit = {
            let list = visible_rows(&self.config, &self.options, &self.state.query);
            match list.get(index) {
                Some(VisibleOption::Option(option)) => Self::resolve(option),
                Some(VisibleOption::Create { query, .. }) => Some(Commit::Create(query.clone())),
                None => None,
            }
        };
        self.finish_commit(commit)
    }

    /// Commit the highlighted row, if any
    pub fn select_highlighted(&mut self) -> bool {
        match self.state.highlighted {
            Some(index) => self.select_row(index),
            None => false,
        }
    }

    /// Commit the first option with `value` and close
    pub fn select_value(&mut self, value: &str) -> bool {
        if self.config.disabled {
            return false;
        }
        let commit = find_option(&self.options, value).and_then(Self::resolve);
        self.finish_commit(commit)
    }

    /// Change from the hidden native form input (autofill, form reset)
    ///
    /// Known, enabled values become the selection and fire `on_change`; the
    /// menu state is left alone.
    pub fn apply_native_value(&mut self, value: &str) -> bool {
        if self.config.disabled {
            return false;
        }
        match find_option(&self.options, value).and_then(Self::resolve) {
            Some(commit) => {
                self.commit(commit);
                true
            }
            None => false,
        }
    }

    fn resolve(option: &SelectOption) -> Option<Commit> {
        if option.disabled || option.value.is_empty() {
            None
        } else {
            Some(Commit::Value(option.value.clone()))
        }
    }

    fn finish_commit(&mut self, commit: Option<Commit>) -> bool {
        match commit {
            Some(commit) => {
                self.commit(commit);
                self.close();
                true
            }
            None => false,
        }
    }

    fn commit(&mut self, commit: Commit) {
        match commit {
            Commit::Create(query) => {
                tracing::debug!(control = %self.id, query = %query, "select create requested");
                if let Some(ref cb) = self.on_create {
                    cb(&query);
                }
            }
            Commit::Value(value) => {
                tracing::debug!(control = %self.id, value = %value, "select value committed");
                self.state.selected_value = value.clone();
                let event = ChangeEvent {
                    value,
                    name: self.config.name.clone(),
                };
                if let Some(ref cb) = self.on_change {
                    cb(&event);
                }
            }
        }
    }

    // =========================================================================
    // Focus
    // =========================================================================

    /// Forward a focus change to the host callbacks unmodified
    pub fn handle_focus(&self, event: &FocusEvent) {
        let callback = match event {
            FocusEvent::Focus => &self.on_focus,
            FocusEvent::Blur => &self.on_blur,
        };
        if let Some(cb) = callback {
            cb(event);
        }
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Combobox container attributes
    pub fn aria(&self) -> ComboboxAria {
        ComboboxAria {
            id: aria::combobox_id(&self.id),
            controls: aria::listbox_id(&self.id),
            expanded: self.is_open(),
            invalid: self.config.error.is_some(),
            active_descendant: self
                .state
                .highlighted
                .filter(|_| self.is_open())
                .map(|index| aria::option_id(&self.id, index)),
        }
    }

    /// Snapshot for the rendering layer
    pub fn view(&self) -> SelectView<'_> {
        let list = self.visible_options();
        let selected = self.selected_option();
        let phase = self.phase();

        let rows: Vec<RowView<'_>> = list
            .iter()
            .enumerate()
            .map(|(index, row)| {
                let is_selected = row
                    .value()
                    .is_some_and(|value| value == self.state.selected_value);
                let disabled = row.is_disabled();
                RowView {
                    index,
                    row: row.clone(),
                    selected: is_selected,
                    disabled,
                    highlighted: self.state.highlighted == Some(index),
                    aria: OptionAria {
                        id: aria::option_id(&self.id, index),
                        selected: is_selected,
                        disabled,
                    },
                }
            })
            .collect();

        let empty_message = rows
            .is_empty()
            .then_some(self.config.empty_list_message.as_str());

        SelectView {
            phase,
            disabled: self.config.disabled,
            selected,
            value: &self.state.selected_value,
            name: self.config.name.as_deref(),
            display_text: &self.state.display_text,
            placeholder: match phase {
                SelectPhase::Filtering => selected.map(SelectOption::display_label),
                _ => None,
            },
            rows,
            empty_message,
            focus_target: self.focus_target(),
            tab_index: self.config.tab_index,
            combobox: self.aria(),
            listbox: ListboxAria {
                id: aria::listbox_id(&self.id),
            },
        }
    }
}
