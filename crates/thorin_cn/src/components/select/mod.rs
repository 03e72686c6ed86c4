//! Select component: dropdown, autocomplete, and createable combobox
//!
//! The component is headless. Behavior lives in [`SelectController`];
//! rendering layers draw [`SelectView`] snapshots and feed input events back.
//!
//! - [`filter`] - reduces options to the visible rows for a query
//! - [`list`] - indexed view over visible rows and highlight navigation
//! - [`controller`] - the interaction state machine
//! - [`aria`] - accessibility attributes

pub mod aria;
pub mod config;
pub mod controller;
pub mod filter;
pub mod list;
pub mod option;
pub mod view;

pub use aria::{ComboboxAria, ListboxAria, OptionAria};
pub use config::{SelectConfig, SelectDefinition};
pub use controller::{
    ChangeCallback, ChangeEvent, CreateCallback, FocusCallback, FocusTarget, KeyOutcome,
    SelectController, SelectPhase, SelectState,
};
pub use filter::{filter_options, FilterMode, FilterResult, VisibleOption, DEFAULT_CREATE_PREFIX};
pub use list::{Direction, OptionList};
pub use option::{find_option, validate_options, SelectOption};
pub use view::{RowView, SelectView};
