//! Accessibility attributes for the select
//!
//! The rendering layer must apply these verbatim: the container is a
//! `combobox` owning a `listbox` popup whose rows are `option`s.

use thorin_platform::ControlId;

/// Id of the combobox container for a control
pub fn combobox_id(id: &ControlId) -> String {
    format!("combo-{}", id)
}

/// Id of the listbox popup for a control
pub fn listbox_id(id: &ControlId) -> String {
    format!("listbox-{}", id)
}

/// Id of the row at `index` for a control
pub fn option_id(id: &ControlId, index: usize) -> String {
    format!("option-{}-{}", id, index)
}

/// Attributes for the combobox container
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComboboxAria {
    /// Element id
    pub id: String,
    /// Id of the listbox this combobox controls
    pub controls: String,
    /// Whether the listbox is shown
    pub expanded: bool,
    /// Whether the field has a validation error
    pub invalid: bool,
    /// Id of the highlighted row, if any
    pub active_descendant: Option<String>,
}

impl ComboboxAria {
    /// ARIA role
    pub const ROLE: &'static str = "combobox";
    /// Popup kind announced by `aria-haspopup`
    pub const HAS_POPUP: &'static str = "listbox";

    /// Attribute name/value pairs in render order
    ///
    /// `aria-invalid` and `aria-activedescendant` are omitted when not set.
    pub fn attributes(&self) -> Vec<(&'static str, String)> {
        let mut attrs = vec![
            ("id", self.id.clone()),
            ("role", Self::ROLE.to_string()),
            ("aria-controls", self.controls.clone()),
            ("aria-expanded", self.expanded.to_string()),
            ("aria-haspopup", Self::HAS_POPUP.to_string()),
        ];
        if self.invalid {
            attrs.push(("aria-invalid", "true".to_string()));
        }
        if let Some(ref descendant) = self.active_descendant {
            attrs.push(("aria-activedescendant", descendant.clone()));
        }
        attrs
    }
}

/// Attributes for the listbox popup
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListboxAria {
    /// Element id
    pub id: String,
}

impl ListboxAria {
    /// ARIA role
    pub const ROLE: &'static str = "listbox";
}

/// Attributes for one row of the listbox
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionAria {
    /// Element id
    pub id: String,
    /// Whether this row is the committed selection
    pub selected: bool,
    /// Whether this row is disabled
    pub disabled: bool,
}

impl OptionAria {
    /// ARIA role
    pub const ROLE: &'static str = "option";

    /// Attribute name/value pairs in render order
    pub fn attributes(&self) -> Vec<(&'static str, String)> {
        vec![
            ("id", self.id.clone()),
            ("role", Self::ROLE.to_string()),
            ("aria-selected", self.selected.to_string()),
            ("aria-disabled", self.disabled.to_string()),
        ]
    }
}
