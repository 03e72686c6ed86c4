//! Select option data model

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SelectError};

/// An option supplied by the host
///
/// Options are identified by `value`. Values are expected to be unique
/// within one option sequence; lookups by value return the first match.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    /// The value reported in change notifications when selected
    pub value: String,
    /// Display text (falls back to `value` when absent)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Opaque decoration rendered before the label (icon key, emoji, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    /// Whether this option can be highlighted or selected
    #[serde(default)]
    pub disabled: bool,
}

impl SelectOption {
    /// Create a new option with value and label
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: Some(label.into()),
            prefix: None,
            disabled: false,
        }
    }

    /// Create an option whose display text is its value
    pub fn unlabeled(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Default::default()
        }
    }

    /// Set the prefix decoration
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Mark this option as disabled
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Text shown for this option
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.value)
    }
}

/// Find the first option with the given value
pub fn find_option<'a>(options: &'a [SelectOption], value: &str) -> Option<&'a SelectOption> {
    options.iter().find(|o| o.value == value)
}

/// Check that no two options share a value
pub fn validate_options(options: &[SelectOption]) -> Result<()> {
    let mut seen = FxHashSet::default();
    for option in options {
        if !seen.insert(option.value.as_str()) {
            return Err(SelectError::DuplicateValue(option.value.clone()));
        }
    }
    Ok(())
}
