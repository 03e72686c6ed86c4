//! Select configuration
//!
//! Hosts configure a select either through the builder setters on
//! [`SelectController`](super::SelectController) or from a serialized
//! definition. A definition is the configuration plus its options:
//!
//! ```toml
//! name = "fruit"
//! value = "a"
//! createable = true
//! createable_prefix = "New "
//!
//! [[options]]
//! value = "a"
//! label = "Apple"
//!
//! [[options]]
//! value = "b"
//! label = "Banana"
//! disabled = true
//! ```

use serde::{Deserialize, Serialize};

use super::filter::{FilterMode, DEFAULT_CREATE_PREFIX};
use super::option::{validate_options, SelectOption};
use crate::error::Result;

/// Behavior configuration for a select control
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct SelectConfig {
    /// Host-supplied id (synthesized when absent)
    #[serde(default)]
    pub id: Option<String>,
    /// Form field name carried in change notifications
    #[serde(default)]
    pub name: Option<String>,
    /// Externally controlled value applied on mount
    #[serde(default)]
    pub value: Option<String>,
    /// Prevents all interaction
    #[serde(default)]
    pub disabled: bool,
    /// Typed text filters the options
    #[serde(default)]
    pub autocomplete: bool,
    /// Typed text filters the options and can create new ones
    #[serde(default)]
    pub createable: bool,
    /// Text placed before the quoted query in the create row
    #[serde(default = "default_createable_prefix")]
    pub createable_prefix: String,
    /// Message shown when no rows are visible
    #[serde(default = "default_empty_list_message")]
    pub empty_list_message: String,
    /// Validation error; marks the control invalid when present
    #[serde(default)]
    pub error: Option<String>,
    /// Tab index of the container
    #[serde(default = "default_tab_index")]
    pub tab_index: i32,
}

fn default_createable_prefix() -> String {
    DEFAULT_CREATE_PREFIX.to_string()
}

fn default_empty_list_message() -> String {
    "No results".to_string()
}

fn default_tab_index() -> i32 {
    -1
}

impl Default for SelectConfig {
    fn default() -> Self {
        Self {
            id: None,
            name: None,
            value: None,
            disabled: false,
            autocomplete: false,
            createable: false,
            createable_prefix: default_createable_prefix(),
            empty_list_message: default_empty_list_message(),
            error: None,
            tab_index: default_tab_index(),
        }
    }
}

impl SelectConfig {
    /// Whether typed text narrows the option list
    pub fn is_filtering(&self) -> bool {
        self.autocomplete || self.createable
    }

    /// Filter mode for the current query
    ///
    /// The create row is only offered once there is query text to create.
    pub fn filter_mode(&self, query: &str) -> FilterMode<'_> {
        if self.createable && !query.is_empty() {
            FilterMode::createable(&self.createable_prefix)
        } else if self.is_filtering() {
            FilterMode::autocomplete()
        } else {
            FilterMode::browsing()
        }
    }
}

/// A complete select: configuration plus options
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct SelectDefinition {
    /// Behavior configuration
    #[serde(flatten)]
    pub config: SelectConfig,
    /// Options in display order
    #[serde(default)]
    pub options: Vec<SelectOption>,
}

impl SelectDefinition {
    /// Parse and validate a TOML definition
    pub fn from_toml(source: &str) -> Result<Self> {
        let definition: Self = toml::from_str(source)?;
        definition.validate()?;
        Ok(definition)
    }

    /// Parse and validate a JSON definition
    pub fn from_json(source: &str) -> Result<Self> {
        let definition: Self = serde_json::from_str(source)?;
        definition.validate()?;
        Ok(definition)
    }

    /// Check the options for duplicate values
    pub fn validate(&self) -> Result<()> {
        validate_options(&self.options)
    }
}
