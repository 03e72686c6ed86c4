//! Render snapshot of a select
//!
//! [`SelectView`] is everything a rendering layer needs for one frame. It
//! borrows from the controller and is rebuilt after every event.

use super::aria::{ComboboxAria, ListboxAria, OptionAria};
use super::controller::{FocusTarget, SelectPhase};
use super::filter::VisibleOption;
use super::option::SelectOption;

/// One visible row with its presentation flags
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowView<'a> {
    /// Index in the visible list
    pub index: usize,
    /// The row itself
    pub row: VisibleOption<'a>,
    /// Row is the committed selection
    pub selected: bool,
    /// Row cannot be highlighted or selected
    pub disabled: bool,
    /// Row holds the keyboard/pointer highlight
    pub highlighted: bool,
    /// Accessibility attributes for the row
    pub aria: OptionAria,
}

impl RowView<'_> {
    /// Display text for the row
    pub fn label(&self) -> &str {
        self.row.label()
    }

    /// Prefix decoration of the underlying option
    pub fn prefix(&self) -> Option<&str> {
        self.row.as_option().and_then(|o| o.prefix.as_deref())
    }
}

/// Snapshot of a select for rendering
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectView<'a> {
    /// Interaction phase
    pub phase: SelectPhase,
    /// Whether the whole control is disabled
    pub disabled: bool,
    /// The committed option (first match for the selected value)
    pub selected: Option<&'a SelectOption>,
    /// Value of the hidden form input
    pub value: &'a str,
    /// Name of the hidden form input
    pub name: Option<&'a str>,
    /// Text of the filter input (only shown while filtering)
    pub display_text: &'a str,
    /// Placeholder of the filter input: the selected option's label
    pub placeholder: Option<&'a str>,
    /// Visible rows
    pub rows: Vec<RowView<'a>>,
    /// Shown instead of rows when none are visible
    pub empty_message: Option<&'a str>,
    /// Where focus should be placed
    pub focus_target: FocusTarget,
    /// Tab index of the container
    pub tab_index: i32,
    /// Combobox container attributes
    pub combobox: ComboboxAria,
    /// Listbox popup attributes
    pub listbox: ListboxAria,
}

impl SelectView<'_> {
    /// Whether the listbox is shown
    pub fn is_open(&self) -> bool {
        self.phase != SelectPhase::Closed
    }

    /// Whether the filter input replaces the selected-option display
    pub fn shows_filter_input(&self) -> bool {
        self.phase == SelectPhase::Filtering
    }

    /// The highlighted row, if any
    pub fn highlighted_row(&self) -> Option<&RowView<'_>> {
        self.rows.iter().find(|row| row.highlighted)
    }
}
