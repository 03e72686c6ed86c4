//! Visible option list and highlight navigation
//!
//! [`OptionList`] is the indexed view over the rows produced by the filter.
//! Highlight positions are `Option<usize>` indices into this list, with
//! `None` meaning nothing is highlighted. Navigation skips disabled rows and
//! falls off either end to `None`.

use super::filter::{FilterResult, VisibleOption};

/// Highlight movement direction
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards the end of the list (ArrowDown)
    Next,
    /// Towards the start of the list (ArrowUp)
    Previous,
}

impl Direction {
    fn delta(self) -> isize {
        match self {
            Direction::Next => 1,
            Direction::Previous => -1,
        }
    }
}

/// Indexed, navigable view over the visible rows
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OptionList<'a> {
    rows: Vec<VisibleOption<'a>>,
}

impl<'a> OptionList<'a> {
    /// Wrap already-filtered rows
    pub fn new(rows: Vec<VisibleOption<'a>>) -> Self {
        Self { rows }
    }

    /// Number of visible rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if no rows are visible
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get the row at `index`
    pub fn get(&self, index: usize) -> Option<&VisibleOption<'a>> {
        self.rows.get(index)
    }

    /// All rows in display order
    pub fn rows(&self) -> &[VisibleOption<'a>] {
        &self.rows
    }

    /// Iterate rows in display order
    pub fn iter(&self) -> impl Iterator<Item = &VisibleOption<'a>> {
        self.rows.iter()
    }

    /// Whether the create row is present
    pub fn has_create_row(&self) -> bool {
        self.rows.iter().any(VisibleOption::is_create)
    }

    /// Whether `index` exists and can hold the highlight
    pub fn is_navigable(&self, index: usize) -> bool {
        self.rows.get(index).is_some_and(|row| !row.is_disabled())
    }

    /// Move the highlight one eligible row in `direction`
    ///
    /// Disabled rows are skipped. Stepping past either end lands on `None`;
    /// stepping from `None` starts before the first row.
    pub fn step(&self, from: Option<usize>, direction: Direction) -> Option<usize> {
        let mut candidate = from.map_or(-1, |index| index as isize);
        loop {
            candidate += direction.delta();
            if candidate < 0 {
                return None;
            }
            let index = candidate as usize;
            match self.rows.get(index) {
                None => return None,
                Some(row) if !row.is_disabled() => return Some(index),
                Some(_) => continue,
            }
        }
    }

    /// Keep `highlight` only if it still references a navigable row
    pub fn revalidate(&self, highlight: Option<usize>) -> Option<usize> {
        highlight.filter(|&index| self.is_navigable(index))
    }

    /// Text for the filter input while `highlight` is active
    ///
    /// A highlighted real option shows its label; the create row and no
    /// highlight show the raw query.
    pub fn display_text(&self, highlight: Option<usize>, query: &str) -> String {
        match highlight.and_then(|index| self.rows.get(index)) {
            Some(VisibleOption::Option(option)) => option.display_label().to_string(),
            _ => query.to_string(),
        }
    }
}

impl<'a> From<FilterResult<'a>> for OptionList<'a> {
    fn from(result: FilterResult<'a>) -> Self {
        Self::new(result.rows)
    }
}
