//! # Thorin Component Library (thorin_cn)
//!
//! Accessible interaction models for the Thorin design system.
//!
//! ## Philosophy
//!
//! Styling and theme tokens belong to the rendering layer. `thorin_cn` owns
//! the behavior: state machines driven by input events from
//! `thorin_platform`, and render snapshots that carry every flag and ARIA
//! attribute a renderer needs.
//!
//! ## Example
//!
//! ```ignore
//! use thorin_cn::prelude::*;
//! use thorin_platform::{DocumentListeners, Key, KeyboardEvent};
//!
//! let listeners = DocumentListeners::new();
//! let mut select = SelectController::new(
//!     SelectConfig { autocomplete: true, ..Default::default() },
//!     vec![SelectOption::new("a", "Apple"), SelectOption::new("b", "Banana")],
//!     &listeners,
//! )?;
//!
//! select.key_down(&KeyboardEvent::pressed(Key::Down)); // opens
//! select.set_query("ban");
//! select.key_down(&KeyboardEvent::pressed(Key::Down)); // highlights Banana
//! select.key_down(&KeyboardEvent::pressed(Key::Enter)); // commits "b"
//! ```
//!
//! ## Components
//!
//! - **Select** - dropdown, autocomplete, and createable combobox

pub mod components;
pub mod error;

pub use components::*;
pub use error::{Result, SelectError};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::components::select::{
        ChangeEvent, Direction, FocusTarget, KeyOutcome, SelectConfig, SelectController,
        SelectDefinition, SelectOption, SelectPhase, SelectView, VisibleOption,
    };
    pub use crate::error::{Result, SelectError};
}
