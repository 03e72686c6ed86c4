//! Thorin Platform Layer
//!
//! Platform-agnostic types shared by Thorin components:
//!
//! - [`Key`], [`KeyboardEvent`], [`Modifiers`] - keyboard input delivered by the host
//! - [`FocusEvent`] - focus changes forwarded to host callbacks
//! - [`ControlId`] - identity of a mounted control
//! - [`DocumentListeners`] - document-level click listeners scoped by [`ListenerGuard`]
//!
//! Components never touch the DOM. The host translates its native events
//! into these types and feeds them to component controllers.

mod control;
mod document;
mod input;

// Re-export all public types
pub use control::ControlId;
pub use document::{DocumentClick, DocumentListeners, ListenerGuard, ListenerId};
pub use input::{FocusEvent, Key, KeyState, KeyboardEvent, Modifiers, MouseButton};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::control::ControlId;
    pub use crate::document::{DocumentClick, DocumentListeners, ListenerGuard};
    pub use crate::input::{FocusEvent, Key, KeyState, KeyboardEvent, Modifiers, MouseButton};
}
