//! Headless components
//!
//! Each component follows a consistent pattern:
//! - A controller owning interaction state (e.g., `SelectController`)
//! - A serializable configuration (e.g., `SelectConfig`)
//! - A borrowed render snapshot (e.g., `SelectView`)

pub mod select;

pub use select::{SelectConfig, SelectController, SelectOption, SelectView};
