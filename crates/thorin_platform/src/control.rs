//! Control identity
//!
//! Every mounted control has a [`ControlId`] that is unique within the
//! process. Hosts may supply their own id string; when they don't, one is
//! synthesized from a monotonic counter at mount time.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Next synthesized control id
static NEXT_CONTROL_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of a mounted control
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ControlId(String);

impl ControlId {
    /// Synthesize a fresh, process-unique id
    pub fn next() -> Self {
        let raw = NEXT_CONTROL_ID.fetch_add(1, Ordering::Relaxed);
        Self(raw.to_string())
    }

    /// Use a host-supplied id, or synthesize one when absent or empty
    pub fn from_host(id: Option<&str>) -> Self {
        match id {
            Some(id) if !id.is_empty() => Self(id.to_string()),
            _ => Self::next(),
        }
    }

    /// Get the id string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ControlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthesized_ids_are_unique() {
        let a = ControlId::next();
        let b = ControlId::next();
        assert_ne!(a, b);
    }

    #[test]
    fn test_host_id_is_kept() {
        assert_eq!(ControlId::from_host(Some("fruit")).as_str(), "fruit");
        assert_ne!(ControlId::from_host(Some("")).as_str(), "");
        assert_ne!(ControlId::from_host(None), ControlId::from_host(None));
    }
}
