//! Document-level listener registry
//!
//! Controls that need to observe clicks anywhere in the document (dropdowns
//! closing on click-away) subscribe here while they need it. A subscription
//! is a [`ListenerGuard`]; dropping the guard removes the listener, so a
//! control that holds its guard only while open can never leak one.
//!
//! The registry does not call back into controls. The host dispatches each
//! document click and forwards it to the owners returned:
//!
//! ```ignore
//! let listeners = DocumentListeners::new();
//! let mut select = SelectController::new(config, options, &listeners)?;
//!
//! // Later, in the host's click handler:
//! for owner in listeners.dispatch_click(&DocumentClick::on(target)) {
//!     if owner == *select.id() {
//!         select.outside_click();
//!     }
//! }
//! ```

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use indexmap::IndexMap;
use smallvec::SmallVec;

use crate::control::ControlId;
use crate::input::MouseButton;

/// Raw id of a registered listener
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

impl ListenerId {
    /// Get the raw ID
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// A click somewhere in the document
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentClick {
    /// The control the pointer landed in, if any (host hit-test result)
    pub target: Option<ControlId>,
    /// Which button was clicked
    pub button: MouseButton,
}

impl DocumentClick {
    /// Primary-button click on a control
    pub fn on(target: ControlId) -> Self {
        Self {
            target: Some(target),
            button: MouseButton::Left,
        }
    }

    /// Primary-button click on empty document space
    pub fn background() -> Self {
        Self {
            target: None,
            button: MouseButton::Left,
        }
    }
}

#[derive(Default)]
struct ListenerTable {
    next_id: u64,
    listeners: IndexMap<ListenerId, ControlId>,
}

/// Handle to the document's click listener table
///
/// Cloning the handle shares the same table. The table lives on the UI
/// thread only: the handle is neither `Send` nor `Sync`, and neither is
/// any control holding one.
#[derive(Clone, Default)]
pub struct DocumentListeners {
    table: Rc<RefCell<ListenerTable>>,
}

impl DocumentListeners {
    /// Create an empty listener table
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a click listener on behalf of `owner`
    ///
    /// The listener stays registered until the returned guard is dropped.
    pub fn subscribe(&self, owner: ControlId) -> ListenerGuard {
        let mut table = self.table.borrow_mut();
        let id = ListenerId(table.next_id);
        table.next_id += 1;
        tracing::trace!(control = %owner, listener = id.0, "document listener registered");
        table.listeners.insert(id, owner);

        ListenerGuard {
            id,
            table: Rc::downgrade(&self.table),
        }
    }

    /// Dispatch a click and return the owners whose listener fired
    ///
    /// A listener fires for every primary-button click whose target is not
    /// its own control. Owners are returned in registration order.
    pub fn dispatch_click(&self, click: &DocumentClick) -> SmallVec<[ControlId; 4]> {
        if click.button != MouseButton::Left {
            return SmallVec::new();
        }

        let table = self.table.borrow();
        table
            .listeners
            .values()
            .filter(|owner| click.target.as_ref() != Some(*owner))
            .cloned()
            .collect()
    }

    /// Number of registered listeners
    pub fn len(&self) -> usize {
        self.table.borrow().listeners.len()
    }

    /// Check if no listeners are registered
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check if `owner` has a registered listener
    pub fn is_subscribed(&self, owner: &ControlId) -> bool {
        self.table
            .borrow()
            .listeners
            .values()
            .any(|registered| registered == owner)
    }
}

impl std::fmt::Debug for DocumentListeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentListeners")
            .field("listeners", &self.len())
            .finish()
    }
}

/// Scoped document listener registration
///
/// Dropping the guard deregisters the listener. If the table itself has
/// already been dropped the guard does nothing.
#[derive(Debug)]
pub struct ListenerGuard {
    id: ListenerId,
    table: Weak<RefCell<ListenerTable>>,
}

impl ListenerGuard {
    /// Id of the guarded listener
    pub fn id(&self) -> ListenerId {
        self.id
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        if let Some(table) = self.table.upgrade() {
            if let Some(owner) = table.borrow_mut().listeners.shift_remove(&self.id) {
                tracing::trace!(control = %owner, listener = self.id.0, "document listener released");
            }
        }
    }
}
