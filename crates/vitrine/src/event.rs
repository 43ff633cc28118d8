//! Event messages delivered to page modules.
//!
//! The host delivers events one at a time, synchronously; a module is done
//! reacting before the next event is dispatched. Each event kind is its own
//! message type rather than a variant of a catch-all enum, so new kinds can
//! arrive without touching existing handlers.

use maquette::NodeId;

/// A press on a single element.
///
/// Routed through [`Registry::dispatch_click`](crate::module::Registry::dispatch_click);
/// each module decides for itself whether the target concerns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickMsg {
    /// The element that was pressed.
    pub target: NodeId,
}

impl ClickMsg {
    /// Creates a click on `target`.
    #[must_use]
    pub fn new(target: NodeId) -> Self {
        Self { target }
    }
}
