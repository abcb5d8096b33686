use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::{GestureEvent, GestureKind};

/// A subscriber callback.
///
/// Callbacks are invoked synchronously on the thread that feeds the normalizer, in the order
/// they were registered for the kind.
pub type GestureCallback = Arc<dyn Fn(&GestureEvent) + Send + Sync>;

/// Token returned by [`EventBus::on`], used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HandlerId(u64);

/// A minimal synchronous pub/sub bus keyed by [`GestureKind`].
#[derive(Clone, Default)]
pub struct EventBus {
    handlers: [Vec<(HandlerId, GestureCallback)>; GestureKind::COUNT],
    next_id: u64,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `callback` for `kind` and returns its removal token.
    pub fn on(&mut self, kind: GestureKind, callback: GestureCallback) -> HandlerId {
        let id = HandlerId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.handlers[kind.index()].push((id, callback));
        id
    }

    /// Removes a previously registered callback.
    ///
    /// Returns false when `id` is not registered for `kind` (already removed, or registered
    /// under a different kind).
    pub fn off(&mut self, kind: GestureKind, id: HandlerId) -> bool {
        let list = &mut self.handlers[kind.index()];
        let before = list.len();
        list.retain(|(hid, _)| *hid != id);
        list.len() != before
    }

    /// Delivers `event` to every callback registered for its kind, in insertion order.
    pub fn emit(&self, event: &GestureEvent) {
        for (_, callback) in &self.handlers[event.kind().index()] {
            callback(event);
        }
    }

    pub fn handler_count(&self, kind: GestureKind) -> usize {
        self.handlers[kind.index()].len()
    }

    /// Drops every registered callback.
    pub fn clear(&mut self) {
        for list in &mut self.handlers {
            list.clear();
        }
    }
}

impl core::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let total: usize = self.handlers.iter().map(Vec::len).sum();
        f.debug_struct("EventBus")
            .field("handlers", &total)
            .finish_non_exhaustive()
    }
}
