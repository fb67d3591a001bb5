//! Signal/slot notifications for chrome state changes.
//!
//! Chrome handling is single-threaded, so slots are always invoked directly
//! on the emitting thread, in connection order.
//!
//! # Example
//!
//! ```
//! use horizon_chrome_core::Signal;
//!
//! let title_changed = Signal::<String>::new();
//! let id = title_changed.connect(|title| println!("title: {title}"));
//! title_changed.emit("Widget".to_string());
//! title_changed.disconnect(id);
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;
use slotmap::{SlotMap, new_key_type};

use crate::logging::targets;

new_key_type! {
    /// A unique identifier for a signal-slot connection.
    ///
    /// Use this ID to disconnect a specific connection via [`Signal::disconnect`].
    pub struct ConnectionId;
}

type Slot<Args> = Arc<dyn Fn(&Args) + Send + Sync>;

/// A type-safe signal that can have multiple connected slots.
pub struct Signal<Args> {
    connections: Mutex<SlotMap<ConnectionId, Slot<Args>>>,
    blocked: AtomicBool,
}

static_assertions::assert_impl_all!(Signal<()>: Send, Sync);

impl<Args> Default for Signal<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args> Signal<Args> {
    /// Create a new signal with no connections.
    pub fn new() -> Self {
        Self {
            connections: Mutex::new(SlotMap::with_key()),
            blocked: AtomicBool::new(false),
        }
    }

    /// Connect a slot (closure) to this signal.
    pub fn connect<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        self.connections.lock().insert(Arc::new(slot))
    }

    /// Disconnect a specific slot by its connection ID.
    ///
    /// Returns `true` if the connection was found and removed.
    pub fn disconnect(&self, id: ConnectionId) -> bool {
        self.connections.lock().remove(id).is_some()
    }

    /// Disconnect all slots from this signal.
    pub fn disconnect_all(&self) {
        self.connections.lock().clear();
    }

    /// Get the number of connected slots.
    pub fn connection_count(&self) -> usize {
        self.connections.lock().len()
    }

    /// Block signal emission temporarily.
    ///
    /// While blocked, calls to `emit()` do nothing.
    pub fn set_blocked(&self, blocked: bool) {
        self.blocked.store(blocked, Ordering::SeqCst);
    }

    /// Check if signal emission is currently blocked.
    pub fn is_blocked(&self) -> bool {
        self.blocked.load(Ordering::SeqCst)
    }

    /// Emit the signal, invoking all connected slots.
    ///
    /// The connection list is snapshotted first, so slots may connect or
    /// disconnect on this same signal without deadlocking.
    pub fn emit(&self, args: Args) {
        if self.is_blocked() {
            tracing::trace!(target: targets::SIGNAL, "signal blocked, skipping emit");
            return;
        }

        let slots: Vec<Slot<Args>> = self.connections.lock().values().cloned().collect();
        tracing::trace!(target: targets::SIGNAL, connection_count = slots.len(), "emitting signal");
        for slot in slots {
            slot(&args);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn test_emit_reaches_all_slots() {
        let signal = Signal::<u32>::new();
        let total = Arc::new(AtomicUsize::new(0));

        for _ in 0..3 {
            let total = Arc::clone(&total);
            signal.connect(move |n| {
                total.fetch_add(*n as usize, Ordering::SeqCst);
            });
        }

        signal.emit(2);
        assert_eq!(total.load(Ordering::SeqCst), 6);
    }

    #[test]
    fn test_disconnect() {
        let signal = Signal::<()>::new();
        let id = signal.connect(|_| {});
        assert_eq!(signal.connection_count(), 1);
        assert!(signal.disconnect(id));
        assert!(!signal.disconnect(id));
        assert_eq!(signal.connection_count(), 0);
    }

    #[test]
    fn test_blocked_signal_does_not_emit() {
        let signal = Signal::<()>::new();
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);
        signal.connect(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        signal.set_blocked(true);
        signal.emit(());
        assert_eq!(hits.load(Ordering::SeqCst), 0);

        signal.set_blocked(false);
        signal.emit(());
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_slot_can_connect_during_emit() {
        let signal = Arc::new(Signal::<()>::new());
        let inner = Arc::clone(&signal);
        signal.connect(move |_| {
            inner.connect(|_| {});
        });
        signal.emit(());
        assert_eq!(signal.connection_count(), 2);
    }
}
