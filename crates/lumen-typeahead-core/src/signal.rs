//! Signal/slot system for Lumen Typeahead.
//!
//! This module provides a type-safe signal/slot mechanism for notifying
//! collaborators about field state changes. Signals are emitted by the field
//! when its state changes, and connected slots (callbacks) are invoked in
//! response.
//!
//! Unlike a general-purpose GUI event system, the field behavior runs
//! entirely on one thread in response to host callbacks, so every connection
//! is invoked directly on the emitting call stack. There is no queued or
//! cross-thread dispatch.
//!
//! # Example
//!
//! ```
//! use lumen_typeahead_core::Signal;
//!
//! // Create a signal that passes the new text
//! let text_changed = Signal::<String>::new();
//!
//! // Connect a slot (closure)
//! let conn_id = text_changed.connect(|text| {
//!     println!("Text changed to: {}", text);
//! });
//!
//! // Emit the signal
//! text_changed.emit("iPhone".to_string());
//!
//! // Disconnect when done
//! text_changed.disconnect(conn_id);
//! ```

use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;
use slotmap::{SlotMap, new_key_type};

new_key_type! {
    /// A unique identifier for a signal-slot connection.
    ///
    /// Use this ID to disconnect a specific connection via
    /// [`Signal::disconnect`]. The ID remains valid until the connection is
    /// explicitly disconnected or the signal is dropped.
    pub struct ConnectionId;
}

/// Internal storage for a single connection.
struct Connection<Args> {
    /// The slot function to invoke.
    slot: Box<dyn Fn(&Args) + Send + Sync>,
}

/// A type-safe signal that can have multiple connected slots.
///
/// When a signal is emitted, all connected slots are invoked with a reference
/// to the provided arguments, in place, on the emitting call stack.
///
/// # Type Parameter
///
/// - `Args`: The argument type passed to connected slots. Use `()` for
///   signals with no arguments.
///
/// # Related Types
///
/// - [`ConnectionId`] - Returned by [`connect`](Self::connect), used to disconnect
/// - [`ConnectionGuard`] - RAII-style connection that auto-disconnects on drop
pub struct Signal<Args> {
    /// All active connections.
    connections: Mutex<SlotMap<ConnectionId, Connection<Args>>>,
    /// Whether signal emission is temporarily blocked.
    blocked: AtomicBool,
}

impl<Args: 'static> Default for Signal<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args: 'static> Signal<Args> {
    /// Create a new signal with no connections.
    pub fn new() -> Self {
        Self {
            connections: Mutex::new(SlotMap::with_key()),
            blocked: AtomicBool::new(false),
        }
    }

    /// Connect a slot (closure) to this signal.
    ///
    /// Returns a `ConnectionId` that can be used to disconnect the slot later.
    pub fn connect<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        self.connections.lock().insert(Connection {
            slot: Box::new(slot),
        })
    }

    /// Connect a slot with automatic disconnection when the guard is dropped.
    ///
    /// The guard borrows the signal, so it cannot outlive it.
    ///
    /// # Example
    ///
    /// ```
    /// use lumen_typeahead_core::Signal;
    /// use std::sync::atomic::{AtomicI32, Ordering};
    ///
    /// let signal = Signal::<i32>::new();
    /// static COUNTER: AtomicI32 = AtomicI32::new(0);
    /// {
    ///     let _guard = signal.connect_scoped(|&n| {
    ///         COUNTER.fetch_add(n, Ordering::SeqCst);
    ///     });
    ///     signal.emit(42); // COUNTER = 42
    /// }
    /// signal.emit(43); // Nothing happens - connection was dropped
    /// assert_eq!(COUNTER.load(Ordering::SeqCst), 42);
    /// ```
    pub fn connect_scoped<F>(&self, slot: F) -> ConnectionGuard<'_, Args>
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        let id = self.connect(slot);
        ConnectionGuard { signal: self, id }
    }

    /// Disconnect a specific slot by its connection ID.
    ///
    /// Returns `true` if the connection was found and removed, `false` otherwise.
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
    /// While blocked, calls to `emit()` do nothing. Useful during
    /// initialization or batch updates to prevent cascading notifications.
    pub fn set_blocked(&self, blocked: bool) {
        self.blocked.store(blocked, Ordering::SeqCst);
    }

    /// Check if signal emission is currently blocked.
    pub fn is_blocked(&self) -> bool {
        self.blocked.load(Ordering::SeqCst)
    }

    /// Emit the signal, invoking all connected slots.
    ///
    /// If the signal is blocked, this does nothing. Slots receive a shared
    /// reference to `args`; no cloning takes place.
    pub fn emit(&self, args: Args) {
        if self.is_blocked() {
            tracing::trace!(target: "lumen_typeahead_core::signal", "signal blocked, skipping emit");
            return;
        }

        let connections = self.connections.lock();
        tracing::trace!(
            target: "lumen_typeahead_core::signal",
            connection_count = connections.len(),
            "emitting signal"
        );

        for (_, conn) in connections.iter() {
            (conn.slot)(&args);
        }
    }
}

static_assertions::assert_impl_all!(Signal<String>: Send, Sync);

/// A connection guard that automatically disconnects when dropped.
///
/// Created via [`Signal::connect_scoped`]. The guard borrows the signal it
/// was created from, guaranteeing the connection never outlives it.
pub struct ConnectionGuard<'a, Args: 'static> {
    signal: &'a Signal<Args>,
    id: ConnectionId,
}

impl<Args: 'static> ConnectionGuard<'_, Args> {
    /// The ID of the guarded connection.
    pub fn id(&self) -> ConnectionId {
        self.id
    }
}

impl<Args: 'static> Drop for ConnectionGuard<'_, Args> {
    fn drop(&mut self) {
        self.signal.disconnect(self.id);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicI32, AtomicUsize, Ordering};

    use super::*;

    #[test]
    fn test_connect_and_emit() {
        let signal = Signal::<i32>::new();
        let sum = Arc::new(AtomicI32::new(0));

        let sum_clone = sum.clone();
        signal.connect(move |&n| {
            sum_clone.fetch_add(n, Ordering::SeqCst);
        });

        signal.emit(3);
        signal.emit(4);
        assert_eq!(sum.load(Ordering::SeqCst), 7);
    }

    #[test]
    fn test_multiple_slots() {
        let signal = Signal::<()>::new();
        let calls = Arc::new(AtomicUsize::new(0));

        for _ in 0..3 {
            let calls_clone = calls.clone();
            signal.connect(move |_| {
                calls_clone.fetch_add(1, Ordering::SeqCst);
            });
        }

        signal.emit(());
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn test_disconnect() {
        let signal = Signal::<()>::new();
        let calls = Arc::new(AtomicUsize::new(0));

        let calls_clone = calls.clone();
        let id = signal.connect(move |_| {
            calls_clone.fetch_add(1, Ordering::SeqCst);
        });

        signal.emit(());
        assert!(signal.disconnect(id));
        signal.emit(());

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        // Disconnecting again is a no-op
        assert!(!signal.disconnect(id));
    }

    #[test]
    fn test_blocked_signal() {
        let signal = Signal::<()>::new();
        let calls = Arc::new(AtomicUsize::new(0));

        let calls_clone = calls.clone();
        signal.connect(move |_| {
            calls_clone.fetch_add(1, Ordering::SeqCst);
        });

        signal.set_blocked(true);
        assert!(signal.is_blocked());
        signal.emit(());
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        signal.set_blocked(false);
        signal.emit(());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_connection_guard_disconnects_on_drop() {
        let signal = Signal::<()>::new();
        let calls = Arc::new(AtomicUsize::new(0));

        {
            let calls_clone = calls.clone();
            let _guard = signal.connect_scoped(move |_| {
                calls_clone.fetch_add(1, Ordering::SeqCst);
            });
            assert_eq!(signal.connection_count(), 1);
            signal.emit(());
        }

        assert_eq!(signal.connection_count(), 0);
        signal.emit(());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_disconnect_all() {
        let signal = Signal::<i32>::new();
        signal.connect(|_| {});
        signal.connect(|_| {});
        assert_eq!(signal.connection_count(), 2);

        signal.disconnect_all();
        assert_eq!(signal.connection_count(), 0);
    }
}
