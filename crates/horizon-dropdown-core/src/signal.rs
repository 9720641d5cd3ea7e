//! Signal/slot system for Horizon Dropdown.
//!
//! This module provides a type-safe, Qt-inspired signal/slot mechanism. A
//! widget emits a signal when its state changes and every connected slot
//! (callback) is invoked synchronously with the emitted value.
//!
//! # Key Types
//!
//! - [`Signal<Args>`] - The main signal type for emitting notifications
//! - [`ConnectionId`] - Unique identifier returned when connecting a slot
//! - [`ConnectionGuard`] - RAII guard that disconnects when dropped
//!
//! # Re-entrancy
//!
//! Slots are collected before they are invoked, so a slot may connect or
//! disconnect slots (including itself) on the signal that is currently
//! emitting. Changes take effect on the next emission.
//!
//! # Example
//!
//! ```
//! use horizon_dropdown_core::Signal;
//!
//! // Create a signal that passes a string argument
//! let text_changed = Signal::<String>::new();
//!
//! // Connect a slot (closure)
//! let conn_id = text_changed.connect(|text| {
//!     println!("Text changed to: {}", text);
//! });
//!
//! // Emit the signal
//! text_changed.emit("Hello, World!".to_string());
//!
//! // Disconnect when done
//! text_changed.disconnect(conn_id);
//! ```

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use slotmap::{new_key_type, SlotMap};

use crate::error::{SignalError, SignalResult};
use crate::logging::targets;

new_key_type! {
    /// A unique identifier for a signal-slot connection.
    ///
    /// Use this ID to disconnect a specific connection via [`Signal::disconnect`].
    /// The ID remains valid until the connection is explicitly disconnected or
    /// the signal is dropped.
    ///
    /// # Related
    ///
    /// - [`Signal::connect`] - Returns a `ConnectionId`
    /// - [`Signal::disconnect`] - Removes a connection by ID
    /// - [`ConnectionGuard`] - RAII alternative that auto-disconnects
    pub struct ConnectionId;
}

/// A connected slot. Arc-wrapped so emission can run without holding the table lock.
type Slot<Args> = Arc<dyn Fn(&Args) + Send + Sync>;

/// Shared connection table. Guards hold a weak reference to it.
type ConnectionTable<Args> = Mutex<SlotMap<ConnectionId, Slot<Args>>>;

/// A type-safe signal that can have multiple connected slots.
///
/// When a signal is emitted, all connected slots are invoked in connection
/// order with a reference to the emitted value.
///
/// # Type Parameter
///
/// - `Args`: The argument type passed to connected slots. Use `()` for signals
///   with no arguments, or a tuple like `(String, i32)` for multiple arguments.
///
/// # Related Types
///
/// - [`ConnectionId`] - Returned by [`connect`](Self::connect), used to disconnect
/// - [`ConnectionGuard`] - RAII-style connection that auto-disconnects on drop
pub struct Signal<Args> {
    /// All active connections.
    connections: Arc<ConnectionTable<Args>>,
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
            connections: Arc::new(Mutex::new(SlotMap::with_key())),
            blocked: AtomicBool::new(false),
        }
    }

    /// Connect a slot (closure) to this signal.
    ///
    /// Returns a `ConnectionId` that can be used to disconnect the slot later.
    ///
    /// # Example
    ///
    /// ```
    /// use horizon_dropdown_core::Signal;
    ///
    /// let signal = Signal::<String>::new();
    /// let id = signal.connect(|s| println!("Got: {}", s));
    /// signal.emit("Hello".to_string());
    /// ```
    pub fn connect<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        self.connections.lock().insert(Arc::new(slot))
    }

    /// Connect a slot with automatic disconnection when the guard is dropped.
    ///
    /// The guard only holds a weak reference to the signal's connection table,
    /// so it is safe to drop after the signal itself.
    pub fn connect_scoped<F>(&self, slot: F) -> ConnectionGuard<Args>
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        let id = self.connect(slot);
        ConnectionGuard {
            table: Arc::downgrade(&self.connections),
            id: Some(id),
        }
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

    /// Check whether a connection is still active.
    pub fn is_connected(&self, id: ConnectionId) -> bool {
        self.connections.lock().contains_key(id)
    }

    /// Block signal emission temporarily.
    ///
    /// While blocked, calls to `emit()` will do nothing. This is useful
    /// during initialization or batch updates to prevent cascading notifications.
    pub fn set_blocked(&self, blocked: bool) {
        self.blocked.store(blocked, Ordering::SeqCst);
    }

    /// Check if signal emission is currently blocked.
    pub fn is_blocked(&self) -> bool {
        self.blocked.load(Ordering::SeqCst)
    }

    /// Emit the signal, invoking all connected slots.
    ///
    /// If the signal is blocked, this does nothing. Slots run on the calling
    /// thread, in connection order, after the connection table lock has been
    /// released.
    #[tracing::instrument(skip_all, target = "horizon_dropdown_core::signal", level = "trace")]
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

impl<Args> fmt::Debug for Signal<Args> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("connections", &self.connections.lock().len())
            .field("blocked", &self.blocked.load(Ordering::SeqCst))
            .finish()
    }
}

/// A connection guard that automatically disconnects when dropped.
///
/// This is useful for RAII-style connection management, ensuring connections
/// are cleaned up when the receiver goes out of scope. Created via
/// [`Signal::connect_scoped`].
///
/// # Example
///
/// ```
/// use horizon_dropdown_core::Signal;
/// use std::sync::atomic::{AtomicI32, Ordering};
/// use std::sync::Arc;
///
/// let signal = Signal::<i32>::new();
/// let counter = Arc::new(AtomicI32::new(0));
/// {
///     let counter_clone = counter.clone();
///     let _guard = signal.connect_scoped(move |&n| {
///         counter_clone.fetch_add(n, Ordering::SeqCst);
///     });
///     signal.emit(42);  // counter = 42
/// }
/// signal.emit(43);  // Nothing happens - connection was dropped
/// assert_eq!(counter.load(Ordering::SeqCst), 42);
/// ```
pub struct ConnectionGuard<Args> {
    table: Weak<ConnectionTable<Args>>,
    id: Option<ConnectionId>,
}

impl<Args> ConnectionGuard<Args> {
    /// The id of the guarded connection, or `None` once released.
    pub fn id(&self) -> Option<ConnectionId> {
        self.id
    }

    /// Check whether the guarded connection is still attached to a live signal.
    pub fn is_connected(&self) -> bool {
        match (self.id, self.table.upgrade()) {
            (Some(id), Some(table)) => table.lock().contains_key(id),
            _ => false,
        }
    }

    /// Disconnect now and report what happened.
    ///
    /// Dropping the guard does the same thing silently.
    pub fn release(mut self) -> SignalResult<()> {
        self.disconnect()
    }

    fn disconnect(&mut self) -> SignalResult<()> {
        let id = self.id.take().ok_or(SignalError::InvalidConnection)?;
        let table = self.table.upgrade().ok_or(SignalError::SignalDropped)?;
        let removed = table.lock().remove(id);
        removed.map(|_| ()).ok_or(SignalError::InvalidConnection)
    }
}

impl<Args> Drop for ConnectionGuard<Args> {
    fn drop(&mut self) {
        if self.id.is_some() {
            let _ = self.disconnect();
        }
    }
}

impl<Args> fmt::Debug for ConnectionGuard<Args> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionGuard")
            .field("id", &self.id)
            .field("connected", &self.is_connected())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn test_signal_connect_emit() {
        let signal = Signal::<i32>::new();
        let received = Arc::new(Mutex::new(Vec::new()));

        let received_clone = received.clone();
        signal.connect(move |&value| {
            received_clone.lock().push(value);
        });

        signal.emit(42);
        signal.emit(100);

        assert_eq!(*received.lock(), vec![42, 100]);
    }

    #[test]
    fn test_signal_disconnect() {
        let signal = Signal::<i32>::new();
        let received = Arc::new(Mutex::new(Vec::new()));

        let received_clone = received.clone();
        let conn_id = signal.connect(move |&value| {
            received_clone.lock().push(value);
        });

        signal.emit(1);
        assert!(signal.disconnect(conn_id));
        assert!(!signal.disconnect(conn_id));
        signal.emit(2);

        assert_eq!(*received.lock(), vec![1]);
    }

    #[test]
    fn test_signal_blocked() {
        let signal = Signal::<i32>::new();
        let received = Arc::new(Mutex::new(Vec::new()));

        let received_clone = received.clone();
        signal.connect(move |&value| {
            received_clone.lock().push(value);
        });

        signal.emit(1);
        signal.set_blocked(true);
        signal.emit(2);
        signal.set_blocked(false);
        signal.emit(3);

        assert_eq!(*received.lock(), vec![1, 3]);
    }

    #[test]
    fn test_slots_run_in_connection_order() {
        let signal = Signal::<()>::new();
        let order = Arc::new(Mutex::new(Vec::new()));

        for i in 0..3 {
            let order = order.clone();
            signal.connect(move |_| order.lock().push(i));
        }

        signal.emit(());
        assert_eq!(*order.lock(), vec![0, 1, 2]);
    }

    #[test]
    fn test_disconnect_all() {
        let signal = Signal::<()>::new();
        for _ in 0..5 {
            signal.connect(|_| {});
        }

        assert_eq!(signal.connection_count(), 5);
        signal.disconnect_all();
        assert_eq!(signal.connection_count(), 0);
    }

    #[test]
    fn test_connection_guard() {
        let signal = Signal::<i32>::new();
        let received = Arc::new(Mutex::new(Vec::new()));

        {
            let received_clone = received.clone();
            let guard = signal.connect_scoped(move |&value| {
                received_clone.lock().push(value);
            });
            assert!(guard.is_connected());
            signal.emit(1);
        }

        signal.emit(2);
        assert_eq!(*received.lock(), vec![1]);
        assert_eq!(signal.connection_count(), 0);
    }

    #[test]
    fn test_guard_outlives_signal() {
        let signal = Signal::<i32>::new();
        let guard = signal.connect_scoped(|_| {});
        drop(signal);

        assert!(!guard.is_connected());
        assert_eq!(guard.release(), Err(SignalError::SignalDropped));
    }

    #[test]
    fn test_guard_release_disconnects() {
        let signal = Signal::<i32>::new();
        let guard = signal.connect_scoped(|_| {});
        assert_eq!(guard.release(), Ok(()));
        assert_eq!(signal.connection_count(), 0);
    }

    #[test]
    fn test_guard_release_after_manual_disconnect() {
        let signal = Signal::<i32>::new();
        let guard = signal.connect_scoped(|_| {});
        let id = guard.id().expect("guard holds an id");

        assert!(signal.disconnect(id));
        assert_eq!(guard.release(), Err(SignalError::InvalidConnection));
    }

    #[test]
    fn test_slot_can_disconnect_itself_during_emit() {
        let signal = Arc::new(Signal::<()>::new());
        let calls = Arc::new(AtomicUsize::new(0));
        let own_id = Arc::new(Mutex::new(None));

        let signal_clone = Arc::downgrade(&signal);
        let calls_clone = calls.clone();
        let own_id_clone = own_id.clone();
        let id = signal.connect(move |_| {
            calls_clone.fetch_add(1, Ordering::SeqCst);
            if let (Some(signal), Some(id)) = (signal_clone.upgrade(), *own_id_clone.lock()) {
                signal.disconnect(id);
            }
        });
        *own_id.lock() = Some(id);

        signal.emit(());
        signal.emit(());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_signal_with_multiple_args() {
        let signal = Signal::<(String, i32)>::new();
        let received = Arc::new(Mutex::new(None));

        let received_clone = received.clone();
        signal.connect(move |args| {
            *received_clone.lock() = Some(args.clone());
        });

        signal.emit(("hello".to_string(), 42));
        assert_eq!(received.lock().clone(), Some(("hello".to_string(), 42)));
    }
}
