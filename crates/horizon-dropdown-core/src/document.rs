//! Document-level event hub.
//!
//! Some widgets need to observe input that happens *anywhere* in the window,
//! not only on themselves: a dropdown closes when the user clicks outside of it
//! or presses Escape. [`DocumentEvents`] is the shared stream those widgets
//! listen to. The host feeds every key press and pointer press into it, and
//! each subscriber decides whether the event concerns it.
//!
//! Subscriptions are scoped: the `subscribe_*` methods return a
//! [`ConnectionGuard`] and the listener is removed when the guard is dropped.
//!
//! # Example
//!
//! ```
//! use horizon_dropdown_core::{DocumentEvents, Key, KeyPressEvent};
//! use std::sync::atomic::{AtomicBool, Ordering};
//! use std::sync::Arc;
//!
//! let document = DocumentEvents::new();
//! let escaped = Arc::new(AtomicBool::new(false));
//!
//! let escaped_clone = escaped.clone();
//! let guard = document.subscribe_key_press(move |event| {
//!     if event.key == Key::Escape {
//!         escaped_clone.store(true, Ordering::SeqCst);
//!     }
//! });
//!
//! document.dispatch_key_press(KeyPressEvent::key(Key::Escape));
//! assert!(escaped.load(Ordering::SeqCst));
//!
//! drop(guard);
//! assert_eq!(document.listener_count(), 0);
//! ```

use std::sync::{Arc, OnceLock};

use crate::input::{KeyPressEvent, PointerPressEvent};
use crate::logging::targets;
use crate::signal::{ConnectionGuard, Signal};

/// Process-wide (or per-window) stream of key and pointer presses.
#[derive(Debug, Default)]
pub struct DocumentEvents {
    key_pressed: Signal<KeyPressEvent>,
    pointer_pressed: Signal<PointerPressEvent>,
}

static GLOBAL_DOCUMENT: OnceLock<Arc<DocumentEvents>> = OnceLock::new();

impl DocumentEvents {
    /// Create a new, independent event hub.
    ///
    /// Hosts with several windows create one hub per window; tests create one
    /// per test so listeners never leak between them.
    pub fn new() -> Self {
        Self::default()
    }

    /// The shared hub used by widgets that were not given one explicitly.
    pub fn global() -> Arc<DocumentEvents> {
        GLOBAL_DOCUMENT
            .get_or_init(|| Arc::new(DocumentEvents::new()))
            .clone()
    }

    /// Listen to every key press until the returned guard is dropped.
    pub fn subscribe_key_press<F>(&self, listener: F) -> ConnectionGuard<KeyPressEvent>
    where
        F: Fn(&KeyPressEvent) + Send + Sync + 'static,
    {
        let guard = self.key_pressed.connect_scoped(listener);
        tracing::trace!(target: targets::DOCUMENT, listeners = self.key_pressed.connection_count(), "key listener added");
        guard
    }

    /// Listen to every pointer press until the returned guard is dropped.
    pub fn subscribe_pointer_press<F>(&self, listener: F) -> ConnectionGuard<PointerPressEvent>
    where
        F: Fn(&PointerPressEvent) + Send + Sync + 'static,
    {
        let guard = self.pointer_pressed.connect_scoped(listener);
        tracing::trace!(target: targets::DOCUMENT, listeners = self.pointer_pressed.connection_count(), "pointer listener added");
        guard
    }

    /// Deliver a key press to every listener.
    pub fn dispatch_key_press(&self, event: KeyPressEvent) {
        tracing::trace!(target: targets::DOCUMENT, key = ?event.key, "dispatching key press");
        self.key_pressed.emit(event);
    }

    /// Deliver a pointer press to every listener.
    pub fn dispatch_pointer_press(&self, event: PointerPressEvent) {
        tracing::trace!(
            target: targets::DOCUMENT,
            x = event.position.x,
            y = event.position.y,
            "dispatching pointer press"
        );
        self.pointer_pressed.emit(event);
    }

    /// Total number of live listeners of both kinds.
    pub fn listener_count(&self) -> usize {
        self.key_pressed.connection_count() + self.pointer_pressed.connection_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;
    use crate::input::Key;
    use parking_lot::Mutex;

    #[test]
    fn test_listeners_receive_dispatched_events() {
        let document = DocumentEvents::new();
        let keys = Arc::new(Mutex::new(Vec::new()));
        let points = Arc::new(Mutex::new(Vec::new()));

        let keys_clone = keys.clone();
        let _key_guard = document.subscribe_key_press(move |e| keys_clone.lock().push(e.key));
        let points_clone = points.clone();
        let _pointer_guard =
            document.subscribe_pointer_press(move |e| points_clone.lock().push(e.position));

        document.dispatch_key_press(KeyPressEvent::key(Key::Escape));
        document.dispatch_pointer_press(PointerPressEvent::left((3.0, 4.0)));

        assert_eq!(*keys.lock(), vec![Key::Escape]);
        assert_eq!(*points.lock(), vec![Point::new(3.0, 4.0)]);
    }

    #[test]
    fn test_dropping_guards_unsubscribes() {
        let document = DocumentEvents::new();
        let key_guard = document.subscribe_key_press(|_| {});
        let pointer_guard = document.subscribe_pointer_press(|_| {});
        assert_eq!(document.listener_count(), 2);

        drop(key_guard);
        assert_eq!(document.listener_count(), 1);
        drop(pointer_guard);
        assert_eq!(document.listener_count(), 0);
    }

    #[test]
    fn test_global_hub_is_shared() {
        let a = DocumentEvents::global();
        let b = DocumentEvents::global();
        assert!(Arc::ptr_eq(&a, &b));
    }
}
