//! Core systems for Horizon Dropdown.
//!
//! This crate provides the foundational pieces the dropdown widget is built on:
//!
//! - **Signal/Slot System**: Type-safe change notification with scoped connections
//! - **Document Events**: A shared key/pointer stream for window-wide listeners
//! - **Geometry**: Points, sizes and rectangles in logical pixels
//! - **Input**: Key, pointer and wheel event types fed in by the host
//!
//! # Signal/Slot Example
//!
//! ```
//! use horizon_dropdown_core::Signal;
//!
//! // Create a signal that notifies when a value changes
//! let value_changed = Signal::<i32>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! // Emit the signal
//! value_changed.emit(42);
//!
//! // Disconnect when done
//! value_changed.disconnect(conn_id);
//! ```

pub mod document;
mod error;
pub mod geometry;
pub mod input;
pub mod logging;
pub mod signal;

pub use document::DocumentEvents;
pub use error::{SignalError, SignalResult};
pub use geometry::{Point, Rect, Size};
pub use input::{
    Key, KeyPressEvent, KeyboardModifiers, MouseButton, PointerPressEvent, WheelEvent,
};
pub use signal::{ConnectionGuard, ConnectionId, Signal};
