//! Input event types.
//!
//! These are the events a host's windowing layer feeds into the document
//! event hub. Pointer positions are in document coordinates.

use crate::geometry::Point;

/// Keyboard modifiers that may be held during input events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct KeyboardModifiers {
    /// The Shift key is held.
    pub shift: bool,
    /// The Control key is held (Cmd on macOS).
    pub control: bool,
    /// The Alt key is held (Option on macOS).
    pub alt: bool,
    /// The Meta/Super key is held (Windows key, Cmd on macOS).
    pub meta: bool,
}

impl KeyboardModifiers {
    /// No modifiers pressed.
    pub const NONE: Self = Self {
        shift: false,
        control: false,
        alt: false,
        meta: false,
    };

    /// Shift modifier only.
    pub const SHIFT: Self = Self {
        shift: true,
        control: false,
        alt: false,
        meta: false,
    };

    /// Control modifier only.
    pub const CTRL: Self = Self {
        shift: false,
        control: true,
        alt: false,
        meta: false,
    };

    /// Check if any modifier is pressed.
    pub fn any(&self) -> bool {
        self.shift || self.control || self.alt || self.meta
    }

    /// Check if a shortcut modifier (anything but Shift) is pressed.
    pub fn has_command(&self) -> bool {
        self.control || self.alt || self.meta
    }
}

/// Mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MouseButton {
    /// Primary button (usually left).
    Left = 0,
    /// Secondary button (usually right).
    Right = 1,
    /// Middle button (scroll wheel click).
    Middle = 2,
}

/// Keyboard keys the widgets react to.
///
/// Printable keys that have no dedicated variant arrive as
/// [`Key::Character`] with the typed text in [`KeyPressEvent::text`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Escape,
    Enter,
    Tab,
    Backspace,
    Delete,
    Space,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Home,
    End,
    /// Any other key producing text.
    Character,
    /// A key with no text and no meaning to the widgets.
    Unidentified,
}

/// Key press event, sent when a key is pressed.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyPressEvent {
    /// The key that was pressed.
    pub key: Key,
    /// Keyboard modifiers held during the event.
    pub modifiers: KeyboardModifiers,
    /// The text input from this key press (if any).
    ///
    /// For printable keys, this contains the character that would be typed.
    /// For non-printable keys (Escape, arrows, etc.), this is empty.
    pub text: String,
}

impl KeyPressEvent {
    /// Create a new key press event.
    pub fn new(key: Key, modifiers: KeyboardModifiers, text: impl Into<String>) -> Self {
        Self {
            key,
            modifiers,
            text: text.into(),
        }
    }

    /// A bare key press with no modifiers and no text.
    pub fn key(key: Key) -> Self {
        Self::new(key, KeyboardModifiers::NONE, String::new())
    }

    /// A printable key press producing `text`.
    pub fn text(text: impl Into<String>) -> Self {
        let text = text.into();
        let key = if text == " " { Key::Space } else { Key::Character };
        Self::new(key, KeyboardModifiers::NONE, text)
    }

    /// Text this event would insert into a focused text field, if any.
    pub fn insertable_text(&self) -> Option<&str> {
        if self.modifiers.has_command() || self.text.is_empty() {
            return None;
        }
        if self.text.chars().any(char::is_control) {
            return None;
        }
        Some(&self.text)
    }
}

/// Pointer press event, delivered to every document listener.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerPressEvent {
    /// The button that was pressed.
    pub button: MouseButton,
    /// Position in document coordinates.
    pub position: Point,
    /// Keyboard modifiers held during the event.
    pub modifiers: KeyboardModifiers,
}

impl PointerPressEvent {
    /// Create a new pointer press event.
    pub fn new(button: MouseButton, position: Point, modifiers: KeyboardModifiers) -> Self {
        Self {
            button,
            position,
            modifiers,
        }
    }

    /// A primary-button press at `position` with no modifiers.
    pub fn left(position: impl Into<Point>) -> Self {
        Self::new(MouseButton::Left, position.into(), KeyboardModifiers::NONE)
    }
}

/// Wheel event over a point of the document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelEvent {
    /// Position in document coordinates.
    pub position: Point,
    /// Horizontal scroll delta (positive = right).
    pub delta_x: f32,
    /// Vertical scroll delta (positive = up/away from user).
    pub delta_y: f32,
    /// Keyboard modifiers held during the event.
    pub modifiers: KeyboardModifiers,
}

impl WheelEvent {
    /// Create a new wheel event.
    pub fn new(position: Point, delta_x: f32, delta_y: f32, modifiers: KeyboardModifiers) -> Self {
        Self {
            position,
            delta_x,
            delta_y,
            modifiers,
        }
    }

    /// A vertical scroll at `position` with no modifiers.
    pub fn vertical(position: impl Into<Point>, delta_y: f32) -> Self {
        Self::new(position.into(), 0.0, delta_y, KeyboardModifiers::NONE)
    }

    /// Rows to scroll a list by: one row per notch, towards the user for
    /// negative deltas. Zero when there is no vertical movement.
    pub fn row_delta(&self) -> isize {
        if self.delta_y > 0.0 {
            -1
        } else if self.delta_y < 0.0 {
            1
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wheel_row_delta() {
        assert_eq!(WheelEvent::vertical((0.0, 0.0), -3.0).row_delta(), 1);
        assert_eq!(WheelEvent::vertical((0.0, 0.0), 1.5).row_delta(), -1);
        let horizontal = WheelEvent::new(Point::ZERO, 2.0, 0.0, KeyboardModifiers::NONE);
        assert_eq!(horizontal.row_delta(), 0);
    }

    #[test]
    fn test_text_event_is_insertable() {
        let event = KeyPressEvent::text("a");
        assert_eq!(event.key, Key::Character);
        assert_eq!(event.insertable_text(), Some("a"));
    }

    #[test]
    fn test_space_maps_to_space_key() {
        let event = KeyPressEvent::text(" ");
        assert_eq!(event.key, Key::Space);
        assert_eq!(event.insertable_text(), Some(" "));
    }

    #[test]
    fn test_shortcuts_are_not_insertable() {
        let event = KeyPressEvent::new(Key::Character, KeyboardModifiers::CTRL, "c");
        assert_eq!(event.insertable_text(), None);

        let shifted = KeyPressEvent::new(Key::Character, KeyboardModifiers::SHIFT, "C");
        assert_eq!(shifted.insertable_text(), Some("C"));
    }

    #[test]
    fn test_control_keys_are_not_insertable() {
        assert_eq!(KeyPressEvent::key(Key::Escape).insertable_text(), None);
        let escape_with_text = KeyPressEvent::new(Key::Escape, KeyboardModifiers::NONE, "\u{1b}");
        assert_eq!(escape_with_text.insertable_text(), None);
    }
}
