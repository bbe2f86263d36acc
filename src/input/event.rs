//! # Input Event Types
//!
//! The touch events the engine consumes and the key/mouse events it produces.
//!
//! ## Inputs
//!
//! A [`TouchEvent`] is one pointer sample from the embedding UI. Multi-touch
//! is ignored by policy: events with `pointer_count != 1` are dropped before
//! they reach any state machine.
//!
//! ## Outputs
//!
//! An [`InputEvent`] is one key or mouse transition destined for the remote
//! host. Mouse coordinates are in the *local view* space; scaling to the
//! remote screen is the transport's job (a linear scale per axis).

/// Pointer action kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerAction {
    /// Pointer made contact.
    Down,
    /// Pointer moved while in contact.
    Move,
    /// Pointer lifted.
    Up,
}

/// One pointer sample, relative to the touched surface's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchEvent {
    pub action: PointerAction,
    pub x: f32,
    pub y: f32,
    /// Number of pointers in contact. Anything other than 1 is dropped.
    pub pointer_count: u8,
}

impl TouchEvent {
    /// Creates a single-pointer touch event.
    #[must_use]
    pub fn new(action: PointerAction, x: f32, y: f32) -> Self {
        Self {
            action,
            x,
            y,
            pointer_count: 1,
        }
    }
}

/// What pressing a logical input emits: a key or a mouse button.
///
/// Profiles attach bindings to pad sectors; the mapper tracks press state
/// per distinct binding. Key bindings carry no modifiers or unicode; none of
/// the built-in layouts use them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binding {
    /// A keyboard key identified by SDL scancode + keycode.
    Key { scancode: u16, keycode: i32 },
    /// A mouse button (1 = left, 2 = middle, 3 = right).
    MouseButton { button: u8 },
}

/// A key or mouse transition produced by the engine, ready for the
/// control-channel encoder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Key press or release.
    Key {
        pressed: bool,
        scancode: u16,
        keycode: i32,
        modifiers: u16,
        unicode: u32,
    },
    /// Mouse button press or release at a local-view position.
    MouseButton {
        pressed: bool,
        button: u8,
        x: f32,
        y: f32,
    },
    /// Mouse motion at a local-view position, with deltas.
    MouseMotion {
        x: f32,
        y: f32,
        dx: f32,
        dy: f32,
        /// Button state mask held during the motion.
        state: u8,
        /// Whether the coordinates are relative (true) or absolute (false).
        relative: bool,
    },
}

impl InputEvent {
    /// Builds a key event from a binding press/release.
    #[must_use]
    pub fn key(pressed: bool, scancode: u16, keycode: i32) -> Self {
        Self::Key {
            pressed,
            scancode,
            keycode,
            modifiers: 0,
            unicode: 0,
        }
    }

    /// Builds a mouse button event at a position.
    #[must_use]
    pub fn mouse_button(pressed: bool, button: u8, x: f32, y: f32) -> Self {
        Self::MouseButton {
            pressed,
            button,
            x,
            y,
        }
    }

    /// True for press transitions (keys and mouse buttons), false otherwise.
    #[must_use]
    pub fn is_press(&self) -> bool {
        matches!(
            self,
            Self::Key { pressed: true, .. } | Self::MouseButton { pressed: true, .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_touch_event_single_pointer() {
        let evt = TouchEvent::new(PointerAction::Down, 10.0, 20.0);
        assert_eq!(evt.pointer_count, 1);
        assert_eq!(evt.action, PointerAction::Down);
    }

    #[test]
    fn test_key_event_builder_zeroes_modifiers() {
        let evt = InputEvent::key(true, 82, 0x40000052);
        match evt {
            InputEvent::Key {
                pressed,
                scancode,
                keycode,
                modifiers,
                unicode,
            } => {
                assert!(pressed);
                assert_eq!(scancode, 82);
                assert_eq!(keycode, 0x40000052);
                assert_eq!(modifiers, 0);
                assert_eq!(unicode, 0);
            }
            _ => panic!("expected key event"),
        }
    }

    #[test]
    fn test_is_press() {
        assert!(InputEvent::key(true, 4, 97).is_press());
        assert!(!InputEvent::key(false, 4, 97).is_press());
        assert!(InputEvent::mouse_button(true, 1, 0.0, 0.0).is_press());
        assert!(!InputEvent::mouse_button(false, 1, 0.0, 0.0).is_press());
        let motion = InputEvent::MouseMotion {
            x: 0.0,
            y: 0.0,
            dx: 1.0,
            dy: 1.0,
            state: 0,
            relative: false,
        };
        assert!(!motion.is_press());
    }

    #[test]
    fn test_binding_equality() {
        let a = Binding::Key {
            scancode: 82,
            keycode: 0x40000052,
        };
        let b = Binding::Key {
            scancode: 82,
            keycode: 0x40000052,
        };
        assert_eq!(a, b);
        assert_ne!(a, Binding::MouseButton { button: 1 });
    }
}
