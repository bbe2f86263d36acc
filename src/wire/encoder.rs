//! # Control Message Encoder
//!
//! Builds the fixed-size control-channel records from input events.
//!
//! Coordinates here are already integers in the remote screen space; the
//! transport scales local view coordinates before encoding.
//!
//! ## Usage
//!
//! ```
//! use vpad_bridge::wire::encoder::encode_key;
//! use vpad_bridge::wire::protocol::CTRL_MSG_SIZE;
//!
//! let frame = encode_key(true, 82, 0x40000052, 0, 0);
//! assert_eq!(frame.len(), CTRL_MSG_SIZE);
//! assert_eq!(frame[2], 1); // keyboard message
//! ```

use bytes::{BufMut, Bytes, BytesMut};

use super::protocol::{
    CTRL_MSG_SIZE, MSGTYPE_KEYBOARD, MSGTYPE_MOUSEKEY, MSGTYPE_MOUSEMOTION, MSGTYPE_MOUSEWHEEL,
};

/// Starts a message buffer with the common size + type header.
fn message(msgtype: u8) -> BytesMut {
    let mut buf = BytesMut::with_capacity(CTRL_MSG_SIZE);
    buf.put_u16(CTRL_MSG_SIZE as u16);
    buf.put_u8(msgtype);
    buf
}

/// Pads the buffer to the fixed record size and freezes it.
fn finish(mut buf: BytesMut) -> Bytes {
    debug_assert!(buf.len() <= CTRL_MSG_SIZE);
    buf.resize(CTRL_MSG_SIZE, 0);
    buf.freeze()
}

/// Encodes a keyboard press/release message.
#[must_use]
pub fn encode_key(pressed: bool, scancode: u16, keycode: i32, modifiers: u16, unicode: u32) -> Bytes {
    let mut buf = message(MSGTYPE_KEYBOARD);
    buf.put_u8(u8::from(pressed));
    buf.put_u8(0); // mouse button
    buf.put_u8(0); // mouse state
    buf.put_u8(0); // alignment
    buf.put_u16(scancode);
    buf.put_i32(keycode);
    buf.put_u32(unicode);
    buf.put_u16(modifiers);
    finish(buf)
}

/// Encodes a mouse button press/release at a remote-screen position.
#[must_use]
pub fn encode_mouse_key(pressed: bool, button: u8, x: u16, y: u16) -> Bytes {
    let mut buf = message(MSGTYPE_MOUSEKEY);
    buf.put_u8(u8::from(pressed));
    buf.put_u8(button);
    buf.put_u8(0); // mouse state
    buf.put_u8(0); // alignment
    buf.put_u16(0); // scancode
    buf.put_i32(0); // keycode
    buf.put_u32(0); // unicode
    buf.put_u16(0); // modifiers
    buf.put_u16(x);
    buf.put_u16(y);
    finish(buf)
}

/// Encodes a mouse motion message.
///
/// `state` is the held-button mask; `relative` marks relative-mode
/// coordinates (the absolute fields still carry the position).
#[must_use]
pub fn encode_mouse_motion(
    x: u16,
    y: u16,
    rel_x: u16,
    rel_y: u16,
    state: u8,
    relative: bool,
) -> Bytes {
    let mut buf = message(MSGTYPE_MOUSEMOTION);
    buf.put_u8(0); // pressed
    buf.put_u8(0); // mouse button
    buf.put_u8(state);
    buf.put_u8(0); // alignment
    buf.put_u16(0); // scancode
    buf.put_i32(0); // keycode
    buf.put_u32(0); // unicode
    buf.put_u16(0); // modifiers
    buf.put_u16(x);
    buf.put_u16(y);
    buf.put_u16(rel_x);
    buf.put_u16(rel_y);
    buf.put_u8(u8::from(relative));
    finish(buf)
}

/// Encodes a mouse wheel message.
#[must_use]
pub fn encode_mouse_wheel(dx: u16, dy: u16) -> Bytes {
    let mut buf = message(MSGTYPE_MOUSEWHEEL);
    buf.put_u8(0); // pressed
    buf.put_u8(0); // mouse button
    buf.put_u8(0); // mouse state
    buf.put_u8(0); // alignment
    buf.put_u16(0); // scancode
    buf.put_i32(0); // keycode
    buf.put_u32(0); // unicode
    buf.put_u16(0); // modifiers
    buf.put_u16(dx);
    buf.put_u16(dy);
    finish(buf)
}
