//! # Control Channel Wire Module
//!
//! Encoding of input events into the streaming system's control-channel
//! messages.
//!
//! This module handles:
//! - Message layout constants (fixed 36-byte packed records)
//! - Encoding key, mouse button, mouse motion and mouse wheel events
//!
//! The server end replays these messages into the remote desktop; the
//! layout and byte order must therefore match it exactly (big-endian
//! multi-byte fields throughout).

pub mod protocol;
pub mod encoder;
