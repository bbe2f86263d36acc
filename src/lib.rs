//! # VPad Bridge Library
//!
//! Drive a remote game-streaming session with on-screen virtual gamepads.
//!
//! This library provides the client-side virtual gamepad engine for a remote
//! game/desktop streaming system: radial touch-pad hit testing, touch-to-input
//! mapping state machines, named controller profiles, and encoding of the
//! resulting key/mouse events into control-channel messages.

pub mod config;
pub mod error;
pub mod pad;
pub mod input;
pub mod profile;
pub mod wire;
pub mod transport;
