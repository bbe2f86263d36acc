//! # Controller Profile Module
//!
//! Named, immutable on-screen controller layouts.
//!
//! A profile is pure data: a list of radial pads (partition count, sector ->
//! bindings table, draw hints) plus the open-panel behavior. Every layout
//! that used to be its own controller class (Basic, DualPad, Limbo, N64,
//! PSP, PadABXY, Empty) is just a different table over the same two engines:
//! [`RadialPad`](crate::pad::RadialPad) for geometry and
//! [`PadMapper`](crate::input::PadMapper) for press/release state.
//!
//! Profiles are resolved by name from the built-in registry; see
//! [`resolve`](builtin::resolve) and the documented default-fallback policy
//! in [`resolve_or_default`](builtin::resolve_or_default).
//!
//! A [`ControllerSession`](session::ControllerSession) instantiates a
//! profile: it owns one mapper per pad and the panel pointer, and routes
//! touch events to them.

pub mod builtin;
pub mod layout;
pub mod session;

pub use builtin::{resolve, resolve_or_default, DEFAULT_PROFILE};
pub use layout::{ControllerProfile, PadLabel, PadLayout, PadSlot, PanelBehavior};
pub use session::{ControllerSession, TouchTarget};
