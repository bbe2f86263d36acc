//! # Input Mapping Module
//!
//! Converts pointer/touch streams into key and mouse events.
//!
//! This module handles:
//! - Touch event types shared across the crate
//! - The sector press/release state machine ([`mapper::PadMapper`])
//! - Open-panel pointer emulation ([`panel::PanelPointer`]): trackpad cursor,
//!   quick-tap click synthesis, touchscreen drags
//! - The SDL-compatible scancode/keycode/button constants profiles bind to

pub mod event;
pub mod mapper;
pub mod panel;
pub mod sdl;

pub use event::{Binding, InputEvent, PointerAction, TouchEvent};
pub use mapper::PadMapper;
pub use panel::{ClickPolicy, PanelMode, PanelPointer};
