//! # Radial Pad Module
//!
//! Circular on-screen touch pad geometry.
//!
//! A radial pad divides a disc into `n` equal angular sectors around a small
//! central hub. This module handles:
//! - Sector boundary vector computation (one vector per divider, clockwise)
//! - Pure hit testing: touch point -> sector id
//! - Geometry queries for external rendering adapters (divider lines, label
//!   anchor points)
//!
//! Sector numbering: `0` is the hub, `1..=n` are the wedges in clockwise
//! order starting just after 12 o'clock.
//!
//! Rendering is not a concern of this module; a draw adapter can query
//! [`RadialPad::boundary_vectors`] and [`RadialPad::label_anchor`] and paint
//! the pad however it likes.

pub mod geometry;
pub mod radial;

pub use radial::{RadialPad, DEFAULT_HUB_RATIO, HUB};
