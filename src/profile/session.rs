//! # Controller Session Module
//!
//! A [`ControllerSession`] is a live instance of a profile: one
//! [`RadialPad`] + [`PadMapper`] pair per pad layout, plus the panel
//! pointer. It routes touch events to the right state machine and turns
//! the resulting transitions into [`InputEvent`]s ready for the control
//! channel.
//!
//! The session is single-threaded and owns all mutable press state
//! exclusively. Touch events for one session must arrive in chronological
//! order; the session does not defend against reordering.
//!
//! ## Usage
//!
//! ```
//! use std::time::Instant;
//! use vpad_bridge::input::event::{PointerAction, TouchEvent};
//! use vpad_bridge::profile::{resolve, ControllerSession, TouchTarget};
//!
//! let profile = resolve("DualPad")?;
//! let mut session = ControllerSession::new(profile)?;
//! session.layout_default(1280.0, 720.0);
//!
//! // Touch the left pad near its top edge: arrow-up press
//! let touch = TouchEvent::new(PointerAction::Down, 144.0, 10.0);
//! let events = session.dispatch(TouchTarget::Pad(0), &touch, Instant::now());
//! assert_eq!(events.len(), 1);
//! # Ok::<(), vpad_bridge::error::VpadError>(())
//! ```

use std::time::Instant;

use crate::error::Result;
use crate::input::event::{Binding, InputEvent, PointerAction, TouchEvent};
use crate::input::mapper::PadMapper;
use crate::input::panel::{ClickPolicy, PanelPointer};
use crate::pad::{RadialPad, DEFAULT_HUB_RATIO};
use tracing::debug;

use super::layout::{ControllerProfile, PanelBehavior};

/// Which surface a touch event landed on. Routing touches to surfaces is
/// the embedding UI's job; the session only interprets them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchTarget {
    /// A pad, by index into the profile's pad list. Coordinates are
    /// relative to that pad's top-left corner.
    Pad(usize),
    /// The open panel. Coordinates are relative to the view.
    Panel,
}

/// A profile instantiated with live press state.
#[derive(Debug)]
pub struct ControllerSession {
    profile: ControllerProfile,
    pads: Vec<(RadialPad, PadMapper)>,
    panel: Option<PanelPointer>,
    view_width: f32,
    view_height: f32,
}

impl ControllerSession {
    /// Builds a session with the default hub ratio and click policy.
    ///
    /// # Errors
    ///
    /// Returns [`VpadError::InvalidPartition`](crate::error::VpadError::InvalidPartition)
    /// when a pad layout carries a partition count below 1.
    pub fn new(profile: ControllerProfile) -> Result<Self> {
        Self::with_tuning(profile, DEFAULT_HUB_RATIO, ClickPolicy::default())
    }

    /// Builds a session with explicit hub ratio and click policy (both come
    /// from configuration in the binary).
    ///
    /// # Errors
    ///
    /// Returns [`VpadError::InvalidPartition`](crate::error::VpadError::InvalidPartition)
    /// when a pad layout carries a partition count below 1.
    pub fn with_tuning(
        profile: ControllerProfile,
        hub_ratio: f64,
        policy: ClickPolicy,
    ) -> Result<Self> {
        let mut pads = Vec::with_capacity(profile.pads.len());
        for layout in &profile.pads {
            let pad = RadialPad::with_hub_ratio(layout.partitions, hub_ratio)?;
            let mapper = PadMapper::new(layout.sector_bindings.clone());
            pads.push((pad, mapper));
        }
        let panel = profile.panel.mode().map(|mode| {
            let click = matches!(profile.panel, PanelBehavior::Trackpad { click: true });
            PanelPointer::new(mode, policy, click)
        });
        Ok(Self {
            profile,
            pads,
            panel,
            view_width: 0.0,
            view_height: 0.0,
        })
    }

    /// The profile this session was built from.
    #[must_use]
    pub fn profile(&self) -> &ControllerProfile {
        &self.profile
    }

    /// Number of live pads.
    #[must_use]
    pub fn pad_count(&self) -> usize {
        self.pads.len()
    }

    /// Resizes the view; the panel spans it and the cursor recenters.
    /// Pad boxes are set separately with
    /// [`set_pad_bounds`](ControllerSession::set_pad_bounds) (or all at
    /// once with [`layout_default`](ControllerSession::layout_default)).
    pub fn set_view_bounds(&mut self, width: f32, height: f32) {
        self.view_width = width;
        self.view_height = height;
        if let Some(panel) = &mut self.panel {
            panel.set_bounds(width, height);
        }
    }

    /// Sizes one pad's bounding box. No-op for an out-of-range index.
    pub fn set_pad_bounds(&mut self, index: usize, width: f32, height: f32) {
        if let Some((pad, _)) = self.pads.get_mut(index) {
            pad.set_bounds(f64::from(width), f64::from(height));
        }
    }

    /// Sizes the view and gives every pad the customary square box of
    /// two fifths of the view height.
    pub fn layout_default(&mut self, width: f32, height: f32) {
        self.set_view_bounds(width, height);
        let pad_size = height * 2.0 / 5.0;
        for index in 0..self.pads.len() {
            self.set_pad_bounds(index, pad_size, pad_size);
        }
    }

    /// Current cursor position: the panel's virtual cursor, or the view
    /// center when the profile has no panel pointer.
    #[must_use]
    pub fn cursor(&self) -> (f32, f32) {
        match &self.panel {
            Some(panel) => panel.cursor(),
            None => (self.view_width / 2.0, self.view_height / 2.0),
        }
    }

    /// Routes one touch event and returns the produced input events in
    /// emission order.
    ///
    /// Multi-touch events are dropped. Touches on an out-of-range pad index
    /// are dropped. Mouse-button transitions from pad bindings are stamped
    /// with the current cursor position.
    pub fn dispatch(
        &mut self,
        target: TouchTarget,
        event: &TouchEvent,
        now: Instant,
    ) -> Vec<InputEvent> {
        if event.pointer_count != 1 {
            return Vec::new();
        }
        match target {
            TouchTarget::Panel => match &mut self.panel {
                Some(panel) => panel.handle(event, now),
                None => Vec::new(),
            },
            TouchTarget::Pad(index) => {
                let cursor = self.cursor();
                let Some((pad, mapper)) = self.pads.get_mut(index) else {
                    debug!(index, "touch on unknown pad dropped");
                    return Vec::new();
                };
                let sector = pad.hit_test(f64::from(event.x), f64::from(event.y));
                match event.action {
                    PointerAction::Up => pad.release(),
                    _ => pad.touch(event.x, event.y),
                }
                mapper
                    .update(event.action, sector)
                    .into_iter()
                    .map(|transition| match transition.binding {
                        Binding::Key { scancode, keycode } => {
                            InputEvent::key(transition.pressed, scancode, keycode)
                        }
                        Binding::MouseButton { button } => InputEvent::mouse_button(
                            transition.pressed,
                            button,
                            cursor.0,
                            cursor.1,
                        ),
                    })
                    .collect()
            }
        }
    }

    /// The bindings currently pressed on one pad, for diagnostics/tests.
    #[must_use]
    pub fn active_bindings(&self, pad_index: usize) -> Vec<Binding> {
        self.pads
            .get(pad_index)
            .map(|(_, mapper)| mapper.active_bindings())
            .unwrap_or_default()
    }
}
