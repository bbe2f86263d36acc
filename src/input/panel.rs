//! # Panel Pointer Module
//!
//! Pointer emulation for the open (non-pad) panel area of a controller.
//!
//! Two modes exist among the built-in layouts:
//!
//! - **Trackpad**: the panel drives a virtual cursor. Touch deltas move the
//!   cursor (clamped to the view box), each move emits an absolute motion
//!   event carrying the deltas, and a quick tap synthesizes a left-button
//!   click.
//! - **Touch**: the panel is a touchscreen. Pointer-down presses the left
//!   button at the touch point, moves drag with absolute motion, pointer-up
//!   releases. No click synthesis.
//!
//! ## Click Detection
//!
//! A down-then-up pair on a trackpad panel counts as a click when the
//! elapsed time and the squared displacement both stay under the
//! [`ClickPolicy`] thresholds (100 ms and 81 px² by default). The thresholds
//! are tunable policy, not hard constants. Time is an injected monotonic
//! instant, so the decision is a plain comparison, never a scheduled task.
//!
//! Multi-touch is ignored: events with more than one pointer are dropped.

use std::time::{Duration, Instant};

use super::event::{InputEvent, PointerAction, TouchEvent};
use super::sdl::button;
use tracing::debug;

/// Tunable thresholds for quick-tap click synthesis.
#[derive(Debug, Clone, Copy)]
pub struct ClickPolicy {
    /// Maximum time between down and up.
    pub max_duration: Duration,
    /// Maximum squared displacement between down and up, in px².
    pub max_dist_sq: f32,
}

impl Default for ClickPolicy {
    fn default() -> Self {
        Self {
            max_duration: Duration::from_millis(100),
            max_dist_sq: 81.0,
        }
    }
}

/// How the open panel interprets pointer input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelMode {
    /// Virtual cursor moved by deltas; quick taps click.
    Trackpad,
    /// Direct touchscreen: down presses, move drags, up releases.
    Touch,
}

/// State machine for the open panel area.
///
/// Owns the virtual cursor for trackpad mode. Single-threaded; the caller
/// delivers events in chronological order together with a monotonic `now`.
#[derive(Debug, Clone)]
pub struct PanelPointer {
    mode: PanelMode,
    policy: ClickPolicy,
    click_enabled: bool,
    view_width: f32,
    view_height: f32,
    cursor_x: f32,
    cursor_y: f32,
    /// Last sample position while a pointer is down.
    last: Option<(f32, f32)>,
    /// Down position and time, for click detection.
    down: Option<(f32, f32, Instant)>,
    /// Touch mode: left button currently held.
    button_down: bool,
}

impl PanelPointer {
    /// Creates a panel pointer. `click_enabled` only affects trackpad mode.
    #[must_use]
    pub fn new(mode: PanelMode, policy: ClickPolicy, click_enabled: bool) -> Self {
        Self {
            mode,
            policy,
            click_enabled,
            view_width: 0.0,
            view_height: 0.0,
            cursor_x: 0.0,
            cursor_y: 0.0,
            last: None,
            down: None,
            button_down: false,
        }
    }

    /// Resizes the panel to the view box and recenters the cursor.
    pub fn set_bounds(&mut self, width: f32, height: f32) {
        self.view_width = width;
        self.view_height = height;
        self.cursor_x = width / 2.0;
        self.cursor_y = height / 2.0;
    }

    /// Current virtual cursor position.
    #[must_use]
    pub fn cursor(&self) -> (f32, f32) {
        (self.cursor_x, self.cursor_y)
    }

    /// Panel mode.
    #[must_use]
    pub fn mode(&self) -> PanelMode {
        self.mode
    }

    /// Processes one panel touch event at monotonic time `now`.
    pub fn handle(&mut self, event: &TouchEvent, now: Instant) -> Vec<InputEvent> {
        if event.pointer_count != 1 {
            // multi-touch is dropped by policy
            return Vec::new();
        }
        match self.mode {
            PanelMode::Trackpad => self.handle_trackpad(event, now),
            PanelMode::Touch => self.handle_touch(event),
        }
    }

    fn handle_trackpad(&mut self, event: &TouchEvent, now: Instant) -> Vec<InputEvent> {
        match event.action {
            PointerAction::Down => {
                self.last = Some((event.x, event.y));
                self.down = Some((event.x, event.y, now));
                Vec::new()
            }
            PointerAction::Move => {
                // A move with no prior down has no reference point; start
                // tracking from here instead of inventing a delta.
                let Some((last_x, last_y)) = self.last else {
                    self.last = Some((event.x, event.y));
                    return Vec::new();
                };
                let dx = event.x - last_x;
                let dy = event.y - last_y;
                self.move_cursor(dx, dy);
                self.last = Some((event.x, event.y));
                vec![InputEvent::MouseMotion {
                    x: self.cursor_x,
                    y: self.cursor_y,
                    dx,
                    dy,
                    state: 0,
                    relative: false,
                }]
            }
            PointerAction::Up => {
                let clicked = self.click_enabled
                    && self.down.is_some_and(|(ix, iy, at)| {
                        let dist_sq =
                            (event.x - ix) * (event.x - ix) + (event.y - iy) * (event.y - iy);
                        now.duration_since(at) < self.policy.max_duration
                            && dist_sq < self.policy.max_dist_sq
                    });
                self.last = None;
                self.down = None;
                if clicked {
                    debug!(x = self.cursor_x, y = self.cursor_y, "tap click");
                    vec![
                        InputEvent::mouse_button(true, button::LEFT, self.cursor_x, self.cursor_y),
                        InputEvent::mouse_button(false, button::LEFT, self.cursor_x, self.cursor_y),
                    ]
                } else {
                    Vec::new()
                }
            }
        }
    }

    fn handle_touch(&mut self, event: &TouchEvent) -> Vec<InputEvent> {
        match event.action {
            PointerAction::Down => {
                self.last = Some((event.x, event.y));
                self.button_down = true;
                vec![InputEvent::mouse_button(
                    true,
                    button::LEFT,
                    event.x,
                    event.y,
                )]
            }
            PointerAction::Move => {
                let Some((last_x, last_y)) = self.last else {
                    self.last = Some((event.x, event.y));
                    return Vec::new();
                };
                let dx = event.x - last_x;
                let dy = event.y - last_y;
                self.last = Some((event.x, event.y));
                vec![InputEvent::MouseMotion {
                    x: event.x,
                    y: event.y,
                    dx,
                    dy,
                    state: 0,
                    relative: false,
                }]
            }
            PointerAction::Up => {
                self.last = None;
                if self.button_down {
                    self.button_down = false;
                    vec![InputEvent::mouse_button(
                        false,
                        button::LEFT,
                        event.x,
                        event.y,
                    )]
                } else {
                    // stray up with no prior down: tolerated as a no-op
                    Vec::new()
                }
            }
        }
    }

    /// Moves the virtual cursor by a delta, clamped to the view box.
    fn move_cursor(&mut self, dx: f32, dy: f32) {
        self.cursor_x = (self.cursor_x + dx).clamp(0.0, (self.view_width - 1.0).max(0.0));
        self.cursor_y = (self.cursor_y + dy).clamp(0.0, (self.view_height - 1.0).max(0.0));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trackpad() -> PanelPointer {
        let mut panel = PanelPointer::new(PanelMode::Trackpad, ClickPolicy::default(), true);
        panel.set_bounds(640.0, 480.0);
        panel
    }

    fn touch_panel() -> PanelPointer {
        let mut panel = PanelPointer::new(PanelMode::Touch, ClickPolicy::default(), false);
        panel.set_bounds(640.0, 480.0);
        panel
    }

    fn down(x: f32, y: f32) -> TouchEvent {
        TouchEvent::new(PointerAction::Down, x, y)
    }

    fn mv(x: f32, y: f32) -> TouchEvent {
        TouchEvent::new(PointerAction::Move, x, y)
    }

    fn up(x: f32, y: f32) -> TouchEvent {
        TouchEvent::new(PointerAction::Up, x, y)
    }

    // ==================== Click Detection Tests ====================

    #[test]
    fn test_quick_tap_clicks() {
        let mut panel = trackpad();
        let t0 = Instant::now();

        assert!(panel.handle(&down(10.0, 10.0), t0).is_empty());
        let events = panel.handle(&up(10.0, 10.0), t0 + Duration::from_millis(50));

        assert_eq!(events.len(), 2, "exactly one press+release pair");
        assert!(events[0].is_press());
        assert!(!events[1].is_press());
        match events[0] {
            InputEvent::MouseButton { button: b, .. } => assert_eq!(b, button::LEFT),
            _ => panic!("expected mouse button"),
        }
    }

    #[test]
    fn test_slow_tap_does_not_click() {
        let mut panel = trackpad();
        let t0 = Instant::now();

        panel.handle(&down(10.0, 10.0), t0);
        let events = panel.handle(&up(10.0, 10.0), t0 + Duration::from_millis(200));
        assert!(events.is_empty());
    }

    #[test]
    fn test_far_tap_does_not_click() {
        let mut panel = trackpad();
        let t0 = Instant::now();

        // displacement 10 px -> 100 px², over the 81 px² threshold
        panel.handle(&down(10.0, 10.0), t0);
        panel.handle(&mv(20.0, 10.0), t0 + Duration::from_millis(10));
        let events = panel.handle(&up(20.0, 10.0), t0 + Duration::from_millis(20));
        assert!(events.is_empty());
    }

    #[test]
    fn test_click_disabled() {
        let mut panel = PanelPointer::new(PanelMode::Trackpad, ClickPolicy::default(), false);
        panel.set_bounds(640.0, 480.0);
        let t0 = Instant::now();

        panel.handle(&down(10.0, 10.0), t0);
        let events = panel.handle(&up(10.0, 10.0), t0 + Duration::from_millis(10));
        assert!(events.is_empty());
    }

    #[test]
    fn test_custom_click_policy() {
        let policy = ClickPolicy {
            max_duration: Duration::from_millis(500),
            max_dist_sq: 4.0,
        };
        let mut panel = PanelPointer::new(PanelMode::Trackpad, policy, true);
        panel.set_bounds(640.0, 480.0);
        let t0 = Instant::now();

        // 300 ms is fine under the widened window
        panel.handle(&down(10.0, 10.0), t0);
        let events = panel.handle(&up(11.0, 10.0), t0 + Duration::from_millis(300));
        assert_eq!(events.len(), 2);
    }

    // ==================== Trackpad Cursor Tests ====================

    #[test]
    fn test_cursor_starts_centered() {
        let panel = trackpad();
        assert_eq!(panel.cursor(), (320.0, 240.0));
    }

    #[test]
    fn test_move_shifts_cursor_by_delta() {
        let mut panel = trackpad();
        let t0 = Instant::now();

        panel.handle(&down(100.0, 100.0), t0);
        let events = panel.handle(&mv(110.0, 95.0), t0 + Duration::from_millis(10));

        assert_eq!(panel.cursor(), (330.0, 235.0));
        assert_eq!(events.len(), 1);
        match events[0] {
            InputEvent::MouseMotion {
                x,
                y,
                dx,
                dy,
                state,
                relative,
            } => {
                assert_eq!((x, y), (330.0, 235.0));
                assert_eq!((dx, dy), (10.0, -5.0));
                assert_eq!(state, 0);
                assert!(!relative);
            }
            _ => panic!("expected motion"),
        }
    }

    #[test]
    fn test_cursor_clamped_to_view() {
        let mut panel = trackpad();
        let t0 = Instant::now();

        panel.handle(&down(0.0, 0.0), t0);
        panel.handle(&mv(10000.0, -10000.0), t0);
        assert_eq!(panel.cursor(), (639.0, 0.0));
    }

    #[test]
    fn test_multi_touch_dropped() {
        let mut panel = trackpad();
        let t0 = Instant::now();

        let mut evt = down(10.0, 10.0);
        evt.pointer_count = 2;
        assert!(panel.handle(&evt, t0).is_empty());

        // and it did not arm click detection
        let events = panel.handle(&up(10.0, 10.0), t0 + Duration::from_millis(10));
        assert!(events.is_empty());
    }

    #[test]
    fn test_stray_move_is_tolerated() {
        let mut panel = trackpad();
        let events = panel.handle(&mv(50.0, 50.0), Instant::now());
        assert!(events.is_empty());
        assert_eq!(panel.cursor(), (320.0, 240.0));
    }

    // ==================== Touch Mode Tests ====================

    #[test]
    fn test_touch_mode_press_drag_release() {
        let mut panel = touch_panel();
        let t0 = Instant::now();

        let events = panel.handle(&down(50.0, 60.0), t0);
        assert_eq!(
            events,
            vec![InputEvent::mouse_button(true, button::LEFT, 50.0, 60.0)]
        );

        let events = panel.handle(&mv(55.0, 62.0), t0);
        assert_eq!(
            events,
            vec![InputEvent::MouseMotion {
                x: 55.0,
                y: 62.0,
                dx: 5.0,
                dy: 2.0,
                state: 0,
                relative: false,
            }]
        );

        let events = panel.handle(&up(55.0, 62.0), t0);
        assert_eq!(
            events,
            vec![InputEvent::mouse_button(false, button::LEFT, 55.0, 62.0)]
        );
    }

    #[test]
    fn test_touch_mode_stray_up_is_noop() {
        let mut panel = touch_panel();
        let events = panel.handle(&up(10.0, 10.0), Instant::now());
        assert!(events.is_empty());
    }
}
