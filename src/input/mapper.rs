//! # Pad Mapper Module
//!
//! The press/release state machine behind every radial pad.
//!
//! A [`PadMapper`] is parameterized by a sector -> bindings table (plain
//! data; one table per pad layout). Feeding it the (action, sector) stream
//! from a pad's hit testing yields an ordered sequence of press and release
//! transitions with two guarantees:
//!
//! - every press is balanced by exactly one release, and
//! - an unchanged sector never re-emits a press.
//!
//! On every `Down`/`Move` the mapper diffs the currently-pressed set against
//! the touched sector's bindings and emits releases before presses; `Up`
//! releases everything. A sector may carry more than one binding (hybrid
//! diagonal wedges press two directions at once), and a table may bind the
//! hub itself (the Basic layout presses the left mouse button there).
//!
//! ## Usage
//!
//! ```
//! use vpad_bridge::input::mapper::PadMapper;
//! use vpad_bridge::input::event::{Binding, PointerAction};
//! use vpad_bridge::input::sdl::{keycode, scancode};
//!
//! let up = Binding::Key { scancode: scancode::UP, keycode: keycode::UP };
//! // 1-sector pad: the whole rim presses Up, the hub releases it
//! let mut mapper = PadMapper::new(vec![vec![], vec![up]]);
//!
//! let events = mapper.update(PointerAction::Down, 1);
//! assert_eq!(events.len(), 1);
//! let events = mapper.update(PointerAction::Up, 1);
//! assert_eq!(events.len(), 1);
//! ```

use super::event::{Binding, PointerAction};
use tracing::trace;

/// One press or release transition for a binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BindingEvent {
    pub pressed: bool,
    pub binding: Binding,
}

/// Sector-table-driven press/release state machine.
///
/// Owns its pressed-state exclusively; single-threaded, no timers. The
/// caller must deliver events for one pad in chronological order.
#[derive(Debug, Clone)]
pub struct PadMapper {
    /// Distinct bindings in first-appearance order. Diffs are emitted in
    /// this order, which keeps event sequences deterministic.
    inputs: Vec<Binding>,
    /// Sector index -> indices into `inputs`. Entry 0 is the hub.
    sectors: Vec<Vec<usize>>,
    /// Pressed state, parallel to `inputs`.
    active: Vec<bool>,
    last_sector: Option<usize>,
}

impl PadMapper {
    /// Builds a mapper from a sector table.
    ///
    /// `sector_bindings[s]` lists the bindings asserted while the pointer is
    /// in sector `s`; index 0 is the hub. Sectors beyond the table's length
    /// assert nothing.
    #[must_use]
    pub fn new(sector_bindings: Vec<Vec<Binding>>) -> Self {
        let mut inputs: Vec<Binding> = Vec::new();
        let mut sectors = Vec::with_capacity(sector_bindings.len());
        for bindings in &sector_bindings {
            let mut indices = Vec::with_capacity(bindings.len());
            for binding in bindings {
                let idx = match inputs.iter().position(|b| b == binding) {
                    Some(idx) => idx,
                    None => {
                        inputs.push(*binding);
                        inputs.len() - 1
                    }
                };
                if !indices.contains(&idx) {
                    indices.push(idx);
                }
            }
            sectors.push(indices);
        }
        let active = vec![false; inputs.len()];
        Self {
            inputs,
            sectors,
            active,
            last_sector: None,
        }
    }

    /// Processes one (action, sector) event and returns the resulting
    /// transitions, releases before presses.
    ///
    /// `Up` ignores the sector and releases everything; an `Up` with nothing
    /// pressed (e.g. a stray event with no prior `Down`) is a no-op.
    pub fn update(&mut self, action: PointerAction, sector: usize) -> Vec<BindingEvent> {
        let desired: &[usize] = match action {
            PointerAction::Down | PointerAction::Move => {
                self.sectors.get(sector).map_or(&[], Vec::as_slice)
            }
            PointerAction::Up => &[],
        };

        let mut events = Vec::new();
        // releases first, in table order
        for (idx, binding) in self.inputs.iter().enumerate() {
            if self.active[idx] && !desired.contains(&idx) {
                events.push(BindingEvent {
                    pressed: false,
                    binding: *binding,
                });
            }
        }
        for (idx, binding) in self.inputs.iter().enumerate() {
            if !self.active[idx] && desired.contains(&idx) {
                events.push(BindingEvent {
                    pressed: true,
                    binding: *binding,
                });
            }
        }

        for flag in &mut self.active {
            *flag = false;
        }
        for &idx in desired {
            self.active[idx] = true;
        }
        self.last_sector = match action {
            PointerAction::Up => None,
            _ => Some(sector),
        };

        if !events.is_empty() {
            trace!(?action, sector, transitions = events.len(), "mapper update");
        }
        events
    }

    /// The bindings currently pressed, in table order.
    #[must_use]
    pub fn active_bindings(&self) -> Vec<Binding> {
        self.inputs
            .iter()
            .zip(&self.active)
            .filter_map(|(binding, &on)| on.then_some(*binding))
            .collect()
    }

    /// Sector of the most recent `Down`/`Move`, `None` after an `Up`.
    #[must_use]
    pub fn last_sector(&self) -> Option<usize> {
        self.last_sector
    }
}
