//! # Profile Layout Types
//!
//! The data types a controller profile is made of. All plain values, no
//! behavior: the engines that interpret them live in
//! [`pad`](crate::pad) and [`input`](crate::input).

use crate::input::event::Binding;
use crate::input::panel::PanelMode;

/// Where a pad sits on screen. A hint for the embedding UI; the engine
/// itself never positions anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PadSlot {
    Left,
    Right,
}

/// A label drawn between two divider indices (e.g. "D-Up" on the N64 C-pad).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PadLabel {
    /// Divider pair the label sits between, in `0..partitions`.
    pub between: (usize, usize),
    pub text: &'static str,
}

/// One radial pad of a profile: geometry plus its sector table.
#[derive(Debug, Clone)]
pub struct PadLayout {
    pub slot: PadSlot,
    /// Number of angular sectors.
    pub partitions: usize,
    /// Sector index -> bindings asserted there; entry 0 is the hub.
    pub sector_bindings: Vec<Vec<Binding>>,
    /// Draw every divider line, or only `divider_lines`.
    pub draw_all_dividers: bool,
    /// Divider indices to draw when `draw_all_dividers` is false.
    pub divider_lines: Vec<usize>,
    pub labels: Vec<PadLabel>,
}

impl PadLayout {
    /// A pad with every divider drawn and no labels.
    #[must_use]
    pub fn plain(slot: PadSlot, partitions: usize, sector_bindings: Vec<Vec<Binding>>) -> Self {
        Self {
            slot,
            partitions,
            sector_bindings,
            draw_all_dividers: true,
            divider_lines: Vec::new(),
            labels: Vec::new(),
        }
    }
}

/// Open-panel behavior of a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelBehavior {
    /// No pointer emulation on the panel.
    None,
    /// Trackpad cursor; `click` enables quick-tap click synthesis.
    Trackpad { click: bool },
    /// Direct touchscreen press/drag/release.
    Touch,
}

impl PanelBehavior {
    /// The panel mode, when pointer emulation is on.
    #[must_use]
    pub fn mode(&self) -> Option<PanelMode> {
        match self {
            Self::None => None,
            Self::Trackpad { .. } => Some(PanelMode::Trackpad),
            Self::Touch => Some(PanelMode::Touch),
        }
    }
}

/// A named, immutable controller layout.
///
/// Stateless pure data; independently constructible. Mutable press state
/// lives only in the session built from it.
#[derive(Debug, Clone)]
pub struct ControllerProfile {
    pub name: &'static str,
    pub description: &'static str,
    pub pads: Vec<PadLayout>,
    pub panel: PanelBehavior,
    /// Whether the embedding UI should draw the virtual cursor.
    pub show_cursor: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_behavior_modes() {
        assert_eq!(PanelBehavior::None.mode(), None);
        assert_eq!(
            PanelBehavior::Trackpad { click: true }.mode(),
            Some(PanelMode::Trackpad)
        );
        assert_eq!(PanelBehavior::Touch.mode(), Some(PanelMode::Touch));
    }

    #[test]
    fn test_plain_layout_defaults() {
        let layout = PadLayout::plain(PadSlot::Left, 2, vec![vec![], vec![], vec![]]);
        assert!(layout.draw_all_dividers);
        assert!(layout.divider_lines.is_empty());
        assert!(layout.labels.is_empty());
    }
}
