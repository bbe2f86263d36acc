//! # Built-in Profiles
//!
//! The stock controller layouts and the name registry.
//!
//! Layout summary:
//!
//! | Profile | Pads | Panel |
//! |---------|------|-------|
//! | Basic | 2-sector mouse pad | trackpad + tap click |
//! | DualPad | 12-sector arrows, 2-sector mouse pad | trackpad + tap click |
//! | Limbo | 12-sector arrows, 3-sector action pad | trackpad + tap click |
//! | N64 | 12-sector arrows, 8-sector C-pad | none |
//! | PSP | 12-sector arrows | touchscreen |
//! | PadABXY | 12-sector arrows, 8-sector ABXY pad | trackpad + tap click |
//! | Empty | none | none |
//!
//! All arrow pads share one 12-sector table with hybrid diagonal wedges
//! (sector 2 is up+right, 5 is right+down, 8 is down+left, 11 is left+up).

use crate::error::{Result, VpadError};
use crate::input::event::Binding;
use crate::input::sdl::{button, keycode, scancode};
use tracing::warn;

use super::layout::{ControllerProfile, PadLabel, PadLayout, PadSlot, PanelBehavior};

/// Name of the profile substituted for unknown names under the fallback
/// policy.
pub const DEFAULT_PROFILE: &str = "Basic";

const fn key(scancode: u16, keycode: i32) -> Binding {
    Binding::Key { scancode, keycode }
}

const fn mouse(button: u8) -> Binding {
    Binding::MouseButton { button }
}

const KEY_UP: Binding = key(scancode::UP, keycode::UP);
const KEY_DOWN: Binding = key(scancode::DOWN, keycode::DOWN);
const KEY_LEFT: Binding = key(scancode::LEFT, keycode::LEFT);
const KEY_RIGHT: Binding = key(scancode::RIGHT, keycode::RIGHT);

/// The shared 12-sector arrow-key table.
///
/// Clockwise from 12 o'clock: up spans sectors 12 and 1, right 3 and 4,
/// down 6 and 7, left 9 and 10; the wedges in between press both neighbors.
fn arrow_sectors() -> Vec<Vec<Binding>> {
    vec![
        vec![],                    // hub
        vec![KEY_UP],              // 1
        vec![KEY_UP, KEY_RIGHT],   // 2
        vec![KEY_RIGHT],           // 3
        vec![KEY_RIGHT],           // 4
        vec![KEY_RIGHT, KEY_DOWN], // 5
        vec![KEY_DOWN],            // 6
        vec![KEY_DOWN],            // 7
        vec![KEY_DOWN, KEY_LEFT],  // 8
        vec![KEY_LEFT],            // 9
        vec![KEY_LEFT],            // 10
        vec![KEY_LEFT, KEY_UP],    // 11
        vec![KEY_UP],              // 12
    ]
}

/// The 12-sector arrow pad used by every directional layout.
fn arrow_pad(slot: PadSlot) -> PadLayout {
    PadLayout {
        slot,
        partitions: 12,
        sector_bindings: arrow_sectors(),
        draw_all_dividers: false,
        divider_lines: Vec::new(),
        labels: Vec::new(),
    }
}

/// The 2-sector mouse-button pad: the right half presses the right button,
/// the left half and the hub press the left button.
fn mouse_pad(slot: PadSlot) -> PadLayout {
    PadLayout::plain(
        slot,
        2,
        vec![
            vec![mouse(button::LEFT)],
            vec![mouse(button::RIGHT)],
            vec![mouse(button::LEFT)],
        ],
    )
}

/// Pairs of sectors mapped to one binding on an 8-sector pad with drawn
/// dividers at 1, 3, 5, 7: (1,8) top, (2,3) right, (4,5) bottom, (6,7) left.
fn octant_sectors(top: Binding, right: Binding, bottom: Binding, left: Binding) -> Vec<Vec<Binding>> {
    vec![
        vec![],       // hub
        vec![top],    // 1
        vec![right],  // 2
        vec![right],  // 3
        vec![bottom], // 4
        vec![bottom], // 5
        vec![left],   // 6
        vec![left],   // 7
        vec![top],    // 8
    ]
}

fn basic() -> ControllerProfile {
    ControllerProfile {
        name: "Basic",
        description: "Mouse buttons",
        pads: vec![mouse_pad(PadSlot::Left)],
        panel: PanelBehavior::Trackpad { click: true },
        show_cursor: true,
    }
}

fn dual_pad() -> ControllerProfile {
    ControllerProfile {
        name: "DualPad",
        description: "Arrow keys and mouse buttons",
        pads: vec![arrow_pad(PadSlot::Left), mouse_pad(PadSlot::Right)],
        panel: PanelBehavior::Trackpad { click: true },
        show_cursor: true,
    }
}

fn limbo() -> ControllerProfile {
    let mut action_pad = PadLayout::plain(
        PadSlot::Right,
        3,
        vec![
            vec![],
            vec![KEY_UP],
            vec![key(scancode::LCTRL, keycode::LCTRL)],
            vec![key(scancode::RETURN, keycode::RETURN)],
        ],
    );
    action_pad.labels = vec![
        PadLabel {
            between: (0, 1),
            text: "Jump",
        },
        PadLabel {
            between: (1, 2),
            text: "Action",
        },
        PadLabel {
            between: (2, 0),
            text: "Enter",
        },
    ];
    ControllerProfile {
        name: "Limbo",
        description: "Arrow keys and Ctrl/Enter",
        pads: vec![arrow_pad(PadSlot::Left), action_pad],
        panel: PanelBehavior::Trackpad { click: true },
        show_cursor: true,
    }
}

fn n64() -> ControllerProfile {
    let c_pad = PadLayout {
        slot: PadSlot::Right,
        partitions: 8,
        sector_bindings: octant_sectors(
            key(scancode::I, keycode::I),
            key(scancode::L, keycode::L),
            key(scancode::K, keycode::K),
            key(scancode::J, keycode::J),
        ),
        draw_all_dividers: false,
        divider_lines: vec![1, 3, 5, 7],
        labels: vec![
            PadLabel {
                between: (3, 5),
                text: "D-Down",
            },
            PadLabel {
                between: (1, 3),
                text: "D-Right",
            },
            PadLabel {
                between: (5, 7),
                text: "D-Left",
            },
            PadLabel {
                between: (7, 1),
                text: "D-Up",
            },
        ],
    };
    ControllerProfile {
        name: "N64",
        description: "Emulated N64 controller",
        pads: vec![arrow_pad(PadSlot::Left), c_pad],
        panel: PanelBehavior::None,
        show_cursor: false,
    }
}

fn psp() -> ControllerProfile {
    ControllerProfile {
        name: "PSP",
        description: "Emulated PSP controller",
        pads: vec![arrow_pad(PadSlot::Left)],
        panel: PanelBehavior::Touch,
        show_cursor: false,
    }
}

fn pad_abxy() -> ControllerProfile {
    let mut sector_bindings = octant_sectors(
        key(scancode::S, keycode::S), // Y
        key(scancode::X, keycode::X), // B
        key(scancode::Z, keycode::Z), // A
        key(scancode::A, keycode::A), // X
    );
    // the hub doubles as a left-click hotspot
    sector_bindings[0] = vec![mouse(button::LEFT)];
    let abxy_pad = PadLayout {
        slot: PadSlot::Right,
        partitions: 8,
        sector_bindings,
        draw_all_dividers: false,
        divider_lines: vec![1, 3, 5, 7],
        labels: vec![
            PadLabel {
                between: (3, 5),
                text: "A",
            },
            PadLabel {
                between: (1, 3),
                text: "B",
            },
            PadLabel {
                between: (5, 7),
                text: "X",
            },
            PadLabel {
                between: (7, 1),
                text: "Y",
            },
        ],
    };
    ControllerProfile {
        name: "PadABXY",
        description: "Arrow keys and ABXY buttons",
        pads: vec![arrow_pad(PadSlot::Left), abxy_pad],
        panel: PanelBehavior::Trackpad { click: true },
        show_cursor: true,
    }
}

fn empty() -> ControllerProfile {
    ControllerProfile {
        name: "Empty",
        description: "No control",
        pads: Vec::new(),
        panel: PanelBehavior::None,
        show_cursor: false,
    }
}

/// Names of every built-in profile.
pub const PROFILE_NAMES: [&str; 7] = [
    "Basic", "DualPad", "Limbo", "N64", "PSP", "PadABXY", "Empty",
];

/// Resolves a profile by name.
///
/// # Errors
///
/// Returns [`VpadError::UnknownProfile`] for names not in
/// [`PROFILE_NAMES`]. Use [`resolve_or_default`] for the legacy
/// substitute-Basic behavior.
pub fn resolve(name: &str) -> Result<ControllerProfile> {
    match name {
        "Basic" => Ok(basic()),
        "DualPad" => Ok(dual_pad()),
        "Limbo" => Ok(limbo()),
        "N64" => Ok(n64()),
        "PSP" => Ok(psp()),
        "PadABXY" => Ok(pad_abxy()),
        "Empty" => Ok(empty()),
        _ => Err(VpadError::UnknownProfile(name.to_string())),
    }
}

/// Resolves a profile by name, substituting [`DEFAULT_PROFILE`] for
/// unknown names.
///
/// This mirrors the historical selection behavior, where an unrecognized
/// name silently produced the Basic controller. Callers that want a hard
/// error should use [`resolve`] instead; the config's
/// `fallback_to_default` flag selects between the two.
#[must_use]
pub fn resolve_or_default(name: &str) -> ControllerProfile {
    resolve(name).unwrap_or_else(|_| {
        warn!(name, fallback = DEFAULT_PROFILE, "unknown profile, using default");
        basic()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::event::PointerAction;
    use crate::input::PadMapper;

    // ==================== Registry Tests ====================

    #[test]
    fn test_every_listed_name_resolves() {
        for name in PROFILE_NAMES {
            let profile = resolve(name).unwrap();
            assert_eq!(profile.name, name);
        }
    }

    #[test]
    fn test_unknown_name_errors() {
        let result = resolve("Xyz123");
        assert!(matches!(result, Err(VpadError::UnknownProfile(_))));
    }

    #[test]
    fn test_unknown_name_falls_back_to_basic() {
        let profile = resolve_or_default("Xyz123");
        assert_eq!(profile.name, DEFAULT_PROFILE);
    }

    #[test]
    fn test_resolution_is_case_sensitive() {
        assert!(resolve("basic").is_err());
    }

    // ==================== Table Shape Tests ====================

    #[test]
    fn test_sector_tables_cover_every_sector() {
        for name in PROFILE_NAMES {
            let profile = resolve(name).unwrap();
            for (i, pad) in profile.pads.iter().enumerate() {
                assert!(pad.partitions >= 1, "{} pad {}", name, i);
                assert_eq!(
                    pad.sector_bindings.len(),
                    pad.partitions + 1,
                    "{} pad {} table must cover hub + all sectors",
                    name,
                    i
                );
            }
        }
    }

    #[test]
    fn test_label_dividers_in_range() {
        for name in PROFILE_NAMES {
            let profile = resolve(name).unwrap();
            for pad in &profile.pads {
                for label in &pad.labels {
                    assert!(label.between.0 < pad.partitions, "{}: {}", name, label.text);
                    assert!(label.between.1 < pad.partitions, "{}: {}", name, label.text);
                }
                for &line in &pad.divider_lines {
                    assert!(line < pad.partitions);
                }
            }
        }
    }

    // ==================== Arrow Table Tests ====================

    #[test]
    fn test_arrow_table_hybrids() {
        let table = arrow_sectors();
        assert_eq!(table[2], vec![KEY_UP, KEY_RIGHT]);
        assert_eq!(table[5], vec![KEY_RIGHT, KEY_DOWN]);
        assert_eq!(table[8], vec![KEY_DOWN, KEY_LEFT]);
        assert_eq!(table[11], vec![KEY_LEFT, KEY_UP]);
    }

    #[test]
    fn test_arrow_table_cardinals() {
        let table = arrow_sectors();
        for s in [12, 1] {
            assert_eq!(table[s], vec![KEY_UP]);
        }
        for s in [3, 4] {
            assert_eq!(table[s], vec![KEY_RIGHT]);
        }
        for s in [6, 7] {
            assert_eq!(table[s], vec![KEY_DOWN]);
        }
        for s in [9, 10] {
            assert_eq!(table[s], vec![KEY_LEFT]);
        }
        assert!(table[0].is_empty());
    }

    // ==================== Profile-specific Tests ====================

    #[test]
    fn test_basic_hub_presses_left_button() {
        let profile = resolve("Basic").unwrap();
        let pad = &profile.pads[0];
        assert_eq!(pad.sector_bindings[0], vec![mouse(button::LEFT)]);
        assert_eq!(pad.sector_bindings[1], vec![mouse(button::RIGHT)]);
        assert_eq!(pad.sector_bindings[2], vec![mouse(button::LEFT)]);
    }

    #[test]
    fn test_n64_c_pad_letters() {
        let profile = resolve("N64").unwrap();
        let c_pad = &profile.pads[1];
        assert_eq!(c_pad.partitions, 8);
        assert_eq!(c_pad.sector_bindings[1], vec![key(scancode::I, keycode::I)]);
        assert_eq!(c_pad.sector_bindings[2], vec![key(scancode::L, keycode::L)]);
        assert_eq!(c_pad.sector_bindings[5], vec![key(scancode::K, keycode::K)]);
        assert_eq!(c_pad.sector_bindings[6], vec![key(scancode::J, keycode::J)]);
    }

    #[test]
    fn test_pad_abxy_hub_click() {
        let profile = resolve("PadABXY").unwrap();
        let abxy = &profile.pads[1];
        assert_eq!(abxy.sector_bindings[0], vec![mouse(button::LEFT)]);
        // Y on top, B right, A bottom, X left
        assert_eq!(abxy.sector_bindings[8], vec![key(scancode::S, keycode::S)]);
        assert_eq!(abxy.sector_bindings[3], vec![key(scancode::X, keycode::X)]);
        assert_eq!(abxy.sector_bindings[4], vec![key(scancode::Z, keycode::Z)]);
        assert_eq!(abxy.sector_bindings[7], vec![key(scancode::A, keycode::A)]);
    }

    #[test]
    fn test_empty_profile_has_no_inputs() {
        let profile = resolve("Empty").unwrap();
        assert!(profile.pads.is_empty());
        assert_eq!(profile.panel, PanelBehavior::None);
    }

    #[test]
    fn test_psp_panel_is_touchscreen() {
        let profile = resolve("PSP").unwrap();
        assert_eq!(profile.panel, PanelBehavior::Touch);
        assert!(!profile.show_cursor);
    }

    // ==================== End-to-end Table Test ====================

    #[test]
    fn test_arrow_table_drives_mapper() {
        let mut mapper = PadMapper::new(arrow_sectors());
        let events = mapper.update(PointerAction::Down, 2);
        assert_eq!(events.len(), 2);
        assert!(events.iter().all(|e| e.pressed));

        let events = mapper.update(PointerAction::Move, 6);
        let released: Vec<_> = events.iter().filter(|e| !e.pressed).collect();
        let pressed: Vec<_> = events.iter().filter(|e| e.pressed).collect();
        assert_eq!(released.len(), 2);
        assert_eq!(pressed.len(), 1);
        assert_eq!(pressed[0].binding, KEY_DOWN);
    }
}
