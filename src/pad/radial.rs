//! # Radial Pad Hit Testing
//!
//! The [`RadialPad`] maps a touch point to a sector id: `0` for the central
//! hub, `1..=n` for the angular wedges in clockwise order from 12 o'clock.
//!
//! ## Coordinate Spaces
//!
//! Touch points arrive relative to the pad's top-left corner with screen
//! convention (Y grows downward). Hit testing translates them to
//! center-relative coordinates and flips the Y axis into the mathematical
//! convention used by the boundary vectors.
//!
//! ## Hit Test Algorithm
//!
//! 1. If the squared distance from the center is below the hub radius
//!    squared, the touch is on the hub (sector 0).
//! 2. Otherwise a binary search over the clockwise-ordered boundary vectors
//!    finds the unique wedge containing the touch vector, using the
//!    cross-product sign test: the touch lies in sector `k` when it is
//!    clockwise of boundary `k - 1` and counter-clockwise of boundary `k`.
//!
//! A touch exactly on a divider may land in either adjacent sector depending
//! on floating-point rounding. This is an accepted non-determinism of the
//! boundary, not a defect; callers must not rely on a particular tie-break.
//!
//! ## Usage
//!
//! ```
//! use vpad_bridge::pad::RadialPad;
//!
//! let mut pad = RadialPad::new(12)?;
//! pad.set_bounds(200.0, 200.0);
//!
//! // Dead center is the hub
//! assert_eq!(pad.hit_test(100.0, 100.0), 0);
//! // Straight up from the center, just inside the rim: sector 1 or 12
//! let s = pad.hit_test(100.0, 10.0);
//! assert!(s == 1 || s == 12);
//! # Ok::<(), vpad_bridge::error::VpadError>(())
//! ```

use super::geometry::{boundary_vectors, cross, mid_unit_vector, Vec2};
use crate::error::{Result, VpadError};

/// Sector id of the central hub.
pub const HUB: usize = 0;

/// Default hub radius as a fraction of the pad radius.
pub const DEFAULT_HUB_RATIO: f64 = 0.28;

/// Circular touch pad divided into equal angular sectors around a hub.
///
/// The pad is constructed with a partition count, then sized with
/// [`set_bounds`](RadialPad::set_bounds) (or [`configure`](RadialPad::configure))
/// whenever the containing view changes. Boundary vectors are recomputed only
/// on resize or repartition; [`hit_test`](RadialPad::hit_test) is a pure
/// function of the configured geometry.
#[derive(Debug, Clone)]
pub struct RadialPad {
    partitions: usize,
    radius: f64,
    hub_ratio: f64,
    center_x: f64,
    center_y: f64,
    boundaries: Vec<Vec2>,
    touched: bool,
    touch_point: Option<(f32, f32)>,
}

impl RadialPad {
    /// Creates a pad with `partitions` sectors and the default hub ratio.
    ///
    /// The pad has no size yet; call [`set_bounds`](RadialPad::set_bounds)
    /// before hit testing.
    ///
    /// # Errors
    ///
    /// Returns [`VpadError::InvalidPartition`] when `partitions < 1`. The
    /// count is never silently clamped.
    pub fn new(partitions: usize) -> Result<Self> {
        Self::with_hub_ratio(partitions, DEFAULT_HUB_RATIO)
    }

    /// Creates a pad with an explicit hub ratio (fraction of the pad radius
    /// treated as the hub disc).
    ///
    /// # Errors
    ///
    /// Returns [`VpadError::InvalidPartition`] when `partitions < 1`.
    pub fn with_hub_ratio(partitions: usize, hub_ratio: f64) -> Result<Self> {
        if partitions < 1 {
            return Err(VpadError::InvalidPartition { count: partitions });
        }
        Ok(Self {
            partitions,
            radius: 0.0,
            hub_ratio,
            center_x: 0.0,
            center_y: 0.0,
            boundaries: boundary_vectors(partitions, 0.0),
            touched: false,
            touch_point: None,
        })
    }

    /// Reconfigures partition count and radius in one call.
    ///
    /// # Errors
    ///
    /// Returns [`VpadError::InvalidPartition`] when `partitions < 1`; the
    /// previous geometry is left untouched in that case.
    pub fn configure(&mut self, partitions: usize, radius: f64) -> Result<()> {
        if partitions < 1 {
            return Err(VpadError::InvalidPartition { count: partitions });
        }
        self.partitions = partitions;
        self.radius = radius;
        self.boundaries = boundary_vectors(partitions, radius);
        Ok(())
    }

    /// Resizes the pad to a new bounding box.
    ///
    /// The center moves to the box midpoint and the radius becomes half the
    /// smaller dimension. Boundary vectors are rebuilt at the new radius.
    pub fn set_bounds(&mut self, width: f64, height: f64) {
        self.center_x = width / 2.0;
        self.center_y = height / 2.0;
        self.radius = width.min(height) / 2.0;
        self.boundaries = boundary_vectors(self.partitions, self.radius);
    }

    /// Number of angular sectors (the hub not included).
    #[must_use]
    pub fn partitions(&self) -> usize {
        self.partitions
    }

    /// Current pad radius in pixels.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// The clockwise-ordered boundary vectors, for rendering adapters.
    ///
    /// There are `partitions + 1` entries; the first and last both point at
    /// 12 o'clock.
    #[must_use]
    pub fn boundary_vectors(&self) -> &[Vec2] {
        &self.boundaries
    }

    /// Whether a pointer is currently down on this pad.
    #[must_use]
    pub fn is_touched(&self) -> bool {
        self.touched
    }

    /// Last touch point (pad-relative), while a pointer is down.
    #[must_use]
    pub fn touch_point(&self) -> Option<(f32, f32)> {
        self.touch_point
    }

    /// Records a pointer-down or pointer-move touch point.
    pub fn touch(&mut self, x: f32, y: f32) {
        self.touched = true;
        self.touch_point = Some((x, y));
    }

    /// Clears transient touch state on pointer-up.
    pub fn release(&mut self) {
        self.touched = false;
        self.touch_point = None;
    }

    /// Maps a touch point (pad-top-left-relative, screen Y-down) to a sector.
    ///
    /// Returns [`HUB`] (0) for the central disc, otherwise the 1-based wedge
    /// index in clockwise order from 12 o'clock. A point exactly on a divider
    /// may resolve to either neighbor (floating-point tie).
    ///
    /// An unsized pad (zero radius) has no wedge geometry yet and reports
    /// the hub for every point.
    #[must_use]
    pub fn hit_test(&self, x: f64, y: f64) -> usize {
        // center-relative, mathematical Y-up
        let touch = Vec2::new(x - self.center_x, -(y - self.center_y));

        let hub_radius = self.hub_ratio * self.radius;
        if touch.length_sq() < hub_radius * hub_radius {
            return HUB;
        }
        if self.radius <= 0.0 {
            return HUB;
        }

        // Binary search over the clockwise-ordered dividers: keep the
        // invariant that the touch lies between boundaries[left] and
        // boundaries[right].
        let mut left = 0;
        let mut right = self.partitions;
        while right - left > 1 {
            let mid = (left + right) / 2;
            if cross(self.boundaries[left], touch) <= 0.0
                && cross(self.boundaries[mid], touch) >= 0.0
            {
                right = mid;
            } else {
                left = mid;
            }
        }
        left + 1
    }

    /// Anchor point for a label drawn between two dividers.
    ///
    /// Returns the center-relative, Y-up anchor on the bisector of dividers
    /// `a` and `b`, placed midway between the hub rim and the pad rim.
    /// Returns `None` when either divider index is out of range.
    #[must_use]
    pub fn label_anchor(&self, a: usize, b: usize) -> Option<Vec2> {
        if a >= self.partitions || b >= self.partitions {
            return None;
        }
        let mid = mid_unit_vector(self.boundaries[a], self.boundaries[b]);
        let dist = self.radius * (0.5 + 0.5 * self.hub_ratio);
        Some(Vec2::new(mid.x * dist, mid.y * dist))
    }
}
