//! # Pad Geometry Primitives
//!
//! 2D vector helpers for the radial pad: cross products, sector boundary
//! generation and label anchor math.
//!
//! All geometry uses the mathematical convention (Y grows upward); the
//! screen-to-math Y flip happens at the hit-test boundary in
//! [`radial`](super::radial).

/// A 2D vector in pad-center-relative, Y-up coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    /// Creates a new vector.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Squared length of the vector.
    #[must_use]
    pub fn length_sq(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }
}

/// 2D cross product `a.x * b.y - a.y * b.x`.
///
/// Right-hand-rule sign convention: a positive result means `b` lies
/// counter-clockwise of `a`, negative means clockwise, zero means parallel.
///
/// # Examples
///
/// ```
/// use vpad_bridge::pad::geometry::{cross, Vec2};
///
/// let up = Vec2::new(0.0, 1.0);
/// let right = Vec2::new(1.0, 0.0);
/// assert!(cross(right, up) > 0.0); // up is counter-clockwise of right
/// assert!(cross(up, right) < 0.0); // right is clockwise of up
/// ```
#[must_use]
pub fn cross(a: Vec2, b: Vec2) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Computes the `n + 1` sector boundary vectors for an `n`-sector pad.
///
/// `vectors[0]` and `vectors[n]` both point straight up (12 o'clock) with
/// length `radius`; each subsequent vector is the previous one rotated
/// clockwise by `2*pi / n`. Sector `k` (1-based) is the wedge between
/// `vectors[k - 1]` and `vectors[k]`.
///
/// The rotation is applied iteratively, matching the way the divider lines
/// are laid out on screen.
#[must_use]
pub fn boundary_vectors(partitions: usize, radius: f64) -> Vec<Vec2> {
    let step = 2.0 * std::f64::consts::PI / partitions as f64;
    // clockwise rotation (negative angle)
    let cos = (-step).cos();
    let sin = (-step).sin();

    let mut vectors = Vec::with_capacity(partitions + 1);
    vectors.push(Vec2::new(0.0, radius));
    for i in 1..partitions {
        let prev = vectors[i - 1];
        vectors.push(Vec2::new(
            prev.x * cos - prev.y * sin,
            prev.x * sin + prev.y * cos,
        ));
    }
    vectors.push(Vec2::new(0.0, radius));
    vectors
}

/// Unit vector bisecting the angle between two boundary vectors.
///
/// Used to anchor sector labels: the label for the wedge between dividers
/// `a` and `b` sits along the returned direction. When the two vectors are
/// parallel (e.g. a 1- or 2-sector pad, where the bisector is ambiguous),
/// `a` rotated 90 degrees counter-clockwise is used instead.
#[must_use]
pub fn mid_unit_vector(a: Vec2, b: Vec2) -> Vec2 {
    let (nx, ny) = if cross(a, b) == 0.0 {
        // parallel, rotate 90 deg
        (-a.y, a.x)
    } else {
        ((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
    };
    let len = (nx * nx + ny * ny).sqrt();
    Vec2::new(nx / len, ny / len)
}
