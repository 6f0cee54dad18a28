//! Plane geometry: normalized pin coordinates and distance-based scoring.

use serde::{Deserialize, Serialize};

/// Diagonal of the unit square, the largest distance two in-range pins can be apart.
pub const MAX_DISTANCE: f64 = std::f64::consts::SQRT_2;

/// Points awarded for a guess that lands exactly on the self-placement.
pub const MAX_POINTS: u32 = 100;

/// A pin position as fractions of the plane's width and height.
///
/// Callers keep both coordinates within `[0, 1]`; nothing here clamps them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub x: f64,
    pub y: f64,
}

impl Placement {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another placement.
    pub fn distance(&self, other: &Placement) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Convert a distance into points: 100 on the spot, 0 at the full diagonal or beyond.
pub fn score_for_distance(dist: f64) -> u32 {
    let points = (f64::from(MAX_POINTS) - (dist / MAX_DISTANCE) * f64::from(MAX_POINTS)).round();
    // NaN falls through max() as 0.
    points.max(0.0) as u32
}

/// Score a guess against the subject's own placement.
pub fn score_guess(self_placement: &Placement, guess: &Placement) -> u32 {
    score_for_distance(self_placement.distance(guess))
}
