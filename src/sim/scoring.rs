//! Ring scoring
//!
//! Maps the impact distance from the target center to points. Ring
//! boundaries are half-open: a ball exactly on a boundary lands in the
//! wider ring and scores the lower value.

use serde::{Deserialize, Serialize};

use crate::consts::{RING_POINTS, RING_RADII};

/// Ring radius → points lookup, innermost ring first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RingTable {
    /// Outer radius of each ring, strictly ascending
    pub radii: Vec<f32>,
    /// Points for landing inside the matching ring
    pub points: Vec<u32>,
}

impl Default for RingTable {
    fn default() -> Self {
        Self {
            radii: RING_RADII.to_vec(),
            points: RING_POINTS.to_vec(),
        }
    }
}

impl RingTable {
    pub fn new(radii: Vec<f32>, points: Vec<u32>) -> Self {
        Self { radii, points }
    }

    /// Radius of the outermost ring
    pub fn outer_radius(&self) -> f32 {
        self.radii.last().copied().unwrap_or(0.0)
    }

    /// Points for a confirmed hit at `distance` from the center.
    ///
    /// `max_distance` is the hit threshold (ball radius + outer ring). The
    /// outermost ring reaches out to it, so the ball's own radius counts
    /// toward the last ring. Returns `None` at or beyond `max_distance`,
    /// or for a non-finite distance.
    pub fn score(&self, distance: f32, max_distance: f32) -> Option<u32> {
        if !distance.is_finite() || distance < 0.0 || distance >= max_distance {
            return None;
        }
        let last = self.points.len().min(self.radii.len()).checked_sub(1)?;
        let ring = self.radii[..last]
            .iter()
            .position(|&r| distance < r)
            .unwrap_or(last);
        Some(self.points[ring])
    }
}

/// Score against the default five-ring target with a 0.2 radius ball
pub fn score(distance: f32) -> Option<u32> {
    use crate::consts::PROJECTILE_RADIUS;
    let table = RingTable::default();
    let max_distance = PROJECTILE_RADIUS + table.outer_radius();
    table.score(distance, max_distance)
}
