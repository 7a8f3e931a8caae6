//! Playable volume
//!
//! Only the back wall plane and the box overlap test matter to the
//! simulation; the room's visuals live with the scene builder.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::geometry::{BoundingBox, BoundingSphere};

/// The room the projectile flies through
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub bounds: BoundingBox,
}

impl Room {
    /// Room of the given dimensions centered on the origin
    pub fn new(width: f32, height: f32, depth: f32) -> Self {
        Self::from_bounds(BoundingBox::from_center_size(
            Vec3::ZERO,
            Vec3::new(width, height, depth),
        ))
    }

    pub fn from_bounds(bounds: BoundingBox) -> Self {
        Self { bounds }
    }

    /// Z of the back wall (the one the target hangs on)
    #[inline]
    pub fn back_wall_z(&self) -> f32 {
        self.bounds.min.z
    }

    /// Parking spot just outside the far wall, out of view
    #[inline]
    pub fn hidden_z(&self) -> f32 {
        self.bounds.max.z + 1.0
    }

    /// Does the sphere's box still overlap the room?
    pub fn contains(&self, sphere: &BoundingSphere) -> bool {
        sphere.intersects_aabb(&self.bounds)
    }
}
