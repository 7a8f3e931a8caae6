//! Bounding volumes used by the collision tests
//!
//! Plain value types. A box is stored as its min/max corners; a sphere is a
//! center plus radius, with the center taken from its owner's position.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min: Vec3,
    pub max: Vec3,
}

impl BoundingBox {
    /// Build from two corners in any order (min/max are sorted per axis)
    pub fn new(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Box of the given size centered on `center`
    pub fn from_center_size(center: Vec3, size: Vec3) -> Self {
        let half = size.abs() / 2.0;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    #[inline]
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    #[inline]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) / 2.0
    }

    /// Box-vs-box overlap, touching faces count as overlapping
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        self.min.cmple(other.max).all() && self.max.cmpge(other.min).all()
    }
}

/// Bounding sphere
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingSphere {
    pub center: Vec3,
    pub radius: f32,
}

impl BoundingSphere {
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    /// The sphere's enclosing box
    #[inline]
    pub fn aabb(&self) -> BoundingBox {
        let r = Vec3::splat(self.radius);
        BoundingBox {
            min: self.center - r,
            max: self.center + r,
        }
    }

    /// Coarse axis-aligned test: does this sphere's box overlap `bounds`?
    ///
    /// Corners of `bounds` are slightly more forgiving than an exact
    /// sphere-box distance test would be.
    pub fn intersects_aabb(&self, bounds: &BoundingBox) -> bool {
        self.aabb().intersects(bounds)
    }

    /// Center distance below the sum of radii
    pub fn intersects_sphere(&self, other: &BoundingSphere) -> bool {
        self.center.distance(other.center) < self.radius + other.radius
    }
}
