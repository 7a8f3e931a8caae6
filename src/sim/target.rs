//! The ringed target on the back wall

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::geometry::BoundingSphere;
use super::scoring::RingTable;
use crate::consts::TARGET_Z;

/// A fixed circular target made of concentric rings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Target {
    /// Center of the bullseye (on the wall plane)
    pub position: Vec3,
    pub rings: RingTable,
}

impl Default for Target {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, TARGET_Z),
            rings: RingTable::default(),
        }
    }
}

impl Target {
    pub fn new(position: Vec3, rings: RingTable) -> Self {
        Self { position, rings }
    }

    /// Radius of the outermost ring
    #[inline]
    pub fn outer_radius(&self) -> f32 {
        self.rings.outer_radius()
    }

    pub fn bounding_sphere(&self) -> BoundingSphere {
        BoundingSphere::new(self.position, self.outer_radius())
    }

    /// Distance at or beyond which a ball of `projectile_radius` misses
    #[inline]
    pub fn max_hit_distance(&self, projectile_radius: f32) -> f32 {
        projectile_radius + self.outer_radius()
    }

    /// Points for a ball of `projectile_radius` whose center is `distance`
    /// from the bullseye, or `None` for a miss
    pub fn points_at(&self, distance: f32, projectile_radius: f32) -> Option<u32> {
        self.rings.score(distance, self.max_hit_distance(projectile_radius))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_target() {
        let t = Target::default();
        assert_eq!(t.position, Vec3::new(0.0, 0.0, -19.5));
        assert_eq!(t.outer_radius(), 5.0);
        assert!((t.max_hit_distance(0.2) - 5.2).abs() < 1e-6);
        assert_eq!(t.bounding_sphere().radius, 5.0);
    }

    #[test]
    fn test_points_at() {
        let t = Target::default();
        assert_eq!(t.points_at(0.3, 0.2), Some(5));
        assert_eq!(t.points_at(2.5, 0.2), Some(3));
        assert_eq!(t.points_at(5.1, 0.2), Some(1));
        assert_eq!(t.points_at(5.3, 0.2), None);
    }
}
