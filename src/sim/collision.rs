//! Collision detection for the flying ball
//!
//! Two tests run after integration, in order: the back-wall impact test,
//! then (only if that didn't fire) the room bounds test. Both look at the
//! post-integration position.

use super::room::Room;
use super::state::Projectile;
use super::target::Target;
use crate::is_finite_vec;

/// Result of a back-wall impact
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Impact {
    /// Distance from the bullseye, measured on the target plane
    pub distance: f32,
    /// Points awarded, `None` for a miss
    pub points: Option<u32>,
}

impl Impact {
    #[inline]
    pub fn is_hit(&self) -> bool {
        self.points.is_some()
    }
}

/// What the collision pass decided for this tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CollisionOutcome {
    /// Still flying
    None,
    /// Reached the back wall
    Impact(Impact),
    /// Left the room (or the state went non-finite)
    OutOfBounds,
}

/// Has the ball's near face crossed the back wall plane?
#[inline]
pub fn crossed_back_wall(projectile: &Projectile, room: &Room) -> bool {
    projectile.position.z - projectile.radius < room.back_wall_z()
}

/// Snap the ball onto the target plane and measure the hit.
///
/// Mutates `projectile.position.z`. The distance is the full 3D distance,
/// which after the snap is the in-plane distance.
pub fn resolve_impact(projectile: &mut Projectile, target: &Target) -> Impact {
    projectile.position.z = target.position.z;
    let distance = projectile.position.distance(target.position);
    let on_target = target
        .bounding_sphere()
        .intersects_sphere(&projectile.bounding_sphere());
    Impact {
        distance,
        points: if on_target {
            target.points_at(distance, projectile.radius)
        } else {
            None
        },
    }
}

/// Has the ball left the room? Non-finite positions count as gone.
pub fn left_room(projectile: &Projectile, room: &Room) -> bool {
    if !is_finite_vec(projectile.position) {
        return true;
    }
    !room.contains(&projectile.bounding_sphere())
}

/// Run both tests for one tick
pub fn check_collisions(projectile: &mut Projectile, room: &Room, target: &Target) -> CollisionOutcome {
    if crossed_back_wall(projectile, room) {
        return CollisionOutcome::Impact(resolve_impact(projectile, target));
    }
    if left_room(projectile, room) {
        return CollisionOutcome::OutOfBounds;
    }
    CollisionOutcome::None
}
