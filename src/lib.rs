//! Wall Toss - throw a ball at a ringed target on the far wall
//!
//! Core modules:
//! - `sim`: Deterministic simulation (flight, collisions, scoring)
//! - `settings`: Data-driven configuration loaded from JSON

pub mod settings;
pub mod sim;

pub use settings::{SettingsError, SimConfig};

use glam::{EulerRot, Quat, Vec3};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep used by the headless driver (60 Hz, one tick per frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Downward acceleration on the vertical axis (units/s²)
    pub const GRAVITY: f32 = -5.0;

    /// Room dimensions (width, height, depth), centered on the origin
    pub const ROOM_WIDTH: f32 = 40.0;
    pub const ROOM_HEIGHT: f32 = 15.0;
    pub const ROOM_DEPTH: f32 = 40.0;

    /// Projectile bounding sphere radius
    pub const PROJECTILE_RADIUS: f32 = 0.2;

    /// Target center sits just in front of the back wall
    pub const TARGET_Z: f32 = -19.5;
    /// Ring radii, innermost first
    pub const RING_RADII: [f32; 5] = [1.0, 2.0, 3.0, 4.0, 5.0];
    /// Points for each ring, same order as `RING_RADII`
    pub const RING_POINTS: [u32; 5] = [5, 4, 3, 2, 1];

    /// Hand offset below eye level
    pub const LAUNCH_OFFSET: [f32; 3] = [0.0, -1.0, 0.0];
    /// Launch velocity in view-local space (-Z is forward)
    pub const LAUNCH_VELOCITY: [f32; 3] = [0.0, 5.0, -20.0];

    /// Where the viewpoint starts
    pub const VIEW_START: [f32; 3] = [0.0, 0.0, 15.0];
    /// Pitch limit (radians, ~89°) so the view never flips
    pub const MAX_PITCH: f32 = 1.553;
}

/// Rotate a view-local vector into world space
#[inline]
pub fn rotate_by(orientation: Quat, v: Vec3) -> Vec3 {
    orientation * v
}

/// First-person orientation from yaw (around +Y) and pitch (around +X)
#[inline]
pub fn yaw_pitch_to_quat(yaw: f32, pitch: f32) -> Quat {
    Quat::from_euler(EulerRot::YXZ, yaw, pitch, 0.0)
}

/// True when every component is finite
#[inline]
pub fn is_finite_vec(v: Vec3) -> bool {
    v.x.is_finite() && v.y.is_finite() && v.z.is_finite()
}
