//! Launch controller
//!
//! Turns the viewer's eye position and orientation into a launch origin and
//! a world-space velocity. This is the only place view orientation feeds the
//! physics; once thrown, the ball moves purely in world space.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::consts::{LAUNCH_OFFSET, LAUNCH_VELOCITY, MAX_PITCH, VIEW_START};
use crate::{rotate_by, yaw_pitch_to_quat};

/// Where the throw comes from and which way it faces
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aim {
    /// Eye position
    pub eye: Vec3,
    /// View orientation (view-local -Z is forward)
    pub orientation: Quat,
}

impl Aim {
    pub fn new(eye: Vec3, orientation: Quat) -> Self {
        Self { eye, orientation }
    }
}

/// How throws leave the hand
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Launcher {
    /// Hand offset from the eye, in world space
    pub offset: Vec3,
    /// Throw velocity in view-local space
    pub base_velocity: Vec3,
}

impl Default for Launcher {
    fn default() -> Self {
        Self {
            offset: Vec3::from_array(LAUNCH_OFFSET),
            base_velocity: Vec3::from_array(LAUNCH_VELOCITY),
        }
    }
}

impl Launcher {
    pub fn new(offset: Vec3, base_velocity: Vec3) -> Self {
        Self {
            offset,
            base_velocity,
        }
    }

    #[inline]
    pub fn origin(&self, aim: &Aim) -> Vec3 {
        aim.eye + self.offset
    }

    #[inline]
    pub fn velocity(&self, aim: &Aim) -> Vec3 {
        rotate_by(aim.orientation, self.base_velocity)
    }

    /// Launch origin and world-space velocity for a throw
    pub fn throw(&self, aim: &Aim) -> (Vec3, Vec3) {
        (self.origin(aim), self.velocity(aim))
    }
}

/// First-person viewpoint driven by yaw/pitch
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewpoint {
    pub position: Vec3,
    /// Radians around +Y (positive turns left)
    pub yaw: f32,
    /// Radians around +X (positive looks up), clamped to ±MAX_PITCH
    pub pitch: f32,
}

impl Default for Viewpoint {
    fn default() -> Self {
        Self {
            position: Vec3::from_array(VIEW_START),
            yaw: 0.0,
            pitch: 0.0,
        }
    }
}

impl Viewpoint {
    pub fn new(position: Vec3, yaw: f32, pitch: f32) -> Self {
        Self {
            position,
            yaw,
            pitch: pitch.clamp(-MAX_PITCH, MAX_PITCH),
        }
    }

    pub fn orientation(&self) -> Quat {
        yaw_pitch_to_quat(self.yaw, self.pitch)
    }

    /// Turn the view by the given yaw/pitch deltas
    pub fn look(&mut self, delta_yaw: f32, delta_pitch: f32) {
        self.yaw += delta_yaw;
        self.pitch = (self.pitch + delta_pitch).clamp(-MAX_PITCH, MAX_PITCH);
    }

    /// Current eye and orientation, as handed to the launcher
    pub fn aim(&self) -> Aim {
        Aim::new(self.position, self.orientation())
    }
}
