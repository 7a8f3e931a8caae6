//! Simulation configuration
//!
//! Loaded from a JSON file; any field left out takes its default. A config
//! that fails to load falls back to the defaults with a warning.

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::{Launcher, RingTable, Room, Target, Viewpoint};

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Everything needed to build a scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Vertical acceleration (negative is down)
    pub gravity: f32,
    pub projectile_radius: f32,

    // === Room ===
    /// Width, height, depth; the room is centered on the origin
    pub room_size: Vec3,

    // === Target ===
    pub target_position: Vec3,
    /// Ring radii, innermost first
    pub ring_radii: Vec<f32>,
    /// Points per ring
    pub ring_points: Vec<u32>,

    // === Throwing ===
    pub launch_offset: Vec3,
    /// View-local throw velocity (-Z forward)
    pub launch_velocity: Vec3,
    pub view_start: Vec3,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            projectile_radius: PROJECTILE_RADIUS,

            room_size: Vec3::new(ROOM_WIDTH, ROOM_HEIGHT, ROOM_DEPTH),

            target_position: Vec3::new(0.0, 0.0, TARGET_Z),
            ring_radii: RING_RADII.to_vec(),
            ring_points: RING_POINTS.to_vec(),

            launch_offset: Vec3::from_array(LAUNCH_OFFSET),
            launch_velocity: Vec3::from_array(LAUNCH_VELOCITY),
            view_start: Vec3::from_array(VIEW_START),
        }
    }
}

impl SimConfig {
    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a JSON config file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load from a file, falling back to defaults on any error
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::from_file(path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("{e} ({}), using default config", path.display());
                Self::default()
            }
        }
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject configs the simulation can't run sensibly
    pub fn validate(&self) -> Result<(), SettingsError> {
        let invalid = |msg: &str| -> Result<(), SettingsError> {
            Err(SettingsError::Invalid(msg.to_string()))
        };

        let vectors = [
            self.room_size,
            self.target_position,
            self.launch_offset,
            self.launch_velocity,
            self.view_start,
        ];
        if !self.gravity.is_finite() || !vectors.iter().all(|v| crate::is_finite_vec(*v)) {
            return invalid("all values must be finite");
        }
        if self.projectile_radius <= 0.0 || !self.projectile_radius.is_finite() {
            return invalid("projectile_radius must be positive");
        }
        if self.launch_velocity == Vec3::ZERO {
            return invalid("launch_velocity must not be zero");
        }
        if self.room_size.min_element() <= 0.0 {
            return invalid("room_size must be positive on every axis");
        }
        if self.ring_radii.is_empty() {
            return invalid("target needs at least one ring");
        }
        if self.ring_radii.len() != self.ring_points.len() {
            return invalid("ring_radii and ring_points must have the same length");
        }
        if !self.ring_radii.iter().all(|r| r.is_finite() && *r > 0.0) {
            return invalid("ring radii must be positive");
        }
        if self.ring_radii.windows(2).any(|w| w[0] >= w[1]) {
            return invalid("ring radii must be strictly ascending");
        }
        Ok(())
    }

    pub fn room(&self) -> Room {
        Room::new(self.room_size.x, self.room_size.y, self.room_size.z)
    }

    pub fn target(&self) -> Target {
        Target::new(
            self.target_position,
            RingTable::new(self.ring_radii.clone(), self.ring_points.clone()),
        )
    }

    pub fn launcher(&self) -> Launcher {
        Launcher::new(self.launch_offset, self.launch_velocity)
    }

    pub fn viewpoint(&self) -> Viewpoint {
        Viewpoint::new(self.view_start, 0.0, 0.0)
    }
}
