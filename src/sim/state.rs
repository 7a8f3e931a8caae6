//! Simulation state and core types
//!
//! Everything the tick mutates lives here. The render collaborator only
//! ever sees a `RenderSnapshot` copy.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::geometry::BoundingSphere;
use super::launch::Launcher;
use super::room::Room;
use super::target::Target;
use crate::settings::SimConfig;

/// Flight phase of the projectile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FlightState {
    /// Parked out of view, ready to be thrown
    #[default]
    Idle,
    /// In the air, advanced every tick
    Flying,
}

/// The single ball the player throws
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub position: Vec3,
    pub velocity: Vec3,
    pub radius: f32,
    pub state: FlightState,
}

impl Projectile {
    /// A parked projectile at `hidden_z`
    pub fn new(radius: f32, hidden_z: f32) -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, hidden_z),
            velocity: Vec3::ZERO,
            radius,
            state: FlightState::Idle,
        }
    }

    #[inline]
    pub fn is_flying(&self) -> bool {
        self.state == FlightState::Flying
    }

    #[inline]
    pub fn bounding_sphere(&self) -> BoundingSphere {
        BoundingSphere::new(self.position, self.radius)
    }

    /// Start a flight. Refused (returns false) while already flying.
    pub fn launch(&mut self, origin: Vec3, velocity: Vec3) -> bool {
        if self.is_flying() {
            return false;
        }
        self.position = origin;
        self.velocity = velocity;
        self.state = FlightState::Flying;
        true
    }

    /// End the flight: stop dead and hide just past the far wall
    pub fn park(&mut self, hidden_z: f32) {
        self.velocity = Vec3::ZERO;
        self.position.z = hidden_z;
        self.state = FlightState::Idle;
    }
}

/// Something that happened during a tick, for audio/HUD/logging consumers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SimEvent {
    /// A throw left the hand
    Launched { origin: Vec3, velocity: Vec3 },
    /// Fire pressed while the ball was still in the air
    FireIgnored,
    /// Ball hit the target
    Hit { distance: f32, points: u32, total: u64 },
    /// Ball reached the back wall off the target
    Miss { distance: f32 },
    /// Ball left the room through another face
    OutOfBounds { position: Vec3 },
}

/// Per-session throw counters (in memory only)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThrowStats {
    pub throws: u32,
    pub hits: u32,
    pub misses: u32,
    pub out_of_bounds: u32,
    /// Highest single-throw score so far
    pub best_points: u32,
}

impl ThrowStats {
    /// Fraction of finished throws that scored
    pub fn accuracy(&self) -> f32 {
        let finished = self.hits + self.misses + self.out_of_bounds;
        if finished == 0 {
            0.0
        } else {
            self.hits as f32 / finished as f32
        }
    }
}

/// What the renderer reads each frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderSnapshot {
    pub projectile_position: Vec3,
    pub flying: bool,
    pub target_position: Vec3,
    pub score: u64,
}

/// Complete simulation state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimState {
    pub room: Room,
    pub target: Target,
    pub projectile: Projectile,
    pub launcher: Launcher,
    /// Vertical acceleration (units/s², negative is down)
    pub gravity: f32,
    /// Running score, only ever increases
    pub score: u64,
    pub stats: ThrowStats,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events from the most recent ticks, drained by the caller
    #[serde(skip)]
    pub events: Vec<SimEvent>,
}

impl Default for SimState {
    fn default() -> Self {
        Self::new(&SimConfig::default())
    }
}

impl SimState {
    /// Build the scene from configuration
    pub fn new(config: &SimConfig) -> Self {
        let room = config.room();
        Self {
            projectile: Projectile::new(config.projectile_radius, room.hidden_z()),
            target: config.target(),
            launcher: config.launcher(),
            room,
            gravity: config.gravity,
            score: 0,
            stats: ThrowStats::default(),
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<SimEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn snapshot(&self) -> RenderSnapshot {
        RenderSnapshot {
            projectile_position: self.projectile.position,
            flying: self.projectile.is_flying(),
            target_position: self.target.position,
            score: self.score,
        }
    }

    /// Stop the ball and park it out of view
    pub fn reset_projectile(&mut self) {
        let hidden_z = self.room.hidden_z();
        self.projectile.park(hidden_z);
    }
}
