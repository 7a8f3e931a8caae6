//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Caller-supplied timestep only
//! - One projectile, owned by `SimState`
//! - No rendering, audio or input dependencies

pub mod app;
pub mod collision;
pub mod geometry;
pub mod launch;
pub mod room;
pub mod scoring;
pub mod state;
pub mod target;
pub mod tick;

pub use app::{ImpactSink, Simulation, TossSimulation};
pub use collision::{CollisionOutcome, Impact, check_collisions};
pub use geometry::{BoundingBox, BoundingSphere};
pub use launch::{Aim, Launcher, Viewpoint};
pub use room::Room;
pub use scoring::{RingTable, score};
pub use state::{FlightState, Projectile, RenderSnapshot, SimEvent, SimState, ThrowStats};
pub use target::Target;
pub use tick::{TickInput, on_fire, tick};
