//! Engine-facing lifecycle
//!
//! A host (renderer, game loop, headless driver) talks to the simulation
//! through the `Simulation` trait and receives hit notifications through an
//! `ImpactSink`. Fire input is queued and consumed by the next tick.

use super::launch::Aim;
use super::state::{RenderSnapshot, SimEvent, SimState};
use super::tick::{TickInput, tick};
use crate::settings::SimConfig;

/// Lifecycle a host drives once per frame
pub trait Simulation {
    /// (Re)build the scene from configuration
    fn initialize(&mut self, config: &SimConfig);
    /// Advance by one frame's elapsed time
    fn tick(&mut self, dt: f32);
    /// Fire pressed; applied on the next tick
    fn on_fire(&mut self, aim: Aim);
    /// What the renderer needs this frame
    fn snapshot(&self) -> RenderSnapshot;
}

/// Receives hit notifications (audio and score display)
pub trait ImpactSink {
    /// Play the hit sound; must not block
    fn play_impact(&mut self) {}
    /// Refresh the on-screen score
    fn score_changed(&mut self, _total: u64) {}
}

/// Sink that ignores everything
impl ImpactSink for () {}

/// The throw-at-the-wall simulation with its collaborators attached
pub struct TossSimulation<S: ImpactSink = ()> {
    pub state: SimState,
    sink: S,
    pending_fire: Option<Aim>,
    /// Events from the last tick, kept for callers that want them
    last_events: Vec<SimEvent>,
}

impl TossSimulation<()> {
    pub fn new(config: &SimConfig) -> Self {
        Self::with_sink(config, ())
    }
}

impl<S: ImpactSink> TossSimulation<S> {
    pub fn with_sink(config: &SimConfig, sink: S) -> Self {
        Self {
            state: SimState::new(config),
            sink,
            pending_fire: None,
            last_events: Vec::new(),
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn score(&self) -> u64 {
        self.state.score
    }

    /// Events produced by the most recent tick
    pub fn last_events(&self) -> &[SimEvent] {
        &self.last_events
    }
}

impl<S: ImpactSink> Simulation for TossSimulation<S> {
    fn initialize(&mut self, config: &SimConfig) {
        let room = config.room();
        log::info!(
            "Scene ready: room {}..{}, target at {}",
            room.bounds.min,
            room.bounds.max,
            config.target().position
        );
        self.state = SimState::new(config);
        self.pending_fire = None;
        self.last_events.clear();
    }

    fn tick(&mut self, dt: f32) {
        // A skipped tick must leave queued fire input for the next real one
        if dt <= 0.0 || !dt.is_finite() {
            return;
        }

        let input = TickInput {
            fire: self.pending_fire.take(),
        };
        tick(&mut self.state, &input, dt);

        self.last_events = self.state.drain_events();
        for event in &self.last_events {
            if let SimEvent::Hit { total, .. } = *event {
                self.sink.play_impact();
                self.sink.score_changed(total);
            }
        }
    }

    fn on_fire(&mut self, aim: Aim) {
        // One fire per tick; a second press before the tick replaces the first
        self.pending_fire = Some(aim);
    }

    fn snapshot(&self) -> RenderSnapshot {
        self.state.snapshot()
    }
}
