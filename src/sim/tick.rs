//! Per-frame simulation tick
//!
//! Handles at most one fire input, then integrates the ball under gravity
//! and resolves collisions.

use super::collision::{CollisionOutcome, Impact, check_collisions};
use super::launch::Aim;
use super::state::{SimEvent, SimState};

/// Input for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Fire pressed this tick, with the view at that moment
    pub fire: Option<Aim>,
}

impl TickInput {
    pub fn fire(aim: Aim) -> Self {
        Self { fire: Some(aim) }
    }
}

/// Advance the simulation by `dt` seconds
///
/// Zero, negative or non-finite `dt` is a no-op tick.
pub fn tick(state: &mut SimState, input: &TickInput, dt: f32) {
    if dt <= 0.0 || !dt.is_finite() {
        return;
    }

    state.time_ticks += 1;

    if let Some(aim) = input.fire {
        on_fire(state, &aim);
    }

    if !state.projectile.is_flying() {
        return;
    }

    integrate(state, dt);

    let outcome = check_collisions(&mut state.projectile, &state.room, &state.target);
    match outcome {
        CollisionOutcome::None => {}
        CollisionOutcome::Impact(impact) => {
            apply_impact(state, impact);
            state.reset_projectile();
        }
        CollisionOutcome::OutOfBounds => {
            let position = state.projectile.position;
            if crate::is_finite_vec(position) {
                log::debug!("Ball left the room at {position}");
            } else {
                log::warn!("Ball state went non-finite, parking it");
            }
            state.stats.out_of_bounds += 1;
            state.events.push(SimEvent::OutOfBounds { position });
            state.reset_projectile();
        }
    }
}

/// Try to throw the ball. Returns false (and changes nothing) while it's in the air.
pub fn on_fire(state: &mut SimState, aim: &Aim) -> bool {
    let (origin, velocity) = state.launcher.throw(aim);
    if !state.projectile.launch(origin, velocity) {
        log::debug!("Fire ignored, ball still in flight");
        state.events.push(SimEvent::FireIgnored);
        return false;
    }

    log::debug!("Launched from {origin} with velocity {velocity}");
    state.stats.throws += 1;
    state.events.push(SimEvent::Launched { origin, velocity });
    true
}

/// Semi-implicit Euler: velocity first, then position with the new velocity
fn integrate(state: &mut SimState, dt: f32) {
    let ball = &mut state.projectile;
    ball.velocity.y += state.gravity * dt;
    ball.position += ball.velocity * dt;
}

fn apply_impact(state: &mut SimState, impact: Impact) {
    match impact.points {
        Some(points) => {
            state.score += u64::from(points);
            state.stats.hits += 1;
            state.stats.best_points = state.stats.best_points.max(points);
            log::info!(
                "Hit at {:.2} from center: +{} (score {})",
                impact.distance,
                points,
                state.score
            );
            state.events.push(SimEvent::Hit {
                distance: impact.distance,
                points,
                total: state.score,
            });
        }
        None => {
            state.stats.misses += 1;
            log::debug!("Missed the target by {:.2}", impact.distance);
            state.events.push(SimEvent::Miss {
                distance: impact.distance,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;
    use crate::sim::launch::Viewpoint;
    use crate::sim::state::FlightState;
    use glam::{Quat, Vec3};
    use proptest::prelude::*;

    fn identity_aim() -> Aim {
        Aim::new(Vec3::new(0.0, 1.0, 15.0), Quat::IDENTITY)
    }

    /// Tick until the ball stops flying (bounded)
    fn run_flight(state: &mut SimState) -> usize {
        let idle = TickInput::default();
        for i in 0..10_000 {
            if !state.projectile.is_flying() {
                return i;
            }
            tick(state, &idle, SIM_DT);
        }
        panic!("flight never ended");
    }

    #[test]
    fn test_idle_tick_changes_nothing() {
        let mut state = SimState::default();
        let before = state.projectile.clone();
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.projectile.position, before.position);
        assert_eq!(state.projectile.velocity, Vec3::ZERO);
        assert_eq!(state.projectile.state, FlightState::Idle);
    }

    #[test]
    fn test_non_positive_dt_is_noop() {
        let mut state = SimState::default();
        on_fire(&mut state, &identity_aim());
        let before = state.projectile.clone();
        for dt in [0.0, -0.5, f32::NAN, f32::INFINITY] {
            tick(&mut state, &TickInput::default(), dt);
        }
        assert_eq!(state.projectile.position, before.position);
        assert_eq!(state.projectile.velocity, before.velocity);
        assert_eq!(state.time_ticks, 0);
    }

    #[test]
    fn test_velocity_updated_before_position() {
        let mut state = SimState::default();
        on_fire(&mut state, &identity_aim());
        let start = state.projectile.position;
        tick(&mut state, &TickInput::default(), 0.1);
        let v = state.projectile.velocity;
        assert!((v.y - 4.5).abs() < 1e-5);
        // Position uses the already-updated velocity
        let expected = start + Vec3::new(0.0, 4.5, -20.0) * 0.1;
        assert!((state.projectile.position - expected).length() < 1e-5);
    }

    #[test]
    fn test_fire_while_flying_is_rejected() {
        let mut state = SimState::default();
        tick(&mut state, &TickInput::fire(identity_aim()), SIM_DT);
        assert!(state.projectile.is_flying());
        state.drain_events();

        let mut shadow = state.clone();
        let other = Aim::new(Vec3::new(5.0, 0.0, 0.0), Quat::from_rotation_y(1.0));
        assert!(!on_fire(&mut state, &other));
        assert_eq!(state.projectile.position, shadow.projectile.position);
        assert_eq!(state.projectile.velocity, shadow.projectile.velocity);
        assert_eq!(state.stats.throws, 1);
        assert_eq!(state.drain_events(), vec![SimEvent::FireIgnored]);

        // A tick with a rejected fire behaves like a plain tick
        tick(&mut state, &TickInput::fire(other), SIM_DT);
        tick(&mut shadow, &TickInput::default(), SIM_DT);
        assert_eq!(state.projectile.position, shadow.projectile.position);
        assert_eq!(state.projectile.velocity, shadow.projectile.velocity);
    }

    #[test]
    fn test_straight_throw_scores_once() {
        // Eye at y=1 so the hand starts at (0, 0, 15)
        let mut state = SimState::default();
        tick(&mut state, &TickInput::fire(identity_aim()), SIM_DT);
        run_flight(&mut state);

        let hits: Vec<_> = state
            .drain_events()
            .into_iter()
            .filter_map(|e| match e {
                SimEvent::Hit { distance, points, .. } => Some((distance, points)),
                _ => None,
            })
            .collect();
        assert_eq!(hits.len(), 1);
        let (distance, points) = hits[0];
        // Ball arrives ~1.02 above the bullseye
        assert!(distance > 1.0 && distance < 1.1, "distance {distance}");
        assert_eq!(points, 4);
        assert_eq!(state.score, 4);

        assert_eq!(state.projectile.state, FlightState::Idle);
        assert_eq!(state.projectile.velocity, Vec3::ZERO);
        assert_eq!(state.projectile.position.z, state.room.hidden_z());
        assert_eq!(state.stats.hits, 1);
    }

    #[test]
    fn test_side_exit_scores_nothing() {
        let mut state = SimState::default();
        // Turned 90° right: the throw heads for the +X wall
        let view = Viewpoint::new(Vec3::new(0.0, 1.0, 0.0), -std::f32::consts::FRAC_PI_2, 0.0);
        tick(&mut state, &TickInput::fire(view.aim()), SIM_DT);
        run_flight(&mut state);

        let events = state.drain_events();
        assert!(events.iter().any(|e| matches!(e, SimEvent::OutOfBounds { .. })));
        assert!(!events.iter().any(|e| matches!(e, SimEvent::Hit { .. } | SimEvent::Miss { .. })));
        assert_eq!(state.score, 0);
        assert_eq!(state.stats.out_of_bounds, 1);
        assert_eq!(state.projectile.velocity, Vec3::ZERO);
        assert_eq!(state.projectile.position.z, state.room.hidden_z());
    }

    #[test]
    fn test_wide_throw_misses_the_target() {
        let mut state = SimState::default();
        // Slightly off to the side: reaches the back wall well clear of the rings
        let view = Viewpoint::new(Vec3::new(0.0, 1.0, 15.0), -0.3, 0.0);
        tick(&mut state, &TickInput::fire(view.aim()), SIM_DT);
        run_flight(&mut state);

        let events = state.drain_events();
        assert!(events.iter().any(|e| matches!(e, SimEvent::Miss { .. })));
        assert_eq!(state.score, 0);
        assert_eq!(state.projectile.position.z, state.room.hidden_z());
    }

    #[test]
    fn test_can_throw_again_after_landing() {
        let mut state = SimState::default();
        for _ in 0..3 {
            assert!(on_fire(&mut state, &identity_aim()));
            run_flight(&mut state);
        }
        assert_eq!(state.stats.throws, 3);
        assert_eq!(state.score, 12);
    }

    #[test]
    fn test_determinism() {
        let mut a = SimState::default();
        let mut b = SimState::default();
        let view = Viewpoint::new(Vec3::new(1.0, 1.0, 10.0), 0.05, 0.1);
        for state in [&mut a, &mut b] {
            tick(state, &TickInput::fire(view.aim()), SIM_DT);
            run_flight(state);
        }
        assert_eq!(a.score, b.score);
        assert_eq!(a.projectile.position, b.projectile.position);
    }

    proptest! {
        #[test]
        fn prop_gravity_lowers_vertical_velocity(
            yaw in -0.5f32..0.5,
            pitch in -0.5f32..0.5,
            dt in 0.001f32..0.05,
        ) {
            let mut state = SimState::default();
            let view = Viewpoint::new(Vec3::new(0.0, 1.0, 15.0), yaw, pitch);
            tick(&mut state, &TickInput::fire(view.aim()), dt);
            let mut last_vy = state.projectile.velocity.y;
            while state.projectile.is_flying() {
                tick(&mut state, &TickInput::default(), dt);
                if state.projectile.is_flying() {
                    prop_assert!(state.projectile.velocity.y < last_vy);
                    last_vy = state.projectile.velocity.y;
                }
            }
            prop_assert_eq!(state.projectile.velocity, Vec3::ZERO);
            prop_assert_eq!(state.projectile.position.z, state.room.hidden_z());
        }

        #[test]
        fn prop_any_throw_ends_parked(
            vx in -1.0e6f32..1.0e6,
            vy in -1.0e6f32..1.0e6,
            vz in -1.0e6f32..1.0e6,
        ) {
            let mut state = SimState::default();
            state.launcher.base_velocity = Vec3::new(vx, vy, vz);
            on_fire(&mut state, &identity_aim());
            let idle = TickInput::default();
            let mut ticks = 0;
            while state.projectile.is_flying() && ticks < 100_000 {
                tick(&mut state, &idle, SIM_DT);
                ticks += 1;
            }
            prop_assert!(!state.projectile.is_flying());
            prop_assert_eq!(state.projectile.velocity, Vec3::ZERO);
            prop_assert_eq!(state.projectile.position.z, state.room.hidden_z());
        }
    }
}
