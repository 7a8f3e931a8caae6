//! Wall Toss headless driver
//!
//! Runs the simulation without a renderer: throws a number of balls at the
//! target with seeded aim jitter and reports the score.
//!
//! Usage: `wall-toss [config.json] [--throws N] [--seed S] [--jitter RADIANS]`

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use wall_toss::SimConfig;
use wall_toss::consts::{MAX_SUBSTEPS, SIM_DT};
use wall_toss::sim::{ImpactSink, Simulation, TossSimulation};

/// Upper bound on frames spent on one throw
const MAX_FRAMES_PER_THROW: u32 = 60 * 30;

/// Stand-in for the audio and HUD collaborators
struct ConsoleHud;

impl ImpactSink for ConsoleHud {
    fn play_impact(&mut self) {
        log::debug!("*beep*");
    }

    fn score_changed(&mut self, total: u64) {
        log::info!("Score: {total}");
    }
}

struct Options {
    config: SimConfig,
    throws: u32,
    seed: u64,
    jitter: f32,
}

fn parse_args() -> Options {
    let mut options = Options {
        config: SimConfig::default(),
        throws: 10,
        seed: 0x5EED,
        jitter: 0.08,
    };

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--throws" => {
                if let Some(n) = args.next().and_then(|v| v.parse().ok()) {
                    options.throws = n;
                }
            }
            "--seed" => {
                if let Some(s) = args.next().and_then(|v| v.parse().ok()) {
                    options.seed = s;
                }
            }
            "--jitter" => {
                if let Some(j) = args.next().as_deref().and_then(parse_jitter) {
                    options.jitter = j;
                }
            }
            path => options.config = SimConfig::load(path),
        }
    }
    options
}

/// Aim jitter in radians; must be finite so the sample range is valid
fn parse_jitter(value: &str) -> Option<f32> {
    value
        .parse::<f32>()
        .ok()
        .filter(|j| j.is_finite())
        .map(f32::abs)
}

/// Fixed-timestep frame pump. Returns true once the ball has landed.
fn run_frame(sim: &mut TossSimulation<ConsoleHud>, accumulator: &mut f32, frame_dt: f32) -> bool {
    *accumulator += frame_dt.min(0.1);

    let mut substeps = 0;
    while *accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
        sim.tick(SIM_DT);
        *accumulator -= SIM_DT;
        substeps += 1;
        if !sim.snapshot().flying {
            return true;
        }
    }
    false
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Wall Toss (headless) starting...");

    let options = parse_args();
    let mut rng = Pcg32::seed_from_u64(options.seed);
    let mut sim = TossSimulation::with_sink(&options.config, ConsoleHud);
    sim.initialize(&options.config);

    let base_view = options.config.viewpoint();
    let mut accumulator = 0.0f32;

    for throw in 1..=options.throws {
        let jitter = options.jitter;
        let (yaw, pitch) = if jitter > 0.0 {
            (rng.random_range(-jitter..jitter), rng.random_range(-jitter..jitter))
        } else {
            (0.0, 0.0)
        };
        let mut view = base_view;
        view.look(yaw, pitch);
        sim.on_fire(view.aim());

        let mut landed = false;
        for _ in 0..MAX_FRAMES_PER_THROW {
            // Uneven frame times, like a real display loop
            let frame_dt = SIM_DT * rng.random_range(0.8f32..1.2);
            if run_frame(&mut sim, &mut accumulator, frame_dt) {
                landed = true;
                break;
            }
        }
        if !landed {
            log::warn!("Throw {throw} still in flight after {MAX_FRAMES_PER_THROW} frames");
        }
        log::debug!("Throw {throw}: yaw {yaw:.3}, pitch {pitch:.3}");
    }

    let stats = sim.state.stats;
    log::info!(
        "Final score {} from {} throws ({} hits, {} misses, {} out of bounds, best {}, accuracy {:.0}%)",
        sim.score(),
        stats.throws,
        stats.hits,
        stats.misses,
        stats.out_of_bounds,
        stats.best_points,
        stats.accuracy() * 100.0
    );
}
