//! Zombie Dash entry point
//!
//! Headless demo driver: runs a scripted session against the simulation
//! core at a fixed 60 Hz cadence and reports the outcome. Useful for
//! smoke-testing the reducer and the score store end to end.

use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use zombie_dash::audio::LogAudio;
use zombie_dash::consts::*;
use zombie_dash::persistence::JsonFileStore;
use zombie_dash::sim::{Action, GameState, HeldKeys, Phase, Services, reduce};

const FRAME_DT: f32 = 1.0 / 60.0;
const MAX_FRAMES: u32 = 60 * 120; // two minutes of play

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(0xF1DD0);
    log::info!("starting demo session with seed {seed}");

    let audio = LogAudio;
    let mut store = JsonFileStore::new("zombie-dash-scores.json");
    let mut svc = Services {
        audio: &audio,
        scores: &mut store,
    };

    // A scripted pilot with its own RNG, separate from the simulation's
    let mut pilot = Pcg32::seed_from_u64(seed ^ 0x9E37_79B9);
    let mut state = GameState::new(seed);
    state = reduce(&state, &Action::Start, &mut svc);

    let mut frames = 0;
    while state.phase != Phase::GameOver && frames < MAX_FRAMES {
        if state.phase == Phase::Continue {
            state = reduce(&state, &Action::ContinueRun, &mut svc);
            continue;
        }

        // Jittery but plausible input: drift toward the middle, hop and
        // shoot at random
        let mid = GAME_WIDTH / 2.0;
        let held = HeldKeys {
            left: state.player.body.pos.x > mid + 100.0,
            right: state.player.body.pos.x < mid - 100.0,
        };
        if pilot.random::<f64>() < 0.05 {
            state = reduce(&state, &Action::Jump, &mut svc);
        }
        if pilot.random::<f64>() < 0.30 {
            state = reduce(&state, &Action::Shoot, &mut svc);
        }

        state = reduce(&state, &Action::Step { dt: FRAME_DT, held }, &mut svc);
        frames += 1;
    }

    if state.phase != Phase::GameOver {
        state = reduce(&state, &Action::FinishGame, &mut svc);
    }

    log::info!(
        "session ended after {} frames: level {}, score {}, best {}",
        frames,
        state.level,
        state.score,
        state.best_score
    );
    println!(
        "level {} reached, score {}, best score on record {}",
        state.level, state.score, state.best_score
    );
}
