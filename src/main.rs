//! Block Smasher headless demo
//!
//! Runs a scripted session against the core sim with a simple autopilot
//! paddle and prints a JSON snapshot of the final state. Useful for eyeing
//! level layouts and exercising the whole tick path without a renderer.
//!
//! Usage: block-smasher [LEVEL_ID] [SEED] [MAX_TICKS]

use block_smasher::consts::CANVAS_WIDTH;
use block_smasher::settings::Settings;
use block_smasher::sim::{BallState, GameEvent, GameState, SessionStatus, TickInput, tick};

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let level_id: u32 = args.next().and_then(|a| a.parse().ok()).unwrap_or(1);
    let seed: u64 = args.next().and_then(|a| a.parse().ok()).unwrap_or(1);
    let max_ticks: u64 = args.next().and_then(|a| a.parse().ok()).unwrap_or(100_000);

    let settings = Settings::default();
    let mut state = GameState::new(level_id, seed);
    let mut input = TickInput {
        particle_effects: settings.particle_effects,
        ..Default::default()
    };

    log::info!("autopilot session: level {level_id}, seed {seed}");

    while !state.status.is_terminal() && state.time_ticks < max_ticks {
        // Autopilot: launch immediately, then keep the paddle under the ball
        input.launch = state.ball.state == BallState::Attached;
        input.paddle_target_x = Some(state.ball.pos.x.clamp(0.0, CANVAS_WIDTH));

        tick(&mut state, &input);

        // One-shot inputs are consumed by the tick that saw them
        input.launch = false;

        for event in state.drain_events() {
            match event {
                GameEvent::LevelComplete { level_id } => {
                    log::info!("level {level_id} complete at tick {}", state.time_ticks);
                }
                GameEvent::LifeLost { lives_remaining } => {
                    log::info!(
                        "life lost at tick {}, {lives_remaining} remaining",
                        state.time_ticks
                    );
                }
                GameEvent::BlockDestroyed => {
                    log::debug!("block destroyed, score {}", state.score);
                }
            }
        }
    }

    let outcome = match state.status {
        SessionStatus::Victory => "victory",
        SessionStatus::Defeat => "defeat",
        _ => "tick limit reached",
    };
    log::info!(
        "{outcome}: score {} with {} lives after {} ticks",
        state.score,
        state.lives,
        state.time_ticks
    );

    match serde_json::to_string_pretty(&state) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("snapshot failed: {e}"),
    }
}
