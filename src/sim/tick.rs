//! Fixed timestep simulation tick
//!
//! One call advances the session by one frame. Inputs arrive as a sampled
//! snapshot (latest-known values, no event queue), so a tick is a pure
//! function of (state, input) and unit tests can drive it directly.

use glam::Vec2;

use super::collision::{ball_hits_block, ball_hits_paddle, paddle_reflect};
use super::level::BlockColor;
use super::state::{BallState, GameEvent, GameState, SessionStatus};
use crate::consts::*;

/// Input snapshot for a single tick.
///
/// The collaborator that owns the input devices writes the latest values
/// here; the simulator reads them once per tick. Edge-triggered fields
/// (`launch`, `pause`) are expected to be cleared by the caller after the
/// tick that consumed them.
#[derive(Debug, Clone)]
pub struct TickInput {
    /// Pointer-derived paddle target center x, canvas coordinate space
    pub paddle_target_x: Option<f32>,
    /// Held arrow keys
    pub hold_left: bool,
    pub hold_right: bool,
    /// Launch the ball (click/space while attached)
    pub launch: bool,
    /// Pause toggle
    pub pause: bool,
    /// Player setting: spawn collision particles
    pub particle_effects: bool,
}

impl Default for TickInput {
    fn default() -> Self {
        Self {
            paddle_target_x: None,
            hold_left: false,
            hold_right: false,
            launch: false,
            pause: false,
            particle_effects: true,
        }
    }
}

/// Advance the session by one tick.
pub fn tick(state: &mut GameState, input: &TickInput) {
    // Pause toggle first so a paused session can resume
    if input.pause {
        match state.status {
            SessionStatus::Playing => {
                state.status = SessionStatus::Paused;
                return;
            }
            SessionStatus::Paused => state.status = SessionStatus::Playing,
            _ => {}
        }
    }

    // Paused and terminal states are frozen: no integration, no mutation
    if state.status != SessionStatus::Playing {
        return;
    }

    state.time_ticks += 1;

    move_paddle(state, input);

    match state.ball.state {
        BallState::Attached => {
            state.ball.update_attached(&state.paddle);
            if input.launch {
                state.ball.launch(&mut state.rng);
                log::debug!("launch: vel {:?}", state.ball.vel);
            }
        }
        BallState::Free => step_ball(state, input),
    }

    // Newly spawned sparks get one integration step this same tick
    state.particles.advance();

    // Victory only from a still-playing session; a defeat on this very tick
    // wins the race
    if state.status == SessionStatus::Playing && state.blocks.iter().all(|b| !b.alive) {
        state.status = SessionStatus::Victory;
        state.events.push(GameEvent::LevelComplete {
            level_id: state.level_id,
        });
        log::info!(
            "victory on level {} after {} ticks, score {}",
            state.level_id,
            state.time_ticks,
            state.score
        );
    }
}

/// Key-hold movement first, then the pointer override. When a pointer target
/// is present it wins unconditionally - the key path only matters for hosts
/// that never report a pointer.
fn move_paddle(state: &mut GameState, input: &TickInput) {
    if input.hold_left {
        state.paddle.x = state.paddle.clamp_x(state.paddle.x - PADDLE_KEY_STEP);
    }
    if input.hold_right {
        state.paddle.x = state.paddle.clamp_x(state.paddle.x + PADDLE_KEY_STEP);
    }
    if let Some(target) = input.paddle_target_x {
        state.paddle.x = state.paddle.clamp_x(target - state.paddle.width / 2.0);
    }
}

/// Free-ball integration and collision resolution, in the fixed order the
/// rules depend on: walls, paddle, blocks, bottom exit.
fn step_ball(state: &mut GameState, input: &TickInput) {
    let r = state.ball.radius;

    // Euler step, one per tick
    state.ball.pos += state.ball.vel;

    // Side walls: reflect dx and clamp back inside
    if state.ball.pos.x - r <= 0.0 || state.ball.pos.x + r >= CANVAS_WIDTH {
        state.ball.vel.x = -state.ball.vel.x;
        state.ball.pos.x = state.ball.pos.x.clamp(r, CANVAS_WIDTH - r);
        burst(state, input, state.ball.pos, WALL_BURST, BlockColor::Cyan);
    }

    // Top wall: reflect dy
    if state.ball.pos.y - r <= 0.0 {
        state.ball.vel.y = -state.ball.vel.y;
        state.ball.pos.y = r;
        burst(state, input, state.ball.pos, WALL_BURST, BlockColor::Cyan);
    }

    // Paddle: angle from hit position, speed preserved, always upward
    if ball_hits_paddle(state.ball.pos, r, &state.paddle) {
        state.ball.vel = paddle_reflect(state.ball.pos, state.ball.vel, &state.paddle);
        state.ball.pos.y = state.paddle.y - r;
        burst(state, input, state.ball.pos, PADDLE_BURST, BlockColor::Purple);
    }

    // Blocks: every alive overlap is processed independently - two stacked
    // blocks hit in the same tick each flip dy and each score
    let mut hits: Vec<(Vec2, BlockColor)> = Vec::new();
    for block in state.blocks.iter_mut().filter(|b| b.alive) {
        if ball_hits_block(state.ball.pos, r, block) {
            block.alive = false;
            state.ball.vel.y = -state.ball.vel.y;
            state.score += BLOCK_SCORE;
            hits.push((Vec2::new(block.center_x(), block.center_y()), block.color));
        }
    }
    for (pos, color) in hits {
        state.events.push(GameEvent::BlockDestroyed);
        burst(state, input, pos, BLOCK_BURST, color);
    }

    // Bottom exit: the life-loss boundary, not a bounce
    if state.ball.pos.y - r > CANVAS_HEIGHT {
        state.lives = state.lives.saturating_sub(1);
        state.events.push(GameEvent::LifeLost {
            lives_remaining: state.lives,
        });
        if state.lives == 0 {
            state.status = SessionStatus::Defeat;
            log::info!(
                "defeat on level {} after {} ticks, score {}",
                state.level_id,
                state.time_ticks,
                state.score
            );
        } else {
            state.ball.rearm(&state.paddle);
        }
    }
}

fn burst(state: &mut GameState, input: &TickInput, pos: Vec2, count: usize, color: BlockColor) {
    if input.particle_effects {
        state.particles.spawn(pos, count, color, &mut state.rng);
    }
}
