//! Game state and core simulation types
//!
//! One `GameState` value owns everything a session mutates. The renderer
//! gets read-only access between ticks; nothing else aliases into it.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::level::{self, Block};
use super::particles::ParticleSystem;
use crate::consts::*;

/// Session status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStatus {
    /// Active gameplay (including the pre-launch ball-on-paddle phase)
    Playing,
    /// Frozen; the tick is a no-op apart from resuming
    Paused,
    /// Terminal: every block destroyed
    Victory,
    /// Terminal: out of lives
    Defeat,
}

impl SessionStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, SessionStatus::Victory | SessionStatus::Defeat)
    }
}

/// Ball state - slaved to the paddle or free-moving
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BallState {
    /// Position follows the paddle each tick, waiting for a launch trigger
    Attached,
    /// Free-moving, integrated by velocity
    Free,
}

/// The ball. Exactly one per session; losing a life re-arms it rather than
/// destroying it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub state: BallState,
}

impl Ball {
    pub fn new() -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            radius: BALL_RADIUS,
            state: BallState::Attached,
        }
    }

    /// Update attached ball position to sit on the paddle center
    pub fn update_attached(&mut self, paddle: &Paddle) {
        if self.state == BallState::Attached {
            self.pos = Vec2::new(
                paddle.x + paddle.width / 2.0,
                paddle.y - BALL_REST_OFFSET,
            );
        }
    }

    /// Launch from the paddle: fixed speed, angle drawn uniformly within
    /// +-30 degrees of vertical.
    pub fn launch(&mut self, rng: &mut Pcg32) {
        use rand::Rng;
        if self.state == BallState::Attached {
            let angle = rng.random_range(-LAUNCH_ANGLE_SPREAD..=LAUNCH_ANGLE_SPREAD);
            self.vel = Vec2::new(
                angle.sin() * BALL_LAUNCH_SPEED,
                -angle.cos() * BALL_LAUNCH_SPEED,
            );
            self.state = BallState::Free;
        }
    }

    /// Re-arm after a lost life: zero velocity, back on the paddle
    pub fn rearm(&mut self, paddle: &Paddle) {
        self.vel = Vec2::ZERO;
        self.state = BallState::Attached;
        self.update_attached(paddle);
    }
}

impl Default for Ball {
    fn default() -> Self {
        Self::new()
    }
}

/// The player's paddle. `x` is driven by input each tick; everything else is
/// fixed for the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Default for Paddle {
    fn default() -> Self {
        Self {
            x: (CANVAS_WIDTH - PADDLE_WIDTH) / 2.0,
            y: PADDLE_Y,
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
        }
    }
}

impl Paddle {
    /// Clamp an x position into the playfield
    pub fn clamp_x(&self, x: f32) -> f32 {
        x.clamp(0.0, CANVAS_WIDTH - self.width)
    }
}

/// Events the surrounding application reacts to (HUD, audio, progression).
/// Accumulated during ticks and drained by the caller each frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Fired exactly once, on the playing -> victory transition
    LevelComplete { level_id: u32 },
    /// A block was destroyed this tick
    BlockDestroyed,
    /// The ball exited the bottom boundary
    LifeLost { lives_remaining: u8 },
}

fn cosmetic_rng() -> Pcg32 {
    Pcg32::seed_from_u64(0)
}

/// Complete session state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Level this session is playing
    pub level_id: u32,
    /// Session seed (cosmetic randomness: launch angle, particle scatter)
    pub seed: u64,
    pub status: SessionStatus,
    /// Monotonically non-decreasing within a session
    pub score: u64,
    pub lives: u8,
    pub paddle: Paddle,
    pub ball: Ball,
    pub blocks: Vec<Block>,
    /// Visual only, skipped by snapshots
    #[serde(skip)]
    pub particles: ParticleSystem,
    /// Pending events, drained by the caller
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    /// Tick counter
    pub time_ticks: u64,
    /// Cosmetic RNG, reproducible from `seed`
    #[serde(skip, default = "cosmetic_rng")]
    pub rng: Pcg32,
}

impl GameState {
    /// Start a session: generate the level's blocks and park the ball on the
    /// paddle.
    pub fn new(level_id: u32, seed: u64) -> Self {
        let paddle = Paddle::default();
        let mut ball = Ball::new();
        ball.update_attached(&paddle);

        let state = Self {
            level_id,
            seed,
            status: SessionStatus::Playing,
            score: 0,
            lives: STARTING_LIVES,
            paddle,
            ball,
            blocks: level::generate_level(level_id),
            particles: ParticleSystem::default(),
            events: Vec::new(),
            time_ticks: 0,
            rng: Pcg32::seed_from_u64(seed),
        };
        log::info!(
            "session start: level {} seed {} ({} blocks)",
            level_id,
            seed,
            state.blocks.len()
        );
        state
    }

    /// Synchronous whole-session reset: fresh blocks, score, lives, ball and
    /// particles in one assignment - no partial state is ever observable.
    pub fn restart(&mut self) {
        *self = Self::new(self.level_id, self.seed);
    }

    /// Remaining alive blocks
    pub fn alive_blocks(&self) -> usize {
        self.blocks.iter().filter(|b| b.alive).count()
    }

    /// Take the events accumulated since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_defaults() {
        let state = GameState::new(1, 7);
        assert_eq!(state.status, SessionStatus::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.lives, 3);
        assert_eq!(state.blocks.len(), 24);
        assert_eq!(state.ball.state, BallState::Attached);
        // Ball parked at paddle center, just above the paddle
        assert_eq!(state.ball.pos.x, state.paddle.x + state.paddle.width / 2.0);
        assert_eq!(state.ball.pos.y, state.paddle.y - BALL_REST_OFFSET);
    }

    #[test]
    fn test_restart_regenerates_everything() {
        let mut state = GameState::new(1, 7);
        state.score = 500;
        state.lives = 1;
        state.blocks[0].alive = false;
        state.status = SessionStatus::Defeat;

        state.restart();
        assert_eq!(state.status, SessionStatus::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.lives, 3);
        assert!(state.blocks.iter().all(|b| b.alive));
        assert!(state.particles.is_empty());
    }

    #[test]
    fn test_launch_speed_and_direction() {
        let paddle = Paddle::default();
        let mut rng = Pcg32::seed_from_u64(9);
        for _ in 0..100 {
            let mut ball = Ball::new();
            ball.update_attached(&paddle);
            ball.launch(&mut rng);
            assert_eq!(ball.state, BallState::Free);
            assert!((ball.vel.length() - BALL_LAUNCH_SPEED).abs() < 1e-5);
            assert!(ball.vel.y < 0.0);
            // Within +-30 degrees of vertical
            assert!(ball.vel.x.abs() <= BALL_LAUNCH_SPEED * LAUNCH_ANGLE_SPREAD.sin() + 1e-5);
        }
    }

    #[test]
    fn test_launch_is_seed_reproducible() {
        let mut a = Pcg32::seed_from_u64(42);
        let mut b = Pcg32::seed_from_u64(42);
        let mut ball_a = Ball::new();
        let mut ball_b = Ball::new();
        ball_a.launch(&mut a);
        ball_b.launch(&mut b);
        assert_eq!(ball_a.vel, ball_b.vel);
    }

    #[test]
    fn test_paddle_clamp() {
        let paddle = Paddle::default();
        assert_eq!(paddle.clamp_x(-50.0), 0.0);
        assert_eq!(paddle.clamp_x(9999.0), CANVAS_WIDTH - PADDLE_WIDTH);
        assert_eq!(paddle.clamp_x(300.0), 300.0);
    }

    #[test]
    fn test_snapshot_roundtrip() {
        let state = GameState::new(101, 3);
        let json = serde_json::to_string(&state).unwrap();
        let back: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(back.level_id, 101);
        assert_eq!(back.blocks, state.blocks);
        assert_eq!(back.lives, state.lives);
    }
}
