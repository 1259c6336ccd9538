//! Block Smasher - a neon block-breaking game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (level generation, physics, collisions, game state)
//! - `settings`: Player preferences consumed by the surrounding UI and the sim
//!
//! Rendering, screens, input capture and audio are owned by the embedding
//! application; this crate only produces read-only renderable state each tick.

pub mod settings;
pub mod sim;

pub use settings::{Difficulty, QualityPreset, Settings};

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions (canvas coordinate space)
    pub const CANVAS_WIDTH: f32 = 800.0;
    pub const CANVAS_HEIGHT: f32 = 600.0;

    /// Paddle defaults - fixed height band near the bottom edge
    pub const PADDLE_WIDTH: f32 = 120.0;
    pub const PADDLE_HEIGHT: f32 = 15.0;
    pub const PADDLE_Y: f32 = CANVAS_HEIGHT - 40.0;
    /// Discrete key-hold paddle movement, pixels per tick
    pub const PADDLE_KEY_STEP: f32 = 8.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 8.0;
    /// Launch speed, units per tick
    pub const BALL_LAUNCH_SPEED: f32 = 4.0;
    /// Launch angle spread from vertical, radians (±30°)
    pub const LAUNCH_ANGLE_SPREAD: f32 = std::f32::consts::PI / 6.0;
    /// Resting ball sits this far above the paddle top
    pub const BALL_REST_OFFSET: f32 = 10.0;

    /// Session defaults
    pub const STARTING_LIVES: u8 = 3;
    pub const BLOCK_SCORE: u64 = 100;

    /// Level generation bounds: blocks must lie fully inside
    /// [GEN_MARGIN, CANVAS_WIDTH - GEN_MARGIN] x [GEN_MARGIN, MAX_PLAYABLE_Y]
    pub const GEN_MARGIN: f32 = 50.0;
    pub const MAX_PLAYABLE_Y: f32 = 420.0;
    /// Fixed seed for the level-6 "explosive chaos" layout
    pub const CHAOS_SEED: u32 = 12345;
    /// First procedural level id
    pub const PROCEDURAL_ID_START: u32 = 100;
    /// Procedural difficulty cycles every this many ids
    pub const DIFFICULTY_CYCLE: u32 = 12;

    /// Particle tuning
    pub const PARTICLE_LIFE_DECAY: f32 = 0.015;
    pub const PARTICLE_GRAVITY: f32 = 0.3;
    pub const WALL_BURST: usize = 8;
    pub const PADDLE_BURST: usize = 12;
    pub const BLOCK_BURST: usize = 20;
}
