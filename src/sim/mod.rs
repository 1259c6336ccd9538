//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only, one tick per rendered frame
//! - Level generation seeded solely by the level id
//! - Cosmetic randomness from the session-seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod level;
pub mod particles;
pub mod rng;
pub mod state;
pub mod tick;

pub use collision::{ball_hits_block, ball_hits_paddle, paddle_reflect};
pub use level::{Block, BlockColor, ClusterPattern, generate_level};
pub use particles::{Particle, ParticleSystem};
pub use rng::LcgRng;
pub use state::{Ball, BallState, GameEvent, GameState, Paddle, SessionStatus};
pub use tick::{TickInput, tick};
