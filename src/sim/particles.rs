//! Collision spark particles
//!
//! Purely decorative: particles never affect physics and are skipped by
//! serialization. Spawning is gated by the player's particle-effects setting.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::level::BlockColor;
use crate::consts::*;

/// One spark. `life` runs from 1 down to 0 at a fixed decay per tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub life: f32,
    pub max_life: f32,
    pub size: f32,
    pub color: BlockColor,
}

/// The live particle collection. Insertion order is preserved so renders of
/// the same session replay identically.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParticleSystem {
    pub particles: Vec<Particle>,
}

impl ParticleSystem {
    /// Spawn `count` sparks at `pos` scattering in random directions.
    /// Callers gate this on the particle-effects setting.
    pub fn spawn(&mut self, pos: Vec2, count: usize, color: BlockColor, rng: &mut Pcg32) {
        for _ in 0..count {
            let angle = rng.random_range(0.0..std::f32::consts::TAU);
            let speed = rng.random_range(2.0..5.0);
            self.particles.push(Particle {
                pos,
                vel: Vec2::new(angle.cos() * speed, angle.sin() * speed),
                life: 1.0,
                max_life: 1.0,
                size: rng.random_range(2.0..4.0),
                color,
            });
        }
    }

    /// Integrate all particles one tick and drop the expired ones.
    pub fn advance(&mut self) {
        for p in &mut self.particles {
            p.pos += p.vel;
            p.vel.y += PARTICLE_GRAVITY;
            p.life -= PARTICLE_LIFE_DECAY;
        }
        self.particles.retain(|p| p.life > 0.0);
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
