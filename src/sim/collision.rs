//! Collision detection and response
//!
//! Axis-aligned tests between the ball and the playfield rectangles. All
//! tests are interval-overlap tests on bounding boxes, not exact circular
//! distance; the difference is invisible at these block sizes.

use glam::Vec2;

use super::level::Block;
use super::state::Paddle;

/// Ball bounding box vs block bounding box overlap.
pub fn ball_hits_block(pos: Vec2, radius: f32, block: &Block) -> bool {
    block.x - radius <= pos.x
        && pos.x <= block.right() + radius
        && block.y - radius <= pos.y
        && pos.y <= block.bottom() + radius
}

/// Paddle hit test: the ball's vertical extent overlaps the paddle band and
/// its center x lies within the paddle's horizontal extent.
pub fn ball_hits_paddle(pos: Vec2, radius: f32, paddle: &Paddle) -> bool {
    paddle.x <= pos.x
        && pos.x <= paddle.x + paddle.width
        && paddle.y - radius <= pos.y
        && pos.y <= paddle.y + paddle.height
}

/// Paddle bounce: recompute direction from where the ball struck along the
/// paddle, preserving the speed magnitude exactly.
///
/// `hit` in [0, 1] maps to a reflection angle of `(hit - 0.5) * (pi / 1.5)`,
/// so a center hit goes straight up and edge hits leave at +-60 degrees. The
/// vertical component is forced upward.
pub fn paddle_reflect(pos: Vec2, vel: Vec2, paddle: &Paddle) -> Vec2 {
    let hit = ((pos.x - paddle.x) / paddle.width).clamp(0.0, 1.0);
    let angle = (hit - 0.5) * (std::f32::consts::PI / 1.5);
    let speed = vel.length();
    Vec2::new(angle.sin() * speed, -(angle.cos() * speed).abs())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::level::BlockColor;

    fn paddle() -> Paddle {
        Paddle {
            x: 340.0,
            y: PADDLE_Y,
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
        }
    }

    #[test]
    fn test_block_overlap_inflated_bbox() {
        let block = Block::new(100.0, 100.0, 60.0, 25.0, BlockColor::Cyan);

        // Center just outside the block but within ball radius
        assert!(ball_hits_block(Vec2::new(95.0, 110.0), 8.0, &block));
        // Well clear
        assert!(!ball_hits_block(Vec2::new(80.0, 110.0), 8.0, &block));
        // Inside
        assert!(ball_hits_block(Vec2::new(130.0, 112.0), 8.0, &block));
    }

    #[test]
    fn test_paddle_hit_requires_center_x_inside() {
        let p = paddle();
        let y = p.y; // top of band

        assert!(ball_hits_paddle(Vec2::new(400.0, y), 8.0, &p));
        // Center x outside the paddle misses even though the ball edge grazes
        assert!(!ball_hits_paddle(Vec2::new(p.x - 1.0, y), 8.0, &p));
        // Too high
        assert!(!ball_hits_paddle(Vec2::new(400.0, y - 20.0), 8.0, &p));
    }

    #[test]
    fn test_paddle_reflect_center_goes_straight_up() {
        let p = paddle();
        let pos = Vec2::new(p.x + p.width / 2.0, p.y);
        let out = paddle_reflect(pos, Vec2::new(3.0, 4.0), &p);

        assert!(out.x.abs() < 1e-5);
        assert!(out.y < 0.0);
        assert!((out.length() - 5.0).abs() < 1e-5);
    }

    #[test]
    fn test_paddle_reflect_edges_are_60_degrees() {
        let p = paddle();
        let speed = 4.0;

        let left = paddle_reflect(Vec2::new(p.x, p.y), Vec2::new(0.0, speed), &p);
        let right = paddle_reflect(Vec2::new(p.x + p.width, p.y), Vec2::new(0.0, speed), &p);

        let expected = std::f32::consts::PI / 3.0;
        assert!((left.x - (-expected.sin() * speed)).abs() < 1e-5);
        assert!((right.x - (expected.sin() * speed)).abs() < 1e-5);
        assert!(left.y < 0.0 && right.y < 0.0);
    }

    #[test]
    fn test_paddle_reflect_preserves_speed() {
        let p = paddle();
        for (vx, vy) in [(3.0, 4.0), (-2.5, 3.1), (0.0, 4.0), (5.0, 0.1)] {
            let vel = Vec2::new(vx, vy);
            let out = paddle_reflect(Vec2::new(p.x + 17.0, p.y), vel, &p);
            assert!((out.length() - vel.length()).abs() < 1e-4);
        }
    }
}
