//! Semi-implicit Euler integration, one fixed tick at a time.

use glam::Vec2;

use crate::api::config::PhysicsConfig;
use crate::core::ball::Ball;

/// A proposed ball state that has not been committed yet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Motion {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Motion {
    pub fn is_finite(&self) -> bool {
        self.pos.is_finite() && self.vel.is_finite()
    }
}

/// Advance a free-flying ball by one tick.
///
/// Gravity is applied to `vy` first and the new `vy` moves the ball
/// (symplectic Euler). Horizontal motion uses the pre-friction `vx`, then
/// friction decays `vx`.
pub fn integrate(ball: &Ball, physics: &PhysicsConfig) -> Motion {
    let vy = ball.vel.y + physics.gravity;
    let pos = Vec2::new(ball.pos.x + ball.vel.x, ball.pos.y + vy);
    let vx = ball.vel.x * physics.friction;
    Motion {
        pos,
        vel: Vec2::new(vx, vy),
    }
}
