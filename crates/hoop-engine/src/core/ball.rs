use glam::Vec2;

use crate::api::config::{CourtConfig, HoopConfig};

/// The projectile. Fields are crate-private: only the simulation mutates it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub(crate) pos: Vec2,
    pub(crate) vel: Vec2,
    pub(crate) radius: f32,
    pub(crate) dragging: bool,
}

impl Ball {
    /// A ball at rest at `pos`.
    pub fn new(pos: Vec2, radius: f32) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            radius,
            dragging: false,
        }
    }

    pub fn from_court(court: &CourtConfig) -> Self {
        Self::new(court.ball_start, court.ball_radius)
    }

    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    pub fn vel(&self) -> Vec2 {
        self.vel
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Strict hit test: the point lies inside the ball's circle.
    pub fn contains(&self, point: Vec2) -> bool {
        self.pos.distance(point) < self.radius
    }
}

/// The target. Static for the lifetime of a match.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hoop {
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
}

impl Hoop {
    pub fn new(pos: Vec2, width: f32, height: f32) -> Self {
        Self { pos, width, height }
    }

    pub fn center_x(&self) -> f32 {
        self.pos.x + self.width / 2.0
    }

    /// Rim height (the scoring band is centered on this).
    pub fn rim_y(&self) -> f32 {
        self.pos.y
    }
}

impl From<&HoopConfig> for Hoop {
    fn from(c: &HoopConfig) -> Self {
        Self::new(Vec2::new(c.x, c.y), c.width, c.height)
    }
}

/// Size of the drawing surface the ball is confined to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    pub width: f32,
    pub height: f32,
}

impl Surface {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// A surface is usable only with finite, positive dimensions.
    pub fn is_ready(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    /// Ready, and large enough to contain a ball of `radius` on both axes.
    pub fn fits(&self, radius: f32) -> bool {
        self.is_ready() && self.width >= 2.0 * radius && self.height >= 2.0 * radius
    }
}
