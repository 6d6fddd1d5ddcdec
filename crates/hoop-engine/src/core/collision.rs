//! Wall and floor response for a tentative motion. There is no ceiling.

use crate::api::config::PhysicsConfig;
use crate::core::ball::Surface;
use crate::core::physics::Motion;

/// Which boundaries were hit while resolving a tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Contacts {
    pub wall: bool,
    pub floor: bool,
}

impl Contacts {
    pub fn any(&self) -> bool {
        self.wall || self.floor
    }
}

/// Clamp `motion` inside the surface and reflect velocity on contact.
pub fn resolve(
    motion: &mut Motion,
    radius: f32,
    surface: &Surface,
    physics: &PhysicsConfig,
) -> Contacts {
    let mut contacts = Contacts::default();

    let left = motion.pos.x - radius < 0.0;
    let right = motion.pos.x + radius > surface.width;
    if left || right {
        motion.vel.x = -motion.vel.x * physics.bounce;
        motion.pos.x = if left { radius } else { surface.width - radius };
        contacts.wall = true;
    }

    if motion.pos.y + radius > surface.height {
        motion.vel.y = -motion.vel.y * physics.bounce;
        motion.pos.y = surface.height - radius;
        // Settle instead of bouncing forever at shrinking amplitude
        if motion.vel.y.abs() < physics.rest_threshold {
            motion.vel.y = 0.0;
        }
        contacts.floor = true;
    }

    contacts
}
