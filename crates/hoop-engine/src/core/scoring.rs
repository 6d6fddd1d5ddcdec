//! Hoop pass detection.
//!
//! The band test is point-sampled every tick, so a slow ball can sit inside
//! the band for several ticks in a row. A per-pass latch turns that into a
//! single notification: it is set when a score fires and only cleared once
//! the ball's y leaves the vertical band.

use glam::Vec2;

use crate::api::config::ScoringConfig;
use crate::core::ball::Hoop;

#[derive(Debug, Clone)]
pub struct ScoringDetector {
    config: ScoringConfig,
    latched: bool,
}

impl ScoringDetector {
    pub fn new(config: ScoringConfig) -> Self {
        Self {
            config,
            latched: false,
        }
    }

    /// Check the resolved position of this tick against the hoop.
    ///
    /// `prev_vy` is the vertical velocity before the tick; only a descending
    /// ball (`prev_vy > 0`) can score. Returns true at most once per pass.
    pub fn evaluate(&mut self, pos: Vec2, prev_vy: f32, hoop: &Hoop) -> bool {
        let rim = hoop.rim_y();
        let in_band = pos.y > rim - self.config.band_half_height
            && pos.y < rim + self.config.band_half_height;

        if !in_band {
            self.latched = false;
            return false;
        }

        let centered = (pos.x - hoop.center_x()).abs() < self.config.tolerance;
        if centered && prev_vy > 0.0 && !self.latched {
            self.latched = true;
            return true;
        }
        false
    }

    /// Re-arm for a new throw.
    pub fn reset(&mut self) {
        self.latched = false;
    }

    pub fn is_latched(&self) -> bool {
        self.latched
    }
}
