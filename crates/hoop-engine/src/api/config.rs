use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::api::error::ConfigError;

/// Per-tick physics constants.
///
/// Every value is expressed "per fixed tick", not per second: gravity is added
/// to vertical velocity once per tick, friction multiplies horizontal velocity
/// once per tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Downward acceleration added to `vy` each tick (Y grows downward).
    pub gravity: f32,
    /// Multiplicative decay applied to `vx` each tick.
    pub friction: f32,
    /// Fraction of velocity kept, sign-reversed, on a wall or floor hit.
    pub bounce: f32,
    /// Drag displacement → launch velocity multiplier.
    pub launch_scale: f32,
    /// Post-bounce `|vy|` below this snaps to zero so the ball settles.
    pub rest_threshold: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: 0.5,
            friction: 0.98,
            bounce: 0.7,
            launch_scale: 0.3,
            rest_threshold: 1.0,
        }
    }
}

/// Scoring band around the hoop center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Max horizontal distance from the hoop center (exclusive).
    pub tolerance: f32,
    /// Half-height of the vertical band around the rim (exclusive).
    pub band_half_height: f32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            tolerance: 25.0,
            band_half_height: 10.0,
        }
    }
}

/// Hoop geometry in surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HoopConfig {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Default for HoopConfig {
    fn default() -> Self {
        Self {
            x: 350.0,
            y: 150.0,
            width: 80.0,
            height: 10.0,
        }
    }
}

/// Court layout: surface size, ball spawn and hoop placement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CourtConfig {
    /// Surface width in world units.
    pub width: f32,
    /// Surface height in world units.
    pub height: f32,
    pub ball_start: Vec2,
    pub ball_radius: f32,
    pub hoop: HoopConfig,
}

impl Default for CourtConfig {
    fn default() -> Self {
        Self {
            width: 500.0,
            height: 600.0,
            ball_start: Vec2::new(100.0, 400.0),
            ball_radius: 20.0,
            hoop: HoopConfig::default(),
        }
    }
}

/// Complete simulation configuration, provided once at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub physics: PhysicsConfig,
    pub scoring: ScoringConfig,
    pub court: CourtConfig,
    /// Fixed timestep in seconds (default: 1/60).
    pub fixed_dt: f32,
    /// Cap on fixed steps run for a single host frame (default: 10).
    pub max_steps_per_frame: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            physics: PhysicsConfig::default(),
            scoring: ScoringConfig::default(),
            court: CourtConfig::default(),
            fixed_dt: 1.0 / 60.0,
            max_steps_per_frame: 10,
        }
    }
}

impl SimConfig {
    /// Parse a configuration from JSON. Missing fields fall back to defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations that would produce undefined geometry.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let p = &self.physics;
        let s = &self.scoring;
        let c = &self.court;
        let named = [
            ("physics.gravity", p.gravity),
            ("physics.friction", p.friction),
            ("physics.bounce", p.bounce),
            ("physics.launch_scale", p.launch_scale),
            ("physics.rest_threshold", p.rest_threshold),
            ("scoring.tolerance", s.tolerance),
            ("scoring.band_half_height", s.band_half_height),
            ("court.width", c.width),
            ("court.height", c.height),
            ("court.ball_start.x", c.ball_start.x),
            ("court.ball_start.y", c.ball_start.y),
            ("court.ball_radius", c.ball_radius),
            ("court.hoop.x", c.hoop.x),
            ("court.hoop.y", c.hoop.y),
            ("court.hoop.width", c.hoop.width),
            ("court.hoop.height", c.hoop.height),
            ("fixed_dt", self.fixed_dt),
        ];
        if let Some(&(field, _)) = named.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ConfigError::NonFinite { field });
        }

        let positive = [
            ("court.ball_radius", c.ball_radius),
            ("court.width", c.width),
            ("court.height", c.height),
            ("fixed_dt", self.fixed_dt),
        ];
        if let Some(&(field, value)) = positive.iter().find(|(_, v)| *v <= 0.0) {
            return Err(ConfigError::NotPositive { field, value });
        }

        let unit = [
            ("physics.friction", p.friction),
            ("physics.bounce", p.bounce),
        ];
        if let Some(&(field, value)) = unit.iter().find(|(_, v)| !(0.0..=1.0).contains(v)) {
            return Err(ConfigError::OutOfRange { field, value, min: 0.0, max: 1.0 });
        }

        if p.rest_threshold < 0.0 || s.tolerance < 0.0 || s.band_half_height < 0.0 {
            return Err(ConfigError::Negative);
        }

        if c.width < 2.0 * c.ball_radius || c.height < 2.0 * c.ball_radius {
            return Err(ConfigError::SurfaceTooSmall {
                width: c.width,
                height: c.height,
                radius: c.ball_radius,
            });
        }

        if self.max_steps_per_frame == 0 {
            return Err(ConfigError::NoSteps);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_court() {
        let config = SimConfig::default();
        assert_eq!(config.physics.gravity, 0.5);
        assert_eq!(config.physics.friction, 0.98);
        assert_eq!(config.physics.bounce, 0.7);
        assert_eq!(config.physics.launch_scale, 0.3);
        assert_eq!(config.scoring.tolerance, 25.0);
        assert_eq!(config.court.ball_start, Vec2::new(100.0, 400.0));
        assert_eq!(config.court.hoop.width, 80.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_merges_with_defaults() {
        let json = r#"{
            "physics": { "gravity": 0.25 },
            "court": { "width": 800.0, "hoop": { "x": 600.0 } }
        }"#;
        let config = SimConfig::from_json(json).unwrap();
        assert_eq!(config.physics.gravity, 0.25);
        assert_eq!(config.physics.friction, 0.98);
        assert_eq!(config.court.width, 800.0);
        assert_eq!(config.court.height, 600.0);
        assert_eq!(config.court.hoop.x, 600.0);
        assert_eq!(config.court.hoop.y, 150.0);
    }

    #[test]
    fn empty_json_is_default() {
        let config = SimConfig::from_json("{}").unwrap();
        assert_eq!(config, SimConfig::default());
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = SimConfig::from_json("{ physics: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn zero_radius_rejected() {
        let json = r#"{ "court": { "ball_radius": 0.0 } }"#;
        let err = SimConfig::from_json(json).unwrap_err();
        assert!(matches!(err, ConfigError::NotPositive { field: "court.ball_radius", .. }));
    }

    #[test]
    fn bounce_above_one_rejected() {
        let mut config = SimConfig::default();
        config.physics.bounce = 1.5;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::OutOfRange { field: "physics.bounce", .. })
        ));
    }

    #[test]
    fn non_finite_gravity_rejected() {
        let mut config = SimConfig::default();
        config.physics.gravity = f32::NAN;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonFinite { field: "physics.gravity" })
        ));
    }

    #[test]
    fn surface_smaller_than_ball_rejected() {
        let mut config = SimConfig::default();
        config.court.width = 30.0;
        assert!(matches!(config.validate(), Err(ConfigError::SurfaceTooSmall { .. })));
    }

    #[test]
    fn zero_steps_per_frame_rejected() {
        let mut config = SimConfig::default();
        config.max_steps_per_frame = 0;
        assert!(matches!(config.validate(), Err(ConfigError::NoSteps)));
    }
}
