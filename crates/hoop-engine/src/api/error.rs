use thiserror::Error;

/// Configuration could not be loaded or describes impossible geometry.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{field} must be finite")]
    NonFinite { field: &'static str },

    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: f32 },

    #[error("{field} must be within [{min}, {max}], got {value}")]
    OutOfRange {
        field: &'static str,
        value: f32,
        min: f32,
        max: f32,
    },

    #[error("rest threshold and scoring band must not be negative")]
    Negative,

    #[error("surface {width}x{height} cannot hold a ball of radius {radius}")]
    SurfaceTooSmall { width: f32, height: f32, radius: f32 },

    #[error("max_steps_per_frame must be at least 1")]
    NoSteps,
}

/// A pointer event was rejected before touching simulation state.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum InputError {
    #[error("pointer coordinates must be finite, got ({x}, {y})")]
    NonFinite { x: f32, y: f32 },
}

/// The renderer could not present a snapshot.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RenderError {
    #[error("drawing surface unavailable")]
    SurfaceUnavailable,

    #[error("{backend} backend failed: {reason}")]
    Backend {
        backend: &'static str,
        reason: String,
    },
}
