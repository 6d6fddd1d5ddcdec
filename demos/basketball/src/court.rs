use glam::Vec2;
use hoop_engine::{CourtConfig, HoopConfig, SimConfig};

const COURT_W: f32 = 500.0;
const COURT_H: f32 = 600.0;

/// Half-court: ball resting low on the left, hoop high on the right.
pub fn config() -> SimConfig {
    SimConfig {
        court: CourtConfig {
            width: COURT_W,
            height: COURT_H,
            ball_start: Vec2::new(100.0, 400.0),
            ball_radius: 20.0,
            hoop: HoopConfig {
                x: 350.0,
                y: 150.0,
                width: 80.0,
                height: 10.0,
            },
        },
        ..SimConfig::default()
    }
}
