pub mod api;
pub mod core;
pub mod input;
pub mod renderer;
pub mod bridge;

// Re-export key types at crate root for convenience
pub use api::config::{SimConfig, PhysicsConfig, ScoringConfig, CourtConfig, HoopConfig};
pub use api::error::{ConfigError, InputError, RenderError};
pub use api::types::{GameEvent, SoundEvent};
pub use core::ball::{Ball, Hoop, Surface};
pub use core::collision::Contacts;
pub use core::physics::Motion;
pub use core::scheduler::{FrameScheduler, FrameToken, FrameReport, MatchController};
pub use core::scoring::ScoringDetector;
pub use core::simulation::{Simulation, StepOutcome};
pub use core::time::FixedTimestep;
pub use input::drag::{DragController, DragState, DragTransition};
pub use input::event::PointerEvent;
pub use renderer::{Renderer, Snapshot, BallView, HoopView};
pub use bridge::protocol::{ProtocolLayout, FrameData, write_frame};
