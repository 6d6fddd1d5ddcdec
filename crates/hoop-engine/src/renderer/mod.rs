pub mod snapshot;
pub mod traits;

pub use snapshot::{BallView, HoopView, Snapshot};
pub use traits::Renderer;
