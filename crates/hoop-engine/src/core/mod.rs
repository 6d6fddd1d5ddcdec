pub mod ball;
pub mod collision;
pub mod physics;
pub mod scheduler;
pub mod scoring;
pub mod simulation;
pub mod time;
