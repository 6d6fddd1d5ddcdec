pub mod drag;
pub mod event;
