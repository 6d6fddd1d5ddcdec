//! Renderer contract.
//!
//! Drawing happens outside the simulation (TypeScript Canvas2D in the browser,
//! or any native backend). A renderer only ever sees an immutable
//! [`Snapshot`]; it never touches simulation state.

use super::snapshot::Snapshot;
use crate::api::error::RenderError;

pub trait Renderer {
    /// Backend identifier (e.g., "canvas2d", "shared-buffer").
    fn backend(&self) -> &'static str;

    /// Draw one frame. An error skips this frame's drawing only; the
    /// simulation keeps advancing.
    fn present(&mut self, snapshot: &Snapshot) -> Result<(), RenderError>;
}
