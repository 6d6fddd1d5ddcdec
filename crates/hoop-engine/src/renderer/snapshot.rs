use bytemuck::{Pod, Zeroable};

/// Per-tick view of the ball for the renderer.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct BallView {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    /// 1.0 while the pointer holds the ball, else 0.0.
    pub dragging: f32,
}

impl BallView {
    pub fn is_dragging(&self) -> bool {
        self.dragging != 0.0
    }
}

/// Hoop geometry for the renderer (backboard and net are derived host-side).
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct HoopView {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Read-only state published once per frame.
/// Must match the host protocol: 12 floats = 48 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct Snapshot {
    pub ball: BallView,
    pub hoop: HoopView,
    pub surface_width: f32,
    pub surface_height: f32,
    /// Fixed ticks since the simulation was constructed.
    pub tick: f32,
    /// Interpolation alpha between the last two ticks (0.0 to 1.0).
    pub alpha: f32,
}

impl Snapshot {
    pub const FLOATS: usize = 12;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;

    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(std::slice::from_ref(self))
    }
}
