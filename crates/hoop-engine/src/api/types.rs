use bytemuck::{Pod, Zeroable};

/// A sound cue emitted by the simulation.
/// The numeric value maps to a host-defined sound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
pub struct SoundEvent(pub u32);

impl SoundEvent {
    pub const SWISH: SoundEvent = SoundEvent(1);
    pub const BOUNCE: SoundEvent = SoundEvent(2);
}

/// A simulation event communicated to the host via the shared buffer.
/// Generic container: `kind` identifies the event, `a/b/c` carry payload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct GameEvent {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl GameEvent {
    pub const FLOATS: usize = 4;

    /// Ball passed down through the hoop. Payload: ball x, ball y.
    pub const KIND_SCORE: f32 = 1.0;
    /// Ball released from a drag. Payload: launch vx, launch vy.
    pub const KIND_LAUNCH: f32 = 2.0;

    pub fn score(x: f32, y: f32) -> Self {
        Self { kind: Self::KIND_SCORE, a: x, b: y, c: 0.0 }
    }

    pub fn launch(vx: f32, vy: f32) -> Self {
        Self { kind: Self::KIND_LAUNCH, a: vx, b: vy, c: 0.0 }
    }
}
