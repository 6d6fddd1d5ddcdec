/// Shared buffer layout read by the host renderer.
/// Hosts map it as a Float32Array over wasm memory.
///
/// Layout (all values in f32 / 4 bytes):
/// ```text
/// [Header: 8 floats]
/// [Snapshot: 12 floats]
/// [Sounds: max_sounds × 1 float]
/// [Events: max_events × 4 floats]
/// ```
///
/// Capacities are written into the header on every frame.
/// The host reads them from the header to compute offsets.

use crate::api::types::{GameEvent, SoundEvent};
use crate::renderer::snapshot::Snapshot;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 8;

/// Header field indices.
pub const HEADER_PROTOCOL_VERSION: usize = 0;
pub const HEADER_FRAME_COUNTER: usize = 1;
pub const HEADER_SNAPSHOT_VALID: usize = 2;
pub const HEADER_MAX_SOUNDS: usize = 3;
pub const HEADER_SOUND_COUNT: usize = 4;
pub const HEADER_MAX_EVENTS: usize = 5;
pub const HEADER_EVENT_COUNT: usize = 6;
pub const HEADER_RUNNING: usize = 7;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Runtime-computed buffer layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    /// Maximum sound events per frame.
    pub max_sounds: usize,
    /// Maximum game events per frame.
    pub max_events: usize,

    /// Offset (in floats) where the snapshot begins.
    pub snapshot_offset: usize,
    /// Offset (in floats) where sound data begins.
    pub sound_data_offset: usize,
    /// Offset (in floats) where event data begins.
    pub event_data_offset: usize,

    /// Total buffer size in floats.
    pub buffer_total_floats: usize,
    /// Total buffer size in bytes.
    pub buffer_total_bytes: usize,
}

impl ProtocolLayout {
    pub fn new(max_sounds: usize, max_events: usize) -> Self {
        let snapshot_offset = HEADER_FLOATS;
        let sound_data_offset = snapshot_offset + Snapshot::FLOATS;
        let event_data_offset = sound_data_offset + max_sounds;
        let buffer_total_floats = event_data_offset + max_events * GameEvent::FLOATS;

        Self {
            max_sounds,
            max_events,
            snapshot_offset,
            sound_data_offset,
            event_data_offset,
            buffer_total_floats,
            buffer_total_bytes: buffer_total_floats * 4,
        }
    }

    /// Allocate a zeroed buffer of the right size.
    pub fn alloc(&self) -> Vec<f32> {
        vec![0.0; self.buffer_total_floats]
    }
}

impl Default for ProtocolLayout {
    fn default() -> Self {
        Self::new(16, 16)
    }
}

/// One frame's worth of data to pack.
pub struct FrameData<'a> {
    pub frame: u32,
    pub running: bool,
    /// `None` when there is nothing valid to draw this frame.
    pub snapshot: Option<&'a Snapshot>,
    pub sounds: &'a [SoundEvent],
    pub events: &'a [GameEvent],
}

/// Pack a frame into `buf`. Sounds and events beyond capacity are dropped
/// (and logged).
pub fn write_frame(layout: &ProtocolLayout, buf: &mut [f32], data: &FrameData<'_>) {
    debug_assert!(buf.len() >= layout.buffer_total_floats);

    let sound_count = data.sounds.len().min(layout.max_sounds);
    let event_count = data.events.len().min(layout.max_events);
    if sound_count < data.sounds.len() || event_count < data.events.len() {
        log::warn!(
            "frame {}: dropped {} sounds, {} events over capacity",
            data.frame,
            data.sounds.len() - sound_count,
            data.events.len() - event_count
        );
    }

    buf[HEADER_PROTOCOL_VERSION] = PROTOCOL_VERSION;
    buf[HEADER_FRAME_COUNTER] = data.frame as f32;
    buf[HEADER_SNAPSHOT_VALID] = if data.snapshot.is_some() { 1.0 } else { 0.0 };
    buf[HEADER_MAX_SOUNDS] = layout.max_sounds as f32;
    buf[HEADER_SOUND_COUNT] = sound_count as f32;
    buf[HEADER_MAX_EVENTS] = layout.max_events as f32;
    buf[HEADER_EVENT_COUNT] = event_count as f32;
    buf[HEADER_RUNNING] = if data.running { 1.0 } else { 0.0 };

    if let Some(snapshot) = data.snapshot {
        let start = layout.snapshot_offset;
        buf[start..start + Snapshot::FLOATS].copy_from_slice(snapshot.as_floats());
    }

    for (slot, sound) in buf[layout.sound_data_offset..]
        .iter_mut()
        .zip(&data.sounds[..sound_count])
    {
        *slot = sound.0 as f32;
    }

    let events: &[f32] = bytemuck::cast_slice(&data.events[..event_count]);
    let start = layout.event_data_offset;
    buf[start..start + events.len()].copy_from_slice(events);
}
