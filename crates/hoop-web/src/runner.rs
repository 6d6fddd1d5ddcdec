use hoop_engine::{
    ConfigError, DragTransition, FrameData, FrameScheduler, FrameToken, InputError,
    MatchController, ProtocolLayout, RenderError, Renderer, SimConfig, Simulation, Snapshot,
    Surface,
};
use hoop_engine::bridge::protocol::write_frame;

/// Match state owned by the host page: whether play is allowed, and scores
/// not yet collected by JavaScript.
#[derive(Debug, Default)]
pub struct Scoreboard {
    active: bool,
    pending: u32,
    total: u32,
}

impl Scoreboard {
    pub fn total(&self) -> u32 {
        self.total
    }

    /// Scores since the last call.
    pub fn take_pending(&mut self) -> u32 {
        std::mem::take(&mut self.pending)
    }
}

impl MatchController for Scoreboard {
    fn is_active(&self) -> bool {
        self.active
    }

    fn on_score(&mut self) {
        self.pending += 1;
        self.total += 1;
    }
}

/// Renderer that stages the snapshot for the shared buffer. The host draws
/// from the buffer on its own schedule.
#[derive(Debug, Default)]
struct BufferRenderer {
    latest: Option<Snapshot>,
}

impl Renderer for BufferRenderer {
    fn backend(&self) -> &'static str {
        "shared-buffer"
    }

    fn present(&mut self, snapshot: &Snapshot) -> Result<(), RenderError> {
        let surface = Surface::new(snapshot.surface_width, snapshot.surface_height);
        if !surface.fits(snapshot.ball.radius) {
            self.latest = None;
            return Err(RenderError::SurfaceUnavailable);
        }
        self.latest = Some(*snapshot);
        Ok(())
    }
}

/// Wires a [`Simulation`] to the browser loop.
///
/// The demo crate creates a `thread_local!` SimRunner and exports free
/// functions via `#[wasm_bindgen]` (see [`crate::export_simulation!`]).
pub struct SimRunner {
    config: SimConfig,
    sim: Simulation,
    scheduler: FrameScheduler,
    token: Option<FrameToken>,
    scoreboard: Scoreboard,
    renderer: BufferRenderer,
    layout: ProtocolLayout,
    buffer: Vec<f32>,
    frame: u32,
}

impl SimRunner {
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        let sim = Simulation::new(config.clone())?;
        let scheduler = FrameScheduler::new(&config);
        let layout = ProtocolLayout::default();
        let buffer = layout.alloc();
        Ok(Self {
            config,
            sim,
            scheduler,
            token: None,
            scoreboard: Scoreboard::default(),
            renderer: BufferRenderer::default(),
            layout,
            buffer,
            frame: 0,
        })
    }

    /// Build from a JSON override of the default config.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Self::new(SimConfig::from_json(json)?)
    }

    /// Begin ticking. The previous run's token is invalidated.
    pub fn start(&mut self) {
        self.token = Some(self.scheduler.start());
        self.set_active(true);
        self.publish();
    }

    /// Stop ticking. Safe to call when already stopped.
    pub fn stop(&mut self) {
        self.scheduler.cancel();
        self.token = None;
        self.set_active(false);
    }

    pub fn is_running(&self) -> bool {
        self.scheduler.is_running()
    }

    /// Open or close the match without stopping the loop.
    pub fn set_active(&mut self, active: bool) {
        self.scoreboard.active = active;
        self.sim.set_active(active);
    }

    /// Throw away the simulation and start over from the configured court.
    pub fn restart(&mut self) -> Result<(), ConfigError> {
        let running = self.is_running();
        self.stop();
        self.sim = Simulation::new(self.config.clone())?;
        self.scoreboard = Scoreboard::default();
        self.frame = 0;
        if running {
            self.start();
        } else {
            self.publish();
        }
        log::info!("simulation restarted");
        Ok(())
    }

    /// Run one host frame of `dt` seconds and repack the shared buffer.
    pub fn tick(&mut self, dt: f32) {
        let Some(token) = self.token else {
            return;
        };
        let report = self.scheduler.frame(token, dt, &mut self.sim, &mut self.scoreboard);
        if report.cancelled {
            return;
        }
        if report.not_ready {
            log::warn!("frame {}: surface not ready, tick skipped", self.frame);
        }
        self.frame = self.frame.wrapping_add(1);
        self.publish();
    }

    fn publish(&mut self) {
        self.scheduler.publish(&self.sim, &mut self.renderer);
        let running = self.is_running();
        write_frame(
            &self.layout,
            &mut self.buffer,
            &FrameData {
                frame: self.frame,
                running,
                snapshot: self.renderer.latest.as_ref(),
                sounds: self.sim.sounds(),
                events: self.sim.events(),
            },
        );
        self.sim.clear_frame_data();
    }

    pub fn set_surface(&mut self, width: f32, height: f32) {
        self.sim.set_surface(width, height);
    }

    // ---- Pointer input ----

    pub fn pointer_down(&mut self, x: f32, y: f32) -> Result<DragTransition, InputError> {
        self.sim.pointer_down(x, y)
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) -> Result<DragTransition, InputError> {
        self.sim.pointer_move(x, y)
    }

    pub fn pointer_up(&mut self, x: f32, y: f32) -> Result<DragTransition, InputError> {
        self.sim.pointer_up(x, y)
    }

    pub fn pointer_leave(&mut self) -> DragTransition {
        self.sim.pointer_leave()
    }

    // ---- Accessors ----

    pub fn simulation(&self) -> &Simulation {
        &self.sim
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    pub fn take_score_count(&mut self) -> u32 {
        self.scoreboard.take_pending()
    }

    pub fn buffer(&self) -> &[f32] {
        &self.buffer
    }

    pub fn buffer_ptr(&self) -> *const f32 {
        self.buffer.as_ptr()
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.layout.buffer_total_floats as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hoop_engine::bridge::protocol::{
        HEADER_EVENT_COUNT, HEADER_FRAME_COUNTER, HEADER_RUNNING, HEADER_SNAPSHOT_VALID,
    };
    use hoop_engine::GameEvent;

    const DT: f32 = 1.0 / 60.0;

    fn runner() -> SimRunner {
        SimRunner::new(SimConfig::default()).unwrap()
    }

    #[test]
    fn tick_before_start_does_nothing() {
        let mut r = runner();
        r.tick(DT);
        assert_eq!(r.simulation().ticks(), 0);
        assert_eq!(r.buffer()[HEADER_FRAME_COUNTER], 0.0);
    }

    #[test]
    fn tick_advances_and_packs_snapshot() {
        let mut r = runner();
        r.start();
        r.tick(DT);
        let layout = ProtocolLayout::default();
        let buf = r.buffer();
        assert_eq!(buf[HEADER_FRAME_COUNTER], 1.0);
        assert_eq!(buf[HEADER_SNAPSHOT_VALID], 1.0);
        assert_eq!(buf[HEADER_RUNNING], 1.0);
        assert_eq!(buf[layout.snapshot_offset], 100.0);
        assert_eq!(buf[layout.snapshot_offset + 1], 400.5);
    }

    #[test]
    fn stop_freezes_the_ball() {
        let mut r = runner();
        r.start();
        r.tick(DT);
        r.stop();
        r.tick(DT);
        r.tick(DT);
        assert_eq!(r.simulation().ticks(), 1);
        assert!(!r.is_running());
    }

    #[test]
    fn zero_surface_invalidates_snapshot() {
        let mut r = runner();
        r.set_surface(0.0, 0.0);
        r.start();
        r.tick(DT);
        assert_eq!(r.simulation().ticks(), 0);
        assert_eq!(r.buffer()[HEADER_SNAPSHOT_VALID], 0.0);
    }

    #[test]
    fn non_finite_surface_invalidates_snapshot() {
        let mut r = runner();
        r.set_surface(f32::NAN, 600.0);
        r.start();
        r.tick(DT);
        assert_eq!(r.simulation().ticks(), 0);
        assert_eq!(r.buffer()[HEADER_SNAPSHOT_VALID], 0.0);
    }

    #[test]
    fn surface_smaller_than_ball_invalidates_snapshot() {
        let mut r = runner();
        r.set_surface(30.0, 600.0);
        r.start();
        r.tick(DT);
        assert_eq!(r.simulation().ticks(), 0);
        assert_eq!(r.buffer()[HEADER_SNAPSHOT_VALID], 0.0);
    }

    #[test]
    fn launch_event_reaches_buffer_on_next_frame() {
        let mut r = runner();
        r.start();
        assert_eq!(
            r.pointer_down(100.0, 400.0).unwrap(),
            DragTransition::Started
        );
        r.pointer_move(80.0, 420.0).unwrap();
        r.pointer_up(80.0, 420.0).unwrap();
        r.tick(DT);
        let layout = ProtocolLayout::default();
        assert_eq!(r.buffer()[HEADER_EVENT_COUNT], 1.0);
        assert_eq!(r.buffer()[layout.event_data_offset], GameEvent::KIND_LAUNCH);

        // Cleared after packing
        r.tick(DT);
        assert_eq!(r.buffer()[HEADER_EVENT_COUNT], 0.0);
    }

    #[test]
    fn scores_are_collected_once() {
        let mut config = SimConfig::default();
        config.court.ball_start = glam::Vec2::new(390.0, 100.0);
        let mut r = SimRunner::new(config).unwrap();
        r.start();
        for _ in 0..300 {
            r.tick(DT);
        }
        assert_eq!(r.take_score_count(), 1);
        assert_eq!(r.take_score_count(), 0);
        assert_eq!(r.scoreboard().total(), 1);
    }

    #[test]
    fn inactive_match_ignores_drags() {
        let mut r = runner();
        r.start();
        r.set_active(false);
        assert_eq!(
            r.pointer_down(100.0, 400.0).unwrap(),
            DragTransition::Ignored
        );
    }

    #[test]
    fn restart_rebuilds_from_config() {
        let mut r = runner();
        r.start();
        for _ in 0..30 {
            r.tick(DT);
        }
        r.restart().unwrap();
        assert!(r.is_running());
        assert_eq!(r.simulation().ticks(), 0);
        assert_eq!(r.simulation().ball().pos(), glam::Vec2::new(100.0, 400.0));
    }

    #[test]
    fn bad_json_is_rejected() {
        assert!(matches!(
            SimRunner::from_json("{"),
            Err(ConfigError::Parse(_))
        ));
        assert!(SimRunner::from_json(r#"{"physics":{"gravity":0.8}}"#).is_ok());
    }
}
