//! Frame scheduler: turns host paint callbacks into fixed simulation ticks.
//!
//! Each host frame runs zero or more [`Simulation::step`] calls through a
//! [`FixedTimestep`], so physics does not depend on the refresh rate. Starting
//! hands out a [`FrameToken`]; cancelling invalidates every token, so a paint
//! callback that was already queued becomes a no-op instead of mutating state
//! after teardown.

use crate::api::config::SimConfig;
use crate::core::simulation::{Simulation, StepOutcome};
use crate::core::time::FixedTimestep;
use crate::renderer::traits::Renderer;

/// Owns score, time and lifecycle. The simulation only reports passes.
pub trait MatchController {
    /// Whether the match is running. Read at the start of every frame.
    fn is_active(&self) -> bool;

    /// Called once per pass of the ball down through the hoop.
    fn on_score(&mut self);
}

/// Handle for one run of the scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameToken(u64);

/// What one host frame did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameReport {
    /// The token was stale or the scheduler stopped; nothing ran.
    pub cancelled: bool,
    /// Fixed ticks that advanced the ball.
    pub steps: u32,
    /// Scoring notifications forwarded this frame.
    pub scores: u32,
    /// A tick was skipped because the surface was not ready.
    pub not_ready: bool,
}

pub struct FrameScheduler {
    timestep: FixedTimestep,
    running: bool,
    generation: u64,
}

impl FrameScheduler {
    pub fn new(config: &SimConfig) -> Self {
        Self {
            timestep: FixedTimestep::new(config.fixed_dt, config.max_steps_per_frame),
            running: false,
            generation: 0,
        }
    }

    /// Begin a new run. Any token from a previous run stops working.
    pub fn start(&mut self) -> FrameToken {
        self.generation += 1;
        self.running = true;
        self.timestep.reset();
        log::debug!("scheduler started (generation {})", self.generation);
        FrameToken(self.generation)
    }

    /// Stop synchronously. No tick runs after this returns until `start`.
    pub fn cancel(&mut self) {
        if self.running {
            log::debug!("scheduler cancelled (generation {})", self.generation);
        }
        self.running = false;
        self.generation += 1;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Whether `token` belongs to the current run.
    pub fn is_current(&self, token: FrameToken) -> bool {
        self.running && token.0 == self.generation
    }

    /// Run the fixed ticks owed for `frame_dt` seconds of host time.
    pub fn frame<C: MatchController + ?Sized>(
        &mut self,
        token: FrameToken,
        frame_dt: f32,
        sim: &mut Simulation,
        controller: &mut C,
    ) -> FrameReport {
        if !self.is_current(token) {
            return FrameReport {
                cancelled: true,
                ..FrameReport::default()
            };
        }

        sim.set_active(controller.is_active());

        let mut report = FrameReport::default();
        let owed = self.timestep.accumulate(frame_dt);
        for _ in 0..owed {
            match sim.step() {
                StepOutcome::Advanced { scored, .. } => {
                    report.steps += 1;
                    if scored {
                        report.scores += 1;
                        controller.on_score();
                    }
                }
                StepOutcome::NotReady => {
                    report.not_ready = true;
                    break;
                }
                StepOutcome::Inactive | StepOutcome::Held | StepOutcome::Rejected => {}
            }
        }
        report
    }

    /// Hand the current state to the renderer. A failed draw is logged and
    /// skipped; it never stops the simulation.
    ///
    /// Events and sounds are left in place for the host to read. Call
    /// [`Simulation::clear_frame_data`] once they have been consumed.
    pub fn publish<R: Renderer + ?Sized>(&self, sim: &Simulation, renderer: &mut R) -> bool {
        let snapshot = sim.snapshot(self.timestep.alpha());
        match renderer.present(&snapshot) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("{} renderer skipped a frame: {e}", renderer.backend());
                false
            }
        }
    }

    pub fn fixed_dt(&self) -> f32 {
        self.timestep.dt()
    }
}
