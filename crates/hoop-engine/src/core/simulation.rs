use glam::Vec2;

use crate::api::config::SimConfig;
use crate::api::error::{ConfigError, InputError};
use crate::api::types::{GameEvent, SoundEvent};
use crate::core::ball::{Ball, Hoop, Surface};
use crate::core::collision::{self, Contacts};
use crate::core::physics;
use crate::core::scoring::ScoringDetector;
use crate::input::drag::{DragController, DragState, DragTransition};
use crate::input::event::PointerEvent;
use crate::renderer::snapshot::{BallView, HoopView, Snapshot};

/// Most events (and, separately, sounds) held between drains.
pub const MAX_PENDING: usize = 64;

/// Result of a single fixed tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepOutcome {
    /// No usable surface; nothing happened.
    NotReady,
    /// The match is not active; nothing happened.
    Inactive,
    /// The pointer holds the ball; physics suspended.
    Held,
    /// The tentative update was non-finite and was discarded.
    Rejected,
    /// The ball moved.
    Advanced { scored: bool, contacts: Contacts },
}

/// The ball-and-hoop simulation.
///
/// Owns all mutable state. Hosts drive it through pointer operations and
/// [`Simulation::step`], and read it through accessors or [`Simulation::snapshot`].
/// There is no reset: construct a new simulation to restart a match.
pub struct Simulation {
    config: SimConfig,
    ball: Ball,
    hoop: Hoop,
    surface: Option<Surface>,
    drag: DragController,
    scoring: ScoringDetector,
    active: bool,
    ticks: u64,
    events: Vec<GameEvent>,
    sounds: Vec<SoundEvent>,
}

impl Simulation {
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let court = &config.court;
        Ok(Self {
            ball: Ball::from_court(court),
            hoop: Hoop::from(&court.hoop),
            surface: Some(Surface::new(court.width, court.height)),
            drag: DragController::new(config.physics.launch_scale),
            scoring: ScoringDetector::new(config.scoring),
            active: false,
            ticks: 0,
            events: Vec::with_capacity(8),
            sounds: Vec::with_capacity(8),
            config,
        })
    }

    // -- Match gating --

    /// Set by the match controller. Inactive simulations ignore new drags
    /// and do not integrate.
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    // -- Surface --

    /// Attach or resize the drawing surface. Zero-sized surfaces are kept but
    /// make every tick `NotReady`.
    pub fn set_surface(&mut self, width: f32, height: f32) {
        self.surface = Some(Surface::new(width, height));
    }

    /// Drop the surface (e.g. the canvas was torn down).
    pub fn detach_surface(&mut self) {
        self.surface = None;
    }

    fn ready_surface(&self) -> Option<Surface> {
        let radius = self.ball.radius;
        self.surface.filter(|s| s.fits(radius))
    }

    // -- Pointer input --

    pub fn handle_pointer(&mut self, event: PointerEvent) -> Result<DragTransition, InputError> {
        match event {
            PointerEvent::Down { x, y } => self.pointer_down(x, y),
            PointerEvent::Move { x, y } => self.pointer_move(x, y),
            PointerEvent::Up { x, y } => self.pointer_up(x, y),
            PointerEvent::Leave => Ok(self.pointer_leave()),
        }
    }

    pub fn pointer_down(&mut self, x: f32, y: f32) -> Result<DragTransition, InputError> {
        let at = finite_point(x, y)?;
        if !self.active {
            return Ok(DragTransition::Ignored);
        }
        let t = self.drag.press(&mut self.ball, at);
        if t == DragTransition::Started {
            // A new throw is a new pass through the hoop
            self.scoring.reset();
            log::debug!("drag started at ({x}, {y})");
        }
        Ok(t)
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) -> Result<DragTransition, InputError> {
        let at = finite_point(x, y)?;
        Ok(self.drag.drag_to(&mut self.ball, at))
    }

    pub fn pointer_up(&mut self, x: f32, y: f32) -> Result<DragTransition, InputError> {
        let at = finite_point(x, y)?;
        Ok(self.finish_drag(Some(at)))
    }

    /// Same as pointer-up at the last known pointer position, so a drag that
    /// exits the surface never sticks.
    pub fn pointer_leave(&mut self) -> DragTransition {
        self.finish_drag(None)
    }

    fn finish_drag(&mut self, at: Option<Vec2>) -> DragTransition {
        let t = self.drag.release(&mut self.ball, at);
        if let DragTransition::Released { launch } = t {
            log::debug!("launched with velocity ({}, {})", launch.x, launch.y);
            self.push_event(GameEvent::launch(launch.x, launch.y));
        }
        t
    }

    // -- Stepping --

    /// Advance one fixed tick: integrate, resolve collisions, check scoring.
    pub fn step(&mut self) -> StepOutcome {
        let Some(surface) = self.ready_surface() else {
            log::trace!("tick skipped: surface not ready");
            return StepOutcome::NotReady;
        };
        if !self.active {
            return StepOutcome::Inactive;
        }
        if self.ball.dragging {
            return StepOutcome::Held;
        }

        let params = &self.config.physics;
        let prev_vy = self.ball.vel.y;
        let mut motion = physics::integrate(&self.ball, params);
        let contacts = collision::resolve(&mut motion, self.ball.radius, &surface, params);

        if !motion.is_finite() {
            log::warn!(
                "discarding non-finite update pos={:?} vel={:?}; keeping previous state",
                motion.pos,
                motion.vel
            );
            return StepOutcome::Rejected;
        }

        let scored = self.scoring.evaluate(motion.pos, prev_vy, &self.hoop);

        self.ball.pos = motion.pos;
        self.ball.vel = motion.vel;
        self.ticks += 1;

        if scored {
            log::info!("score at ({:.1}, {:.1})", motion.pos.x, motion.pos.y);
            self.push_event(GameEvent::score(motion.pos.x, motion.pos.y));
            self.push_sound(SoundEvent::SWISH);
        }
        if contacts.wall || (contacts.floor && motion.vel.y != 0.0) {
            self.push_sound(SoundEvent::BOUNCE);
        }

        StepOutcome::Advanced { scored, contacts }
    }

    // -- Read-only access --

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn hoop(&self) -> &Hoop {
        &self.hoop
    }

    pub fn surface(&self) -> Option<Surface> {
        self.surface
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn drag_state(&self) -> DragState {
        self.drag.state()
    }

    /// Fixed ticks that advanced the ball.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Build the renderer's view of the current state.
    pub fn snapshot(&self, alpha: f32) -> Snapshot {
        let surface = self.surface.unwrap_or(Surface::new(0.0, 0.0));
        Snapshot {
            ball: BallView {
                x: self.ball.pos.x,
                y: self.ball.pos.y,
                radius: self.ball.radius,
                dragging: if self.ball.dragging { 1.0 } else { 0.0 },
            },
            hoop: HoopView {
                x: self.hoop.pos.x,
                y: self.hoop.pos.y,
                width: self.hoop.width,
                height: self.hoop.height,
            },
            surface_width: surface.width,
            surface_height: surface.height,
            tick: self.ticks as f32,
            alpha,
        }
    }

    /// Events emitted since the last drain.
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn sounds(&self) -> &[SoundEvent] {
        &self.sounds
    }

    fn push_event(&mut self, event: GameEvent) {
        if self.events.len() < MAX_PENDING {
            self.events.push(event);
        } else {
            log::trace!("event buffer full, dropping {event:?}");
        }
    }

    fn push_sound(&mut self, sound: SoundEvent) {
        if self.sounds.len() < MAX_PENDING {
            self.sounds.push(sound);
        } else {
            log::trace!("sound buffer full, dropping {sound:?}");
        }
    }

    /// Clear per-frame transient data (events, sounds).
    ///
    /// The host drains once per frame after reading. Undrained buffers stop
    /// growing at [`MAX_PENDING`] entries and newer entries are dropped.
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
        self.sounds.clear();
    }
}

fn finite_point(x: f32, y: f32) -> Result<Vec2, InputError> {
    if x.is_finite() && y.is_finite() {
        Ok(Vec2::new(x, y))
    } else {
        log::warn!("rejected non-finite pointer ({x}, {y})");
        Err(InputError::NonFinite { x, y })
    }
}
