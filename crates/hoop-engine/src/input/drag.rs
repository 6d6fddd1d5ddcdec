//! Drag-to-launch state machine ("slingshot" semantics).

use glam::Vec2;

use crate::core::ball::Ball;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragState {
    /// Physics controls the ball.
    Idle,
    /// The pointer controls the ball.
    Dragging {
        /// Pointer position when the drag began.
        start: Vec2,
        /// Most recent pointer position.
        last: Vec2,
    },
}

/// What a pointer event did to the ball.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragTransition {
    /// Event ignored (missed the ball, or no drag in progress).
    Ignored,
    Started,
    Moved,
    /// Drag ended; the ball now flies with `launch` velocity.
    Released { launch: Vec2 },
}

#[derive(Debug, Clone)]
pub struct DragController {
    state: DragState,
    launch_scale: f32,
}

impl DragController {
    pub fn new(launch_scale: f32) -> Self {
        Self {
            state: DragState::Idle,
            launch_scale,
        }
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Pointer down: grab the ball if the pointer is on it.
    pub fn press(&mut self, ball: &mut Ball, at: Vec2) -> DragTransition {
        if self.is_dragging() || !ball.contains(at) {
            return DragTransition::Ignored;
        }
        ball.vel = Vec2::ZERO;
        ball.dragging = true;
        self.state = DragState::Dragging { start: at, last: at };
        DragTransition::Started
    }

    /// Pointer move: the ball follows the pointer, unclamped, velocity frozen.
    pub fn drag_to(&mut self, ball: &mut Ball, at: Vec2) -> DragTransition {
        let DragState::Dragging { last, .. } = &mut self.state else {
            return DragTransition::Ignored;
        };
        *last = at;
        ball.pos = at;
        ball.vel = Vec2::ZERO;
        DragTransition::Moved
    }

    /// Pointer up or leave. `at` is `None` for leave, which reuses the last
    /// known pointer position.
    pub fn release(&mut self, ball: &mut Ball, at: Option<Vec2>) -> DragTransition {
        let DragState::Dragging { start, last } = self.state else {
            return DragTransition::Ignored;
        };
        let release = at.unwrap_or(last);
        let launch = (start - release) * self.launch_scale;
        ball.vel = launch;
        ball.dragging = false;
        self.state = DragState::Idle;
        DragTransition::Released { launch }
    }
}
