/// Pointer events the simulation understands, in surface coordinates.
/// The host translates device coordinates before sending them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// A touch/click began at (x, y).
    Down { x: f32, y: f32 },
    /// The pointer moved to (x, y).
    Move { x: f32, y: f32 },
    /// A touch/click ended at (x, y).
    Up { x: f32, y: f32 },
    /// The pointer left the interactive surface. Resolves like `Up` at the
    /// last known pointer position.
    Leave,
}

impl PointerEvent {
    /// Coordinates carried by the event, if any.
    pub fn coords(&self) -> Option<(f32, f32)> {
        match *self {
            PointerEvent::Down { x, y }
            | PointerEvent::Move { x, y }
            | PointerEvent::Up { x, y } => Some((x, y)),
            PointerEvent::Leave => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leave_has_no_coords() {
        assert_eq!(PointerEvent::Leave.coords(), None);
        assert_eq!(PointerEvent::Up { x: 1.5, y: 2.5 }.coords(), Some((1.5, 2.5)));
    }
}
