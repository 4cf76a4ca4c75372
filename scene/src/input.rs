//! Pointer input: the drag-to-rotate gesture state machine.
//!
//! `DragState` tracks the gesture between pointer-down and pointer-up. It
//! only turns raw cursor positions into deltas; the engine decides what the
//! deltas do to the mesh.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::camera::Point;

/// Internal state for the drag gesture.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// A button is held and pointer motion rotates the mesh.
    Dragging {
        /// Screen position of the previous pointer event, used to compute the delta.
        last: Point,
    },
}

impl DragState {
    /// Begin (or restart) a drag at `at`.
    pub fn press(&mut self, at: Point) {
        *self = Self::Dragging { last: at };
    }

    /// Record motion to `to`.
    ///
    /// Returns the delta since the previous recorded position while dragging,
    /// `None` while idle.
    pub fn move_to(&mut self, to: Point) -> Option<Point> {
        match self {
            Self::Idle => None,
            Self::Dragging { last } => {
                let delta = to.delta_from(*last);
                *last = to;
                Some(delta)
            }
        }
    }

    /// End the gesture.
    pub fn release(&mut self) {
        *self = Self::Idle;
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }
}
