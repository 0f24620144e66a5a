use std::fmt;

use crate::geometry::{ShapeState, MIN_CLOSED_VERTICES};

/// Guidance shown to the user while a shape is being traced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hint {
    /// More vertices are needed before the shape can be closed.
    PlaceMore { remaining: usize },
    /// The shape can be closed by clicking the first vertex.
    CloseShape,
    /// The pointer is over the first vertex; a click closes the shape.
    ClickToClose,
}

impl Hint {
    /// Selects the hint for the given shape state.
    ///
    /// Closed shapes and empty shapes have no hint. `hovering_first_vertex`
    /// only matters once the shape can be closed.
    #[must_use]
    pub fn for_shape(
        state: ShapeState,
        vertex_count: usize,
        hovering_first_vertex: bool,
    ) -> Option<Self> {
        match (state, vertex_count) {
            (ShapeState::Closed, _) | (ShapeState::Open, 0) => None,
            (ShapeState::Open, n) if n < MIN_CLOSED_VERTICES => Some(Self::PlaceMore {
                remaining: MIN_CLOSED_VERTICES - n,
            }),
            (ShapeState::Open, _) if hovering_first_vertex => Some(Self::ClickToClose),
            (ShapeState::Open, _) => Some(Self::CloseShape),
        }
    }
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PlaceMore { remaining } => {
                write!(f, "Place at least {remaining} more point(s) to create a shape")
            }
            Self::CloseShape => f.write_str("Click on the red (first) point to close the shape"),
            Self::ClickToClose => f.write_str("Click the red point to close the shape!"),
        }
    }
}
