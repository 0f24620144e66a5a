use tracing::debug;

use crate::error::StateError;
use crate::math::polygon_2d::{bounding_box_2d, signed_area_2d};
use crate::math::Point2;

use super::{CoordinateSpace, SurfacePoint};

/// Minimum number of vertices a shape needs before it can be closed.
pub const MIN_CLOSED_VERTICES: usize = 3;

/// Whether the shape is still being traced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShapeState {
    /// Accepting new vertices.
    #[default]
    Open,
    /// Complete. Immutable until reset.
    Closed,
}

/// The polygon being traced: an ordered vertex list plus its open/closed state.
///
/// Consecutive vertices form edges; a closed shape also joins the last vertex
/// back to the first. Vertices are stored exactly as appended, duplicates
/// included.
#[derive(Debug, Clone, Default)]
pub struct PolygonModel {
    vertices: Vec<Point2>,
    state: ShapeState,
}

impl PolygonModel {
    /// Creates an empty, open shape.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The vertices in insertion order, in grid units.
    #[must_use]
    pub fn vertices(&self) -> &[Point2] {
        &self.vertices
    }

    /// Number of vertices placed so far.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// The first vertex, if any.
    #[must_use]
    pub fn first_vertex(&self) -> Option<&Point2> {
        self.vertices.first()
    }

    /// The most recently placed vertex, if any.
    #[must_use]
    pub fn last_vertex(&self) -> Option<&Point2> {
        self.vertices.last()
    }

    #[must_use]
    pub fn state(&self) -> ShapeState {
        self.state
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.state == ShapeState::Closed
    }

    /// Returns `true` while the shape is open and has enough vertices to be
    /// closed.
    #[must_use]
    pub fn can_close(&self) -> bool {
        self.state == ShapeState::Open && self.vertices.len() >= MIN_CLOSED_VERTICES
    }

    /// Appends a vertex to an open shape.
    ///
    /// # Errors
    ///
    /// Returns `StateError::ShapeClosed` if the shape is closed; the vertex
    /// list is left unchanged.
    pub fn append_vertex(&mut self, point: Point2) -> Result<(), StateError> {
        if self.is_closed() {
            return Err(StateError::ShapeClosed);
        }
        self.vertices.push(point);
        debug!(x = point.x, y = point.y, count = self.vertices.len(), "vertex appended");
        Ok(())
    }

    /// Closes the shape if `candidate` lies within `tolerance` of the first
    /// vertex, measured in surface units through `space`.
    ///
    /// # Errors
    ///
    /// Returns, leaving the shape unchanged:
    /// - `StateError::ShapeClosed` if the shape is already closed.
    /// - `StateError::TooFewVertices` if fewer than 3 vertices exist.
    /// - `StateError::OutOfReach` if `candidate` is farther than `tolerance`.
    pub fn attempt_close(
        &mut self,
        candidate: SurfacePoint,
        tolerance: f64,
        space: &CoordinateSpace,
    ) -> Result<(), StateError> {
        if self.is_closed() {
            return Err(StateError::ShapeClosed);
        }
        let count = self.vertices.len();
        let first = match self.vertices.first() {
            Some(first) if count >= MIN_CLOSED_VERTICES => first,
            _ => return Err(StateError::TooFewVertices { count }),
        };
        let distance = space.grid_to_surface(first).distance(&candidate);
        if distance > tolerance {
            return Err(StateError::OutOfReach {
                distance,
                tolerance,
            });
        }
        self.state = ShapeState::Closed;
        debug!(count, "shape closed");
        Ok(())
    }

    /// Discards every vertex and reopens the shape.
    pub fn reset(&mut self) {
        self.vertices.clear();
        self.state = ShapeState::Open;
        debug!("shape reset");
    }

    /// Enclosed area in square grid units, or `None` while the shape is open.
    #[must_use]
    pub fn area(&self) -> Option<f64> {
        self.is_closed().then(|| signed_area_2d(&self.vertices).abs())
    }

    /// `(min, max)` corners of the closed shape's bounding box, in grid units.
    #[must_use]
    pub fn bounds(&self) -> Option<(Point2, Point2)> {
        if self.is_closed() {
            bounding_box_2d(&self.vertices)
        } else {
            None
        }
    }
}
