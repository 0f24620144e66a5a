use crate::geometry::ShapeState;
use crate::math::polygon_2d::point_in_polygon_2d;
use crate::math::Point2;

/// Where a data point lies relative to the traced shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointClassification {
    Inside,
    Outside,
}

impl PointClassification {
    #[must_use]
    pub fn is_inside(self) -> bool {
        self == Self::Inside
    }
}

/// Per-point classification of a data point batch, in input order.
///
/// Counts are derived from the per-point tags on demand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassificationResult {
    tags: Vec<PointClassification>,
}

impl ClassificationResult {
    /// Per-point tags, parallel to the classified points.
    #[must_use]
    pub fn tags(&self) -> &[PointClassification] {
        &self.tags
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Number of points inside the shape.
    #[must_use]
    pub fn inside_count(&self) -> usize {
        self.tags.iter().filter(|tag| tag.is_inside()).count()
    }

    /// Number of points outside the shape.
    #[must_use]
    pub fn outside_count(&self) -> usize {
        self.tags.len() - self.inside_count()
    }
}

/// Classifies a batch of points against a polygon.
///
/// Only a closed shape has an interior: while the shape is open every point
/// is reported outside without running the geometric test.
pub struct ClassifyPoints<'a> {
    points: &'a [Point2],
}

impl<'a> ClassifyPoints<'a> {
    /// Creates a new `ClassifyPoints` query over `points`.
    #[must_use]
    pub fn new(points: &'a [Point2]) -> Self {
        Self { points }
    }

    /// Executes the query against `polygon` in the given `state`.
    #[must_use]
    pub fn execute(&self, polygon: &[Point2], state: ShapeState) -> ClassificationResult {
        let tags = if state == ShapeState::Closed {
            self.points
                .iter()
                .map(|point| {
                    if point_in_polygon_2d(point, polygon) {
                        PointClassification::Inside
                    } else {
                        PointClassification::Outside
                    }
                })
                .collect()
        } else {
            vec![PointClassification::Outside; self.points.len()]
        };
        ClassificationResult { tags }
    }
}
