use crate::math::Point2;

/// Sample points to classify against the traced shape, in grid units.
///
/// The set is only ever replaced as a whole.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataPointSet {
    points: Vec<Point2>,
}

impl DataPointSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl From<Vec<Point2>> for DataPointSet {
    fn from(points: Vec<Point2>) -> Self {
        Self { points }
    }
}

impl FromIterator<Point2> for DataPointSet {
    fn from_iter<I: IntoIterator<Item = Point2>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}
