use crate::math::distance_2d::{point_dist, within_radius};

/// A position on the interactive surface, in surface (pixel) units.
///
/// The surface origin is the top-left corner and `y` grows downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfacePoint {
    pub x: f64,
    pub y: f64,
}

impl SurfacePoint {
    /// Creates a new surface point.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Distance to `other`, in surface units.
    #[must_use]
    pub fn distance(&self, other: &SurfacePoint) -> f64 {
        point_dist(self.x, self.y, other.x, other.y)
    }

    /// Returns `true` if `other` is within `radius` of this point.
    #[must_use]
    pub fn is_near(&self, other: &SurfacePoint, radius: f64) -> bool {
        within_radius(self.x, self.y, other.x, other.y, radius)
    }
}

/// A straight segment between two surface points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceSegment {
    pub start: SurfacePoint,
    pub end: SurfacePoint,
}
