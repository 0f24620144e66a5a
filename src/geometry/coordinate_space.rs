use crate::config::SurfaceConfig;
use crate::math::Point2;

use super::SurfacePoint;

/// Bidirectional mapping between grid units and surface units.
///
/// Grid `y` grows upward from the bottom edge of the surface; surface `y`
/// grows downward from the top edge. Neither direction clamps, so points
/// outside the visible area map just as well.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateSpace {
    cell_size: f64,
    surface_height: f64,
}

impl CoordinateSpace {
    /// Creates a coordinate space from a validated surface configuration.
    #[must_use]
    pub fn new(config: &SurfaceConfig) -> Self {
        Self {
            cell_size: config.cell_size(),
            surface_height: config.height(),
        }
    }

    /// Edge length of one grid cell, in surface units.
    #[must_use]
    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// Height of the surface, in surface units.
    #[must_use]
    pub fn surface_height(&self) -> f64 {
        self.surface_height
    }

    /// Maps a surface position into grid units.
    #[must_use]
    pub fn surface_to_grid(&self, point: SurfacePoint) -> Point2 {
        Point2::new(
            point.x / self.cell_size,
            (self.surface_height - point.y) / self.cell_size,
        )
    }

    /// Maps a grid position into surface units.
    #[must_use]
    pub fn grid_to_surface(&self, point: &Point2) -> SurfacePoint {
        SurfacePoint::new(
            point.x * self.cell_size,
            self.surface_height - point.y * self.cell_size,
        )
    }
}
