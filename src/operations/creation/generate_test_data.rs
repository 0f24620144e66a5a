use rand::distributions::{Distribution, Uniform};
use rand::Rng;

use crate::config::SurfaceConfig;
use crate::geometry::DataPointSet;
use crate::math::Point2;

/// Generates uniformly distributed data points covering the surface.
///
/// Each coordinate is drawn independently from `[0, width / cell_size)` and
/// `[0, height / cell_size)` respectively, in grid units.
pub struct GenerateTestData {
    count: usize,
    max_x: f64,
    max_y: f64,
}

impl GenerateTestData {
    /// Creates a new `GenerateTestData` operation for the given surface.
    #[must_use]
    pub fn new(config: &SurfaceConfig, count: usize) -> Self {
        let (max_x, max_y) = config.grid_extent();
        Self {
            count,
            max_x,
            max_y,
        }
    }

    /// Executes the operation with the thread-local generator.
    #[must_use]
    pub fn execute(&self) -> DataPointSet {
        self.execute_with(&mut rand::thread_rng())
    }

    /// Executes the operation with a caller-supplied generator.
    #[must_use]
    pub fn execute_with<R: Rng + ?Sized>(&self, rng: &mut R) -> DataPointSet {
        // `SurfaceConfig` guarantees a positive extent, so both ranges are non-empty.
        let xs = Uniform::new(0.0, self.max_x);
        let ys = Uniform::new(0.0, self.max_y);
        (0..self.count)
            .map(|_| Point2::new(xs.sample(rng), ys.sample(rng)))
            .collect()
    }
}
