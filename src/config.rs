use crate::error::{ConfigError, Result};

/// Default surface width, in surface units.
pub const DEFAULT_WIDTH: f64 = 600.0;

/// Default surface height, in surface units.
pub const DEFAULT_HEIGHT: f64 = 400.0;

/// Default edge length of one grid cell, in surface units.
pub const DEFAULT_CELL_SIZE: f64 = 50.0;

/// Default proximity to the first vertex that counts as a closing gesture,
/// in surface units.
pub const DEFAULT_CLOSE_RADIUS: f64 = 10.0;

/// Default number of generated test data points.
pub const DEFAULT_TEST_DATA_COUNT: usize = 50;

/// Largest number of grid cells allowed along either axis.
pub const MAX_GRID_CELLS: f64 = 100_000.0;

/// Dimensions of the interactive surface.
///
/// Every field is finite and strictly positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceConfig {
    width: f64,
    height: f64,
    cell_size: f64,
    close_radius: f64,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            cell_size: DEFAULT_CELL_SIZE,
            close_radius: DEFAULT_CLOSE_RADIUS,
        }
    }
}

impl SurfaceConfig {
    /// Creates a configuration with the default close radius.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidDimension` if any value is non-finite or
    /// not strictly positive, and `ConfigError::GridExtent` if the surface
    /// spans zero or more than [`MAX_GRID_CELLS`] cells along either axis.
    pub fn new(width: f64, height: f64, cell_size: f64) -> Result<Self> {
        let config = Self {
            width: validate("width", width)?,
            height: validate("height", height)?,
            cell_size: validate("cell_size", cell_size)?,
            close_radius: DEFAULT_CLOSE_RADIUS,
        };
        let (columns, rows) = config.grid_extent();
        validate_extent("width", columns)?;
        validate_extent("height", rows)?;
        Ok(config)
    }

    /// Sets the closing-gesture radius.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidDimension` if `radius` is non-finite or
    /// not strictly positive.
    pub fn with_close_radius(mut self, radius: f64) -> Result<Self> {
        self.close_radius = validate("close_radius", radius)?;
        Ok(self)
    }

    /// Surface width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Surface height.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Grid cell edge length.
    #[must_use]
    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// Closing-gesture radius.
    #[must_use]
    pub fn close_radius(&self) -> f64 {
        self.close_radius
    }

    /// Surface extent in grid units, `(width / cell_size, height / cell_size)`.
    #[must_use]
    pub fn grid_extent(&self) -> (f64, f64) {
        (self.width / self.cell_size, self.height / self.cell_size)
    }
}

fn validate(name: &'static str, value: f64) -> std::result::Result<f64, ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::InvalidDimension { name, value })
    }
}

fn validate_extent(axis: &'static str, cells: f64) -> std::result::Result<(), ConfigError> {
    // The division can overflow to infinity or underflow to zero.
    if cells > 0.0 && cells <= MAX_GRID_CELLS {
        Ok(())
    } else {
        Err(ConfigError::GridExtent { axis, cells })
    }
}
