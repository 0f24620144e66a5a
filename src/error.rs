use thiserror::Error;

/// Top-level error type for polytrace.
#[derive(Debug, Error, PartialEq)]
pub enum PolytraceError {
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// A shape transition that was rejected. The shape is left untouched.
///
/// Returned directly by `PolygonModel`; the controller drops it.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum StateError {
    #[error("shape is closed")]
    ShapeClosed,

    #[error("shape needs at least 3 vertices to close, has {count}")]
    TooFewVertices { count: usize },

    #[error("closing point is {distance} from the first vertex, tolerance is {tolerance}")]
    OutOfReach { distance: f64, tolerance: f64 },
}

/// Errors related to surface configuration.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be finite and positive, got {value}")]
    InvalidDimension { name: &'static str, value: f64 },

    #[error("surface {axis} spans {cells} grid cells, expected more than 0 and at most 100000")]
    GridExtent { axis: &'static str, cells: f64 },
}

/// Convenience type alias for results using [`PolytraceError`].
pub type Result<T> = std::result::Result<T, PolytraceError>;
