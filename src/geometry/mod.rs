pub mod coordinate_space;
pub mod data_points;
pub mod polygon;
pub mod surface_point;

pub use coordinate_space::CoordinateSpace;
pub use data_points::DataPointSet;
pub use polygon::{PolygonModel, ShapeState, MIN_CLOSED_VERTICES};
pub use surface_point::{SurfacePoint, SurfaceSegment};
