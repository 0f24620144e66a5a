pub mod config;
pub mod error;
pub mod geometry;
pub mod interaction;
pub mod math;
pub mod operations;

pub use config::SurfaceConfig;
pub use error::{PolytraceError, Result};
pub use interaction::InteractionController;
