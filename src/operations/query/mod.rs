mod classify_points;

pub use classify_points::{ClassificationResult, ClassifyPoints, PointClassification};
