//! Render-ready snapshot of the tracing session.
//!
//! A [`ViewModel`] is assembled after every handled event and holds
//! everything a presentation layer needs to draw one frame: grid positions
//! for the model, surface positions for drawing.

use crate::config::SurfaceConfig;
use crate::geometry::{ShapeState, SurfacePoint, SurfaceSegment, MIN_CLOSED_VERTICES};
use crate::math::Point2;
use crate::operations::query::{ClassificationResult, PointClassification};

use super::Hint;

/// A placed vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VertexView {
    pub grid: Point2,
    pub surface: SurfacePoint,
    /// The first vertex doubles as the closing target.
    pub is_first: bool,
}

/// The pointer while it is over the surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerView {
    pub grid: Point2,
    pub surface: SurfacePoint,
}

/// A classified data point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DataPointView {
    pub grid: Point2,
    pub surface: SurfacePoint,
    pub classification: PointClassification,
}

/// Grid lines and axis labels for the current surface dimensions.
#[derive(Debug, Clone, PartialEq)]
pub struct GridLayout {
    /// Surface `x` of each vertical grid line, left to right.
    pub vertical_lines: Vec<f64>,
    /// Surface `y` of each horizontal grid line, top to bottom.
    pub horizontal_lines: Vec<f64>,
    /// Labels along the x axis, `0..=floor(width / cell_size)`.
    pub x_ticks: Vec<u32>,
    /// Labels along the y axis, bottom to top, `0..=floor(height / cell_size)`.
    pub y_ticks: Vec<u32>,
}

impl GridLayout {
    #[must_use]
    pub fn new(config: &SurfaceConfig) -> Self {
        let cell = config.cell_size();
        let columns = whole_cells(config.width(), cell);
        let rows = whole_cells(config.height(), cell);
        Self {
            vertical_lines: (0..=columns).map(|i| f64::from(i) * cell).collect(),
            horizontal_lines: (0..=rows).map(|i| f64::from(i) * cell).collect(),
            x_ticks: (0..=columns).collect(),
            y_ticks: (0..=rows).collect(),
        }
    }
}

// `SurfaceConfig` caps the extent at `MAX_GRID_CELLS`, well inside `u32`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn whole_cells(length: f64, cell: f64) -> u32 {
    (length / cell).floor() as u32
}

/// Everything needed to draw one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewModel {
    pub state: ShapeState,
    pub vertices: Vec<VertexView>,
    pub hovering_first_vertex: bool,
    pub pointer: Option<PointerView>,
    /// Dashed segment from the last vertex to the pointer while tracing.
    pub preview: Option<SurfaceSegment>,
    pub data_points: Vec<DataPointView>,
    pub classification: ClassificationResult,
    pub hint: Option<Hint>,
    /// Enclosed area in square grid units, once closed.
    pub area: Option<f64>,
    /// `(min, max)` grid corners of the shape, once closed.
    pub bounds: Option<(Point2, Point2)>,
    pub grid: GridLayout,
}

impl ViewModel {
    /// The shape is filled only once it is closed.
    #[must_use]
    pub fn fill(&self) -> bool {
        self.state == ShapeState::Closed && self.vertices.len() >= MIN_CLOSED_VERTICES
    }

    /// Draw the halo around the first vertex.
    #[must_use]
    pub fn highlight_first_vertex(&self) -> bool {
        self.hovering_first_vertex
            && self.state == ShapeState::Open
            && self.vertices.len() >= MIN_CLOSED_VERTICES
    }

    #[must_use]
    pub fn inside_count(&self) -> usize {
        self.classification.inside_count()
    }

    #[must_use]
    pub fn outside_count(&self) -> usize {
        self.classification.outside_count()
    }

    /// Pointer readout in grid units.
    #[must_use]
    pub fn pointer_label(&self) -> String {
        match &self.pointer {
            Some(pointer) => format!(
                "Mouse Position: X: {:.2}, Y: {:.2}",
                pointer.grid.x, pointer.grid.y
            ),
            None => "Mouse Position: --".to_owned(),
        }
    }

    #[must_use]
    pub fn closed_label(&self) -> &'static str {
        match self.state {
            ShapeState::Closed => "Yes",
            ShapeState::Open => "No",
        }
    }
}
