use rand::Rng;
use tracing::{debug, trace};

use crate::config::SurfaceConfig;
use crate::error::Result;
use crate::geometry::{CoordinateSpace, DataPointSet, PolygonModel, SurfacePoint, SurfaceSegment};
use crate::math::Point2;
use crate::operations::creation::GenerateTestData;
use crate::operations::query::{ClassificationResult, ClassifyPoints};

use super::view::{DataPointView, GridLayout, PointerView, VertexView};
use super::{Hint, Presenter, ViewModel};

/// Owns a tracing session: the shape, the data points, and the pointer.
///
/// Every handler runs to completion and then notifies the presenter. Shape
/// transitions that are not allowed are dropped silently; inspect the
/// shape afterwards to see whether anything happened.
#[derive(Debug)]
pub struct InteractionController<P: Presenter = ()> {
    config: SurfaceConfig,
    space: CoordinateSpace,
    grid: GridLayout,
    polygon: PolygonModel,
    data: DataPointSet,
    pointer: Option<SurfacePoint>,
    hovering_first_vertex: bool,
    presenter: P,
}

impl<P: Presenter> InteractionController<P> {
    /// Starts an empty session and presents its initial frame.
    pub fn new(config: SurfaceConfig, presenter: P) -> Self {
        let mut controller = Self {
            config,
            space: CoordinateSpace::new(&config),
            grid: GridLayout::new(&config),
            polygon: PolygonModel::new(),
            data: DataPointSet::new(),
            pointer: None,
            hovering_first_vertex: false,
            presenter,
        };
        controller.refresh_hint();
        controller.render();
        controller
    }

    #[must_use]
    pub fn config(&self) -> &SurfaceConfig {
        &self.config
    }

    #[must_use]
    pub fn space(&self) -> &CoordinateSpace {
        &self.space
    }

    /// Grid lines and axis labels, rebuilt only when the dimensions change.
    #[must_use]
    pub fn grid_layout(&self) -> &GridLayout {
        &self.grid
    }

    #[must_use]
    pub fn polygon(&self) -> &PolygonModel {
        &self.polygon
    }

    #[must_use]
    pub fn data_points(&self) -> &DataPointSet {
        &self.data
    }

    /// Last pointer position on the surface, `None` once it has left.
    #[must_use]
    pub fn pointer(&self) -> Option<SurfacePoint> {
        self.pointer
    }

    /// Last pointer position in grid units.
    #[must_use]
    pub fn pointer_grid(&self) -> Option<Point2> {
        self.pointer.map(|pos| self.space.surface_to_grid(pos))
    }

    #[must_use]
    pub fn is_hovering_first_vertex(&self) -> bool {
        self.hovering_first_vertex
    }

    #[must_use]
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// Current hint, `None` when it should be hidden.
    #[must_use]
    pub fn hint(&self) -> Option<Hint> {
        Hint::for_shape(
            self.polygon.state(),
            self.polygon.vertex_count(),
            self.hovering_first_vertex,
        )
    }

    /// Classifies the data points against the current shape.
    #[must_use]
    pub fn classification(&self) -> ClassificationResult {
        ClassifyPoints::new(self.data.points())
            .execute(self.polygon.vertices(), self.polygon.state())
    }

    /// Tracks the pointer and updates the first-vertex hover state.
    pub fn on_pointer_move(&mut self, pos: SurfacePoint) {
        self.pointer = Some(pos);

        let was_hovering = self.hovering_first_vertex;
        self.hovering_first_vertex = self.polygon.can_close() && self.is_near_first_vertex(pos);
        if was_hovering != self.hovering_first_vertex {
            trace!(hovering = self.hovering_first_vertex, "first vertex hover changed");
            self.refresh_hint();
        }
        self.render();
    }

    /// The pointer left the surface.
    pub fn on_pointer_leave(&mut self) {
        self.pointer = None;
        self.hovering_first_vertex = false;
        self.refresh_hint();
        self.render();
    }

    /// Places a vertex, or closes the shape when clicking its first vertex.
    ///
    /// Clicks on a closed shape are ignored entirely.
    pub fn on_pointer_click(&mut self, pos: SurfacePoint) {
        if self.polygon.is_closed() {
            trace!("click ignored, shape is closed");
            return;
        }

        let outcome = if self.polygon.can_close() && self.is_near_first_vertex(pos) {
            self.hovering_first_vertex = false;
            self.polygon
                .attempt_close(pos, self.config.close_radius(), &self.space)
        } else {
            self.polygon.append_vertex(self.space.surface_to_grid(pos))
        };
        if let Err(err) = outcome {
            debug!(%err, "click had no effect");
        }

        self.refresh_hint();
        self.render();
    }

    /// Replaces the surface dimensions and resets the session.
    ///
    /// The current close radius is kept.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidDimension` if any dimension is
    /// non-finite or not strictly positive, or `ConfigError::GridExtent` if
    /// either axis spans more than `MAX_GRID_CELLS` cells. The session is
    /// left untouched.
    pub fn apply_dimensions(&mut self, width: f64, height: f64, cell_size: f64) -> Result<()> {
        let config = SurfaceConfig::new(width, height, cell_size)?
            .with_close_radius(self.config.close_radius())?;
        self.apply_config(config);
        Ok(())
    }

    /// Replaces the whole surface configuration and resets the session.
    pub fn apply_config(&mut self, config: SurfaceConfig) {
        self.config = config;
        self.space = CoordinateSpace::new(&config);
        self.grid = GridLayout::new(&config);
        self.reset_session();
        debug!(
            width = config.width(),
            height = config.height(),
            cell_size = config.cell_size(),
            "dimensions applied"
        );
        self.refresh_hint();
        self.render();
    }

    /// Discards the shape, the data points, and the pointer state.
    pub fn clear(&mut self) {
        self.reset_session();
        debug!("session cleared");
        self.refresh_hint();
        self.render();
    }

    /// Replaces the data points with `count` uniformly random points
    /// covering the surface.
    pub fn generate_test_data(&mut self, count: usize) {
        let data = GenerateTestData::new(&self.config, count).execute();
        self.replace_data(data);
    }

    /// Like [`generate_test_data`](Self::generate_test_data), drawing from `rng`.
    pub fn generate_test_data_with<R: Rng + ?Sized>(&mut self, count: usize, rng: &mut R) {
        let data = GenerateTestData::new(&self.config, count).execute_with(rng);
        self.replace_data(data);
    }

    /// Replaces the data points with `points`, in grid units.
    pub fn inject_data_points(&mut self, points: impl Into<DataPointSet>) {
        self.replace_data(points.into());
    }

    /// Builds the frame for the current state.
    #[must_use]
    pub fn view(&self) -> ViewModel {
        let vertices: Vec<VertexView> = self
            .polygon
            .vertices()
            .iter()
            .enumerate()
            .map(|(i, grid)| VertexView {
                grid: *grid,
                surface: self.space.grid_to_surface(grid),
                is_first: i == 0,
            })
            .collect();

        let pointer = self.pointer.map(|surface| PointerView {
            grid: self.space.surface_to_grid(surface),
            surface,
        });

        let preview = match (self.polygon.is_closed(), vertices.last(), self.pointer) {
            (false, Some(last), Some(end)) => Some(SurfaceSegment {
                start: last.surface,
                end,
            }),
            _ => None,
        };

        let classification = self.classification();
        let data_points = self
            .data
            .points()
            .iter()
            .zip(classification.tags())
            .map(|(grid, tag)| DataPointView {
                grid: *grid,
                surface: self.space.grid_to_surface(grid),
                classification: *tag,
            })
            .collect();

        ViewModel {
            state: self.polygon.state(),
            vertices,
            hovering_first_vertex: self.hovering_first_vertex,
            pointer,
            preview,
            data_points,
            classification,
            hint: self.hint(),
            area: self.polygon.area(),
            bounds: self.polygon.bounds(),
            grid: self.grid.clone(),
        }
    }

    fn is_near_first_vertex(&self, pos: SurfacePoint) -> bool {
        self.polygon.first_vertex().is_some_and(|first| {
            self.space
                .grid_to_surface(first)
                .is_near(&pos, self.config.close_radius())
        })
    }

    fn reset_session(&mut self) {
        self.polygon.reset();
        self.data = DataPointSet::new();
        self.pointer = None;
        self.hovering_first_vertex = false;
    }

    fn replace_data(&mut self, data: DataPointSet) {
        debug!(count = data.len(), "data points replaced");
        self.data = data;
        self.render();
    }

    fn refresh_hint(&mut self) {
        let hint = self.hint();
        self.presenter.update_hint(hint);
    }

    fn render(&mut self) {
        let view = self.view();
        self.presenter.render(&view);
    }
}
