#![allow(clippy::unwrap_used)]

use approx::assert_relative_eq;
use polytrace::error::StateError;
use polytrace::geometry::{CoordinateSpace, PolygonModel, ShapeState, SurfacePoint};
use polytrace::interaction::{Hint, Presenter, ViewModel};
use polytrace::math::polygon_2d::point_in_polygon_2d;
use polytrace::math::Point2;
use polytrace::operations::query::ClassifyPoints;
use polytrace::{InteractionController, SurfaceConfig};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn p(x: f64, y: f64) -> Point2 {
    Point2::new(x, y)
}

#[derive(Default)]
struct Counter {
    hints: usize,
    renders: usize,
    last_hint: Option<Hint>,
}

impl Presenter for Counter {
    fn update_hint(&mut self, hint: Option<Hint>) {
        self.hints += 1;
        self.last_hint = hint;
    }

    fn render(&mut self, _view: &ViewModel) {
        self.renders += 1;
    }
}

/// Traces `vertices` (grid units) by clicking, without closing.
fn trace<P: Presenter>(c: &mut InteractionController<P>, vertices: &[Point2]) {
    for v in vertices {
        let pos = c.space().grid_to_surface(v);
        c.on_pointer_click(pos);
    }
}

fn close<P: Presenter>(c: &mut InteractionController<P>) {
    let first = *c.polygon().first_vertex().unwrap();
    let pos = c.space().grid_to_surface(&first);
    c.on_pointer_click(SurfacePoint::new(pos.x + 3.0, pos.y - 3.0));
}

#[test]
fn square_scenario() {
    let mut c = InteractionController::new(SurfaceConfig::default(), ());
    trace(&mut c, &[p(0.0, 0.0), p(4.0, 0.0), p(4.0, 4.0), p(0.0, 4.0)]);
    close(&mut c);
    assert_eq!(c.polygon().state(), ShapeState::Closed);

    c.inject_data_points(vec![p(2.0, 2.0), p(5.0, 5.0), p(0.0, 2.0)]);
    let tags: Vec<bool> = c
        .classification()
        .tags()
        .iter()
        .map(|t| t.is_inside())
        .collect();
    // (0, 2) lies on the left edge; the edge at x=0 is not strictly right of
    // the point, only the right edge is crossed.
    assert_eq!(tags, vec![true, false, true]);
}

#[test]
fn degenerate_two_vertex_scenario() {
    let space = CoordinateSpace::new(&SurfaceConfig::default());
    let mut model = PolygonModel::new();
    model.append_vertex(p(0.0, 0.0)).unwrap();
    model.append_vertex(p(0.0, 0.0)).unwrap();
    let first = space.grid_to_surface(&p(0.0, 0.0));

    assert_eq!(
        model.attempt_close(first, 10.0, &space),
        Err(StateError::TooFewVertices { count: 2 })
    );
    assert_eq!(model.state(), ShapeState::Open);
    for q in [p(0.0, 0.0), p(0.5, 0.5), p(1.0, 1.0), p(-3.0, 2.0)] {
        assert!(!point_in_polygon_2d(&q, model.vertices()));
    }
}

#[test]
fn open_shape_classifies_everything_outside() {
    let mut c = InteractionController::new(SurfaceConfig::default(), ());
    trace(&mut c, &[p(0.0, 0.0), p(4.0, 0.0), p(4.0, 4.0)]);
    c.inject_data_points(vec![p(1.0, 1.0)]);

    let view = c.view();
    assert_eq!(view.state, ShapeState::Open);
    assert_eq!(view.inside_count(), 0);
    assert_eq!(view.outside_count(), 1);
}

#[test]
fn closing_click_then_nothing() {
    let mut c = InteractionController::new(SurfaceConfig::default(), Counter::default());
    trace(&mut c, &[p(1.0, 1.0), p(5.0, 1.0), p(3.0, 4.0)]);
    close(&mut c);
    assert_eq!(c.polygon().state(), ShapeState::Closed);

    let renders = c.presenter().renders;
    let hints = c.presenter().hints;
    c.on_pointer_click(SurfacePoint::new(300.0, 50.0));
    c.on_pointer_click(SurfacePoint::new(50.0, 350.0));
    assert_eq!(c.polygon().state(), ShapeState::Closed);
    assert_eq!(c.polygon().vertex_count(), 3);
    assert_eq!(c.presenter().renders, renders);
    assert_eq!(c.presenter().hints, hints);
    assert_eq!(c.presenter().last_hint, None);
}

#[test]
fn hint_sequence_while_tracing() {
    let mut c = InteractionController::new(SurfaceConfig::default(), Counter::default());
    assert_eq!(c.hint(), None);
    trace(&mut c, &[p(1.0, 1.0)]);
    assert_eq!(c.presenter().last_hint, Some(Hint::PlaceMore { remaining: 2 }));
    trace(&mut c, &[p(5.0, 1.0)]);
    assert_eq!(c.presenter().last_hint, Some(Hint::PlaceMore { remaining: 1 }));
    trace(&mut c, &[p(3.0, 4.0)]);
    assert_eq!(c.presenter().last_hint, Some(Hint::CloseShape));
    c.on_pointer_move(SurfacePoint::new(52.0, 352.0));
    assert_eq!(c.presenter().last_hint, Some(Hint::ClickToClose));
}

#[test]
fn under_three_vertices_never_closes() {
    let space = CoordinateSpace::new(&SurfaceConfig::default());
    let mut model = PolygonModel::new();
    for count in 0..3 {
        let target = model
            .first_vertex()
            .map_or(SurfacePoint::new(0.0, 400.0), |v| space.grid_to_surface(v));
        assert!(model.attempt_close(target, f64::MAX, &space).is_err());
        assert_eq!(model.state(), ShapeState::Open);
        assert_eq!(model.vertex_count(), count);
        model.append_vertex(p(0.0, 0.0)).unwrap();
    }
}

#[test]
fn convex_polygon_contains_interior_points() {
    let mut rng = StdRng::seed_from_u64(11);
    // Regular hexagon of radius 5 around (10, 10).
    let hexagon: Vec<Point2> = (0..6_i32)
        .map(|k| {
            let a = f64::from(k) * std::f64::consts::FRAC_PI_3;
            p(10.0 + 5.0 * a.cos(), 10.0 + 5.0 * a.sin())
        })
        .collect();
    for _ in 0..200 {
        // Inscribed circle radius is 5 * cos(30deg) ~= 4.33.
        let r = rng.gen_range(0.0..4.3);
        let a = rng.gen_range(0.0..std::f64::consts::TAU);
        assert!(point_in_polygon_2d(&p(10.0 + r * a.cos(), 10.0 + r * a.sin()), &hexagon));

        let far = rng.gen_range(5.01..50.0);
        assert!(!point_in_polygon_2d(&p(10.0 + far * a.cos(), 10.0 + far * a.sin()), &hexagon));
    }
}

#[test]
fn classification_matches_pointwise_test() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut c = InteractionController::new(SurfaceConfig::default(), ());
    let outline = [p(1.0, 1.0), p(10.0, 2.0), p(6.0, 4.0), p(9.0, 7.0), p(2.0, 6.0)];
    trace(&mut c, &outline);
    close(&mut c);
    c.generate_test_data_with(50, &mut rng);

    let result = c.classification();
    assert_eq!(result.len(), 50);
    for (point, tag) in c.data_points().points().iter().zip(result.tags()) {
        assert_eq!(tag.is_inside(), point_in_polygon_2d(point, &outline));
    }
    assert_eq!(result.inside_count() + result.outside_count(), 50);

    let direct = ClassifyPoints::new(c.data_points().points())
        .execute(c.polygon().vertices(), c.polygon().state());
    assert_eq!(direct, result);
}

#[test]
fn grid_surface_roundtrip() {
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..100 {
        let config = SurfaceConfig::new(
            rng.gen_range(1.0..2000.0),
            rng.gen_range(1.0..2000.0),
            rng.gen_range(0.1..200.0),
        )
        .unwrap();
        let space = CoordinateSpace::new(&config);
        let pos = SurfacePoint::new(rng.gen_range(-500.0..2500.0), rng.gen_range(-500.0..2500.0));
        let back = space.grid_to_surface(&space.surface_to_grid(pos));
        assert_relative_eq!(back.x, pos.x, epsilon = 1e-8);
        assert_relative_eq!(back.y, pos.y, epsilon = 1e-8);
    }
}

#[test]
fn generated_data_fits_surface() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut c = InteractionController::new(SurfaceConfig::default(), ());
    c.apply_dimensions(300.0, 150.0, 30.0).unwrap();
    c.generate_test_data_with(50, &mut rng);
    assert_eq!(c.data_points().len(), 50);
    assert!(c
        .data_points()
        .points()
        .iter()
        .all(|q| (0.0..10.0).contains(&q.x) && (0.0..5.0).contains(&q.y)));
}

#[test]
fn apply_dimensions_clears_data_and_shape() {
    let mut c = InteractionController::new(SurfaceConfig::default(), Counter::default());
    trace(&mut c, &[p(1.0, 1.0), p(5.0, 1.0), p(3.0, 4.0)]);
    close(&mut c);
    c.generate_test_data(20);
    let hints = c.presenter().hints;
    let renders = c.presenter().renders;

    c.apply_dimensions(800.0, 600.0, 40.0).unwrap();
    assert_eq!(c.polygon().state(), ShapeState::Open);
    assert_eq!(c.polygon().vertex_count(), 0);
    assert!(c.data_points().is_empty());
    assert_eq!(c.presenter().hints, hints + 1);
    assert_eq!(c.presenter().renders, renders + 1);
    assert!((c.config().close_radius() - 10.0).abs() < f64::EPSILON);
}
