//! Headless tracing session.
//!
//! Traces a pentagon by clicking, closes it, scatters random data points
//! and prints what a presentation layer would draw.
//!
//! ```text
//! cargo run --example session
//! RUST_LOG=polytrace=trace cargo run --example session
//! ```

use polytrace::geometry::SurfacePoint;
use polytrace::interaction::{Hint, Presenter, ViewModel};
use polytrace::{InteractionController, SurfaceConfig};

/// Logs each frame instead of drawing it.
#[derive(Default)]
struct LogPresenter {
    frames: usize,
}

impl Presenter for LogPresenter {
    fn update_hint(&mut self, hint: Option<Hint>) {
        match hint {
            Some(hint) => tracing::info!("hint: {hint}"),
            None => tracing::info!("hint hidden"),
        }
    }

    fn render(&mut self, view: &ViewModel) {
        self.frames += 1;
        tracing::debug!(
            frame = self.frames,
            vertices = view.vertices.len(),
            closed = view.closed_label(),
            "{}",
            view.pointer_label()
        );
    }
}

fn main() -> polytrace::Result<()> {
    // Default: WARN for everything, INFO for polytrace.
    // Override with RUST_LOG env var (e.g. RUST_LOG=polytrace=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("session=info".parse().unwrap_or_default())
        .add_directive("polytrace=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = SurfaceConfig::new(600.0, 400.0, 50.0)?;
    let mut session = InteractionController::new(config, LogPresenter::default());

    let clicks = [
        (100.0, 300.0),
        (400.0, 350.0),
        (500.0, 150.0),
        (300.0, 50.0),
        (120.0, 120.0),
    ];
    for (x, y) in clicks {
        let pos = SurfacePoint::new(x, y);
        session.on_pointer_move(pos);
        session.on_pointer_click(pos);
    }

    // Close on the first vertex.
    let closing = SurfacePoint::new(104.0, 296.0);
    session.on_pointer_move(closing);
    session.on_pointer_click(closing);
    session.on_pointer_leave();

    session.generate_test_data(polytrace::config::DEFAULT_TEST_DATA_COUNT);

    let view = session.view();
    println!("shape closed: {}", view.closed_label());
    for vertex in &view.vertices {
        println!("  vertex ({:.2}, {:.2})", vertex.grid.x, vertex.grid.y);
    }
    if let Some(area) = view.area {
        println!("area: {area:.2} square cells");
    }
    println!("points inside: {}", view.inside_count());
    println!("points outside: {}", view.outside_count());
    println!("frames rendered: {}", session.presenter().frames);
    Ok(())
}
