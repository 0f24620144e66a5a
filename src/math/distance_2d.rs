/// Returns the Euclidean distance between `(ax, ay)` and `(bx, by)`.
#[must_use]
pub fn point_dist(ax: f64, ay: f64, bx: f64, by: f64) -> f64 {
    (bx - ax).hypot(by - ay)
}

/// Returns `true` if `(px, py)` lies within `radius` of `(cx, cy)`,
/// boundary included.
#[must_use]
pub fn within_radius(px: f64, py: f64, cx: f64, cy: f64, radius: f64) -> bool {
    point_dist(px, py, cx, cy) <= radius
}
