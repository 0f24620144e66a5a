use super::Point2;

/// Even-odd (ray casting) point-in-polygon test.
///
/// Casts a horizontal ray from `point` towards +x and toggles on every edge
/// it crosses. The polygon is always treated as closed: the last vertex
/// connects back to the first. Polygons with fewer than 3 vertices contain
/// nothing.
///
/// An edge counts only when exactly one endpoint lies strictly above the
/// ray, so a vertex shared by two edges is never counted twice. Points on
/// the boundary fall on whichever side this rule puts them.
#[must_use]
pub fn point_in_polygon_2d(point: &Point2, polygon: &[Point2]) -> bool {
    let n = polygon.len();
    if n < 3 {
        return false;
    }

    let (x, y) = (point.x, point.y);
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let (xi, yi) = (polygon[i].x, polygon[i].y);
        let (xj, yj) = (polygon[j].x, polygon[j].y);

        // `yi != yj` is implied by the first clause, so the division is safe.
        if (yi > y) != (yj > y) && x < (xj - xi) * (y - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Computes the signed area of a polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Returns the `(min, max)` corners of the axis-aligned box around `points`,
/// or `None` for an empty slice.
#[must_use]
pub fn bounding_box_2d(points: &[Point2]) -> Option<(Point2, Point2)> {
    let (first, rest) = points.split_first()?;
    let mut min = *first;
    let mut max = *first;
    for pt in rest {
        min.x = min.x.min(pt.x);
        min.y = min.y.min(pt.y);
        max.x = max.x.max(pt.x);
        max.y = max.y.max(pt.y);
    }
    Some((min, max))
}
