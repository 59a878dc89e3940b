use nalgebra::Vector2;

/// Orientation predicate `(a - o) x (b - o)`; positive when `o → a → b` turns left.
#[inline]
pub fn cross(o: Vector2<i64>, a: Vector2<i64>, b: Vector2<i64>) -> i64 {
    let oa = a - o;
    let ob = b - o;
    oa.x * ob.y - oa.y * ob.x
}

/// Shoelace sum over consecutive vertex pairs (twice the signed area, exact).
///
/// Positive for counterclockwise order. Empty and degenerate inputs give 0.
pub fn twice_signed_area(pts: &[Vector2<i64>]) -> i64 {
    let n = pts.len();
    (0..n)
        .map(|i| {
            let p = pts[i];
            let q = pts[(i + 1) % n];
            p.x * q.y - q.x * p.y
        })
        .sum()
}

/// Signed area; the sign encodes winding and the magnitude is the area.
#[inline]
pub fn signed_area(pts: &[Vector2<i64>]) -> f64 {
    twice_signed_area(pts) as f64 / 2.0
}

/// Area centroid of a simple polygon, `None` if the area vanishes.
pub fn area_centroid(pts: &[Vector2<i64>]) -> Option<Vector2<f64>> {
    let n = pts.len();
    let a2 = twice_signed_area(pts);
    if n < 3 || a2 == 0 {
        return None;
    }
    let mut cx = 0.0;
    let mut cy = 0.0;
    for i in 0..n {
        let p = to_f64(pts[i]);
        let q = to_f64(pts[(i + 1) % n]);
        let w = p.x * q.y - q.x * p.y;
        cx += (p.x + q.x) * w;
        cy += (p.y + q.y) * w;
    }
    let f = 1.0 / (3.0 * a2 as f64);
    Some(Vector2::new(cx * f, cy * f))
}

#[inline]
pub fn to_f64(p: Vector2<i64>) -> Vector2<f64> {
    Vector2::new(p.x as f64, p.y as f64)
}

/// Andrew’s monotone chain on lattice points; strict hull in CCW order
/// (collinear points dropped). `None` if fewer than three hull vertices remain.
pub fn convex_hull_strict(points: &[Vector2<i64>]) -> Option<Vec<Vector2<i64>>> {
    let mut pts: Vec<_> = points.to_vec();
    pts.sort_by(|a, b| a.x.cmp(&b.x).then(a.y.cmp(&b.y)));
    pts.dedup();
    if pts.len() < 3 {
        return None;
    }
    let mut lower: Vec<Vector2<i64>> = Vec::with_capacity(pts.len());
    for p in &pts {
        while lower.len() >= 2 && cross(lower[lower.len() - 2], lower[lower.len() - 1], *p) <= 0 {
            lower.pop();
        }
        lower.push(*p);
    }
    let mut upper: Vec<Vector2<i64>> = Vec::with_capacity(pts.len());
    for p in pts.iter().rev() {
        while upper.len() >= 2 && cross(upper[upper.len() - 2], upper[upper.len() - 1], *p) <= 0 {
            upper.pop();
        }
        upper.push(*p);
    }
    lower.pop();
    upper.pop();
    let mut hull = lower;
    hull.extend(upper);
    if hull.len() < 3 {
        None
    } else {
        Some(hull)
    }
}
