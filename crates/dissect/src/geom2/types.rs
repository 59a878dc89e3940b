//! Host polygon and its validation limits.
//!
//! - `PolygonCfg`: centralizes vertex-count and coordinate bounds.
//! - `Polygon`: immutable, validated strictly convex polygon on the integer lattice.
//!
//! Code cross-refs: `util::{cross, twice_signed_area}`

use nalgebra::Vector2;

use super::util::{cross, twice_signed_area};
use crate::error::PolygonError;

/// Validation limits for host polygons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PolygonCfg {
    pub min_vertices: usize,
    pub max_vertices: usize,
    /// Coordinates must satisfy `|x|, |y| <= coord_bound`.
    pub coord_bound: i64,
}

impl Default for PolygonCfg {
    fn default() -> Self {
        Self {
            min_vertices: 3,
            max_vertices: 100,
            coord_bound: 1_000_000,
        }
    }
}

/// Winding of the vertex sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Ccw,
    Cw,
}

/// Strictly convex polygon with integer vertices.
///
/// Invariants:
/// - `3 <= n <= 100` (per `PolygonCfg`), coordinates within bounds.
/// - No three consecutive vertices collinear; all turns agree in sign.
/// - Every vertex lies strictly inside the half-plane of each non-incident edge.
///
/// Indices are cyclic: `i` and `i + n` name the same vertex.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Polygon {
    pts: Vec<Vector2<i64>>,
    orientation: Orientation,
}

impl Polygon {
    /// Validate with default limits.
    pub fn new(pts: Vec<Vector2<i64>>) -> Result<Self, PolygonError> {
        Self::with_cfg(pts, PolygonCfg::default())
    }

    /// Validate with custom limits.
    pub fn with_cfg(pts: Vec<Vector2<i64>>, cfg: PolygonCfg) -> Result<Self, PolygonError> {
        let orientation = validate_convex(&pts, cfg)?;
        Ok(Self { pts, orientation })
    }

    /// Accept real coordinates as long as each one is an exact integer.
    pub fn from_f64(pts: &[Vector2<f64>]) -> Result<Self, PolygonError> {
        let mut out = Vec::with_capacity(pts.len());
        for (vertex, p) in pts.iter().enumerate() {
            let mut lattice = [0i64; 2];
            for (slot, value) in lattice.iter_mut().zip([p.x, p.y]) {
                if !value.is_finite() || value.fract() != 0.0 {
                    return Err(PolygonError::NonInteger { vertex, value });
                }
                // Magnitudes at or past 2^63 would saturate in the cast.
                if value.abs() >= 2f64.powi(63) {
                    return Err(PolygonError::CoordinateOutOfRange {
                        vertex,
                        value: if value < 0.0 { i64::MIN } else { i64::MAX },
                        bound: PolygonCfg::default().coord_bound,
                    });
                }
                *slot = value as i64;
            }
            out.push(Vector2::new(lattice[0], lattice[1]));
        }
        Self::new(out)
    }

    /// Shorthand for tests and callers holding coordinate pairs.
    pub fn from_pairs(pairs: &[(i64, i64)]) -> Result<Self, PolygonError> {
        Self::new(pairs.iter().map(|&(x, y)| Vector2::new(x, y)).collect())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pts.len()
    }

    /// Always false for a validated polygon; present for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pts.is_empty()
    }

    #[inline]
    pub fn points(&self) -> &[Vector2<i64>] {
        &self.pts
    }

    /// Vertex `i`, taken modulo `n`.
    #[inline]
    pub fn point(&self, i: usize) -> Vector2<i64> {
        self.pts[i % self.pts.len()]
    }

    #[inline]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// `(i + 1) mod n`.
    #[inline]
    pub fn succ(&self, i: usize) -> usize {
        (i + 1) % self.pts.len()
    }

    /// True when `a` and `b` share a boundary edge.
    #[inline]
    pub fn adjacent(&self, a: usize, b: usize) -> bool {
        self.succ(a) == b || self.succ(b) == a
    }

    /// Twice the absolute area (exact).
    #[inline]
    pub fn twice_area(&self) -> i64 {
        twice_signed_area(&self.pts).abs()
    }

    /// Absolute area.
    #[inline]
    pub fn area(&self) -> f64 {
        self.twice_area() as f64 / 2.0
    }

    /// Points of the sub-polygon spanned by the given vertex indices, in the given order.
    pub fn restrict(&self, indices: &[usize]) -> Vec<Vector2<i64>> {
        indices.iter().map(|&i| self.point(i)).collect()
    }
}

fn validate_convex(pts: &[Vector2<i64>], cfg: PolygonCfg) -> Result<Orientation, PolygonError> {
    let n = pts.len();
    if n < cfg.min_vertices.max(3) {
        return Err(PolygonError::TooFewVertices {
            got: n,
            min: cfg.min_vertices.max(3),
        });
    }
    if n > cfg.max_vertices {
        return Err(PolygonError::TooManyVertices {
            got: n,
            max: cfg.max_vertices,
        });
    }
    for (vertex, p) in pts.iter().enumerate() {
        for value in [p.x, p.y] {
            if value.unsigned_abs() > cfg.coord_bound.unsigned_abs() {
                return Err(PolygonError::CoordinateOutOfRange {
                    vertex,
                    value,
                    bound: cfg.coord_bound,
                });
            }
        }
    }
    // Turn at each vertex: (next - cur) x (prev - cur); positive for CCW.
    let turn = |i: usize| cross(pts[i], pts[(i + 1) % n], pts[(i + n - 1) % n]);
    let first = turn(0);
    if first == 0 {
        return Err(PolygonError::Collinear { vertex: 0 });
    }
    for vertex in 1..n {
        let t = turn(vertex);
        if t == 0 {
            return Err(PolygonError::Collinear { vertex });
        }
        if (t > 0) != (first > 0) {
            return Err(PolygonError::InconsistentWinding { vertex });
        }
    }
    // Agreeing turns still admit star polygons that wind more than once.
    let sign = first.signum();
    for i in 0..n {
        let j = (i + 1) % n;
        for k in 0..n {
            if k == i || k == j {
                continue;
            }
            // CCW: every other vertex lies strictly left of edge i->j, i.e. (pj - pi) x (pk - pi) > 0.
            if cross(pts[i], pts[j], pts[k]).signum() != sign {
                return Err(PolygonError::NonConvex {
                    vertex: k,
                    edge_from: i,
                    edge_to: j,
                });
            }
        }
    }
    Ok(if sign > 0 {
        Orientation::Ccw
    } else {
        Orientation::Cw
    })
}
