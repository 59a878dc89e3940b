//! JSON view of an outcome, consumed by renderers. Indices are always 0-based.

use dissect::prelude::*;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Report {
    pub engine_version: &'static str,
    pub polygon: PolygonView,
    pub chords: Vec<[usize; 2]>,
    pub regions: Vec<RegionView>,
    pub edges: Vec<EdgeView>,
    pub query: Option<QueryView>,
}

#[derive(Debug, Serialize)]
pub struct PolygonView {
    pub vertices: Vec<[i64; 2]>,
    pub area: f64,
    pub clockwise: bool,
}

#[derive(Debug, Serialize)]
pub struct RegionView {
    pub id: usize,
    pub vertices: Vec<usize>,
    pub area: f64,
    pub centroid: [f64; 2],
}

#[derive(Debug, Serialize)]
pub struct EdgeView {
    pub a: usize,
    pub b: usize,
    /// Chord as directed on region `a`'s boundary.
    pub chord: [usize; 2],
}

#[derive(Debug, Serialize)]
pub struct QueryView {
    pub endpoints: [usize; 2],
    pub path: Vec<usize>,
    pub cover: Vec<usize>,
    pub kept_area: f64,
    pub removed_area: f64,
}

impl Report {
    pub fn new(poly: &Polygon, chords: &ChordSet, outcome: &Outcome) -> Self {
        let sub = &outcome.subdivision;
        Report {
            engine_version: dissect::VERSION,
            polygon: PolygonView {
                vertices: poly.points().iter().map(|p| [p.x, p.y]).collect(),
                area: poly.area(),
                clockwise: poly.orientation() == Orientation::Cw,
            },
            chords: chords.iter().map(|c| [c.lo(), c.hi()]).collect(),
            regions: sub
                .regions()
                .iter()
                .map(|r| RegionView {
                    id: r.id.0,
                    vertices: r.vertices.clone(),
                    area: r.area(),
                    centroid: [r.centroid.x, r.centroid.y],
                })
                .collect(),
            edges: sub
                .edges()
                .iter()
                .map(|e| EdgeView {
                    a: e.a.0,
                    b: e.b.0,
                    chord: [e.arc.0, e.arc.1],
                })
                .collect(),
            query: outcome.query.as_ref().map(|q| QueryView {
                endpoints: [q.endpoints.0, q.endpoints.1],
                path: q.path.iter().map(|r| r.0).collect(),
                cover: q.cover.clone(),
                kept_area: q.kept_area(),
                removed_area: q.removed_area(),
            }),
        }
    }
}
