//! Subdivision construction (regions + dual tree) from a finalized chord set.

use crate::chords::ChordSet;
use crate::geom2::{area_centroid, to_f64, twice_signed_area, Polygon};

use super::rotation::RotationSystem;
use super::types::{DualEdge, Region, RegionId, Subdivision};

/// Build regions and the dual tree.
///
/// Explicit-stack DFS over directed arcs. A region is created the first time
/// one of its arcs is reached; every arc on its face is memoized, and each
/// reversed arc is resolved in turn. Reversed boundary arcs `(i+1, i)` face the
/// exterior. Ids follow pre-order from arc `(0, 1)`, and a dual edge is emitted
/// only when a chord leads to a fresh region, so each chord yields one edge.
///
/// Pre: `chords` is non-crossing over `poly` (guaranteed by `ChordSet`).
pub fn build_subdivision(poly: &Polygon, chords: &ChordSet) -> Subdivision {
    let n = poly.len();
    debug_assert_eq!(n, chords.vertex_count(), "chord set built for another polygon");
    let rot = RotationSystem::new(chords);
    let mut b = Builder {
        poly,
        rot: &rot,
        n,
        regions: Vec::with_capacity(chords.len() + 1),
        edges: Vec::with_capacity(chords.len()),
        owner: vec![None; n * n],
    };

    // Frame: (region, arcs of its face, next arc to resolve).
    let root = b.open_region(0, 1);
    let mut stack: Vec<(RegionId, Vec<(usize, usize)>, usize)> = vec![root];
    while let Some((rid, arcs, next)) = stack.last_mut() {
        let rid = *rid;
        let Some(&(u, v)) = arcs.get(*next) else {
            stack.pop();
            continue;
        };
        *next += 1;
        // Reverse of (u, v): already owned, or exterior.
        if b.owner[v * n + u].is_some() || (u + 1) % n == v {
            continue;
        }
        let child = b.open_region(v, u);
        b.edges.push(DualEdge {
            a: rid,
            b: child.0,
            arc: (u, v),
        });
        stack.push(child);
    }

    let mut adj = vec![Vec::new(); b.regions.len()];
    for (k, e) in b.edges.iter().enumerate() {
        adj[e.a.0].push(k);
        adj[e.b.0].push(k);
    }
    tracing::debug!(
        n,
        regions = b.regions.len(),
        edges = b.edges.len(),
        "subdivision built"
    );
    Subdivision {
        n,
        regions: b.regions,
        edges: b.edges,
        adj,
        owner: b.owner,
    }
}

struct Builder<'a> {
    poly: &'a Polygon,
    rot: &'a RotationSystem,
    n: usize,
    regions: Vec<Region>,
    edges: Vec<DualEdge>,
    owner: Vec<Option<RegionId>>,
}

impl Builder<'_> {
    /// Assign a fresh id, trace the face of `(src, dst)`, memoize its arcs.
    fn open_region(&mut self, src: usize, dst: usize) -> (RegionId, Vec<(usize, usize)>, usize) {
        let id = RegionId(self.regions.len());
        let vertices = self.rot.trace_face(src, dst);
        let m = vertices.len();
        let arcs: Vec<(usize, usize)> = (0..m)
            .map(|i| (vertices[i], vertices[(i + 1) % m]))
            .collect();
        for &(u, v) in &arcs {
            self.owner[u * self.n + v] = Some(id);
        }
        let pts = self.poly.restrict(&vertices);
        let centroid = area_centroid(&pts).unwrap_or_else(|| to_f64(pts[0]));
        self.regions.push(Region {
            id,
            vertices,
            twice_area: twice_signed_area(&pts).abs(),
            centroid,
        });
        (id, arcs, 0)
    }
}
