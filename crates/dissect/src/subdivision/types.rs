//! Data types for regions and the dual tree.
//!
//! Kept small and explicit to make `build` and `query` easy to read.

use std::collections::VecDeque;
use std::fmt;

use nalgebra::Vector2;

use crate::chords::Chord;

/// Region identifier; ids are dense, `0..regions.len()`, assigned in DFS pre-order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegionId(pub usize);

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{}", self.0)
    }
}

/// Simple sub-polygon as a cyclic list of host vertex indices in boundary order.
#[derive(Clone, Debug, PartialEq)]
pub struct Region {
    pub id: RegionId,
    pub vertices: Vec<usize>,
    /// Twice the absolute area, exact.
    pub twice_area: i64,
    /// Area centroid; label anchor for renderers.
    pub centroid: Vector2<f64>,
}

impl Region {
    #[inline]
    pub fn area(&self) -> f64 {
        self.twice_area as f64 / 2.0
    }

    /// Directed arcs `(v[i], v[i+1])` around the region.
    pub fn arcs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let m = self.vertices.len();
        (0..m).map(move |i| (self.vertices[i], self.vertices[(i + 1) % m]))
    }
}

/// Dual-tree edge: one per chord, joining the two regions it separates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DualEdge {
    pub a: RegionId,
    pub b: RegionId,
    /// The chord as traversed on `a`'s boundary; `b` sees it reversed.
    pub arc: (usize, usize),
}

impl DualEdge {
    #[inline]
    pub fn chord(&self) -> Chord {
        Chord::new(self.arc.0, self.arc.1)
    }

    /// The chord as directed on `region`'s boundary, `None` if not incident.
    pub fn arc_from(&self, region: RegionId) -> Option<(usize, usize)> {
        if region == self.a {
            Some(self.arc)
        } else if region == self.b {
            Some((self.arc.1, self.arc.0))
        } else {
            None
        }
    }

    /// Region across the chord from `region`.
    pub fn opposite(&self, region: RegionId) -> Option<RegionId> {
        if region == self.a {
            Some(self.b)
        } else if region == self.b {
            Some(self.a)
        } else {
            None
        }
    }
}

/// Regions plus dual tree of a dissected polygon.
///
/// Invariants:
/// - `regions.len() == edges.len() + 1`; the dual graph is a tree.
/// - `owner[u * n + v]` is the region whose boundary contains arc `(u, v)`.
#[derive(Clone, Debug)]
pub struct Subdivision {
    pub(crate) n: usize,
    pub(crate) regions: Vec<Region>,
    pub(crate) edges: Vec<DualEdge>,
    pub(crate) adj: Vec<Vec<usize>>, // edge indices incident to region k
    pub(crate) owner: Vec<Option<RegionId>>,
}

impl Subdivision {
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    #[inline]
    pub fn edges(&self) -> &[DualEdge] {
        &self.edges
    }

    /// Region by id; `None` for ids this subdivision never issued.
    #[inline]
    pub fn region(&self, id: RegionId) -> Option<&Region> {
        self.regions.get(id.0)
    }

    /// Owner of directed arc `(u, v)`; `None` for reversed boundary edges and non-edges.
    pub fn region_of_arc(&self, u: usize, v: usize) -> Option<RegionId> {
        if u >= self.n || v >= self.n {
            return None;
        }
        self.owner[u * self.n + v]
    }

    /// Region bordering boundary edge `(v, v+1)`.
    pub fn boundary_region(&self, v: usize) -> Option<RegionId> {
        self.region_of_arc(v, (v + 1) % self.n)
    }

    /// Dual edges incident to `id`.
    pub fn incident(&self, id: RegionId) -> impl Iterator<Item = &DualEdge> + '_ {
        self.adj[id.0].iter().map(move |&e| &self.edges[e])
    }

    /// Regions adjacent across a chord.
    pub fn neighbors(&self, id: RegionId) -> impl Iterator<Item = RegionId> + '_ {
        self.incident(id).filter_map(move |e| e.opposite(id))
    }

    #[inline]
    pub fn degree(&self, id: RegionId) -> usize {
        self.adj[id.0].len()
    }

    /// Unique tree path `from → to` (inclusive), found by BFS.
    ///
    /// Returns `None` only if the ids are out of range.
    pub fn path(&self, from: RegionId, to: RegionId) -> Option<Vec<RegionId>> {
        let m = self.regions.len();
        if from.0 >= m || to.0 >= m {
            return None;
        }
        let mut parent: Vec<Option<RegionId>> = vec![None; m];
        let mut seen = vec![false; m];
        let mut queue = VecDeque::from([from]);
        seen[from.0] = true;
        while let Some(cur) = queue.pop_front() {
            if cur == to {
                break;
            }
            for next in self.neighbors(cur) {
                if !seen[next.0] {
                    seen[next.0] = true;
                    parent[next.0] = Some(cur);
                    queue.push_back(next);
                }
            }
        }
        if !seen[to.0] {
            return None;
        }
        let mut path = vec![to];
        let mut cur = to;
        while let Some(p) = parent[cur.0] {
            path.push(p);
            cur = p;
        }
        path.reverse();
        Some(path)
    }

    /// Connected with `regions - 1` edges.
    pub fn is_tree(&self) -> bool {
        let m = self.regions.len();
        if m == 0 || self.edges.len() + 1 != m {
            return false;
        }
        let mut seen = vec![false; m];
        let mut stack = vec![RegionId(0)];
        seen[0] = true;
        let mut count = 1;
        while let Some(cur) = stack.pop() {
            for next in self.neighbors(cur) {
                if !seen[next.0] {
                    seen[next.0] = true;
                    count += 1;
                    stack.push(next);
                }
            }
        }
        count == m
    }
}
