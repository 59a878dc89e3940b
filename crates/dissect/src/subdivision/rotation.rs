//! Rotation system: per-vertex neighbour order and the face-tracing rule.
//!
//! On a convex polygon the radial order of neighbours around `v` matches their
//! cyclic index order, so sorting by `(w - v) mod n` is enough; no angles needed.

use crate::chords::ChordSet;

#[derive(Clone, Debug)]
pub struct RotationSystem {
    n: usize,
    /// `nbrs[v]` sorted by `rel(v, w)` descending.
    nbrs: Vec<Vec<usize>>,
}

/// Position of `w` relative to `v` on the cyclic vertex order.
#[inline]
fn rel(n: usize, v: usize, w: usize) -> usize {
    (w + n - v) % n
}

impl RotationSystem {
    pub fn new(chords: &ChordSet) -> Self {
        let n = chords.vertex_count();
        let mut nbrs: Vec<Vec<usize>> = (0..n)
            .map(|v| vec![(v + n - 1) % n, (v + 1) % n])
            .collect();
        for c in chords {
            nbrs[c.lo()].push(c.hi());
            nbrs[c.hi()].push(c.lo());
        }
        for (v, list) in nbrs.iter_mut().enumerate() {
            list.sort_unstable_by_key(|&w| std::cmp::Reverse(rel(n, v, w)));
            list.dedup();
        }
        Self { n, nbrs }
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn neighbors(&self, v: usize) -> &[usize] {
        &self.nbrs[v]
    }

    /// Next arc out of `dst` after arriving along `(src, dst)`: the first
    /// neighbour whose relative position is below `src`'s, wrapping to the front.
    pub fn next_arc(&self, src: usize, dst: usize) -> usize {
        let list = &self.nbrs[dst];
        let key = rel(self.n, dst, src);
        // Descending order: everything before `idx` has rel >= key.
        let idx = list.partition_point(|&w| rel(self.n, dst, w) >= key);
        if idx < list.len() {
            list[idx]
        } else {
            list[0]
        }
    }

    /// Vertices of the face to the left of arc `(src, dst)` (the side bounded
    /// by forward boundary arcs `(i, i+1)`), starting at `src`.
    pub fn trace_face(&self, src: usize, dst: usize) -> Vec<usize> {
        let mut face = Vec::new();
        let (mut u, mut v) = (src, dst);
        loop {
            face.push(u);
            let w = self.next_arc(u, v);
            (u, v) = (v, w);
            if (u, v) == (src, dst) || face.len() > self.n {
                break;
            }
        }
        tracing::trace!(src, dst, len = face.len(), "face traced");
        face
    }
}
