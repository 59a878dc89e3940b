//! Non-crossing chord sets over a fixed convex polygon.
//!
//! Each mutation checks only the new chord against the existing (already valid)
//! members, so the non-crossing invariant holds inductively. On a convex polygon
//! whose indices follow the boundary, two chords without a shared endpoint cross
//! iff their index intervals interleave; no coordinates are needed.

use std::fmt;

use crate::error::ChordError;

/// Unordered vertex pair stored as `(lo, hi)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Chord {
    lo: usize,
    hi: usize,
}

impl Chord {
    /// Normalize without validation; see `ChordSet::insert` for the checks.
    #[inline]
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            lo: a.min(b),
            hi: a.max(b),
        }
    }

    #[inline]
    pub fn lo(&self) -> usize {
        self.lo
    }

    #[inline]
    pub fn hi(&self) -> usize {
        self.hi
    }

    /// Both directed arcs, `(lo, hi)` first.
    #[inline]
    pub fn arcs(&self) -> [(usize, usize); 2] {
        [(self.lo, self.hi), (self.hi, self.lo)]
    }

    #[inline]
    pub fn has_endpoint(&self, v: usize) -> bool {
        self.lo == v || self.hi == v
    }

    /// Endpoint opposite to `v`, if `v` is an endpoint.
    #[inline]
    pub fn other(&self, v: usize) -> Option<usize> {
        if v == self.lo {
            Some(self.hi)
        } else if v == self.hi {
            Some(self.lo)
        } else {
            None
        }
    }

    /// Interleaving test. Chords sharing an endpoint never cross.
    pub fn crosses(&self, other: &Chord) -> bool {
        if self.has_endpoint(other.lo) || self.has_endpoint(other.hi) {
            return false;
        }
        let inside = |v: usize| self.lo < v && v < self.hi;
        inside(other.lo) != inside(other.hi)
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lo, self.hi)
    }
}

impl From<(usize, usize)> for Chord {
    fn from((a, b): (usize, usize)) -> Self {
        Chord::new(a, b)
    }
}

/// Ordered collection of pairwise non-crossing chords over an `n`-gon.
///
/// Invariants:
/// - Every member joins two distinct, non-adjacent vertices in `[0, n)`.
/// - No two members cross; no duplicates.
/// - Insertion order is preserved across removals of other members.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChordSet {
    n: usize,
    chords: Vec<Chord>,
}

impl ChordSet {
    pub fn new(n: usize) -> Self {
        Self {
            n,
            chords: Vec::new(),
        }
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.chords.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chords.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Chord> {
        self.chords.iter()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Chord] {
        &self.chords
    }

    pub fn contains(&self, a: usize, b: usize) -> bool {
        self.position(Chord::new(a, b)).is_some()
    }

    /// First member crossed by the candidate `{a, b}`, in insertion order.
    pub fn crossing(&self, a: usize, b: usize) -> Option<Chord> {
        let cand = Chord::new(a, b);
        self.chords.iter().copied().find(|c| c.crosses(&cand))
    }

    /// Insert `{a, b}` after checking endpoints, duplicates, and crossings.
    pub fn insert(&mut self, a: usize, b: usize) -> Result<Chord, ChordError> {
        let chord = self.validate_endpoints(a, b)?;
        if self.position(chord).is_some() {
            return Err(ChordError::Duplicate(chord));
        }
        if let Some(existing) = self.crossing(a, b) {
            return Err(ChordError::Crossing { chord, existing });
        }
        self.chords.push(chord);
        tracing::debug!(chord = %chord, count = self.chords.len(), "chord inserted");
        Ok(chord)
    }

    /// Remove `{a, b}`; fails if it is not a member.
    pub fn remove(&mut self, a: usize, b: usize) -> Result<Chord, ChordError> {
        let chord = Chord::new(a, b);
        let Some(pos) = self.position(chord) else {
            return Err(ChordError::NotFound(chord));
        };
        self.chords.remove(pos);
        tracing::debug!(chord = %chord, count = self.chords.len(), "chord removed");
        Ok(chord)
    }

    /// Membership equality, independent of insertion order.
    pub fn same_members(&self, other: &ChordSet) -> bool {
        if self.n != other.n || self.len() != other.len() {
            return false;
        }
        let mut a = self.chords.clone();
        let mut b = other.chords.clone();
        a.sort_unstable();
        b.sort_unstable();
        a == b
    }

    fn position(&self, chord: Chord) -> Option<usize> {
        self.chords.iter().position(|&c| c == chord)
    }

    fn validate_endpoints(&self, a: usize, b: usize) -> Result<Chord, ChordError> {
        for index in [a, b] {
            if index >= self.n {
                return Err(ChordError::OutOfRange { index, n: self.n });
            }
        }
        if a == b {
            return Err(ChordError::Degenerate(a));
        }
        if (a + 1) % self.n == b || (b + 1) % self.n == a {
            return Err(ChordError::BoundaryEdge { a, b });
        }
        Ok(Chord::new(a, b))
    }
}

impl<'a> IntoIterator for &'a ChordSet {
    type Item = &'a Chord;
    type IntoIter = std::slice::Iter<'a, Chord>;

    fn into_iter(self) -> Self::IntoIter {
        self.chords.iter()
    }
}

#[cfg(test)]
mod tests;
