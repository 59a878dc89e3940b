//! Single-owner editing session with a version-keyed subdivision cache.
//!
//! Mutations take `&mut self`, so callers serialize them against reads by
//! construction. The cached subdivision is reused until the chord set changes.

use crate::chords::{Chord, ChordSet};
use crate::error::{ChordError, OpError, QueryError};
use crate::geom2::Polygon;
use crate::query::{resolve_query, validate_query, QueryResult};
use crate::script::Op;
use crate::subdivision::{build_subdivision, Subdivision};

#[derive(Clone, Debug)]
pub struct Session {
    poly: Polygon,
    chords: ChordSet,
    version: u64,
    cache: Option<(u64, Subdivision)>,
    last_query: Option<(usize, usize)>,
}

impl Session {
    pub fn new(poly: Polygon) -> Self {
        let chords = ChordSet::new(poly.len());
        Self {
            poly,
            chords,
            version: 0,
            cache: None,
            last_query: None,
        }
    }

    #[inline]
    pub fn polygon(&self) -> &Polygon {
        &self.poly
    }

    #[inline]
    pub fn chords(&self) -> &ChordSet {
        &self.chords
    }

    /// Bumped on every successful mutation.
    #[inline]
    pub fn version(&self) -> u64 {
        self.version
    }

    #[inline]
    pub fn last_query(&self) -> Option<(usize, usize)> {
        self.last_query
    }

    pub fn insert(&mut self, a: usize, b: usize) -> Result<Chord, ChordError> {
        let c = self.chords.insert(a, b)?;
        self.version += 1;
        Ok(c)
    }

    pub fn remove(&mut self, a: usize, b: usize) -> Result<Chord, ChordError> {
        let c = self.chords.remove(a, b)?;
        self.version += 1;
        Ok(c)
    }

    /// Current subdivision, rebuilt only if the chord set changed since the last build.
    pub fn subdivision(&mut self) -> &Subdivision {
        cached(&mut self.cache, self.version, &self.poly, &self.chords)
    }

    /// Resolve `(qa, qb)` against the current subdivision and remember it as the last query.
    pub fn query(&mut self, qa: usize, qb: usize) -> Result<QueryResult, QueryError> {
        validate_query(self.poly.len(), qa, qb)?;
        self.last_query = Some((qa, qb));
        let sub = cached(&mut self.cache, self.version, &self.poly, &self.chords);
        resolve_query(&self.poly, sub, qa, qb)
    }

    /// Apply one scripted operation; a query is resolved and returned.
    pub fn apply(&mut self, op: Op) -> Result<Option<QueryResult>, OpError> {
        match op {
            Op::Insert(a, b) => self.insert(a, b).map(|_| None).map_err(Into::into),
            Op::Remove(a, b) => self.remove(a, b).map(|_| None).map_err(Into::into),
            Op::Query(a, b) => self.query(a, b).map(Some).map_err(Into::into),
        }
    }
}

fn cached<'a>(
    cache: &'a mut Option<(u64, Subdivision)>,
    version: u64,
    poly: &Polygon,
    chords: &ChordSet,
) -> &'a Subdivision {
    if cache.as_ref().is_some_and(|(v, _)| *v != version) {
        *cache = None;
    }
    let (_, sub) = cache.get_or_insert_with(|| (version, build_subdivision(poly, chords)));
    sub
}
