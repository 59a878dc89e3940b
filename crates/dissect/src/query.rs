//! Query resolution: tree path between boundary regions and the area split.
//!
//! A query `(qa, qb)` names two host vertices. Each maps to the region owning
//! the boundary arc leaving it, `(q, q+1)`. The regions on the dual-tree path
//! between them form the kept area; the rest of the polygon is removed.

use crate::error::QueryError;
use crate::geom2::{twice_signed_area, Polygon};
use crate::subdivision::{RegionId, Subdivision};

/// Result of one query. Areas are stored doubled and exact.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryResult {
    pub endpoints: (usize, usize),
    /// Region ids along the tree path, from `qa`'s region to `qb`'s.
    pub path: Vec<RegionId>,
    /// Union of the path regions' vertices, ascending.
    pub cover: Vec<usize>,
    pub kept_twice: i64,
    pub removed_twice: i64,
}

impl QueryResult {
    #[inline]
    pub fn kept_area(&self) -> f64 {
        self.kept_twice as f64 / 2.0
    }

    #[inline]
    pub fn removed_area(&self) -> f64 {
        self.removed_twice as f64 / 2.0
    }

    #[inline]
    pub fn total_area(&self) -> f64 {
        (self.kept_twice + self.removed_twice) as f64 / 2.0
    }

    /// Number of chords crossed along the path.
    #[inline]
    pub fn hops(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Check query endpoints without resolving them.
pub fn validate_query(n: usize, qa: usize, qb: usize) -> Result<(), QueryError> {
    for index in [qa, qb] {
        if index >= n {
            return Err(QueryError::OutOfRange { index, n });
        }
    }
    if qa == qb {
        return Err(QueryError::SameVertex(qa));
    }
    Ok(())
}

/// Resolve `(qa, qb)` against a subdivision built for `poly`.
///
/// Pre: `sub` was built from `poly` (same vertex count).
pub fn resolve_query(
    poly: &Polygon,
    sub: &Subdivision,
    qa: usize,
    qb: usize,
) -> Result<QueryResult, QueryError> {
    let n = poly.len();
    validate_query(n, qa, qb)?;
    debug_assert_eq!(n, sub.vertex_count(), "subdivision built for another polygon");
    // Every forward boundary arc is owned by exactly one region.
    let owner = |q: usize| {
        sub.boundary_region(q)
            .ok_or(QueryError::OutOfRange { index: q, n })
    };
    let ra = owner(qa)?;
    let rb = owner(qb)?;
    let path = sub
        .path(ra, rb)
        .ok_or(QueryError::OutOfRange { index: qb, n })?;

    let mut in_cover = vec![false; n];
    for region in path.iter().filter_map(|&rid| sub.region(rid)) {
        for &v in &region.vertices {
            in_cover[v] = true;
        }
    }
    let cover: Vec<usize> = (0..n).filter(|&v| in_cover[v]).collect();
    let kept_twice = twice_signed_area(&poly.restrict(&cover)).abs();
    let removed_twice = poly.twice_area() - kept_twice;
    tracing::debug!(qa, qb, hops = path.len() - 1, kept_twice, removed_twice, "query resolved");
    Ok(QueryResult {
        endpoints: (qa, qb),
        path,
        cover,
        kept_twice,
        removed_twice,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chords::ChordSet;
    use crate::geom2::rand::{draw_chords, draw_convex_polygon, RadialCfg, ReplayToken, VertexCount};
    use crate::subdivision::build_subdivision;
    use proptest::prelude::*;

    fn hexagon() -> Polygon {
        Polygon::from_pairs(&[(2, 0), (4, 0), (6, 2), (4, 4), (2, 4), (0, 2)]).unwrap()
    }

    #[test]
    fn rejects_same_vertex_and_out_of_range() {
        let poly = hexagon();
        let sub = build_subdivision(&poly, &ChordSet::new(6));
        assert_eq!(
            resolve_query(&poly, &sub, 3, 3),
            Err(QueryError::SameVertex(3))
        );
        assert_eq!(
            resolve_query(&poly, &sub, 0, 9),
            Err(QueryError::OutOfRange { index: 9, n: 6 })
        );
    }

    #[test]
    fn no_chords_keeps_everything() {
        let poly = hexagon();
        let sub = build_subdivision(&poly, &ChordSet::new(6));
        let q = resolve_query(&poly, &sub, 1, 4).unwrap();
        assert_eq!(q.path, vec![RegionId(0)]);
        assert_eq!(q.cover, vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(q.removed_twice, 0);
        assert_eq!(q.kept_area(), poly.area());
    }

    #[test]
    fn fan_query_walks_the_tree() {
        let poly = hexagon();
        let mut set = ChordSet::new(6);
        set.insert(0, 2).unwrap();
        set.insert(0, 4).unwrap();
        let sub = build_subdivision(&poly, &set);
        // (1,2) lies in [0,1,2]; (4,5) lies in [0,4,5].
        let q = resolve_query(&poly, &sub, 1, 4).unwrap();
        assert_eq!(q.path, vec![RegionId(0), RegionId(1), RegionId(2)]);
        assert_eq!(q.hops(), 2);
        assert_eq!(q.cover, vec![0, 1, 2, 3, 4, 5]);

        // (2,3) and (3,4) both lie in the middle quad.
        let q = resolve_query(&poly, &sub, 2, 3).unwrap();
        assert_eq!(q.path, vec![RegionId(1)]);
        assert_eq!(q.cover, vec![0, 2, 3, 4]);
        assert_eq!(q.kept_twice + q.removed_twice, poly.twice_area());
        assert_eq!(q.kept_area() + q.removed_area(), q.total_area());
    }

    #[test]
    fn chord_endpoints_give_adjacent_regions() {
        let poly = hexagon();
        let mut set = ChordSet::new(6);
        set.insert(1, 4).unwrap();
        let sub = build_subdivision(&poly, &set);
        let q = resolve_query(&poly, &sub, 1, 4).unwrap();
        assert_eq!(q.path.len(), 2);
        assert!(sub.neighbors(q.path[0]).any(|r| r == q.path[1]));
    }

    proptest! {
        #[test]
        fn resolved_queries_partition_area(
            seed in 0u64..1_000,
            attempts in 0usize..120,
            qa_raw in 0usize..1_000,
            offset in 0usize..1_000,
        ) {
            let cfg = RadialCfg {
                vertex_count: VertexCount::Uniform { min: 3, max: 100 },
                ..RadialCfg::default()
            };
            let tok = ReplayToken { seed, index: attempts as u64 };
            let poly = draw_convex_polygon(cfg, tok).unwrap();
            let n = poly.len();
            let mut rng = tok.to_std_rng();
            let set = draw_chords(n, attempts, &mut rng);
            let sub = build_subdivision(&poly, &set);

            let qa = qa_raw % n;
            let qb = (qa + 1 + offset % (n - 1)) % n;
            let q = resolve_query(&poly, &sub, qa, qb).unwrap();

            prop_assert_eq!(q.kept_twice + q.removed_twice, poly.twice_area());
            prop_assert!(q.kept_twice > 0);
            prop_assert!(q.removed_twice >= 0);
            prop_assert_eq!(Some(q.path[0]), sub.boundary_region(qa));
            prop_assert_eq!(q.path.last().copied(), sub.boundary_region(qb));
            for w in q.path.windows(2) {
                prop_assert!(sub.neighbors(w[0]).any(|r| r == w[1]));
            }
            prop_assert!(q.cover.windows(2).all(|w| w[0] < w[1]));
            prop_assert!(q.cover.contains(&qa) && q.cover.contains(&qb));

            // The two boundary arcs leaving a chord's endpoints lie on opposite sides.
            for c in set.iter().take(8) {
                let q = resolve_query(&poly, &sub, c.lo(), c.hi()).unwrap();
                prop_assert!(q.path.len() >= 2);
                prop_assert_eq!(q.kept_twice + q.removed_twice, poly.twice_area());
            }
        }
    }
}
