//! Operation scripts: parse, replay, resolve.
//!
//! Text form, one operation per line (blank lines and `#` comments ignored):
//!
//! ```text
//! + 0 2        # or: insert 0 2
//! - 0 2        # or: remove 0 2
//! ? 1 4        # or: query 1 4
//! ```
//!
//! Indices are 0-based inside the engine; `IndexBase::One` shifts them at parse time.
//! Replay stops at the first failing operation, since later operations were
//! written assuming earlier ones succeeded. Only the most recent query is kept.

use std::fmt;
use std::str::FromStr;

use crate::chords::ChordSet;
use crate::error::{OpError, QueryError, ScriptError};
use crate::geom2::Polygon;
use crate::query::{resolve_query, validate_query, QueryResult};
use crate::subdivision::{build_subdivision, Subdivision};

/// One scripted operation (0-based indices).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Insert(usize, usize),
    Remove(usize, usize),
    Query(usize, usize),
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Op::Insert(a, b) => write!(f, "+ {a} {b}"),
            Op::Remove(a, b) => write!(f, "- {a} {b}"),
            Op::Query(a, b) => write!(f, "? {a} {b}"),
        }
    }
}

/// Numbering convention for indices in script text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IndexBase {
    #[default]
    Zero,
    One,
}

impl Op {
    /// Parse one line under the given numbering.
    pub fn parse(text: &str, base: IndexBase) -> Result<Op, OpError> {
        let fail = |reason: &str| OpError::Parse {
            text: text.to_string(),
            reason: reason.to_string(),
        };
        let mut parts = text.split_whitespace();
        let kind = parts.next().ok_or_else(|| fail("empty operation"))?;
        let mut index = || -> Result<usize, OpError> {
            let raw = parts.next().ok_or_else(|| fail("expected two vertex indices"))?;
            let v: usize = raw
                .parse()
                .map_err(|_| fail(&format!("invalid vertex index {raw:?}")))?;
            match base {
                IndexBase::Zero => Ok(v),
                IndexBase::One => v
                    .checked_sub(1)
                    .ok_or_else(|| fail("1-based index must be at least 1")),
            }
        };
        let a = index()?;
        let b = index()?;
        if parts.next().is_some() {
            return Err(fail("trailing input"));
        }
        match kind {
            "+" | "insert" => Ok(Op::Insert(a, b)),
            "-" | "remove" => Ok(Op::Remove(a, b)),
            "?" | "query" => Ok(Op::Query(a, b)),
            other => Err(fail(&format!("unknown operation {other:?}"))),
        }
    }
}

impl FromStr for Op {
    type Err = OpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Op::parse(s, IndexBase::Zero)
    }
}

/// Parse a multi-line script; positions count operations, not lines.
pub fn parse_script(text: &str, base: IndexBase) -> Result<Vec<Op>, ScriptError> {
    text.lines()
        .map(|line| line.split('#').next().unwrap_or("").trim())
        .filter(|line| !line.is_empty())
        .enumerate()
        .map(|(position, line)| Op::parse(line, base).map_err(|e| ScriptError::new(position, e)))
        .collect()
}

/// Final state after replaying a script.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Replay {
    pub chords: ChordSet,
    /// Most recent query, if any; earlier ones leave no trace.
    pub last_query: Option<(usize, usize)>,
}

/// Subdivision plus the resolved last query.
#[derive(Clone, Debug)]
pub struct Outcome {
    pub subdivision: Subdivision,
    pub query: Option<QueryResult>,
}

impl Replay {
    /// Build the subdivision and resolve the last query, if one was issued.
    pub fn resolve(&self, poly: &Polygon) -> Result<Outcome, QueryError> {
        let subdivision = build_subdivision(poly, &self.chords);
        let query = self
            .last_query
            .map(|(qa, qb)| resolve_query(poly, &subdivision, qa, qb))
            .transpose()?;
        Ok(Outcome { subdivision, query })
    }
}

/// Apply operations in order against a fresh chord set over `poly`.
pub fn replay(poly: &Polygon, ops: &[Op]) -> Result<Replay, ScriptError> {
    let mut chords = ChordSet::new(poly.len());
    let mut last_query = None;
    for (position, op) in ops.iter().enumerate() {
        let res: Result<(), OpError> = match *op {
            Op::Insert(a, b) => chords.insert(a, b).map(|_| ()).map_err(Into::into),
            Op::Remove(a, b) => chords.remove(a, b).map(|_| ()).map_err(Into::into),
            Op::Query(a, b) => validate_query(poly.len(), a, b)
                .map(|()| last_query = Some((a, b)))
                .map_err(Into::into),
        };
        if let Err(source) = res {
            tracing::debug!(position, op = %op, error = %source, "replay stopped");
            return Err(ScriptError::new(position, source));
        }
    }
    Ok(Replay { chords, last_query })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chords::Chord;
    use crate::error::ChordError;

    fn square() -> Polygon {
        Polygon::from_pairs(&[(0, 0), (4, 0), (4, 4), (0, 4)]).unwrap()
    }

    #[test]
    fn parses_symbols_words_and_comments() {
        let text = "# header\n+ 0 2\n\ninsert 1 3 # trailing\n- 0 2\n? 1 3\n";
        let ops = parse_script(text, IndexBase::Zero).unwrap();
        assert_eq!(
            ops,
            vec![
                Op::Insert(0, 2),
                Op::Insert(1, 3),
                Op::Remove(0, 2),
                Op::Query(1, 3)
            ]
        );
        assert_eq!(ops[2].to_string(), "- 0 2");
        assert_eq!("query 4 5".parse::<Op>().unwrap(), Op::Query(4, 5));
    }

    #[test]
    fn one_based_indices_shift_down() {
        let ops = parse_script("+ 1 3\n? 2 4", IndexBase::One).unwrap();
        assert_eq!(ops, vec![Op::Insert(0, 2), Op::Query(1, 3)]);
        let err = parse_script("+ 0 3", IndexBase::One).unwrap_err();
        assert_eq!(err.position, 0);
        assert!(matches!(err.source, OpError::Parse { .. }));
    }

    #[test]
    fn parse_errors_report_position() {
        let err = parse_script("+ 0 2\n* 1 3\n", IndexBase::Zero).unwrap_err();
        assert_eq!(err.position, 1);
        assert!(err.to_string().starts_with("operation 1:"));
        assert!(parse_script("+ 0", IndexBase::Zero).is_err());
        assert!(parse_script("+ 0 2 5", IndexBase::Zero).is_err());
        assert!(parse_script("+ a 2", IndexBase::Zero).is_err());
    }

    #[test]
    fn replay_keeps_only_last_query() {
        let poly = square();
        let ops = [Op::Query(0, 2), Op::Insert(0, 2), Op::Query(1, 3)];
        let r = replay(&poly, &ops).unwrap();
        assert_eq!(r.last_query, Some((1, 3)));
        assert!(r.chords.contains(2, 0));

        let out = r.resolve(&poly).unwrap();
        assert_eq!(out.subdivision.regions().len(), 2);
        let q = out.query.unwrap();
        assert_eq!(q.path.len(), 2);
        assert_eq!(q.kept_area() + q.removed_area(), 16.0);
    }

    #[test]
    fn replay_stops_at_first_failure() {
        let poly = square();
        let ops = [Op::Insert(0, 2), Op::Insert(1, 3), Op::Remove(0, 2)];
        let err = replay(&poly, &ops).unwrap_err();
        assert_eq!(err.position, 1);
        assert_eq!(
            err.source,
            OpError::Chord(ChordError::Crossing {
                chord: Chord::new(1, 3),
                existing: Chord::new(0, 2),
            })
        );

        let err = replay(&poly, &[Op::Remove(1, 3)]).unwrap_err();
        assert!(err.to_string().contains("chord not found"));

        let err = replay(&poly, &[Op::Query(2, 2)]).unwrap_err();
        assert_eq!(err.source, OpError::Query(QueryError::SameVertex(2)));
    }

    #[test]
    fn replay_without_query_resolves_subdivision_only() {
        let poly = square();
        let out = replay(&poly, &[]).unwrap().resolve(&poly).unwrap();
        assert!(out.query.is_none());
        assert_eq!(out.subdivision.regions().len(), 1);
    }
}
