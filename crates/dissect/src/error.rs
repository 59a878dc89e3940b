//! Error taxonomy for the dissection engine.
//!
//! Every failure is local to the operation that raised it: a rejected insert or
//! remove leaves the chord set untouched, and callers may keep going.

use crate::chords::Chord;

/// Host polygon rejected during construction.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum PolygonError {
    #[error("polygon needs at least {min} vertices, got {got}")]
    TooFewVertices { got: usize, min: usize },

    #[error("polygon supports at most {max} vertices, got {got}")]
    TooManyVertices { got: usize, max: usize },

    #[error("vertex {vertex} coordinate {value} outside [-{bound}, {bound}]")]
    CoordinateOutOfRange { vertex: usize, value: i64, bound: i64 },

    #[error("vertex {vertex} coordinate {value} is not an integer")]
    NonInteger { vertex: usize, value: f64 },

    #[error("vertex {vertex} is collinear with its neighbours")]
    Collinear { vertex: usize },

    #[error("vertex {vertex} turns against the winding set by vertex 0")]
    InconsistentWinding { vertex: usize },

    #[error("vertex {vertex} is not on the inner side of edge ({edge_from}, {edge_to})")]
    NonConvex {
        vertex: usize,
        edge_from: usize,
        edge_to: usize,
    },
}

/// Chord rejected by the chord set.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ChordError {
    #[error("vertex index {index} out of range for polygon with {n} vertices")]
    OutOfRange { index: usize, n: usize },

    #[error("chord endpoints must differ, got ({0}, {0})")]
    Degenerate(usize),

    #[error("chord must not be polygon edge: ({a}, {b})")]
    BoundaryEdge { a: usize, b: usize },

    #[error("chord {0} already present")]
    Duplicate(Chord),

    #[error("chord {chord} crosses existing chord {existing}")]
    Crossing { chord: Chord, existing: Chord },

    #[error("chord not found: {0}")]
    NotFound(Chord),
}

/// Query rejected before resolution.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    #[error("query endpoints must differ, got ({0}, {0})")]
    SameVertex(usize),

    #[error("query vertex {index} out of range for polygon with {n} vertices")]
    OutOfRange { index: usize, n: usize },
}

/// Failure of one scripted operation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum OpError {
    #[error(transparent)]
    Chord(#[from] ChordError),

    #[error(transparent)]
    Query(#[from] QueryError),

    #[error("cannot parse operation {text:?}: {reason}")]
    Parse { text: String, reason: String },
}

/// Operation failure tagged with its 0-based position in the script.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("operation {position}: {source}")]
pub struct ScriptError {
    pub position: usize,
    #[source]
    pub source: OpError,
}

impl ScriptError {
    pub fn new(position: usize, source: impl Into<OpError>) -> Self {
        Self {
            position,
            source: source.into(),
        }
    }
}
