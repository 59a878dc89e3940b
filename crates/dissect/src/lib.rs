//! Dissection engine for convex polygons cut by non-crossing chords.
//!
//! Data flows one way: `chords::ChordSet` validates mutations, the
//! `subdivision` builder turns the final chord set into regions and their dual
//! tree, and `query` resolves a vertex pair into a tree path and an area split.
//! `geom2` provides the exact integer kernel used by all three.
//!
//! Conventions
//! - Vertex indices are 0-based and follow the polygon's boundary order.
//! - Areas are computed exactly as doubled `i64` values; `f64` accessors halve them.
//! - Everything is single-threaded and synchronous; there is no internal locking.

pub mod api;
pub mod chords;
pub mod error;
pub mod geom2;
pub mod query;
pub mod script;
pub mod session;
pub mod subdivision;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::chords::{Chord, ChordSet};
    pub use crate::error::{ChordError, OpError, PolygonError, QueryError, ScriptError};
    pub use crate::geom2::{Orientation, Polygon, PolygonCfg};
    pub use crate::query::{resolve_query, QueryResult};
    pub use crate::script::{parse_script, replay, IndexBase, Op, Outcome, Replay};
    pub use crate::session::Session;
    pub use crate::subdivision::{build_subdivision, DualEdge, Region, RegionId, Subdivision};
    pub use nalgebra::Vector2 as Vec2;
}
