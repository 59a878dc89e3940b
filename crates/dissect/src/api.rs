//! Curated surface for renderers and other consumers.
//!
//! Prefer these re-exports over reaching into submodules; internal layout may
//! change, this list is what outer layers are expected to depend on.

// Geometry kernel
pub use crate::geom2::{
    area_centroid, signed_area, twice_signed_area, Orientation, Polygon, PolygonCfg,
};
// Random inputs
pub use crate::geom2::rand::{
    draw_chords, draw_convex_polygon, RadialCfg, ReplayToken, VertexCount,
};
// Chords and subdivision
pub use crate::chords::{Chord, ChordSet};
pub use crate::subdivision::{
    build_subdivision, DualEdge, Region, RegionId, RotationSystem, Subdivision,
};
// Queries, scripts, sessions
pub use crate::query::{resolve_query, validate_query, QueryResult};
pub use crate::script::{parse_script, replay, IndexBase, Op, Outcome, Replay};
pub use crate::session::Session;
