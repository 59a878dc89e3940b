//! Planar subdivision of a convex polygon by non-crossing chords.
//!
//! Purpose
//! - Turn a finalized `ChordSet` into regions (vertex-index cycles) and the
//!   dual tree joining regions across chords.
//!
//! Design
//! - Rotation system (sorted adjacency lists) plus a memo keyed by directed arc
//!   replaces a pointer-linked half-edge mesh; regions are addressed by dense
//!   `RegionId`s, so there is no cyclic ownership.
//! - Derived data only: rebuilt from scratch whenever it is read; see
//!   `session::Session` for version-keyed caching.
//!
//! Code cross-refs: `chords::ChordSet`, `geom2::Polygon`, `query::resolve_query`

mod build;
mod rotation;
mod types;

pub use build::build_subdivision;
pub use rotation::RotationSystem;
pub use types::{DualEdge, Region, RegionId, Subdivision};
