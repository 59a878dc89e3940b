//! Exact 2D geometry kernel on the integer lattice.
//!
//! Purpose
//! - Validate the host polygon once (strictly convex, consistent winding,
//!   bounded coordinates) and provide the exact area predicates the rest of
//!   the engine relies on.
//! - Keep arithmetic in `i64`: with coordinates bounded by 1e6 and at most 100
//!   vertices the shoelace sum cannot overflow, so areas are bit-exact.
//!
//! Code cross-refs: `Polygon`, `PolygonCfg`, `twice_signed_area`, `area_centroid`

pub mod rand;
mod types;
mod util;

pub use types::{Orientation, Polygon, PolygonCfg};
pub use util::{
    area_centroid, convex_hull_strict, cross, signed_area, to_f64, twice_signed_area,
};
