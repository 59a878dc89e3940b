//! Random convex lattice polygons and chord sets (radial jitter + replay tokens).
//!
//! Model
//! - Start from `n` equally spaced angles on [0, 2π), add bounded angular and
//!   radial jitter, round to the integer lattice, and keep the strict hull.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.
//!
//! Used by property tests and benches; nothing in the engine depends on it.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::Polygon;
use super::util::convex_hull_strict;
use crate::chords::ChordSet;

/// Vertex count distribution.
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}
impl VertexCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            VertexCount::Fixed(n) => n.max(3),
            VertexCount::Uniform { min, max } => {
                let lo = min.max(3);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Radial-jitter sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct RadialCfg {
    pub vertex_count: VertexCount,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n. Clamped to [0, 0.49].
    pub angle_jitter_frac: f64,
    /// Radial jitter (relative amplitude). Radii = `base_radius * (1 + u)`, with `u∈[-radial_jitter, radial_jitter]`.
    pub radial_jitter: f64,
    /// Base radius in lattice units. Large radii keep rounding from merging vertices.
    pub base_radius: f64,
    /// Emit vertices clockwise instead of counterclockwise.
    pub clockwise: bool,
}
impl Default for RadialCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Fixed(12),
            angle_jitter_frac: 0.3,
            radial_jitter: 0.1,
            base_radius: 100_000.0,
            clockwise: false,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}
impl ReplayToken {
    #[inline]
    pub fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw a random strictly convex lattice polygon.
///
/// The hull may drop vertices that rounding made collinear, so the vertex
/// count can fall below the sampled `n`. Returns `None` if the result fails
/// validation (e.g. radius outside the coordinate bound, more than 100 vertices).
pub fn draw_convex_polygon(cfg: RadialCfg, tok: ReplayToken) -> Option<Polygon> {
    let mut rng = tok.to_std_rng();
    let n = cfg.vertex_count.sample(&mut rng);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let rj = cfg.radial_jitter.clamp(0.0, 0.9);
    let r0 = cfg.base_radius.max(10.0);
    let delta = std::f64::consts::TAU / (n as f64);
    let phase = rng.gen::<f64>() * std::f64::consts::TAU;
    let pts: Vec<Vector2<i64>> = (0..n)
        .map(|k| {
            let th = phase + (k as f64) * delta + (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            let r = (1.0 + (rng.gen::<f64>() * 2.0 - 1.0) * rj) * r0;
            Vector2::new((th.cos() * r).round() as i64, (th.sin() * r).round() as i64)
        })
        .collect();
    let mut hull = convex_hull_strict(&pts)?;
    if cfg.clockwise {
        hull.reverse();
    }
    Polygon::new(hull).ok()
}

/// Grow a non-crossing chord set by proposing `attempts` random chords.
///
/// Rejected proposals are skipped, so the result is valid by construction.
pub fn draw_chords<R: Rng>(n: usize, attempts: usize, rng: &mut R) -> ChordSet {
    let mut set = ChordSet::new(n);
    if n < 4 {
        return set;
    }
    for _ in 0..attempts {
        let a = rng.gen_range(0..n);
        let b = rng.gen_range(0..n);
        let _ = set.insert(a, b);
    }
    set
}
