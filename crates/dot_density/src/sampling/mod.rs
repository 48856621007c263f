//! Placing dots inside rings.
//!
//! [`rejection::RejectionSampler`] draws candidates uniformly in a ring's bounding
//! box and keeps those inside the ring. Every dot it returns is tagged with a
//! [`DotOrigin`] so callers can tell accepted samples from fallback points.
use glam::DVec2;
use rand::Rng;

use crate::geometry::BoundingBox;

pub mod rejection;

pub use rejection::{RejectionSampler, DEFAULT_MAX_ATTEMPTS};

/// How a sampled dot was produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DotOrigin {
    /// A uniform candidate that passed the point-in-polygon test.
    Accepted,
    /// The ring's deterministic fallback point after the attempt ceiling ran out.
    Fallback,
}

/// A dot position together with how it was obtained.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SampledDot {
    /// Position in projected space.
    pub position: DVec2,
    pub origin: DotOrigin,
}

impl SampledDot {
    pub fn accepted(position: DVec2) -> Self {
        Self {
            position,
            origin: DotOrigin::Accepted,
        }
    }

    pub fn fallback(position: DVec2) -> Self {
        Self {
            position,
            origin: DotOrigin::Fallback,
        }
    }

    #[inline]
    pub fn is_fallback(&self) -> bool {
        self.origin == DotOrigin::Fallback
    }
}

/// Generate a random float in the range [0, 1).
#[inline]
pub(crate) fn rand01(rng: &mut dyn Rng) -> f64 {
    // 53 high bits fill the f64 mantissa exactly.
    (rng.next_u64() >> 11) as f64 / (1u64 << 53) as f64
}

/// Draw a point uniformly inside `bounds`.
#[inline]
pub(crate) fn uniform_in_bounds(bounds: &BoundingBox, rng: &mut dyn Rng) -> DVec2 {
    let u = rand01(rng);
    let v = rand01(rng);
    bounds.min + DVec2::new(u, v) * bounds.extent()
}
