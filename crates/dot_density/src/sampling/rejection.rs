//! Bounded rejection sampling of dots inside a ring.
use glam::DVec2;
use rand::Rng;

use crate::geometry::{BoundingBox, Ring};
use crate::projection::Projection;
use crate::sampling::{uniform_in_bounds, SampledDot};

/// Candidate draws per dot before falling back to the ring's centroid.
pub const DEFAULT_MAX_ATTEMPTS: usize = 3000;

/// Upper bound on the output buffer reserved up front; larger outputs grow as they fill.
const MAX_PREALLOCATED_DOTS: usize = 1 << 16;

/// Rejection sampler with a per-dot attempt ceiling.
///
/// Each dot draws up to `max_attempts` candidates uniformly in the ring's bounding
/// box and keeps the first one inside the ring. When none is accepted the dot
/// becomes the ring's fallback point: the [`Projection::centroid`] of the ring, or
/// the bounding-box center if the projection cannot provide one. The fallback point
/// is not guaranteed to lie inside concave or self-intersecting rings.
#[derive(Debug, Clone)]
pub struct RejectionSampler {
    /// Candidate draws per dot.
    pub max_attempts: usize,
}

impl Default for RejectionSampler {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ATTEMPTS)
    }
}

impl RejectionSampler {
    pub fn new(max_attempts: usize) -> Self {
        Self { max_attempts }
    }

    /// Places `count` dots inside `ring`.
    ///
    /// Returns exactly `count` dots for any non-empty ring and nothing for an empty one.
    pub fn sample(
        &self,
        ring: &Ring,
        count: usize,
        projection: &dyn Projection,
        rng: &mut dyn Rng,
    ) -> Vec<SampledDot> {
        if count == 0 {
            return Vec::new();
        }
        let Some(bounds) = ring.bounds() else {
            return Vec::new();
        };

        let mut fallback: Option<DVec2> = None;
        let mut out = Vec::with_capacity(count.min(MAX_PREALLOCATED_DOTS));
        for _ in 0..count {
            let dot = match self.draw(ring, &bounds, rng) {
                Some(position) => SampledDot::accepted(position),
                None => {
                    let position = *fallback
                        .get_or_insert_with(|| fallback_in_bounds(ring, &bounds, projection));
                    SampledDot::fallback(position)
                }
            };
            out.push(dot);
        }
        out
    }

    fn draw(&self, ring: &Ring, bounds: &BoundingBox, rng: &mut dyn Rng) -> Option<DVec2> {
        (0..self.max_attempts)
            .map(|_| uniform_in_bounds(bounds, rng))
            .find(|&p| ring.contains(p))
    }
}

/// The deterministic point used when rejection sampling gives up on `ring`.
///
/// `None` only for an empty ring.
pub fn fallback_point(ring: &Ring, projection: &dyn Projection) -> Option<DVec2> {
    let bounds = ring.bounds()?;
    Some(fallback_in_bounds(ring, &bounds, projection))
}

fn fallback_in_bounds(ring: &Ring, bounds: &BoundingBox, projection: &dyn Projection) -> DVec2 {
    projection
        .centroid(ring)
        .unwrap_or_else(|| bounds.center())
}
