#![forbid(unsafe_code)]
//! dot_density: turn region boundaries and population counts into dot-density point clouds.
//!
//! Modules:
//! - geometry: features, tagged geometry variants, rings, bounding boxes, point-in-polygon
//! - projection: projection seam (identity, Mercator) and spherical centroids for fallback dots
//! - sampling: bounded rejection sampling of dots inside a ring
//! - density: population lookup, dot quotas, ring selection, runner, events
//!
//! The pipeline consumes already-projected features plus a name to population lookup
//! and yields a flat list of projected points, one per `dots_per_unit` people.
pub mod density;
pub mod error;
pub mod geometry;
pub mod projection;
pub mod sampling;

/// Convenient re-exports for common types. Import with `use dot_density::prelude::*;`.
pub mod prelude {
    pub use crate::density::events::{
        DensityEvent, DensityEventKind, EventSink, FnSink, MultiSink, VecSink,
    };
    pub use crate::density::population::{PopulationRecord, PopulationTable};
    pub use crate::density::quota::{checked_dot_quota, dot_quota};
    pub use crate::density::runner::{
        dots_for_feature, run_features, run_features_with_events, DensityConfig,
        DotDensityRunner, FeatureOutcome, RunResult,
    };
    pub use crate::density::selection::{largest_ring_by_bounds, select_ring};
    pub use crate::density::{SkipReason, DEFAULT_DOTS_PER_UNIT};
    pub use crate::error::{Error, Result};
    pub use crate::geometry::{BoundingBox, Feature, Geometry, Polygon, Ring};
    pub use crate::projection::centroid::{planar_centroid, spherical_centroid};
    pub use crate::projection::mercator::Mercator;
    pub use crate::projection::{project_geometry, IdentityProjection, Projection};
    pub use crate::sampling::rejection::{fallback_point, RejectionSampler, DEFAULT_MAX_ATTEMPTS};
    pub use crate::sampling::{DotOrigin, SampledDot};
}
