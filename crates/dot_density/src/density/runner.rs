//! High-level runner that turns features into one flat list of dots.
//!
//! Per feature: resolve the population by name, convert it to a dot quota, select a
//! ring, and sample the quota inside the ring. Features that cannot contribute are
//! skipped with a [`SkipReason`]; nothing in a run is fatal once the configuration
//! is valid.
use glam::DVec2;
use rand::Rng;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::density::events::{DensityEvent, DensityEventKind, EventSink};
use crate::density::population::PopulationTable;
use crate::density::quota::checked_dot_quota;
use crate::density::selection::select_ring;
use crate::density::{SkipReason, DEFAULT_DOTS_PER_UNIT};
use crate::error::{Error, Result};
use crate::geometry::Feature;
use crate::projection::Projection;
use crate::sampling::rejection::{RejectionSampler, DEFAULT_MAX_ATTEMPTS};
use crate::sampling::SampledDot;

/// Configuration for a dot-density run.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
pub struct DensityConfig {
    /// People represented by one dot.
    pub dots_per_unit: f64,
    /// Candidate draws per dot before falling back to the ring centroid.
    pub max_attempts: usize,
}

impl Default for DensityConfig {
    fn default() -> Self {
        Self {
            dots_per_unit: DEFAULT_DOTS_PER_UNIT,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl DensityConfig {
    /// Creates a new [`DensityConfig`] with the given people-per-dot ratio.
    pub fn new(dots_per_unit: f64) -> Self {
        Self {
            dots_per_unit,
            ..Default::default()
        }
    }

    /// Sets the people-per-dot ratio.
    pub fn with_dots_per_unit(mut self, dots_per_unit: f64) -> Self {
        self.dots_per_unit = dots_per_unit;
        self
    }

    /// Sets the per-dot attempt ceiling.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if !(self.dots_per_unit.is_finite() && self.dots_per_unit > 0.0) {
            return Err(Error::InvalidConfig(
                "dots_per_unit must be finite and > 0".into(),
            ));
        }
        if self.max_attempts == 0 {
            return Err(Error::InvalidConfig("max_attempts must be > 0".into()));
        }

        Ok(())
    }

    /// The sampler this configuration describes.
    pub fn sampler(&self) -> RejectionSampler {
        RejectionSampler::new(self.max_attempts)
    }
}

/// Result of a dot-density run.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunResult {
    /// Dots in feature order, then dot order within each feature.
    pub dots: Vec<DVec2>,
    /// Features in the input.
    pub features_total: usize,
    /// Features that received at least one dot.
    pub features_sampled: usize,
    /// Features that contributed nothing.
    pub features_skipped: usize,
    /// Dots placed at a ring's fallback point rather than by rejection sampling.
    pub fallback_dots: usize,
}

impl RunResult {
    /// Creates a new empty [`RunResult`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Approximate population the dots stand for.
    pub fn population_represented(&self, dots_per_unit: f64) -> f64 {
        self.dots.len() as f64 * dots_per_unit
    }
}

/// What happened to a single feature.
#[derive(Debug, Clone, PartialEq)]
pub enum FeatureOutcome {
    Skipped(SkipReason),
    Sampled(Vec<SampledDot>),
}

/// Generates the dots for one feature.
///
/// The ring is only selected once the quota is known to be positive, and the
/// sampler only runs for usable rings.
pub fn dots_for_feature(
    feature: &Feature,
    populations: &PopulationTable,
    config: &DensityConfig,
    projection: &dyn Projection,
    rng: &mut dyn Rng,
) -> FeatureOutcome {
    let Some(population) = populations.get(&feature.name) else {
        return FeatureOutcome::Skipped(SkipReason::MissingPopulation);
    };

    let Some(quota) = checked_dot_quota(Some(population), config.dots_per_unit) else {
        return FeatureOutcome::Skipped(SkipReason::QuotaOverflow);
    };
    if quota == 0 {
        return FeatureOutcome::Skipped(SkipReason::ZeroQuota);
    }

    let Some(ring) = select_ring(&feature.geometry) else {
        return FeatureOutcome::Skipped(SkipReason::UnsupportedGeometry);
    };
    if !ring.is_usable() {
        return FeatureOutcome::Skipped(SkipReason::UnusableRing);
    }

    FeatureOutcome::Sampled(config.sampler().sample(ring, quota, projection, rng))
}

pub struct DotDensityRunner<'a> {
    /// Run configuration applied to this runner.
    pub config: DensityConfig,
    /// Population lookup shared by all runs.
    pub populations: &'a PopulationTable,
    /// Projection used for fallback centroids.
    pub projection: &'a dyn Projection,
}

impl<'a> DotDensityRunner<'a> {
    pub fn try_new(
        config: DensityConfig,
        populations: &'a PopulationTable,
        projection: &'a dyn Projection,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            populations,
            projection,
        })
    }

    pub fn new(
        config: DensityConfig,
        populations: &'a PopulationTable,
        projection: &'a dyn Projection,
    ) -> Self {
        debug_assert!(
            config.dots_per_unit.is_finite() && config.dots_per_unit > 0.0,
            "dots_per_unit must be finite and > 0"
        );
        debug_assert!(config.max_attempts > 0, "max_attempts must be > 0");

        Self {
            config,
            populations,
            projection,
        }
    }

    /// Runs the given features, returning the result.
    pub fn run(&self, features: &[Feature], rng: &mut impl Rng) -> RunResult {
        run_features(
            features,
            self.populations,
            &self.config,
            self.projection,
            rng,
            None,
        )
    }

    pub fn run_with_events(
        &self,
        features: &[Feature],
        rng: &mut impl Rng,
        sink: &mut dyn EventSink,
    ) -> RunResult {
        run_features(
            features,
            self.populations,
            &self.config,
            self.projection,
            rng,
            Some(sink),
        )
    }
}

pub fn run_features<R: Rng>(
    features: &[Feature],
    populations: &PopulationTable,
    config: &DensityConfig,
    projection: &dyn Projection,
    rng: &mut R,
    sink: Option<&mut dyn EventSink>,
) -> RunResult {
    if let Some(s) = sink {
        run_features_with_events(features, populations, config, projection, rng, s)
    } else {
        run_features_with_events(features, populations, config, projection, rng, &mut ())
    }
}

pub fn run_features_with_events<R: Rng>(
    features: &[Feature],
    populations: &PopulationTable,
    config: &DensityConfig,
    projection: &dyn Projection,
    rng: &mut R,
    sink: &mut dyn EventSink,
) -> RunResult {
    info!(
        "Generating dots for {} features at {} people per dot.",
        features.len(),
        config.dots_per_unit
    );
    if sink.wants(DensityEventKind::RunStarted) {
        sink.send(DensityEvent::RunStarted {
            config: config.clone(),
            feature_count: features.len(),
        });
    }

    if features.is_empty() {
        warn!("No features to generate dots for.");
        if sink.wants(DensityEventKind::Warning) {
            sink.send(DensityEvent::Warning {
                context: "run".into(),
                message: "No features to generate dots for".into(),
            });
        }
    }

    let mut result = RunResult {
        features_total: features.len(),
        ..RunResult::new()
    };

    for (index, feature) in features.iter().enumerate() {
        match dots_for_feature(feature, populations, config, projection, rng) {
            FeatureOutcome::Skipped(reason) => {
                debug!("Skipping feature '{}': {}.", feature.name, reason);
                result.features_skipped += 1;
                if sink.wants(DensityEventKind::FeatureSkipped) {
                    sink.send(DensityEvent::FeatureSkipped {
                        index,
                        name: feature.name.clone(),
                        reason,
                    });
                }
            }
            FeatureOutcome::Sampled(dots) => {
                let fallback_dots = dots.iter().filter(|d| d.is_fallback()).count();
                if fallback_dots > 0 {
                    warn!(
                        "Feature '{}' used {} fallback dots out of {}.",
                        feature.name,
                        fallback_dots,
                        dots.len()
                    );
                    if sink.wants(DensityEventKind::Warning) {
                        sink.send(DensityEvent::Warning {
                            context: format!("feature:{}", feature.name),
                            message: format!(
                                "{fallback_dots} of {} dots placed at the fallback point",
                                dots.len()
                            ),
                        });
                    }
                }
                if sink.wants(DensityEventKind::FeatureSampled) {
                    sink.send(DensityEvent::FeatureSampled {
                        index,
                        name: feature.name.clone(),
                        dots: dots.len(),
                        fallback_dots,
                    });
                }

                result.features_sampled += 1;
                result.fallback_dots += fallback_dots;
                result.dots.extend(dots.into_iter().map(|d| d.position));
            }
        }
    }

    info!(
        "Placed {} dots (~{} people) for {} of {} features; {} fallback dots.",
        result.dots.len(),
        result.population_represented(config.dots_per_unit),
        result.features_sampled,
        result.features_total,
        result.fallback_dots,
    );

    if sink.wants(DensityEventKind::RunFinished) {
        sink.send(DensityEvent::RunFinished {
            result: result.clone(),
        });
    }

    result
}
