//! Event types and sinks for observing dot-density runs.
//!
//! This module defines [`DensityEvent`] and a set of sinks to collect or forward
//! events while running features through
//! [`crate::density::runner::DotDensityRunner`] or
//! [`crate::density::runner::run_features_with_events`].
use crate::density::runner::{DensityConfig, RunResult};
use crate::density::SkipReason;

/// Describes events emitted while generating dots.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub enum DensityEvent {
    /// Emitted before the first feature is processed.
    RunStarted {
        /// The configuration used.
        config: DensityConfig,
        /// Number of features in the input.
        feature_count: usize,
    },

    /// Emitted after all features were processed.
    RunFinished {
        /// Aggregated result for the run.
        result: RunResult,
    },

    /// Emitted when a feature contributes no dots.
    FeatureSkipped {
        /// Position of the feature in the input.
        index: usize,
        /// Feature name.
        name: String,
        reason: SkipReason,
    },

    /// Emitted when dots were placed for a feature.
    FeatureSampled {
        /// Position of the feature in the input.
        index: usize,
        /// Feature name.
        name: String,
        /// Dots placed for the feature.
        dots: usize,
        /// How many of those dots are fallback points.
        fallback_dots: usize,
    },

    /// Non-fatal warning generated during the run.
    Warning {
        /// Context string (e.g. feature name).
        context: String,
        /// Human-readable message.
        message: String,
    },
}

/// Discriminant of [`DensityEvent`], used by sinks to filter what they receive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DensityEventKind {
    RunStarted,
    RunFinished,
    FeatureSkipped,
    FeatureSampled,
    Warning,
}

impl DensityEvent {
    pub fn kind(&self) -> DensityEventKind {
        match self {
            DensityEvent::RunStarted { .. } => DensityEventKind::RunStarted,
            DensityEvent::RunFinished { .. } => DensityEventKind::RunFinished,
            DensityEvent::FeatureSkipped { .. } => DensityEventKind::FeatureSkipped,
            DensityEvent::FeatureSampled { .. } => DensityEventKind::FeatureSampled,
            DensityEvent::Warning { .. } => DensityEventKind::Warning,
        }
    }
}

/// A generic event sink that accepts [`DensityEvent`]s.
pub trait EventSink {
    fn send(&mut self, event: DensityEvent);

    /// Whether the sink cares about events of `kind`. Producers skip building
    /// events nobody wants.
    fn wants(&self, _kind: DensityEventKind) -> bool {
        true
    }
}

/// A no-op event sink.
impl EventSink for () {
    #[inline]
    fn send(&mut self, _event: DensityEvent) {}

    #[inline]
    fn wants(&self, _kind: DensityEventKind) -> bool {
        false
    }
}

/// An event sink that forwards to a user-provided closure.
pub struct FnSink<F>
where
    F: FnMut(DensityEvent),
{
    f: F,
}

impl<F> FnSink<F>
where
    F: FnMut(DensityEvent),
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> EventSink for FnSink<F>
where
    F: FnMut(DensityEvent),
{
    #[inline]
    fn send(&mut self, event: DensityEvent) {
        (self.f)(event);
    }
}

/// An event sink that collects events in a `Vec`, optionally restricted to some kinds.
#[derive(Default)]
pub struct VecSink {
    events: Vec<DensityEvent>,
    only: Option<Vec<DensityEventKind>>,
}

impl VecSink {
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            only: None,
        }
    }

    /// Collects only events whose kind is listed.
    pub fn only(kinds: impl IntoIterator<Item = DensityEventKind>) -> Self {
        Self {
            events: Vec::new(),
            only: Some(kinds.into_iter().collect()),
        }
    }

    pub fn into_inner(self) -> Vec<DensityEvent> {
        self.events
    }

    pub fn as_slice(&self) -> &[DensityEvent] {
        &self.events
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl EventSink for VecSink {
    #[inline]
    fn send(&mut self, event: DensityEvent) {
        if self.wants(event.kind()) {
            self.events.push(event);
        }
    }

    fn wants(&self, kind: DensityEventKind) -> bool {
        self.only.as_ref().is_none_or(|kinds| kinds.contains(&kind))
    }
}

/// Fan-out sink that forwards each event to all contained sinks.
pub struct MultiSink<S: EventSink> {
    pub(crate) sinks: Vec<S>,
}

impl<S: EventSink> MultiSink<S> {
    pub fn new() -> Self {
        Self { sinks: Vec::new() }
    }

    pub fn with_sinks(sinks: Vec<S>) -> Self {
        Self { sinks }
    }

    pub fn push(&mut self, sink: S) {
        self.sinks.push(sink);
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }
}

impl<S: EventSink> Default for MultiSink<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: EventSink> EventSink for MultiSink<S> {
    fn send(&mut self, event: DensityEvent) {
        let kind = event.kind();
        let Some(last_idx) = self.sinks.iter().rposition(|s| s.wants(kind)) else {
            return;
        };
        for sink in &mut self.sinks[..last_idx] {
            if sink.wants(kind) {
                sink.send(event.clone());
            }
        }
        self.sinks[last_idx].send(event);
    }

    fn wants(&self, kind: DensityEventKind) -> bool {
        self.sinks.iter().any(|s| s.wants(kind))
    }
}
