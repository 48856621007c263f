//! Dot-density pipeline: population lookup, dot quotas, ring selection, and the
//! runner that turns a feature collection into one flat list of dots.
use std::fmt;

pub mod events;
pub mod population;
pub mod quota;
pub mod runner;
pub mod selection;

/// People represented by one dot unless configured otherwise.
pub const DEFAULT_DOTS_PER_UNIT: f64 = 1000.0;

/// Why a feature contributed no dots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum SkipReason {
    /// The feature's name has no entry in the population table.
    MissingPopulation,
    /// The population rounds down to zero dots.
    ZeroQuota,
    /// The dot count does not fit in memory addressing (`dots_per_unit` far too small).
    QuotaOverflow,
    /// The geometry variant has no areal ring (points, lines, collections).
    UnsupportedGeometry,
    /// The selected ring has fewer than three distinct points.
    UnusableRing,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            SkipReason::MissingPopulation => "no population entry",
            SkipReason::ZeroQuota => "population below one dot",
            SkipReason::QuotaOverflow => "dot count too large to represent",
            SkipReason::UnsupportedGeometry => "geometry has no polygon ring",
            SkipReason::UnusableRing => "ring has fewer than three distinct points",
        };
        f.write_str(text)
    }
}
