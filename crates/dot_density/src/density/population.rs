//! Name to population lookup built once from tabular records.
//!
//! Lookups are exact string matches: no trimming, case folding, or fuzzy matching.
//! When the same name appears more than once the later record replaces the earlier
//! one.
use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

/// One row of the population dataset.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PopulationRecord {
    /// Region name, matched against [`crate::geometry::Feature::name`].
    pub name: String,
    /// Number of people in the region.
    pub population: u64,
}

impl PopulationRecord {
    pub fn new(name: impl Into<String>, population: u64) -> Self {
        Self {
            name: name.into(),
            population,
        }
    }
}

/// Read-only population lookup keyed by region name.
#[derive(Clone, Debug, Default)]
pub struct PopulationTable {
    counts: HashMap<String, u64>,
}

impl PopulationTable {
    pub fn new() -> Self {
        Self {
            counts: HashMap::new(),
        }
    }

    /// Builds a table from records; later duplicates overwrite earlier ones.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = PopulationRecord>,
    {
        let mut table = Self::new();
        for record in records {
            table.insert(record.name, record.population);
        }
        table
    }

    /// Inserts or replaces the population for `name`, returning the replaced value.
    pub fn insert(&mut self, name: impl Into<String>, population: u64) -> Option<u64> {
        let name = name.into();
        let previous = self.counts.insert(name.clone(), population);
        if let Some(old) = previous {
            debug!(
                "Duplicate population entry for '{}': {} replaces {}.",
                name, population, old
            );
        }
        previous
    }

    /// Population for `name`, if present.
    pub fn get(&self, name: &str) -> Option<u64> {
        self.counts.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.counts.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of every population in the table, saturating at `u64::MAX`.
    pub fn total_population(&self) -> u64 {
        self.counts
            .values()
            .fold(0u64, |acc, &people| acc.saturating_add(people))
    }
}

impl FromIterator<PopulationRecord> for PopulationTable {
    fn from_iter<I: IntoIterator<Item = PopulationRecord>>(iter: I) -> Self {
        Self::from_records(iter)
    }
}

impl<S: Into<String>> FromIterator<(S, u64)> for PopulationTable {
    fn from_iter<I: IntoIterator<Item = (S, u64)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (name, population) in iter {
            table.insert(name, population);
        }
        table
    }
}
