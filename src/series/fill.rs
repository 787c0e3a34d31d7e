use std::collections::{BTreeMap, BTreeSet};

use crate::foundation::{
    core::{Observation, TimestampMs},
    error::{RaceError, RaceResult},
};

/// Forward-filled series over the union of all observed timestamps.
///
/// Every entity has a value at every timestamp in the table: a missing
/// observation inherits the entity's most recent earlier value, and
/// timestamps preceding an entity's first observation use that first
/// available value as the baseline regardless of date. Entities and
/// timestamps are held in sorted order.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SeriesTable {
    timestamps: Vec<TimestampMs>,
    entities: Vec<String>,
    values: Vec<BTreeMap<String, f64>>, // one entity→value map per timestamp
}

impl SeriesTable {
    /// Build the table from raw observations as a pure fold.
    ///
    /// Duplicate `(entity, timestamp)` records keep the first occurrence.
    /// Fails fast on an empty observation set, an empty entity name, or a
    /// non-finite value rather than letting NaN reach the ranking.
    pub fn from_observations(observations: &[Observation]) -> RaceResult<Self> {
        if observations.is_empty() {
            return Err(RaceError::malformed_input("observation set is empty"));
        }

        let mut per_entity: BTreeMap<&str, BTreeMap<TimestampMs, f64>> = BTreeMap::new();
        let mut timestamps = BTreeSet::new();
        for obs in observations {
            if obs.name.trim().is_empty() {
                return Err(RaceError::malformed_input(
                    "observation entity name is empty",
                ));
            }
            if !obs.value.is_finite() {
                return Err(RaceError::malformed_input(format!(
                    "observation for '{}' has a non-finite value",
                    obs.name
                )));
            }
            timestamps.insert(obs.time);
            per_entity
                .entry(obs.name.as_str())
                .or_default()
                .entry(obs.time)
                .or_insert(obs.value);
        }

        let timestamps: Vec<TimestampMs> = timestamps.into_iter().collect();
        let entities: Vec<String> = per_entity.keys().map(|name| (*name).to_string()).collect();

        let mut values = vec![BTreeMap::new(); timestamps.len()];
        for (name, series) in &per_entity {
            // Baseline for timestamps preceding the entity's first observation.
            let Some(&first) = series.values().next() else {
                continue;
            };
            let mut last = first;
            for (idx, ts) in timestamps.iter().enumerate() {
                if let Some(&observed) = series.get(ts) {
                    last = observed;
                }
                values[idx].insert((*name).to_string(), last);
            }
        }

        Ok(Self {
            timestamps,
            entities,
            values,
        })
    }

    /// Sorted distinct timestamps covered by the table.
    pub fn timestamps(&self) -> &[TimestampMs] {
        &self.timestamps
    }

    /// Sorted distinct entity names covered by the table.
    pub fn entities(&self) -> &[String] {
        &self.entities
    }

    /// Timestamp plus entity→value mapping at index `idx`.
    pub fn frame(&self, idx: usize) -> Option<(TimestampMs, &BTreeMap<String, f64>)> {
        Some((*self.timestamps.get(idx)?, self.values.get(idx)?))
    }

    /// Forward-filled value for `entity` at timestamp index `idx`.
    pub fn value(&self, entity: &str, idx: usize) -> Option<f64> {
        self.values.get(idx).and_then(|m| m.get(entity)).copied()
    }

    /// Number of distinct timestamps.
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    /// True when the table covers no timestamps.
    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/series/fill.rs"]
mod tests;
