use crate::{
    foundation::core::{Observation, RaceConfig},
    foundation::error::{RaceError, RaceResult},
    keyframe::generate::{BuildThreading, Keyframe, generate_keyframes_threaded},
    keyframe::links::{SnapshotId, TransitionLinks, build_transition_links},
    keyframe::rank::EntitySnapshot,
    series::fill::SeriesTable,
};

/// A fully built race: the dense keyframe sequence plus transition links.
///
/// All contained structures are derived and immutable. When the source
/// dataset changes, rebuild from scratch; there is no incremental update.
#[derive(Clone, Debug)]
pub struct Race {
    /// Keyframes in strictly ascending time order.
    pub keyframes: Vec<Keyframe>,
    /// `previous`/`next` lookup tables keyed by snapshot identity.
    pub links: TransitionLinks,
}

impl Race {
    /// Snapshot addressed by `id`, if the id is in range.
    pub fn snapshot(&self, id: SnapshotId) -> Option<&EntitySnapshot> {
        self.keyframes
            .get(id.keyframe)
            .and_then(|frame| frame.ranked.get(id.slot))
    }

    /// Snapshot a renderer should animate *from*: the entity's snapshot in
    /// the preceding keyframe, or the addressed snapshot itself when no
    /// predecessor exists.
    pub fn enter_from(&self, id: SnapshotId) -> Option<&EntitySnapshot> {
        self.snapshot(self.links.previous(id).unwrap_or(id))
    }

    /// Snapshot a renderer should animate *toward*: the entity's snapshot in
    /// the following keyframe, or the addressed snapshot itself when no
    /// successor exists.
    pub fn exit_to(&self, id: SnapshotId) -> Option<&EntitySnapshot> {
        self.snapshot(self.links.next(id).unwrap_or(id))
    }

    /// Keyframe sequence serialized as JSON for an external renderer.
    ///
    /// Links are not serialized: they are identity-keyed in-memory lookups
    /// and cheap to rebuild on the consuming side.
    pub fn keyframes_json(&self) -> RaceResult<String> {
        serde_json::to_string(&self.keyframes)
            .map_err(|e| RaceError::serde(format!("failed to serialize keyframes: {e}")))
    }
}

#[tracing::instrument(skip(observations))]
/// Run the full pipeline: validate, forward-fill, generate, link.
pub fn build_race(observations: &[Observation], config: &RaceConfig) -> RaceResult<Race> {
    build_race_with_threading(observations, config, &BuildThreading::default())
}

#[tracing::instrument(skip(observations, threading))]
/// Run the full pipeline with explicit threading options.
pub fn build_race_with_threading(
    observations: &[Observation],
    config: &RaceConfig,
    threading: &BuildThreading,
) -> RaceResult<Race> {
    config.validate()?;
    let series = SeriesTable::from_observations(observations)?;
    let keyframes = generate_keyframes_threaded(&series, config, threading)?;
    let links = build_transition_links(&keyframes);
    Ok(Race { keyframes, links })
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/build.rs"]
mod tests;
