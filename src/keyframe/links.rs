use std::collections::HashMap;

use crate::keyframe::generate::Keyframe;

/// Identity of one entity snapshot within a keyframe sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct SnapshotId {
    /// Index of the keyframe in the sequence.
    pub keyframe: usize,
    /// Index into that keyframe's `ranked` vector.
    pub slot: usize,
}

/// `previous`/`next` lookup tables over a keyframe sequence.
///
/// Built by collecting each entity's ordered snapshots across all keyframes
/// and pairwise-linking consecutive occurrences. An entity's first snapshot
/// has no `previous` and its last has no `next`; that is not an error —
/// consumers fall back to the snapshot itself (see [`crate::Race::enter_from`]
/// and [`crate::Race::exit_to`]).
#[derive(Clone, Debug, Default)]
pub struct TransitionLinks {
    prev: HashMap<SnapshotId, SnapshotId>,
    next: HashMap<SnapshotId, SnapshotId>,
}

impl TransitionLinks {
    /// Snapshot of the same entity in the preceding keyframe, if any.
    pub fn previous(&self, id: SnapshotId) -> Option<SnapshotId> {
        self.prev.get(&id).copied()
    }

    /// Snapshot of the same entity in the following keyframe, if any.
    pub fn next(&self, id: SnapshotId) -> Option<SnapshotId> {
        self.next.get(&id).copied()
    }

    /// Number of `previous` links across all entities.
    pub fn previous_len(&self) -> usize {
        self.prev.len()
    }

    /// Number of `next` links across all entities.
    pub fn next_len(&self) -> usize {
        self.next.len()
    }
}

/// Build transition links for a keyframe sequence.
///
/// An entity with `c` snapshots across the sequence contributes exactly
/// `c − 1` entries to each map, chaining its occurrences consecutively.
pub fn build_transition_links(keyframes: &[Keyframe]) -> TransitionLinks {
    let mut occurrences: HashMap<&str, Vec<SnapshotId>> = HashMap::new();
    for (keyframe, frame) in keyframes.iter().enumerate() {
        for (slot, snapshot) in frame.ranked.iter().enumerate() {
            occurrences
                .entry(snapshot.name.as_str())
                .or_default()
                .push(SnapshotId { keyframe, slot });
        }
    }

    let mut links = TransitionLinks::default();
    for chain in occurrences.into_values() {
        for pair in chain.windows(2) {
            links.prev.insert(pair[1], pair[0]);
            links.next.insert(pair[0], pair[1]);
        }
    }
    links
}

#[cfg(test)]
#[path = "../../tests/unit/keyframe/links.rs"]
mod tests;
