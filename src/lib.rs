//! Rankrace turns a sparse time series of named, valued entities into a
//! dense sequence of ranked keyframes for animated ranking charts
//! ("bar chart races"), plus per-entity transition links so a renderer can
//! match snapshots across adjacent keyframes.
//!
//! # Pipeline overview
//!
//! 1. **Fill**: `&[Observation] -> SeriesTable` (forward-filled values over
//!    the union of all observed timestamps)
//! 2. **Generate**: `SeriesTable -> Vec<Keyframe>` (`k` interpolation steps
//!    per real interval plus one exact final keyframe, each fully ranked)
//! 3. **Link**: `&[Keyframe] -> TransitionLinks` (previous/next snapshot
//!    lookup per entity)
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: building is pure and stable for a given
//!   input; maps iterate in sorted key order, never insertion order.
//! - **No IO**: data loading and rendering are external collaborators; the
//!   pipeline hands finished, immutable data to the renderer.
//! - **Render-agnostic output**: keyframes expose plain name/value/rank
//!   rows; links are identity-keyed lookups with fall-back-to-self
//!   semantics for first/last occurrences.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;
mod keyframe;
mod pipeline;
mod series;

pub use foundation::core::{Observation, RaceConfig, TimestampMs};
pub use foundation::error::{RaceError, RaceResult};
pub use keyframe::generate::{
    BuildThreading, Keyframe, generate_keyframes, generate_keyframes_threaded,
};
pub use keyframe::links::{SnapshotId, TransitionLinks, build_transition_links};
pub use keyframe::rank::{EntitySnapshot, ranked_snapshot};
pub use pipeline::build::{Race, build_race, build_race_with_threading};
pub use series::fill::SeriesTable;
