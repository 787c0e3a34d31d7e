use crate::foundation::error::{RaceError, RaceResult};

/// Integer epoch timestamp in milliseconds.
///
/// Real observations carry integer timestamps; interpolated keyframe times
/// are `f64` blends of two endpoints (see [`crate::Keyframe::time_ms`]).
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct TimestampMs(pub i64);

impl TimestampMs {
    /// Numeric value used for linear time blending.
    pub fn as_f64(self) -> f64 {
        self.0 as f64
    }
}

/// One raw record: a named entity's value at a point in time.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Observation {
    /// Entity name; identity is by name only, with no secondary key.
    pub name: String,
    /// Observation timestamp.
    pub time: TimestampMs,
    /// Observed value (non-negative in well-formed inputs).
    pub value: f64,
}

impl Observation {
    /// Build an observation record.
    pub fn new(name: impl Into<String>, time: TimestampMs, value: f64) -> Self {
        Self {
            name: name.into(),
            time,
            value,
        }
    }
}

/// Caller-supplied constants for keyframe generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RaceConfig {
    /// Number of top-ranked entities the renderer shows. Entities sorted at
    /// or past this position all collapse to this one overflow rank, so a
    /// renderer can animate them through a single shared exit lane.
    pub display_count: usize,
    /// Interpolation steps per consecutive pair of real timestamps.
    pub interpolation_steps: usize,
}

impl RaceConfig {
    /// Build a validated configuration.
    pub fn new(display_count: usize, interpolation_steps: usize) -> RaceResult<Self> {
        let cfg = Self {
            display_count,
            interpolation_steps,
        };
        cfg.validate()?;
        Ok(cfg)
    }

    /// Validate configuration invariants.
    pub fn validate(&self) -> RaceResult<()> {
        if self.display_count == 0 {
            return Err(RaceError::configuration("display_count must be > 0"));
        }
        if self.interpolation_steps == 0 {
            return Err(RaceError::configuration("interpolation_steps must be >= 1"));
        }
        Ok(())
    }
}

impl Default for RaceConfig {
    fn default() -> Self {
        Self {
            display_count: 12,
            interpolation_steps: 10,
        }
    }
}
