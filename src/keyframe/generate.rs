use rayon::prelude::*;

use crate::{
    foundation::core::RaceConfig,
    foundation::error::{RaceError, RaceResult},
    foundation::math::lerp,
    keyframe::rank::{EntitySnapshot, ranked_snapshot},
    series::fill::SeriesTable,
};

/// One animation frame: a point in time plus the fully ranked field.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Keyframe {
    /// Keyframe time in epoch milliseconds. Real keyframes carry an exact
    /// observed timestamp; interpolated keyframes carry a linear blend of
    /// the two surrounding timestamps' numeric values.
    pub time_ms: f64,
    /// All entities sorted by value descending, ranks clamped.
    pub ranked: Vec<EntitySnapshot>,
}

impl Keyframe {
    /// Visible slice: the first `n` ranked entities.
    pub fn top(&self, n: usize) -> &[EntitySnapshot] {
        &self.ranked[..self.ranked.len().min(n)]
    }

    /// Highest-valued entity, if any. Renderers scale the value axis by it.
    pub fn leader(&self) -> Option<&EntitySnapshot> {
        self.ranked.first()
    }
}

/// Threading options for keyframe generation.
///
/// Interpolation intervals are independent of each other; the parallel path
/// fans them out over a dedicated rayon pool and reassembles the sequence in
/// interval order, so output is identical to the sequential path.
#[derive(Clone, Debug)]
pub struct BuildThreading {
    /// Enable interval-level parallelism (rayon).
    pub parallel: bool,
    /// Override the number of rayon worker threads. `None` uses rayon defaults.
    pub threads: Option<usize>,
}

impl Default for BuildThreading {
    fn default() -> Self {
        Self {
            parallel: false,
            threads: None,
        }
    }
}

#[tracing::instrument(skip(series))]
/// Generate the dense keyframe sequence for a forward-filled series.
///
/// For every consecutive pair of real timestamps, emits
/// `config.interpolation_steps` keyframes at fractions `i/k` (linear in
/// both value and time, entities missing on either side defaulting to 0),
/// then appends one final keyframe at the last real timestamp with its
/// exact values. A series with a single timestamp yields exactly that one
/// final keyframe.
pub fn generate_keyframes(series: &SeriesTable, config: &RaceConfig) -> RaceResult<Vec<Keyframe>> {
    generate_keyframes_threaded(series, config, &BuildThreading::default())
}

/// Generate keyframes with explicit threading options.
pub fn generate_keyframes_threaded(
    series: &SeriesTable,
    config: &RaceConfig,
    threading: &BuildThreading,
) -> RaceResult<Vec<Keyframe>> {
    config.validate()?;
    if series.is_empty() {
        return Err(RaceError::malformed_input("series covers no timestamps"));
    }

    let last_idx = series.len() - 1;
    let final_frame = exact_keyframe(series, config, last_idx)?;
    if last_idx == 0 {
        return Ok(vec![final_frame]);
    }

    let mut keyframes = Vec::with_capacity(config.interpolation_steps * last_idx + 1);
    if threading.parallel {
        let pool = build_thread_pool(threading.threads)?;
        let per_interval = pool.install(|| {
            (0..last_idx)
                .into_par_iter()
                .map(|pair| interval_keyframes(series, config, pair))
                .collect::<Vec<_>>()
        });
        for interval in per_interval {
            keyframes.extend(interval?);
        }
    } else {
        for pair in 0..last_idx {
            keyframes.extend(interval_keyframes(series, config, pair)?);
        }
    }

    keyframes.push(final_frame);
    Ok(keyframes)
}

fn interval_keyframes(
    series: &SeriesTable,
    config: &RaceConfig,
    pair: usize,
) -> RaceResult<Vec<Keyframe>> {
    let (ta, va) = series
        .frame(pair)
        .ok_or_else(|| RaceError::malformed_input("series frame index out of range"))?;
    let (tb, vb) = series
        .frame(pair + 1)
        .ok_or_else(|| RaceError::malformed_input("series frame index out of range"))?;

    let k = config.interpolation_steps;
    let mut out = Vec::with_capacity(k);
    for i in 0..k {
        let t = i as f64 / k as f64;
        let ranked = ranked_snapshot(series.entities(), config.display_count, |name| {
            let a = va.get(name).copied().unwrap_or(0.0);
            let b = vb.get(name).copied().unwrap_or(0.0);
            Some(lerp(a, b, t))
        });
        out.push(Keyframe {
            time_ms: lerp(ta.as_f64(), tb.as_f64(), t),
            ranked,
        });
    }
    Ok(out)
}

fn exact_keyframe(series: &SeriesTable, config: &RaceConfig, idx: usize) -> RaceResult<Keyframe> {
    let (ts, values) = series
        .frame(idx)
        .ok_or_else(|| RaceError::malformed_input("series frame index out of range"))?;
    let ranked = ranked_snapshot(series.entities(), config.display_count, |name| {
        values.get(name).copied()
    });
    Ok(Keyframe {
        time_ms: ts.as_f64(),
        ranked,
    })
}

fn build_thread_pool(threads: Option<usize>) -> RaceResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(RaceError::configuration(
            "build threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| RaceError::configuration(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/keyframe/generate.rs"]
mod tests;
