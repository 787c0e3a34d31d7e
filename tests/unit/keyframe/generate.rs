use super::*;
use crate::foundation::core::{Observation, TimestampMs};

fn cfg(display_count: usize, interpolation_steps: usize) -> RaceConfig {
    RaceConfig {
        display_count,
        interpolation_steps,
    }
}

fn obs(name: &str, ms: i64, value: f64) -> Observation {
    Observation::new(name, TimestampMs(ms), value)
}

fn two_entity_series() -> SeriesTable {
    SeriesTable::from_observations(&[
        obs("A", 0, 10.0),
        obs("A", 1000, 20.0),
        obs("B", 0, 5.0),
        obs("B", 1000, 5.0),
    ])
    .unwrap()
}

#[test]
fn count_is_steps_times_intervals_plus_one() {
    let series = SeriesTable::from_observations(&[
        obs("A", 0, 1.0),
        obs("A", 1000, 2.0),
        obs("A", 2000, 3.0),
    ])
    .unwrap();
    let frames = generate_keyframes(&series, &cfg(12, 4)).unwrap();
    assert_eq!(frames.len(), 4 * 2 + 1);
}

#[test]
fn single_timestamp_yields_one_exact_keyframe() {
    let series =
        SeriesTable::from_observations(&[obs("A", 5000, 1.5), obs("B", 5000, 0.5)]).unwrap();
    let frames = generate_keyframes(&series, &cfg(12, 10)).unwrap();
    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0].time_ms, 5000.0);
    assert_eq!(frames[0].ranked[0].value, 1.5);
}

#[test]
fn times_strictly_ascend() {
    let series = two_entity_series();
    let frames = generate_keyframes(&series, &cfg(12, 10)).unwrap();
    for pair in frames.windows(2) {
        assert!(pair[0].time_ms < pair[1].time_ms);
    }
}

#[test]
fn interval_start_and_final_keyframe_are_exact() {
    let series = two_entity_series();
    let frames = generate_keyframes(&series, &cfg(12, 4)).unwrap();
    assert_eq!(frames[0].time_ms, 0.0);
    assert_eq!(frames[0].ranked[0].value, 10.0);
    let last = frames.last().unwrap();
    assert_eq!(last.time_ms, 1000.0);
    assert_eq!(last.ranked[0].value, 20.0);
}

#[test]
fn intermediate_steps_interpolate_linearly() {
    let series = two_entity_series();
    let frames = generate_keyframes(&series, &cfg(2, 2)).unwrap();
    assert_eq!(frames.len(), 3);
    let mid = &frames[1];
    assert_eq!(mid.time_ms, 500.0);
    assert_eq!(mid.ranked[0].name, "A");
    assert_eq!(mid.ranked[0].value, 15.0);
    assert_eq!(mid.ranked[1].name, "B");
    assert_eq!(mid.ranked[1].value, 5.0);
}

#[test]
fn no_rank_exceeds_display_count() {
    let series = SeriesTable::from_observations(&[
        obs("a", 0, 3.0),
        obs("b", 0, 2.0),
        obs("c", 0, 1.0),
        obs("a", 1000, 1.0),
        obs("b", 1000, 2.0),
        obs("c", 1000, 3.0),
    ])
    .unwrap();
    let frames = generate_keyframes(&series, &cfg(1, 5)).unwrap();
    for frame in &frames {
        for snapshot in &frame.ranked {
            assert!(snapshot.rank <= 1);
        }
        assert_eq!(frame.ranked[1].rank, 1);
        assert_eq!(frame.ranked[2].rank, 1);
    }
}

#[test]
fn parallel_output_matches_sequential() {
    let series = SeriesTable::from_observations(&[
        obs("A", 0, 10.0),
        obs("A", 1000, 20.0),
        obs("A", 2000, 5.0),
        obs("B", 0, 8.0),
        obs("B", 2000, 16.0),
        obs("C", 1000, 12.0),
    ])
    .unwrap();
    let config = cfg(2, 3);
    let sequential = generate_keyframes(&series, &config).unwrap();
    let parallel = generate_keyframes_threaded(
        &series,
        &config,
        &BuildThreading {
            parallel: true,
            threads: Some(2),
        },
    )
    .unwrap();
    assert_eq!(sequential, parallel);
}

#[test]
fn invalid_config_is_rejected() {
    let series = two_entity_series();
    let err = generate_keyframes(&series, &cfg(12, 0)).unwrap_err();
    assert!(matches!(err, RaceError::Configuration(_)));
}

#[test]
fn zero_worker_threads_is_rejected() {
    let series = two_entity_series();
    let err = generate_keyframes_threaded(
        &series,
        &cfg(12, 2),
        &BuildThreading {
            parallel: true,
            threads: Some(0),
        },
    )
    .unwrap_err();
    assert!(matches!(err, RaceError::Configuration(_)));
}

#[test]
fn top_slice_is_bounded_by_field_size() {
    let series = two_entity_series();
    let frames = generate_keyframes(&series, &cfg(12, 2)).unwrap();
    assert_eq!(frames[0].top(1).len(), 1);
    assert_eq!(frames[0].top(10).len(), 2);
    assert_eq!(frames[0].leader().unwrap().name, "A");
}
