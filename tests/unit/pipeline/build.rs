use super::*;
use crate::foundation::core::TimestampMs;

fn obs(name: &str, ms: i64, value: f64) -> Observation {
    Observation::new(name, TimestampMs(ms), value)
}

fn overtake_race() -> Race {
    let config = RaceConfig {
        display_count: 2,
        interpolation_steps: 2,
    };
    build_race(
        &[
            obs("A", 0, 10.0),
            obs("A", 1000, 2.0),
            obs("B", 0, 5.0),
            obs("B", 1000, 8.0),
        ],
        &config,
    )
    .unwrap()
}

#[test]
fn enter_from_falls_back_to_self_on_first_keyframe() {
    let race = overtake_race();
    let id = SnapshotId { keyframe: 0, slot: 0 };
    assert_eq!(race.enter_from(id), race.snapshot(id));
}

#[test]
fn exit_to_falls_back_to_self_on_last_keyframe() {
    let race = overtake_race();
    let last = race.keyframes.len() - 1;
    let id = SnapshotId { keyframe: last, slot: 1 };
    assert_eq!(race.exit_to(id), race.snapshot(id));
}

#[test]
fn neighbors_track_the_same_entity_mid_sequence() {
    let race = overtake_race();
    let id = SnapshotId { keyframe: 1, slot: 0 };
    let current = race.snapshot(id).unwrap();
    let from = race.enter_from(id).unwrap();
    let toward = race.exit_to(id).unwrap();
    assert_eq!(from.name, current.name);
    assert_eq!(toward.name, current.name);
}

#[test]
fn out_of_range_snapshot_is_none() {
    let race = overtake_race();
    assert!(
        race.snapshot(SnapshotId {
            keyframe: 99,
            slot: 0
        })
        .is_none()
    );
}

#[test]
fn keyframes_json_has_renderer_facing_shape() {
    let race = overtake_race();
    let json = race.keyframes_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let frames = value.as_array().unwrap();
    assert_eq!(frames.len(), race.keyframes.len());
    let first_row = &frames[0]["ranked"][0];
    assert!(first_row["name"].is_string());
    assert!(first_row["value"].is_number());
    assert!(first_row["rank"].is_number());
}

#[test]
fn empty_observation_set_is_rejected() {
    let err = build_race(&[], &RaceConfig::default()).unwrap_err();
    assert!(matches!(err, RaceError::MalformedInput(_)));
}

#[test]
fn invalid_config_is_rejected_before_filling() {
    let config = RaceConfig {
        display_count: 0,
        interpolation_steps: 10,
    };
    let err = build_race(&[obs("A", 0, 1.0)], &config).unwrap_err();
    assert!(matches!(err, RaceError::Configuration(_)));
}
