use rankrace::{Observation, RaceConfig, TimestampMs, build_race};

const DAY_MS: i64 = 86_400_000;

fn obs(name: &str, day: i64, value: f64) -> Observation {
    Observation::new(name, TimestampMs(day * DAY_MS), value)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().init();

    // People-vaccinated-per-hundred style series: sparse, irregular, with
    // one country reporting late.
    let observations = vec![
        obs("Gibraltar", 0, 12.1),
        obs("Gibraltar", 2, 33.6),
        obs("Gibraltar", 4, 71.2),
        obs("Israel", 0, 18.4),
        obs("Israel", 1, 24.9),
        obs("Israel", 4, 58.3),
        obs("Seychelles", 3, 41.0),
        obs("Seychelles", 4, 62.7),
    ];

    let config = RaceConfig {
        display_count: 12,
        interpolation_steps: 10,
    };
    let race = build_race(&observations, &config)?;

    println!("{}", race.keyframes_json()?);
    Ok(())
}
