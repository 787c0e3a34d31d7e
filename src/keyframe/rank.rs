/// One entity's place within a ranked keyframe.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EntitySnapshot {
    /// Entity name.
    pub name: String,
    /// Value at the keyframe's point in time.
    pub value: f64,
    /// 0-based position after the descending sort, clamped to the shared
    /// overflow rank `display_count`.
    pub rank: usize,
}

/// Rank all entities by value, descending.
///
/// Entities missing from `value_of` score `0.0` without error. The sort is
/// stable, so exactly-equal values keep the order of `entities` (ties break
/// by whichever entity appears first). Ranks at or past `display_count`
/// collapse to that single boundary rank so off-screen entities animate
/// toward one shared exit position instead of distinct far-off rows.
pub fn ranked_snapshot(
    entities: &[String],
    display_count: usize,
    value_of: impl Fn(&str) -> Option<f64>,
) -> Vec<EntitySnapshot> {
    let mut ranked: Vec<EntitySnapshot> = entities
        .iter()
        .map(|name| EntitySnapshot {
            name: name.clone(),
            value: value_of(name).unwrap_or(0.0),
            rank: 0,
        })
        .collect();
    ranked.sort_by(|a, b| b.value.total_cmp(&a.value));
    for (idx, snapshot) in ranked.iter_mut().enumerate() {
        snapshot.rank = display_count.min(idx);
    }
    ranked
}

#[cfg(test)]
#[path = "../../tests/unit/keyframe/rank.rs"]
mod tests;
