use crate::scoring::PointsTable;
use serde::Serialize;
use std::cmp::Ordering;

/// One row of the final standings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankingEntry {
    pub team: String,
    pub points: u32,
}

impl RankingEntry {
    pub fn new(team: impl Into<String>, points: u32) -> Self {
        Self {
            team: team.into(),
            points,
        }
    }
}

/// Standings order: points descending, then team name ascending.
/// Names compare byte-wise, so "Zebras" sorts before "alpacas".
pub fn compare_entries(a: &RankingEntry, b: &RankingEntry) -> Ordering {
    b.points
        .cmp(&a.points)
        .then_with(|| a.team.as_bytes().cmp(b.team.as_bytes()))
}

/// Turn a finished points table into ordered standings.
pub fn rank(table: PointsTable) -> Vec<RankingEntry> {
    let mut entries: Vec<RankingEntry> = table
        .into_iter()
        .map(|(team, points)| RankingEntry { team, points })
        .collect();
    entries.sort_by(compare_entries);
    entries
}

/// 1-based positions where teams level on points share a place and the next
/// place skips ahead ("1, 2, 2, 4"). Expects `entries` in standings order.
pub fn competition_positions(entries: &[RankingEntry]) -> Vec<usize> {
    let mut positions = Vec::with_capacity(entries.len());
    let mut previous: Option<u32> = None;
    let mut position = 0;

    for (idx, entry) in entries.iter().enumerate() {
        if previous != Some(entry.points) {
            position = idx + 1;
        }
        positions.push(position);
        previous = Some(entry.points);
    }

    positions
}

/// 1-based positions with no sharing: simply the index plus one.
pub fn sequential_positions(entries: &[RankingEntry]) -> Vec<usize> {
    (1..=entries.len()).collect()
}
