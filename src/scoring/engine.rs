use super::config::ScoringConfig;
use crate::game::{parse_line, Game, LineError, Outcome};
use std::collections::hash_map::{self, HashMap};

/// Points earned by each side of one game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Award {
    pub home: u32,
    pub away: u32,
}

impl Award {
    pub fn total(&self) -> u32 {
        self.home.saturating_add(self.away)
    }
}

pub fn award_points(game: &Game, config: &ScoringConfig) -> Award {
    match game.outcome() {
        Outcome::HomeWin => Award {
            home: config.win,
            away: config.loss,
        },
        Outcome::AwayWin => Award {
            home: config.loss,
            away: config.win,
        },
        Outcome::Draw => Award {
            home: config.draw,
            away: config.draw,
        },
    }
}

/// Cumulative points per team.
///
/// Team names are matched exactly (case-sensitive). A team gets an entry the
/// first time it is credited, even when it earns nothing, so losing teams
/// still appear in the ranking with zero points. Totals only ever grow.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PointsTable {
    points: HashMap<String, u32>,
}

impl PointsTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add points to a team, inserting it at zero on first sighting
    pub fn credit(&mut self, team: &str, points: u32) {
        match self.points.get_mut(team) {
            Some(total) => *total = total.saturating_add(points),
            None => {
                self.points.insert(team.to_string(), points);
            }
        }
    }

    /// Current total for a team; zero for teams never seen
    pub fn points(&self, team: &str) -> u32 {
        self.points.get(team).copied().unwrap_or(0)
    }

    pub fn contains(&self, team: &str) -> bool {
        self.points.contains_key(team)
    }

    /// Apply the scoring rules for one game to both teams
    pub fn record(&mut self, game: &Game, config: &ScoringConfig) -> Award {
        let award = award_points(game, config);
        self.credit(&game.home.team, award.home);
        self.credit(&game.away.team, award.away);
        award
    }

    /// Fold another table into this one by summing per team
    pub fn merge(&mut self, other: PointsTable) {
        for (team, points) in other.points {
            let total = self.points.entry(team).or_insert(0);
            *total = total.saturating_add(points);
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.points.iter().map(|(team, points)| (team.as_str(), *points))
    }
}

impl IntoIterator for PointsTable {
    type Item = (String, u32);
    type IntoIter = hash_map::IntoIter<String, u32>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

/// A line that was left out of the tally
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based position in the input
    pub line_number: usize,
    pub raw: String,
    pub reason: LineError,
}

impl SkippedLine {
    pub fn is_blank(&self) -> bool {
        self.reason == LineError::Blank
    }
}

/// Outcome of aggregating a batch of game lines
#[derive(Debug, Clone, Default)]
pub struct Tally {
    pub table: PointsTable,
    pub skipped: Vec<SkippedLine>,
    /// Number of well-formed games that were scored
    pub games: usize,
}

impl Tally {
    /// Skipped lines that had content but failed to parse
    pub fn malformed(&self) -> impl Iterator<Item = &SkippedLine> {
        self.skipped.iter().filter(|s| !s.is_blank())
    }
}

/// Parse and score every line. Malformed lines are recorded and skipped;
/// this never fails.
pub fn tally_lines<I, S>(lines: I, config: &ScoringConfig) -> Tally
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut tally = Tally::default();

    for (idx, line) in lines.into_iter().enumerate() {
        let line = line.as_ref();
        match parse_line(line) {
            Ok(game) => {
                let award = tally.table.record(&game, config);
                tally.games += 1;
                tracing::trace!(
                    line = idx + 1,
                    home = %game.home.team,
                    away = %game.away.team,
                    home_points = award.home,
                    away_points = award.away,
                    "scored game"
                );
            }
            Err(reason) => {
                tracing::debug!(line = idx + 1, %reason, "skipping line");
                tally.skipped.push(SkippedLine {
                    line_number: idx + 1,
                    raw: line.to_string(),
                    reason,
                });
            }
        }
    }

    tracing::debug!(
        games = tally.games,
        teams = tally.table.len(),
        skipped = tally.skipped.len(),
        "tallied game lines"
    );

    tally
}
