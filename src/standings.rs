use crate::ranking::{rank, RankingEntry};
use crate::scoring::{tally_lines, ScoringConfig, SkippedLine};

/// Everything a presentation layer needs from one batch of game lines.
#[derive(Debug, Clone)]
pub struct Standings {
    pub ranking: Vec<RankingEntry>,
    pub skipped: Vec<SkippedLine>,
    pub games: usize,
}

impl Standings {
    /// Skipped lines that had content but failed to parse
    pub fn malformed(&self) -> impl Iterator<Item = &SkippedLine> {
        self.skipped.iter().filter(|s| !s.is_blank())
    }
}

/// Parse, score and rank a batch of game lines.
///
/// Malformed lines never abort the batch: they are left out of the points and
/// reported in `skipped`. Input with no valid games produces an empty ranking.
pub fn compute_standings<I, S>(lines: I, scoring: &ScoringConfig) -> Standings
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let tally = tally_lines(lines, scoring);
    let games = tally.games;
    let skipped = tally.skipped;
    let ranking = rank(tally.table);

    tracing::debug!(
        teams = ranking.len(),
        games,
        skipped = skipped.len(),
        "computed standings"
    );

    Standings {
        ranking,
        skipped,
        games,
    }
}
