use std::cmp::Ordering;
use std::fmt;

/// A non-negative score of any size.
///
/// Held as decimal digits with leading zeros removed ("0" for zero), so two
/// scores compare by digit count first and then digit by digit.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Score(String);

impl Score {
    /// Build from a string of ASCII digits; `None` for anything else
    pub fn from_digits(digits: &str) -> Option<Self> {
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let trimmed = digits.trim_start_matches('0');
        Some(if trimmed.is_empty() {
            Self::zero()
        } else {
            Self(trimmed.to_string())
        })
    }

    pub fn zero() -> Self {
        Self("0".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<u32> for Score {
    fn from(value: u32) -> Self {
        Self(value.to_string())
    }
}

impl Ord for Score {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.as_bytes().cmp(other.0.as_bytes()))
    }
}

impl PartialOrd for Score {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One side of a game: the team name and the score it posted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamResult {
    pub team: String,
    pub score: Score,
}

impl TeamResult {
    pub fn new(team: impl Into<String>, score: impl Into<Score>) -> Self {
        Self {
            team: team.into(),
            score: score.into(),
        }
    }
}

/// Result of a game from the home side's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    HomeWin,
    AwayWin,
    Draw,
}

/// A parsed game line. `home` is the first segment of the line, `away` the second.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub home: TeamResult,
    pub away: TeamResult,
}

impl Game {
    pub fn new(home: TeamResult, away: TeamResult) -> Self {
        Self { home, away }
    }

    pub fn outcome(&self) -> Outcome {
        match self.home.score.cmp(&self.away.score) {
            Ordering::Greater => Outcome::HomeWin,
            Ordering::Less => Outcome::AwayWin,
            Ordering::Equal => Outcome::Draw,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(home: u32, away: u32) -> Game {
        Game::new(TeamResult::new("Lions", home), TeamResult::new("Snakes", away))
    }

    #[test]
    fn test_outcome_home_win() {
        assert_eq!(game(3, 2).outcome(), Outcome::HomeWin);
    }

    #[test]
    fn test_outcome_away_win() {
        assert_eq!(game(0, 5).outcome(), Outcome::AwayWin);
    }

    #[test]
    fn test_score_normalizes_leading_zeros() {
        assert_eq!(Score::from_digits("007"), Some(Score::from(7u32)));
        assert_eq!(Score::from_digits("000"), Some(Score::zero()));
        assert_eq!(Score::from_digits("12a"), None);
        assert_eq!(Score::from_digits(""), None);
    }

    #[test]
    fn test_score_ordering_beyond_machine_integers() {
        let huge = Score::from_digits("5000000000").unwrap();
        let bigger = Score::from_digits("123456789012345678901234567890").unwrap();
        assert!(huge > Score::from(u32::MAX));
        assert!(bigger > huge);
        assert!(Score::from_digits("9").unwrap() < Score::from_digits("10").unwrap());
        assert_eq!(huge.cmp(&Score::from_digits("05000000000").unwrap()), Ordering::Equal);
    }

    #[test]
    fn test_outcome_draw() {
        assert_eq!(game(1, 1).outcome(), Outcome::Draw);
        assert_eq!(game(0, 0).outcome(), Outcome::Draw);
    }
}
