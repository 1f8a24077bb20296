use super::types::{Game, Score, TeamResult};
use thiserror::Error;

/// Why a game line was rejected.
///
/// Every variant is recoverable: the aggregator skips the line and keeps going.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineError {
    #[error("line is blank")]
    Blank,

    #[error("no comma separating the two teams")]
    MissingSeparator,

    #[error("expected exactly one comma, found {commas}")]
    TooManySegments { commas: usize },

    #[error("one side of the game is empty")]
    EmptySegment,

    #[error("'{segment}' has no score")]
    MissingScore { segment: String },

    #[error("'{segment}' has no team name")]
    MissingTeamName { segment: String },

    #[error("score '{score}' is not a whole number")]
    InvalidScore { score: String },

    #[error("scores must be non-negative, got '{score}'")]
    NegativeScore { score: String },
}

/// Parse one game line of the form `"<Team A> <ScoreA>, <Team B> <ScoreB>"`.
///
/// Team names may contain spaces; the score is always the last
/// whitespace-separated token of each side. Whitespace inside a team name is
/// kept exactly as written.
pub fn parse_line(line: &str) -> Result<Game, LineError> {
    if line.trim().is_empty() {
        return Err(LineError::Blank);
    }

    let segments: Vec<&str> = line.split(',').collect();
    match segments.as_slice() {
        [home, away] => Ok(Game::new(parse_segment(home)?, parse_segment(away)?)),
        [_] => Err(LineError::MissingSeparator),
        _ => Err(LineError::TooManySegments {
            commas: segments.len() - 1,
        }),
    }
}

fn parse_segment(segment: &str) -> Result<TeamResult, LineError> {
    let segment = segment.trim();
    if segment.is_empty() {
        return Err(LineError::EmptySegment);
    }

    let Some((name, score)) = segment.rsplit_once(char::is_whitespace) else {
        // A lone token is either a bare score or a bare name
        return Err(if looks_numeric(segment) {
            LineError::MissingTeamName {
                segment: segment.to_string(),
            }
        } else {
            LineError::MissingScore {
                segment: segment.to_string(),
            }
        });
    };

    let name = name.trim();
    if name.is_empty() {
        return Err(LineError::MissingTeamName {
            segment: segment.to_string(),
        });
    }

    Ok(TeamResult::new(name, parse_score(score)?))
}

fn parse_score(token: &str) -> Result<Score, LineError> {
    if let Some(digits) = token.strip_prefix('-') {
        if is_digits(digits) {
            // "-0" is still zero
            if digits.bytes().all(|b| b == b'0') {
                return Ok(Score::zero());
            }
            return Err(LineError::NegativeScore {
                score: token.to_string(),
            });
        }
    }

    Score::from_digits(token).ok_or_else(|| LineError::InvalidScore {
        score: token.to_string(),
    })
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn looks_numeric(s: &str) -> bool {
    is_digits(s.strip_prefix('-').unwrap_or(s))
}
