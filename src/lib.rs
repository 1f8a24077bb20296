pub mod config;
pub mod game;
pub mod input;
pub mod logger;
pub mod output;
pub mod ranking;
pub mod scoring;
pub mod standings;

pub use game::{parse_line, Game, LineError, TeamResult};
pub use ranking::{rank, RankingEntry};
pub use scoring::{tally_lines, PointsTable, ScoringConfig, SkippedLine, Tally};
pub use standings::{compute_standings, Standings};
