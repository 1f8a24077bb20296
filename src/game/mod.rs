pub mod parser;
pub mod types;

pub use parser::{parse_line, LineError};
pub use types::{Game, Outcome, Score, TeamResult};
