pub mod config;
pub mod engine;
pub mod validation;

pub use config::*;
pub use engine::{award_points, tally_lines, Award, PointsTable, SkippedLine, Tally};
pub use validation::validate_scoring;
