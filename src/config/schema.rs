use crate::output::OutputFormat;
use crate::scoring::ScoringConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub scoring: ScoringConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,

    /// Teams level on points share a position ("1, 2, 2, 4")
    #[serde(default = "default_shared_ranks")]
    pub shared_ranks: bool,
}

fn default_shared_ranks() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            shared_ranks: default_shared_ranks(),
        }
    }
}
