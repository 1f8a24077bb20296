use serde::{Deserialize, Serialize};

/// Points for a win under standard league scoring.
pub const WIN_POINTS: u32 = 3;
/// Points for each side of a draw.
pub const DRAW_POINTS: u32 = 1;
/// Points for a loss.
pub const LOSS_POINTS: u32 = 0;

/// Points awarded per game result.
///
/// Every field is optional in the config file and falls back to standard
/// league scoring (3 / 1 / 0).
///
/// Example YAML:
/// ```yaml
/// scoring:
///   win: 3
///   draw: 1
///   loss: 0
/// ```
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ScoringConfig {
    #[serde(default = "default_win")]
    pub win: u32,

    #[serde(default = "default_draw")]
    pub draw: u32,

    #[serde(default = "default_loss")]
    pub loss: u32,
}

fn default_win() -> u32 {
    WIN_POINTS
}

fn default_draw() -> u32 {
    DRAW_POINTS
}

fn default_loss() -> u32 {
    LOSS_POINTS
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            win: WIN_POINTS,
            draw: DRAW_POINTS,
            loss: LOSS_POINTS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scoring_config() {
        let config = ScoringConfig::default();

        assert_eq!(config.win, 3);
        assert_eq!(config.draw, 1);
        assert_eq!(config.loss, 0);
    }

    #[test]
    fn test_scoring_config_serde_roundtrip() {
        let config = ScoringConfig::default();
        let yaml = serde_saphyr::to_string(&config).unwrap();
        let parsed: ScoringConfig = serde_saphyr::from_str(&yaml).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_partial_scoring_config_parse() {
        let yaml = r#"
win: 2
"#;
        let config: ScoringConfig = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(config.win, 2);
        assert_eq!(config.draw, DRAW_POINTS);
        assert_eq!(config.loss, LOSS_POINTS);
    }

    #[test]
    fn test_empty_scoring_config_parse() {
        let yaml = "{}";
        let config: ScoringConfig = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(config, ScoringConfig::default());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let yaml = "bonus: 5";
        let result: Result<ScoringConfig, _> = serde_saphyr::from_str(yaml);
        assert!(result.is_err());
    }
}
