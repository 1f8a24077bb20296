use super::config::ScoringConfig;

/// Validate scoring configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_scoring(config: &ScoringConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if config.win <= config.draw {
        errors.push(format!(
            "scoring.win: must be greater than scoring.draw ({} <= {})",
            config.win, config.draw
        ));
    }

    if config.draw < config.loss {
        errors.push(format!(
            "scoring.draw: must not be less than scoring.loss ({} < {})",
            config.draw, config.loss
        ));
    }

    if config.win <= config.loss {
        errors.push(format!(
            "scoring.win: must be greater than scoring.loss ({} <= {})",
            config.win, config.loss
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
