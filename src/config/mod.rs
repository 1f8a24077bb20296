mod schema;

pub use schema::{Config, OutputConfig};

use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Get the config directory path (~/.config/league-table/)
pub fn get_config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config").join("league-table"))
}

/// Get the default config file path (~/.config/league-table/config.yaml)
pub fn get_config_path() -> Option<PathBuf> {
    get_config_dir().map(|dir| dir.join("config.yaml"))
}

/// Load configuration.
///
/// An explicit `path` must exist. Without one, the default location is tried
/// and built-in defaults are used when no file is there.
///
/// # Errors
///
/// Returns an error if:
/// - An explicit config path does not exist
/// - The config file cannot be read
/// - The YAML cannot be parsed
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Config file not found at {}", path.display());
            }
            path
        }
        None => match get_config_path() {
            Some(path) if path.exists() => path,
            _ => {
                tracing::debug!("No config file found, using defaults");
                return Ok(Config::default());
            }
        },
    };

    parse_config_file(&config_path)
}

fn parse_config_file(config_path: &Path) -> Result<Config> {
    let config_content = fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file at {}", config_path.display()))?;

    let config: Config = serde_saphyr::from_str(&config_content)
        .with_context(|| format!("Failed to parse config: invalid YAML in {}", config_path.display()))?;

    tracing::debug!(path = %config_path.display(), "Loaded config");
    Ok(config)
}

/// Write the default config to `path`, creating parent directories.
/// Refuses to replace an existing file unless `force` is set.
pub fn write_default_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "Config file already exists at {} (use --force to overwrite)",
            path.display()
        );
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory at {}", parent.display()))?;
        }
    }

    let yaml = serde_saphyr::to_string(&Config::default())
        .map_err(|e| anyhow::anyhow!("Failed to serialize default config: {}", e))?;

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;
    file.write_all(yaml.as_bytes())
        .with_context(|| format!("Failed to write config to {}", path.display()))?;
    file.commit().context("Failed to save config")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputFormat;
    use std::env;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = serde_saphyr::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
        assert!(config.output.shared_ranks);
        assert_eq!(config.output.format, OutputFormat::Table);
    }

    #[test]
    fn test_full_config_parse() {
        let yaml = r#"
scoring:
  win: 2
  draw: 1
  loss: 0
output:
  format: tsv
  shared_ranks: false
"#;
        let config: Config = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(config.scoring.win, 2);
        assert_eq!(config.output.format, OutputFormat::Tsv);
        assert!(!config.output.shared_ranks);
    }

    #[test]
    fn test_unknown_section_rejected() {
        let result: Result<Config, _> = serde_saphyr::from_str("queries: []");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_missing_explicit_path_fails() {
        let temp_path = env::temp_dir().join("league_table_test_missing.yaml");
        let _ = fs::remove_file(&temp_path);

        let err = load_config(Some(temp_path)).unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }

    #[test]
    fn test_load_invalid_yaml_fails() {
        let temp_path = env::temp_dir().join("league_table_test_invalid.yaml");
        fs::write(&temp_path, "scoring: [not, a, map]").unwrap();

        assert!(load_config(Some(temp_path.clone())).is_err());

        let _ = fs::remove_file(&temp_path);
    }

    #[test]
    fn test_write_and_load_default_config() {
        let temp_path = env::temp_dir().join("league_table_test_default.yaml");
        let _ = fs::remove_file(&temp_path);

        write_default_config(&temp_path, false).unwrap();
        let loaded = load_config(Some(temp_path.clone())).unwrap();
        assert_eq!(loaded, Config::default());

        // Second write without force is refused
        assert!(write_default_config(&temp_path, false).is_err());
        assert!(write_default_config(&temp_path, true).is_ok());

        let _ = fs::remove_file(&temp_path);
    }
}
