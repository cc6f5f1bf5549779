//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.tictactoe/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{LevelFilter, debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::theme::Theme;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GameConfig {
    #[serde(default)]
    pub general: GeneralConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub theme: Option<Theme>,
    pub log_level: Option<String>,
    pub log_file: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;
pub const DEFAULT_LOG_FILE: &str = "tictactoe.log";

pub const THEME_ENV_VAR: &str = "TICTACTOE_THEME";
pub const LOG_LEVEL_ENV_VAR: &str = "TICTACTOE_LOG_LEVEL";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub theme: Theme,
    pub log_level: LevelFilter,
    pub log_file: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            log_level: DEFAULT_LOG_LEVEL,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

/// Values given on the command line. `None` means the flag was not passed.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub theme: Option<Theme>,
    pub log_file: Option<PathBuf>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.tictactoe/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".tictactoe").join("config.toml"))
}

/// Load config from `~/.tictactoe/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `GameConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<GameConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(GameConfig::default());
        }
    };
    load_config_from(&path)
}

/// Same as [`load_config`] for an explicit path.
pub fn load_config_from(path: &Path) -> Result<GameConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(GameConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: GameConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Tic Tac Toe Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# theme = "light"              # "light" or "dark" (or TICTACTOE_THEME)
# log_level = "debug"          # off, error, warn, info, debug, trace (or TICTACTOE_LOG_LEVEL)
# log_file = "tictactoe.log"   # Relative to the working directory
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &GameConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// Resolution with an injectable env lookup.
pub fn resolve_with_env<F>(config: &GameConfig, cli: &CliOverrides, env: F) -> ResolvedConfig
where
    F: Fn(&str) -> Option<String>,
{
    // Theme: CLI → env → config → default
    let theme = cli
        .theme
        .or_else(|| env_theme(&env))
        .or(config.general.theme)
        .unwrap_or_default();

    // Log level: env → config → default
    let log_level = env(LOG_LEVEL_ENV_VAR)
        .and_then(|value| parse_level(&value, "environment"))
        .or_else(|| {
            config
                .general
                .log_level
                .as_deref()
                .and_then(|value| parse_level(value, "config file"))
        })
        .unwrap_or(DEFAULT_LOG_LEVEL);

    // Log file: CLI → config → default
    let log_file = cli
        .log_file
        .clone()
        .or_else(|| config.general.log_file.as_ref().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

    ResolvedConfig {
        theme,
        log_level,
        log_file,
    }
}

fn env_theme<F>(env: &F) -> Option<Theme>
where
    F: Fn(&str) -> Option<String>,
{
    let value = env(THEME_ENV_VAR)?;
    let theme = Theme::parse(&value);
    if theme.is_none() {
        warn!("Ignoring {}={:?}: expected \"light\" or \"dark\"", THEME_ENV_VAR, value);
    }
    theme
}

fn parse_level(value: &str, source: &str) -> Option<LevelFilter> {
    match value.trim().parse::<LevelFilter>() {
        Ok(level) => Some(level),
        Err(_) => {
            warn!("Ignoring log level {:?} from {}", value, source);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_default_config_parses() {
        let config = GameConfig::default();
        assert!(config.general.theme.is_none());
        assert!(config.general.log_level.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve_with_env(&GameConfig::default(), &CliOverrides::default(), no_env);
        assert_eq!(resolved, ResolvedConfig::default());
        assert_eq!(resolved.theme, Theme::Light);
        assert_eq!(resolved.log_level, LevelFilter::Debug);
        assert_eq!(resolved.log_file, PathBuf::from("tictactoe.log"));
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = GameConfig {
            general: GeneralConfig {
                theme: Some(Theme::Dark),
                log_level: Some("warn".to_string()),
                log_file: Some("/tmp/ttt.log".to_string()),
            },
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), no_env);
        assert_eq!(resolved.theme, Theme::Dark);
        assert_eq!(resolved.log_level, LevelFilter::Warn);
        assert_eq!(resolved.log_file, PathBuf::from("/tmp/ttt.log"));
    }

    #[test]
    fn test_env_overrides_config() {
        let config = GameConfig {
            general: GeneralConfig {
                theme: Some(Theme::Light),
                log_level: Some("warn".to_string()),
                ..Default::default()
            },
        };
        let env = |key: &str| match key {
            THEME_ENV_VAR => Some("dark".to_string()),
            LOG_LEVEL_ENV_VAR => Some("trace".to_string()),
            _ => None,
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), env);
        assert_eq!(resolved.theme, Theme::Dark);
        assert_eq!(resolved.log_level, LevelFilter::Trace);
    }

    #[test]
    fn test_resolve_cli_wins() {
        let config = GameConfig {
            general: GeneralConfig {
                theme: Some(Theme::Light),
                log_file: Some("from-config.log".to_string()),
                ..Default::default()
            },
        };
        let cli = CliOverrides {
            theme: Some(Theme::Dark),
            log_file: Some(PathBuf::from("from-cli.log")),
        };
        let env = |key: &str| (key == THEME_ENV_VAR).then(|| "light".to_string());
        let resolved = resolve_with_env(&config, &cli, env);
        assert_eq!(resolved.theme, Theme::Dark);
        assert_eq!(resolved.log_file, PathBuf::from("from-cli.log"));
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = GameConfig {
            general: GeneralConfig {
                log_level: Some("loud".to_string()),
                ..Default::default()
            },
        };
        let env = |key: &str| (key == THEME_ENV_VAR).then(|| "sepia".to_string());
        let resolved = resolve_with_env(&config, &CliOverrides::default(), env);
        assert_eq!(resolved.theme, Theme::Light);
        assert_eq!(resolved.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[general]
theme = "dark"
log_level = "info"
log_file = "game.log"
"#;
        let config: GameConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.theme, Some(Theme::Dark));
        assert_eq!(config.general.log_level.as_deref(), Some("info"));
        assert_eq!(config.general.log_file.as_deref(), Some("game.log"));
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing, everything else stays default
        let toml_str = r#"
[general]
theme = "light"
"#;
        let config: GameConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.theme, Some(Theme::Light));
        assert!(config.general.log_level.is_none());

        let empty: GameConfig = toml::from_str("").unwrap();
        assert!(empty.general.theme.is_none());
    }

    #[test]
    fn test_unknown_theme_is_parse_error() {
        let result: Result<GameConfig, _> = toml::from_str("[general]\ntheme = \"sepia\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_file_generates_default() {
        let dir = std::env::temp_dir().join(format!("tictactoe-config-{}", std::process::id()));
        let path = dir.join("config.toml");
        let _ = fs::remove_file(&path);

        let config = load_config_from(&path).unwrap();
        assert!(config.general.theme.is_none());

        // The generated file is all comments, so it parses back to defaults
        let reloaded = load_config_from(&path).unwrap();
        assert!(reloaded.general.theme.is_none());
        assert!(fs::read_to_string(&path).unwrap().contains("TICTACTOE_THEME"));

        let _ = fs::remove_dir_all(&dir);
    }
}
