//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.explorer/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct ExplorerConfig {
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Default, Deserialize)]
pub struct DisplayConfig {
    pub clear_screen: Option<bool>,
    pub color: Option<bool>,
    pub wrap_width: Option<usize>,
    pub show_welcome: Option<bool>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_WRAP_WIDTH: usize = 100;
/// Narrower than this and wrapping does more harm than good.
pub const MIN_WRAP_WIDTH: usize = 20;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub clear_screen: bool,
    pub color: bool,
    pub wrap_width: usize,
    pub show_welcome: bool,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            clear_screen: true,
            color: true,
            wrap_width: DEFAULT_WRAP_WIDTH,
            show_welcome: true,
        }
    }
}

/// Overrides coming from the command line. `false` means "not given".
#[derive(Debug, Clone, Copy, Default)]
pub struct CliOverrides {
    pub no_clear: bool,
    pub no_color: bool,
    pub no_welcome: bool,
}

/// Environment values that take part in resolution, read once.
#[derive(Debug, Clone, Default)]
pub struct EnvOverrides {
    /// `EXPLORER_CLEAR_SCREEN`
    pub clear_screen: Option<String>,
    /// `NO_COLOR`, any value disables color
    pub no_color: Option<String>,
}

impl EnvOverrides {
    pub fn from_env() -> Self {
        Self {
            clear_screen: std::env::var("EXPLORER_CLEAR_SCREEN").ok(),
            no_color: std::env::var("NO_COLOR").ok(),
        }
    }
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

/// Returns the path to `~/.explorer/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".explorer").join("config.toml"))
}

/// Load config from `~/.explorer/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `ExplorerConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<ExplorerConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(ExplorerConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(ExplorerConfig::default());
    }

    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<ExplorerConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: ExplorerConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Explorer Configuration
# All settings are optional, defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [display]
# clear_screen = true     # Or set EXPLORER_CLEAR_SCREEN=0, or pass --no-clear
# color = true            # Set NO_COLOR to disable, or pass --no-color
# wrap_width = 100        # Column at which explanations are wrapped
# show_welcome = true     # Or pass --no-welcome
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

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &ExplorerConfig, env: &EnvOverrides, cli: CliOverrides) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();
    let display = &config.display;

    // Clear screen: CLI → env → config → default
    let env_clear = env.clear_screen.as_deref().and_then(|v| {
        let parsed = parse_flag(v);
        if parsed.is_none() {
            warn!("Ignoring EXPLORER_CLEAR_SCREEN={:?}, expected a boolean", v);
        }
        parsed
    });
    let clear_screen = !cli.no_clear
        && env_clear
            .or(display.clear_screen)
            .unwrap_or(defaults.clear_screen);

    // Color: CLI → NO_COLOR → config → default
    let color = !cli.no_color
        && env.no_color.is_none()
        && display.color.unwrap_or(defaults.color);

    let wrap_width = display
        .wrap_width
        .unwrap_or(defaults.wrap_width)
        .max(MIN_WRAP_WIDTH);

    let show_welcome = !cli.no_welcome && display.show_welcome.unwrap_or(defaults.show_welcome);

    ResolvedConfig {
        clear_screen,
        color,
        wrap_width,
        show_welcome,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve(
            &ExplorerConfig::default(),
            &EnvOverrides::default(),
            CliOverrides::default(),
        );
        assert_eq!(resolved, ResolvedConfig::default());
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = ExplorerConfig {
            display: DisplayConfig {
                clear_screen: Some(false),
                color: Some(false),
                wrap_width: Some(72),
                show_welcome: Some(false),
            },
        };
        let resolved = resolve(&config, &EnvOverrides::default(), CliOverrides::default());
        assert!(!resolved.clear_screen);
        assert!(!resolved.color);
        assert_eq!(resolved.wrap_width, 72);
        assert!(!resolved.show_welcome);
    }

    #[test]
    fn test_env_wins_over_config() {
        let config = ExplorerConfig {
            display: DisplayConfig {
                clear_screen: Some(false),
                ..Default::default()
            },
        };
        let env = EnvOverrides {
            clear_screen: Some("yes".into()),
            no_color: Some(String::new()),
        };
        let resolved = resolve(&config, &env, CliOverrides::default());
        assert!(resolved.clear_screen);
        assert!(!resolved.color);
    }

    #[test]
    fn test_bad_env_value_falls_through_to_config() {
        let config = ExplorerConfig {
            display: DisplayConfig {
                clear_screen: Some(false),
                ..Default::default()
            },
        };
        let env = EnvOverrides {
            clear_screen: Some("maybe".into()),
            no_color: None,
        };
        assert!(!resolve(&config, &env, CliOverrides::default()).clear_screen);
    }

    #[test]
    fn test_cli_wins() {
        let env = EnvOverrides {
            clear_screen: Some("1".into()),
            no_color: None,
        };
        let cli = CliOverrides {
            no_clear: true,
            no_color: true,
            no_welcome: true,
        };
        let resolved = resolve(&ExplorerConfig::default(), &env, cli);
        assert!(!resolved.clear_screen);
        assert!(!resolved.color);
        assert!(!resolved.show_welcome);
    }

    #[test]
    fn test_wrap_width_has_floor() {
        let config = ExplorerConfig {
            display: DisplayConfig {
                wrap_width: Some(3),
                ..Default::default()
            },
        };
        let resolved = resolve(&config, &EnvOverrides::default(), CliOverrides::default());
        assert_eq!(resolved.wrap_width, MIN_WRAP_WIDTH);
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing, everything else stays default
        let toml_str = r#"
[display]
color = false
"#;
        let config: ExplorerConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.display.color, Some(false));
        assert!(config.display.clear_screen.is_none());
        assert!(config.display.wrap_width.is_none());
    }

    #[test]
    fn test_empty_toml_parses() {
        let config: ExplorerConfig = toml::from_str("").unwrap();
        assert!(config.display.show_welcome.is_none());
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let path = std::env::temp_dir().join(format!(
            "explorer-config-test-{}.toml",
            std::process::id()
        ));
        fs::write(&path, "[display\ncolor = ").unwrap();
        let result = load_config_from(&path);
        let _ = fs::remove_file(&path);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let path = std::env::temp_dir().join("explorer-config-test-does-not-exist.toml");
        assert!(matches!(load_config_from(&path), Err(ConfigError::Io(_))));
    }
}
