//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.basket/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{LevelFilter, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct BasketConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub animation: AnimationConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub log_level: Option<String>,
    pub log_file: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct AnimationConfig {
    pub enabled: Option<bool>,
    pub slide_ms: Option<u64>,
    pub fade_ms: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct UiConfig {
    pub show_icons: Option<bool>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;
pub const DEFAULT_LOG_FILE: &str = "basket.log";
pub const DEFAULT_SLIDE_MS: u64 = 300;
pub const DEFAULT_FADE_MS: u64 = 250;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub log_level: LevelFilter,
    pub log_file: PathBuf,
    pub animation: AnimationSettings,
    pub show_icons: bool,
    /// Log level strings that failed to parse, reported once logging is up
    pub ignored_levels: Vec<String>,
}

/// Timings for screen transitions. Consumed by the renderer only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationSettings {
    pub enabled: bool,
    pub slide: Duration,
    pub fade: Duration,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            slide: Duration::from_millis(DEFAULT_SLIDE_MS),
            fade: Duration::from_millis(DEFAULT_FADE_MS),
        }
    }
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        resolve_with_env(&BasketConfig::default(), &CliOverrides::default(), |_| None)
    }
}

/// Values given on the command line. `None`/`false` means "not specified".
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub log_level: Option<String>,
    pub log_file: Option<PathBuf>,
    pub no_animation: bool,
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

/// Returns the path to `~/.basket/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".basket").join("config.toml"))
}

/// Where the file-level settings came from.
///
/// Loading runs before the logger is initialized, so the outcome is
/// returned and reported with [`ConfigSource::log`] once logging is up.
#[derive(Debug)]
pub enum ConfigSource {
    File(PathBuf),
    Generated(PathBuf),
    GenerateFailed(PathBuf, std::io::Error),
    NoHomeDir,
}

impl ConfigSource {
    pub fn log(&self) {
        match self {
            ConfigSource::File(path) => info!("Loaded config from {}", path.display()),
            ConfigSource::Generated(path) => {
                info!("No config file found, generated default at {}", path.display())
            }
            ConfigSource::GenerateFailed(path, e) => {
                warn!("Failed to write default config to {}: {}", path.display(), e)
            }
            ConfigSource::NoHomeDir => {
                warn!("Could not determine home directory, using default config")
            }
        }
    }
}

/// Load config from `~/.basket/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `BasketConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<(BasketConfig, ConfigSource), ConfigError> {
    match config_path() {
        Some(path) => load_config_at(path),
        None => Ok((BasketConfig::default(), ConfigSource::NoHomeDir)),
    }
}

fn load_config_at(path: PathBuf) -> Result<(BasketConfig, ConfigSource), ConfigError> {
    if !path.exists() {
        let source = match generate_default_config(&path) {
            Ok(()) => ConfigSource::Generated(path),
            Err(e) => ConfigSource::GenerateFailed(path, e),
        };
        return Ok((BasketConfig::default(), source));
    }

    let config = load_config_from(&path)?;
    Ok((config, ConfigSource::File(path)))
}

/// Load config from an explicit path. A missing file is an error here.
pub fn load_config_from(path: &Path) -> Result<BasketConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    toml::from_str(&contents).map_err(ConfigError::Parse)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) -> std::io::Result<()> {
    let default_content = r#"# Basket Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# log_level = "info"          # "off", "error", "warn", "info", "debug", "trace"
# log_file = "basket.log"     # Or set BASKET_LOG_FILE env var

# [animation]
# enabled = true              # Or set BASKET_NO_ANIMATION=1
# slide_ms = 300              # Directional screen change
# fade_ms = 250               # Cross-fade

# [ui]
# show_icons = true           # Emoji icons in the tab bar
"#;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, default_content)
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &BasketConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// Same as [`resolve`], with environment lookups supplied by the caller.
pub fn resolve_with_env(
    config: &BasketConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Log level: CLI → env → config → default. Unparseable values fall through.
    let mut ignored_levels = Vec::new();
    let mut parse = |value: Option<String>| {
        let value = value?;
        let level = LevelFilter::from_str(value.trim()).ok();
        if level.is_none() {
            ignored_levels.push(value);
        }
        level
    };
    let log_level = parse(cli.log_level.clone())
        .or_else(|| parse(env("BASKET_LOG_LEVEL")))
        .or_else(|| parse(config.general.log_level.clone()))
        .unwrap_or(DEFAULT_LOG_LEVEL);

    // Log file: CLI → env → config → default
    let log_file = cli
        .log_file
        .clone()
        .or_else(|| env("BASKET_LOG_FILE").map(PathBuf::from))
        .or_else(|| config.general.log_file.as_ref().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

    // Animation: any "off" switch wins
    let disabled_by_env = env("BASKET_NO_ANIMATION").is_some_and(|v| is_truthy(&v));
    let enabled =
        !cli.no_animation && !disabled_by_env && config.animation.enabled.unwrap_or(true);

    ResolvedConfig {
        log_level,
        log_file,
        animation: AnimationSettings {
            enabled,
            slide: Duration::from_millis(config.animation.slide_ms.unwrap_or(DEFAULT_SLIDE_MS)),
            fade: Duration::from_millis(config.animation.fade_ms.unwrap_or(DEFAULT_FADE_MS)),
        },
        show_icons: config.ui.show_icons.unwrap_or(true),
        ignored_levels,
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
