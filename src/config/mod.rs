// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Language, theme mode, accent color and animations
//! - `[layout]` - Menu mode, sidebar width and visibility, footer visibility
//! - `[preview]` - Spreadsheet viewer endpoints, cache size, swipe threshold
//!
//! # Settings Stores
//!
//! Code that persists preferences goes through the [`SettingsStore`] trait so
//! the application can run against the on-disk [`FileSettingsStore`] while
//! tests use the [`MemorySettingsStore`].
//!
//! # Examples
//!
//! ```no_run
//! use iced_preview::config::{FileSettingsStore, SettingsStore};
//!
//! let mut store = FileSettingsStore::default();
//! let (config, _warning) = store.load();
//! assert!(config.preview.swipe_threshold() > 0.0);
//!
//! store
//!     .merge(|config| config.layout.sidebar_collapsed = Some(true))
//!     .expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::layout::{MenuMode, SidebarMode};
use crate::ui::theming::{AccentColor, ThemeMode};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// Warning key surfaced when an existing config file cannot be parsed.
pub const CONFIG_LOAD_WARNING_KEY: &str = "notification-config-load-error";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,

    /// Accent preset merged over the light and dark palettes.
    #[serde(default)]
    pub accent: AccentColor,

    /// Whether smooth transitions may be used between files.
    #[serde(default = "default_animations", skip_serializing_if = "Option::is_none")]
    pub animations: Option<bool>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
            accent: AccentColor::default(),
            animations: default_animations(),
        }
    }
}

/// Admin-layout chrome settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LayoutConfig {
    /// Static sidebar beside the preview, or overlay on demand.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub menu_mode: Option<MenuMode>,

    /// Full, slim or slim-plus sidebar.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sidebar_mode: Option<SidebarMode>,

    /// Whether the static sidebar starts collapsed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sidebar_collapsed: Option<bool>,

    /// Whether the footer (version, probe summary) is shown.
    #[serde(default = "default_show_footer", skip_serializing_if = "Option::is_none")]
    pub show_footer: Option<bool>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            menu_mode: None,
            sidebar_mode: None,
            sidebar_collapsed: Some(false),
            show_footer: default_show_footer(),
        }
    }
}

/// Preview widget settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PreviewConfig {
    /// Embed endpoint of the primary spreadsheet viewer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub office_viewer_endpoint: Option<String>,

    /// Embed endpoint of the alternate spreadsheet viewer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternate_viewer_endpoint: Option<String>,

    /// Number of references kept in the derived URL cache.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url_cache_capacity: Option<usize>,

    /// Minimum horizontal travel for a swipe, in logical pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swipe_threshold: Option<f32>,

    /// Crossfade duration in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transition_ms: Option<u64>,
}

impl PreviewConfig {
    /// Primary viewer endpoint, falling back to the built-in default.
    #[must_use]
    pub fn office_viewer_endpoint(&self) -> &str {
        non_blank(self.office_viewer_endpoint.as_deref())
            .unwrap_or(DEFAULT_OFFICE_VIEWER_ENDPOINT)
    }

    /// Alternate viewer endpoint, falling back to the built-in default.
    #[must_use]
    pub fn alternate_viewer_endpoint(&self) -> &str {
        non_blank(self.alternate_viewer_endpoint.as_deref())
            .unwrap_or(DEFAULT_ALTERNATE_VIEWER_ENDPOINT)
    }

    /// Cache capacity clamped to the supported range.
    #[must_use]
    pub fn url_cache_capacity(&self) -> usize {
        self.url_cache_capacity
            .unwrap_or(DEFAULT_URL_CACHE_CAPACITY)
            .clamp(MIN_URL_CACHE_CAPACITY, MAX_URL_CACHE_CAPACITY)
    }

    /// Swipe threshold clamped to the supported range.
    #[must_use]
    pub fn swipe_threshold(&self) -> f32 {
        match self.swipe_threshold {
            Some(value) if value.is_finite() => {
                value.clamp(MIN_SWIPE_THRESHOLD, MAX_SWIPE_THRESHOLD)
            }
            _ => DEFAULT_SWIPE_THRESHOLD,
        }
    }

    /// Crossfade duration capped to the supported maximum.
    #[must_use]
    pub fn transition_ms(&self) -> u64 {
        self.transition_ms
            .unwrap_or(DEFAULT_TRANSITION_MS)
            .min(MAX_TRANSITION_MS)
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Layout chrome settings.
    #[serde(default)]
    pub layout: LayoutConfig,

    /// Preview widget settings.
    #[serde(default)]
    pub preview: PreviewConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_animations() -> Option<bool> {
    Some(true)
}

fn default_show_footer() -> Option<bool> {
    Some(true)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Load / Save Functions
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(error) => {
                    tracing::warn!(
                        path = %path.display(),
                        %error,
                        "falling back to default config"
                    );
                    return (Config::default(), Some(CONFIG_LOAD_WARNING_KEY.to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Settings Stores
// =============================================================================

/// Persistence boundary for user preferences.
pub trait SettingsStore {
    /// Returns the configuration used when nothing has been saved yet.
    fn load_defaults(&self) -> Config {
        Config::default()
    }

    /// Loads the stored configuration, with an optional warning key when the
    /// stored data was unusable and defaults were substituted.
    fn load(&self) -> (Config, Option<String>);

    /// Replaces the stored configuration.
    fn save(&mut self, config: &Config) -> Result<()>;

    /// Loads, applies `update`, then saves. Returns the saved configuration.
    fn merge<F>(&mut self, update: F) -> Result<Config>
    where
        F: FnOnce(&mut Config),
    {
        let (mut config, _warning) = self.load();
        update(&mut config);
        self.save(&config)?;
        Ok(config)
    }
}

/// Settings stored as `settings.toml` in the application config directory.
#[derive(Debug, Clone, Default)]
pub struct FileSettingsStore {
    base_dir: Option<PathBuf>,
}

impl FileSettingsStore {
    /// Creates a store rooted at `base_dir` instead of the resolved config dir.
    #[must_use]
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self {
            base_dir: Some(base_dir),
        }
    }
}

impl SettingsStore for FileSettingsStore {
    fn load(&self) -> (Config, Option<String>) {
        load_with_override(self.base_dir.clone())
    }

    fn save(&mut self, config: &Config) -> Result<()> {
        save_with_override(config, self.base_dir.clone())
    }
}

/// In-memory store; nothing survives the process.
#[derive(Debug, Clone, Default)]
pub struct MemorySettingsStore {
    stored: Option<Config>,
    saves: usize,
}

impl MemorySettingsStore {
    /// Creates a store pre-populated with `config`.
    #[must_use]
    pub fn with_config(config: Config) -> Self {
        Self {
            stored: Some(config),
            saves: 0,
        }
    }

    /// Number of successful saves so far.
    #[must_use]
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl SettingsStore for MemorySettingsStore {
    fn load(&self) -> (Config, Option<String>) {
        match &self.stored {
            Some(config) => (config.clone(), None),
            None => (self.load_defaults(), None),
        }
    }

    fn save(&mut self, config: &Config) -> Result<()> {
        self.stored = Some(config.clone());
        self.saves += 1;
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Light,
                accent: AccentColor::Amber,
                animations: Some(false),
            },
            layout: LayoutConfig {
                menu_mode: Some(MenuMode::Overlay),
                sidebar_mode: Some(SidebarMode::SlimPlus),
                sidebar_collapsed: Some(true),
                show_footer: Some(false),
            },
            preview: PreviewConfig {
                office_viewer_endpoint: Some("https://viewer.example.org/embed".into()),
                swipe_threshold: Some(80.0),
                ..PreviewConfig::default()
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        assert!(matches!(load_from_path(&config_path), Err(Error::Config(_))));
    }

    #[test]
    fn load_with_override_returns_warning_on_invalid_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[general\ntheme_mode = 3")
            .expect("failed to write invalid toml");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some(CONFIG_LOAD_WARNING_KEY));
    }

    #[test]
    fn missing_file_yields_defaults_without_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().join("absent")));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn partial_file_fills_missing_sections_with_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join(CONFIG_FILE);
        fs::write(&path, "[layout]\nsidebar_collapsed = true\n").expect("write");

        let loaded = load_from_path(&path).expect("load");

        assert_eq!(loaded.layout.sidebar_collapsed, Some(true));
        assert_eq!(loaded.general, GeneralConfig::default());
        assert_eq!(loaded.preview, PreviewConfig::default());
    }

    #[test]
    fn theme_mode_is_case_insensitive() {
        let loaded: Config = toml::from_str("[general]\ntheme_mode = \"DARK\"\n").expect("parse");
        assert_eq!(loaded.general.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn layout_modes_use_readable_names() {
        let loaded: Config = toml::from_str(
            "[general]\naccent = \"blue\"\n[layout]\nmenu_mode = \"overlay\"\n\
             sidebar_mode = \"slim-plus\"\n",
        )
        .expect("parse");
        assert_eq!(loaded.general.accent, AccentColor::Blue);
        assert_eq!(loaded.layout.menu_mode, Some(MenuMode::Overlay));
        assert_eq!(loaded.layout.sidebar_mode, Some(SidebarMode::SlimPlus));
    }

    #[test]
    fn preview_accessors_clamp_and_fall_back() {
        let preview = PreviewConfig {
            office_viewer_endpoint: Some("   ".into()),
            alternate_viewer_endpoint: None,
            url_cache_capacity: Some(1),
            swipe_threshold: Some(f32::NAN),
            transition_ms: Some(60_000),
        };

        assert_eq!(preview.office_viewer_endpoint(), DEFAULT_OFFICE_VIEWER_ENDPOINT);
        assert_eq!(
            preview.alternate_viewer_endpoint(),
            DEFAULT_ALTERNATE_VIEWER_ENDPOINT
        );
        assert_eq!(preview.url_cache_capacity(), MIN_URL_CACHE_CAPACITY);
        assert_eq!(preview.swipe_threshold(), DEFAULT_SWIPE_THRESHOLD);
        assert_eq!(preview.transition_ms(), MAX_TRANSITION_MS);
    }

    #[test]
    fn file_store_merge_persists_only_the_update() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let mut store = FileSettingsStore::with_base_dir(temp_dir.path().to_path_buf());

        store
            .merge(|config| config.general.language = Some("fr".into()))
            .expect("first merge");
        let saved = store
            .merge(|config| config.layout.show_footer = Some(false))
            .expect("second merge");

        assert_eq!(saved.general.language.as_deref(), Some("fr"));
        assert_eq!(saved.layout.show_footer, Some(false));

        let (reloaded, warning) = store.load();
        assert!(warning.is_none());
        assert_eq!(reloaded, saved);
    }

    #[test]
    fn memory_store_starts_from_defaults_and_counts_saves() {
        let mut store = MemorySettingsStore::default();
        assert_eq!(store.load().0, Config::default());

        store
            .merge(|config| config.general.theme_mode = ThemeMode::Light)
            .expect("memory save cannot fail");

        assert_eq!(store.save_count(), 1);
        assert_eq!(store.load().0.general.theme_mode, ThemeMode::Light);
    }
}
