// ABOUTME: Configuration management for deckmate
// Handles simulated timings and the workspaces offered on the first wizard step

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::wizard::GenerationTiming;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application version
    #[serde(default = "default_version")]
    pub version: String,

    /// Simulated delays
    #[serde(default)]
    pub timing: TimingConfig,

    /// Workspaces listed on the first step
    #[serde(default = "default_workspaces")]
    pub workspaces: Vec<WorkspaceEntry>,

    /// UI preferences
    #[serde(default)]
    pub ui_preferences: UiPreferences,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceEntry {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimingConfig {
    /// Time between generation progress steps (default: 1200ms)
    #[serde(default = "default_step_interval")]
    pub step_interval_ms: u64,

    /// Pause after the last progress step before showing success (default: 500ms)
    #[serde(default = "default_finish_delay")]
    pub finish_delay_ms: u64,

    /// Simulated thinking time for query responses (default: 1000ms)
    #[serde(default = "default_query_delay")]
    pub query_delay_ms: u64,

    /// How long notifications stay on screen (default: 3000ms)
    #[serde(default = "default_notification")]
    pub notification_ms: u64,

    /// How long an "Added" insight button stays disabled (default: 3000ms)
    #[serde(default = "default_insight_reset")]
    pub insight_reset_ms: u64,

    /// UI tick rate (default: 100ms)
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            step_interval_ms: default_step_interval(),
            finish_delay_ms: default_finish_delay(),
            query_delay_ms: default_query_delay(),
            notification_ms: default_notification(),
            insight_reset_ms: default_insight_reset(),
            tick_rate_ms: default_tick_rate(),
        }
    }
}

impl TimingConfig {
    pub fn generation(&self) -> GenerationTiming {
        GenerationTiming {
            step_interval: Duration::from_millis(self.step_interval_ms),
            finish_delay: Duration::from_millis(self.finish_delay_ms),
        }
    }

    pub fn query_delay(&self) -> Duration {
        Duration::from_millis(self.query_delay_ms)
    }

    pub fn notification(&self) -> Duration {
        Duration::from_millis(self.notification_ms)
    }

    pub fn insight_reset(&self) -> Duration {
        Duration::from_millis(self.insight_reset_ms)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiPreferences {
    /// Whether the progress panel starts expanded
    #[serde(default = "default_true")]
    pub show_progress_panel: bool,
}

impl Default for UiPreferences {
    fn default() -> Self {
        Self {
            show_progress_panel: default_true(),
        }
    }
}

fn default_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn default_step_interval() -> u64 {
    1200
}

fn default_finish_delay() -> u64 {
    500
}

fn default_query_delay() -> u64 {
    1000
}

fn default_notification() -> u64 {
    3000
}

fn default_insight_reset() -> u64 {
    3000
}

fn default_tick_rate() -> u64 {
    100
}

fn default_true() -> bool {
    true
}

fn default_workspaces() -> Vec<WorkspaceEntry> {
    vec![
        WorkspaceEntry {
            id: "personal-care".to_string(),
            name: "Personal Care".to_string(),
            description: "Dove, Vaseline and skin care brands".to_string(),
        },
        WorkspaceEntry {
            id: "beauty-wellbeing".to_string(),
            name: "Beauty & Wellbeing".to_string(),
            description: "Hair care and prestige brands".to_string(),
        },
    ]
}

/// One config file as written on disk; absent keys leave earlier layers alone
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ConfigLayer {
    #[serde(default)]
    pub timing: TimingLayer,
    pub workspaces: Option<Vec<WorkspaceEntry>>,
    #[serde(default)]
    pub ui_preferences: UiPreferencesLayer,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TimingLayer {
    pub step_interval_ms: Option<u64>,
    pub finish_delay_ms: Option<u64>,
    pub query_delay_ms: Option<u64>,
    pub notification_ms: Option<u64>,
    pub insight_reset_ms: Option<u64>,
    pub tick_rate_ms: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UiPreferencesLayer {
    pub show_progress_panel: Option<bool>,
}

impl AppConfig {
    /// Load configuration from default locations
    pub fn load() -> Result<Self> {
        let mut config = Self::default();

        for path in Self::get_config_paths() {
            if path.exists() {
                config.merge(Self::load_layer(&path)?);
            }
        }

        Ok(config)
    }

    /// Read a single config file over the defaults
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let mut config = Self::default();
        config.merge(Self::load_layer(path)?);
        Ok(config)
    }

    /// Parse a single config file, keeping only the keys it sets
    pub fn load_layer(path: &Path) -> Result<ConfigLayer> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))
    }

    /// Save configuration to user config directory
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::get_user_config_dir()?.join("config.toml");
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        Ok(())
    }

    /// Get configuration file paths in order of precedence
    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![];

        // 1. System config
        paths.push(PathBuf::from("/etc/deckmate/config.toml"));

        // 2. User config (~/.deckmate/config/config.toml)
        if let Ok(config_dir) = Self::get_user_config_dir() {
            paths.push(config_dir.join("config.toml"));
        }

        // 3. Local project config
        if let Ok(cwd) = std::env::current_dir() {
            paths.push(cwd.join(".deckmate").join("config.toml"));
        }

        paths
    }

    /// Get user configuration directory
    fn get_user_config_dir() -> Result<PathBuf> {
        let home_dir = dirs::home_dir().context("Failed to get home directory")?;
        Ok(home_dir.join(".deckmate").join("config"))
    }

    /// Merge a later config file into this one
    pub fn merge(&mut self, layer: ConfigLayer) {
        // Don't override version
        let timing = layer.timing;
        let slots = [
            (&mut self.timing.step_interval_ms, timing.step_interval_ms),
            (&mut self.timing.finish_delay_ms, timing.finish_delay_ms),
            (&mut self.timing.query_delay_ms, timing.query_delay_ms),
            (&mut self.timing.notification_ms, timing.notification_ms),
            (&mut self.timing.insight_reset_ms, timing.insight_reset_ms),
            (&mut self.timing.tick_rate_ms, timing.tick_rate_ms),
        ];
        for (slot, value) in slots {
            if let Some(value) = value {
                *slot = value;
            }
        }

        if let Some(workspaces) = layer.workspaces.filter(|w| !w.is_empty()) {
            self.workspaces = workspaces;
        }

        if let Some(show) = layer.ui_preferences.show_progress_panel {
            self.ui_preferences.show_progress_panel = show;
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            timing: TimingConfig::default(),
            workspaces: default_workspaces(),
            ui_preferences: UiPreferences::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.timing.step_interval_ms, 1200);
        assert_eq!(config.timing.finish_delay_ms, 500);
        assert_eq!(config.timing.query_delay(), Duration::from_millis(1000));
        assert_eq!(config.workspaces.len(), 2);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [timing]
            step_interval_ms = 50
            "#,
        )
        .unwrap();

        assert_eq!(config.timing.step_interval_ms, 50);
        assert_eq!(config.timing.notification_ms, 3000);
        assert_eq!(config.workspaces, default_workspaces());
        assert_eq!(
            config.timing.generation().step_interval,
            Duration::from_millis(50)
        );
    }

    #[test]
    fn test_merge_overrides_workspaces_and_timing() {
        let mut base = AppConfig::default();
        let other: ConfigLayer = toml::from_str(
            r#"
            [timing]
            query_delay_ms = 10

            [[workspaces]]
            id = "w1"
            name = "Workspace One"
            "#,
        )
        .unwrap();

        base.merge(other);
        assert_eq!(base.timing.query_delay_ms, 10);
        assert_eq!(base.workspaces.len(), 1);
        assert_eq!(base.workspaces[0].id, "w1");
        assert_eq!(base.workspaces[0].description, "");
        assert_eq!(base.timing.step_interval_ms, 1200);
    }

    #[test]
    fn test_later_file_without_timing_keeps_earlier_timing() {
        let dir = tempfile::tempdir().unwrap();
        let system = dir.path().join("system.toml");
        let local = dir.path().join("local.toml");
        fs::write(&system, "[timing]\nstep_interval_ms = 50\n").unwrap();
        fs::write(&local, "[ui_preferences]\nshow_progress_panel = false\n").unwrap();

        let mut config = AppConfig::default();
        config.merge(AppConfig::load_layer(&system).unwrap());
        config.merge(AppConfig::load_layer(&local).unwrap());

        assert_eq!(config.timing.step_interval_ms, 50);
        assert_eq!(config.timing.finish_delay_ms, 500);
        assert!(!config.ui_preferences.show_progress_panel);
        assert_eq!(config.workspaces, default_workspaces());
    }

    #[test]
    fn test_later_file_without_ui_preferences_keeps_panel_setting() {
        let mut config = AppConfig::default();
        config.merge(toml::from_str("[ui_preferences]\nshow_progress_panel = false").unwrap());
        config.merge(toml::from_str("[timing]\nquery_delay_ms = 5").unwrap());

        assert!(!config.ui_preferences.show_progress_panel);
        assert_eq!(config.timing.query_delay_ms, 5);
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = AppConfig::default();
        config.timing.insight_reset_ms = 42;
        config.save_to(&path).unwrap();

        let loaded = AppConfig::load_from_path(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_invalid_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "timing = 3").unwrap();

        let err = AppConfig::load_from_path(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }
}
