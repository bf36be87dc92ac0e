//! User settings for Carteira
//!
//! Widget defaults, timer delays, breakpoints and logging preferences.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::paths::CarteiraPaths;
use crate::error::CarteiraError;

/// Delays used by chart widgets to coalesce layout passes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetTimings {
    /// Delay before the first layout pass after a widget is attached
    #[serde(default = "default_initial_layout_ms")]
    pub initial_layout_ms: u64,

    /// Debounce window for container size changes
    #[serde(default = "default_relayout_debounce_ms")]
    pub relayout_debounce_ms: u64,

    /// Delay before the layout pass that follows a data update
    #[serde(default = "default_post_update_ms")]
    pub post_update_ms: u64,
}

fn default_initial_layout_ms() -> u64 {
    100
}

fn default_relayout_debounce_ms() -> u64 {
    150
}

fn default_post_update_ms() -> u64 {
    50
}

impl Default for WidgetTimings {
    fn default() -> Self {
        Self {
            initial_layout_ms: default_initial_layout_ms(),
            relayout_debounce_ms: default_relayout_debounce_ms(),
            post_update_ms: default_post_update_ms(),
        }
    }
}

impl WidgetTimings {
    pub fn initial_layout(&self) -> Duration {
        Duration::from_millis(self.initial_layout_ms)
    }

    pub fn relayout_debounce(&self) -> Duration {
        Duration::from_millis(self.relayout_debounce_ms)
    }

    pub fn post_update(&self) -> Duration {
        Duration::from_millis(self.post_update_ms)
    }
}

/// User settings for Carteira
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Locale tag for currency in summary tables and the TUI metrics (`pt-BR`, `en-US`)
    #[serde(default = "default_locale")]
    pub locale: String,

    /// Whether chart legends are shown by default
    #[serde(default = "default_true")]
    pub show_legend: bool,

    /// Whether the "add random entry" actions are offered on the expenses screen
    #[serde(default = "default_true")]
    pub show_actions: bool,

    /// Widget timer delays
    #[serde(default)]
    pub timings: WidgetTimings,

    /// Terminal width (columns) at or below which the navigation shell is in handset mode
    #[serde(default = "default_handset_max_width")]
    pub handset_max_width: u16,

    /// Terminal width (columns) at or below which the expenses screen uses its compact layout
    #[serde(default = "default_compact_max_width")]
    pub compact_max_width: u16,

    /// Event loop tick rate in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// Default `tracing` filter directive when `CARTEIRA_LOG` is unset
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_locale() -> String {
    "pt-BR".to_string()
}

fn default_true() -> bool {
    true
}

fn default_handset_max_width() -> u16 {
    80
}

fn default_compact_max_width() -> u16 {
    120
}

fn default_tick_rate_ms() -> u64 {
    25
}

fn default_log_filter() -> String {
    "carteira=info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            locale: default_locale(),
            show_legend: true,
            show_actions: true,
            timings: WidgetTimings::default(),
            handset_max_width: default_handset_max_width(),
            compact_max_width: default_compact_max_width(),
            tick_rate_ms: default_tick_rate_ms(),
            log_filter: default_log_filter(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &CarteiraPaths) -> Result<Self, CarteiraError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                CarteiraError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                CarteiraError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            settings.validate()?;
            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &CarteiraPaths) -> Result<(), CarteiraError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            CarteiraError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| CarteiraError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Reject values the event loop cannot work with
    pub fn validate(&self) -> Result<(), CarteiraError> {
        if self.tick_rate_ms == 0 {
            return Err(CarteiraError::Config("tick_rate_ms must be positive".into()));
        }
        if self.handset_max_width > self.compact_max_width {
            return Err(CarteiraError::Config(format!(
                "handset_max_width ({}) must not exceed compact_max_width ({})",
                self.handset_max_width, self.compact_max_width
            )));
        }
        Ok(())
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}
