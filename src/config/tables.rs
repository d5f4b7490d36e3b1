use super::defaults;
use super::models::{AppConfig, LogLevel, SectionConfig, ThemeMode};
use serde::Deserialize;

/// On-disk layout of `config.toml`.
#[derive(Debug, Clone, Deserialize, serde::Serialize)]
pub(super) struct ConfigTables {
    #[serde(default)]
    appearance: AppearanceConfig,
    #[serde(default)]
    indicator: IndicatorConfig,
    #[serde(default)]
    keys: KeysConfig,
    #[serde(default)]
    logging: LoggingConfig,
    #[serde(default = "defaults::default_sections")]
    sections: Vec<SectionConfig>,
}

impl From<ConfigTables> for AppConfig {
    fn from(tables: ConfigTables) -> Self {
        AppConfig {
            theme: tables.appearance.theme,
            window_width: tables.appearance.window_width,
            window_height: tables.appearance.window_height,
            section_gap: tables.appearance.section_gap,
            idle_window_ms: tables.indicator.idle_window_ms,
            compact_breakpoint: tables.indicator.compact_breakpoint,
            tick_interval_ms: tables.indicator.tick_interval_ms,
            key_next_section: tables.keys.next_section,
            key_prev_section: tables.keys.prev_section,
            key_toggle_theme: tables.keys.toggle_theme,
            key_quit: tables.keys.quit,
            log_level: tables.logging.log_level,
            sections: tables.sections,
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct AppearanceConfig {
    #[serde(default)]
    theme: ThemeMode,
    #[serde(default = "defaults::default_window_width")]
    window_width: f32,
    #[serde(default = "defaults::default_window_height")]
    window_height: f32,
    #[serde(default = "defaults::default_section_gap")]
    section_gap: f32,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        AppearanceConfig {
            theme: ThemeMode::default(),
            window_width: defaults::default_window_width(),
            window_height: defaults::default_window_height(),
            section_gap: defaults::default_section_gap(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct IndicatorConfig {
    #[serde(default = "defaults::default_idle_window_ms")]
    idle_window_ms: u64,
    #[serde(default = "defaults::default_compact_breakpoint")]
    compact_breakpoint: f32,
    #[serde(default = "defaults::default_tick_interval_ms")]
    tick_interval_ms: u64,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        IndicatorConfig {
            idle_window_ms: defaults::default_idle_window_ms(),
            compact_breakpoint: defaults::default_compact_breakpoint(),
            tick_interval_ms: defaults::default_tick_interval_ms(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct KeysConfig {
    #[serde(default = "defaults::default_key_next_section")]
    next_section: String,
    #[serde(default = "defaults::default_key_prev_section")]
    prev_section: String,
    #[serde(default = "defaults::default_key_toggle_theme")]
    toggle_theme: String,
    #[serde(default = "defaults::default_key_quit")]
    quit: String,
}

impl Default for KeysConfig {
    fn default() -> Self {
        KeysConfig {
            next_section: defaults::default_key_next_section(),
            prev_section: defaults::default_key_prev_section(),
            toggle_theme: defaults::default_key_toggle_theme(),
            quit: defaults::default_key_quit(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, serde::Serialize)]
struct LoggingConfig {
    #[serde(default = "defaults::default_log_level")]
    log_level: LogLevel,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            log_level: defaults::default_log_level(),
        }
    }
}
