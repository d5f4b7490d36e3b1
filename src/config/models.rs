use serde::Deserialize;
use std::time::Duration;

/// Flattened application configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub theme: ThemeMode,
    pub window_width: f32,
    pub window_height: f32,
    pub section_gap: f32,
    pub idle_window_ms: u64,
    pub compact_breakpoint: f32,
    pub tick_interval_ms: u64,
    pub key_next_section: String,
    pub key_prev_section: String,
    pub key_toggle_theme: String,
    pub key_quit: String,
    pub log_level: LogLevel,
    pub sections: Vec<SectionConfig>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            theme: ThemeMode::Night,
            window_width: crate::config::defaults::default_window_width(),
            window_height: crate::config::defaults::default_window_height(),
            section_gap: crate::config::defaults::default_section_gap(),
            idle_window_ms: crate::config::defaults::default_idle_window_ms(),
            compact_breakpoint: crate::config::defaults::default_compact_breakpoint(),
            tick_interval_ms: crate::config::defaults::default_tick_interval_ms(),
            key_next_section: crate::config::defaults::default_key_next_section(),
            key_prev_section: crate::config::defaults::default_key_prev_section(),
            key_toggle_theme: crate::config::defaults::default_key_toggle_theme(),
            key_quit: crate::config::defaults::default_key_quit(),
            log_level: crate::config::defaults::default_log_level(),
            sections: crate::config::defaults::default_sections(),
        }
    }
}

impl AppConfig {
    pub fn idle_window(&self) -> Duration {
        Duration::from_millis(self.idle_window_ms)
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

/// One content block of the page.
#[derive(Debug, Clone, PartialEq, Deserialize, serde::Serialize)]
pub struct SectionConfig {
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default = "crate::config::defaults::default_min_height")]
    pub min_height: f32,
    /// Exactly one viewport tall, like a landing screen.
    #[serde(default)]
    pub full_viewport: bool,
    /// Whether the section keeps its dot in compact (narrow) layouts.
    #[serde(default = "crate::config::defaults::default_compact_nav")]
    pub compact_nav: bool,
}

/// Theme mode.
#[derive(Debug, Clone, Copy, Deserialize, serde::Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeMode {
    Day,
    #[default]
    Night,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Day => ThemeMode::Night,
            ThemeMode::Night => ThemeMode::Day,
        }
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ThemeMode::Day => "Day",
            ThemeMode::Night => "Night",
        };
        write!(f, "{}", label)
    }
}

/// Supported logging verbosity levels.
#[derive(Debug, Clone, Copy, Deserialize, serde::Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_filter_str())
    }
}

impl LogLevel {
    pub fn as_filter_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}
