use super::defaults;
use super::models::AppConfig;
use super::tables::ConfigTables;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Reads `path`, falling back to defaults when the file is missing or bad.
pub fn load_config(path: &Path) -> AppConfig {
    let contents = match fs::read_to_string(path) {
        Ok(data) => {
            info!(path = %path.display(), "Loaded base config");
            data
        }
        Err(err) => {
            warn!(
                path = %path.display(),
                "Falling back to default config: {err}"
            );
            return AppConfig::default();
        }
    };

    match parse_config(&contents) {
        Ok(cfg) => {
            debug!(sections = cfg.sections.len(), "Parsed configuration from disk");
            cfg
        }
        Err(err) => {
            warn!(path = %path.display(), "Invalid config TOML: {err}");
            AppConfig::default()
        }
    }
}

/// Parses TOML text and repairs out-of-range values.
pub fn parse_config(contents: &str) -> Result<AppConfig, toml::de::Error> {
    let tables = toml::from_str::<ConfigTables>(contents)?;
    Ok(sanitize(AppConfig::from(tables)))
}

fn sanitize(mut config: AppConfig) -> AppConfig {
    if config.idle_window_ms == 0 {
        warn!("indicator.idle_window_ms must be positive; using default");
        config.idle_window_ms = defaults::default_idle_window_ms();
    }
    if config.tick_interval_ms == 0 {
        warn!("indicator.tick_interval_ms must be positive; using default");
        config.tick_interval_ms = defaults::default_tick_interval_ms();
    }
    if !config.window_width.is_finite() || config.window_width <= 0.0 {
        config.window_width = defaults::default_window_width();
    }
    if !config.window_height.is_finite() || config.window_height <= 0.0 {
        config.window_height = defaults::default_window_height();
    }
    if !config.section_gap.is_finite() || config.section_gap < 0.0 {
        config.section_gap = defaults::default_section_gap();
    }
    if !config.compact_breakpoint.is_finite() || config.compact_breakpoint < 0.0 {
        config.compact_breakpoint = defaults::default_compact_breakpoint();
    }
    for section in &mut config.sections {
        if !section.min_height.is_finite() || section.min_height < 0.0 {
            warn!(title = %section.title, "Invalid min_height; using default");
            section.min_height = defaults::default_min_height();
        }
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LogLevel, ThemeMode};

    #[test]
    fn empty_file_yields_defaults() {
        let cfg = parse_config("").expect("empty config parses");
        assert_eq!(cfg, AppConfig::default());
        assert_eq!(cfg.idle_window_ms, 1500);
        assert_eq!(cfg.sections.len(), 5);
    }

    #[test]
    fn reads_grouped_tables() {
        let cfg = parse_config(
            r#"
            [appearance]
            theme = "day"
            section_gap = 40

            [indicator]
            idle_window_ms = 900
            compact_breakpoint = 600

            [keys]
            next_section = "n"

            [logging]
            log_level = "debug"

            [[sections]]
            title = "Intro"
            full_viewport = true

            [[sections]]
            title = "Work"
            body = "Selected work"
            min_height = 300
            compact_nav = false
            "#,
        )
        .expect("valid config");

        assert_eq!(cfg.theme, ThemeMode::Day);
        assert_eq!(cfg.section_gap, 40.0);
        assert_eq!(cfg.idle_window_ms, 900);
        assert_eq!(cfg.compact_breakpoint, 600.0);
        assert_eq!(cfg.key_next_section, "n");
        assert_eq!(cfg.key_prev_section, "k");
        assert_eq!(cfg.log_level, LogLevel::Debug);
        assert_eq!(cfg.sections.len(), 2);
        assert!(cfg.sections[0].full_viewport);
        assert!(cfg.sections[0].compact_nav);
        assert_eq!(cfg.sections[0].min_height, 480.0);
        assert!(!cfg.sections[1].compact_nav);
        assert_eq!(cfg.sections[1].min_height, 300.0);
    }

    #[test]
    fn zero_durations_fall_back_to_defaults() {
        let cfg = parse_config(
            r#"
            [indicator]
            idle_window_ms = 0
            tick_interval_ms = 0
            "#,
        )
        .expect("valid config");
        assert_eq!(cfg.idle_window_ms, 1500);
        assert_eq!(cfg.tick_interval_ms, 50);
    }

    #[test]
    fn negative_geometry_is_repaired() {
        let cfg = parse_config(
            r#"
            [appearance]
            window_height = -1
            section_gap = -5

            [[sections]]
            title = "Only"
            min_height = -20
            "#,
        )
        .expect("valid config");
        assert_eq!(cfg.window_height, 768.0);
        assert_eq!(cfg.section_gap, 96.0);
        assert_eq!(cfg.sections[0].min_height, 480.0);
    }

    #[test]
    fn malformed_toml_is_an_error() {
        assert!(parse_config("[indicator\nidle_window_ms = 3").is_err());
        assert!(parse_config("[logging]\nlog_level = \"loud\"").is_err());
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let cfg = load_config(Path::new("/nonexistent/profile-pager/config.toml"));
        assert_eq!(cfg, AppConfig::default());
    }
}
