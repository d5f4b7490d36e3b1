use super::models::{LogLevel, SectionConfig};

pub(crate) fn default_window_width() -> f32 {
    1024.0
}

pub(crate) fn default_window_height() -> f32 {
    768.0
}

pub(crate) fn default_section_gap() -> f32 {
    96.0
}

pub(crate) fn default_idle_window_ms() -> u64 {
    1500
}

pub(crate) fn default_compact_breakpoint() -> f32 {
    768.0
}

pub(crate) fn default_tick_interval_ms() -> u64 {
    50
}

pub(crate) fn default_log_level() -> LogLevel {
    LogLevel::Info
}

pub(crate) fn default_compact_nav() -> bool {
    true
}

pub(crate) fn default_min_height() -> f32 {
    480.0
}

pub(crate) fn default_key_next_section() -> String {
    "j".to_string()
}

pub(crate) fn default_key_prev_section() -> String {
    "k".to_string()
}

pub(crate) fn default_key_toggle_theme() -> String {
    "ctrl+t".to_string()
}

pub(crate) fn default_key_quit() -> String {
    "q".to_string()
}

pub(crate) fn default_sections() -> Vec<SectionConfig> {
    vec![
        SectionConfig {
            title: "Hello, I'm a full-stack web developer".to_string(),
            body: "I build scalable full-stack applications with React, Node.js, Express and MongoDB."
                .to_string(),
            min_height: default_min_height(),
            full_viewport: true,
            compact_nav: true,
        },
        SectionConfig {
            title: "Work Experiences".to_string(),
            body: "Intern at Prime Solutions: a MERN task management app with a clean, modern UI."
                .to_string(),
            min_height: default_min_height(),
            full_viewport: false,
            compact_nav: true,
        },
        SectionConfig {
            title: "Educations".to_string(),
            body: "Bachelor of Technology in Information Technology, 2021 - 2025.".to_string(),
            min_height: default_min_height(),
            full_viewport: false,
            compact_nav: false,
        },
        SectionConfig {
            title: "Projects".to_string(),
            body: "A quiz app, a personalised chatbot, a fitness planner and a few 3D scroll demos."
                .to_string(),
            min_height: 720.0,
            full_viewport: false,
            compact_nav: true,
        },
        SectionConfig {
            title: "What I Excel At".to_string(),
            body: "Frontend, backend, databases and cloud deployment.".to_string(),
            min_height: 360.0,
            full_viewport: false,
            compact_nav: true,
        },
    ]
}
