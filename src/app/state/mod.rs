mod constants;
mod layout;

use crate::config::AppConfig;
use iced::Task;
use pager_core::{ScrollIndicator, ScrollSampler};
use tracing::info;

use super::messages::Message;

pub(crate) use constants::*;
pub(in crate::app) use layout::{PageLayout, ViewportState};

/// Core application state composed of sub-models.
pub struct App {
    pub(super) config: AppConfig,
    pub(super) viewport: ViewportState,
    pub(super) layout: PageLayout,
    pub(super) sampler: ScrollSampler,
    pub(super) indicator: ScrollIndicator,
}

impl App {
    pub fn bootstrap(config: AppConfig) -> (Self, Task<Message>) {
        let viewport = ViewportState::new(config.window_width, config.window_height);
        let layout = PageLayout::measure(
            &config.sections,
            &viewport,
            config.section_gap,
            config.compact_breakpoint,
        );
        let mut sampler = ScrollSampler::new();
        sampler.observe_viewport(viewport.height);

        let mut indicator = ScrollIndicator::new(config.idle_window());
        indicator.attach();

        info!(
            sections = config.sections.len(),
            navigable = layout.navigable_count(),
            theme = %config.theme,
            "Bootstrapped profile page"
        );

        let app = App {
            config,
            viewport,
            layout,
            sampler,
            indicator,
        };
        (app, Task::none())
    }

    /// Rebuilds geometry from the current viewport.
    pub(super) fn remeasure(&mut self) {
        self.layout = PageLayout::measure(
            &self.config.sections,
            &self.viewport,
            self.config.section_gap,
            self.config.compact_breakpoint,
        );
    }

    pub(super) fn remeasure_if_stale(&mut self) -> bool {
        if self
            .layout
            .is_stale(&self.viewport, self.config.compact_breakpoint)
        {
            self.remeasure();
            true
        } else {
            false
        }
    }
}
