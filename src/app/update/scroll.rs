use super::super::state::App;
use std::time::Instant;
use tracing::{debug, info, trace};

impl App {
    /// One scroll notification from the page scrollable.
    pub(super) fn handle_scrolled(
        &mut self,
        offset_y: f32,
        viewport_width: f32,
        viewport_height: f32,
        content_height: f32,
        now: Instant,
    ) {
        if self.viewport.observe(viewport_width, viewport_height) && self.remeasure_if_stale() {
            debug!(
                width = self.viewport.width,
                height = self.viewport.height,
                "Viewport changed mid-scroll; remeasured sections"
            );
        }

        let sample = self.sampler.sample(offset_y, viewport_height);
        let change = self
            .indicator
            .on_scroll(sample, self.layout.registry(), now);
        if change.page_changed {
            info!(
                page = self.indicator.state().active_page,
                of = self.layout.navigable_count(),
                "Active section changed"
            );
        }

        if content_height.is_finite() && (content_height - self.layout.total_height()).abs() > 1.0
        {
            trace!(
                content_height,
                measured = self.layout.total_height(),
                "Rendered content height differs from measured layout"
            );
        }
    }

    pub(super) fn handle_tick(&mut self, now: Instant) {
        if self.indicator.on_tick(now) {
            debug!(
                page = self.indicator.state().active_page,
                "Scrolling idle; hiding page indicator"
            );
        }
    }

    pub(super) fn handle_window_resized(&mut self, width: f32, height: f32) {
        if !self.viewport.observe(width, height) {
            return;
        }
        self.sampler.observe_viewport(self.viewport.height);
        if !self.remeasure_if_stale() {
            return;
        }
        info!(
            width = self.viewport.width,
            height = self.viewport.height,
            compact = self.layout.is_compact(),
            navigable = self.layout.navigable_count(),
            "Window resized; remeasured sections"
        );

        let Some(sample) = self.sampler.current() else {
            return;
        };
        let change = self.indicator.relayout(sample, self.layout.registry());
        if change.page_changed {
            info!(
                page = self.indicator.state().active_page,
                of = self.layout.navigable_count(),
                "Active section re-resolved for new layout"
            );
        }
    }
}
