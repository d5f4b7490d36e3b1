//! Conversion of raw host scroll numbers into resolver input.

use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollSample {
    pub scroll_top: f32,
    pub viewport_height: f32,
}

impl ScrollSample {
    pub fn new(scroll_top: f32, viewport_height: f32) -> Self {
        Self {
            scroll_top,
            viewport_height,
        }
    }

    /// A viewport that is zero, negative or not a number cannot place a
    /// midpoint; such samples still count as scroll activity.
    pub fn is_indeterminate(&self) -> bool {
        !self.viewport_height.is_finite() || self.viewport_height <= 0.0
    }
}

/// Remembers the last offset and viewport height so hosts that only report
/// part of the picture still produce complete samples.
#[derive(Debug, Clone, Default)]
pub struct ScrollSampler {
    last_scroll_top: Option<f32>,
    last_viewport_height: Option<f32>,
    samples_taken: u64,
}

impl ScrollSampler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sample(&mut self, scroll_top: f32, viewport_height: f32) -> ScrollSample {
        let scroll_top = sanitize_offset(scroll_top);
        self.last_scroll_top = Some(scroll_top);
        if viewport_height.is_finite() && viewport_height > 0.0 {
            self.last_viewport_height = Some(viewport_height);
        } else {
            warn!(viewport_height, "Indeterminate viewport height in scroll sample");
        }
        self.samples_taken += 1;
        debug!(
            scroll_top,
            viewport_height,
            samples = self.samples_taken,
            "Scroll sampled"
        );
        ScrollSample::new(scroll_top, viewport_height)
    }

    pub fn sample_offset(&mut self, scroll_top: f32) -> ScrollSample {
        let viewport_height = self.last_viewport_height.unwrap_or(0.0);
        self.sample(scroll_top, viewport_height)
    }

    pub fn observe_viewport(&mut self, viewport_height: f32) {
        if viewport_height.is_finite() && viewport_height > 0.0 {
            self.last_viewport_height = Some(viewport_height);
        }
    }

    /// Last sampled offset paired with the latest viewport height. Used to
    /// re-resolve after the layout changes without a new scroll event.
    pub fn current(&self) -> Option<ScrollSample> {
        let scroll_top = self.last_scroll_top?;
        Some(ScrollSample::new(
            scroll_top,
            self.last_viewport_height.unwrap_or(0.0),
        ))
    }

    pub fn last_viewport_height(&self) -> Option<f32> {
        self.last_viewport_height
    }

    pub fn samples_taken(&self) -> u64 {
        self.samples_taken
    }
}

fn sanitize_offset(offset: f32) -> f32 {
    if offset.is_finite() { offset.max(0.0) } else { 0.0 }
}
