use super::constants::{MIN_VIEWPORT_SHARE, RESIZE_TOLERANCE_PX};
use crate::config::SectionConfig;
use pager_core::{SectionRegistry, SectionSnapshot, StackedLayout};
use tracing::debug;

/// Last known size of the scrollable area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportState {
    pub(in crate::app) width: f32,
    pub(in crate::app) height: f32,
}

impl ViewportState {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Takes finite, positive dimensions; returns whether anything changed.
    pub fn observe(&mut self, width: f32, height: f32) -> bool {
        let mut changed = false;
        if width.is_finite() && width > 0.0 && (width - self.width).abs() > RESIZE_TOLERANCE_PX {
            self.width = width;
            changed = true;
        }
        if height.is_finite()
            && height > 0.0
            && (height - self.height).abs() > RESIZE_TOLERANCE_PX
        {
            self.height = height;
            changed = true;
        }
        changed
    }

    pub fn is_compact(&self, breakpoint: f32) -> bool {
        self.width < breakpoint
    }
}

/// Rendered section heights plus the navigation registry derived from them.
///
/// The view draws every section with exactly the height measured here, so
/// the registry offsets match what is on screen.
#[derive(Debug, Clone)]
pub struct PageLayout {
    heights: Vec<f32>,
    registry: SectionSnapshot,
    total_height: f32,
    measured_height: f32,
    compact: bool,
}

impl PageLayout {
    pub fn measure(
        sections: &[SectionConfig],
        viewport: &ViewportState,
        gap: f32,
        compact_breakpoint: f32,
    ) -> Self {
        let compact = viewport.is_compact(compact_breakpoint);
        let heights: Vec<f32> = sections
            .iter()
            .map(|section| section_height(section, viewport.height))
            .collect();

        let mut stacked = StackedLayout::new(0.0, gap);
        for (section, height) in sections.iter().zip(&heights) {
            stacked.push_with_nav(*height, !compact || section.compact_nav);
        }
        let registry = stacked.navigation_snapshot();

        debug!(
            sections = sections.len(),
            navigable = registry.len(),
            compact,
            viewport_height = viewport.height,
            "Measured page layout"
        );

        Self {
            total_height: stacked.total_height(),
            heights,
            registry,
            measured_height: viewport.height,
            compact,
        }
    }

    /// Whether the viewport moved far enough that heights or the navigation
    /// subset differ from this measurement.
    pub fn is_stale(&self, viewport: &ViewportState, compact_breakpoint: f32) -> bool {
        (self.measured_height - viewport.height).abs() > RESIZE_TOLERANCE_PX
            || self.compact != viewport.is_compact(compact_breakpoint)
    }

    pub fn heights(&self) -> &[f32] {
        &self.heights
    }

    pub fn registry(&self) -> &SectionSnapshot {
        &self.registry
    }

    pub fn total_height(&self) -> f32 {
        self.total_height
    }

    pub fn is_compact(&self) -> bool {
        self.compact
    }

    pub fn navigable_count(&self) -> u32 {
        self.registry.list_sections().len() as u32
    }

    /// Document offset of a dot's section.
    pub fn section_top(&self, index: u32) -> Option<f32> {
        self.registry.get(index).map(|section| section.top_offset)
    }
}

fn section_height(section: &SectionConfig, viewport_height: f32) -> f32 {
    let viewport_height = if viewport_height.is_finite() {
        viewport_height.max(1.0)
    } else {
        1.0
    };
    if section.full_viewport {
        viewport_height
    } else {
        section.min_height.max(viewport_height * MIN_VIEWPORT_SHARE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    fn default_layout(width: f32, height: f32) -> PageLayout {
        let config = AppConfig::default();
        PageLayout::measure(
            &config.sections,
            &ViewportState::new(width, height),
            config.section_gap,
            config.compact_breakpoint,
        )
    }

    #[test]
    fn hero_fills_viewport_and_others_respect_minimums() {
        let layout = default_layout(1024.0, 768.0);
        assert_eq!(&layout.heights()[..4], &[768.0, 480.0, 480.0, 720.0]);
        assert!((layout.heights()[4] - 460.8).abs() < 1e-3);
        let tops: Vec<f32> = layout
            .registry()
            .list_sections()
            .iter()
            .map(|section| section.top_offset)
            .collect();
        assert_eq!(tops, vec![0.0, 864.0, 1440.0, 2016.0, 2832.0]);
        assert!((layout.total_height() - 3292.8).abs() < 1e-3);
    }

    #[test]
    fn registry_matches_rendered_geometry() {
        let layout = default_layout(1024.0, 768.0);
        assert!(!layout.is_compact());
        assert_eq!(layout.navigable_count(), 5);
        let mut expected_top = 0.0;
        for (section, height) in layout.registry().list_sections().iter().zip(layout.heights()) {
            assert_eq!(section.top_offset, expected_top);
            assert_eq!(section.height, *height);
            expected_top += height + 96.0;
        }
    }

    #[test]
    fn compact_layout_drops_sections_outside_the_nav_set() {
        let layout = default_layout(600.0, 768.0);
        assert!(layout.is_compact());
        assert_eq!(layout.navigable_count(), 4);
        // Educations is rendered but has no dot; Projects moves up to 3.
        assert_eq!(layout.section_top(3), Some(2016.0));
        assert_eq!(layout.section_top(4), Some(2832.0));
        assert_eq!(layout.section_top(5), None);
    }

    #[test]
    fn resize_marks_layout_stale() {
        let layout = default_layout(1024.0, 768.0);
        assert!(!layout.is_stale(&ViewportState::new(1024.0, 768.2), 768.0));
        assert!(layout.is_stale(&ViewportState::new(1024.0, 900.0), 768.0));
        assert!(layout.is_stale(&ViewportState::new(700.0, 768.0), 768.0));
    }

    #[test]
    fn viewport_ignores_degenerate_dimensions() {
        let mut viewport = ViewportState::new(1024.0, 768.0);
        assert!(!viewport.observe(0.0, f32::NAN));
        assert!(!viewport.observe(-3.0, -1.0));
        assert!(viewport.observe(800.0, 768.0));
        assert_eq!(viewport, ViewportState::new(800.0, 768.0));
    }

    #[test]
    fn empty_section_list_has_empty_registry() {
        let layout = PageLayout::measure(&[], &ViewportState::new(1024.0, 768.0), 96.0, 768.0);
        assert_eq!(layout.navigable_count(), 0);
        assert_eq!(layout.total_height(), 0.0);
    }
}
