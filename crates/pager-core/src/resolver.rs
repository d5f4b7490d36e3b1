//! Midpoint-crossing resolution of the active section.
//!
//! A section is active once the scroll position has passed its top edge
//! minus half a viewport, and stays active until the scroll position passes
//! its bottom edge minus the same margin. The switch therefore happens when
//! a boundary crosses the vertical middle of the viewport.

use crate::sample::ScrollSample;
use crate::section::SectionDescriptor;

pub const ACTIVATION_FRACTION: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Active(u32),
    /// Empty registry, degenerate viewport, or no section matched.
    Unresolved,
}

impl Resolution {
    pub fn page(self) -> Option<u32> {
        match self {
            Resolution::Active(page) => Some(page),
            Resolution::Unresolved => None,
        }
    }
}

/// Last match wins when measured sections overlap. A lone section is active
/// for every determinate sample.
pub fn resolve_active_section(
    sample: &ScrollSample,
    sections: &[SectionDescriptor],
) -> Resolution {
    if sample.is_indeterminate() || !sample.scroll_top.is_finite() {
        return Resolution::Unresolved;
    }
    if let [only] = sections {
        return Resolution::Active(only.index);
    }
    let margin = sample.viewport_height * ACTIVATION_FRACTION;

    sections
        .iter()
        .rev()
        .find(|section| {
            let top = section.top_offset - margin;
            let bottom = section.bottom() - margin;
            sample.scroll_top >= top && sample.scroll_top < bottom
        })
        .map_or(Resolution::Unresolved, |section| {
            Resolution::Active(section.index)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_pages() -> Vec<SectionDescriptor> {
        vec![
            SectionDescriptor::new(1, 0.0, 1000.0),
            SectionDescriptor::new(2, 1000.0, 1000.0),
            SectionDescriptor::new(3, 2000.0, 1000.0),
        ]
    }

    #[test]
    fn switches_when_boundary_crosses_viewport_middle() {
        let sections = three_pages();
        let at = |top: f32| resolve_active_section(&ScrollSample::new(top, 800.0), &sections);

        assert_eq!(at(0.0), Resolution::Active(1));
        assert_eq!(at(599.0), Resolution::Active(1));
        assert_eq!(at(600.0), Resolution::Active(2));
        assert_eq!(at(1450.0), Resolution::Active(2));
        assert_eq!(at(1600.0), Resolution::Active(3));
        assert_eq!(at(1650.0), Resolution::Active(3));
    }

    #[test]
    fn past_the_last_section_is_unresolved() {
        let sections = three_pages();
        let sample = ScrollSample::new(2600.0, 800.0);
        assert_eq!(resolve_active_section(&sample, &sections), Resolution::Unresolved);
    }

    #[test]
    fn empty_registry_is_unresolved() {
        let sample = ScrollSample::new(0.0, 800.0);
        assert_eq!(resolve_active_section(&sample, &[]), Resolution::Unresolved);
    }

    #[test]
    fn degenerate_viewport_is_unresolved() {
        let sections = three_pages();
        for height in [0.0, -1.0, f32::NAN] {
            let sample = ScrollSample::new(1450.0, height);
            assert_eq!(resolve_active_section(&sample, &sections), Resolution::Unresolved);
        }
    }

    #[test]
    fn overlapping_sections_prefer_the_later_one() {
        let sections = vec![
            SectionDescriptor::new(1, 0.0, 500.0),
            SectionDescriptor::new(2, 500.0, 900.0),
            SectionDescriptor::new(3, 1100.0, 600.0),
        ];
        // Section 2 spans 200..1100 and section 3 spans 800..1400 at this viewport.
        let sample = ScrollSample::new(1000.0, 600.0);
        assert_eq!(resolve_active_section(&sample, &sections), Resolution::Active(3));
    }

    #[test]
    fn gaps_between_sections_are_unresolved() {
        let sections = vec![
            SectionDescriptor::new(1, 0.0, 400.0),
            SectionDescriptor::new(2, 2000.0, 400.0),
        ];
        let sample = ScrollSample::new(1000.0, 200.0);
        assert_eq!(resolve_active_section(&sample, &sections), Resolution::Unresolved);
    }

    #[test]
    fn single_section_resolves_for_any_positive_viewport() {
        let sections = vec![SectionDescriptor::new(1, 0.0, 3000.0)];
        for (top, height) in [(0.0, 1.0), (1200.0, 640.0), (2900.0, 1800.0), (9000.0, 10.0)] {
            let sample = ScrollSample::new(top, height);
            assert_eq!(resolve_active_section(&sample, &sections).page(), Some(1));
        }
    }
}
