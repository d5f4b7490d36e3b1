//! Scroll tracking and page-indicator state for a sectioned, scroll-driven page.
//!
//! The crate has no knowledge of any rendering toolkit. A host feeds it:
//! - the current section geometry (see [`section`]),
//! - raw scroll numbers, which [`sample`] sanitizes,
//! - the current time on every scroll event and on a periodic tick.
//!
//! In return the [`ScrollIndicator`] exposes an [`IndicatorState`] telling the
//! render layer whether to show the page dots and which one is active.

pub mod indicator;
pub mod resolver;
pub mod sample;
pub mod section;
pub mod timer;

pub use indicator::{IndicatorChange, IndicatorState, Lifecycle, ScrollIndicator};
pub use resolver::{ACTIVATION_FRACTION, Resolution, resolve_active_section};
pub use sample::{ScrollSample, ScrollSampler};
pub use section::{SectionDescriptor, SectionRegistry, SectionSnapshot, StackedLayout};
pub use timer::{ActivityTimer, DEFAULT_IDLE_WINDOW};
