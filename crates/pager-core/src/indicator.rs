//! Indicator state and the coordinator that owns it.

use crate::resolver::{Resolution, resolve_active_section};
use crate::sample::ScrollSample;
use crate::section::SectionRegistry;
use crate::timer::ActivityTimer;
use serde::Serialize;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// What the render layer shows: dots are visible while `is_scrolling`, and
/// the dot at `active_page` is highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorState {
    pub is_scrolling: bool,
    pub active_page: u32,
}

impl Default for IndicatorState {
    fn default() -> Self {
        Self {
            is_scrolling: false,
            active_page: 1,
        }
    }
}

impl IndicatorState {
    pub fn dots_visible(&self) -> bool {
        self.is_scrolling
    }

    pub fn is_active(&self, index: u32) -> bool {
        self.active_page == index
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IndicatorChange {
    pub scrolling_changed: bool,
    pub page_changed: bool,
}

impl IndicatorChange {
    fn between(before: IndicatorState, after: IndicatorState) -> Self {
        Self {
            scrolling_changed: before.is_scrolling != after.is_scrolling,
            page_changed: before.active_page != after.active_page,
        }
    }

    pub fn is_empty(&self) -> bool {
        !self.scrolling_changed && !self.page_changed
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Detached,
    Attached,
    /// Torn down; every later event is ignored.
    Disposed,
}

/// Each instance owns its own timer; indicators never share state.
#[derive(Debug, Clone)]
pub struct ScrollIndicator {
    state: IndicatorState,
    timer: ActivityTimer,
    lifecycle: Lifecycle,
    last_resolution: Resolution,
}

impl Default for ScrollIndicator {
    fn default() -> Self {
        Self::with_timer(ActivityTimer::default())
    }
}

impl ScrollIndicator {
    pub fn new(idle_window: Duration) -> Self {
        Self::with_timer(ActivityTimer::new(idle_window))
    }

    fn with_timer(timer: ActivityTimer) -> Self {
        Self {
            state: IndicatorState::default(),
            timer,
            lifecycle: Lifecycle::Detached,
            last_resolution: Resolution::Unresolved,
        }
    }

    pub fn state(&self) -> IndicatorState {
        self.state
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn timer(&self) -> &ActivityTimer {
        &self.timer
    }

    pub fn last_resolution(&self) -> Resolution {
        self.last_resolution
    }

    pub fn attach(&mut self) {
        match self.lifecycle {
            Lifecycle::Disposed => warn!("Ignoring attach on a disposed scroll indicator"),
            Lifecycle::Attached => {}
            Lifecycle::Detached => {
                self.lifecycle = Lifecycle::Attached;
                info!(
                    idle_ms = self.timer.idle_window().as_millis() as u64,
                    "Scroll indicator attached"
                );
            }
        }
    }

    /// Stops accepting events and hides the dots. The active page is kept so
    /// a later [`attach`](Self::attach) resumes where it left off.
    pub fn detach(&mut self) -> IndicatorChange {
        if self.lifecycle != Lifecycle::Attached {
            return IndicatorChange::default();
        }
        let before = self.state;
        self.timer.cancel();
        self.state.is_scrolling = false;
        self.lifecycle = Lifecycle::Detached;
        info!("Scroll indicator detached");
        IndicatorChange::between(before, self.state)
    }

    pub fn dispose(&mut self) {
        if self.lifecycle == Lifecycle::Disposed {
            return;
        }
        let cancelled = self.timer.cancel();
        self.state = IndicatorState::default();
        self.last_resolution = Resolution::Unresolved;
        self.lifecycle = Lifecycle::Disposed;
        info!(cancelled_timer = cancelled, "Scroll indicator disposed");
    }

    /// Handles one scroll sample: marks scrolling, re-arms the idle timer and
    /// moves the active page if the sample resolves to a section.
    pub fn on_scroll<R>(&mut self, sample: ScrollSample, registry: &R, now: Instant) -> IndicatorChange
    where
        R: SectionRegistry + ?Sized,
    {
        if self.lifecycle != Lifecycle::Attached {
            debug!(lifecycle = ?self.lifecycle, "Dropping scroll sample");
            return IndicatorChange::default();
        }
        let before = self.state;

        self.state.is_scrolling = true;
        self.timer.arm(now);

        let resolution = resolve_active_section(&sample, registry.list_sections());
        self.last_resolution = resolution;
        match resolution {
            Resolution::Active(page) => self.state.active_page = page,
            Resolution::Unresolved => debug!(
                scroll_top = sample.scroll_top,
                viewport_height = sample.viewport_height,
                active_page = self.state.active_page,
                "No section matched; keeping active page"
            ),
        }

        let change = IndicatorChange::between(before, self.state);
        if change.page_changed {
            debug!(
                from = before.active_page,
                to = self.state.active_page,
                "Active page changed"
            );
        }
        change
    }

    /// Re-resolves the active page against a rebuilt registry. Scrolling
    /// state and the pending deadline are left alone. When nothing matches,
    /// a page beyond the new registry is clamped to its last entry.
    pub fn relayout<R>(&mut self, sample: ScrollSample, registry: &R) -> IndicatorChange
    where
        R: SectionRegistry + ?Sized,
    {
        if self.lifecycle != Lifecycle::Attached {
            return IndicatorChange::default();
        }
        let before = self.state;
        let sections = registry.list_sections();

        let resolution = resolve_active_section(&sample, sections);
        self.last_resolution = resolution;
        match resolution {
            Resolution::Active(page) => self.state.active_page = page,
            Resolution::Unresolved => {
                if let Some(last) = sections
                    .last()
                    .filter(|last| self.state.active_page > last.index)
                {
                    self.state.active_page = last.index;
                }
            }
        }

        let change = IndicatorChange::between(before, self.state);
        if change.page_changed {
            debug!(
                from = before.active_page,
                to = self.state.active_page,
                sections = sections.len(),
                "Active page re-resolved after relayout"
            );
        }
        change
    }

    /// Reports the passage of time. Returns `true` when this call hid the
    /// indicator.
    pub fn on_tick(&mut self, now: Instant) -> bool {
        if self.lifecycle != Lifecycle::Attached {
            return false;
        }
        if !self.timer.poll(now) {
            return false;
        }
        let was_scrolling = self.state.is_scrolling;
        self.state.is_scrolling = false;
        debug!(active_page = self.state.active_page, "Scrolling went idle");
        was_scrolling
    }

    pub fn needs_tick(&self) -> bool {
        self.lifecycle == Lifecycle::Attached && self.timer.is_pending()
    }
}
