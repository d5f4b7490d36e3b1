mod core;
mod navigation;
mod scroll;

/// Describes work that must be performed outside the pure reducer.
#[derive(Debug, Clone, PartialEq)]
pub(super) enum Effect {
    /// Scroll the page so the given document offset sits at the top.
    ScrollTo(f32),
    /// Dispose the indicator and close the application.
    Teardown,
}
