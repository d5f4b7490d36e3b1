use iced::widget::scrollable::Id as ScrollId;
use once_cell::sync::Lazy;

/// Layout constants shared by geometry measurement and the view.
pub(crate) const MIN_VIEWPORT_SHARE: f32 = 0.6;
pub(crate) const RESIZE_TOLERANCE_PX: f32 = 0.5;
pub(crate) const SECTION_PADDING_PX: u16 = 24;
pub(crate) const SECTION_CONTENT_SPACING_PX: f32 = 12.0;
pub(crate) const TITLE_FONT_SIZE_PX: f32 = 36.0;
pub(crate) const BODY_FONT_SIZE_PX: f32 = 16.0;
pub(crate) const DOT_FONT_SIZE_PX: f32 = 14.0;
pub(crate) const DOT_SPACING_PX: f32 = 6.0;
pub(crate) const INDICATOR_PADDING_PX: u16 = 16;
pub(crate) static PAGE_SCROLL_ID: Lazy<ScrollId> = Lazy::new(|| ScrollId::new("page-scroll"));
