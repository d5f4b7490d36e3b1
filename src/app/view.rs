use super::messages::Message;
use super::state::{
    App, BODY_FONT_SIZE_PX, DOT_FONT_SIZE_PX, DOT_SPACING_PX, INDICATOR_PADDING_PX,
    PAGE_SCROLL_ID, SECTION_CONTENT_SPACING_PX, SECTION_PADDING_PX, TITLE_FONT_SIZE_PX,
};
use crate::config::SectionConfig;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{Column, Space, button, column, container, scrollable, stack, text};
use iced::{Element, Length};
use pager_core::SectionRegistry;

const ACTIVE_DOT: &str = "●";
const INACTIVE_DOT: &str = "○";

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let sections = self
            .config
            .sections
            .iter()
            .zip(self.layout.heights())
            .fold(
                Column::new()
                    .spacing(self.config.section_gap)
                    .width(Length::Fill),
                |page, (section, height)| page.push(Self::section_view(section, *height)),
            );

        let page = scrollable(sections)
            .id(PAGE_SCROLL_ID.clone())
            .on_scroll(|viewport| Message::Scrolled {
                offset_y: viewport.absolute_offset().y,
                viewport_width: viewport.bounds().width,
                viewport_height: viewport.bounds().height,
                content_height: viewport.content_bounds().height,
            })
            .width(Length::Fill)
            .height(Length::Fill);

        stack![page, self.indicator_view()].into()
    }

    /// Each section is drawn at its measured height so the registry offsets
    /// stay in sync with the screen.
    fn section_view(section: &SectionConfig, height: f32) -> Element<'_, Message> {
        let content = column![
            text(section.title.as_str()).size(TITLE_FONT_SIZE_PX),
            text(section.body.as_str()).size(BODY_FONT_SIZE_PX),
        ]
        .spacing(SECTION_CONTENT_SPACING_PX);

        container(content)
            .padding(SECTION_PADDING_PX)
            .width(Length::Fill)
            .height(Length::Fixed(height))
            .align_y(Vertical::Center)
            .into()
    }

    fn indicator_view(&self) -> Element<'_, Message> {
        let state = self.indicator.state();
        if !state.dots_visible() {
            return Space::new(Length::Shrink, Length::Shrink).into();
        }

        let dots = self.layout.registry().list_sections().iter().fold(
            Column::new().spacing(DOT_SPACING_PX),
            |dots, section| {
                let glyph = if state.is_active(section.index) {
                    ACTIVE_DOT
                } else {
                    INACTIVE_DOT
                };
                dots.push(
                    button(text(glyph).size(DOT_FONT_SIZE_PX))
                        .padding(2)
                        .style(button::text)
                        .on_press(Message::JumpToSection(section.index)),
                )
            },
        );

        container(dots)
            .padding(INDICATOR_PADDING_PX)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Right)
            .align_y(Vertical::Center)
            .into()
    }
}
