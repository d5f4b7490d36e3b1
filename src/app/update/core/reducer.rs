use super::super::super::messages::Message;
use super::super::super::state::App;
use super::super::Effect;
use std::time::Instant;

impl App {
    pub(in crate::app) fn reduce(&mut self, message: Message) -> Vec<Effect> {
        let mut effects = Vec::new();

        match message {
            Message::Scrolled {
                offset_y,
                viewport_width,
                viewport_height,
                content_height,
            } => self.handle_scrolled(
                offset_y,
                viewport_width,
                viewport_height,
                content_height,
                Instant::now(),
            ),
            Message::WindowResized { width, height } => {
                self.handle_window_resized(width, height);
            }
            Message::KeyPressed { key, modifiers } => {
                if let Some(shortcut) = self.shortcut_message_for_key(key, modifiers) {
                    effects.extend(self.reduce(shortcut));
                }
            }
            Message::JumpToSection(index) => self.handle_jump_to_section(index, &mut effects),
            Message::NextSection => self.handle_step_section(true, &mut effects),
            Message::PreviousSection => self.handle_step_section(false, &mut effects),
            Message::ToggleTheme => self.handle_toggle_theme(),
            Message::CloseRequested | Message::Quit => effects.push(Effect::Teardown),
            Message::Tick(now) => self.handle_tick(now),
        }

        effects
    }
}
