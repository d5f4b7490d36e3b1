use super::super::state::App;
use super::Effect;
use tracing::{debug, info, warn};

impl App {
    pub(super) fn handle_jump_to_section(&mut self, index: u32, effects: &mut Vec<Effect>) {
        match self.layout.section_top(index) {
            Some(top) => {
                info!(index, top, "Jumping to section");
                effects.push(Effect::ScrollTo(top));
            }
            None => warn!(
                index,
                navigable = self.layout.navigable_count(),
                "Ignoring jump to unknown section"
            ),
        }
    }

    pub(super) fn handle_step_section(&mut self, forward: bool, effects: &mut Vec<Effect>) {
        let count = self.layout.navigable_count();
        if count == 0 {
            return;
        }
        let current = self.indicator.state().active_page.clamp(1, count);
        let target = if forward {
            (current + 1).min(count)
        } else {
            current.saturating_sub(1).max(1)
        };
        if target == current {
            debug!(current, forward, "Already at the edge of the page");
            return;
        }
        self.handle_jump_to_section(target, effects);
    }

    pub(super) fn handle_toggle_theme(&mut self) {
        self.config.theme = self.config.theme.toggled();
        info!(theme = %self.config.theme, "Toggled theme");
    }
}
