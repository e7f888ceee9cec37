//! User interface rendering module
//!
//! - `header` - Title, step indicator, progress gauge and navigation bar
//! - `screens` - Question and preview screens

mod header;
pub mod screens;

use crate::app::{AppMode, AppState};
use crate::components::help_overlay::HelpOverlay;
use crate::components::keybindings::KeybindingContext;
use crate::theme::UiConstants;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};
use std::rc::Rc;

pub use header::HeaderRenderer;

/// UI renderer for the application
///
/// Main entry point for rendering; delegates to the submodules.
pub struct UiRenderer {
    header: HeaderRenderer,
}

impl Default for UiRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl UiRenderer {
    /// Create a new UI renderer
    pub fn new() -> Self {
        Self {
            header: HeaderRenderer::new(),
        }
    }

    /// Header, screen body and navigation bar rows
    fn layout(&self, area: Rect, show_step_numbers: bool) -> Rc<[Rect]> {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(self.header.height(show_step_numbers)),
                Constraint::Min(1),
                Constraint::Length(UiConstants::NAV_BAR_HEIGHT),
            ])
            .split(area)
    }

    /// Largest useful preview scroll offset when drawing into `area`
    pub fn preview_max_scroll(&self, area: Rect, paragraph: &str, show_step_numbers: bool) -> u16 {
        screens::preview_max_scroll(self.layout(area, show_step_numbers)[1], paragraph)
    }

    /// Render the complete UI.
    ///
    /// `paragraph` is the generated statement; it is only read on the preview screen.
    pub fn render(
        &self,
        f: &mut Frame,
        state: &AppState,
        keybinding_ctx: &KeybindingContext,
        paragraph: &str,
        show_step_numbers: bool,
    ) {
        let chunks = self.layout(f.area(), show_step_numbers);

        self.header
            .render(f, chunks[0], state, show_step_numbers);

        let mode = state.mode();
        match mode {
            AppMode::Question => screens::render_question_screen(f, chunks[1], state),
            AppMode::Preview => screens::render_preview_screen(f, chunks[1], state, paragraph),
        }

        let on_last_question = state.wizard.step().is_last_question();
        header::render_nav_bar(f, chunks[2], keybinding_ctx.get_nav_items(&mode, on_last_question));

        if state.help_visible {
            HelpOverlay::new(&mode, keybinding_ctx).render(f, f.area());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::components::keybindings::KeyAction;
    use crate::generator::GeneratorConfig;
    use crate::types::Category;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(state: &AppState, width: u16, height: u16, paragraph: &str) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        let renderer = UiRenderer::new();
        let ctx = KeybindingContext::new();
        terminal
            .draw(|f| renderer.render(f, state, &ctx, paragraph, true))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_last_option_visible_on_small_terminal() {
        let mut state = AppState::default();
        state.apply(KeyAction::JumpTo(8));
        let text = draw(&state, 80, 24, "");
        assert!(text.contains("If you feel pressure"));

        state.apply(KeyAction::End);
        assert_eq!(state.cursor, 4);
        let text = draw(&state, 80, 24, "");
        assert!(text.contains("Thoughtful and responsible"));
        assert!(!text.contains("If you feel pressure"));
    }

    #[test]
    fn test_preview_max_scroll_depends_on_size() {
        let mut state = AppState::default();
        for category in Category::all() {
            for option in catalog::options(category) {
                if category.is_multi() {
                    state.selections.toggle_multi(category, *option);
                } else {
                    state.selections.set_single(category, *option);
                }
            }
        }
        let paragraph = state.paragraph(&GeneratorConfig::default());
        let renderer = UiRenderer::new();
        assert!(renderer.preview_max_scroll(Rect::new(0, 0, 80, 24), &paragraph, true) > 0);
        assert_eq!(
            renderer.preview_max_scroll(Rect::new(0, 0, 200, 60), &paragraph, true),
            0
        );
    }
}
