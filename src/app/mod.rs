//! Application module
//!
//! Contains the interactive session: state management and the event loop.
//!
//! # Module Structure
//! - `state` - Application state types (AppState, AppMode)
//! - Main module - App struct and event loop

mod state;

pub use state::{AppMode, AppState};

use crate::components::keybindings::{KeyAction, KeybindingContext};
use crate::config::BuilderConfig;
use crate::error::Result;
use crate::generator::GeneratorConfig;
use crate::ui::UiRenderer;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, layout::Rect, Terminal};
use tracing::{debug, info};

/// Main application struct
pub struct App {
    state: AppState,
    config: BuilderConfig,
    generator: GeneratorConfig,
    ui_renderer: UiRenderer,
    /// Keybinding context for actions, navigation hints and help
    keybinding_context: KeybindingContext,
}

impl App {
    /// Create a new application instance
    pub fn new(config: BuilderConfig) -> Self {
        info!(mode = %config.mode, "Starting statement builder session");
        let generator = config.generator();
        Self {
            state: AppState::default(),
            config,
            generator,
            ui_renderer: UiRenderer::new(),
            keybinding_context: KeybindingContext::new(),
        }
    }

    /// Current session state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Generator settings in effect
    pub fn generator(&self) -> &GeneratorConfig {
        &self.generator
    }

    /// Handle a single key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if self.state.help_visible && key.code == KeyCode::Esc {
            self.state.help_visible = false;
            return;
        }

        let mode = self.state.mode();
        let Some(action) = self
            .keybinding_context
            .action_for(&mode, key.code, key.modifiers)
        else {
            return;
        };

        // The help overlay swallows everything except closing it or quitting
        if self.state.help_visible && !matches!(action, KeyAction::Help | KeyAction::Quit) {
            return;
        }

        debug!(?action, ?mode, "key action");
        self.state.apply(action);
    }

    /// Run the event loop until the user quits
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        while !self.state.should_quit {
            let paragraph = match self.state.mode() {
                AppMode::Preview => {
                    let paragraph = self.state.paragraph(&self.generator);
                    let size = terminal.size()?;
                    let max = self.ui_renderer.preview_max_scroll(
                        Rect::new(0, 0, size.width, size.height),
                        &paragraph,
                        self.config.show_step_numbers,
                    );
                    self.state.set_preview_max_scroll(max);
                    paragraph
                }
                AppMode::Question => String::new(),
            };

            terminal.draw(|f| {
                self.ui_renderer.render(
                    f,
                    &self.state,
                    &self.keybinding_context,
                    &paragraph,
                    self.config.show_step_numbers,
                )
            })?;

            if event::poll(self.config.tick_rate())? {
                if let Event::Key(key) = event::read()? {
                    self.handle_key(key);
                }
            }
        }

        info!(
            answered = self.state.selections.answered_count(),
            "Statement builder session finished"
        );
        Ok(())
    }

    /// End the session and return the generated statement
    pub fn finish(self) -> String {
        self.state.paragraph(&self.generator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, KeyModifiers};

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_release_events_are_ignored() {
        let mut app = App::new(BuilderConfig::default());
        app.handle_key(KeyEvent {
            code: KeyCode::Char('n'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(app.state().wizard.step().step_number(), Some(1));
    }

    #[test]
    fn test_help_overlay_blocks_actions() {
        let mut app = App::new(BuilderConfig::default());
        press(&mut app, KeyCode::Char('?'));
        assert!(app.state().help_visible);

        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.state().wizard.step().step_number(), Some(1));

        press(&mut app, KeyCode::Esc);
        assert!(!app.state().help_visible);
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.state().wizard.step().step_number(), Some(2));
    }

    #[test]
    fn test_finish_returns_statement() {
        let mut app = App::new(BuilderConfig::default());
        press(&mut app, KeyCode::Char(' '));
        let statement = app.finish();
        assert_eq!(
            statement,
            "General policy about AI use in this course: Students are allowed to use AI tools freely as they choose."
        );
    }
}
