//! Application state definitions
//!
//! [`AppState`] is the one explicitly-owned session object: the selection
//! record, the wizard position, and the bits of view state the screens need.
//! Every key action is applied through [`AppState::apply`], which keeps the
//! whole interaction testable without a terminal.

use crate::catalog;
use crate::components::keybindings::KeyAction;
use crate::generator::{self, GeneratorConfig};
use crate::selection::SelectionRecord;
use crate::theme::UiConstants;
use crate::types::{Cardinality, Category};
use crate::wizard::{Wizard, WizardStep};
use tracing::debug;

/// Which screen is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppMode {
    /// One of the eight question steps
    Question,
    /// Read-only preview of the generated statement
    Preview,
}

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Answers collected so far
    pub selections: SelectionRecord,
    /// Current wizard position
    pub wizard: Wizard,
    /// Highlighted option on the current question
    pub cursor: usize,
    /// Whether help overlay is visible
    pub help_visible: bool,
    /// Status message for user feedback
    pub status_message: String,
    /// Vertical scroll offset of the preview text
    pub preview_scroll: u16,
    /// Upper bound for `preview_scroll`, refreshed from the terminal size
    pub preview_max_scroll: u16,
    /// Set by the quit action; the event loop exits when true
    pub should_quit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            selections: SelectionRecord::new(),
            wizard: Wizard::new(),
            cursor: 0,
            help_visible: false,
            status_message: "Welcome! Choose the options that fit your course.".to_string(),
            preview_scroll: 0,
            preview_max_scroll: u16::MAX,
            should_quit: false,
        }
    }
}

impl AppState {
    /// Current screen
    pub fn mode(&self) -> AppMode {
        if self.wizard.is_preview() {
            AppMode::Preview
        } else {
            AppMode::Question
        }
    }

    /// Category asked on the current screen, `None` in the preview
    pub fn current_category(&self) -> Option<Category> {
        self.wizard.step().category()
    }

    /// Options of the current question (empty in the preview)
    pub fn current_options(&self) -> &'static [&'static str] {
        self.current_category().map(catalog::options).unwrap_or(&[])
    }

    /// Generated statement for the current selections
    pub fn paragraph(&self, config: &GeneratorConfig) -> String {
        generator::generate(&self.selections, config)
    }

    /// Update the scroll bound; the current offset is pulled back inside it
    pub fn set_preview_max_scroll(&mut self, max: u16) {
        self.preview_max_scroll = max;
        self.preview_scroll = self.preview_scroll.min(max);
    }

    /// Apply one key action to the session
    pub fn apply(&mut self, action: KeyAction) {
        let before = self.wizard.step();
        match action {
            KeyAction::NavigateUp => self.cursor = self.cursor.saturating_sub(1),
            KeyAction::NavigateDown => {
                let len = self.current_options().len();
                if self.cursor + 1 < len {
                    self.cursor += 1;
                }
            }
            KeyAction::Home => self.cursor = 0,
            KeyAction::End => self.cursor = self.current_options().len().saturating_sub(1),
            KeyAction::Select => self.activate_option(),
            KeyAction::NextStep => {
                if !self.wizard.next() && self.wizard.step().is_last_question() {
                    self.status_message = "This is the last question. Press V to preview.".to_string();
                }
            }
            KeyAction::PreviousStep => {
                self.wizard.prev();
            }
            KeyAction::Preview => {
                if self.wizard.preview() {
                    self.preview_scroll = 0;
                    self.status_message = "Here is your statement.".to_string();
                } else if !self.wizard.is_preview() {
                    self.status_message = format!(
                        "The preview opens from step {}.",
                        Wizard::TOTAL_STEPS
                    );
                }
            }
            KeyAction::Restart => {
                if self.wizard.restart() {
                    self.status_message =
                        "Started over. Your selections were kept.".to_string();
                }
            }
            KeyAction::JumpTo(number) => {
                self.wizard.jump_to(number);
            }
            KeyAction::ScrollUp => {
                self.preview_scroll = self.preview_scroll.saturating_sub(UiConstants::SCROLL_STEP);
            }
            KeyAction::ScrollDown => {
                self.preview_scroll = self
                    .preview_scroll
                    .saturating_add(UiConstants::SCROLL_STEP)
                    .min(self.preview_max_scroll);
            }
            KeyAction::Help => self.help_visible = !self.help_visible,
            KeyAction::Quit => self.should_quit = true,
        }

        let after = self.wizard.step();
        if before != after {
            self.cursor = 0;
            if let WizardStep::Question(category) = after {
                self.status_message = format!(
                    "Step {} of {}: {}",
                    category.index() + 1,
                    Wizard::TOTAL_STEPS,
                    catalog::short_label(category)
                );
            }
        }
    }

    /// Choose the highlighted radio option or toggle the highlighted checkbox
    fn activate_option(&mut self) {
        let Some(category) = self.current_category() else {
            return;
        };
        let Some(option) = catalog::options(category).get(self.cursor).copied() else {
            return;
        };
        match category.cardinality() {
            Cardinality::Single => {
                self.selections.set_single(category, option);
                self.status_message = format!("Chose option {}.", self.cursor + 1);
            }
            Cardinality::Multi => {
                self.selections.toggle_multi(category, option);
                let verb = if self.selections.is_selected(category, option) {
                    "Checked"
                } else {
                    "Unchecked"
                };
                self.status_message = format!("{} option {}.", verb, self.cursor + 1);
            }
        }
        debug!(%category, cursor = self.cursor, "option activated");
    }
}
