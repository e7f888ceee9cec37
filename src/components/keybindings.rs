//! Keybinding system for context-aware keyboard shortcuts
//!
//! Provides a registry of keybindings that change based on the current
//! screen. The registry is the single place where keys become actions; the
//! navigation bar and the help overlay are generated from it.

use crate::app::AppMode;
use crate::wizard::Wizard;
use crossterm::event::{KeyCode, KeyModifiers};
use std::collections::HashMap;

/// Actions that can be triggered by keybindings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    NavigateUp,
    NavigateDown,
    Home,
    End,
    /// Choose the highlighted radio option or toggle the highlighted checkbox
    Select,
    NextStep,
    PreviousStep,
    Preview,
    Restart,
    /// Jump to a question by its 1-based number
    JumpTo(usize),
    ScrollUp,
    ScrollDown,
    Help,
    Quit,
}

/// A keybinding definition
#[derive(Debug, Clone)]
pub struct Keybinding {
    pub key: KeyCode,
    pub modifiers: KeyModifiers,
    pub action: KeyAction,
    pub display: String,
    pub description: String,
}

impl Keybinding {
    /// Create a new keybinding with no modifiers
    pub fn new(key: KeyCode, action: KeyAction, display: &str, description: &str) -> Self {
        Self {
            key,
            modifiers: KeyModifiers::NONE,
            action,
            display: display.to_string(),
            description: description.to_string(),
        }
    }

    /// Create a keybinding with modifiers
    pub fn with_modifiers(
        key: KeyCode,
        modifiers: KeyModifiers,
        action: KeyAction,
        display: &str,
        description: &str,
    ) -> Self {
        Self {
            key,
            modifiers,
            action,
            display: display.to_string(),
            description: description.to_string(),
        }
    }

    /// Check whether a key press triggers this binding.
    ///
    /// Plain bindings ignore Shift (terminals report `?` with or without it)
    /// but never fire with Ctrl or Alt held.
    pub fn matches(&self, key: KeyCode, modifiers: KeyModifiers) -> bool {
        if self.key != key {
            return false;
        }
        if self.modifiers.is_empty() {
            !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        } else {
            modifiers.contains(self.modifiers)
        }
    }
}

/// Context-aware keybinding registry
pub struct KeybindingContext {
    /// Mode-specific keybindings
    mode_bindings: HashMap<AppMode, Vec<Keybinding>>,
    /// Global keybindings (available in all modes)
    global_bindings: Vec<Keybinding>,
}

impl Default for KeybindingContext {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingContext {
    /// Create a new keybinding context with default bindings
    pub fn new() -> Self {
        let mut ctx = Self {
            mode_bindings: HashMap::new(),
            global_bindings: Vec::new(),
        };
        ctx.register_defaults();
        ctx
    }

    /// Register default keybindings for all modes
    fn register_defaults(&mut self) {
        self.global_bindings = vec![
            Keybinding::new(KeyCode::Char('?'), KeyAction::Help, "?", "Help"),
            Keybinding::new(KeyCode::Char('q'), KeyAction::Quit, "Q", "Quit"),
            Keybinding::with_modifiers(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL,
                KeyAction::Quit,
                "Ctrl+C",
                "Quit",
            ),
        ];

        // Question steps
        let mut question = vec![
            Keybinding::new(KeyCode::Up, KeyAction::NavigateUp, "Up", "Previous option"),
            Keybinding::new(KeyCode::Down, KeyAction::NavigateDown, "Down", "Next option"),
            Keybinding::new(KeyCode::Char('k'), KeyAction::NavigateUp, "K", "Previous option"),
            Keybinding::new(KeyCode::Char('j'), KeyAction::NavigateDown, "J", "Next option"),
            Keybinding::new(KeyCode::Home, KeyAction::Home, "Home", "First option"),
            Keybinding::new(KeyCode::End, KeyAction::End, "End", "Last option"),
            Keybinding::new(KeyCode::Char(' '), KeyAction::Select, "Space", "Choose/toggle"),
            Keybinding::new(KeyCode::Enter, KeyAction::Select, "Enter", "Choose/toggle"),
            Keybinding::new(KeyCode::Right, KeyAction::NextStep, "Right", "Next"),
            Keybinding::new(KeyCode::Char('n'), KeyAction::NextStep, "N", "Next"),
            Keybinding::new(KeyCode::Left, KeyAction::PreviousStep, "Left", "Previous"),
            Keybinding::new(KeyCode::Char('p'), KeyAction::PreviousStep, "P", "Previous"),
            Keybinding::new(KeyCode::Char('v'), KeyAction::Preview, "V", "Preview"),
        ];
        for number in 1..=Wizard::TOTAL_STEPS {
            let Some(digit) = char::from_digit(number as u32, 10) else {
                continue;
            };
            let display = digit.to_string();
            question.push(Keybinding::new(
                KeyCode::Char(digit),
                KeyAction::JumpTo(number),
                &display,
                &format!("Go to step {number}"),
            ));
        }
        self.mode_bindings.insert(AppMode::Question, question);

        // Preview
        self.mode_bindings.insert(
            AppMode::Preview,
            vec![
                Keybinding::new(KeyCode::Up, KeyAction::ScrollUp, "Up", "Scroll up"),
                Keybinding::new(KeyCode::Down, KeyAction::ScrollDown, "Down", "Scroll down"),
                Keybinding::new(KeyCode::Char('r'), KeyAction::Restart, "R", "Start over"),
            ],
        );
    }

    /// Get keybindings for a specific mode (includes global bindings)
    pub fn get_bindings(&self, mode: &AppMode) -> Vec<&Keybinding> {
        let mut bindings: Vec<&Keybinding> = Vec::new();

        if let Some(mode_bindings) = self.mode_bindings.get(mode) {
            bindings.extend(mode_bindings.iter());
        }
        bindings.extend(self.global_bindings.iter());

        bindings
    }

    /// Resolve a key press to an action for the given mode
    pub fn action_for(
        &self,
        mode: &AppMode,
        key: KeyCode,
        modifiers: KeyModifiers,
    ) -> Option<KeyAction> {
        self.get_bindings(mode)
            .into_iter()
            .find(|b| b.matches(key, modifiers))
            .map(|b| b.action)
    }

    /// Get navigation bar items for display
    pub fn get_nav_items(&self, mode: &AppMode, on_last_question: bool) -> Vec<NavBarItem> {
        let bindings = self.get_bindings(mode);

        let mut priority_actions = match mode {
            AppMode::Question => vec![
                KeyAction::NavigateUp,
                KeyAction::Select,
                KeyAction::PreviousStep,
                KeyAction::NextStep,
            ],
            AppMode::Preview => vec![KeyAction::ScrollUp, KeyAction::Restart],
        };
        // The preview action only does something on the last question
        if on_last_question && *mode == AppMode::Question {
            priority_actions.retain(|a| *a != KeyAction::NextStep);
            priority_actions.push(KeyAction::Preview);
        }
        priority_actions.extend([KeyAction::Help, KeyAction::Quit]);

        let mut items: Vec<NavBarItem> = Vec::new();
        for action in priority_actions {
            let Some(binding) = bindings.iter().find(|b| b.action == action) else {
                continue;
            };
            let item = match action {
                KeyAction::NavigateUp => NavBarItem {
                    key_display: "Up/Dn".to_string(),
                    action_label: "Navigate".to_string(),
                },
                KeyAction::ScrollUp => NavBarItem {
                    key_display: "Up/Dn".to_string(),
                    action_label: "Scroll".to_string(),
                },
                _ => NavBarItem {
                    key_display: binding.display.clone(),
                    action_label: binding.description.clone(),
                },
            };
            items.push(item);
        }

        items
    }

    /// Get full help content for a mode (for help overlay)
    pub fn get_help_content(&self, mode: &AppMode) -> Vec<HelpSection> {
        let groups: [(&str, fn(&KeyAction) -> bool); 4] = [
            ("Navigation", |a| {
                matches!(
                    a,
                    KeyAction::NavigateUp
                        | KeyAction::NavigateDown
                        | KeyAction::Home
                        | KeyAction::End
                        | KeyAction::ScrollUp
                        | KeyAction::ScrollDown
                )
            }),
            ("Actions", |a| matches!(a, KeyAction::Select | KeyAction::Restart)),
            ("Steps", |a| {
                matches!(
                    a,
                    KeyAction::NextStep
                        | KeyAction::PreviousStep
                        | KeyAction::Preview
                        | KeyAction::JumpTo(_)
                )
            }),
            ("General", |a| matches!(a, KeyAction::Help | KeyAction::Quit)),
        ];

        let bindings = self.get_bindings(mode);
        groups
            .iter()
            .filter_map(|(title, belongs)| {
                let items: Vec<(String, String)> = bindings
                    .iter()
                    .filter(|b| belongs(&b.action))
                    .map(|b| (b.display.clone(), b.description.clone()))
                    .collect();
                (!items.is_empty()).then(|| HelpSection {
                    title: title.to_string(),
                    items,
                })
            })
            .collect()
    }
}

/// Navigation bar item for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavBarItem {
    pub key_display: String,
    pub action_label: String,
}

/// Help section for the help overlay
#[derive(Debug, Clone)]
pub struct HelpSection {
    pub title: String,
    pub items: Vec<(String, String)>,
}
