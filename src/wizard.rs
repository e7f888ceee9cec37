//! Wizard navigator
//!
//! The builder presents one category per step and finishes in a preview.
//!
//! # State Transitions
//!
//! ```text
//! Policy -> Tools -> Conditions -> Processes -> Rationale -> Consequences -> Support -> Position
//!                                                                                        |
//!                                                              preview() only from here  v
//!                                                                                     Preview
//!                                                                                        |
//!                                                                  restart() -> Policy   |
//! ```
//!
//! # Invariants
//!
//! - `next()` never leaves the last question; reaching the preview needs `preview()`
//! - `prev()` is a no-op on the first question
//! - `restart()` is the only way out of the preview
//! - The navigator does not own selections, so restarting never clears them
//!
//! Invalid transitions are no-ops, not errors.

use crate::catalog;
use crate::types::Category;
use std::fmt;
use tracing::debug;

/// One position in the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WizardStep {
    /// Asking about a category (steps 1..=8).
    Question(Category),
    /// Terminal preview of the generated paragraph.
    Preview,
}

impl Default for WizardStep {
    fn default() -> Self {
        Self::Question(Category::GeneralPolicy)
    }
}

impl WizardStep {
    /// Next question step. `None` at the last question and in the preview.
    pub fn next(&self) -> Option<Self> {
        match self {
            Self::Question(category) => {
                Category::from_index(category.index() + 1).map(Self::Question)
            }
            Self::Preview => None,
        }
    }

    /// Previous question step. `None` at the first question and in the preview.
    pub fn previous(&self) -> Option<Self> {
        match self {
            Self::Question(category) => category
                .index()
                .checked_sub(1)
                .and_then(Category::from_index)
                .map(Self::Question),
            Self::Preview => None,
        }
    }

    /// Step for a 1-based question number.
    pub fn from_number(number: usize) -> Option<Self> {
        number
            .checked_sub(1)
            .and_then(Category::from_index)
            .map(Self::Question)
    }

    /// 1-based step number, `None` for the preview.
    pub fn step_number(&self) -> Option<usize> {
        match self {
            Self::Question(category) => Some(category.index() + 1),
            Self::Preview => None,
        }
    }

    /// Category asked at this step.
    pub fn category(&self) -> Option<Category> {
        match self {
            Self::Question(category) => Some(*category),
            Self::Preview => None,
        }
    }

    /// Returns true for the last question, the only step that can open the preview.
    pub fn is_last_question(&self) -> bool {
        self.step_number() == Some(Wizard::TOTAL_STEPS)
    }

    /// Display title for this step.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Question(category) => catalog::heading(*category),
            Self::Preview => "Preview of Your Syllabus Statement",
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.step_number() {
            Some(n) => write!(f, "step {n}"),
            None => write!(f, "preview"),
        }
    }
}

/// Owns the current wizard step and applies transitions.
///
/// # Example
///
/// ```
/// use syllabus_builder::wizard::{Wizard, WizardStep};
///
/// let mut wizard = Wizard::new();
/// assert!(!wizard.prev());
/// for _ in 0..7 {
///     assert!(wizard.next());
/// }
/// assert_eq!(wizard.step().step_number(), Some(8));
/// assert!(wizard.preview());
/// assert_eq!(wizard.step(), WizardStep::Preview);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Wizard {
    step: WizardStep,
}

impl Wizard {
    /// Number of question steps.
    pub const TOTAL_STEPS: usize = Category::COUNT;

    /// Start at step 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current step.
    pub fn step(&self) -> WizardStep {
        self.step
    }

    /// Returns true while the preview is shown.
    pub fn is_preview(&self) -> bool {
        self.step == WizardStep::Preview
    }

    fn transition(&mut self, target: Option<WizardStep>, name: &str) -> bool {
        match target {
            Some(step) => {
                debug!(from = %self.step, to = %step, "wizard {}", name);
                self.step = step;
                true
            }
            None => {
                debug!(at = %self.step, "wizard {} ignored", name);
                false
            }
        }
    }

    /// Advance one question. No-op at the last question and in the preview.
    pub fn next(&mut self) -> bool {
        let target = self.step.next();
        self.transition(target, "next")
    }

    /// Go back one question. No-op at the first question and in the preview.
    pub fn prev(&mut self) -> bool {
        let target = self.step.previous();
        self.transition(target, "prev")
    }

    /// Open the preview. Only valid at the last question.
    pub fn preview(&mut self) -> bool {
        let target = self.step.is_last_question().then_some(WizardStep::Preview);
        self.transition(target, "preview")
    }

    /// Return to step 1 from the preview.
    pub fn restart(&mut self) -> bool {
        let target = self.is_preview().then(WizardStep::default);
        self.transition(target, "restart")
    }

    /// Jump straight to question `number` (1-based). Not available from the preview.
    pub fn jump_to(&mut self, number: usize) -> bool {
        let target = if self.is_preview() {
            None
        } else {
            WizardStep::from_number(number).filter(|step| *step != self.step)
        };
        self.transition(target, "jump")
    }
}
