//! Header and common widget rendering
//!
//! Title line, step indicator, progress gauge and the bottom navigation bar.

use crate::app::AppState;
use crate::catalog;
use crate::components::keybindings::NavBarItem;
use crate::theme::{Styles, Theme, UiConstants};
use crate::types::Category;
use crate::wizard::Wizard;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

const APP_TITLE: &str = "AI Syllabus Statement Builder";

/// Header renderer
pub struct HeaderRenderer {
    title: Line<'static>,
}

impl Default for HeaderRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl HeaderRenderer {
    /// Create a new header renderer
    pub fn new() -> Self {
        Self {
            title: Line::from(Span::styled(APP_TITLE, Styles::title())),
        }
    }

    /// Rows the header needs
    pub fn height(&self, show_step_numbers: bool) -> u16 {
        if show_step_numbers {
            UiConstants::HEADER_HEIGHT
        } else {
            2
        }
    }

    /// Render title, step indicator and (optionally) the progress gauge
    pub fn render(&self, f: &mut Frame, area: Rect, state: &AppState, show_step_numbers: bool) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(area);

        f.render_widget(
            Paragraph::new(self.title.clone()).alignment(Alignment::Center),
            chunks[0],
        );
        f.render_widget(
            Paragraph::new(step_indicator(state)).alignment(Alignment::Center),
            chunks[1],
        );

        if show_step_numbers && chunks[2].height > 0 {
            render_progress_bar(f, chunks[2], state);
        }
    }
}

/// One label per category, colored by answered/current state
fn step_indicator(state: &AppState) -> Line<'static> {
    let current = state.current_category();
    let mut spans = Vec::with_capacity(Category::COUNT * 2);
    for (i, category) in Category::all().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", Styles::text_muted()));
        }
        let answered = !state.selections.is_category_empty(category);
        let active = current == Some(category);
        spans.push(Span::styled(
            catalog::short_label(category),
            Theme::step_style(answered, active),
        ));
    }
    Line::from(spans)
}

/// Progress label and ratio for the current step
pub fn progress(state: &AppState) -> (String, f64) {
    match state.wizard.step().step_number() {
        Some(n) => (
            format!("Step {} of {}", n, Wizard::TOTAL_STEPS),
            n as f64 / Wizard::TOTAL_STEPS as f64,
        ),
        None => ("Preview".to_string(), 1.0),
    }
}

/// Render the wizard progress gauge
fn render_progress_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let (label, ratio) = progress(state);
    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Styles::border_inactive()),
        )
        .gauge_style(Styles::progress())
        .ratio(ratio.clamp(0.0, 1.0))
        .label(label);
    f.render_widget(gauge, area);
}

/// Render the navigation bar
pub fn render_nav_bar(f: &mut Frame, area: Rect, items: Vec<NavBarItem>) {
    let mut spans = Vec::with_capacity(items.len() * 2);
    for item in items {
        spans.push(Span::styled(format!(" [{}] ", item.key_display), Styles::nav_key()));
        spans.push(Span::styled(item.action_label, Styles::nav_hint()));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::keybindings::KeyAction;

    #[test]
    fn test_progress_label() {
        let mut state = AppState::default();
        assert_eq!(progress(&state).0, "Step 1 of 8");

        state.apply(KeyAction::JumpTo(8));
        let (label, ratio) = progress(&state);
        assert_eq!(label, "Step 8 of 8");
        assert!((ratio - 1.0).abs() < f64::EPSILON);

        state.apply(KeyAction::Preview);
        assert_eq!(progress(&state).0, "Preview");
    }

    #[test]
    fn test_step_indicator_lists_every_category() {
        let line = step_indicator(&AppState::default());
        let labels = line
            .spans
            .iter()
            .filter(|s| s.content != " | ")
            .count();
        assert_eq!(labels, Category::COUNT);
    }
}
