//! Wizard screens.
//!
//! - Question screen: the category heading and its radio/checkbox group
//! - Preview screen: the generated statement, read-only

use crate::app::AppState;
use crate::catalog;
use crate::theme::{Colors, Styles};
use crate::types::{Cardinality, Category};
use crate::wizard::WizardStep;
use std::ops::Range;
use std::rc::Rc;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

// ============================================================================
// Option markers
// ============================================================================

/// Marker drawn in front of an option.
pub fn option_marker(cardinality: Cardinality, chosen: bool) -> &'static str {
    match (cardinality, chosen) {
        (Cardinality::Single, true) => "(\u{2022})",
        (Cardinality::Single, false) => "( )",
        (Cardinality::Multi, true) => "[x]",
        (Cardinality::Multi, false) => "[ ]",
    }
}

/// Width of the marker column (" [x] ")
const MARKER_WIDTH: usize = 5;

/// Greedy word wrap into lines of at most `width` characters.
///
/// A single word longer than `width` gets a line of its own. Empty input
/// gives one empty line.
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;
    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if current_len > 0 && current_len + 1 + word_len > width {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.push_str(word);
        current_len += word_len;
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Lines of an option group wrapped to `width`, plus the line range of the
/// option under the cursor.
///
/// Options are separated by a blank line so wrapped text stays readable.
/// Continuation lines are indented past the marker.
pub fn option_lines(
    state: &AppState,
    category: Category,
    width: usize,
) -> (Vec<Line<'static>>, Range<usize>) {
    let text_width = width.saturating_sub(MARKER_WIDTH);
    let mut lines = Vec::new();
    let mut cursor_range = 0..0;
    for (i, option) in catalog::options(category).iter().enumerate() {
        let chosen = state.selections.is_selected(category, option);
        let style = if i == state.cursor {
            Styles::selected()
        } else if chosen {
            Styles::chosen()
        } else {
            Styles::unselected()
        };
        if i > 0 {
            lines.push(Line::from(""));
        }
        let start = lines.len();
        for (row, text) in wrap_words(option, text_width).into_iter().enumerate() {
            let lead = if row == 0 {
                format!(" {} ", option_marker(category.cardinality(), chosen))
            } else {
                " ".repeat(MARKER_WIDTH)
            };
            lines.push(Line::from(vec![
                Span::styled(lead, style),
                Span::styled(text, style),
            ]));
        }
        if i == state.cursor {
            cursor_range = start..lines.len();
        }
    }
    (lines, cursor_range)
}

/// First visible line so that `target` fits in a viewport of `height` lines.
///
/// When the target is taller than the viewport its first line wins.
pub fn scroll_to_show(target: &Range<usize>, height: usize) -> u16 {
    let offset = target.end.saturating_sub(height).min(target.start);
    u16::try_from(offset).unwrap_or(u16::MAX)
}

/// Heading, body and status rows shared by both screens
fn screen_chunks(area: Rect) -> Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Heading
            Constraint::Min(5),    // Options or statement
            Constraint::Length(3), // Status
        ])
        .split(area)
}

// ============================================================================
// Question Screen
// ============================================================================

/// Render the question screen for the current step.
pub fn render_question_screen(f: &mut Frame, area: Rect, state: &AppState) {
    let WizardStep::Question(category) = state.wizard.step() else {
        return;
    };

    let chunks = screen_chunks(area);

    let hint = match category.cardinality() {
        Cardinality::Single => "Choose one",
        Cardinality::Multi => "Check all that apply",
    };
    let heading = Paragraph::new(vec![
        Line::from(Span::styled(catalog::heading(category), Styles::title())),
        Line::from(Span::styled(hint, Styles::text_muted())),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(heading, chunks[0]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Styles::border_active())
        .title(format!(" {} ", catalog::short_label(category)))
        .title_style(Style::default().fg(Colors::SECONDARY));
    let inner = block.inner(chunks[1]);
    let (lines, cursor_range) = option_lines(state, category, inner.width as usize);
    let offset = scroll_to_show(&cursor_range, inner.height as usize);
    let options = Paragraph::new(lines).scroll((offset, 0)).block(block);
    f.render_widget(options, chunks[1]);

    render_status(f, chunks[2], &state.status_message);
}

// ============================================================================
// Preview Screen
// ============================================================================

fn statement_block() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Styles::border_active())
        .title(" Statement ")
        .title_style(Style::default().fg(Colors::SECONDARY).add_modifier(Modifier::BOLD))
}

/// Largest useful preview scroll offset for a screen of size `area`.
pub fn preview_max_scroll(area: Rect, paragraph: &str) -> u16 {
    let inner = statement_block().inner(screen_chunks(area)[1]);
    let total = wrap_words(paragraph, inner.width as usize).len();
    u16::try_from(total.saturating_sub(inner.height as usize)).unwrap_or(u16::MAX)
}

/// Render the generated statement.
pub fn render_preview_screen(f: &mut Frame, area: Rect, state: &AppState, paragraph: &str) {
    let chunks = screen_chunks(area);

    let answered = state.selections.answered_count();
    let title = Paragraph::new(vec![
        Line::from(Span::styled(WizardStep::Preview.title(), Styles::title())),
        Line::from(Span::styled(
            format!("{} of {} questions answered", answered, Category::COUNT),
            Styles::text_muted(),
        )),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(title, chunks[0]);

    let block = statement_block();
    let inner = block.inner(chunks[1]);
    let body = if paragraph.is_empty() {
        Paragraph::new(Span::styled(
            "Nothing selected yet. Press R to start over and pick some options.",
            Style::default().fg(Colors::WARNING),
        ))
        .wrap(Wrap { trim: true })
    } else {
        let lines: Vec<Line> = wrap_words(paragraph, inner.width as usize)
            .into_iter()
            .map(Line::from)
            .collect();
        Paragraph::new(lines)
            .style(Styles::text())
            .scroll((state.preview_scroll, 0))
    };
    let body = body.block(block);
    f.render_widget(body, chunks[1]);

    render_status(f, chunks[2], &state.status_message);
}

fn render_status(f: &mut Frame, area: Rect, message: &str) {
    let status = Paragraph::new(format!("  {}", message))
        .style(Style::default().fg(Colors::FG_SECONDARY))
        .block(Block::default().borders(Borders::TOP));
    f.render_widget(status, area);
}

// ============================================================================
// Tests
// ============================================================================
