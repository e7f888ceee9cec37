//! Help overlay component
//!
//! Displays context-sensitive help in a centered floating window.

use super::keybindings::{HelpSection, KeybindingContext};
use crate::app::AppMode;
use crate::theme::Colors;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Help overlay component
pub struct HelpOverlay {
    content: Vec<Line<'static>>,
}

impl HelpOverlay {
    /// Create a new help overlay for the given mode
    pub fn new(mode: &AppMode, keybinding_ctx: &KeybindingContext) -> Self {
        let sections = keybinding_ctx.get_help_content(mode);
        Self {
            content: Self::build_content(&sections, mode),
        }
    }

    /// Build the help content from sections
    fn build_content(sections: &[HelpSection], mode: &AppMode) -> Vec<Line<'static>> {
        let mut lines: Vec<Line<'static>> = Vec::new();

        lines.push(Line::from(vec![Span::styled(
            "  Syllabus Statement Builder Help  ",
            Style::default()
                .fg(Colors::PRIMARY)
                .add_modifier(Modifier::BOLD),
        )]));
        lines.push(Line::from(""));

        let mode_name = match mode {
            AppMode::Question => "Question",
            AppMode::Preview => "Preview",
        };
        lines.push(Line::from(vec![
            Span::styled("Current: ", Style::default().fg(Colors::FG_MUTED)),
            Span::styled(mode_name.to_string(), Style::default().fg(Colors::SECONDARY)),
        ]));
        lines.push(Line::from(""));

        for section in sections {
            lines.push(Line::from(vec![Span::styled(
                format!("  {}  ", section.title),
                Style::default()
                    .fg(Colors::SUCCESS)
                    .add_modifier(Modifier::BOLD),
            )]));

            for (key, description) in &section.items {
                lines.push(Line::from(vec![
                    Span::raw("    "),
                    Span::styled(
                        format!("{:<10}", key),
                        Style::default()
                            .fg(Colors::PRIMARY)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(description.clone(), Style::default().fg(Colors::FG_PRIMARY)),
                ]));
            }
            lines.push(Line::from(""));
        }

        lines.push(Line::from(vec![Span::styled(
            "Press ? or Esc to close",
            Style::default().fg(Colors::FG_MUTED),
        )]));

        lines
    }

    /// Number of content lines
    pub fn line_count(&self) -> usize {
        self.content.len()
    }

    /// Window area: 60% wide, tall enough for the content plus borders,
    /// centered and clipped to `parent`
    pub fn area(&self, parent: Rect) -> Rect {
        let columns = centered_rect(60, 100, parent);
        let height = u16::try_from(self.line_count() + 2)
            .unwrap_or(u16::MAX)
            .min(parent.height);
        Rect {
            y: parent.y + (parent.height - height) / 2,
            height,
            ..columns
        }
    }

    /// Render the help overlay
    pub fn render(&self, f: &mut Frame, parent: Rect) {
        let area = self.area(parent);
        f.render_widget(Clear, area);
        let window = Paragraph::new(self.content.clone())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Help ")
                    .border_style(Style::default().fg(Colors::BORDER_ACTIVE))
                    .style(Style::default().bg(Colors::BG_PRIMARY)),
            )
            .wrap(Wrap { trim: false });
        f.render_widget(window, area);
    }
}

/// Rectangle of the given percentage size centered in `parent`
pub fn centered_rect(width_percent: u16, height_percent: u16, parent: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - height_percent) / 2),
            Constraint::Percentage(height_percent),
            Constraint::Percentage((100 - height_percent) / 2),
        ])
        .split(parent);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - width_percent) / 2),
            Constraint::Percentage(width_percent),
            Constraint::Percentage((100 - width_percent) / 2),
        ])
        .split(vertical[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_is_inside_parent() {
        let parent = Rect::new(0, 0, 100, 50);
        let area = centered_rect(60, 80, parent);
        assert_eq!(area.width, 60);
        assert_eq!(area.height, 40);
        assert!(area.x >= parent.x && area.right() <= parent.right());
        assert!(area.y >= parent.y && area.bottom() <= parent.bottom());
    }

    #[test]
    fn test_help_content_includes_sections() {
        let ctx = KeybindingContext::new();
        let question = HelpOverlay::new(&AppMode::Question, &ctx);
        let preview = HelpOverlay::new(&AppMode::Preview, &ctx);
        // The question screen lists the step jumps, so it is longer
        assert!(question.line_count() > preview.line_count());
    }

    #[test]
    fn test_overlay_height_follows_content() {
        let ctx = KeybindingContext::new();
        let overlay = HelpOverlay::new(&AppMode::Preview, &ctx);

        let tall = Rect::new(0, 0, 100, 80);
        let area = overlay.area(tall);
        assert_eq!(area.height as usize, overlay.line_count() + 2);
        assert_eq!(area.width, 60);
        assert!(area.bottom() <= tall.bottom());

        let short = Rect::new(0, 0, 100, 10);
        let area = overlay.area(short);
        assert_eq!(area.height, 10);
        assert_eq!(area.y, 0);
    }
}
