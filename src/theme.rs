//! Centralized theme and styling for the TUI
//!
//! Single source of truth for colors, styles and layout constants, so the
//! screens never hardcode a color.
//!
//! # Usage
//! ```rust
//! use syllabus_builder::theme::{Colors, Styles, Theme};
//! use ratatui::style::Style;
//!
//! let style = Style::default().fg(Colors::PRIMARY);
//! let title_style = Styles::title();
//! let step_style = Theme::step_style(true, false);
//! ```

use ratatui::style::{Color, Modifier, Style};

// =============================================================================
// COLOR PALETTE
// =============================================================================

/// Core color palette for the application
pub struct Colors;

impl Colors {
    // -------------------------------------------------------------------------
    // Base Colors (backgrounds, foregrounds)
    // -------------------------------------------------------------------------

    /// Primary dark background - used for panels and the help window
    pub const BG_PRIMARY: Color = Color::Rgb(20, 20, 30);

    /// Default foreground text color
    pub const FG_PRIMARY: Color = Color::White;

    /// Secondary/muted text color
    pub const FG_SECONDARY: Color = Color::Gray;

    /// Disabled/inactive text color
    pub const FG_MUTED: Color = Color::DarkGray;

    // -------------------------------------------------------------------------
    // Accent Colors
    // -------------------------------------------------------------------------

    /// Primary accent color - borders, titles, highlights
    pub const PRIMARY: Color = Color::Cyan;

    /// Secondary accent color - emphasis
    pub const SECONDARY: Color = Color::Yellow;

    /// Success/positive feedback
    pub const SUCCESS: Color = Color::Green;

    /// Warning/caution feedback
    pub const WARNING: Color = Color::Yellow;

    // -------------------------------------------------------------------------
    // UI Element Colors
    // -------------------------------------------------------------------------

    /// Active border color
    pub const BORDER_ACTIVE: Color = Color::Cyan;

    /// Inactive/unfocused border color
    pub const BORDER_INACTIVE: Color = Color::DarkGray;

    /// Highlighted option background
    pub const SELECTED_BG: Color = Color::Yellow;

    /// Highlighted option text (for contrast on yellow bg)
    pub const SELECTED_FG: Color = Color::Black;

    /// Progress gauge fill
    pub const PROGRESS: Color = Color::Green;

    /// Navigation hint text
    pub const NAV_HINT: Color = Color::DarkGray;

    // -------------------------------------------------------------------------
    // Step indicator colors
    // -------------------------------------------------------------------------

    /// Current step
    pub const STEP_ACTIVE: Color = Color::Yellow;

    /// Step with an answer
    pub const STEP_COMPLETE: Color = Color::Green;

    /// Step not answered yet
    pub const STEP_PENDING: Color = Color::Gray;
}

// =============================================================================
// PRE-BUILT STYLES
// =============================================================================

/// Pre-built styles for common UI elements
pub struct Styles;

impl Styles {
    /// Default text
    pub fn text() -> Style {
        Style::default().fg(Colors::FG_PRIMARY)
    }

    /// Muted text
    pub fn text_muted() -> Style {
        Style::default().fg(Colors::FG_MUTED)
    }

    /// Screen titles
    pub fn title() -> Style {
        Style::default()
            .fg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Active panel border
    pub fn border_active() -> Style {
        Style::default().fg(Colors::BORDER_ACTIVE)
    }

    /// Inactive panel border
    pub fn border_inactive() -> Style {
        Style::default().fg(Colors::BORDER_INACTIVE)
    }

    /// Option under the cursor
    pub fn selected() -> Style {
        Style::default()
            .fg(Colors::SELECTED_FG)
            .bg(Colors::SELECTED_BG)
            .add_modifier(Modifier::BOLD)
    }

    /// Option that is chosen/checked but not under the cursor
    pub fn chosen() -> Style {
        Style::default()
            .fg(Colors::SUCCESS)
            .add_modifier(Modifier::BOLD)
    }

    /// Option that is neither chosen nor highlighted
    pub fn unselected() -> Style {
        Style::default().fg(Colors::FG_SECONDARY)
    }

    /// Progress gauge
    pub fn progress() -> Style {
        Style::default().fg(Colors::PROGRESS).bg(Colors::BG_PRIMARY)
    }

    /// Key label in the navigation bar
    pub fn nav_key() -> Style {
        Style::default()
            .fg(Colors::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Description in the navigation bar
    pub fn nav_hint() -> Style {
        Style::default().fg(Colors::NAV_HINT)
    }
}

// =============================================================================
// SEMANTIC HELPERS
// =============================================================================

/// Semantic style helpers
pub struct Theme;

impl Theme {
    /// Style of a step indicator
    pub fn step_style(answered: bool, active: bool) -> Style {
        if active {
            Style::default()
                .fg(Colors::STEP_ACTIVE)
                .add_modifier(Modifier::BOLD)
        } else if answered {
            Style::default().fg(Colors::STEP_COMPLETE)
        } else {
            Style::default().fg(Colors::STEP_PENDING)
        }
    }
}

// =============================================================================
// LAYOUT CONSTANTS
// =============================================================================

/// Layout constants
pub struct UiConstants;

impl UiConstants {
    /// Navigation bar height
    pub const NAV_BAR_HEIGHT: u16 = 1;

    /// Header height (title + step indicator + gauge)
    pub const HEADER_HEIGHT: u16 = 5;

    /// Lines scrolled per key press in the preview
    pub const SCROLL_STEP: u16 = 1;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_style_priority() {
        // Active wins over answered
        assert_eq!(Theme::step_style(true, true).fg, Some(Colors::STEP_ACTIVE));
        assert_eq!(Theme::step_style(true, false).fg, Some(Colors::STEP_COMPLETE));
        assert_eq!(Theme::step_style(false, false).fg, Some(Colors::STEP_PENDING));
    }

    #[test]
    fn test_selected_contrasts() {
        let style = Styles::selected();
        assert_ne!(style.fg, style.bg);
    }
}
