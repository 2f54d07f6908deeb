//! TUI theme definitions.

use ratatui::style::{Color, Modifier, Style};

/// Theme configuration for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,

    // Base colors
    pub background: Color,
    pub foreground: Color,
    pub dim: Color,
    pub accent: Color,
    pub highlight: Color,
    pub error: Color,
    pub warning: Color,
    pub success: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            name: "dark".to_string(),

            background: Color::Rgb(26, 18, 38),
            foreground: Color::Rgb(232, 226, 242),
            dim: Color::Rgb(140, 132, 160),
            accent: Color::Rgb(192, 132, 252),
            highlight: Color::Rgb(236, 72, 153),
            error: Color::Rgb(244, 135, 135),
            warning: Color::Rgb(255, 200, 100),
            success: Color::Rgb(134, 239, 172),
        }
    }

    /// Light theme
    pub fn light() -> Self {
        Self {
            name: "light".to_string(),

            background: Color::Rgb(250, 247, 252),
            foreground: Color::Rgb(45, 35, 60),
            dim: Color::Rgb(145, 138, 158),
            accent: Color::Rgb(147, 51, 234),
            highlight: Color::Rgb(219, 39, 119),
            error: Color::Rgb(200, 50, 50),
            warning: Color::Rgb(190, 140, 0),
            success: Color::Rgb(22, 150, 80),
        }
    }

    /// Get style for text
    pub fn text(&self) -> Style {
        Style::default().fg(self.foreground)
    }

    /// Get style for dimmed text
    pub fn text_dim(&self) -> Style {
        Style::default().fg(self.dim)
    }

    /// Get style for accent text
    pub fn text_accent(&self) -> Style {
        Style::default().fg(self.accent)
    }

    /// Get style for block borders
    pub fn border(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.accent)
        } else {
            Style::default().fg(self.dim)
        }
    }

    /// Get style for the selected tab or option
    pub fn selected(&self) -> Style {
        Style::default()
            .fg(self.background)
            .bg(self.highlight)
            .add_modifier(Modifier::BOLD)
    }
}
