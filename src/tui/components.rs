//! Reusable TUI components.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use super::theme::Theme;
use crate::content::{Mode, Tone};

/// Brand line shown in the header
pub const BRAND_TAGLINE: &str = "Get the likes. Get the following. Get monetized.";

/// Header component showing the app name, tagline and model
pub struct Header<'a> {
    pub model: &'a str,
    pub theme: &'a Theme,
}

impl<'a> Widget for Header<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(10),
                Constraint::Min(20),
                Constraint::Length(30),
            ])
            .split(area);

        // App name
        let title = Paragraph::new("Scoopz")
            .style(self.theme.text_accent().add_modifier(Modifier::BOLD))
            .alignment(Alignment::Left);
        title.render(chunks[0], buf);

        // Tagline
        let tagline = Paragraph::new(BRAND_TAGLINE)
            .style(self.theme.text_dim())
            .alignment(Alignment::Center);
        tagline.render(chunks[1], buf);

        // Model
        let model = Paragraph::new(self.model)
            .style(self.theme.text_dim())
            .alignment(Alignment::Right);
        model.render(chunks[2], buf);
    }
}

/// Tab row for the content modes
pub struct ModeTabs<'a> {
    pub selected: Mode,
    pub theme: &'a Theme,
}

impl<'a> Widget for ModeTabs<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans: Vec<Span> = Vec::new();

        for mode in Mode::all() {
            let style = if mode == self.selected {
                self.theme.selected()
            } else {
                self.theme.text_dim()
            };
            spans.push(Span::styled(format!(" {} ", mode.label()), style));
            spans.push(Span::raw(" "));
        }

        let tabs = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        tabs.render(area, buf);
    }
}

/// Bordered single-line text input
pub struct InputBox<'a> {
    pub label: &'a str,
    pub content: &'a str,
    pub placeholder: &'a str,
    pub focused: bool,
    pub theme: &'a Theme,
}

impl<'a> Widget for InputBox<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border(self.focused))
            .title(format!(" {} ", self.label));

        let inner = block.inner(area);
        block.render(area, buf);

        let display_text = if self.content.is_empty() {
            Span::styled(self.placeholder, self.theme.text_dim())
        } else {
            Span::styled(self.content, self.theme.text())
        };

        let paragraph = Paragraph::new(display_text);
        paragraph.render(inner, buf);
    }
}

/// Read-only box showing the selected tone
pub struct ToneSelect<'a> {
    pub tone: Tone,
    pub theme: &'a Theme,
}

impl<'a> Widget for ToneSelect<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border(false))
            .title(" Tone (^T) ");

        let inner = block.inner(area);
        block.render(area, buf);

        let paragraph = Paragraph::new(self.tone.label()).style(self.theme.text_accent());
        paragraph.render(inner, buf);
    }
}

/// Loading spinner component
pub struct Spinner<'a> {
    pub message: &'a str,
    pub frame: usize,
    pub theme: &'a Theme,
}

impl<'a> Widget for Spinner<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let frames = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
        let frame = frames[self.frame % frames.len()];

        let text = format!("{} {}", frame, self.message);
        let paragraph = Paragraph::new(text)
            .style(self.theme.text_accent())
            .alignment(Alignment::Left);
        paragraph.render(area, buf);
    }
}

/// Status bar component
pub struct StatusBar<'a> {
    pub left: &'a str,
    pub center: &'a str,
    pub right: &'a str,
    pub theme: &'a Theme,
}

impl<'a> Widget for StatusBar<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(20),
                Constraint::Percentage(60),
                Constraint::Percentage(20),
            ])
            .split(area);

        let left = Paragraph::new(self.left)
            .style(self.theme.text_dim())
            .alignment(Alignment::Left);
        left.render(chunks[0], buf);

        let center = Paragraph::new(self.center)
            .style(self.theme.text_dim())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        center.render(chunks[1], buf);

        let right = Paragraph::new(self.right)
            .style(self.theme.text_dim())
            .alignment(Alignment::Right);
        right.render(chunks[2], buf);
    }
}
