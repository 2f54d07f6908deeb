//! Main UI layout and rendering.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::app::App;
use super::components::{Header, InputBox, ModeTabs, Spinner, StatusBar, ToneSelect};
use super::theme::Theme;
use super::types::{Focus, KeyDialog, NoticeKind};
use crate::content::{CalendarDay, ContentPackage, GeneratedContent};

/// Main UI rendering function
pub fn render(frame: &mut Frame, app: &App) {
    let theme = &app.theme;
    let size = frame.area();

    // Main layout: Header, Tabs, Inputs, Results, Status
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Length(1), // Mode tabs
            Constraint::Length(3), // Inputs
            Constraint::Min(8),    // Results
            Constraint::Length(1), // Status bar
        ])
        .split(size);

    // Render header
    let header = Header {
        model: &app.model_display,
        theme,
    };
    frame.render_widget(header, chunks[0]);

    // Render mode tabs
    let tabs = ModeTabs {
        selected: app.mode,
        theme,
    };
    frame.render_widget(tabs, chunks[1]);

    render_inputs(frame, app, chunks[2]);
    render_results(frame, app, chunks[3]);

    // Render status bar
    let left = if app.is_processing {
        "Generating..."
    } else {
        "Ready"
    };
    let right = format!("© {} Scoopz", app.footer_year);
    let status = StatusBar {
        left,
        center: app.current_tagline(),
        right: &right,
        theme,
    };
    frame.render_widget(status, chunks[4]);

    // Show spinner over the results area while a generation runs
    if app.is_processing {
        let spinner_area = Rect::new(
            chunks[3].x + 2,
            chunks[3].y + chunks[3].height.saturating_sub(2),
            chunks[3].width.saturating_sub(4),
            1,
        );
        let spinner = Spinner {
            message: "Generating...",
            frame: app.spinner_frame,
            theme,
        };
        frame.render_widget(spinner, spinner_area);
    }

    // Render key dialog if open
    if let Some(dialog) = &app.key_dialog {
        render_key_dialog(frame, dialog, theme, size);
    }
}

/// Render the niche, topic and tone input row
fn render_inputs(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(38),
            Constraint::Percentage(38),
            Constraint::Percentage(24),
        ])
        .split(area);

    let niche = InputBox {
        label: "Niche",
        content: &app.niche,
        placeholder: "Your content niche (e.g. fitness)",
        focused: app.focus == Focus::Niche,
        theme: &app.theme,
    };
    frame.render_widget(niche, chunks[0]);

    let topic = InputBox {
        label: "Topic",
        content: &app.topic,
        placeholder: "Specific topic (optional)",
        focused: app.focus == Focus::Topic,
        theme: &app.theme,
    };
    frame.render_widget(topic, chunks[1]);

    let tone = ToneSelect {
        tone: app.tone,
        theme: &app.theme,
    };
    frame.render_widget(tone, chunks[2]);
}

/// Render the results pane
fn render_results(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let title = if app.copied_recently() {
        format!(" {}  ✓ Copied! ", app.mode.label())
    } else {
        format!(" {} ", app.mode.label())
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border(false))
        .title(title);

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();

    if let Some(notice) = &app.notice {
        let style = match notice.kind {
            NoticeKind::Info => theme.text_dim(),
            NoticeKind::Warning => Style::default().fg(theme.warning),
            NoticeKind::Error => Style::default().fg(theme.error),
        };
        lines.push(Line::from(Span::styled(notice.text.clone(), style)));
        lines.push(Line::default());
    }

    match &app.result {
        Some(GeneratedContent::Text(text)) => {
            for line in text.lines() {
                lines.push(Line::from(Span::styled(line.to_string(), theme.text())));
            }
        }
        Some(GeneratedContent::Package(package)) => {
            lines.extend(package_lines(package, theme));
        }
        Some(GeneratedContent::Calendar(days)) => {
            lines.extend(calendar_lines(days, theme));
        }
        None => {
            if app.notice.is_none() && !app.is_processing {
                let welcome = format!(
                    "Welcome to Scoopz!\n\n\
                     Model: {}\n\n\
                     Tips:\n\
                     • Type a niche (and a topic for packages), then press Enter to generate\n\
                     • Up/Down switch the content mode, Ctrl+T cycles the tone\n\
                     • Ctrl+Y copies the result, PgUp/PgDn scroll, Ctrl+C quits",
                    app.model_display
                );
                for line in welcome.lines() {
                    lines.push(Line::from(Span::styled(line.to_string(), theme.text_dim())));
                }
            }
        }
    }

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((app.result_scroll, 0));
    frame.render_widget(paragraph, inner);
}

/// Lines for a structured content package
fn package_lines(package: &ContentPackage, theme: &Theme) -> Vec<Line<'static>> {
    let header_style = theme.text_accent().add_modifier(Modifier::BOLD);
    let mut lines: Vec<Line> = Vec::new();

    let mut push_section = |title: &str, body: &str| {
        lines.push(Line::from(Span::styled(title.to_string(), header_style)));
        for line in body.lines() {
            lines.push(Line::from(Span::styled(line.to_string(), theme.text())));
        }
        lines.push(Line::default());
    };

    if let Some(hook) = &package.hook {
        push_section("HOOK", hook);
    }
    if let Some(script) = &package.script {
        push_section("SCRIPT", script);
    }
    if let Some(caption) = &package.caption {
        push_section("CAPTION", caption);
    }
    if !package.hashtags.is_empty() {
        push_section("HASHTAGS", &package.hashtag_line());
    }
    if let Some(tip) = &package.posting_tip {
        push_section("POSTING TIP", tip);
    }
    if let Some(why) = &package.why_it_works {
        push_section("WHY IT WORKS", why);
    }
    if let Some(format) = &package.format_recommendation {
        push_section("FORMAT", &format.to_plain_text());
    }

    lines
}

/// Lines for a seven-day content calendar
fn calendar_lines(days: &[CalendarDay], theme: &Theme) -> Vec<Line<'static>> {
    let mut lines: Vec<Line> = Vec::new();

    for day in days {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<10}", day.day),
                theme.text_accent().add_modifier(Modifier::BOLD),
            ),
            Span::styled(day.content_type.clone(), theme.text_dim()),
        ]));
        lines.push(Line::from(Span::styled(
            format!("  {}", day.idea),
            theme.text(),
        )));
        if !day.hook.is_empty() {
            lines.push(Line::from(Span::styled(
                format!("  Hook: {}", day.hook),
                theme.text_dim(),
            )));
        }
        lines.push(Line::default());
    }

    lines
}

/// Render the API key entry dialog as a centered overlay
fn render_key_dialog(frame: &mut Frame, dialog: &KeyDialog, theme: &Theme, area: Rect) {
    let width = area.width.min(64).max(40);
    let height = area.height.min(11).max(8);
    let x = (area.width.saturating_sub(width)) / 2;
    let y = (area.height.saturating_sub(height)) / 2;

    let dialog_area = Rect::new(x, y, width, height);

    // Clear the area behind the dialog
    frame.render_widget(Clear, dialog_area);

    let block = Block::default()
        .title(format!(" Connect {} ", dialog.provider_name))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent))
        .style(Style::default().bg(theme.background));

    let inner = block.inner(dialog_area);
    frame.render_widget(block, dialog_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Message
            Constraint::Length(3), // Input
            Constraint::Min(1),    // Storage note
            Constraint::Length(1), // Help
        ])
        .split(inner);

    if let Some(message) = &dialog.message {
        let msg = Paragraph::new(message.as_str())
            .style(Style::default().fg(theme.warning))
            .wrap(Wrap { trim: true });
        frame.render_widget(msg, chunks[0]);
    }

    // Input field with the key masked
    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent))
        .title(format!(" API Key ({}) ", dialog.env_hint));

    let inner_input = input_block.inner(chunks[1]);
    frame.render_widget(input_block, chunks[1]);

    let display_text = if dialog.input_value.is_empty() {
        Span::styled("Paste your key...", theme.text_dim())
    } else {
        Span::styled(dialog.masked(), theme.text())
    };
    frame.render_widget(Paragraph::new(display_text), inner_input);

    let note = Paragraph::new("Keys are stored in plain text in auth.json; prefer the environment variable for shared machines.")
        .style(theme.text_dim())
        .wrap(Wrap { trim: true });
    frame.render_widget(note, chunks[2]);

    let help = Paragraph::new("Enter: Save | Esc: Cancel")
        .style(theme.text_dim())
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}
