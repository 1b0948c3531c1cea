//! Screen chrome: header, advisory notice, status bar

use crate::app::App;
use crate::catalog;
use crate::platform;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// The four vertical regions of the screen
pub struct ScreenAreas {
    pub header: Rect,
    pub notice: Rect,
    pub form: Rect,
    pub status: Rect,
}

pub fn create_layout(area: Rect) -> ScreenAreas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(4), // Advisory notice
            Constraint::Min(12),   // Form
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    ScreenAreas {
        header: chunks[0],
        notice: chunks[1],
        form: chunks[2],
        status: chunks[3],
    }
}

pub fn draw_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            catalog::ORG_NAME,
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            catalog::COMMITTEE_TITLE,
            Style::default().fg(Color::Gray),
        )),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, area);
}

pub fn draw_notice(frame: &mut Frame, area: Rect) {
    let notice = Paragraph::new(format!("🔔 {}", catalog::ADVISORY_NOTICE))
        .style(Style::default().fg(Color::Green))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green)),
        );
    frame.render_widget(notice, area);
}

pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![
        Span::styled("Tab", Style::default().fg(Color::Cyan)),
        Span::raw(" التالي  "),
        Span::styled("Space", Style::default().fg(Color::Cyan)),
        Span::raw(" تحديد  "),
        Span::styled(platform::SUBMIT_SHORTCUT, Style::default().fg(Color::Cyan)),
        Span::raw(" إرسال  "),
        Span::styled("Ctrl+C", Style::default().fg(Color::Cyan)),
        Span::raw(" خروج"),
    ];

    if app.state.phase.is_busy() {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format!("⏳ {}", app.state.phase.label()),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ));
    } else if let Some(message) = &app.state.status_message {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            message.clone(),
            Style::default().fg(Color::Yellow),
        ));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(status, area);
}
