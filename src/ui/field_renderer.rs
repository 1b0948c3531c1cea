//! Field rendering utilities for the request form

use crate::state::{FieldValue, FormField};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw a bordered form field. The bottom line of `area` is reserved for
/// the inline validation error, when there is one.
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    is_active: bool,
    error: Option<&str>,
) {
    let field_area = Rect {
        height: area.height.saturating_sub(1),
        ..area
    };

    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let display_value = field.display_value();
    let is_choice = matches!(field.value, FieldValue::Choice { .. });

    let content = if display_value.is_empty() && !is_active {
        Paragraph::new(Line::from(Span::styled(
            field.field.placeholder(),
            Style::default().fg(Color::DarkGray),
        )))
    } else if field.is_multiline {
        let mut lines: Vec<Line> = display_value
            .lines()
            .map(|l| Line::from(l.to_string()))
            .collect();
        if is_active {
            if let Some(last) = lines.last_mut() {
                last.spans
                    .push(Span::styled("▌", Style::default().fg(Color::Cyan)));
            } else {
                lines.push(Line::from(Span::styled(
                    "▌",
                    Style::default().fg(Color::Cyan),
                )));
            }
        }
        Paragraph::new(lines)
    } else {
        let cursor = if is_active && !is_choice { "▌" } else { "" };
        let hint = if is_active && is_choice { " ◂ ▸" } else { "" };
        Paragraph::new(Line::from(vec![
            Span::styled(display_value, style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
            Span::styled(hint, Style::default().fg(Color::DarkGray)),
        ]))
    };

    let block = Block::default()
        .title(format!(" {} ", field.label()))
        .borders(Borders::ALL)
        .border_style(style);

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), field_area);

    if let Some(message) = error {
        draw_error_line(frame, area, message);
    }
}

/// Draw an inline validation error on the bottom line of `area`
pub fn draw_error_line(frame: &mut Frame, area: Rect, message: &str) {
    if area.height < 2 {
        return;
    }
    let error_area = Rect {
        y: area.y + area.height - 1,
        height: 1,
        ..area
    };
    let error = Paragraph::new(Line::from(Span::styled(
        format!("✗ {message}"),
        Style::default().fg(Color::Red),
    )));
    frame.render_widget(error, error_area);
}
