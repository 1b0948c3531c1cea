//! Request form rendering

use super::field_renderer::{draw_error_line, draw_field};
use crate::app::App;
use crate::catalog;
use crate::state::{Field, FOCUS_COVERAGE, FOCUS_NOTES, FOCUS_SUBMIT};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Height of one bordered field row plus its inline error line
const FIELD_ROW_HEIGHT: u16 = 4;

/// Draw the coverage request form
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(format!(" {} ", catalog::DOC_TITLE))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FIELD_ROW_HEIGHT), // committee / applicant
            Constraint::Length(FIELD_ROW_HEIGHT), // phone / event name
            Constraint::Length(FIELD_ROW_HEIGHT), // date / start time
            Constraint::Length(FIELD_ROW_HEIGHT), // end time / location
            Constraint::Length(4),                // coverage checkbox group
            Constraint::Min(4),                   // notes
            Constraint::Length(3),                // submit row
        ])
        .split(inner);

    // Scalar fields, two per row; the pairs follow the focus order
    let pairs: [(usize, usize); 4] = [(0, 1), (2, 3), (4, 5), (6, 7)];
    for (row, (left, right)) in pairs.iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[row]);
        for (col, focus) in [(0usize, *left), (1usize, *right)] {
            if let Some(field) = app.state.form.field_at(focus) {
                let error = app
                    .state
                    .validation_errors
                    .get(&field.field)
                    .map(|s| s.as_str());
                draw_field(
                    frame,
                    cols[col],
                    field,
                    app.state.form.active_focus == focus,
                    error,
                );
            }
        }
    }

    draw_coverage_group(frame, rows[4], app);

    if let Some(notes) = app.state.form.field_at(FOCUS_NOTES) {
        draw_field(
            frame,
            rows[5],
            notes,
            app.state.form.active_focus == FOCUS_NOTES,
            None,
        );
    }

    draw_submit_row(frame, rows[6], app);
}

/// The coverage-type checkbox group, one line of toggles
fn draw_coverage_group(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let is_active = form.active_focus == FOCUS_COVERAGE;

    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut spans: Vec<Span> = Vec::new();
    for (i, tag) in catalog::COVERAGE_TYPES.iter().enumerate() {
        let mark = if form.coverage_contains(tag) {
            "[x]"
        } else {
            "[ ]"
        };
        let tag_style = if is_active && i == form.coverage_cursor {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else if form.coverage_contains(tag) {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!("{mark} {tag}"), tag_style));
        spans.push(Span::raw("   "));
    }

    let block = Block::default()
        .title(format!(" {} ", Field::CoverageTypes.label()))
        .borders(Borders::ALL)
        .border_style(style);
    let group_area = Rect {
        height: area.height.saturating_sub(1),
        ..area
    };
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), group_area);

    if let Some(message) = app.state.validation_errors.get(&Field::CoverageTypes) {
        draw_error_line(frame, area, message);
    }
}

/// The submit button row
fn draw_submit_row(frame: &mut Frame, area: Rect, app: &App) {
    let is_active = app.state.form.active_focus == FOCUS_SUBMIT;
    let busy = app.state.phase.is_busy();

    let label = if busy {
        "جاري الإنشاء والإرسال..."
    } else {
        "إرسال الطلب وتنزيل نسخة"
    };

    let style = if busy {
        Style::default().fg(Color::DarkGray)
    } else if is_active {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Green)
    };

    let button = Paragraph::new(Line::from(Span::styled(format!("  {label}  "), style)))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(if is_active {
                    Style::default().fg(Color::Green)
                } else {
                    Style::default().fg(Color::DarkGray)
                }),
        );
    frame.render_widget(button, area);
}
