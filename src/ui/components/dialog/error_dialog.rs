//! Error and notice dialog component

use super::base::{render_dialog, wrap_text, DialogConfig};
use crate::state::ErrorNotice;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    Frame,
};

/// Render a blocking notice overlay centered on the screen.
/// Benign notices (cancelled sign-in) render yellow instead of red.
pub fn render_error_dialog(frame: &mut Frame, notice: &ErrorNotice) {
    let accent = if notice.benign {
        Color::Yellow
    } else {
        Color::Red
    };

    let body = wrap_text(&notice.message, 52)
        .into_iter()
        .map(Line::from)
        .collect();

    let hint = vec![
        Span::raw("اضغط "),
        Span::styled(
            "Enter",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" أو "),
        Span::styled(
            "Esc",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" للإغلاق"),
    ];

    render_dialog(
        frame,
        DialogConfig {
            title: &notice.title,
            accent,
            body,
            hint,
            max_width: 60,
        },
    );
}
