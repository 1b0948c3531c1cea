//! Outbound channel choice dialog

use super::base::{render_dialog, DialogConfig};
use crate::state::ChannelDialogState;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    Frame,
};

/// Render the channel-choice dialog shown after validation succeeds
pub fn render_channel_dialog(frame: &mut Frame, dialog: &ChannelDialogState) {
    let rows = [
        (0, "واتساب (رابط مباشر + نسخة محلية)", true),
        (1, "البريد الإلكتروني (ملف PDF مرفق)", dialog.email_enabled),
    ];

    let mut body: Vec<Line> = vec![Line::from(Span::styled(
        "كيف تريد إرسال الطلب؟",
        Style::default().fg(Color::White),
    ))];
    body.push(Line::from(""));

    for (index, label, enabled) in rows {
        let is_selected = dialog.selected == index;
        let prefix = if is_selected { "▸ " } else { "  " };
        let text = if enabled {
            label.to_string()
        } else {
            format!("{label} — غير مفعل")
        };
        let style = if is_selected && enabled {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD)
        } else if is_selected {
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        body.push(Line::from(Span::styled(format!("{prefix}{text}"), style)));
    }

    let hint = vec![
        Span::styled("↑↓", Style::default().fg(Color::Cyan)),
        Span::raw(" اختيار  "),
        Span::styled("Enter", Style::default().fg(Color::Cyan)),
        Span::raw(" تأكيد  "),
        Span::styled("Esc", Style::default().fg(Color::Cyan)),
        Span::raw(" إلغاء"),
    ];

    render_dialog(
        frame,
        DialogConfig {
            title: "إرسال الطلب",
            accent: Color::Green,
            body,
            hint,
            max_width: 56,
        },
    );
}
