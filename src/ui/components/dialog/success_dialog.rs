//! Success notice dialog

use super::base::{render_dialog, wrap_text, DialogConfig};
use crate::outbound::{DeliveryReceipt, OutboundChannel};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    Frame,
};

/// Render the confirmation notice; acknowledging it resets the form
pub fn render_success_dialog(frame: &mut Frame, receipt: &DeliveryReceipt) {
    let mut body: Vec<Line> = Vec::new();

    body.push(Line::from(Span::styled(
        format!("تم حفظ نسخة PDF في: {}", receipt.saved_to.display()),
        Style::default().fg(Color::White),
    )));
    body.push(Line::from(""));

    let instruction = match receipt.channel {
        OutboundChannel::Messaging => {
            "سيتم الآن فتح واتساب، يرجى إرفاق الملف الذي تم تنزيله لإكمال عملية الإرسال."
        }
        OutboundChannel::Email => {
            "تم إرسال الطلب عبر البريد الإلكتروني مع الملف المرفق."
        }
    };
    for line in wrap_text(instruction, 48) {
        body.push(Line::from(Span::styled(
            line,
            Style::default().fg(Color::Yellow),
        )));
    }

    let hint = vec![
        Span::raw("اضغط "),
        Span::styled(
            "Enter",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" — حسنًا، فهمت"),
    ];

    render_dialog(
        frame,
        DialogConfig {
            title: "✓ تم إنشاء الطلب بنجاح!",
            accent: Color::Green,
            body,
            hint,
            max_width: 64,
        },
    );
}
