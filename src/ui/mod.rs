//! UI module for rendering the TUI

pub mod components;
mod field_renderer;
mod form;
mod layout;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let areas = layout::create_layout(frame.area());

    layout::draw_header(frame, areas.header);
    layout::draw_notice(frame, areas.notice);
    form::draw(frame, areas.form, app);
    layout::draw_status_bar(frame, areas.status, app);

    // Modal overlays, topmost last
    if let Some(dialog) = &app.state.channel_dialog {
        components::dialog::render_channel_dialog(frame, dialog);
    }
    if let Some(receipt) = &app.state.success {
        components::dialog::render_success_dialog(frame, receipt);
    }
    if let Some(notice) = app.state.current_error() {
        components::dialog::render_error_dialog(frame, notice);
    }
}
