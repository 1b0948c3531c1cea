//! Modal dialog components

mod base;
mod channel_dialog;
mod error_dialog;
mod success_dialog;

pub use channel_dialog::render_channel_dialog;
pub use error_dialog::render_error_dialog;
pub use success_dialog::render_success_dialog;
