//! Application state definitions

use super::form::RequestForm;
use crate::outbound::{DeliveryReceipt, OutboundChannel};
use crate::validate::ValidationErrors;

/// Where the current submission attempt stands.
/// Succeeded and Failed are both terminal for the attempt; the user's
/// acknowledgment returns the desk to Idle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Validating,
    ChoicePending,
    Rendering,
    Dispatching,
    Succeeded,
    Failed,
}

impl SubmitPhase {
    /// Whether the loading indicator should be shown
    pub fn is_busy(&self) -> bool {
        matches!(self, Self::Rendering | Self::Dispatching)
    }

    /// Status-line label while a submission is in flight
    pub fn label(&self) -> &'static str {
        match self {
            Self::Rendering => "جاري إنشاء ملف PDF...",
            Self::Dispatching => "جاري الإرسال...",
            _ => "",
        }
    }
}

/// Channel-choice dialog state
#[derive(Debug, Clone)]
pub struct ChannelDialogState {
    /// Which option row is highlighted (0 = messaging, 1 = email)
    pub selected: usize,
    /// Whether the email option can actually be chosen
    pub email_enabled: bool,
}

impl ChannelDialogState {
    pub fn new(email_enabled: bool) -> Self {
        Self {
            selected: 0,
            email_enabled,
        }
    }

    pub fn next(&mut self) {
        self.selected = (self.selected + 1) % 2;
    }

    pub fn prev(&mut self) {
        self.selected = if self.selected == 0 { 1 } else { 0 };
    }

    /// The channel under the highlight
    pub fn highlighted(&self) -> OutboundChannel {
        if self.selected == 0 {
            OutboundChannel::Messaging
        } else {
            OutboundChannel::Email
        }
    }
}

/// A blocking user-visible notice
#[derive(Debug, Clone)]
pub struct ErrorNotice {
    pub title: String,
    pub message: String,
    /// Benign notices (e.g. cancelled sign-in) render calmer than failures
    pub benign: bool,
}

/// Top-level application state
#[derive(Debug, Default)]
pub struct AppState {
    /// The live form
    pub form: RequestForm,
    /// Result of the most recent validation attempt
    pub validation_errors: ValidationErrors,
    /// Current submission phase
    pub phase: SubmitPhase,
    /// Channel-choice dialog, when open
    pub channel_dialog: Option<ChannelDialogState>,
    /// Receipt shown in the success notice until acknowledged
    pub success: Option<DeliveryReceipt>,
    /// Queue of blocking notices, oldest first
    error_queue: Vec<ErrorNotice>,
    /// Re-entrancy guard: a submission pipeline is currently running
    pub submit_in_flight: bool,
    /// Transient status-line message
    pub status_message: Option<String>,
}

impl AppState {
    /// Push a blocking error notice for display
    pub fn push_error(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.error_queue.push(ErrorNotice {
            title: title.into(),
            message: message.into(),
            benign: false,
        });
    }

    /// Push a benign notice (calm styling, same dismissal flow)
    pub fn push_notice(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.error_queue.push(ErrorNotice {
            title: title.into(),
            message: message.into(),
            benign: true,
        });
    }

    pub fn has_errors(&self) -> bool {
        !self.error_queue.is_empty()
    }

    pub fn current_error(&self) -> Option<&ErrorNotice> {
        self.error_queue.first()
    }

    pub fn dismiss_error(&mut self) {
        if !self.error_queue.is_empty() {
            self.error_queue.remove(0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_phase_is_idle() {
        let state = AppState::default();
        assert_eq!(state.phase, SubmitPhase::Idle);
        assert!(!state.submit_in_flight);
    }

    #[test]
    fn test_busy_phases() {
        assert!(SubmitPhase::Rendering.is_busy());
        assert!(SubmitPhase::Dispatching.is_busy());
        assert!(!SubmitPhase::Idle.is_busy());
        assert!(!SubmitPhase::ChoicePending.is_busy());
        assert!(!SubmitPhase::Succeeded.is_busy());
        assert!(!SubmitPhase::Failed.is_busy());
    }

    #[test]
    fn test_error_queue_order() {
        let mut state = AppState::default();
        assert!(!state.has_errors());

        state.push_error("خطأ", "الأول");
        state.push_error("خطأ", "الثاني");
        assert_eq!(state.current_error().unwrap().message, "الأول");

        state.dismiss_error();
        assert_eq!(state.current_error().unwrap().message, "الثاني");

        state.dismiss_error();
        assert!(!state.has_errors());
        state.dismiss_error(); // no panic on empty queue
    }

    #[test]
    fn test_notice_is_benign() {
        let mut state = AppState::default();
        state.push_notice("تنبيه", "تم الإلغاء");
        assert!(state.current_error().unwrap().benign);
    }

    #[test]
    fn test_channel_dialog_toggles() {
        let mut dialog = ChannelDialogState::new(true);
        assert_eq!(dialog.highlighted(), OutboundChannel::Messaging);
        dialog.next();
        assert_eq!(dialog.highlighted(), OutboundChannel::Email);
        dialog.next();
        assert_eq!(dialog.highlighted(), OutboundChannel::Messaging);
        dialog.prev();
        assert_eq!(dialog.highlighted(), OutboundChannel::Email);
    }
}
