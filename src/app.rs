//! Application state and core logic
//!
//! Key routing is modal-first: a blocking notice swallows everything until
//! dismissed, then the success notice, then the channel dialog, then the
//! form itself. The submission sequence lives here as well:
//! validate → channel choice → render → dispatch → confirmation, with the
//! form preserved on every failure path.

use crate::config::AppConfig;
use crate::outbound::{DeliveryReceipt, OutboundChannel, OutboundError};
use crate::state::{
    AppState, ChannelDialogState, CoverageRequest, SubmitPhase, FOCUS_COVERAGE, FOCUS_NOTES,
    FOCUS_SUBMIT,
};
use crate::submit::{SubmitError, SubmitPipeline};
use crate::validate;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Notice shown when the email channel is selected without its secrets
const EMAIL_DISABLED_MESSAGE: &str =
    "قناة البريد الإلكتروني غير مفعلة في هذا الإصدار. يرجى التواصل مع مسؤول النظام.";

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Submission pipeline with its injected collaborators
    pipeline: SubmitPipeline,
}

impl App {
    /// Create a new App instance wired to the real collaborators
    pub fn new(config: &AppConfig) -> Self {
        Self {
            state: AppState::default(),
            pipeline: SubmitPipeline::from_config(config),
        }
    }

    #[cfg(test)]
    pub fn with_pipeline(pipeline: SubmitPipeline) -> Self {
        Self {
            state: AppState::default(),
            pipeline,
        }
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle blocking notice dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
                if !self.state.has_errors() && self.state.phase == SubmitPhase::Failed {
                    self.state.phase = SubmitPhase::Idle;
                }
            }
            return Ok(());
        }

        // Success notice (modal): acknowledging it is the one place the
        // form is reset
        if self.state.success.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.acknowledge_success();
            }
            return Ok(());
        }

        // Channel choice dialog (modal)
        if self.state.channel_dialog.is_some() {
            return self.handle_channel_dialog_key(key).await;
        }

        self.handle_form_key(key).await
    }

    fn acknowledge_success(&mut self) {
        self.state.success = None;
        self.state.form.reset();
        self.state.validation_errors.clear();
        self.state.status_message = None;
        self.state.phase = SubmitPhase::Idle;
    }

    async fn handle_channel_dialog_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Up | KeyCode::BackTab => {
                if let Some(dialog) = &mut self.state.channel_dialog {
                    dialog.prev();
                }
            }
            KeyCode::Down | KeyCode::Tab => {
                if let Some(dialog) = &mut self.state.channel_dialog {
                    dialog.next();
                }
            }
            KeyCode::Esc => {
                // Dismissed: back to Idle with no side effects
                self.state.channel_dialog = None;
                self.state.phase = SubmitPhase::Idle;
            }
            KeyCode::Enter => {
                let Some(dialog) = self.state.channel_dialog.take() else {
                    return Ok(());
                };
                let channel = dialog.highlighted();
                if channel == OutboundChannel::Email && !dialog.email_enabled {
                    self.state.phase = SubmitPhase::Failed;
                    self.state.push_error("غير مفعل", EMAIL_DISABLED_MESSAGE);
                    return Ok(());
                }
                self.run_submission(channel).await;
            }
            _ => {}
        }
        Ok(())
    }

    async fn handle_form_key(&mut self, key: KeyEvent) -> Result<()> {
        // Submit shortcut works from any field
        if key.code == KeyCode::Char('s') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.on_submit();
            return Ok(());
        }

        match key.code {
            KeyCode::Tab | KeyCode::Down => self.state.form.next_focus(),
            KeyCode::BackTab | KeyCode::Up => self.state.form.prev_focus(),
            KeyCode::Left => {
                if self.state.form.active_focus == FOCUS_COVERAGE {
                    self.state.form.coverage_cursor_prev();
                } else if let Some(field) = self.state.form.active_field_mut() {
                    field.prev_option();
                }
            }
            KeyCode::Right => {
                if self.state.form.active_focus == FOCUS_COVERAGE {
                    self.state.form.coverage_cursor_next();
                } else if let Some(field) = self.state.form.active_field_mut() {
                    field.next_option();
                }
            }
            KeyCode::Char(' ') if self.state.form.active_focus == FOCUS_COVERAGE => {
                self.state.form.toggle_coverage_at_cursor();
            }
            KeyCode::Char(c) => {
                if let Some(field) = self.state.form.active_field_mut() {
                    field.push_char(c);
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = self.state.form.active_field_mut() {
                    field.pop_char();
                }
            }
            KeyCode::Enter => {
                if self.state.form.active_focus == FOCUS_SUBMIT {
                    self.on_submit();
                } else if self.state.form.active_focus == FOCUS_NOTES {
                    self.state.form.notes.push_char('\n');
                } else {
                    self.state.form.next_focus();
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// User-initiated submit: run validation and, if it passes, ask for
    /// the outbound channel
    fn on_submit(&mut self) {
        // Explicit re-entrancy guard, not just a disabled control
        if self.state.submit_in_flight {
            tracing::warn!("submission already in flight; ignoring submit");
            return;
        }

        self.state.phase = SubmitPhase::Validating;
        let errors = validate::validate(&self.state.form.snapshot());
        if !errors.is_empty() {
            tracing::info!(count = errors.len(), "validation failed");
            self.state.validation_errors = errors;
            self.state.phase = SubmitPhase::Idle;
            return;
        }

        self.state.validation_errors.clear();
        self.state.phase = SubmitPhase::ChoicePending;
        self.state.channel_dialog =
            Some(ChannelDialogState::new(self.pipeline.email_configured()));
    }

    /// Drive the render and dispatch stages for the chosen channel
    async fn run_submission(&mut self, channel: OutboundChannel) {
        if self.state.submit_in_flight {
            tracing::warn!("submission already in flight; ignoring channel choice");
            return;
        }
        self.state.submit_in_flight = true;
        self.state.phase = SubmitPhase::Rendering;

        let request = self.state.form.snapshot();
        let outcome = self.run_pipeline(&request, channel).await;

        // The loading span ends here on every exit path
        self.state.submit_in_flight = false;
        match outcome {
            Ok(receipt) => {
                self.state.phase = SubmitPhase::Succeeded;
                self.state.success = Some(receipt);
            }
            Err(error) => {
                // The form is preserved so the user need not re-enter data
                self.state.phase = SubmitPhase::Failed;
                self.report_failure(error);
            }
        }
    }

    async fn run_pipeline(
        &mut self,
        request: &CoverageRequest,
        channel: OutboundChannel,
    ) -> Result<DeliveryReceipt, SubmitError> {
        let document = self.pipeline.render_document(request)?;
        self.state.phase = SubmitPhase::Dispatching;
        self.pipeline.dispatch(request, &document, channel).await
    }

    fn report_failure(&mut self, error: SubmitError) {
        match &error {
            SubmitError::Outbound(OutboundError::AuthCancelled) => {
                tracing::info!("sign-in cancelled by the user");
                self.state.push_notice(
                    "تم الإلغاء",
                    "تم إلغاء تسجيل الدخول ولم يتم إرسال الطلب. يمكنك المحاولة مرة أخرى.",
                );
            }
            SubmitError::Outbound(OutboundError::NotConfigured) => {
                tracing::warn!("email channel selected without deployment secrets");
                self.state.push_error("غير مفعل", EMAIL_DISABLED_MESSAGE);
            }
            SubmitError::Render(e) => {
                tracing::error!("render failed: {e}");
                self.state.push_error(
                    "خطأ",
                    "حدث خطأ أثناء إنشاء ملف PDF. يرجى المحاولة مرة أخرى.",
                );
            }
            SubmitError::Outbound(OutboundError::Dispatch(e)) => {
                tracing::error!("dispatch failed: {e}");
                self.state
                    .push_error("خطأ", "تعذر إرسال الطلب. يرجى المحاولة مرة أخرى.");
            }
            SubmitError::Save(e) => {
                tracing::error!("saving local copy failed: {e}");
                self.state
                    .push_error("خطأ", "تعذر حفظ نسخة الملف. يرجى المحاولة مرة أخرى.");
            }
        }
    }
}
