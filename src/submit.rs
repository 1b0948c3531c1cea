//! Submission pipeline
//!
//! Turns a validated form snapshot into a rendered document and hands it
//! to the chosen outbound channel. The pipeline owns its collaborators
//! behind trait seams; nothing here reaches for ambient state.
//!
//! Dispatch takes the rendered document by reference, so "no outbound
//! dispatch without a successfully produced document" holds by
//! construction.

use crate::config::AppConfig;
use crate::outbound::{
    delivery, email, messaging, DeliveryReceipt, GmailTransport, LinkOpener, MailTransport,
    OutboundChannel, OutboundError, SystemOpener,
};
use crate::render::{RenderEngine, RenderError, RenderedDocument, TemplateRenderer};
use crate::state::CoverageRequest;
use std::path::PathBuf;
use thiserror::Error;

/// Why a submission attempt terminated
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error(transparent)]
    Outbound(#[from] OutboundError),
    #[error("failed to save document: {0}")]
    Save(#[from] std::io::Error),
}

/// The submission pipeline with its injected collaborators
pub struct SubmitPipeline {
    render_engine: Box<dyn RenderEngine>,
    mail: Box<dyn MailTransport>,
    opener: Box<dyn LinkOpener>,
    messaging_recipients: Vec<String>,
    mail_recipient: String,
    output_dir: PathBuf,
}

impl SubmitPipeline {
    /// Wire up the real collaborators from deployment configuration
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            render_engine: Box::new(TemplateRenderer),
            mail: Box::new(GmailTransport::new(config.gmail(), Box::new(SystemOpener))),
            opener: Box::new(SystemOpener),
            messaging_recipients: config.messaging_recipients(),
            mail_recipient: config.mail_recipient(),
            output_dir: config.output_dir(),
        }
    }

    #[cfg(test)]
    pub fn with_parts(
        render_engine: Box<dyn RenderEngine>,
        mail: Box<dyn MailTransport>,
        opener: Box<dyn LinkOpener>,
        messaging_recipients: Vec<String>,
        output_dir: PathBuf,
    ) -> Self {
        Self {
            render_engine,
            mail,
            opener,
            messaging_recipients,
            mail_recipient: "media@example.org".to_string(),
            output_dir,
        }
    }

    /// Whether the email channel carries its deployment secrets
    pub fn email_configured(&self) -> bool {
        self.mail.is_configured()
    }

    /// Rendering stage. Only ever called on a snapshot that has just
    /// passed validation with zero errors.
    pub fn render_document(
        &self,
        request: &CoverageRequest,
    ) -> Result<RenderedDocument, SubmitError> {
        tracing::info!(event = %request.event_name, "rendering request document");
        Ok(self.render_engine.render(request)?)
    }

    /// Dispatch stage: save the local copy, then deliver through the
    /// chosen channel
    pub async fn dispatch(
        &mut self,
        request: &CoverageRequest,
        document: &RenderedDocument,
        channel: OutboundChannel,
    ) -> Result<DeliveryReceipt, SubmitError> {
        // Missing secrets fail before any side effect, local or network
        if channel == OutboundChannel::Email && !self.mail.is_configured() {
            return Err(OutboundError::NotConfigured.into());
        }

        let file_name = delivery::derive_file_name(&request.event_name);
        let saved_to = delivery::save_document(&self.output_dir, &file_name, document)?;

        match channel {
            OutboundChannel::Messaging => {
                let message = messaging::summary_message(request);
                messaging::dispatch(self.opener.as_ref(), &self.messaging_recipients, &message)?;
            }
            OutboundChannel::Email => {
                let mime = email::build_mime(
                    &self.mail_recipient,
                    &email::subject_line(request),
                    &email::body_greeting(request),
                    &document.bytes,
                    &file_name,
                    &email::new_boundary(),
                );
                let raw = email::encode_raw(&mime);
                self.mail.ensure_session().await?;
                self.mail.send_raw(&raw).await?;
            }
        }

        tracing::info!(channel = channel.label(), "request dispatched");
        Ok(DeliveryReceipt { channel, saved_to })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outbound::{MockLinkOpener, MockMailTransport};
    use crate::render::MockRenderEngine;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use base64::Engine as _;

    fn sample_request() -> CoverageRequest {
        CoverageRequest {
            committee_name: "لجنة الأنشطة".to_string(),
            applicant_name: "أحمد".to_string(),
            contact_phone: "33000000".to_string(),
            event_name: "يوم تطوعي".to_string(),
            event_date: "2025-05-01".to_string(),
            start_time: "09:00".to_string(),
            end_time: "12:00".to_string(),
            event_location: "قاعة الجمعية".to_string(),
            coverage_types: vec!["تصوير فوتوغرافي".to_string(), "بث مباشر".to_string()],
            additional_notes: String::new(),
        }
    }

    fn fake_document() -> RenderedDocument {
        RenderedDocument {
            bytes: b"%PDF-fake".to_vec(),
        }
    }

    fn temp_dir(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!("mediadesk-submit-{tag}"))
    }

    fn pipeline_with(
        mail: MockMailTransport,
        opener: MockLinkOpener,
        dir: PathBuf,
    ) -> SubmitPipeline {
        SubmitPipeline::with_parts(
            Box::new(MockRenderEngine::new()),
            Box::new(mail),
            Box::new(opener),
            vec!["97333551841".to_string()],
            dir,
        )
    }

    #[tokio::test]
    async fn test_messaging_dispatch_saves_then_opens_link() {
        let mut opener = MockLinkOpener::new();
        opener
            .expect_open()
            .withf(|url| url.starts_with("https://wa.me/97333551841?text="))
            .times(1)
            .returning(|_| Ok(()));

        let dir = temp_dir("messaging");
        let mut pipeline = pipeline_with(MockMailTransport::new(), opener, dir.clone());

        let request = sample_request();
        let receipt = pipeline
            .dispatch(&request, &fake_document(), OutboundChannel::Messaging)
            .await
            .unwrap();

        assert_eq!(receipt.channel, OutboundChannel::Messaging);
        let saved_name = receipt.saved_to.file_name().unwrap().to_string_lossy();
        assert!(saved_name.contains("يوم تطوعي"));
        assert!(receipt.saved_to.exists());
        std::fs::remove_dir_all(dir).ok();
    }

    #[tokio::test]
    async fn test_email_unconfigured_fails_before_any_side_effect() {
        let mut mail = MockMailTransport::new();
        mail.expect_is_configured().return_const(false);
        mail.expect_ensure_session().never();
        mail.expect_send_raw().never();

        let mut opener = MockLinkOpener::new();
        opener.expect_open().never();

        let dir = temp_dir("unconfigured");
        std::fs::remove_dir_all(&dir).ok();
        let mut pipeline = pipeline_with(mail, opener, dir.clone());

        let result = pipeline
            .dispatch(&sample_request(), &fake_document(), OutboundChannel::Email)
            .await;

        assert!(matches!(
            result,
            Err(SubmitError::Outbound(OutboundError::NotConfigured))
        ));
        // Fail-fast: not even the local copy was written
        assert!(!dir.exists());
    }

    #[tokio::test]
    async fn test_email_auth_cancel_is_distinct_and_sends_nothing() {
        let mut mail = MockMailTransport::new();
        mail.expect_is_configured().return_const(true);
        mail.expect_ensure_session()
            .times(1)
            .returning(|| Err(OutboundError::AuthCancelled));
        mail.expect_send_raw().never();

        let dir = temp_dir("cancel");
        let mut pipeline = pipeline_with(mail, MockLinkOpener::new(), dir.clone());

        let result = pipeline
            .dispatch(&sample_request(), &fake_document(), OutboundChannel::Email)
            .await;

        assert!(matches!(
            result,
            Err(SubmitError::Outbound(OutboundError::AuthCancelled))
        ));
        std::fs::remove_dir_all(dir).ok();
    }

    #[tokio::test]
    async fn test_email_dispatch_sends_document_as_attachment() {
        let mut mail = MockMailTransport::new();
        mail.expect_is_configured().return_const(true);
        mail.expect_ensure_session().times(1).returning(|| Ok(()));
        mail.expect_send_raw()
            .withf(|raw| {
                let mime = String::from_utf8(URL_SAFE_NO_PAD.decode(raw).unwrap()).unwrap();
                mime.contains("To: media@example.org")
                    && mime.contains("application/pdf")
                    && mime.contains("طلب_تغطية_يوم تطوعي.pdf")
            })
            .times(1)
            .returning(|_| Ok(()));

        let dir = temp_dir("email");
        let mut pipeline = pipeline_with(mail, MockLinkOpener::new(), dir.clone());

        let receipt = pipeline
            .dispatch(&sample_request(), &fake_document(), OutboundChannel::Email)
            .await
            .unwrap();

        assert_eq!(receipt.channel, OutboundChannel::Email);
        assert!(receipt.saved_to.exists());
        std::fs::remove_dir_all(dir).ok();
    }

    #[tokio::test]
    async fn test_render_failure_is_a_render_error() {
        let mut engine = MockRenderEngine::new();
        engine
            .expect_render()
            .returning(|_| Err(RenderError::Assembly("boom".to_string())));

        let pipeline = SubmitPipeline::with_parts(
            Box::new(engine),
            Box::new(MockMailTransport::new()),
            Box::new(MockLinkOpener::new()),
            vec![],
            temp_dir("render-fail"),
        );

        let result = pipeline.render_document(&sample_request());
        assert!(matches!(result, Err(SubmitError::Render(_))));
    }

    #[tokio::test]
    async fn test_opener_failure_surfaces_as_dispatch_error() {
        let mut opener = MockLinkOpener::new();
        opener
            .expect_open()
            .returning(|_| Err(OutboundError::Dispatch("blocked".into())));

        let dir = temp_dir("blocked");
        let mut pipeline = pipeline_with(MockMailTransport::new(), opener, dir.clone());

        let result = pipeline
            .dispatch(&sample_request(), &fake_document(), OutboundChannel::Messaging)
            .await;

        assert!(matches!(
            result,
            Err(SubmitError::Outbound(OutboundError::Dispatch(_)))
        ));
        std::fs::remove_dir_all(dir).ok();
    }
}
