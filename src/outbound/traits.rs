//! Trait abstractions for outbound collaborators to enable mocking in tests

use super::OutboundError;
use crate::platform;
use async_trait::async_trait;
use std::process::{Command, Stdio};

/// Opens a URL in the user's default browser
#[cfg_attr(test, mockall::automock)]
pub trait LinkOpener: Send + Sync {
    /// Open a URL in a new browsing context. A spawn failure is reported,
    /// not swallowed.
    fn open(&self, url: &str) -> Result<(), OutboundError>;
}

/// System implementation spawning the platform opener command
pub struct SystemOpener;

impl LinkOpener for SystemOpener {
    fn open(&self, url: &str) -> Result<(), OutboundError> {
        let (program, args) = platform::URL_OPENER
            .split_first()
            .ok_or_else(|| OutboundError::Dispatch("no opener command for platform".into()))?;

        Command::new(program)
            .args(args)
            .arg(url)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| OutboundError::Dispatch(format!("failed to open link: {e}")))?;

        tracing::info!(url, "opened outbound link");
        Ok(())
    }
}

/// Mail provider session: lazily initialized, interactive grant on first
/// use, raw-message submission as the signed-in user
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MailTransport: Send + Sync {
    /// Whether the deployment carries the secrets this channel needs
    fn is_configured(&self) -> bool;

    /// Ensure an authenticated session exists, running the interactive
    /// grant if there is none yet
    async fn ensure_session(&mut self) -> Result<(), OutboundError>;

    /// Submit a base64url-encoded raw RFC 2822 message
    async fn send_raw(&mut self, raw: &str) -> Result<(), OutboundError>;
}
