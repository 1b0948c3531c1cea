//! Outbound dispatch
//!
//! The two delivery channels for a completed request (messaging deep link
//! and email), the local file delivery both of them lean on, and the trait
//! seams the submission pipeline is tested through.

pub mod delivery;
pub mod email;
pub mod messaging;
mod traits;

pub use email::GmailTransport;
pub use traits::{LinkOpener, MailTransport, SystemOpener};

#[cfg(test)]
pub use traits::{MockLinkOpener, MockMailTransport};

use std::path::PathBuf;
use thiserror::Error;

/// Delivery mechanism chosen for a completed request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutboundChannel {
    Messaging,
    Email,
}

impl OutboundChannel {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Messaging => "واتساب",
            Self::Email => "البريد الإلكتروني",
        }
    }
}

/// What went wrong during dispatch
#[derive(Debug, Error)]
pub enum OutboundError {
    /// The email channel is missing its deployment secrets
    #[error("email channel is not configured")]
    NotConfigured,
    /// The user backed out of the interactive sign-in
    #[error("sign-in was cancelled by the user")]
    AuthCancelled,
    /// Opener spawn failure, network failure, or provider rejection
    #[error("dispatch failed: {0}")]
    Dispatch(String),
}

/// Proof of a completed dispatch, shown in the success notice
#[derive(Debug, Clone)]
pub struct DeliveryReceipt {
    pub channel: OutboundChannel,
    /// Where the local copy of the document was saved
    pub saved_to: PathBuf,
}
