//! Email channel (Gmail REST)
//!
//! Lazily initializes an HTTP client with the two deployment secrets,
//! obtains a send-only session through the OAuth loopback consent flow,
//! and submits the request as a multipart message with the rendered PDF
//! attached. Missing secrets fail fast before any network interaction.

use super::{LinkOpener, OutboundError};
use crate::config::GmailConfig;
use crate::state::CoverageRequest;
use async_trait::async_trait;
use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use base64::Engine as _;
use serde::Deserialize;
use sha2::{Digest, Sha256};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use url::Url;
use uuid::Uuid;

const AUTH_ENDPOINT: &str = "https://accounts.google.com/o/oauth2/v2/auth";
const TOKEN_ENDPOINT: &str = "https://oauth2.googleapis.com/token";
const SEND_ENDPOINT: &str = "https://gmail.googleapis.com/gmail/v1/users/me/messages/send";
/// Send-only mail scope
const SEND_SCOPE: &str = "https://www.googleapis.com/auth/gmail.send";

/// Subject line for a request
pub fn subject_line(request: &CoverageRequest) -> String {
    format!("طلب تغطية إعلامية - {}", request.event_name)
}

/// Fixed greeting template naming the event
pub fn body_greeting(request: &CoverageRequest) -> String {
    format!(
        "السلام عليكم،\n\n\
         مرفق طلب تغطية إعلامية لفعالية \"{event}\" مقدم من {committee}.\n\
         تفاصيل الطلب الكاملة في ملف PDF المرفق.\n\n\
         مع التحية،\n{applicant}",
        event = request.event_name,
        committee = request.committee_name,
        applicant = request.applicant_name,
    )
}

/// RFC 2047 encoded-word form of a UTF-8 header value
pub fn encoded_subject(subject: &str) -> String {
    format!("=?UTF-8?B?{}?=", STANDARD.encode(subject))
}

/// Wrap base64 output at the canonical 76 columns
fn wrap_base64(encoded: &str) -> String {
    encoded
        .as_bytes()
        .chunks(76)
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or_default())
        .collect::<Vec<_>>()
        .join("\r\n")
}

/// Build the multipart RFC 2822 message: plain-text greeting plus the
/// rendered document as a base64 attachment part
pub fn build_mime(
    to: &str,
    subject: &str,
    body: &str,
    attachment: &[u8],
    file_name: &str,
    boundary: &str,
) -> String {
    format!(
        "To: {to}\r\n\
         Subject: {subject}\r\n\
         MIME-Version: 1.0\r\n\
         Content-Type: multipart/mixed; boundary=\"{boundary}\"\r\n\
         \r\n\
         --{boundary}\r\n\
         Content-Type: text/plain; charset=\"UTF-8\"\r\n\
         Content-Transfer-Encoding: base64\r\n\
         \r\n\
         {body_b64}\r\n\
         --{boundary}\r\n\
         Content-Type: application/pdf; name=\"{file_name}\"\r\n\
         Content-Disposition: attachment; filename=\"{file_name}\"\r\n\
         Content-Transfer-Encoding: base64\r\n\
         \r\n\
         {attachment_b64}\r\n\
         --{boundary}--\r\n",
        subject = encoded_subject(subject),
        body_b64 = wrap_base64(&STANDARD.encode(body)),
        attachment_b64 = wrap_base64(&STANDARD.encode(attachment)),
    )
}

/// Base64url-encode the raw message for the send call
pub fn encode_raw(mime: &str) -> String {
    URL_SAFE_NO_PAD.encode(mime)
}

/// A fresh MIME boundary marker
pub fn new_boundary() -> String {
    format!("mediadesk_{}", Uuid::new_v4().simple())
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

/// Gmail-backed [`super::MailTransport`]
pub struct GmailTransport {
    config: Option<GmailConfig>,
    opener: Box<dyn LinkOpener>,
    /// HTTP client, created on first use
    http: Option<reqwest::Client>,
    access_token: Option<String>,
}

impl GmailTransport {
    pub fn new(config: Option<GmailConfig>, opener: Box<dyn LinkOpener>) -> Self {
        Self {
            config,
            opener,
            http: None,
            access_token: None,
        }
    }

    fn http(&mut self) -> reqwest::Client {
        self.http.get_or_insert_with(reqwest::Client::new).clone()
    }

    /// Run the loopback consent flow: open the consent page in the
    /// browser and wait for the provider to redirect back with a grant
    /// code. Suspends until the user completes or cancels.
    async fn interactive_grant(&mut self, client_id: &str) -> Result<String, OutboundError> {
        let listener = TcpListener::bind(("127.0.0.1", 0))
            .await
            .map_err(|e| OutboundError::Dispatch(format!("loopback listener: {e}")))?;
        let port = listener
            .local_addr()
            .map_err(|e| OutboundError::Dispatch(format!("loopback listener: {e}")))?
            .port();
        let redirect_uri = format!("http://127.0.0.1:{port}");

        let verifier = format!("{}{}", Uuid::new_v4().simple(), Uuid::new_v4().simple());
        let challenge = URL_SAFE_NO_PAD.encode(Sha256::digest(verifier.as_bytes()));

        let mut consent = Url::parse(AUTH_ENDPOINT)
            .map_err(|e| OutboundError::Dispatch(format!("consent url: {e}")))?;
        consent
            .query_pairs_mut()
            .append_pair("client_id", client_id)
            .append_pair("redirect_uri", &redirect_uri)
            .append_pair("response_type", "code")
            .append_pair("scope", SEND_SCOPE)
            .append_pair("code_challenge", &challenge)
            .append_pair("code_challenge_method", "S256");

        self.opener.open(consent.as_str())?;
        tracing::info!("awaiting sign-in grant on {redirect_uri}");

        let code = wait_for_grant(listener).await?;

        let response = self
            .http()
            .post(TOKEN_ENDPOINT)
            .form(&[
                ("code", code.as_str()),
                ("client_id", client_id),
                ("code_verifier", verifier.as_str()),
                ("redirect_uri", redirect_uri.as_str()),
                ("grant_type", "authorization_code"),
            ])
            .send()
            .await
            .map_err(|e| OutboundError::Dispatch(format!("token exchange: {e}")))?;

        if !response.status().is_success() {
            return Err(OutboundError::Dispatch(format!(
                "token exchange rejected: {}",
                response.status()
            )));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| OutboundError::Dispatch(format!("token exchange: {e}")))?;
        Ok(token.access_token)
    }
}

#[async_trait]
impl super::MailTransport for GmailTransport {
    fn is_configured(&self) -> bool {
        self.config.is_some()
    }

    async fn ensure_session(&mut self) -> Result<(), OutboundError> {
        let config = self.config.clone().ok_or(OutboundError::NotConfigured)?;
        if self.access_token.is_some() {
            return Ok(());
        }
        let token = self.interactive_grant(&config.client_id).await?;
        self.access_token = Some(token);
        Ok(())
    }

    async fn send_raw(&mut self, raw: &str) -> Result<(), OutboundError> {
        let config = self.config.clone().ok_or(OutboundError::NotConfigured)?;
        let token = self
            .access_token
            .clone()
            .ok_or_else(|| OutboundError::Dispatch("no authenticated session".into()))?;

        let response = self
            .http()
            .post(SEND_ENDPOINT)
            .query(&[("key", config.api_key.as_str())])
            .bearer_auth(token)
            .json(&serde_json::json!({ "raw": raw }))
            .send()
            .await
            .map_err(|e| OutboundError::Dispatch(format!("send call: {e}")))?;

        if !response.status().is_success() {
            return Err(OutboundError::Dispatch(format!(
                "send rejected: {}",
                response.status()
            )));
        }

        tracing::info!("request submitted through the email channel");
        Ok(())
    }
}

/// Accept the single loopback redirect and extract the grant code.
/// A provider-side cancel arrives as `error=access_denied` and maps to
/// the benign cancelled outcome.
async fn wait_for_grant(listener: TcpListener) -> Result<String, OutboundError> {
    let (mut stream, _) = listener
        .accept()
        .await
        .map_err(|e| OutboundError::Dispatch(format!("loopback accept: {e}")))?;

    let mut buf = vec![0u8; 4096];
    let read = stream
        .read(&mut buf)
        .await
        .map_err(|e| OutboundError::Dispatch(format!("loopback read: {e}")))?;
    let request = String::from_utf8_lossy(&buf[..read]).into_owned();

    let reply = "HTTP/1.1 200 OK\r\nContent-Type: text/html; charset=utf-8\r\n\r\n\
                 <html dir=\"rtl\"><body><h3>يمكنك إغلاق هذه النافذة والعودة إلى التطبيق.</h3></body></html>";
    let _ = stream.write_all(reply.as_bytes()).await;

    parse_grant_request(&request)
}

/// Parse the request line of the redirect and pull out `code` or `error`
fn parse_grant_request(request: &str) -> Result<String, OutboundError> {
    let path = request
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .ok_or_else(|| OutboundError::Dispatch("malformed redirect request".into()))?;

    let url = Url::parse(&format!("http://127.0.0.1{path}"))
        .map_err(|e| OutboundError::Dispatch(format!("malformed redirect: {e}")))?;

    let mut code = None;
    for (key, value) in url.query_pairs() {
        match key.as_ref() {
            "error" if value == "access_denied" => return Err(OutboundError::AuthCancelled),
            "error" => {
                return Err(OutboundError::Dispatch(format!(
                    "authorization error: {value}"
                )))
            }
            "code" => code = Some(value.into_owned()),
            _ => {}
        }
    }

    code.ok_or_else(|| OutboundError::Dispatch("redirect carried no grant code".into()))
}
