//! Configuration handling for the TUI
//!
//! The config file is optional; everything has a usable default. The two
//! Gmail secrets may also arrive via environment variables, which take
//! precedence over the file. Missing secrets disable the email channel,
//! they never crash the app.

use crate::catalog;
use anyhow::Result;
use directories::{ProjectDirs, UserDirs};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Environment variable carrying the Gmail API key
pub const ENV_GMAIL_API_KEY: &str = "MEDIADESK_GMAIL_API_KEY";
/// Environment variable carrying the Gmail OAuth client id
pub const ENV_GMAIL_CLIENT_ID: &str = "MEDIADESK_GMAIL_CLIENT_ID";

/// User configuration for the desk
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Gmail API key (deployment secret)
    pub gmail_api_key: Option<String>,
    /// Gmail OAuth client identifier (deployment secret)
    pub gmail_client_id: Option<String>,
    /// WhatsApp recipient numbers, digits only
    pub whatsapp_recipients: Option<Vec<String>>,
    /// Mailbox the email channel delivers to
    pub mail_recipient: Option<String>,
    /// Directory the rendered PDF is saved into
    pub output_dir: Option<PathBuf>,
}

/// The two secrets the email channel needs, present together or not at all
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GmailConfig {
    pub api_key: String,
    pub client_id: String,
}

impl AppConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("org", "malkiya", "mediadesk-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file, then overlay the secret env vars
    pub fn load() -> Result<Self> {
        let mut config = Self::load_file()?;
        config.apply_env();
        Ok(config)
    }

    fn load_file() -> Result<Self> {
        if let Some(path) = Self::config_path() {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: AppConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }
        Ok(Self::default())
    }

    /// Overlay the two deployment secrets from the environment
    fn apply_env(&mut self) {
        if let Ok(key) = std::env::var(ENV_GMAIL_API_KEY) {
            if !key.is_empty() {
                self.gmail_api_key = Some(key);
            }
        }
        if let Ok(id) = std::env::var(ENV_GMAIL_CLIENT_ID) {
            if !id.is_empty() {
                self.gmail_client_id = Some(id);
            }
        }
    }

    /// Save configuration to file
    #[allow(dead_code)]
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            fs::write(&path, content)?;
        }
        Ok(())
    }

    /// Both secrets present, or the email channel stays disabled
    pub fn gmail(&self) -> Option<GmailConfig> {
        match (&self.gmail_api_key, &self.gmail_client_id) {
            (Some(api_key), Some(client_id)) => Some(GmailConfig {
                api_key: api_key.clone(),
                client_id: client_id.clone(),
            }),
            _ => None,
        }
    }

    /// WhatsApp recipients, filtered to digits-only numbers.
    /// Entries with other characters are dropped with a warning.
    pub fn messaging_recipients(&self) -> Vec<String> {
        let configured: Vec<String> = match &self.whatsapp_recipients {
            Some(numbers) => numbers.clone(),
            None => catalog::WHATSAPP_RECIPIENTS
                .iter()
                .map(|n| n.to_string())
                .collect(),
        };

        configured
            .into_iter()
            .filter(|n| {
                let ok = !n.is_empty() && n.chars().all(|c| c.is_ascii_digit());
                if !ok {
                    tracing::warn!("dropping non-numeric messaging recipient: {n:?}");
                }
                ok
            })
            .collect()
    }

    /// Mailbox the email channel delivers to
    pub fn mail_recipient(&self) -> String {
        self.mail_recipient
            .clone()
            .unwrap_or_else(|| catalog::MAIL_RECIPIENT.to_string())
    }

    /// Directory the rendered PDF is saved into: configured dir, else the
    /// user's download directory, else the current directory.
    pub fn output_dir(&self) -> PathBuf {
        if let Some(dir) = &self.output_dir {
            return dir.clone();
        }
        UserDirs::new()
            .and_then(|dirs| dirs.download_dir().map(|d| d.to_path_buf()))
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
