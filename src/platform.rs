//! Platform-specific configuration

/// Command used to open a URL in the default browser.
/// - macOS: `open`
/// - Windows: `cmd /C start "" <url>`
/// - elsewhere: `xdg-open`
#[cfg(target_os = "macos")]
pub const URL_OPENER: &[&str] = &["open"];

#[cfg(target_os = "windows")]
pub const URL_OPENER: &[&str] = &["cmd", "/C", "start", ""];

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
pub const URL_OPENER: &[&str] = &["xdg-open"];

/// Submit shortcut display for form help text
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";
