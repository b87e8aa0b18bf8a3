//! Paths inside the Zellij plugin sandbox.
//!
//! The sandbox mounts the host's working directory (normally the home
//! directory) under `/host`.

use std::path::PathBuf;

/// Data directory for trace output.
///
/// Resolves to `~/.local/share/zellij/socialshell` when Zellij was started
/// from the home directory.
///
/// ```
/// use socialshell::infrastructure::get_data_dir;
///
/// assert_eq!(get_data_dir().to_str(), Some("/host/.local/share/zellij/socialshell"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("socialshell")
}

/// Rewrites a leading `~` to the sandbox's `/host` mount.
///
/// ```
/// use socialshell::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/roster.json"), "/host/roster.json");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/etc/roster.json"), "/etc/roster.json");
/// assert_eq!(expand_tilde("~alice/roster.json"), "~alice/roster.json");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    match path.strip_prefix('~') {
        Some("") => "/host".to_string(),
        Some(rest) if rest.starts_with('/') => format!("/host{rest}"),
        _ => path.to_string(),
    }
}
