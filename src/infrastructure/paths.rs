//! Sandbox path handling.

use std::path::PathBuf;

/// Returns the plugin data directory, `/host/.local/share/zellij/docportal`.
///
/// `/host` is the cwd of the last focused terminal (or where Zellij was
/// started), so this is normally `~/.local/share/zellij/docportal` on the
/// host. Trace output lives here.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("docportal")
}

/// Rewrites a leading `~` to `/host` so user-supplied paths from the plugin
/// configuration (`catalogue_file`, `theme_file`) resolve inside the sandbox.
///
/// ```
/// use docportal::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/docs/catalogue.toml"), "/host/docs/catalogue.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/etc/docportal.toml"), "/etc/docportal.toml");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    match path.strip_prefix('~') {
        Some("") => "/host".to_string(),
        Some(rest) if rest.starts_with('/') => format!("/host{rest}"),
        _ => path.to_string(),
    }
}
