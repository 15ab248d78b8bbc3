use std::path::{Path, PathBuf};

use directories_next::UserDirs;

/// Environment variable consulted when no `--api-key` flag is given.
pub const API_KEY_ENV: &str = "MERAKI_API_KEY";

/// Picks the API key from the flag value or the environment, in that order.
/// Values are trimmed and blank values are treated as absent, so an empty
/// flag still falls through to the environment.
pub fn api_key_from(flag: Option<String>, env_value: Option<String>) -> Option<String> {
    flag.into_iter()
        .chain(env_value)
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
}

/// Resolves the API key for this process from the flag and [`API_KEY_ENV`].
pub fn resolve_api_key(flag: Option<String>) -> Option<String> {
    api_key_from(flag, std::env::var(API_KEY_ENV).ok())
}

/// Directory reports land in when `--output-dir` is not given: the user's
/// documents folder, their home directory when the platform has no documents
/// folder, or the working directory as a last resort.
pub fn default_output_dir() -> PathBuf {
    UserDirs::new()
        .map(|dirs| {
            dirs.document_dir()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| dirs.home_dir().to_path_buf())
        })
        .unwrap_or_else(|| PathBuf::from("."))
}
