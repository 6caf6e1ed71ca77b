//! Error types for folio.

use std::io;

/// Errors produced by folio outside the terminal session itself.
///
/// Command failures typed by the visitor never reach this type; they become
/// output log entries. `FolioError` covers configuration and terminal I/O.
#[derive(Debug, thiserror::Error)]
pub enum FolioError {
    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, FolioError>;

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::config::FolioConfig;

    #[test]
    fn config_error_display() {
        let e = FolioError::Config("missing key".into());
        assert_eq!(format!("{e}"), "config error: missing key");
    }

    #[test]
    fn zero_history_capacity_message() {
        let mut config = FolioConfig::default();
        config.terminal.history_capacity = 0;
        let e = config.validate().unwrap_err();
        assert!(matches!(e, FolioError::Config(_)));
        assert_eq!(
            e.to_string(),
            "config error: terminal.history_capacity must be at least 1"
        );
    }

    #[test]
    fn missing_config_file_is_io() {
        let e = FolioConfig::load(Path::new("/nonexistent/folio.toml")).unwrap_err();
        assert!(matches!(e, FolioError::Io(_)));
        assert!(e.to_string().starts_with("I/O error: "));
    }

    #[test]
    fn bad_toml_names_the_key() {
        let e = FolioConfig::from_toml_str("[terminal]\nhistory_capacity = \"ten\"").unwrap_err();
        assert!(matches!(e, FolioError::TomlParse(_)));
        let msg = e.to_string();
        assert!(msg.starts_with("TOML parse error: "));
        assert!(msg.contains("history_capacity"));
    }

    #[test]
    fn snapshot_failure_is_json() {
        let e: FolioError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(e.to_string().starts_with("JSON error: "));
    }
}
