//! Error types for wgen

use thiserror::Error;

/// The main error type for wgen operations
///
/// Every variant is terminal for a generation run: nothing is written once
/// one of these has been returned.
#[derive(Debug, Error)]
pub enum WgenError {
    #[error("Configuration error for resource '{name}': {reason}")]
    InvalidResourceKind { name: String, reason: String },

    #[error("Duplicate resource name: {0}")]
    DuplicateResource(String),

    #[error("Malformed scaffold: marker {marker} {reason}")]
    MalformedScaffold { marker: String, reason: String },

    #[error("Unsupported connection mode '{0}' (supported: wifinina)")]
    UnsupportedMode(String),

    #[error("Load error: {0}")]
    LoadError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParseError(String),
}

impl WgenError {
    /// Name of the resource or marker the error refers to, if any
    pub fn subject(&self) -> Option<&str> {
        match self {
            WgenError::InvalidResourceKind { name, .. } => Some(name),
            WgenError::DuplicateResource(name) => Some(name),
            WgenError::MalformedScaffold { marker, .. } => Some(marker),
            _ => None,
        }
    }
}

/// Result type alias for wgen operations
pub type Result<T> = std::result::Result<T, WgenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subject_names_offender() {
        let err = WgenError::DuplicateResource("index.html".to_string());
        assert_eq!(err.subject(), Some("index.html"));

        let err = WgenError::MalformedScaffold {
            marker: "@@WGEN_DYNAMIC_PAGES@@".to_string(),
            reason: "is missing".to_string(),
        };
        assert_eq!(err.subject(), Some("@@WGEN_DYNAMIC_PAGES@@"));
        assert_eq!(
            err.to_string(),
            "Malformed scaffold: marker @@WGEN_DYNAMIC_PAGES@@ is missing"
        );
    }

    #[test]
    fn test_configuration_error_message() {
        let err = WgenError::InvalidResourceKind {
            name: "toggleLed.cpp".to_string(),
            reason: "dynamic code must not declare a MIME type".to_string(),
        };
        assert!(err.to_string().starts_with("Configuration error"));
        assert!(err.to_string().contains("toggleLed.cpp"));
    }
}
