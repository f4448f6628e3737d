use thiserror::Error;

/// Common error types for the byte codec
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// A fixed-width decode ran out of input
    #[error("Insufficient bytes: needed {needed}, got {available}")]
    InsufficientBytes { needed: usize, available: usize },

    /// A character has no representation in the text charset
    #[error("Unmappable character {character:?} at position {position}")]
    Unmappable { character: char, position: usize },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Logging setup errors
    #[error("Logging error: {0}")]
    Logging(String),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, CodecError>;

impl From<config::ConfigError> for CodecError {
    fn from(err: config::ConfigError) -> Self {
        CodecError::Config(err.to_string())
    }
}

impl From<anyhow::Error> for CodecError {
    fn from(err: anyhow::Error) -> Self {
        CodecError::Config(format!("{:#}", err))
    }
}

impl CodecError {
    /// Whether the error came from caller input rather than the environment
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            CodecError::InsufficientBytes { .. } | CodecError::Unmappable { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CodecError::InsufficientBytes { needed: 8, available: 3 };
        assert_eq!(err.to_string(), "Insufficient bytes: needed 8, got 3");

        let err = CodecError::Unmappable { character: '€', position: 2 };
        assert_eq!(err.to_string(), "Unmappable character '€' at position 2");
    }

    #[test]
    fn test_input_error_classification() {
        assert!(CodecError::InsufficientBytes { needed: 8, available: 0 }.is_input_error());
        assert!(CodecError::Unmappable { character: 'Ā', position: 0 }.is_input_error());
        assert!(!CodecError::Config("missing".to_string()).is_input_error());
        assert!(!CodecError::Logging("already set".to_string()).is_input_error());
    }

    #[test]
    fn test_anyhow_conversion_keeps_context() {
        let err: CodecError = anyhow::anyhow!("root cause").context("Failed to load").into();
        assert_eq!(err, CodecError::Config("Failed to load: root cause".to_string()));
    }
}
