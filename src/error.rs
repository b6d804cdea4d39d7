use thiserror::Error;

/// Unified error type for pom-version operations
#[derive(Error, Debug)]
pub enum PomVersionError {
    #[error("Descriptor error: {0}")]
    Descriptor(String),

    #[error("Version format error: {0}")]
    Format(String),
}

/// Convenience type alias for Results in pom-version
pub type Result<T> = std::result::Result<T, PomVersionError>;

impl PomVersionError {
    /// Create a descriptor error with context
    pub fn descriptor(msg: impl Into<String>) -> Self {
        PomVersionError::Descriptor(msg.into())
    }

    /// Create a version format error with context
    pub fn format(msg: impl Into<String>) -> Self {
        PomVersionError::Format(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PomVersionError::descriptor("unable to read 'pom.xml'");
        assert_eq!(
            err.to_string(),
            "Descriptor error: unable to read 'pom.xml'"
        );
    }

    #[test]
    fn test_error_constructors() {
        assert!(PomVersionError::descriptor("test")
            .to_string()
            .contains("Descriptor"));
        assert!(PomVersionError::format("test")
            .to_string()
            .contains("format"));
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (PomVersionError::descriptor("x"), "Descriptor error"),
            (PomVersionError::format("x"), "Version format error"),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }
}
