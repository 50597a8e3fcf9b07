//! Error types for the pruning pass

use thiserror::Error;

use imlex_store::StoreError;

/// Result type alias for prune operations
pub type Result<T> = std::result::Result<T, PruneError>;

/// Configuration validation failures; raised before any record is read,
/// never silently clamped.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("similarity threshold must be within 0.0..=1.0, got {0}")]
    ThresholdOutOfRange(f64),

    #[error("window size must be at least 1")]
    WindowTooSmall,
}

/// Main error type for the pruning pass
#[derive(Error, Debug)]
pub enum PruneError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::ThresholdOutOfRange(1.5);
        assert!(err.to_string().contains("1.5"));

        let err = PruneError::from(ConfigError::WindowTooSmall);
        assert!(err.to_string().contains("window size"));
    }

    #[test]
    fn store_error_converts() {
        let err = PruneError::from(StoreError::Unavailable("gone".into()));
        assert!(matches!(err, PruneError::Store(_)));
    }
}
