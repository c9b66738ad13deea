//! Error types for style configuration

/// Error type for style configuration and compilation
#[derive(Debug, thiserror::Error)]
pub enum StyleError {
    /// A style-map key is not a valid glob
    #[error("Invalid style pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        source: globset::Error,
    },

    /// Alias indirection that resolves back onto itself
    #[error("Style alias cycle: {}", chain.join(" -> "))]
    AliasCycle { chain: Vec<String> },

    /// Configuration text that does not deserialize
    #[error("Invalid configuration: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for style operations
pub type Result<T> = std::result::Result<T, StyleError>;

impl StyleError {
    pub(crate) fn invalid_pattern(pattern: impl Into<String>, source: globset::Error) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            source,
        }
    }
}
