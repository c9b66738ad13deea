//! Error types for graph rendering

use rdfvis_style::StyleError;

/// Error type for graph rendering
///
/// Building itself never fails; errors come from compiling the style
/// configuration or serializing the output.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error(transparent)]
    Style(#[from] StyleError),

    /// Output elements that do not serialize
    #[error("Failed to serialize graph: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type for graph operations
pub type Result<T> = std::result::Result<T, GraphError>;
