//! Error types for fm-content

/// Result type for fm-content operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in fm-content operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to parse {format} content: {message}")]
    ParseError { format: String, message: String },

    #[error("Frontmatter must be a mapping, found {found}")]
    NotAMapping { found: String },

    #[error("Failed to render frontmatter: {0}")]
    Render(#[from] serde_yaml::Error),
}

impl Error {
    pub fn parse(format: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ParseError {
            format: format.into(),
            message: message.into(),
        }
    }
}
