use std::path::PathBuf;

/// Error type for wizard operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Operator interrupted a prompt (Ctrl+C, Escape).
    #[error("Configuration cancelled by user")]
    Cancelled,

    /// Prompter failure (terminal I/O, exhausted script, ...).
    #[error("Prompt error: {0}")]
    Prompt(#[from] anyhow::Error),

    /// The rendered config could not be written.
    #[error("Failed to write config to {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ConfigError {
    /// Create a prompt error from any error type.
    pub fn prompt(err: impl Into<anyhow::Error>) -> Self {
        Self::Prompt(err.into())
    }

    /// Check if this error represents user cancellation.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}
