//! Dialoguer implementation of the Prompter trait.

use dialoguer::{Input, Select, theme::ColorfulTheme};
use s5_config::{ConfigError, Prompt, Prompter};
use thiserror::Error;

/// Error type for the Dialoguer prompter.
#[derive(Debug, Error)]
pub enum DialoguerError {
    /// User cancelled the wizard (e.g., pressed Ctrl+C).
    #[error("Configuration cancelled by user")]
    Cancelled,

    /// An I/O error occurred during prompting.
    #[error("Dialoguer error: {0}")]
    Dialoguer(#[from] dialoguer::Error),
}

impl From<DialoguerError> for ConfigError {
    fn from(err: DialoguerError) -> Self {
        match err {
            DialoguerError::Cancelled => ConfigError::Cancelled,
            other => ConfigError::prompt(other),
        }
    }
}

/// Helper to check if a dialoguer error is a cancellation (Ctrl+C)
fn is_cancelled(err: &dialoguer::Error) -> bool {
    matches!(err, dialoguer::Error::IO(io_err) if io_err.kind() == std::io::ErrorKind::Interrupted)
}

fn map_error(err: dialoguer::Error) -> DialoguerError {
    if is_cancelled(&err) {
        DialoguerError::Cancelled
    } else {
        DialoguerError::Dialoguer(err)
    }
}

/// Dialoguer prompter for interactive CLI prompts.
///
/// Every question is a single-line text input with its default shown; the
/// config-type chooser is an arrow-key menu that Escape (or `q`) cancels.
#[derive(Debug, Default, Clone)]
pub struct DialoguerPrompter {
    /// Use colorful theme for prompts.
    colorful: bool,
}

impl DialoguerPrompter {
    /// Create a new Dialoguer prompter with default (colorful) theme.
    pub fn new() -> Self {
        Self { colorful: true }
    }

    /// Create a prompter with plain (no color) theme.
    pub fn plain() -> Self {
        Self { colorful: false }
    }
}

impl Prompter for DialoguerPrompter {
    type Error = DialoguerError;

    fn ask(&mut self, prompt: &Prompt) -> Result<String, Self::Error> {
        let _theme;
        let mut builder: Input<String>;
        if self.colorful {
            _theme = ColorfulTheme::default();
            builder = Input::with_theme(&_theme);
        } else {
            builder = Input::new();
        }

        builder = builder
            .with_prompt(prompt.question())
            .allow_empty(true)
            .default(prompt.default_value().to_string())
            .show_default(true);

        builder.interact_text().map_err(map_error)
    }

    fn select(&mut self, question: &str, items: &[&str]) -> Result<Option<usize>, Self::Error> {
        let _theme;
        let mut builder: Select;
        if self.colorful {
            _theme = ColorfulTheme::default();
            builder = Select::with_theme(&_theme);
        } else {
            builder = Select::new();
        }

        builder = builder.with_prompt(question).items(items).default(0);

        builder.interact_opt().map_err(map_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_selection() {
        assert!(DialoguerPrompter::new().colorful);
        assert!(!DialoguerPrompter::plain().colorful);
        assert!(!DialoguerPrompter::default().colorful);
    }

    #[test]
    fn error_types() {
        let err = DialoguerError::Cancelled;
        assert_eq!(err.to_string(), "Configuration cancelled by user");
    }

    #[test]
    fn cancellation_maps_to_config_cancelled() {
        let err: ConfigError = DialoguerError::Cancelled.into();
        assert!(err.is_cancelled());

        let io = std::io::Error::new(std::io::ErrorKind::Interrupted, "ctrl-c");
        let err: ConfigError = map_error(dialoguer::Error::IO(io)).into();
        assert!(err.is_cancelled());
    }

    #[test]
    fn other_io_errors_are_prompt_errors() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err: ConfigError = map_error(dialoguer::Error::IO(io)).into();
        assert!(matches!(err, ConfigError::Prompt(_)));
    }
}
