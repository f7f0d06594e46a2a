//! Turning operator answers into values.
//!
//! Input is never validated: whatever the operator types (trimmed) goes into
//! the document as-is, so a port of `abc` produces `port = abc`. Only empty
//! input is special, and it means "use the default".

use s5_config_types::{ConfigError, Prompt, Prompter};
use tracing::debug;

/// Ask `prompt` and return the trimmed answer, or the default on empty input.
pub fn collect<P: Prompter>(prompter: &mut P, prompt: &Prompt) -> Result<String, ConfigError> {
    let input = prompter.ask(prompt).map_err(Into::<ConfigError>::into)?;
    let trimmed = input.trim();
    if trimmed.is_empty() {
        debug!(path = %prompt.path(), "using default");
        Ok(prompt.default_value().to_string())
    } else {
        debug!(path = %prompt.path(), "using operator input");
        Ok(trimmed.to_string())
    }
}

/// Ask a comma-separated `prompt` and split the answer with [`split_list`].
pub fn collect_list<P: Prompter>(
    prompter: &mut P,
    prompt: &Prompt,
) -> Result<Vec<String>, ConfigError> {
    collect(prompter, prompt).map(|answer| split_list(&answer))
}

/// Split on `,` and trim every item. Empty items are kept.
pub fn split_list(input: &str) -> Vec<String> {
    input.split(',').map(|item| item.trim().to_string()).collect()
}
