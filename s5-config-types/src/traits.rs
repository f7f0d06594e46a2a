use crate::{ConfigError, Prompt};

/// Source of operator answers.
///
/// The wizards never touch stdin directly; they go through a `Prompter` so
/// the same flow runs against a terminal or a scripted list of answers.
pub trait Prompter {
    /// The error type for this prompter.
    type Error: Into<ConfigError>;

    /// Ask a single question and return the raw line the operator typed.
    ///
    /// Implementations show `prompt.question()` together with
    /// `prompt.default_value()`. Falling back to the default on empty input
    /// is the caller's job, so returning an empty string is fine.
    fn ask(&mut self, prompt: &Prompt) -> Result<String, Self::Error>;

    /// Offer a single choice among `items`.
    ///
    /// Returns `Ok(None)` when the operator escapes the prompt.
    fn select(&mut self, question: &str, items: &[&str]) -> Result<Option<usize>, Self::Error>;
}
