//! Scripted prompter for running wizards without user interaction.
//!
//! `ScriptedPrompter` answers prompts from a map keyed by prompt path. Any
//! prompt without a scripted answer gets an empty line, which makes the
//! wizard take that prompt's default.
//!
//! # Example
//!
//! ```rust
//! use s5_config::{Role, ScriptedPrompter, create_config};
//!
//! let dir = tempfile::tempdir().unwrap();
//! let path = dir.path().join("config.toml");
//!
//! let mut prompter = ScriptedPrompter::new()
//!     .with_role(Role::Server)
//!     .with_answer("store.type", "sia")
//!     .with_answer("accounts.enabled", "false");
//!
//! let outcome = create_config(&mut prompter, &path).unwrap();
//! assert_eq!(outcome.as_str(), "successful");
//! ```

use std::collections::{HashMap, VecDeque};

use s5_config_types::{ConfigError, KeyPath, Prompt, Prompter};

use crate::wizard::Role;

/// A prompter that returns pre-configured answers.
#[derive(Debug, Clone, Default)]
pub struct ScriptedPrompter {
    answers: HashMap<String, String>,
    selections: VecDeque<Option<usize>>,
    strict: bool,
    asked: Vec<KeyPath>,
}

/// Error type for ScriptedPrompter.
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("Missing answer for path: {0}")]
    MissingAnswer(String),

    #[error("Missing selection for: {0}")]
    MissingSelection(String),
}

impl From<ScriptError> for ConfigError {
    fn from(err: ScriptError) -> Self {
        ConfigError::prompt(err)
    }
}

impl ScriptedPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer the prompt at `path` with `value`.
    pub fn with_answer(mut self, path: impl Into<String>, value: impl Into<String>) -> Self {
        self.answers.insert(path.into(), value.into());
        self
    }

    /// Queue an index for the next `select` call.
    pub fn with_selection(mut self, index: usize) -> Self {
        self.selections.push_back(Some(index));
        self
    }

    /// Queue the chooser selection for `role`.
    pub fn with_role(self, role: Role) -> Self {
        let index = Role::ALL
            .iter()
            .position(|r| *r == role)
            .unwrap_or_default();
        self.with_selection(index)
    }

    /// Queue an escape for the next `select` call.
    pub fn with_cancel(mut self) -> Self {
        self.selections.push_back(None);
        self
    }

    /// Fail on prompts without a scripted answer instead of taking defaults.
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    /// Paths of every prompt asked so far, in order.
    pub fn asked(&self) -> &[KeyPath] {
        &self.asked
    }
}

impl Prompter for ScriptedPrompter {
    type Error = ScriptError;

    fn ask(&mut self, prompt: &Prompt) -> Result<String, Self::Error> {
        self.asked.push(prompt.path().clone());
        match self.answers.get(prompt.path().as_str()) {
            Some(answer) => Ok(answer.clone()),
            None if self.strict => Err(ScriptError::MissingAnswer(prompt.path().to_string())),
            None => Ok(String::new()),
        }
    }

    fn select(&mut self, question: &str, _items: &[&str]) -> Result<Option<usize>, Self::Error> {
        self.selections
            .pop_front()
            .ok_or_else(|| ScriptError::MissingSelection(question.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unscripted_prompt_gets_empty_line() {
        let mut prompter = ScriptedPrompter::new();
        let answer = prompter
            .ask(&Prompt::string("name", "Enter the node name", "my-s5-node"))
            .unwrap();
        assert_eq!(answer, "");
        assert_eq!(prompter.asked(), &[KeyPath::new("name")]);
    }

    #[test]
    fn strict_rejects_unscripted_prompt() {
        let mut prompter = ScriptedPrompter::new().strict();
        let err = prompter
            .ask(&Prompt::string("name", "Enter the node name", "my-s5-node"))
            .unwrap_err();
        assert_eq!(err.to_string(), "Missing answer for path: name");
    }

    #[test]
    fn selections_are_consumed_in_order() {
        let mut prompter = ScriptedPrompter::new().with_role(Role::Client).with_cancel();
        assert_eq!(prompter.select("q", &["a", "b"]).unwrap(), Some(1));
        assert_eq!(prompter.select("q", &["a", "b"]).unwrap(), None);
        assert!(matches!(
            prompter.select("q", &["a", "b"]),
            Err(ScriptError::MissingSelection(_))
        ));
    }
}
