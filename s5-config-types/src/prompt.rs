use crate::KeyPath;

/// How the answer to a prompt is interpreted.
///
/// Answers are always collected as free text; the kind only tells a
/// prompter how to present the question and an assembler how to read it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Free text, rendered as a quoted string.
    String,

    /// A number, rendered bare.
    Integer,

    /// `true`/`false` typed by the operator. Not checked.
    Boolean,

    /// Comma-separated items, rendered as an array.
    List,
}

impl ValueKind {
    /// Hint appended to the question by interactive prompters.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::String | Self::Integer => None,
            Self::Boolean => Some("true/false"),
            Self::List => Some("comma-separated"),
        }
    }
}

/// A single question asked by a wizard.
#[derive(Debug, Clone, PartialEq)]
pub struct Prompt {
    /// Where the answer ends up in the document.
    path: KeyPath,

    /// The question text shown to the operator.
    ask: String,

    /// Returned when the operator enters nothing.
    default: String,

    kind: ValueKind,
}

impl Prompt {
    pub fn new(
        path: impl Into<KeyPath>,
        ask: impl Into<String>,
        default: impl Into<String>,
        kind: ValueKind,
    ) -> Self {
        Self {
            path: path.into(),
            ask: ask.into(),
            default: default.into(),
            kind,
        }
    }

    pub fn string(path: impl Into<KeyPath>, ask: impl Into<String>, default: impl Into<String>) -> Self {
        Self::new(path, ask, default, ValueKind::String)
    }

    pub fn integer(path: impl Into<KeyPath>, ask: impl Into<String>, default: impl Into<String>) -> Self {
        Self::new(path, ask, default, ValueKind::Integer)
    }

    pub fn boolean(path: impl Into<KeyPath>, ask: impl Into<String>, default: impl Into<String>) -> Self {
        Self::new(path, ask, default, ValueKind::Boolean)
    }

    pub fn list(path: impl Into<KeyPath>, ask: impl Into<String>, default: impl Into<String>) -> Self {
        Self::new(path, ask, default, ValueKind::List)
    }

    pub fn path(&self) -> &KeyPath {
        &self.path
    }

    pub fn default_value(&self) -> &str {
        &self.default
    }

    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    /// The question decorated with the kind hint, e.g.
    /// `"Expose the store? (true/false)"`.
    pub fn question(&self) -> String {
        match self.kind.hint() {
            Some(hint) => format!("{} ({hint})", self.ask),
            None => self.ask.clone(),
        }
    }
}
