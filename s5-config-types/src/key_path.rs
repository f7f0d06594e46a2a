use std::fmt;

/// A dotted TOML key path, e.g. `"http.api.port"`.
///
/// Used both as the name of a rendered section (`[store.local.http]`) and as
/// the identity of a prompt, so scripted prompters can answer by path.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct KeyPath {
    path: String,
}

impl KeyPath {
    /// Create a new path from a dot-separated string.
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// The root path (top-level keys such as `name`).
    pub fn root() -> Self {
        Self {
            path: String::new(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.path
    }

    pub fn is_root(&self) -> bool {
        self.path.is_empty()
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path)
    }
}

impl From<&str> for KeyPath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for KeyPath {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}
