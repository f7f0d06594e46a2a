use std::fmt;

use crate::{KeyPath, Value};

/// A single `key = value` line.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    key: String,
    value: Value,
}

/// A bracketed table such as `[http.api]`, or the root table when its name
/// is the root path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    name: KeyPath,
    entries: Vec<Entry>,
}

impl Section {
    pub fn new(name: impl Into<KeyPath>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    /// The unnamed table at the top of the document.
    pub fn root() -> Self {
        Self::new(KeyPath::root())
    }

    pub fn with(mut self, key: impl Into<String>, value: Value) -> Self {
        self.entries.push(Entry {
            key: key.into(),
            value,
        });
        self
    }

    pub fn with_string(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.with(key, Value::string(value))
    }

    pub fn with_literal(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.with(key, Value::literal(value))
    }

    pub fn with_array<I, S>(self, key: impl Into<String>, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.with(key, Value::array(items))
    }

    pub fn name(&self) -> &KeyPath {
        &self.name
    }

    /// Look up a value by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.iter().find(|e| e.key == key).map(|e| &e.value)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.name.is_root() {
            writeln!(f, "[{}]", self.name)?;
        }
        for entry in &self.entries {
            writeln!(f, "{} = {}", entry.key, entry.value)?;
        }
        Ok(())
    }
}

/// A complete config file, assembled in memory and rendered once.
///
/// Sections are written in insertion order, each preceded by a blank line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigDocument {
    /// Comment written as the first line.
    pub comment: Option<String>,

    pub sections: Vec<Section>,
}

impl ConfigDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn push(&mut self, section: Section) {
        self.sections.push(section);
    }

    pub fn extend(&mut self, sections: impl IntoIterator<Item = Section>) {
        self.sections.extend(sections);
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.name.as_str() == name)
    }

    /// Names of the bracketed sections, in order. The root table is skipped.
    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections
            .iter()
            .filter(|s| !s.name.is_root())
            .map(|s| s.name.as_str())
    }

    /// Render the document as TOML text.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ConfigDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        if let Some(comment) = &self.comment {
            writeln!(f, "# {comment}")?;
            first = false;
        }
        for section in &self.sections {
            if !first {
                writeln!(f)?;
            }
            first = false;
            write!(f, "{section}")?;
        }
        Ok(())
    }
}
