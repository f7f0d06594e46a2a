use std::fmt::{self, Write as _};

/// A value written on the right-hand side of `key = value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// A double-quoted basic string.
    String(String),

    /// Written exactly as given (numbers). Operator input is not validated,
    /// so this may produce a document the node refuses to load.
    Literal(String),

    /// A multi-line array of single-quoted literal strings.
    Array(Vec<String>),
}

impl Value {
    pub fn string(s: impl Into<String>) -> Self {
        Self::String(s.into())
    }

    pub fn literal(s: impl Into<String>) -> Self {
        Self::Literal(s.into())
    }

    pub fn array<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Array(items.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => write_basic_string(f, s),
            Self::Literal(s) => f.write_str(s),
            Self::Array(items) if items.is_empty() => f.write_str("[]"),
            Self::Array(items) => {
                f.write_str("[\n")?;
                for (idx, item) in items.iter().enumerate() {
                    f.write_str("  ")?;
                    if needs_basic_string(item) {
                        write_basic_string(f, item)?;
                    } else {
                        write!(f, "'{item}'")?;
                    }
                    if idx + 1 < items.len() {
                        f.write_char(',')?;
                    }
                    f.write_char('\n')?;
                }
                f.write_char(']')
            }
        }
    }
}

/// Literal strings cannot hold a single quote or control characters.
fn needs_basic_string(s: &str) -> bool {
    s.chars().any(|c| c == '\'' || (c.is_control() && c != '\t'))
}

fn write_basic_string(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    f.write_char('"')?;
    for c in s.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            c if c.is_control() => write!(f, "\\u{:04X}", c as u32)?,
            c => f.write_char(c)?,
        }
    }
    f.write_char('"')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_is_quoted() {
        assert_eq!(Value::string("my-s5-node").to_string(), "\"my-s5-node\"");
    }

    #[test]
    fn string_escapes_quotes_and_backslashes() {
        assert_eq!(
            Value::string(r#"C:\data "hive""#).to_string(),
            r#""C:\\data \"hive\"""#
        );
    }

    #[test]
    fn literal_is_verbatim() {
        assert_eq!(Value::literal("5522").to_string(), "5522");
        assert_eq!(Value::literal("not-a-number").to_string(), "not-a-number");
    }

    #[test]
    fn array_is_multiline() {
        let value = Value::array(["a", "b", "c"]);
        assert_eq!(value.to_string(), "[\n  'a',\n  'b',\n  'c'\n]");
    }

    #[test]
    fn empty_array() {
        assert_eq!(Value::Array(Vec::new()).to_string(), "[]");
    }

    #[test]
    fn array_item_with_single_quote_falls_back_to_basic_string() {
        let value = Value::array(["it's"]);
        assert_eq!(value.to_string(), "[\n  \"it's\"\n]");
    }
}
