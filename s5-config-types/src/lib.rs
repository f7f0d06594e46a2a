//! Core types for the s5-config crate.
//!
//! This crate provides the foundational types for the node config wizards:
//! - `Prompt` and `ValueKind` - A single question and how its answer is read
//! - `ConfigDocument`, `Section` and `Value` - The TOML document being built
//! - `KeyPath` - Dotted key paths used for sections and prompt identity
//! - `Prompter` - The trait implemented by answer sources

mod key_path;
pub use key_path::KeyPath;

mod prompt;
pub use prompt::{Prompt, ValueKind};

mod value;
pub use value::Value;

mod document;
pub use document::{ConfigDocument, Section};

mod error;
pub use error::ConfigError;

mod traits;
pub use traits::Prompter;
