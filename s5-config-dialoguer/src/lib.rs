//! # s5-config-dialoguer
//!
//! Dialoguer prompter for s5-config.
//!
//! This crate provides a command-line interface for answering the node
//! config wizards using the `dialoguer` library. Questions are presented
//! step-by-step in a classic CLI wizard style.
//!
//! ## Example
//!
//! ```rust,ignore
//! use s5_config::create_config;
//! use s5_config_dialoguer::DialoguerPrompter;
//!
//! fn main() -> anyhow::Result<()> {
//!     let mut prompter = DialoguerPrompter::new();
//!     let outcome = create_config(&mut prompter, "config.toml")?;
//!     println!("Config creating {}", outcome.as_str());
//!     Ok(())
//! }
//! ```

mod backend;

pub use backend::{DialoguerError, DialoguerPrompter};
