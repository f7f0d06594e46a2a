//! # s5-config
//!
//! Interactive `config.toml` generator for S5 nodes. Prompter-agnostic.
//!
//! The wizards ask a fixed sequence of questions through a [`Prompter`] and
//! assemble a [`ConfigDocument`] for either a server or a client node.
//! Server nodes additionally choose a storage backend and may enable the
//! accounts subsystem.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use s5_config::create_config;
//! use s5_config_dialoguer::DialoguerPrompter;
//!
//! let mut prompter = DialoguerPrompter::new();
//! let outcome = create_config(&mut prompter, "config.toml")?;
//! println!("Config creating {}", outcome.as_str());
//! ```
//!
//! ## Answers
//!
//! Every answer is free text. Empty input takes the default; anything else
//! is trimmed and written unchanged, numbers bare and everything else quoted.
//! Yes/no answers such as `exposeStore` stay strings and are written quoted.
//! Accounts are only enabled by the exact answer `true`.
//!
//! ## Prompters
//!
//! - `s5-config-dialoguer` - terminal prompts via dialoguer
//! - [`ScriptedPrompter`] - canned answers, for tests

// Re-export all types from s5-config-types
pub use s5_config_types::*;

pub mod accounts;
pub mod collector;
pub mod node;
pub mod seed;
pub mod store;

mod create;
pub use create::{
    CONFIG_TYPE_QUESTION, CreateOutcome, DEFAULT_FILE_NAME, choose_role, create_config,
    write_config,
};

mod wizard;
pub use wizard::{ClientConfig, DOCUMENTATION_URL, NodeConfig, Role, ServerConfig, compose};

// Scripted prompter for running wizards without user interaction
mod scripted;
pub use scripted::{ScriptError, ScriptedPrompter};

pub use accounts::{AccountsSettings, select_accounts};
pub use collector::{collect, collect_list, split_list};
pub use node::{NodeDefaults, NodeSettings};
pub use seed::{SEED_LENGTH, generate_seed};
pub use store::{StoreBackend, StoreKind, StoreSettings, select_store};
