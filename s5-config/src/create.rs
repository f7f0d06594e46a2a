//! Choosing a config type and writing the result to disk.

use std::fs;
use std::path::{Path, PathBuf};

use s5_config_types::{ConfigDocument, ConfigError, Prompter};
use tracing::info;

use crate::wizard::{NodeConfig, Role};

/// Asked before any other question.
pub const CONFIG_TYPE_QUESTION: &str = "Select config type to create";

/// File written when no name is given.
pub const DEFAULT_FILE_NAME: &str = "config.toml";

/// How a [`create_config`] run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    /// The wizard ran and its config was written to `path`.
    Successful { role: Role, path: PathBuf },

    /// The operator escaped the config-type chooser; nothing was written.
    Canceled,
}

impl CreateOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Successful { .. } => "successful",
            Self::Canceled => "canceled",
        }
    }

    pub fn is_canceled(&self) -> bool {
        matches!(self, Self::Canceled)
    }
}

/// Offer the server/client choice. `None` means the operator canceled.
pub fn choose_role<P: Prompter>(prompter: &mut P) -> Result<Option<Role>, ConfigError> {
    let labels: Vec<_> = Role::ALL.iter().map(Role::label).collect();
    let Some(idx) = prompter
        .select(CONFIG_TYPE_QUESTION, &labels)
        .map_err(Into::<ConfigError>::into)?
    else {
        return Ok(None);
    };

    Role::ALL.get(idx).copied().map(Some).ok_or_else(|| {
        ConfigError::prompt(anyhow::anyhow!(
            "selection {idx} is out of range for {} config types",
            Role::ALL.len()
        ))
    })
}

/// Ask for a config type, run its wizard and write the file.
///
/// An existing file at `path` is overwritten without asking.
pub fn create_config<P: Prompter>(
    prompter: &mut P,
    path: impl AsRef<Path>,
) -> Result<CreateOutcome, ConfigError> {
    let path = path.as_ref();

    let Some(role) = choose_role(prompter)? else {
        info!("configuration canceled");
        return Ok(CreateOutcome::Canceled);
    };

    let config = NodeConfig::collect(role, prompter)?;
    write_config(path, &config.to_document())?;
    info!(%role, path = %path.display(), "configuration saved");

    Ok(CreateOutcome::Successful {
        role,
        path: path.to_path_buf(),
    })
}

/// Render `document` and write it to `path`.
pub fn write_config(path: &Path, document: &ConfigDocument) -> Result<(), ConfigError> {
    fs::write(path, document.render()).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}
