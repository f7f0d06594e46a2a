//! The optional accounts subsystem for server nodes.

use s5_config_types::{ConfigError, Prompt, Prompter, Section};
use tracing::debug;

use crate::collector::{collect, collect_list};

/// Scopes reachable without an account.
pub const DEFAULT_ALWAYS_ALLOWED_SCOPES: &str = "s5/subdomain/load,account/login,account/register,s5/registry/read,s5/metadata,s5/debug/storage_locations,s5/debug/download_urls,s5/blob/redirect";

/// The only answer that enables accounts.
const ENABLED: &str = "true";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountsSettings {
    pub database_path: String,
    pub always_allowed_scopes: Vec<String>,
    /// Free text, written quoted.
    pub admin_api_enabled: String,
}

impl AccountsSettings {
    /// `[accounts]`, `[accounts.database]` and `[http.api.admin]`.
    pub fn sections(&self) -> Vec<Section> {
        vec![
            Section::new("accounts")
                .with_string("enabled", ENABLED)
                .with_array("alwaysAllowedScopes", self.always_allowed_scopes.iter().cloned()),
            Section::new("accounts.database").with_string("path", &self.database_path),
            Section::new("http.api.admin").with_string("enabled", &self.admin_api_enabled),
        ]
    }
}

/// Ask whether accounts are enabled and, if so, how.
///
/// Only the exact answer `true` enables accounts; `false`, `no` or anything
/// else disables them silently. Empty input takes the default, which is
/// `true`.
pub fn select_accounts<P: Prompter>(
    prompter: &mut P,
) -> Result<Option<AccountsSettings>, ConfigError> {
    let enabled = collect(
        prompter,
        &Prompt::boolean("accounts.enabled", "Are accounts enabled?", ENABLED),
    )?;
    if enabled != ENABLED {
        debug!(answer = %enabled, "accounts disabled");
        return Ok(None);
    }

    let database_path = collect(
        prompter,
        &Prompt::string(
            "accounts.database.path",
            "Enter the accounts database path",
            "data/accounts",
        ),
    )?;
    let always_allowed_scopes = collect_list(
        prompter,
        &Prompt::list(
            "accounts.alwaysAllowedScopes",
            "Enter the always allowed scopes",
            DEFAULT_ALWAYS_ALLOWED_SCOPES,
        ),
    )?;
    let admin_api_enabled = collect(
        prompter,
        &Prompt::boolean("http.api.admin.enabled", "Is the admin API enabled?", "false"),
    )?;

    Ok(Some(AccountsSettings {
        database_path,
        always_allowed_scopes,
        admin_api_enabled,
    }))
}
