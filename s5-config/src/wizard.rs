//! Server and client wizards and the document they produce.

use std::fmt;

use s5_config_types::{ConfigDocument, ConfigError, Prompter};
use tracing::debug;

use crate::accounts::{AccountsSettings, select_accounts};
use crate::node::{NodeDefaults, NodeSettings};
use crate::store::{StoreSettings, select_store};

/// Link written as the first line of every generated file.
pub const DOCUMENTATION_URL: &str = "https://docs.sfive.net/install/config";

/// Which kind of node the config is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Server,
    Client,
}

impl Role {
    /// In the order offered by the config-type chooser.
    pub const ALL: [Role; 2] = [Self::Server, Self::Client];

    /// Chooser label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Server => "Server config.toml",
            Self::Client => "Client config.toml",
        }
    }

    pub fn defaults(&self) -> NodeDefaults {
        NodeDefaults::default()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Server => "Server",
            Self::Client => "Client",
        })
    }
}

/// Everything a server wizard run collected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub node: NodeSettings,
    pub store: Option<StoreSettings>,
    pub accounts: Option<AccountsSettings>,
}

impl ServerConfig {
    /// Shared fields, then the store, then accounts.
    pub fn collect<P: Prompter>(
        prompter: &mut P,
        defaults: &NodeDefaults,
    ) -> Result<Self, ConfigError> {
        let node = NodeSettings::collect(prompter, defaults)?;
        let store = select_store(prompter)?;
        let accounts = select_accounts(prompter)?;
        Ok(Self {
            node,
            store,
            accounts,
        })
    }

    pub fn to_document(&self) -> ConfigDocument {
        compose(&self.node, self.store.as_ref(), self.accounts.as_ref())
    }
}

/// Everything a client wizard run collected. Clients never get store or
/// accounts sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub node: NodeSettings,
}

impl ClientConfig {
    pub fn collect<P: Prompter>(
        prompter: &mut P,
        defaults: &NodeDefaults,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            node: NodeSettings::collect(prompter, defaults)?,
        })
    }

    pub fn to_document(&self) -> ConfigDocument {
        compose(&self.node, None, None)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeConfig {
    Server(ServerConfig),
    Client(ClientConfig),
}

impl NodeConfig {
    /// Run the wizard for `role` with its default answers.
    pub fn collect<P: Prompter>(role: Role, prompter: &mut P) -> Result<Self, ConfigError> {
        debug!(%role, "starting wizard");
        let defaults = role.defaults();
        Ok(match role {
            Role::Server => Self::Server(ServerConfig::collect(prompter, &defaults)?),
            Role::Client => Self::Client(ClientConfig::collect(prompter, &defaults)?),
        })
    }

    pub fn role(&self) -> Role {
        match self {
            Self::Server(_) => Role::Server,
            Self::Client(_) => Role::Client,
        }
    }

    pub fn to_document(&self) -> ConfigDocument {
        match self {
            Self::Server(config) => config.to_document(),
            Self::Client(config) => config.to_document(),
        }
    }
}

/// Assemble the document in its fixed order: shared sections, then store
/// sections, then accounts sections.
pub fn compose(
    node: &NodeSettings,
    store: Option<&StoreSettings>,
    accounts: Option<&AccountsSettings>,
) -> ConfigDocument {
    let mut document =
        ConfigDocument::new().with_comment(format!("! Documentation: {DOCUMENTATION_URL}"));
    document.extend(node.sections());
    if let Some(store) = store {
        document.extend(store.sections());
    }
    if let Some(accounts) = accounts {
        document.extend(accounts.sections());
    }
    document
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ScriptedPrompter;

    const FIXED: [&str; 5] = ["keypair", "cache", "database", "http.api", "p2p.peers"];

    #[test]
    fn client_has_only_fixed_sections() {
        let mut prompter = ScriptedPrompter::new();
        let config = NodeConfig::collect(Role::Client, &mut prompter).unwrap();
        assert_eq!(config.role(), Role::Client);

        let document = config.to_document();
        let names: Vec<_> = document.section_names().collect();
        assert_eq!(names, FIXED);
    }

    #[test]
    fn server_defaults_include_ipfs_and_accounts() {
        let mut prompter = ScriptedPrompter::new();
        let config = NodeConfig::collect(Role::Server, &mut prompter).unwrap();

        let document = config.to_document();
        let names: Vec<_> = document.section_names().collect();
        let mut want = FIXED.to_vec();
        want.extend([
            "store.ipfs",
            "store",
            "http.api.delete",
            "accounts",
            "accounts.database",
            "http.api.admin",
        ]);
        assert_eq!(names, want);
    }

    #[test]
    fn server_without_store_or_accounts() {
        let mut prompter = ScriptedPrompter::new()
            .with_answer("store.type", "none")
            .with_answer("accounts.enabled", "false");
        let config = NodeConfig::collect(Role::Server, &mut prompter).unwrap();

        let NodeConfig::Server(server) = &config else {
            panic!("expected a server config");
        };
        assert!(server.store.is_none());
        assert!(server.accounts.is_none());

        let names: Vec<_> = config.to_document().section_names().map(String::from).collect();
        assert_eq!(names, FIXED);
    }

    #[test]
    fn document_starts_with_documentation_link() {
        let mut prompter = ScriptedPrompter::new().with_answer("name", "n1");
        let text = NodeConfig::collect(Role::Client, &mut prompter)
            .unwrap()
            .to_document()
            .render();
        assert!(text.starts_with(
            "# ! Documentation: https://docs.sfive.net/install/config\n\nname = \"n1\"\n\n[keypair]\n"
        ));
        assert!(text.ends_with("]\n"));
    }

    #[test]
    fn labels() {
        let labels: Vec<_> = Role::ALL.iter().map(Role::label).collect();
        assert_eq!(labels, vec!["Server config.toml", "Client config.toml"]);
    }
}
