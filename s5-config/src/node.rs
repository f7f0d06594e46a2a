//! Fields shared by the server and client wizards.

use s5_config_types::{ConfigError, Prompt, Prompter, Section};

use crate::collector::{collect, collect_list};
use crate::seed::{SEED_LENGTH, generate_seed};

/// Peers offered when the operator does not name any.
pub const DEFAULT_INITIAL_PEERS: &str = "wss://z2DWuWNZcdSyZLpXFK2uCU3haaWMXrDAgxzv17sDEMHstZb@s5.garden/s5/p2p,wss://z2DWuPbL5pweybXnEB618pMnV58ECj2VPDNfVGm3tFqBvjF@s5.ninja/s5/p2p";

/// Defaults offered for the shared fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeDefaults {
    pub name: String,
    pub cache_path: String,
    pub cache_max_size_gb: String,
    pub database_path: String,
    pub http_api_port: String,
    pub http_api_domain: String,
    pub initial_peers: String,
    /// Length of the generated keypair seed default.
    pub seed_length: usize,
}

impl Default for NodeDefaults {
    fn default() -> Self {
        Self {
            name: "my-s5-node".into(),
            cache_path: "tmp/s5/cache".into(),
            cache_max_size_gb: "4".into(),
            database_path: "data/hive".into(),
            http_api_port: "5522".into(),
            http_api_domain: "localhost".into(),
            initial_peers: DEFAULT_INITIAL_PEERS.into(),
            seed_length: SEED_LENGTH,
        }
    }
}

/// Answers for the always-present sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeSettings {
    pub name: String,
    pub keypair_seed: String,
    pub cache_path: String,
    pub cache_max_size_gb: String,
    pub database_path: String,
    pub http_api_port: String,
    pub http_api_domain: String,
    pub initial_peers: Vec<String>,
}

impl NodeSettings {
    /// Ask for every shared field, in document order.
    ///
    /// A fresh seed is generated as the keypair default on every call.
    pub fn collect<P: Prompter>(
        prompter: &mut P,
        defaults: &NodeDefaults,
    ) -> Result<Self, ConfigError> {
        let name = collect(
            prompter,
            &Prompt::string("name", "Enter the node name", &defaults.name),
        )?;
        let keypair_seed = collect(
            prompter,
            &Prompt::string(
                "keypair.seed",
                "Enter the keypair seed",
                generate_seed(defaults.seed_length),
            ),
        )?;
        let cache_path = collect(
            prompter,
            &Prompt::string("cache.path", "Enter the cache path", &defaults.cache_path),
        )?;
        let cache_max_size_gb = collect(
            prompter,
            &Prompt::integer(
                "cache.maxSizeInGB",
                "Enter the cache max size in GB",
                &defaults.cache_max_size_gb,
            ),
        )?;
        let database_path = collect(
            prompter,
            &Prompt::string(
                "database.path",
                "Enter the database path",
                &defaults.database_path,
            ),
        )?;
        let http_api_port = collect(
            prompter,
            &Prompt::integer(
                "http.api.port",
                "Enter the HTTP API port",
                &defaults.http_api_port,
            ),
        )?;
        let http_api_domain = collect(
            prompter,
            &Prompt::string(
                "http.api.domain",
                "Enter the HTTP API domain",
                &defaults.http_api_domain,
            ),
        )?;
        let initial_peers = collect_list(
            prompter,
            &Prompt::list(
                "p2p.peers.initial",
                "Enter the initial peers",
                &defaults.initial_peers,
            ),
        )?;

        Ok(Self {
            name,
            keypair_seed,
            cache_path,
            cache_max_size_gb,
            database_path,
            http_api_port,
            http_api_domain,
            initial_peers,
        })
    }

    /// The six fixed sections: root, keypair, cache, database, http.api and
    /// p2p.peers.
    pub fn sections(&self) -> Vec<Section> {
        vec![
            Section::root().with_string("name", &self.name),
            Section::new("keypair").with_string("seed", &self.keypair_seed),
            Section::new("cache")
                .with_string("path", &self.cache_path)
                .with_literal("maxSizeInGB", &self.cache_max_size_gb),
            Section::new("database").with_string("path", &self.database_path),
            Section::new("http.api")
                .with_literal("port", &self.http_api_port)
                .with_string("domain", &self.http_api_domain),
            Section::new("p2p.peers").with_array("initial", self.initial_peers.iter().cloned()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ScriptedPrompter;

    #[test]
    fn all_defaults() {
        let mut prompter = ScriptedPrompter::new();
        let node = NodeSettings::collect(&mut prompter, &NodeDefaults::default()).unwrap();

        assert_eq!(node.name, "my-s5-node");
        assert_eq!(node.keypair_seed.len(), SEED_LENGTH);
        assert_eq!(node.cache_path, "tmp/s5/cache");
        assert_eq!(node.cache_max_size_gb, "4");
        assert_eq!(node.database_path, "data/hive");
        assert_eq!(node.http_api_port, "5522");
        assert_eq!(node.http_api_domain, "localhost");
        assert_eq!(node.initial_peers.len(), 2);
        assert!(node.initial_peers[0].ends_with("@s5.garden/s5/p2p"));
        assert!(node.initial_peers[1].ends_with("@s5.ninja/s5/p2p"));
    }

    #[test]
    fn asks_in_document_order() {
        let mut prompter = ScriptedPrompter::new();
        NodeSettings::collect(&mut prompter, &NodeDefaults::default()).unwrap();

        let asked: Vec<_> = prompter.asked().iter().map(|p| p.as_str()).collect();
        assert_eq!(
            asked,
            vec![
                "name",
                "keypair.seed",
                "cache.path",
                "cache.maxSizeInGB",
                "database.path",
                "http.api.port",
                "http.api.domain",
                "p2p.peers.initial",
            ]
        );
    }

    #[test]
    fn operator_answers_win() {
        let mut prompter = ScriptedPrompter::new()
            .with_answer("name", "edge-1")
            .with_answer("keypair.seed", "fixed")
            .with_answer("http.api.port", "8080")
            .with_answer("p2p.peers.initial", "wss://a, wss://b ,wss://c");
        let node = NodeSettings::collect(&mut prompter, &NodeDefaults::default()).unwrap();

        assert_eq!(node.name, "edge-1");
        assert_eq!(node.keypair_seed, "fixed");
        assert_eq!(node.http_api_port, "8080");
        assert_eq!(node.initial_peers, vec!["wss://a", "wss://b", "wss://c"]);
    }

    #[test]
    fn renders_numbers_bare() {
        let mut prompter = ScriptedPrompter::new().with_answer("keypair.seed", "abc");
        let node = NodeSettings::collect(&mut prompter, &NodeDefaults::default()).unwrap();
        let rendered: String = node.sections().iter().map(|s| s.to_string()).collect();

        assert!(rendered.contains("name = \"my-s5-node\"\n"));
        assert!(rendered.contains("[keypair]\nseed = \"abc\"\n"));
        assert!(rendered.contains("maxSizeInGB = 4\n"));
        assert!(rendered.contains("[http.api]\nport = 5522\ndomain = \"localhost\"\n"));
        assert!(rendered.contains("[p2p.peers]\ninitial = [\n  'wss://"));
    }
}
