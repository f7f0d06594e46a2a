//! Storage backend selection for server nodes.
//!
//! Every backend owns its follow-up prompts and its `[store.<kind>]`
//! section. Adding a backend means adding a [`StoreKind`] variant and a
//! struct; the matches below are exhaustive so the compiler points at the
//! rest.

use std::fmt;

use s5_config_types::{ConfigError, Prompt, Prompter, Section};
use tracing::debug;

use crate::collector::collect;

/// The storage backends a server node can be configured with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreKind {
    Ipfs,
    Local,
    Pixeldrain,
    S3,
    Sia,
    Webdav,
}

impl StoreKind {
    pub const ALL: [StoreKind; 6] = [
        Self::Ipfs,
        Self::Local,
        Self::Pixeldrain,
        Self::S3,
        Self::Sia,
        Self::Webdav,
    ];

    /// The name typed by the operator and used in `[store.<name>]`.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Ipfs => "ipfs",
            Self::Local => "local",
            Self::Pixeldrain => "pixeldrain",
            Self::S3 => "s3",
            Self::Sia => "sia",
            Self::Webdav => "webdav",
        }
    }

    /// Exact, case-sensitive match on [`StoreKind::name`].
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// Ask the backend-specific questions.
    pub fn collect<P: Prompter>(self, prompter: &mut P) -> Result<StoreBackend, ConfigError> {
        Ok(match self {
            Self::Ipfs => StoreBackend::Ipfs(IpfsStore::collect(prompter)?),
            Self::Local => StoreBackend::Local(LocalStore::collect(prompter)?),
            Self::Pixeldrain => StoreBackend::Pixeldrain(PixeldrainStore::collect(prompter)?),
            Self::S3 => StoreBackend::S3(S3Store::collect(prompter)?),
            Self::Sia => StoreBackend::Sia(SiaStore::collect(prompter)?),
            Self::Webdav => StoreBackend::Webdav(WebdavStore::collect(prompter)?),
        })
    }
}

impl fmt::Display for StoreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IpfsStore {
    pub gateway_url: String,
    pub api_url: String,
    pub api_authorization_header: String,
}

impl IpfsStore {
    fn collect<P: Prompter>(prompter: &mut P) -> Result<Self, ConfigError> {
        Ok(Self {
            gateway_url: collect(
                prompter,
                &Prompt::string(
                    "store.ipfs.gatewayUrl",
                    "Enter the Ipfs Gateway URL",
                    "http://localhost:8080",
                ),
            )?,
            api_url: collect(
                prompter,
                &Prompt::string(
                    "store.ipfs.apiUrl",
                    "Enter the Ipfs Api URL",
                    "http://localhost:5001",
                ),
            )?,
            api_authorization_header: collect(
                prompter,
                &Prompt::string(
                    "store.ipfs.apiAuthorizationHeader",
                    "Enter the Ipfs Api Authorization Header",
                    "Basic czV1c2VyOnRlc3Q=",
                ),
            )?,
        })
    }

    fn sections(&self) -> Vec<Section> {
        vec![
            Section::new("store.ipfs")
                .with_string("gatewayUrl", &self.gateway_url)
                .with_string("apiUrl", &self.api_url)
                .with_string("apiAuthorizationHeader", &self.api_authorization_header),
        ]
    }
}

/// A store on local disk, served over its own HTTP listener.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalStore {
    pub path: String,
    pub http_bind: String,
    pub http_port: String,
    pub http_url: String,
}

impl LocalStore {
    fn collect<P: Prompter>(prompter: &mut P) -> Result<Self, ConfigError> {
        Ok(Self {
            path: collect(
                prompter,
                &Prompt::string("store.local.path", "Enter the local store path", "data/store"),
            )?,
            http_bind: collect(
                prompter,
                &Prompt::string(
                    "store.local.http.bind",
                    "Enter the local store HTTP bind address",
                    "127.0.0.1",
                ),
            )?,
            http_port: collect(
                prompter,
                &Prompt::integer(
                    "store.local.http.port",
                    "Enter the local store HTTP port",
                    "8989",
                ),
            )?,
            http_url: collect(
                prompter,
                &Prompt::string(
                    "store.local.http.url",
                    "Enter the local store HTTP URL",
                    "http://localhost:8989",
                ),
            )?,
        })
    }

    fn sections(&self) -> Vec<Section> {
        vec![
            Section::new("store.local").with_string("path", &self.path),
            Section::new("store.local.http")
                .with_string("bind", &self.http_bind)
                .with_literal("port", &self.http_port)
                .with_string("url", &self.http_url),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixeldrainStore {
    pub api_key: String,
}

impl PixeldrainStore {
    fn collect<P: Prompter>(prompter: &mut P) -> Result<Self, ConfigError> {
        Ok(Self {
            api_key: collect(
                prompter,
                &Prompt::string(
                    "store.pixeldrain.apiKey",
                    "Enter the Pixeldrain Api Key",
                    "pixeldrain-api-key",
                ),
            )?,
        })
    }

    fn sections(&self) -> Vec<Section> {
        vec![Section::new("store.pixeldrain").with_string("apiKey", &self.api_key)]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct S3Store {
    pub access_key_id: String,
    pub bucket: String,
    pub endpoint: String,
    pub secret_access_key: String,
}

impl S3Store {
    fn collect<P: Prompter>(prompter: &mut P) -> Result<Self, ConfigError> {
        Ok(Self {
            access_key_id: collect(
                prompter,
                &Prompt::string("store.s3.accessKeyId", "Enter the S3 access key", "YOUR_ACCESS_KEY"),
            )?,
            bucket: collect(
                prompter,
                &Prompt::string("store.s3.bucket", "Enter the S3 bucket", "YOUR_BUCKET_NAME"),
            )?,
            endpoint: collect(
                prompter,
                &Prompt::string("store.s3.endpoint", "Enter the S3 Endpoint", "YOUR_S3_ENDPOINT"),
            )?,
            secret_access_key: collect(
                prompter,
                &Prompt::string(
                    "store.s3.secretAccessKey",
                    "Enter the S3 secret access key",
                    "YOUR_SECRET_KEY",
                ),
            )?,
        })
    }

    fn sections(&self) -> Vec<Section> {
        vec![
            Section::new("store.s3")
                .with_string("accessKeyId", &self.access_key_id)
                .with_string("bucket", &self.bucket)
                .with_string("endpoint", &self.endpoint)
                .with_string("secretAccessKey", &self.secret_access_key),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiaStore {
    pub worker_api_url: String,
    pub password: String,
    pub download_url: String,
}

impl SiaStore {
    fn collect<P: Prompter>(prompter: &mut P) -> Result<Self, ConfigError> {
        Ok(Self {
            worker_api_url: collect(
                prompter,
                &Prompt::string(
                    "store.sia.workerApiUrl",
                    "Enter the Sia worker Api Url",
                    "http://localhost:9980/api/worker",
                ),
            )?,
            password: collect(
                prompter,
                &Prompt::string(
                    "store.sia.password",
                    "Enter the Sia Api password",
                    "sia-api-password",
                ),
            )?,
            download_url: collect(
                prompter,
                &Prompt::string(
                    "store.sia.downloadUrl",
                    "Enter the Sia Download Url",
                    "https://dl.YOUR.DOMAIN",
                ),
            )?,
        })
    }

    fn sections(&self) -> Vec<Section> {
        vec![
            Section::new("store.sia")
                .with_string("workerApiUrl", &self.worker_api_url)
                .with_string("password", &self.password)
                .with_string("downloadUrl", &self.download_url),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebdavStore {
    pub base_url: String,
    pub username: String,
    pub password: String,
    pub public_url: String,
}

impl WebdavStore {
    fn collect<P: Prompter>(prompter: &mut P) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: collect(
                prompter,
                &Prompt::string(
                    "store.webdav.baseUrl",
                    "Enter the WebDAV base URL",
                    "https://webdav.example.com/webdav/user",
                ),
            )?,
            username: collect(
                prompter,
                &Prompt::string(
                    "store.webdav.username",
                    "Enter the WebDAV username",
                    "webdav-username",
                ),
            )?,
            password: collect(
                prompter,
                &Prompt::string(
                    "store.webdav.password",
                    "Enter the WebDAV password",
                    "webdav-password",
                ),
            )?,
            public_url: collect(
                prompter,
                &Prompt::string(
                    "store.webdav.publicUrl",
                    "Enter the WebDAV public URL",
                    "https://webdav.example.com/public",
                ),
            )?,
        })
    }

    fn sections(&self) -> Vec<Section> {
        vec![
            Section::new("store.webdav")
                .with_string("baseUrl", &self.base_url)
                .with_string("username", &self.username)
                .with_string("password", &self.password)
                .with_string("publicUrl", &self.public_url),
        ]
    }
}

/// One configured storage backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    Ipfs(IpfsStore),
    Local(LocalStore),
    Pixeldrain(PixeldrainStore),
    S3(S3Store),
    Sia(SiaStore),
    Webdav(WebdavStore),
}

impl StoreBackend {
    pub fn kind(&self) -> StoreKind {
        match self {
            Self::Ipfs(_) => StoreKind::Ipfs,
            Self::Local(_) => StoreKind::Local,
            Self::Pixeldrain(_) => StoreKind::Pixeldrain,
            Self::S3(_) => StoreKind::S3,
            Self::Sia(_) => StoreKind::Sia,
            Self::Webdav(_) => StoreKind::Webdav,
        }
    }

    /// The `[store.<kind>]` section(s).
    pub fn sections(&self) -> Vec<Section> {
        match self {
            Self::Ipfs(store) => store.sections(),
            Self::Local(store) => store.sections(),
            Self::Pixeldrain(store) => store.sections(),
            Self::S3(store) => store.sections(),
            Self::Sia(store) => store.sections(),
            Self::Webdav(store) => store.sections(),
        }
    }
}

/// A backend plus the two switches asked for every backend.
///
/// Both switches are kept as typed and written as quoted strings
/// (`exposeStore = "false"`), which is what existing node configs contain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreSettings {
    pub backend: StoreBackend,
    pub expose_store: String,
    pub delete_api_enabled: String,
}

impl StoreSettings {
    /// Backend sections, then `[store]` and `[http.api.delete]`.
    pub fn sections(&self) -> Vec<Section> {
        let mut sections = self.backend.sections();
        sections.push(Section::new("store").with_string("exposeStore", &self.expose_store));
        sections.push(
            Section::new("http.api.delete").with_string("deleteApiEnabled", &self.delete_api_enabled),
        );
        sections
    }
}

/// Ask for a store type and, when it is known, its settings.
///
/// An unknown store type is not an error: the document simply gets no store
/// sections and no further store questions are asked.
pub fn select_store<P: Prompter>(prompter: &mut P) -> Result<Option<StoreSettings>, ConfigError> {
    let names: Vec<_> = StoreKind::ALL.iter().map(StoreKind::name).collect();
    let answer = collect(
        prompter,
        &Prompt::string(
            "store.type",
            format!("Select the store type ({})", names.join("/")),
            StoreKind::Ipfs.name(),
        ),
    )?;

    let Some(kind) = StoreKind::from_name(&answer) else {
        debug!(store_type = %answer, "unknown store type, leaving store unconfigured");
        return Ok(None);
    };

    let backend = kind.collect(prompter)?;
    let expose_store = collect(
        prompter,
        &Prompt::boolean("store.exposeStore", "Expose the store?", "false"),
    )?;
    let delete_api_enabled = collect(
        prompter,
        &Prompt::boolean(
            "http.api.delete.deleteApiEnabled",
            "Is the delete API enabled?",
            "false",
        ),
    )?;

    Ok(Some(StoreSettings {
        backend,
        expose_store,
        delete_api_enabled,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ScriptedPrompter;

    fn rendered(settings: &StoreSettings) -> String {
        settings.sections().iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn kind_names_round_trip() {
        for kind in StoreKind::ALL {
            assert_eq!(StoreKind::from_name(kind.name()), Some(kind));
        }
    }

    #[test]
    fn kind_match_is_exact() {
        assert_eq!(StoreKind::from_name("IPFS"), None);
        assert_eq!(StoreKind::from_name("ftp"), None);
        assert_eq!(StoreKind::from_name(""), None);
    }

    #[test]
    fn defaults_to_ipfs() {
        let mut prompter = ScriptedPrompter::new();
        let settings = select_store(&mut prompter).unwrap().unwrap();

        assert_eq!(settings.backend.kind(), StoreKind::Ipfs);
        assert_eq!(settings.expose_store, "false");
        assert_eq!(settings.delete_api_enabled, "false");
        assert_eq!(
            rendered(&settings),
            "[store.ipfs]\n\
             gatewayUrl = \"http://localhost:8080\"\n\
             apiUrl = \"http://localhost:5001\"\n\
             apiAuthorizationHeader = \"Basic czV1c2VyOnRlc3Q=\"\n\
             [store]\n\
             exposeStore = \"false\"\n\
             [http.api.delete]\n\
             deleteApiEnabled = \"false\"\n"
        );
    }

    #[test]
    fn unknown_type_asks_nothing_more() {
        let mut prompter = ScriptedPrompter::new().with_answer("store.type", "ftp");
        assert!(select_store(&mut prompter).unwrap().is_none());
        assert_eq!(prompter.asked().len(), 1);
    }

    #[test]
    fn local_has_nested_http_section() {
        let mut prompter = ScriptedPrompter::new()
            .with_answer("store.type", "local")
            .with_answer("store.local.http.port", "9000");
        let settings = select_store(&mut prompter).unwrap().unwrap();

        let names: Vec<_> = settings
            .sections()
            .iter()
            .map(|s| s.name().to_string())
            .collect();
        assert_eq!(
            names,
            vec!["store.local", "store.local.http", "store", "http.api.delete"]
        );
        assert!(rendered(&settings).contains("[store.local.http]\nbind = \"127.0.0.1\"\nport = 9000\n"));
    }

    #[test]
    fn s3_values_are_all_quoted() {
        let mut prompter = ScriptedPrompter::new()
            .with_answer("store.type", "s3")
            .with_answer("store.s3.bucket", "media");
        let settings = select_store(&mut prompter).unwrap().unwrap();

        assert_eq!(
            settings.backend,
            StoreBackend::S3(S3Store {
                access_key_id: "YOUR_ACCESS_KEY".into(),
                bucket: "media".into(),
                endpoint: "YOUR_S3_ENDPOINT".into(),
                secret_access_key: "YOUR_SECRET_KEY".into(),
            })
        );
        assert!(rendered(&settings).contains("accessKeyId = \"YOUR_ACCESS_KEY\"\nbucket = \"media\"\n"));
    }

    #[test]
    fn every_kind_asks_its_own_fields_then_switches() {
        let expected: [(StoreKind, &[&str]); 6] = [
            (
                StoreKind::Ipfs,
                &["store.ipfs.gatewayUrl", "store.ipfs.apiUrl", "store.ipfs.apiAuthorizationHeader"],
            ),
            (
                StoreKind::Local,
                &[
                    "store.local.path",
                    "store.local.http.bind",
                    "store.local.http.port",
                    "store.local.http.url",
                ],
            ),
            (StoreKind::Pixeldrain, &["store.pixeldrain.apiKey"]),
            (
                StoreKind::S3,
                &[
                    "store.s3.accessKeyId",
                    "store.s3.bucket",
                    "store.s3.endpoint",
                    "store.s3.secretAccessKey",
                ],
            ),
            (
                StoreKind::Sia,
                &["store.sia.workerApiUrl", "store.sia.password", "store.sia.downloadUrl"],
            ),
            (
                StoreKind::Webdav,
                &[
                    "store.webdav.baseUrl",
                    "store.webdav.username",
                    "store.webdav.password",
                    "store.webdav.publicUrl",
                ],
            ),
        ];

        for (kind, fields) in expected {
            let mut prompter = ScriptedPrompter::new().with_answer("store.type", kind.name());
            let settings = select_store(&mut prompter).unwrap().unwrap();
            assert_eq!(settings.backend.kind(), kind);

            let mut want = vec!["store.type"];
            want.extend_from_slice(fields);
            want.extend(["store.exposeStore", "http.api.delete.deleteApiEnabled"]);
            let asked: Vec<_> = prompter.asked().iter().map(|p| p.as_str()).collect();
            assert_eq!(asked, want, "{kind}");

            let first = &settings.sections()[0];
            assert_eq!(first.name().as_str(), format!("store.{kind}"));
        }
    }

    #[test]
    fn switches_keep_free_text() {
        let mut prompter = ScriptedPrompter::new()
            .with_answer("store.type", "pixeldrain")
            .with_answer("store.exposeStore", "yes")
            .with_answer("http.api.delete.deleteApiEnabled", "true");
        let settings = select_store(&mut prompter).unwrap().unwrap();

        let text = rendered(&settings);
        assert!(text.contains("exposeStore = \"yes\"\n"));
        assert!(text.contains("deleteApiEnabled = \"true\"\n"));
    }
}
