use std::{
    net::{IpAddr, SocketAddr},
    path::{Path, PathBuf},
};

use anyhow::{ensure, Context};
use config::{Environment, File, FileFormat};
use intake_models::email_address::EmailAddressWithName;
use serde::Deserialize;
use url::Url;

pub use self::duration::Duration;

mod duration;

pub const DEFAULT_CONFIG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../config.toml");

/// Colon separated list of config files, merged in order.
pub const CONFIG_PATHS_ENV: &str = "INTAKE_CONFIG";

/// Prefix of environment variables overriding single keys, e.g.
/// `INTAKE__TURNSTILE__SECRET`.
const ENV_PREFIX: &str = "INTAKE";

/// Load the config files listed in `INTAKE_CONFIG` (or `config.toml` in the
/// working directory) and apply environment overrides.
pub fn load() -> anyhow::Result<Config> {
    let paths = match std::env::var_os(CONFIG_PATHS_ENV) {
        Some(paths) => std::env::split_paths(&paths).collect(),
        None => vec![PathBuf::from("config.toml")],
    };

    let environment = Environment::with_prefix(ENV_PREFIX).separator("__");
    deserialize(builder(&paths)?.add_source(environment))
}

pub fn load_paths(paths: &[impl AsRef<Path>]) -> anyhow::Result<Config> {
    deserialize(builder(paths)?)
}

/// Like [`load_paths`], with additional TOML snippets merged on top.
pub fn load_with_override(
    paths: &[impl AsRef<Path>],
    overrides: &[&str],
) -> anyhow::Result<Config> {
    let builder = overrides.iter().fold(builder(paths)?, |builder, &snippet| {
        builder.add_source(File::from_str(snippet, FileFormat::Toml))
    });
    deserialize(builder)
}

type Builder = config::ConfigBuilder<config::builder::DefaultState>;

fn builder(paths: &[impl AsRef<Path>]) -> anyhow::Result<Builder> {
    paths
        .iter()
        .try_fold(config::Config::builder(), |builder, path| {
            let path = path.as_ref();
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file at {}", path.display()))?;
            let source = File::from_str(&content, FileFormat::Toml);
            anyhow::Ok(builder.add_source(source))
        })
}

fn deserialize(builder: Builder) -> anyhow::Result<Config> {
    builder
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub http: HttpConfig,
    pub http_client: HttpClientConfig,
    pub turnstile: TurnstileConfig,
    pub resend: ResendConfig,
    pub mailchimp: MailchimpConfig,
    pub contact: ContactConfig,
    pub language: LanguageConfig,
}

impl Config {
    /// Checks everything that deserialization alone cannot catch. Must pass
    /// before the server starts handling requests.
    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(
            !self.turnstile.secret.is_empty(),
            "turnstile.secret must be set"
        );
        ensure!(!self.resend.api_key.is_empty(), "resend.api_key must be set");
        ensure!(
            !self.mailchimp.api_key.is_empty(),
            "mailchimp.api_key must be set"
        );
        ensure!(
            !self.mailchimp.list_id.is_empty(),
            "mailchimp.list_id must be set"
        );
        ensure!(
            !self.mailchimp.data_center.is_empty() || self.mailchimp.endpoint_override.is_some(),
            "mailchimp.data_center must be set"
        );
        ensure!(
            !self.contact.to.is_empty(),
            "contact.to must contain at least one recipient"
        );
        ensure!(
            !self.contact.template_id.is_empty(),
            "contact.template_id must be set"
        );
        ensure!(
            (0.0..=1.0).contains(&self.language.english_threshold),
            "language.english_threshold must be between 0 and 1"
        );
        ensure!(
            self.language.top_candidates > 0,
            "language.top_candidates must be at least 1"
        );
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub address: SocketAddr,
    pub real_ip: Option<RealIpConfig>,
}

#[derive(Debug, Deserialize)]
pub struct RealIpConfig {
    /// Header carrying the visitor's address, set by the reverse proxy.
    pub header: String,
    /// Only trust the header on connections from this address. The header is
    /// trusted unconditionally if unset.
    pub set_from: Option<IpAddr>,
}

#[derive(Debug, Deserialize)]
pub struct HttpClientConfig {
    /// Timeout for every outbound request to an external provider.
    pub timeout: Duration,
}

#[derive(Debug, Deserialize)]
pub struct TurnstileConfig {
    pub secret: Secret,
    pub siteverify_endpoint_override: Option<Url>,
}

#[derive(Debug, Deserialize)]
pub struct ResendConfig {
    pub api_key: Secret,
    pub endpoint_override: Option<Url>,
}

#[derive(Debug, Deserialize)]
pub struct MailchimpConfig {
    pub api_key: Secret,
    pub list_id: String,
    pub data_center: String,
    pub endpoint_override: Option<Url>,
}

#[derive(Debug, Deserialize)]
pub struct ContactConfig {
    pub from: EmailAddressWithName,
    pub to: Vec<EmailAddressWithName>,
    #[serde(default)]
    pub cc: Vec<EmailAddressWithName>,
    /// Receives filtered (non-English) submissions instead of the staff.
    pub oversight: EmailAddressWithName,
    pub subject: String,
    pub template_id: String,
}

#[derive(Debug, Deserialize)]
pub struct LanguageConfig {
    /// Messages shorter than this many characters are never classified.
    pub min_text_length: usize,
    pub min_segment_length: usize,
    pub english_threshold: f64,
    pub top_candidates: usize,
}

/// A credential that must not show up in debug output.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Secret(String);

impl Secret {
    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Debug for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0.is_empty() {
            f.write_str("Secret(<empty>)")
        } else {
            f.write_str("Secret(***)")
        }
    }
}
