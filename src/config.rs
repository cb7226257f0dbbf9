//! Schema extraction settings.
//!
//! Applications load a [`SchemaConfig`] once at startup, from
//! `config/ddlforge.toml` or `DDLFORGE__SCHEMA__*` environment variables, and
//! pass it into every builder call. [`SchemaConfig::install`] pins a single
//! process-wide value that is never mutated afterwards.

use std::path::Path;

use config::{Config, ConfigError, Environment, File};
use once_cell::sync::OnceCell;
use serde::Deserialize;

const CONFIG_FILE: &str = "config/ddlforge.toml";
const ENV_PREFIX: &str = "DDLFORGE";

static GLOBAL: OnceCell<SchemaConfig> = OnceCell::new();

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SchemaConfig {
    /// Key under which field annotations are stored.
    #[serde(default = "default_tag_key")]
    pub tag_key: String,
    /// Column name that excludes a field from the schema.
    #[serde(default = "default_skip_marker")]
    pub skip_marker: String,
    /// Reject unknown tag options instead of ignoring them.
    #[serde(default)]
    pub strict_options: bool,
}

fn default_tag_key() -> String {
    "ddl".to_string()
}

fn default_skip_marker() -> String {
    "-".to_string()
}

impl Default for SchemaConfig {
    fn default() -> Self {
        Self {
            tag_key: default_tag_key(),
            skip_marker: default_skip_marker(),
            strict_options: false,
        }
    }
}

impl SchemaConfig {
    /// Load the configuration from `config/ddlforge.toml`, falling back to env vars.
    ///
    /// A missing file or a missing `[schema]` section yields the defaults.
    pub fn load() -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .add_source(File::with_name(CONFIG_FILE).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"));

        let settings = match builder.build() {
            Ok(cfg) => cfg,
            Err(err) => {
                if Path::new(CONFIG_FILE).exists() {
                    log::warn!(
                        "failed to load {}, falling back to env: {}",
                        CONFIG_FILE,
                        err
                    );
                }
                Config::builder()
                    .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
                    .build()
                    .map_err(|env_err| {
                        ConfigError::Message(format!(
                            "Failed to load configuration from file and env: {}, then env-only error: {}",
                            err, env_err
                        ))
                    })?
            }
        };

        Self::from_settings(&settings)
    }

    /// Load the configuration from an explicit file. The file must exist.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()?;
        Self::from_settings(&settings)
    }

    fn from_settings(settings: &Config) -> Result<Self, ConfigError> {
        match settings.get::<SchemaConfig>("schema") {
            Ok(cfg) => Ok(cfg),
            Err(ConfigError::NotFound(_)) => Ok(Self::default()),
            Err(e) => Err(ConfigError::Message(format!(
                "Schema configuration could not be loaded from file or environment: {}",
                e
            ))),
        }
    }

    /// Pin `self` as the process-wide configuration.
    ///
    /// Only the first call wins; later calls get their argument back.
    pub fn install(self) -> Result<&'static SchemaConfig, SchemaConfig> {
        GLOBAL.set(self)?;
        Ok(Self::global())
    }

    /// The installed configuration, or the defaults if none was installed.
    pub fn global() -> &'static SchemaConfig {
        GLOBAL.get_or_init(SchemaConfig::default)
    }
}
