use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::fs::atomic_write;
use crate::paths;
use crate::translation::DEFAULT_ENDPOINT;

/// Environment variable read for the API key when `api_key_env` is not set.
pub const DEFAULT_API_KEY_ENV: &str = "TV2_API_KEY";

/// Settings in the `[tv2]` section of config.toml.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tv2Config {
    /// Default target language.
    pub to: Option<String>,
    /// Default source language. Detected by the service when unset.
    pub from: Option<String>,
    /// Base URL of the Translate v2 API.
    pub endpoint: Option<String>,
    /// API key stored directly in config (not recommended).
    #[serde(default)]
    pub api_key: Option<String>,
    /// Environment variable name containing the API key.
    #[serde(default)]
    pub api_key_env: Option<String>,
}

impl Tv2Config {
    /// Gets the API key.
    ///
    /// Looks in the `api_key_env` variable, then `api_key`, then
    /// [`DEFAULT_API_KEY_ENV`]. Empty values are skipped.
    pub fn get_api_key(&self) -> Option<String> {
        self.api_key_env
            .as_deref()
            .and_then(non_empty_env)
            .or_else(|| self.api_key.clone().filter(|key| !key.is_empty()))
            .or_else(|| non_empty_env(DEFAULT_API_KEY_ENV))
    }

    pub fn api_key_env_name(&self) -> &str {
        self.api_key_env.as_deref().unwrap_or(DEFAULT_API_KEY_ENV)
    }
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/tv2/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub tv2: Tv2Config,
}

/// Resolved configuration after merging CLI arguments and config file.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub api_key: String,
    pub endpoint: String,
    pub target_language: Option<String>,
    pub source_language: Option<String>,
}

impl ResolvedConfig {
    /// Returns the target language, failing with a hint when none is set.
    pub fn require_target(&self) -> Result<&str> {
        self.target_language.as_deref().ok_or_else(|| {
            anyhow::anyhow!(
                "Missing required configuration: 'to' (target language)\n\n\
                 Please provide it via:\n  \
                 - CLI option: tv2 --to <lang>\n  \
                 - Config file: ~/.config/tv2/config.toml"
            )
        })
    }
}

/// CLI overrides that take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    pub to: Option<String>,
    pub from: Option<String>,
    pub key: Option<String>,
    pub endpoint: Option<String>,
}

/// Resolves configuration by merging CLI options with config file settings.
///
/// CLI options take precedence over config file values. The API key comes
/// from `--key`, then [`Tv2Config::get_api_key`].
pub fn resolve_config(options: &ResolveOptions, config_file: &ConfigFile) -> Result<ResolvedConfig> {
    let file = &config_file.tv2;

    let api_key = options
        .key
        .clone()
        .or_else(|| file.get_api_key())
        .ok_or_else(|| {
            let env_var = file.api_key_env_name();
            anyhow::anyhow!(
                "Missing required configuration: API key\n\n\
                 Please provide it via:\n  \
                 - CLI option: tv2 --key <key>\n  \
                 - Environment: export {env_var}=\"your-api-key\"\n  \
                 - Config file: api_key in ~/.config/tv2/config.toml"
            )
        })?;

    let endpoint = options
        .endpoint
        .as_ref()
        .or(file.endpoint.as_ref())
        .cloned()
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

    if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
        bail!("Invalid endpoint '{endpoint}': expected an http:// or https:// URL");
    }

    Ok(ResolvedConfig {
        api_key,
        endpoint,
        target_language: options.to.as_ref().or(file.to.as_ref()).cloned(),
        source_language: options.from.as_ref().or(file.from.as_ref()).cloned(),
    })
}

/// Manages loading and saving configuration files.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is stored at `$XDG_CONFIG_HOME/tv2/config.toml`
    /// or `~/.config/tv2/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_dir()?.join("config.toml"),
        })
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        let config_file: ConfigFile =
            toml::from_str(&contents).with_context(|| "Failed to parse config file")?;

        Ok(config_file)
    }

    pub fn save(&self, config: &ConfigFile) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;

        atomic_write(&self.config_path, &contents).with_context(|| {
            format!(
                "Failed to write config file: {}",
                self.config_path.display()
            )
        })?;

        Ok(())
    }

    pub fn load_or_default(&self) -> ConfigFile {
        self.load().unwrap_or_default()
    }
}
