//! Subcommand implementations and the helpers they share.

/// Configure command handler.
pub mod configure;

/// Detect command handler.
pub mod detect;

/// Languages command handler.
pub mod languages;

/// Translation command handler.
pub mod translate;

use anyhow::{Context, Result, bail};
use std::time::Duration;

use crate::config::{ConfigFile, ConfigManager, ResolveOptions, ResolvedConfig, resolve_config};
use crate::translation::{HttpTransport, TranslationClient, validate};
use crate::ui::Style;
use crate::warning;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Validates a language code given on the command line.
pub fn validate_language(code: &str) -> Result<()> {
    if validate::is_valid_language_code(code) {
        Ok(())
    } else {
        bail!(
            "Invalid language code: '{code}'\n\n\
             Language codes are two lowercase letters with an optional region: en, ja, pt-br\n\
             Run 'tv2 languages' to see all supported codes."
        )
    }
}

/// Loads the config file, falling back to defaults when it is missing or broken.
pub fn load_config_file() -> Result<ConfigFile> {
    let manager = ConfigManager::new()?;
    if !manager.config_path().exists() {
        return Ok(ConfigFile::default());
    }

    Ok(manager.load().unwrap_or_else(|e| {
        warning!("{} {e:#}", Style::warning("Warning:"));
        ConfigFile::default()
    }))
}

/// Merges CLI overrides with the config file.
pub fn resolve(options: &ResolveOptions) -> Result<ResolvedConfig> {
    resolve_config(options, &load_config_file()?)
}

/// Builds a client from resolved configuration.
pub fn build_client(config: &ResolvedConfig) -> Result<TranslationClient> {
    let transport = HttpTransport::with_timeout(REQUEST_TIMEOUT)?;
    let client = TranslationClient::with_transport(config.api_key.clone(), transport)
        .context("The configured API key is not a valid Google Cloud API key")?;
    Ok(client.with_endpoint(config.endpoint.clone()))
}
