//! Configure command handler for editing default settings.

use anyhow::Result;
use inquire::{CustomUserError, Text};
use inquire::validator::Validation;

use crate::config::{ConfigFile, ConfigManager, Tv2Config};
use crate::translation::{DEFAULT_ENDPOINT, validate};
use crate::ui::{Style, handle_prompt_cancellation};

/// Runs the configure command.
///
/// With `show`, prints the current configuration. Otherwise prompts for the
/// default languages, the API key variable and the endpoint.
pub fn run_configure(show: bool) -> Result<()> {
    if show {
        let manager = ConfigManager::new()?;
        print_config(&manager, &manager.load_or_default());
        return Ok(());
    }
    handle_prompt_cancellation(run_configure_inner)
}

fn run_configure_inner() -> Result<()> {
    let manager = ConfigManager::new()?;
    let mut config = manager.load_or_default();

    print_config(&manager, &config);

    let current = &config.tv2;
    let to = prompt_language("Default target language:", current.to.as_deref(), false)?;
    let from = prompt_language(
        "Default source language (empty to auto-detect):",
        current.from.as_deref(),
        true,
    )?;
    let api_key_env = Text::new("Environment variable holding the API key:")
        .with_default(current.api_key_env_name())
        .prompt()?;
    let endpoint = Text::new("API endpoint:")
        .with_default(current.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT))
        .prompt()?;

    config.tv2 = Tv2Config {
        to: non_empty(to),
        from: non_empty(from),
        endpoint: non_empty(endpoint).filter(|e| e != DEFAULT_ENDPOINT),
        api_key: config.tv2.api_key.take(),
        api_key_env: non_empty(api_key_env),
    };

    manager.save(&config)?;

    println!();
    println!(
        "{} Configuration saved to {}",
        Style::success("✓"),
        Style::secondary(manager.config_path().display())
    );

    Ok(())
}

fn prompt_language(message: &str, default: Option<&str>, allow_empty: bool) -> Result<String> {
    let validator = move |input: &str| -> Result<Validation, CustomUserError> {
        let input = input.trim();
        if (allow_empty && input.is_empty()) || validate::is_valid_language_code(input) {
            Ok(Validation::Valid)
        } else {
            Ok(Validation::Invalid("Expected a code like en, ja or pt-br".into()))
        }
    };
    let mut prompt = Text::new(message).with_validator(validator);

    if let Some(d) = default {
        prompt = prompt.with_default(d);
    }

    Ok(prompt.prompt()?.trim().to_string())
}

fn non_empty(value: String) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

fn print_config(manager: &ConfigManager, config: &ConfigFile) {
    let tv2 = &config.tv2;
    let not_set = || Style::secondary("(not set)");

    println!(
        "{} {}",
        Style::header("Configuration"),
        Style::secondary(manager.config_path().display())
    );
    println!(
        "  {}        {}",
        Style::label("to"),
        tv2.to.as_deref().map_or_else(not_set, Style::value)
    );
    println!(
        "  {}      {}",
        Style::label("from"),
        tv2.from.as_deref().map_or_else(not_set, Style::value)
    );
    println!(
        "  {}  {}",
        Style::label("endpoint"),
        Style::value(tv2.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT))
    );
    println!(
        "  {}   {} {}",
        Style::label("api_key"),
        if tv2.get_api_key().is_some() {
            Style::success("(set)")
        } else {
            not_set()
        },
        Style::secondary(format!("via ${}", tv2.api_key_env_name()))
    );
    println!();
}
