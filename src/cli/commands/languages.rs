//! Languages command handler.

use anyhow::Result;

use super::{build_client, resolve, validate_language};
use crate::config::ResolveOptions;
use crate::output;
use crate::translation::LanguageDescriptor;
use crate::ui::{Spinner, Style};

pub struct LanguagesOptions {
    /// Language to localize names into.
    pub to: Option<String>,
    pub overrides: ResolveOptions,
}

/// Prints the languages supported by the service to stdout.
pub async fn run_languages(options: LanguagesOptions) -> Result<()> {
    if let Some(lang) = options.to.as_deref() {
        validate_language(lang)?;
    }

    let config = resolve(&options.overrides)?;
    let client = build_client(&config)?;

    let spinner = Spinner::new("Fetching languages...");
    let languages = client.languages(options.to.as_deref()).await;
    spinner.stop();

    let languages = languages?;
    if !output::is_quiet() {
        println!("{}", Style::header("Supported languages"));
    }
    for language in &languages {
        println!("{}", format_language(language));
    }

    Ok(())
}

fn format_language(language: &LanguageDescriptor) -> String {
    match &language.name {
        Some(name) => format!(
            "  {} {}",
            Style::code(format!("{:8}", language.language)),
            Style::secondary(name)
        ),
        None => format!("  {}", Style::code(&language.language)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_language_contains_code_and_name() {
        let language = LanguageDescriptor {
            language: "bn".to_string(),
            name: Some("Bengali".to_string()),
        };
        let line = format_language(&language);
        assert!(line.contains("bn"));
        assert!(line.contains("Bengali"));
    }

    #[test]
    fn test_format_language_without_name() {
        let language = LanguageDescriptor {
            language: "ja".to_string(),
            name: None,
        };
        assert!(format_language(&language).contains("ja"));
    }
}
