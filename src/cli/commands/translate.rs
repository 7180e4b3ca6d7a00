use anyhow::Result;

use super::{build_client, resolve, validate_language};
use crate::config::ResolveOptions;
use crate::input::InputReader;
use crate::status;
use crate::translation::{Echo, Translation};
use crate::ui::{Spinner, Style};

pub struct TranslateOptions {
    pub text: Vec<String>,
    pub file: Option<String>,
    pub lines: bool,
    pub overrides: ResolveOptions,
}

pub async fn run_translate(options: TranslateOptions) -> Result<()> {
    let config = resolve(&options.overrides)?;

    let target = config.require_target()?;
    validate_language(target)?;
    if let Some(source) = config.source_language.as_deref() {
        validate_language(source)?;
    }

    let text = InputReader::texts(options.text, options.file.as_deref(), options.lines)?;
    let client = build_client(&config)?;

    let spinner = Spinner::new("Translating...");
    let translation = client
        .translate(text, target, config.source_language.as_deref())
        .await;
    spinner.stop();

    let translation = translation?;
    for line in translated_lines(&translation) {
        println!("{line}");
    }

    if let Some(detected) = &translation.detected_source_language {
        status!(
            "{} {}",
            Style::label(detected_label(detected)),
            Style::code(join(detected))
        );
    }

    Ok(())
}

fn translated_lines(translation: &Translation) -> Vec<&str> {
    translation.text.iter().map(String::as_str).collect()
}

const fn detected_label(detected: &Echo<String>) -> &'static str {
    if detected.is_single() {
        "Detected source language:"
    } else {
        "Detected source languages:"
    }
}

fn join(detected: &Echo<String>) -> String {
    detected.as_slice().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translated_lines_follow_input_order() {
        let translation = Translation {
            text: Echo::Many(vec!["Hola".to_string(), "Adiós".to_string()]),
            detected_source_language: None,
        };
        assert_eq!(translated_lines(&translation), vec!["Hola", "Adiós"]);
    }

    #[test]
    fn test_detected_label_and_join() {
        let single = Echo::Single("en".to_string());
        let many = Echo::Many(vec!["en".to_string(), "fr".to_string()]);

        assert_eq!(detected_label(&single), "Detected source language:");
        assert_eq!(detected_label(&many), "Detected source languages:");
        assert_eq!(join(&many), "en, fr");
    }
}
