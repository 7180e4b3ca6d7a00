use anyhow::Result;

use super::{build_client, resolve};
use crate::config::ResolveOptions;
use crate::input::InputReader;
use crate::translation::Detection;
use crate::ui::Spinner;

pub struct DetectOptions {
    pub text: Vec<String>,
    pub file: Option<String>,
    pub lines: bool,
    pub overrides: ResolveOptions,
}

/// Prints the most likely language of every input, one per line.
pub async fn run_detect(options: DetectOptions) -> Result<()> {
    let config = resolve(&options.overrides)?;
    let text = InputReader::texts(options.text, options.file.as_deref(), options.lines)?;
    let client = build_client(&config)?;

    let spinner = Spinner::new("Detecting...");
    let detections = client.detect(text).await;
    spinner.stop();

    let detections = detections?;
    for detection in &detections {
        println!("{}", format_detection(detection));
    }

    Ok(())
}

fn format_detection(detection: &Detection) -> String {
    let mut line = detection.language.clone();
    if let Some(confidence) = detection.confidence {
        line.push_str(&format!("\t{confidence:.2}"));
    }
    if detection.is_reliable {
        line.push_str("\treliable");
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_detection() {
        let detection = Detection {
            language: "fr".to_string(),
            is_reliable: false,
            confidence: Some(0.981),
        };
        assert_eq!(format_detection(&detection), "fr\t0.98");

        let detection = Detection {
            language: "en".to_string(),
            is_reliable: true,
            confidence: None,
        };
        assert_eq!(format_detection(&detection), "en\treliable");
    }
}
