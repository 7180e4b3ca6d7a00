//! Decoding of the service's `{ "data": { ... } }` envelopes.
//!
//! Every function parses the raw body, checks that the expected nested
//! field is present and reshapes the payload after the caller's input.
//! Nothing partial is ever returned: a body that does not fit is an
//! [`Failure::InvalidResponse`].

use serde::Deserialize;
use serde::de::DeserializeOwned;

use super::error::Failure;
use super::input::{Cardinality, Echo};

/// Result of a translate call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    /// Translated text, HTML entities decoded.
    pub text: Echo<String>,
    /// Languages the service detected, present only when no source
    /// language was given and the service reported one for every input.
    pub detected_source_language: Option<Echo<String>>,
}

/// A language supported by the service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LanguageDescriptor {
    pub language: String,
    /// Localized name; only returned when a target language was requested.
    #[serde(default)]
    pub name: Option<String>,
}

/// The most likely language of one input.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Detection {
    pub language: String,
    #[serde(default)]
    pub is_reliable: bool,
    #[serde(default)]
    pub confidence: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: Option<T>,
    error: Option<ServiceError>,
}

#[derive(Debug, Deserialize)]
struct ServiceError {
    code: Option<u16>,
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TranslationsData {
    translations: Option<Vec<TranslationEntry>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TranslationEntry {
    translated_text: String,
    detected_source_language: Option<String>,
}

#[derive(Debug, Deserialize)]
struct LanguagesData {
    languages: Option<Vec<LanguageDescriptor>>,
}

#[derive(Debug, Deserialize)]
struct DetectionsData {
    detections: Option<Vec<Vec<Detection>>>,
}

/// Decodes a translate response.
///
/// `expected_len` is the number of `q` values that were sent.
pub fn normalize_translation(
    body: &str,
    cardinality: Cardinality,
    expected_len: usize,
    source_was_provided: bool,
) -> Result<Translation, Failure> {
    let data: TranslationsData = parse_data(body)?;
    let entries = data
        .translations
        .ok_or_else(|| invalid("missing data.translations"))?;
    check_len("translations", expected_len, entries.len())?;

    let mut texts = Vec::with_capacity(entries.len());
    let mut detected = Vec::with_capacity(entries.len());
    for entry in entries {
        texts.push(html_escape::decode_html_entities(&entry.translated_text).into_owned());
        detected.push(entry.detected_source_language);
    }

    let detected_source_language = if source_was_provided {
        None
    } else {
        detected
            .into_iter()
            .collect::<Option<Vec<_>>>()
            .and_then(|langs| Echo::from_vec(cardinality, langs))
    };

    let text = Echo::from_vec(cardinality, texts).ok_or_else(|| invalid("no translations"))?;

    Ok(Translation {
        text,
        detected_source_language,
    })
}

/// Decodes a languages response. The list is returned as the service sent it.
pub fn normalize_languages(body: &str) -> Result<Vec<LanguageDescriptor>, Failure> {
    let data: LanguagesData = parse_data(body)?;
    data.languages
        .ok_or_else(|| invalid("missing data.languages"))
}

/// Decodes a detect response, keeping the first candidate for each input.
pub fn normalize_detection(
    body: &str,
    cardinality: Cardinality,
    expected_len: usize,
) -> Result<Echo<Detection>, Failure> {
    let data: DetectionsData = parse_data(body)?;
    let detections = data
        .detections
        .ok_or_else(|| invalid("missing data.detections"))?;
    check_len("detections", expected_len, detections.len())?;

    let first = detections
        .into_iter()
        .enumerate()
        .map(|(index, candidates)| {
            candidates
                .into_iter()
                .next()
                .ok_or_else(|| invalid(format!("no detection candidates for input {index}")))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Echo::from_vec(cardinality, first).ok_or_else(|| invalid("no detections"))
}

fn parse_data<T: DeserializeOwned>(body: &str) -> Result<T, Failure> {
    let envelope: Envelope<T> = serde_json::from_str(body)
        .map_err(|e| invalid(format!("body is not a valid envelope: {e}")))?;

    match (envelope.data, envelope.error) {
        (Some(data), _) => Ok(data),
        (None, Some(error)) => Err(invalid(format!(
            "service error {}: {}",
            error.code.map_or_else(|| "?".to_string(), |c| c.to_string()),
            error.message.as_deref().unwrap_or("(no message)")
        ))),
        (None, None) => Err(invalid("missing data")),
    }
}

fn check_len(field: &str, expected: usize, actual: usize) -> Result<(), Failure> {
    if expected == actual {
        Ok(())
    } else {
        Err(invalid(format!(
            "expected {expected} {field}, got {actual}"
        )))
    }
}

fn invalid(message: impl Into<String>) -> Failure {
    Failure::InvalidResponse(message.into())
}
