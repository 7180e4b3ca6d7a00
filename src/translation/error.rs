use std::fmt;
use thiserror::Error;

use super::validate::ACCESS_KEY_LEN;

/// Which side of a translation a language code was supplied for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageRole {
    Source,
    Target,
}

impl fmt::Display for LanguageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Source => f.write_str("source"),
            Self::Target => f.write_str("target"),
        }
    }
}

/// Failure of the HTTP collaborator.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Request to {url} failed")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Service responded with status {status}: {body}")]
    Status { status: u16, body: String },

    /// Raised by custom transports.
    #[error("{0}")]
    Other(String),
}

/// Why an operation failed after input validation passed.
#[derive(Debug, Error)]
pub enum Failure {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Errors returned by [`TranslationClient`](super::TranslationClient).
#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid access key: expected {} characters", ACCESS_KEY_LEN)]
    InvalidAccessKey,

    #[error("Invalid text: input is empty")]
    InvalidText,

    #[error("Invalid {role} language")]
    InvalidLanguage { role: LanguageRole },

    #[error("Translate error: {0}")]
    Translate(#[source] Failure),

    #[error("Languages error: {0}")]
    Languages(#[source] Failure),

    #[error("Detect error: {0}")]
    Detect(#[source] Failure),
}

impl Error {
    /// Returns `true` for both invalid source and invalid target languages.
    pub const fn is_invalid_language(&self) -> bool {
        matches!(self, Self::InvalidLanguage { .. })
    }

    /// Returns `true` for errors raised before any request was sent.
    pub const fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidAccessKey | Self::InvalidText | Self::InvalidLanguage { .. }
        )
    }

    /// The language role of an invalid-language error.
    pub const fn language_role(&self) -> Option<LanguageRole> {
        match self {
            Self::InvalidLanguage { role } => Some(*role),
            _ => None,
        }
    }

    /// The failure behind an operation error.
    pub const fn failure(&self) -> Option<&Failure> {
        match self {
            Self::Translate(f) | Self::Languages(f) | Self::Detect(f) => Some(f),
            _ => None,
        }
    }

    /// Stable numeric code for each error kind.
    pub const fn code(&self) -> u8 {
        match self {
            Self::InvalidAccessKey => 1,
            Self::InvalidText => 2,
            Self::InvalidLanguage { .. } => 3,
            Self::Translate(_) => 4,
            Self::Languages(_) => 5,
            Self::Detect(_) => 6,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_invalid_language_category() {
        let source = Error::InvalidLanguage {
            role: LanguageRole::Source,
        };
        let target = Error::InvalidLanguage {
            role: LanguageRole::Target,
        };

        assert!(source.is_invalid_language());
        assert!(target.is_invalid_language());
        assert_eq!(source.code(), target.code());
        assert_eq!(source.to_string(), "Invalid source language");
        assert_eq!(target.to_string(), "Invalid target language");
        assert_eq!(target.language_role(), Some(LanguageRole::Target));
        assert!(!Error::InvalidText.is_invalid_language());
    }

    #[test]
    fn test_operation_error_chains_failure() {
        let err = Error::Translate(Failure::Transport(TransportError::Status {
            status: 403,
            body: "forbidden".to_string(),
        }));

        assert_eq!(
            err.to_string(),
            "Translate error: Service responded with status 403: forbidden"
        );
        let source = err.source().map(ToString::to_string);
        assert_eq!(
            source.as_deref(),
            Some("Service responded with status 403: forbidden")
        );
        assert!(!err.is_validation());
    }

    #[test]
    fn test_operation_error_message_names_the_cause() {
        let languages = Error::Languages(Failure::InvalidResponse("missing data".to_string()));
        let detect = Error::Detect(Failure::Transport(TransportError::Other(
            "connection reset".to_string(),
        )));

        assert_eq!(
            languages.to_string(),
            "Languages error: Invalid response: missing data"
        );
        assert_eq!(detect.to_string(), "Detect error: connection reset");
    }

    #[test]
    fn test_codes() {
        assert_eq!(Error::InvalidAccessKey.code(), 1);
        assert_eq!(Error::InvalidText.code(), 2);
        assert_eq!(
            Error::Detect(Failure::InvalidResponse(String::new())).code(),
            6
        );
    }
}
