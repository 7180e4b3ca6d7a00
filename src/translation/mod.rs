mod client;
mod error;
mod input;
mod query;
mod response;
mod transport;
pub mod validate;

pub use client::{AccessKey, DEFAULT_ENDPOINT, TranslationClient};
pub use error::{Error, Failure, LanguageRole, TransportError};
pub use input::{Cardinality, Echo, TextInput};
pub use query::{Param, Query};
pub use response::{
    Detection, LanguageDescriptor, Translation, normalize_detection, normalize_languages,
    normalize_translation,
};
pub use transport::{HttpTransport, Method, Transport};
