mod client;
mod directive;
mod language;
mod record;
mod response;

pub use client::{DEFAULT_ENDPOINT, TranslationClient, TranslationRequest, Translator};
pub use directive::{AUTO, DEFAULT_TARGET, LanguagePair, ParsedInput, parse_directive};
pub use language::{SUPPORTED_LANGUAGES, display_name, is_supported, print_languages};
pub use record::OutputRecord;
pub use response::{DetectedLanguage, SourceText, TranslationResult, parse_response};
