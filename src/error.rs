//! User-facing failures of a translation run.

use thiserror::Error;

/// The two ways a translation run can end without producing output.
#[derive(Debug, Error)]
pub enum TranslateError {
    /// Nothing left to translate once the directive was stripped.
    #[error("Please enter something to translate")]
    EmptyInput,

    /// The translation service could not produce a result, for any reason.
    #[error("Cannot get the translation from the translation service")]
    TranslationUnavailable(#[source] anyhow::Error),
}

impl TranslateError {
    /// Process exit code for this failure.
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::EmptyInput => exitcode::DATAERR,
            Self::TranslationUnavailable(_) => exitcode::UNAVAILABLE,
        }
    }
}
