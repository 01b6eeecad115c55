use crate::error::TranslateError;
use crate::translation::{
    OutputRecord, TranslationClient, TranslationRequest, Translator, parse_directive,
};
use crate::ui::Spinner;

pub struct TranslateOptions {
    /// Raw input, possibly containing a `[from>to]` directive.
    pub raw: String,
    pub endpoint: String,
}

pub async fn run_translate(options: TranslateOptions) -> Result<(), TranslateError> {
    let client = TranslationClient::new(options.endpoint);

    let spinner = Spinner::new("Translating...");
    let outcome = translate_text(&client, &options.raw).await;
    spinner.stop();

    let record = outcome?;
    let json = record
        .to_json()
        .map_err(|e| TranslateError::TranslationUnavailable(e.into()))?;
    println!("{json}");

    Ok(())
}

/// Parses the directive out of `raw`, translates the rest and builds the record.
///
/// The translator is not called when nothing is left after the directive.
pub async fn translate_text<T: Translator>(
    translator: &T,
    raw: &str,
) -> Result<OutputRecord, TranslateError> {
    let input = parse_directive(raw);
    if input.text.is_empty() {
        return Err(TranslateError::EmptyInput);
    }

    crate::verbose!(
        "translating {} characters, {} -> {}",
        input.text.chars().count(),
        input.languages.from,
        input.languages.to
    );

    let request = TranslationRequest {
        source_text: input.text.clone(),
        languages: input.languages.clone(),
    };

    let result = translator.translate(&request).await.map_err(|e| {
        crate::verbose!("translation failed: {e:#}");
        TranslateError::TranslationUnavailable(e)
    })?;

    Ok(OutputRecord::build(&input, &result))
}
