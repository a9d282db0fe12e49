use crate::cloud::types::GlossaryConfigRef;
use crate::cloud::{LocationPath, TranslateService, TranslateTextRequest, TranslateTextResponse};
use crate::utils::{read_text_file, write_text_file, Result, TranslatorError};

const PLAIN_TEXT: &str = "text/plain";

#[derive(Debug, Clone)]
pub struct TranslationOptions {
    pub from: String,
    pub to: String,
    pub glossary_id: String,
    pub project_id: String,
    pub location: String,
}

impl TranslationOptions {
    fn request(&self, text: &str) -> TranslateTextRequest {
        TranslateTextRequest {
            contents: vec![text.to_string()],
            mime_type: PLAIN_TEXT.to_string(),
            source_language_code: self.from.clone(),
            target_language_code: self.to.clone(),
            glossary_config: Some(GlossaryConfigRef {
                glossary: self.glossary_id.clone(),
            }),
        }
    }
}

/// Prefers the glossary-aware result over the plain one.
pub fn select_translation(response: TranslateTextResponse) -> Result<String> {
    let chosen = response
        .glossary_translations
        .into_iter()
        .next()
        .or_else(|| response.translations.into_iter().next());

    match chosen {
        Some(translation) => Ok(translation.translated_text.unwrap_or_default()),
        None => Err(TranslatorError::Translation(
            "No translation returned from API".to_string(),
        )),
    }
}

pub async fn translate_with_glossary<T: TranslateService>(
    client: &T,
    text: &str,
    options: &TranslationOptions,
) -> Result<String> {
    let parent = LocationPath::new(&options.project_id, &options.location).parent();
    let request = options.request(text);

    tracing::info!(
        from = %options.from,
        to = %options.to,
        glossary = %options.glossary_id,
        chars = text.chars().count(),
        "Translating text"
    );

    let translated = match client.translate_text(&parent, &request).await {
        Ok(response) => select_translation(response),
        Err(e) => Err(e),
    };
    translated.map_err(|e| TranslatorError::translation("Translation failed", e))
}

/// Translates the contents of `input_path` into `output_path`.
pub async fn translate_text<T: TranslateService>(
    client: &T,
    input_path: &str,
    output_path: &str,
    options: &TranslationOptions,
) -> Result<()> {
    let input_text = read_text_file(input_path)
        .await
        .map_err(|e| TranslatorError::translation("Failed to translate file", e))?;

    let translated = translate_with_glossary(client, &input_text, options).await?;

    write_text_file(output_path, &translated)
        .await
        .map_err(|e| TranslatorError::FileWrite(e.to_string()))?;

    tracing::info!(output = output_path, chars = translated.chars().count(), "Wrote translation");
    Ok(())
}
