use csv::{ReaderBuilder, Trim};
use std::collections::HashMap;

use crate::glossary::GlossaryData;
use crate::utils::{read_text_file, Result, TranslatorError};

/// Reads the glossary CSV at `csv_path`. Every failure is reported as a
/// glossary error.
pub async fn load_glossary_from_csv(csv_path: &str, name: &str) -> Result<GlossaryData> {
    let loaded = match read_text_file(csv_path).await {
        Ok(content) => parse_glossary_csv(&content, name),
        Err(e) => Err(e.into()),
    };

    let data =
        loaded.map_err(|e| TranslatorError::glossary("Failed to load glossary from CSV", e))?;

    tracing::info!(
        path = csv_path,
        languages = ?data.language_codes,
        entries = data.entry_count(),
        "Loaded glossary"
    );
    Ok(data)
}

/// Header row gives the language codes; each following row is one entry.
/// Fields are trimmed; blank and whitespace-only lines are skipped.
pub fn parse_glossary_csv(content: &str, name: &str) -> Result<GlossaryData> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(content.as_bytes());

    let language_codes: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

    let mut entries = Vec::new();
    for result in reader.records() {
        let record = result?;
        if record.len() == 1 && record[0].is_empty() {
            continue;
        }
        if record.len() != language_codes.len() {
            let line = record.position().map(|p| p.line()).unwrap_or_default();
            return Err(TranslatorError::Glossary(format!(
                "Row on line {} has {} fields, expected {}",
                line,
                record.len(),
                language_codes.len()
            )));
        }

        let entry: HashMap<String, String> = language_codes
            .iter()
            .zip(record.iter())
            .filter(|(_, term)| !term.is_empty())
            .map(|(lang, term)| (lang.clone(), term.to_string()))
            .collect();
        entries.push(entry);
    }

    if entries.is_empty() {
        return Err(TranslatorError::Glossary(
            "No entries found in glossary CSV".to_string(),
        ));
    }

    Ok(GlossaryData {
        name: name.to_string(),
        language_codes,
        entries,
    })
}
