pub mod loader;
pub mod manager;

pub use loader::{load_glossary_from_csv, parse_glossary_csv};
pub use manager::create_or_update_glossary;

use std::collections::HashMap;

use crate::utils::{Result, TranslatorError};

/// Multilingual glossary read from CSV: one column per language code, one
/// term set per row. Entries are sparse; empty cells are left out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlossaryData {
    pub name: String,
    pub language_codes: Vec<String>,
    pub entries: Vec<HashMap<String, String>>,
}

impl GlossaryData {
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Equivalent-term-set CSV: a header of language codes, then one row per
    /// entry with an empty cell for each missing language.
    pub fn to_csv(&self) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(&self.language_codes)?;

        for entry in &self.entries {
            let row: Vec<&str> = self
                .language_codes
                .iter()
                .map(|lang| entry.get(lang).map(String::as_str).unwrap_or(""))
                .collect();
            writer.write_record(&row)?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| std::io::Error::other(e.to_string()))?;
        String::from_utf8(bytes).map_err(|e| {
            TranslatorError::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                e.to_string(),
            ))
        })
    }
}
