use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::utils::{Result, TranslatorError};

/// `projects/{project}/locations/{location}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationPath {
    pub project_id: String,
    pub location: String,
}

impl LocationPath {
    pub fn new(project_id: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            location: location.into(),
        }
    }

    pub fn parent(&self) -> String {
        format!("projects/{}/locations/{}", self.project_id, self.location)
    }

    pub fn glossary(&self, glossary_id: &str) -> String {
        format!("{}/glossaries/{}", self.parent(), glossary_id)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Glossary {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_codes_set: Option<LanguageCodesSet>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_config: Option<GlossaryInputConfig>,
    #[serde(default, skip_serializing)]
    pub entry_count: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LanguageCodesSet {
    pub language_codes: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GlossaryInputConfig {
    pub gcs_source: GcsSource,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GcsSource {
    pub input_uri: String,
}

impl Glossary {
    /// Equivalent-term-set glossary sourced from a CSV blob.
    pub fn from_csv_source(name: String, language_codes: Vec<String>, input_uri: String) -> Self {
        Self {
            name,
            language_codes_set: Some(LanguageCodesSet { language_codes }),
            input_config: Some(GlossaryInputConfig {
                gcs_source: GcsSource { input_uri },
            }),
            entry_count: None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Operation {
    pub name: String,
    #[serde(default)]
    pub done: bool,
    #[serde(default)]
    pub error: Option<OperationStatus>,
    #[serde(default)]
    pub response: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OperationStatus {
    #[serde(default)]
    pub code: i32,
    #[serde(default)]
    pub message: String,
}

impl Operation {
    /// Turns a finished operation carrying an error status into an error.
    pub fn into_result(self) -> Result<Self> {
        match self.error {
            Some(status) => Err(TranslatorError::Operation {
                name: self.name,
                code: status.code,
                message: status.message,
            }),
            None => Ok(self),
        }
    }

    pub fn response_as<T: DeserializeOwned>(&self) -> Result<Option<T>> {
        match &self.response {
            Some(value) => Ok(Some(serde_json::from_value(value.clone())?)),
            None => Ok(None),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateTextRequest {
    pub contents: Vec<String>,
    pub mime_type: String,
    pub source_language_code: String,
    pub target_language_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub glossary_config: Option<GlossaryConfigRef>,
}

#[derive(Debug, Clone, Serialize)]
pub struct GlossaryConfigRef {
    pub glossary: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateTextResponse {
    #[serde(default)]
    pub translations: Vec<Translation>,
    #[serde(default)]
    pub glossary_translations: Vec<Translation>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Translation {
    #[serde(default)]
    pub translated_text: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportedLanguages {
    #[serde(default)]
    pub languages: Vec<SupportedLanguage>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportedLanguage {
    pub language_code: String,
}
