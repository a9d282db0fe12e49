pub mod auth;
pub mod http;
pub mod operation;
pub mod storage;
pub mod translate_api;
pub mod types;

#[cfg(test)]
mod test_server;

pub use auth::{fetch_access_token, AccessToken, ServiceAccountKey};
pub use storage::{gcs_uri, StorageClient};
pub use translate_api::TranslationClient;
pub use types::{
    Glossary, LocationPath, Operation, TranslateTextRequest, TranslateTextResponse, Translation,
};

use crate::utils::{AppConfig, Result, TranslatorError};

/// Remote glossary resources and the long-running operations that mutate them.
#[allow(async_fn_in_trait)]
pub trait GlossaryService {
    async fn get_glossary(&self, name: &str) -> Result<Glossary>;
    async fn delete_glossary(&self, name: &str) -> Result<Operation>;
    async fn create_glossary(&self, parent: &str, glossary: &Glossary) -> Result<Operation>;
    async fn wait_operation(&self, operation: Operation) -> Result<Operation>;
}

#[allow(async_fn_in_trait)]
pub trait TranslateService {
    async fn translate_text(
        &self,
        parent: &str,
        request: &TranslateTextRequest,
    ) -> Result<TranslateTextResponse>;
}

#[allow(async_fn_in_trait)]
pub trait ObjectStore {
    /// Stores `body` at `bucket/object` and returns its `gs://` URI.
    async fn upload(
        &self,
        bucket: &str,
        object: &str,
        content_type: &str,
        body: String,
    ) -> Result<String>;
}

/// Authenticated clients sharing one access token.
#[derive(Debug, Clone)]
pub struct CloudClients {
    pub translation: TranslationClient,
    pub storage: StorageClient,
}

impl CloudClients {
    /// Authenticates with the service-account key at `account_path` and checks
    /// the Translation API is reachable for `project_id`.
    pub async fn connect(account_path: &str, project_id: &str, config: &AppConfig) -> Result<Self> {
        Self::try_connect(account_path, project_id, config)
            .await
            .map_err(|e| TranslatorError::auth("Failed to initialize Translation client", e))
    }

    async fn try_connect(account_path: &str, project_id: &str, config: &AppConfig) -> Result<Self> {
        let key = ServiceAccountKey::from_file(account_path).await?;
        if let Some(key_project) = key.project_id.as_deref() {
            if key_project != project_id {
                tracing::warn!(
                    key_project,
                    project_id,
                    "Service account belongs to a different project"
                );
            }
        }

        let http = http::build_http_client(config.cloud.timeout())?;
        let token = fetch_access_token(&http, &key).await?;

        let translation = TranslationClient::new(http.clone(), token.clone(), config);

        tracing::info!("Testing Translation API connection...");
        let location = LocationPath::new(project_id, &config.cloud.location);
        let supported = translation
            .get_supported_languages(&location.parent())
            .await?;
        tracing::info!(
            languages = supported.languages.len(),
            "Translation API connection successful"
        );

        let storage = StorageClient::new(http, token, config);
        Ok(Self {
            translation,
            storage,
        })
    }
}
