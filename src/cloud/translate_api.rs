use reqwest::Client;
use std::time::Duration;

use crate::cloud::auth::AccessToken;
use crate::cloud::http::check_status;
use crate::cloud::operation::wait_until_done;
use crate::cloud::types::{
    Glossary, Operation, SupportedLanguages, TranslateTextRequest, TranslateTextResponse,
};
use crate::cloud::{GlossaryService, TranslateService};
use crate::utils::{AppConfig, Result};

/// Cloud Translation v3 REST client.
#[derive(Debug, Clone)]
pub struct TranslationClient {
    http: Client,
    endpoint: String,
    token: AccessToken,
    poll_interval: Duration,
    operation_timeout: Duration,
}

impl TranslationClient {
    pub fn new(http: Client, token: AccessToken, config: &AppConfig) -> Self {
        Self {
            http,
            endpoint: config.cloud.translation_endpoint.trim_end_matches('/').to_string(),
            token,
            poll_interval: config.glossary.poll_interval(),
            operation_timeout: config.glossary.operation_timeout(),
        }
    }

    fn url(&self, resource: &str) -> String {
        format!("{}/{}", self.endpoint, resource)
    }

    pub async fn get_supported_languages(&self, parent: &str) -> Result<SupportedLanguages> {
        let response = self
            .http
            .get(self.url(&format!("{}/supportedLanguages", parent)))
            .bearer_auth(self.token.as_str())
            .send()
            .await?;
        Ok(check_status(response).await?.json().await?)
    }

    pub async fn get_operation(&self, name: &str) -> Result<Operation> {
        let response = self
            .http
            .get(self.url(name))
            .bearer_auth(self.token.as_str())
            .send()
            .await?;
        Ok(check_status(response).await?.json().await?)
    }
}

impl GlossaryService for TranslationClient {
    async fn get_glossary(&self, name: &str) -> Result<Glossary> {
        let response = self
            .http
            .get(self.url(name))
            .bearer_auth(self.token.as_str())
            .send()
            .await?;
        Ok(check_status(response).await?.json().await?)
    }

    async fn delete_glossary(&self, name: &str) -> Result<Operation> {
        let response = self
            .http
            .delete(self.url(name))
            .bearer_auth(self.token.as_str())
            .send()
            .await?;
        Ok(check_status(response).await?.json().await?)
    }

    async fn create_glossary(&self, parent: &str, glossary: &Glossary) -> Result<Operation> {
        let response = self
            .http
            .post(self.url(&format!("{}/glossaries", parent)))
            .bearer_auth(self.token.as_str())
            .json(glossary)
            .send()
            .await?;
        Ok(check_status(response).await?.json().await?)
    }

    async fn wait_operation(&self, operation: Operation) -> Result<Operation> {
        wait_until_done(
            operation,
            self.poll_interval,
            self.operation_timeout,
            |name| async move { self.get_operation(&name).await },
        )
        .await
    }
}

impl TranslateService for TranslationClient {
    async fn translate_text(
        &self,
        parent: &str,
        request: &TranslateTextRequest,
    ) -> Result<TranslateTextResponse> {
        let response = self
            .http
            .post(self.url(&format!("{}:translateText", parent)))
            .bearer_auth(self.token.as_str())
            .json(request)
            .send()
            .await?;
        Ok(check_status(response).await?.json().await?)
    }
}
