use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde::Deserialize;

use crate::cloud::auth::AccessToken;
use crate::cloud::http::check_status;
use crate::cloud::ObjectStore;
use crate::utils::{AppConfig, Result};

/// Cloud Storage JSON API, media uploads only.
#[derive(Debug, Clone)]
pub struct StorageClient {
    http: Client,
    endpoint: String,
    token: AccessToken,
}

#[derive(Debug, Deserialize)]
struct StoredObject {
    #[serde(default)]
    size: Option<String>,
    #[serde(default)]
    generation: Option<String>,
}

pub fn gcs_uri(bucket: &str, object: &str) -> String {
    format!("gs://{}/{}", bucket, object)
}

impl StorageClient {
    pub fn new(http: Client, token: AccessToken, config: &AppConfig) -> Self {
        Self {
            http,
            endpoint: config
                .cloud
                .storage_upload_endpoint
                .trim_end_matches('/')
                .to_string(),
            token,
        }
    }
}

impl ObjectStore for StorageClient {
    async fn upload(
        &self,
        bucket: &str,
        object: &str,
        content_type: &str,
        body: String,
    ) -> Result<String> {
        let response = self
            .http
            .post(format!("{}/b/{}/o", self.endpoint, bucket))
            .query(&[("uploadType", "media"), ("name", object)])
            .bearer_auth(self.token.as_str())
            .header(CONTENT_TYPE, content_type)
            .body(body)
            .send()
            .await?;
        let stored: StoredObject = check_status(response).await?.json().await?;

        tracing::debug!(
            bucket,
            object,
            size = stored.size.as_deref().unwrap_or("?"),
            generation = stored.generation.as_deref().unwrap_or("?"),
            "Stored object"
        );

        Ok(gcs_uri(bucket, object))
    }
}
