use crate::cloud::{Glossary, GlossaryService, LocationPath, ObjectStore};
use crate::glossary::GlossaryData;
use crate::utils::{AppConfig, Result, TranslatorError};

const CSV_CONTENT_TYPE: &str = "text/csv";

/// Replaces the remote glossary named after `data` with the local CSV content
/// and returns the created resource name.
///
/// An existing glossary is deleted first. A failed lookup counts as "absent";
/// every later failure aborts the sync as a glossary error.
pub async fn create_or_update_glossary<G, S>(
    glossaries: &G,
    storage: &S,
    data: &GlossaryData,
    project_id: &str,
    config: &AppConfig,
) -> Result<String>
where
    G: GlossaryService,
    S: ObjectStore,
{
    sync_glossary(glossaries, storage, data, project_id, config)
        .await
        .map_err(|e| TranslatorError::glossary("Failed to create/update glossary", e))
}

async fn sync_glossary<G, S>(
    glossaries: &G,
    storage: &S,
    data: &GlossaryData,
    project_id: &str,
    config: &AppConfig,
) -> Result<String>
where
    G: GlossaryService,
    S: ObjectStore,
{
    let location = LocationPath::new(project_id, &config.cloud.location);
    let parent = location.parent();
    let glossary_name = location.glossary(&data.name);

    match glossaries.get_glossary(&glossary_name).await {
        Ok(existing) => {
            tracing::info!(
                glossary = %glossary_name,
                entries = existing.entry_count.unwrap_or_default(),
                "Deleting existing glossary"
            );
            let operation = glossaries.delete_glossary(&glossary_name).await?;
            glossaries.wait_operation(operation).await?;
        }
        Err(e) => {
            tracing::debug!(glossary = %glossary_name, error = %e, "No existing glossary");
        }
    }

    let csv_content = data.to_csv()?;
    let bucket = config.glossary.bucket_for(project_id);
    let object = format!("{}.csv", data.name);

    tracing::info!(bucket = %bucket, object = %object, bytes = csv_content.len(), "Uploading glossary CSV");
    let input_uri = storage
        .upload(&bucket, &object, CSV_CONTENT_TYPE, csv_content)
        .await?;

    let request = Glossary::from_csv_source(
        glossary_name.clone(),
        data.language_codes.clone(),
        input_uri,
    );
    tracing::debug!(parent = %parent, request = ?request, "Creating glossary");

    let operation = glossaries.create_glossary(&parent, &request).await?;
    tracing::info!(operation = %operation.name, "Waiting for glossary creation to complete...");
    let finished = glossaries.wait_operation(operation).await?;

    let created = finished
        .response_as::<Glossary>()?
        .map(|g| g.name)
        .filter(|name| !name.is_empty())
        .unwrap_or(glossary_name);

    tracing::info!(glossary = %created, "Glossary created successfully");
    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cloud::Operation;
    use serde_json::json;
    use std::collections::HashMap;
    use std::sync::Mutex;

    const PROJECT: &str = "demo-project";
    const GLOSSARY: &str =
        "projects/demo-project/locations/us-central1/glossaries/translation-glossary";

    #[derive(Default)]
    struct FakeGlossaries {
        exists: bool,
        fail_delete: bool,
        fail_wait: bool,
        fail_create: bool,
        calls: Mutex<Vec<String>>,
        created: Mutex<Option<Glossary>>,
    }

    impl FakeGlossaries {
        fn record(&self, call: String) {
            self.calls.lock().unwrap().push(call);
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl GlossaryService for FakeGlossaries {
        async fn get_glossary(&self, name: &str) -> Result<Glossary> {
            self.record(format!("get {}", name));
            if self.exists {
                Ok(Glossary {
                    name: name.to_string(),
                    entry_count: Some(4),
                    ..Default::default()
                })
            } else {
                Err(TranslatorError::Api {
                    status: 404,
                    message: "Glossary not found.".into(),
                })
            }
        }

        async fn delete_glossary(&self, name: &str) -> Result<Operation> {
            self.record(format!("delete {}", name));
            if self.fail_delete {
                return Err(TranslatorError::Api {
                    status: 500,
                    message: "boom".into(),
                });
            }
            Ok(Operation {
                name: "operations/delete".into(),
                ..Default::default()
            })
        }

        async fn create_glossary(&self, parent: &str, glossary: &Glossary) -> Result<Operation> {
            self.record(format!("create {}", parent));
            if self.fail_create {
                return Err(TranslatorError::Api {
                    status: 403,
                    message: "permission denied".into(),
                });
            }
            *self.created.lock().unwrap() = Some(glossary.clone());
            Ok(Operation {
                name: "operations/create".into(),
                ..Default::default()
            })
        }

        async fn wait_operation(&self, operation: Operation) -> Result<Operation> {
            self.record(format!("wait {}", operation.name));
            if self.fail_wait {
                return Err(TranslatorError::Operation {
                    name: operation.name,
                    code: 13,
                    message: "internal".into(),
                });
            }
            let response = (operation.name == "operations/create")
                .then(|| json!({ "name": GLOSSARY, "entryCount": 2 }));
            Ok(Operation {
                done: true,
                response,
                ..operation
            })
        }
    }

    #[derive(Default)]
    struct FakeStorage {
        fail_upload: bool,
        uploads: Mutex<Vec<(String, String, String, String)>>,
    }

    impl ObjectStore for FakeStorage {
        async fn upload(
            &self,
            bucket: &str,
            object: &str,
            content_type: &str,
            body: String,
        ) -> Result<String> {
            if self.fail_upload {
                return Err(TranslatorError::Api {
                    status: 403,
                    message: "bucket access denied".into(),
                });
            }
            self.uploads.lock().unwrap().push((
                bucket.to_string(),
                object.to_string(),
                content_type.to_string(),
                body,
            ));
            Ok(format!("gs://{}/{}", bucket, object))
        }
    }

    fn sample() -> GlossaryData {
        GlossaryData {
            name: "translation-glossary".into(),
            language_codes: vec!["en".into(), "ja".into()],
            entries: vec![
                HashMap::from([("en".to_string(), "cat".to_string()), ("ja".to_string(), "猫".to_string())]),
                HashMap::from([("en".to_string(), "dog".to_string())]),
            ],
        }
    }

    #[tokio::test]
    async fn existing_glossary_is_deleted_before_recreate() {
        let glossaries = FakeGlossaries {
            exists: true,
            ..Default::default()
        };
        let storage = FakeStorage::default();

        let name = create_or_update_glossary(
            &glossaries,
            &storage,
            &sample(),
            PROJECT,
            &AppConfig::default(),
        )
        .await
        .unwrap();

        assert_eq!(name, GLOSSARY);
        assert_eq!(
            glossaries.calls(),
            vec![
                format!("get {}", GLOSSARY),
                format!("delete {}", GLOSSARY),
                "wait operations/delete".to_string(),
                "create projects/demo-project/locations/us-central1".to_string(),
                "wait operations/create".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn failed_lookup_skips_delete() {
        let glossaries = FakeGlossaries::default();
        let storage = FakeStorage::default();

        create_or_update_glossary(&glossaries, &storage, &sample(), PROJECT, &AppConfig::default())
            .await
            .unwrap();

        assert!(!glossaries.calls().iter().any(|c| c.starts_with("delete")));
    }

    #[tokio::test]
    async fn csv_is_uploaded_to_the_fixed_blob_and_referenced() {
        let glossaries = FakeGlossaries::default();
        let storage = FakeStorage::default();

        create_or_update_glossary(&glossaries, &storage, &sample(), PROJECT, &AppConfig::default())
            .await
            .unwrap();

        let uploads = storage.uploads.lock().unwrap();
        assert_eq!(uploads.len(), 1);
        let (bucket, object, content_type, body) = &uploads[0];
        assert_eq!(bucket, "demo-project-translation-glossary");
        assert_eq!(object, "translation-glossary.csv");
        assert_eq!(content_type, "text/csv");
        assert_eq!(body, "en,ja\ncat,猫\ndog,\n");

        let created = glossaries.created.lock().unwrap().clone().unwrap();
        assert_eq!(created.name, GLOSSARY);
        assert_eq!(
            created.language_codes_set.unwrap().language_codes,
            vec!["en", "ja"]
        );
        assert_eq!(
            created.input_config.unwrap().gcs_source.input_uri,
            "gs://demo-project-translation-glossary/translation-glossary.csv"
        );
    }

    #[tokio::test]
    async fn create_failure_is_a_glossary_error() {
        let glossaries = FakeGlossaries {
            fail_create: true,
            ..Default::default()
        };
        let storage = FakeStorage::default();

        let err = create_or_update_glossary(
            &glossaries,
            &storage,
            &sample(),
            PROJECT,
            &AppConfig::default(),
        )
        .await
        .unwrap_err();

        assert_eq!(err.exit_code(), 3);
        assert_eq!(
            err.to_string(),
            "Failed to create/update glossary: HTTP 403: permission denied"
        );
    }

    #[tokio::test]
    async fn delete_failure_aborts_before_upload() {
        let glossaries = FakeGlossaries {
            exists: true,
            fail_delete: true,
            ..Default::default()
        };
        let storage = FakeStorage::default();

        let err = create_or_update_glossary(
            &glossaries,
            &storage,
            &sample(),
            PROJECT,
            &AppConfig::default(),
        )
        .await
        .unwrap_err();

        assert_eq!(err.exit_code(), 3);
        assert_eq!(
            err.to_string(),
            "Failed to create/update glossary: HTTP 500: boom"
        );
        assert!(storage.uploads.lock().unwrap().is_empty());
        assert!(!glossaries.calls().iter().any(|c| c.starts_with("wait")));
        assert!(!glossaries.calls().iter().any(|c| c.starts_with("create")));
    }

    #[tokio::test]
    async fn failed_delete_operation_aborts_before_upload() {
        let glossaries = FakeGlossaries {
            exists: true,
            fail_wait: true,
            ..Default::default()
        };
        let storage = FakeStorage::default();

        let err = create_or_update_glossary(
            &glossaries,
            &storage,
            &sample(),
            PROJECT,
            &AppConfig::default(),
        )
        .await
        .unwrap_err();

        assert_eq!(err.exit_code(), 3);
        assert!(err
            .to_string()
            .starts_with("Failed to create/update glossary: "));
        assert!(storage.uploads.lock().unwrap().is_empty());
        assert_eq!(
            glossaries.calls().last().map(String::as_str),
            Some("wait operations/delete")
        );
        assert!(!glossaries.calls().iter().any(|c| c.starts_with("create")));
    }

    #[tokio::test]
    async fn upload_failure_aborts_before_create() {
        let glossaries = FakeGlossaries::default();
        let storage = FakeStorage {
            fail_upload: true,
            ..Default::default()
        };

        let err = create_or_update_glossary(
            &glossaries,
            &storage,
            &sample(),
            PROJECT,
            &AppConfig::default(),
        )
        .await
        .unwrap_err();

        assert_eq!(err.exit_code(), 3);
        assert_eq!(
            err.to_string(),
            "Failed to create/update glossary: HTTP 403: bucket access denied"
        );
        assert!(!glossaries.calls().iter().any(|c| c.starts_with("create")));
    }
}
