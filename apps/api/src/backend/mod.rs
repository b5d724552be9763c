/// Backend client — the only place that talks to the ResourceHub REST backend.
///
/// The backend owns persistence and business validation. This service only
/// reads full record collections per organization and forwards new resources.
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Deserialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::{Project, Resource, ResourceSubmission};

const MAX_RETRIES: u32 = 3;
const DEFAULT_BACKOFF: Duration = Duration::from_millis(500);

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Backend error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Backend unavailable after {retries} retries")]
    Unavailable { retries: u32 },
}

/// Where list views get their records from.
///
/// Implementations return the full, unfiltered collection for an organization;
/// all searching happens on this side. Carried in `AppState` as
/// `Arc<dyn RecordSource>`.
#[async_trait]
pub trait RecordSource: Send + Sync {
    async fn list_resources(&self, org_id: &str) -> Result<Vec<Resource>, BackendError>;

    async fn list_projects(&self, org_id: &str) -> Result<Vec<Project>, BackendError>;

    /// Returns the backend's response body unchanged.
    async fn create_resource(
        &self,
        org_id: &str,
        resource: &ResourceSubmission,
    ) -> Result<Value, BackendError>;
}

#[derive(Debug, Deserialize)]
struct BackendErrorBody {
    #[serde(alias = "error")]
    message: String,
}

/// HTTP implementation of `RecordSource` with retry on transient failures.
#[derive(Clone)]
pub struct BackendClient {
    client: Client,
    base_url: String,
    backoff: Duration,
}

impl BackendClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, BackendError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
            backoff: DEFAULT_BACKOFF,
        })
    }

    /// Base delay between retries; doubles on each attempt.
    pub fn with_backoff(mut self, backoff: Duration) -> Self {
        self.backoff = backoff;
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Sends the request built by `build` up to `attempts` times, retrying on
    /// transport errors, 429 and 5xx with exponential backoff. Other non-success
    /// statuses fail at once. Writes pass `attempts = 1`: a timed-out POST may
    /// already have been stored.
    async fn send_with_retry<F>(&self, attempts: u32, build: F) -> Result<Response, BackendError>
    where
        F: Fn() -> RequestBuilder,
    {
        let mut last_error: Option<BackendError> = None;

        for attempt in 0..attempts {
            if attempt > 0 {
                let delay = self.backoff * (1 << (attempt - 1));
                warn!(
                    "Backend call attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let response = match build().send().await {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(BackendError::Http(e));
                    continue;
                }
            };

            let status = response.status();

            if status.as_u16() == 429 || status.is_server_error() {
                let body = response.text().await.unwrap_or_default();
                warn!("Backend returned {}: {}", status, body);
                last_error = Some(BackendError::Api {
                    status: status.as_u16(),
                    message: body,
                });
                continue;
            }

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                let message = serde_json::from_str::<BackendErrorBody>(&body)
                    .map(|e| e.message)
                    .unwrap_or(body);
                return Err(BackendError::Api {
                    status: status.as_u16(),
                    message,
                });
            }

            return Ok(response);
        }

        Err(last_error.unwrap_or(BackendError::Unavailable { retries: attempts }))
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, BackendError> {
        let url = self.url(path);
        let response = self
            .send_with_retry(MAX_RETRIES, || self.client.get(&url).query(query))
            .await?;
        Ok(response.json().await?)
    }

    /// Fetches a JSON array and decodes it record by record.
    async fn get_records<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<Vec<T>, BackendError> {
        let raw: Vec<Value> = self.get_json(path, query).await?;
        Ok(decode_records(raw, path))
    }
}

/// Decodes each element on its own so one malformed record does not hide the
/// rest of the collection. Undecodable records are skipped with a warning.
fn decode_records<T: DeserializeOwned>(raw: Vec<Value>, source: &str) -> Vec<T> {
    let total = raw.len();
    let records: Vec<T> = raw
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value(value) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!("Skipping record {index} from {source}: {e}");
                None
            }
        })
        .collect();
    if records.len() < total {
        warn!("Decoded {}/{} record(s) from {source}", records.len(), total);
    }
    records
}

#[async_trait]
impl RecordSource for BackendClient {
    async fn list_resources(&self, org_id: &str) -> Result<Vec<Resource>, BackendError> {
        let resources: Vec<Resource> = self
            .get_records("/resources/all", &[("orgID", org_id)])
            .await?;
        debug!("Fetched {} resource(s) for org {}", resources.len(), org_id);
        Ok(resources)
    }

    async fn list_projects(&self, org_id: &str) -> Result<Vec<Project>, BackendError> {
        let projects: Vec<Project> = self.get_records("/projects", &[("orgId", org_id)]).await?;
        debug!("Fetched {} project(s) for org {}", projects.len(), org_id);
        Ok(projects)
    }

    async fn create_resource(
        &self,
        org_id: &str,
        resource: &ResourceSubmission,
    ) -> Result<Value, BackendError> {
        let url = self.url("/resources/");
        let response = self
            .send_with_retry(1, || {
                self.client
                    .post(&url)
                    .query(&[("orgID", org_id)])
                    .json(resource)
            })
            .await?;

        // Some backends answer 201 with an empty body.
        let body = response.text().await?;
        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&body).unwrap_or(Value::String(body)))
    }
}
