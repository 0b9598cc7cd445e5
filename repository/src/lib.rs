//! Job listing repository
//!
//! Downloads the static listing document once, validates it and hands
//! back the annotated job collection.

use chrono::{DateTime, Utc};
use common::{Job, JobRecord};
use reqwest::Client;
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Network error: {0}")]
    Network(reqwest::Error),

    #[error("HTTP error! status: {0}")]
    HttpStatus(u16),

    #[error("Malformed data: {0}")]
    MalformedData(String),
}

impl From<reqwest::Error> for LoadError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            LoadError::MalformedData(format!("Response body is not valid JSON: {}", err))
        } else {
            LoadError::Network(err)
        }
    }
}

#[derive(Clone)]
pub struct JobRepository {
    client: Client,
    source_url: String,
}

impl JobRepository {
    pub fn new(source_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), source_url)
    }

    pub fn with_client(client: Client, source_url: impl Into<String>) -> Self {
        Self {
            client,
            source_url: source_url.into(),
        }
    }

    /// Fetches the listing document and turns it into the job collection.
    ///
    /// Either the whole collection is returned or an error; records are
    /// never partially exposed.
    pub async fn load(&self) -> Result<Vec<Job>, LoadError> {
        tracing::info!(url = %self.source_url, "Fetching job listings");

        let response = self.client.get(&self.source_url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::HttpStatus(status.as_u16()));
        }

        let body = response.json::<Value>().await?;
        parse_jobs(body, Utc::now())
    }
}

/// Validates a decoded listing document and assigns synthetic ids.
///
/// Ids have the form `job-<index>-<loaded_at millis>`.
pub fn parse_jobs(body: Value, loaded_at: DateTime<Utc>) -> Result<Vec<Job>, LoadError> {
    let Value::Array(records) = body else {
        return Err(LoadError::MalformedData("Data is not an array".to_string()));
    };

    let stamp = loaded_at.timestamp_millis();
    records
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            let record: JobRecord = serde_json::from_value(value)
                .map_err(|e| LoadError::MalformedData(format!("record {}: {}", index, e)))?;
            Ok(Job::from_record(format!("job-{}-{}", index, stamp), record))
        })
        .collect()
}
