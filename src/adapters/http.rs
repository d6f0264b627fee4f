use crate::domain::date::PuzzleDate;
use crate::domain::model::WordEntry;
use crate::domain::ports::{ConfigProvider, WordSource};
use crate::utils::error::{Result, SyncError};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

/// Body returned by the puzzle endpoint. Only `solution` is required.
#[derive(Debug, Clone, Deserialize)]
pub struct PuzzleResponse {
    pub solution: String,
    pub id: Option<u64>,
    pub print_date: Option<String>,
    pub days_since_launch: Option<i64>,
    pub editor: Option<String>,
}

/// Fetches one answer per request from `{endpoint}/{YYYY-MM-DD}.json`.
#[derive(Debug, Clone)]
pub struct HttpWordSource {
    client: Client,
    endpoint: String,
}

impl HttpWordSource {
    pub fn new(endpoint: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Self::new(config.api_endpoint(), config.request_timeout())
    }

    pub fn url_for(&self, date: PuzzleDate) -> String {
        format!("{}/{}.json", self.endpoint, date)
    }

    /// Single GET with the failure kept as a typed error.
    pub async fn try_fetch(&self, date: PuzzleDate) -> Result<WordEntry> {
        let url = self.url_for(date);
        tracing::debug!("Making API request to: {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            return Err(SyncError::HttpStatusError {
                date: date.to_string(),
                status: status.as_u16(),
            });
        }

        let body: PuzzleResponse = response.json().await?;
        tracing::debug!(
            "Puzzle {:?} (print_date {:?}, day {:?}, editor {:?})",
            body.id,
            body.print_date,
            body.days_since_launch,
            body.editor
        );

        Ok(WordEntry::new(date, body.solution))
    }
}

#[async_trait]
impl WordSource for HttpWordSource {
    async fn fetch_for_date(&self, date: PuzzleDate) -> Option<WordEntry> {
        match self.try_fetch(date).await {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::error!("Failed to fetch word for {}: {}", date, e);
                None
            }
        }
    }
}
