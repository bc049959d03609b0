use std::time::Duration;

use futures_util::StreamExt;
use suggest_logging::suggest_debug;
use url::Url;

use crate::endpoint::suggestions_url;
use crate::{FailureKind, FetchError, SuggestionRecord};

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_bytes: u64,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(5),
            request_timeout: Duration::from_secs(10),
            max_bytes: 1024 * 1024,
        }
    }
}

#[async_trait::async_trait]
pub trait SuggestionFetcher: Send + Sync {
    async fn fetch(&self, query: &str) -> Result<Vec<SuggestionRecord>, FetchError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    base_url: Url,
    settings: FetchSettings,
    client: reqwest::Client,
}

impl ReqwestFetcher {
    pub fn new(base_url: Url, settings: FetchSettings) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self {
            base_url,
            settings,
            client,
        })
    }

    fn too_large(&self, actual: u64) -> FetchError {
        FetchError::new(
            FailureKind::TooLarge {
                max_bytes: self.settings.max_bytes,
                actual: Some(actual),
            },
            "response too large",
        )
    }
}

#[async_trait::async_trait]
impl SuggestionFetcher for ReqwestFetcher {
    async fn fetch(&self, query: &str) -> Result<Vec<SuggestionRecord>, FetchError> {
        let url = suggestions_url(&self.base_url, query)?;
        suggest_debug!("GET {}", url);

        let response = self.client.get(url).send().await.map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        if let Some(content_len) = response.content_length() {
            if content_len > self.settings.max_bytes {
                return Err(self.too_large(content_len));
            }
        }

        let mut body = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = body.len() as u64 + chunk.len() as u64;
            if next_len > self.settings.max_bytes {
                return Err(self.too_large(next_len));
            }
            body.extend_from_slice(&chunk);
        }

        parse_suggestions(&body)
    }
}

/// Parses the endpoint body: a JSON array of suggestion records.
pub(crate) fn parse_suggestions(body: &[u8]) -> Result<Vec<SuggestionRecord>, FetchError> {
    serde_json::from_slice(body)
        .map_err(|err| FetchError::new(FailureKind::MalformedBody, err.to_string()))
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}
