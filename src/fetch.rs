use std::time::Duration;

use async_trait::async_trait;
use base64::Engine;
use reqwest::{Client, StatusCode};
use tracing::{debug, info, warn};

use crate::error::PipelineError;

const MAX_RETRIES: u32 = 3;
const BASE_BACKOFF_MS: u64 = 2000;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Fetch the results page HTML, retrying transient upstream failures with
/// exponential backoff. Transport errors fail immediately.
pub async fn fetch_page(url: &str) -> Result<String, PipelineError> {
    let client = Client::new();
    info!("Loading results page: {}", url);

    let mut attempt = 0;
    let response = loop {
        let response = client
            .get(url)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(|source| PipelineError::PageLoad {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !retryable(status) || attempt == MAX_RETRIES {
            break response;
        }

        let backoff = Duration::from_millis(BASE_BACKOFF_MS * 2u64.pow(attempt));
        warn!(
            "Got HTTP {} from {} (attempt {}/{}), backing off {:.1}s",
            status,
            url,
            attempt + 1,
            MAX_RETRIES,
            backoff.as_secs_f64()
        );
        tokio::time::sleep(backoff).await;
        attempt += 1;
    };

    let status = response.status();
    if !status.is_success() {
        return Err(PipelineError::PageStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    response.text().await.map_err(|source| PipelineError::PageLoad {
        url: url.to_string(),
        source,
    })
}

fn retryable(status: StatusCode) -> bool {
    status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error()
}

/// Turns a raster image URL into a string that embeds directly. Failures
/// propagate to the caller untouched; there is no retry at this seam.
#[async_trait]
pub trait ImageEncoder: Send + Sync {
    async fn embed(&self, url: &str) -> Result<String, PipelineError>;
}

pub struct HttpImageEncoder {
    client: Client,
}

impl HttpImageEncoder {
    pub fn new() -> Self {
        HttpImageEncoder {
            client: Client::new(),
        }
    }
}

#[async_trait]
impl ImageEncoder for HttpImageEncoder {
    async fn embed(&self, url: &str) -> Result<String, PipelineError> {
        debug!("Embedding image: {}", url);
        let response = self
            .client
            .get(url)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(|source| PipelineError::ImageFetch {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(PipelineError::ImageStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let mime = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(';').next())
            .map(|v| v.trim().to_string())
            .unwrap_or_else(|| "image/png".to_string());

        let bytes = response
            .bytes()
            .await
            .map_err(|source| PipelineError::ImageFetch {
                url: url.to_string(),
                source,
            })?;

        Ok(data_uri(&mime, &bytes))
    }
}

fn data_uri(mime: &str, bytes: &[u8]) -> String {
    format!(
        "data:{};base64,{}",
        mime,
        base64::engine::general_purpose::STANDARD.encode(bytes)
    )
}
