use thiserror::Error;

/// Failures that can abort an extraction. Absent DOM nodes are never one of
/// these: a missing element degrades to an empty field instead.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("results page URL is not set")]
    MissingUrl,

    #[error("failed to load results page {url}")]
    PageLoad {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("results page {url} returned HTTP {status}")]
    PageStatus { url: String, status: u16 },

    #[error("failed to fetch image {url}")]
    ImageFetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("image fetch for {url} returned HTTP {status}")]
    ImageStatus { url: String, status: u16 },

    #[error("image embed task failed")]
    Join(#[from] tokio::task::JoinError),
}
