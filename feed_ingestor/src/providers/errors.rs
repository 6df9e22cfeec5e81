use thiserror::Error;

/// Errors that can occur within a [`FeedProvider`](super::FeedProvider) implementation.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// An error during the HTTP request (network failure, timeout).
    #[error("feed request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// Errors constructing a provider (bad or missing configuration).
#[derive(Debug, Error)]
pub enum ProviderInitError {
    /// Required connection parameters are missing or invalid in the environment.
    #[error(transparent)]
    Env(#[from] shared_utils::env::EnvError),

    /// The HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}
