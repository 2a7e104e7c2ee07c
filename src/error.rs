//! Error type shared by the pipeline, the Spotify client and the CLI.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The artist search returned no match.
    #[error("Could not find artist '{0}'. Please check the spelling.")]
    NotFound(String),

    /// The artist exists but no track survived null filtering.
    #[error("Found no tracks for artist '{0}'.")]
    EmptyCatalog(String),

    /// A request the pipeline cannot act on, such as asking for zero tracks.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Any failed catalog or publish request. Never retried.
    #[error("Spotify request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl From<std::env::VarError> for Error {
    fn from(err: std::env::VarError) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<dotenv::Error> for Error {
    fn from(err: dotenv::Error) -> Self {
        Error::Config(err.to_string())
    }
}
