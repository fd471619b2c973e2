//! Acceptance-run errors.
//! Used by: uat.

use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid service url: {0}")]
    Url(#[from] url::ParseError),

    #[error("{url} returned {status}, expected 200 OK")]
    NotReady { url: String, status: StatusCode },

    #[error("service never became ready: {0}")]
    Unavailable(String),

    #[error("{0}")]
    Assertion(String),

    #[error("invalid pattern: {0}")]
    Pattern(regex::Error),

    #[error("cannot read test input {path}: {source}")]
    Input {
        path: String,
        source: std::io::Error,
    },

    #[error("{0} is not set")]
    MissingEnv(&'static str),

    #[error("test input does not contain a url for testing")]
    MissingServiceUrl,
}

pub type Result<T> = std::result::Result<T, Error>;
