/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the library
#[derive(Error, Debug)]
pub enum AppError {
    /// Transport-level failure (connection, TLS, timeout)
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body could not be decoded, or the payload encoded
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The server answered with a non-success status
    #[error("http status {status}: {body}")]
    HttpStatus {
        /// Status returned by the server
        status: StatusCode,
        /// Raw response body
        body: String,
    },

    /// A caller-supplied value cannot be used to build the request
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// I/O failure
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Status code of a failed response, if this error carries one
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AppError::HttpStatus { status, .. } => Some(*status),
            AppError::Network(e) => e.status(),
            _ => None,
        }
    }
}
