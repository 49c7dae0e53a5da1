//! Error types for the flight board.

use thiserror::Error;

/// Errors that can occur while fetching or decoding flight search results.
///
/// Every variant is fatal for the run; there is no retry or partial-result
/// path.
#[derive(Debug, Error)]
pub enum FlightBoardError {
    /// Network/HTTP transport failed
    #[error("network error: {message}")]
    Network { message: String },

    /// Endpoint answered with a non-success status
    #[error("search endpoint returned status {status}: {body}")]
    Http { status: u16, body: String },

    /// Response body was not valid JSON
    #[error("failed to decode search response: {message}")]
    Decode { message: String },

    /// Response JSON was well-formed but did not have the expected shape
    #[error("unexpected response shape: {message}")]
    Schema { message: String },
}

impl From<reqwest::Error> for FlightBoardError {
    fn from(err: reqwest::Error) -> Self {
        FlightBoardError::Network {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for FlightBoardError {
    fn from(err: serde_json::Error) -> Self {
        FlightBoardError::Decode {
            message: err.to_string(),
        }
    }
}
