use thiserror::Error;

use crate::client::Endpoint;
use crate::decode::DecodeError;

/// The provider could not be reached or its answer could not be read.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to read response body from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// For transports that do not go through `reqwest`, such as a replay of
    /// recorded payloads from disk.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Why a report request failed.
///
/// The three kinds are kept apart: a transport failure yields no report, the
/// other two come with whatever part of the report could be decoded.
#[derive(Debug, Error)]
pub enum WwoError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("failed to decode {endpoint} response: {source}")]
    Decode {
        endpoint: Endpoint,
        #[source]
        source: DecodeError,
    },

    /// The payload carried an `error/msg` node; displays as the message itself.
    #[error("{message}")]
    Remote { message: String },
}
