use http::StatusCode;

use crate::quantity::Dimension;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The backend rejected the API key.
    #[error("`{url}` rejected the credentials ({status})")]
    Auth { status: StatusCode, url: String },

    /// Any other non-successful response.
    #[error("`{url}` is not available ({status})")]
    NotFound { status: StatusCode, url: String },

    /// Timeout, connection failure, or a broken response body. Never retried.
    #[error("failed to call the backend")]
    Transport(#[from] reqwest::Error),

    #[error("failed to deserialize the response from `{url}`")]
    Decode {
        url: String,

        #[source]
        source: serde_json::Error,
    },

    /// The backend keeps pointing at the same next page.
    #[error("the backend returned the same next page twice: `{cursor}`")]
    Pagination { cursor: String },

    #[error("expected {expected}, got {actual}")]
    Dimensionality { expected: Dimension, actual: Dimension },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("cannot aggregate an empty collection")]
    EmptyCollection,
}

pub type Result<T = (), E = Error> = std::result::Result<T, E>;
