use thiserror::Error;

/// Every failed call to the parser API is normalized into exactly one of
/// these, in this priority order: an HTTP error status beats a transport
/// failure, and a timeout is a request error, not a network error.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("API Error ({status}): {detail}")]
    Api { status: u16, detail: String },

    #[error("Network error: Unable to reach the parser API")]
    Network,

    #[error("Request error: {0}")]
    Request(String),

    #[error("An unexpected error occurred while testing the parser")]
    Unexpected,
}
