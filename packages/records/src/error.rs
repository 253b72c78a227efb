use thiserror::Error;

use crate::models::RecordId;

/// Failure of a call against the user API.
///
/// `Clone + PartialEq` so a failure can sit in component state and be compared
/// in tests.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClientError {
    /// The request never produced a response (connection refused, CORS, DNS).
    #[error("network error: {0}")]
    Network(String),

    /// The server answered, but not with a usable success reply.
    #[error("{0}")]
    Server(String),

    #[error("user {0} not found")]
    NotFound(RecordId),
}

impl ClientError {
    pub fn is_network(&self) -> bool {
        matches!(self, ClientError::Network(_))
    }
}
