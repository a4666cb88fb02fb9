//! Error types for the route guide service.
//!
//! This module defines the central `Error` enum, which captures the
//! recoverable and reportable error cases within the service. It implements
//! `From<Error>` for `tonic::Status` to enable seamless gRPC error
//! propagation to clients with appropriate status codes and messages.
//!
//! A lookup that finds no feature at a point is *not* an error: the service
//! answers with the empty-name sentinel feature instead.

use tonic::Status;

pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for the route guide service.
#[derive(Clone, thiserror::Error, Debug)]
pub enum Error {
    /// Internal channel send/receive failure (e.g., closed or full channel).
    #[error("Channel error: {context}")]
    ChannelError { context: String },

    /// The client aborted an in-flight stream.
    #[error("Request cancelled by client")]
    RequestCancelled,

    /// The client request was invalid or exceeded constraints.
    #[error("Invalid request: {reason}")]
    InvalidRequest { reason: String },
}

impl From<Error> for Status {
    fn from(err: Error) -> Self {
        match err {
            Error::ChannelError { context } => {
                Status::internal(format!("Channel error: {}", context))
            }
            Error::RequestCancelled => Status::cancelled("Request was cancelled"),
            Error::InvalidRequest { reason } => Status::invalid_argument(reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let status: Status = Error::RequestCancelled.into();
        assert_eq!(status.code(), tonic::Code::Cancelled);

        let status: Status = Error::InvalidRequest {
            reason: "latitude out of range".into(),
        }
        .into();
        assert_eq!(status.code(), tonic::Code::InvalidArgument);

        let status: Status = Error::ChannelError {
            context: "closed".into(),
        }
        .into();
        assert_eq!(status.code(), tonic::Code::Internal);
    }
}
