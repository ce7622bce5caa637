use std::error::Error as StdError;

use reqwest::StatusCode;
use thiserror::Error;

use crate::models::OperationKind;

/// The broad category of a failed invocation. Nothing is retried, so the kind only determines
/// how the failure is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NetworkFailure,
    HttpStatusFailure,
    DecodeFailure,
    UsageError,
}

/// Errors produced while validating an operation or performing its request.
#[derive(Debug, Error)]
pub enum FeedlyError {
    /// The request could not be sent or the response body could not be read.
    #[error("Could not fetch {op}")]
    Network {
        op: OperationKind,
        #[source]
        cause: reqwest::Error,
    },

    /// The server answered with a non-2xx status. The body is never inspected.
    #[error("Could not fetch {op}: HTTP status {status} from {url}")]
    HttpStatus { op: OperationKind, status: StatusCode, url: String },

    /// The response body was not valid JSON.
    #[error("Could not decode {op}")]
    Decode {
        op: OperationKind,
        #[source]
        cause: serde_json::Error,
    },

    /// Arguments were well-formed but invalid, e.g. a zero count or empty identifier.
    #[error("Invalid arguments: {0}")]
    Usage(String),
}

impl FeedlyError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FeedlyError::Network { .. } => ErrorKind::NetworkFailure,
            FeedlyError::HttpStatus { .. } => ErrorKind::HttpStatusFailure,
            FeedlyError::Decode { .. } => ErrorKind::DecodeFailure,
            FeedlyError::Usage(_) => ErrorKind::UsageError,
        }
    }

    /// The underlying cause, without the operation prefix. Nested causes are joined with `: `,
    /// so a refused connection reads all the way down to the OS error.
    pub fn detail(&self) -> String {
        match self {
            FeedlyError::Network { cause, .. } => cause_chain(cause),
            FeedlyError::HttpStatus { status, url, .. } => format!("HTTP status {} from {}", status, url),
            FeedlyError::Decode { cause, .. } => cause_chain(cause),
            FeedlyError::Usage(msg) => msg.clone(),
        }
    }

    pub(crate) fn usage(msg: impl Into<String>) -> FeedlyError {
        FeedlyError::Usage(msg.into())
    }
}

fn cause_chain(err: &dyn StdError) -> String {
    let mut detail = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        detail.push_str(": ");
        detail.push_str(&cause.to_string());
        source = cause.source();
    }
    detail
}
