use crate::RawResponse;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::ErrorKind;


/// Reason a subgraph query did not produce the requested field.
#[derive(Debug)]
pub enum QueryError {
    /// No response was received.
    Transport(anyhow::Error),
    /// Non-2xx HTTP status.
    Status(RawResponse),
    MalformedJson {
        response: RawResponse,
        error: serde_json::Error
    },
    /// The service answered with a GraphQL `errors` payload and no usable data.
    Graphql {
        response: RawResponse,
        messages: Vec<String>
    },
    MissingField {
        response: RawResponse,
        field: &'static str
    },
    /// The field is present, but does not have the expected shape.
    Decode {
        response: RawResponse,
        field: &'static str,
        error: serde_json::Error
    }
}


impl QueryError {
    pub fn response(&self) -> Option<&RawResponse> {
        match self {
            QueryError::Transport(_) => None,
            QueryError::Status(response) => Some(response),
            QueryError::MalformedJson { response, .. } => Some(response),
            QueryError::Graphql { response, .. } => Some(response),
            QueryError::MissingField { response, .. } => Some(response),
            QueryError::Decode { response, .. } => Some(response)
        }
    }

    /// Whether the same request has a chance to succeed later.
    ///
    /// Nothing in this crate acts on it, retry policy is up to the caller.
    pub fn is_retryable(&self) -> bool {
        match self {
            QueryError::Transport(err) => is_retryable_transport(err),
            QueryError::Status(response) => matches!(response.status, 429 | 502 | 503 | 504 | 524),
            _ => false
        }
    }
}


impl Display for QueryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            QueryError::Transport(err) => write!(f, "request failed: {}", err),
            QueryError::Status(response) => write!(f, "got HTTP {}", response.status),
            QueryError::MalformedJson { error, .. } => write!(f, "malformed JSON response: {}", error),
            QueryError::Graphql { messages, .. } => write!(f, "query failed: {}", messages.join("; ")),
            QueryError::MissingField { field, .. } => write!(f, "response has no '{}' field", field),
            QueryError::Decode { field, error, .. } => write!(f, "failed to decode '{}' field: {}", field, error)
        }
    }
}


impl Error for QueryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            QueryError::Transport(err) => Some(err.as_ref()),
            QueryError::MalformedJson { error, .. } => Some(error),
            QueryError::Decode { error, .. } => Some(error),
            _ => None
        }
    }
}


fn is_retryable_transport(err: &anyhow::Error) -> bool {
    if let Some(err) = err.downcast_ref::<reqwest::Error>() {
        if err.is_timeout() || err.is_connect() {
            return true
        }
    }
    is_retryable(err.as_ref())
}


fn is_retryable(err: &(dyn Error + 'static)) -> bool {
    if let Some(io_err) = err.downcast_ref::<std::io::Error>() {
        is_retryable_io(io_err)
    } else {
        err.source().map(is_retryable).unwrap_or(false)
    }
}


fn is_retryable_io(err: &std::io::Error) -> bool {
    match err.kind() {
        ErrorKind::ConnectionReset => true,
        ErrorKind::ConnectionAborted => true,
        ErrorKind::TimedOut => true,
        _ => false
    }
}
