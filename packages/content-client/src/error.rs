//! Error type for backend requests.

use thiserror::Error;

/// Failure of a content backend request.
///
/// The frontend's resource state only ever stores the rendered message; the
/// variants exist so the client boundary can log causes distinctly.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("backend rejected the request (HTTP {status})")]
    Status { status: u16 },

    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("content client has not been initialised")]
    NotConfigured,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_presentable() {
        let err = FetchError::Status { status: 503 };
        assert_eq!(err.to_string(), "backend rejected the request (HTTP 503)");

        let err = FetchError::NotConfigured;
        assert_eq!(err.to_string(), "content client has not been initialised");
    }
}
