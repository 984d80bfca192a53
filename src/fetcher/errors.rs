use thiserror::Error;

/// Ways a remote fetch can fail.
///
/// A result arriving for a superseded query is not represented here: stale
/// results are control flow, discarded by the controller without surfacing
/// an error.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request could not be completed at all (connectivity, timeout).
    #[error("network error: {0}")]
    Transport(String),

    /// The endpoint answered with a non-success status.
    #[error("endpoint returned status {status}: {detail}")]
    Endpoint { status: u16, detail: String },

    /// A response arrived but its body was not the expected envelope.
    #[error("malformed response body: {0}")]
    Decode(String),
}

pub type FetchResult<T> = Result<T, FetchError>;

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            FetchError::Decode(err.to_string())
        } else {
            FetchError::Transport(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_distinguish_transport_from_endpoint() {
        let transport = FetchError::Transport("connection refused".into());
        assert!(transport.to_string().starts_with("network error"));

        let endpoint = FetchError::Endpoint {
            status: 503,
            detail: "maintenance".into(),
        };
        let message = endpoint.to_string();
        assert!(message.contains("503"));
        assert!(message.contains("maintenance"));
    }
}
