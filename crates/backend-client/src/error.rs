//! Backend error types.

pub type BackendResult<T> = Result<T, BackendError>;

/// Failure of a call against the hosted backend.
///
/// The UI does not distinguish between these; they exist so logs say what
/// actually went wrong.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("request to {endpoint} failed: {source}")]
    Http {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{endpoint} returned {status}: {body}")]
    Api {
        endpoint: String,
        status: u16,
        /// Message parsed from the error body, if it had one.
        message: Option<String>,
        body: String,
    },

    #[error("could not decode response from {endpoint}: {source}")]
    Deserialization {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// An already-read body did not have the expected shape.
    #[error("unexpected response from {endpoint}: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },
}

impl BackendError {
    /// The backend's own message, when the failure came with one.
    pub fn user_message(&self) -> Option<&str> {
        match self {
            BackendError::Api { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            BackendError::Api { status, .. } => Some(*status),
            BackendError::Http { source, .. } => source.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Read a non-success response into an `Api` error.
    pub(crate) async fn from_response(endpoint: &str, resp: reqwest::Response) -> Self {
        let status = resp.status().as_u16();
        let body = resp.text().await.unwrap_or_default();
        let message = extract_message(&body);
        tracing::warn!(endpoint, status, message = message.as_deref(), "backend call failed");
        BackendError::Api {
            endpoint: endpoint.to_string(),
            status,
            message,
            body,
        }
    }
}

/// Pull a human-readable message out of an error body.
///
/// Table errors use `message`; auth errors use `error_description` or `msg`.
pub(crate) fn extract_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["message", "error_description", "msg", "error"]
        .iter()
        .filter_map(|key| value.get(*key).and_then(|v| v.as_str()))
        .map(str::trim)
        .find(|msg| !msg.is_empty())
        .map(str::to_string)
}
