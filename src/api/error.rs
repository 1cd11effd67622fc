use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShareError {
    /// A caller-supplied value failed validation before any network call.
    #[error("invalid argument: {0}")]
    Argument(String),

    /// Credential verification or session creation failed. The remote
    /// detail is logged, not carried here.
    #[error("authentication failed")]
    Authentication,

    /// A readings call was attempted without a valid session.
    #[error("not authenticated - no active session")]
    NotAuthenticated,

    /// The readings call failed in transport, was rejected remotely, or
    /// returned a record that could not be parsed.
    #[error("glucose fetch failed: {0}")]
    Fetch(String),

    /// The underlying HTTP client could not be initialized. Failures
    /// during an operation are reported as `Authentication` or `Fetch`
    /// instead.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}

/// Maximum length for remote response bodies in log output
const MAX_ERROR_BODY_LENGTH: usize = 500;

/// Truncate a response body to avoid logging excessive data
pub(crate) fn truncate_body(body: &str) -> String {
    if body.len() <= MAX_ERROR_BODY_LENGTH {
        body.to_string()
    } else {
        format!(
            "{}... (truncated, {} total bytes)",
            &body[..MAX_ERROR_BODY_LENGTH],
            body.len()
        )
    }
}
