//! Error types for the OpenFIGI client.

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, FigiError>;

/// Every way a mapping call can fail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FigiError {
    /// No request was supplied.
    #[error("nil mapping request")]
    NilRequest,

    /// The request has an empty `idValue`.
    #[error("missing ID")]
    MissingId,

    /// The request has no usable `idType`.
    #[error("missing ID type")]
    MissingIdType,

    /// `securityType2` is required for ambiguous identifier types.
    #[error("missing securityType2 (required for BASE_TICKER and ID_EXCH_SYMBOL)")]
    MissingSecurityType2,

    /// The request batch could not be encoded.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// The HTTP request could not be built.
    #[error("Request error: {0}")]
    Request(String),

    /// The HTTP exchange itself failed.
    #[error("Network error: {0}")]
    Network(String),

    /// The service answered with a non-2xx status.
    #[error("failed reading response {status}:\n{body}")]
    Status { status: u16, body: String },

    /// The response body did not match the batch envelope.
    #[error("Decode error: {0}")]
    Decode(String),

    /// A batch slot carried an `error` string.
    #[error("{0}")]
    Api(String),

    /// A batch slot carried a `warning` string.
    #[error("{0}")]
    Warning(String),

    /// The caller interrupted the call.
    #[error("Operation canceled")]
    Cancelled,

    /// The caller's deadline passed before the call completed.
    #[error("Operation timed out")]
    Timeout,
}

impl FigiError {
    /// True for errors raised locally before any I/O.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            FigiError::NilRequest
                | FigiError::MissingId
                | FigiError::MissingIdType
                | FigiError::MissingSecurityType2
        )
    }
}

impl From<serde_json::Error> for FigiError {
    fn from(err: serde_json::Error) -> Self {
        FigiError::Serialization(err.to_string())
    }
}
