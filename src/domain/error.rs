use thiserror::Error;

/// Enumerated translation of vendor error codes returned by the completion API.
///
/// Endpoint controllers map these to their user-facing strings; the same code
/// can surface different messages depending on which endpoint hit it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpstreamError {
    ModelNotAvailable,
    InvalidApiKey,
    QuotaExceeded,
    RateLimited,
    Other(String),
}

impl UpstreamError {
    /// Classify a vendor error code string.
    pub fn from_code(code: &str) -> Self {
        match code {
            "model_not_found" => Self::ModelNotAvailable,
            "invalid_api_key" => Self::InvalidApiKey,
            "insufficient_quota" => Self::QuotaExceeded,
            "rate_limit_exceeded" => Self::RateLimited,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn code(&self) -> &str {
        match self {
            Self::ModelNotAvailable => "model_not_found",
            Self::InvalidApiKey => "invalid_api_key",
            Self::QuotaExceeded => "insufficient_quota",
            Self::RateLimited => "rate_limit_exceeded",
            Self::Other(code) => code,
        }
    }
}

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("API key not configured")]
    MissingCredential,

    #[error("Upstream error: {}", .0.code())]
    Upstream(UpstreamError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::InvalidRequest(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    pub fn is_invalid_request(&self) -> bool {
        matches!(self, Self::InvalidRequest(_))
    }

    pub fn is_missing_credential(&self) -> bool {
        matches!(self, Self::MissingCredential)
    }
}

/// Failure modes of the image encoder.
///
/// Messages match what the upload UI surfaces to the user.
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("Please upload an image file (JPEG, PNG, etc.)")]
    InvalidType,

    #[error("Image size should be less than 4MB")]
    TooLarge,

    #[error("Failed to read file: {0}")]
    ReadError(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_code_maps_known_vendor_codes() {
        assert_eq!(
            UpstreamError::from_code("model_not_found"),
            UpstreamError::ModelNotAvailable
        );
        assert_eq!(
            UpstreamError::from_code("invalid_api_key"),
            UpstreamError::InvalidApiKey
        );
        assert_eq!(
            UpstreamError::from_code("insufficient_quota"),
            UpstreamError::QuotaExceeded
        );
        assert_eq!(
            UpstreamError::from_code("rate_limit_exceeded"),
            UpstreamError::RateLimited
        );
    }

    #[test]
    fn from_code_preserves_unknown_codes() {
        let err = UpstreamError::from_code("context_length_exceeded");
        assert_eq!(err, UpstreamError::Other("context_length_exceeded".into()));
        assert_eq!(err.code(), "context_length_exceeded");
    }

    #[test]
    fn code_round_trips_known_variants() {
        for code in [
            "model_not_found",
            "invalid_api_key",
            "insufficient_quota",
            "rate_limit_exceeded",
        ] {
            assert_eq!(UpstreamError::from_code(code).code(), code);
        }
    }
}
