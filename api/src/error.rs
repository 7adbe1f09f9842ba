use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("github client configuration error: {0}")]
    Configuration(String),
    #[error("github request failed: {0}")]
    NetworkFailure(String),
    #[error("github returned HTTP {status}: {body}")]
    UpstreamRejection { status: u16, body: String },
    #[error("github response could not be parsed: {0}")]
    MalformedResponse(String),
}

pub type ApiResult<T> = Result<T, ApiError>;
