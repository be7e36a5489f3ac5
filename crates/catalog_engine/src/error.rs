use std::fmt;

use catalog_core::EnvelopeError;
use serde::Serialize;
use thiserror::Error;

/// Why a single upstream fetch failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    RedirectLimitExceeded,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    UnsupportedContentType { content_type: String },
    Decode,
    MalformedEnvelope,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::RedirectLimitExceeded => write!(f, "redirect limit exceeded"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::UnsupportedContentType { content_type } => {
                write!(f, "unsupported content type {content_type}")
            }
            FailureKind::Decode => write!(f, "undecodable body"),
            FailureKind::MalformedEnvelope => write!(f, "malformed json envelope"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}

/// Failure reported by a [`DocumentSource`](crate::DocumentSource).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.kind == FailureKind::HttpStatus(404)
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for FetchError {}

/// Every way a catalog operation can fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Bad input, caught before anything is fetched.
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Transport(FetchError),
}

impl CatalogError {
    pub fn status(&self) -> ErrorStatus {
        match self {
            CatalogError::NotFound(_) => ErrorStatus::NotFound,
            CatalogError::Validation(_) | CatalogError::Transport(_) => ErrorStatus::Failure,
        }
    }

    /// The uniform shape every failure is reported in.
    pub fn to_body(&self) -> ErrorBody {
        ErrorBody {
            error: self.to_string(),
            status: self.status().code(),
        }
    }
}

impl From<FetchError> for CatalogError {
    fn from(err: FetchError) -> Self {
        if err.is_not_found() {
            CatalogError::NotFound("Content not found".to_string())
        } else {
            CatalogError::Transport(err)
        }
    }
}

impl From<EnvelopeError> for CatalogError {
    fn from(err: EnvelopeError) -> Self {
        CatalogError::Transport(FetchError::new(FailureKind::MalformedEnvelope, err.to_string()))
    }
}

/// Coarse classification exposed to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorStatus {
    NotFound,
    Failure,
}

impl ErrorStatus {
    pub fn code(self) -> u16 {
        match self {
            ErrorStatus::NotFound => 404,
            ErrorStatus::Failure => 500,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub status: u16,
}
