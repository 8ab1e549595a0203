// Error taxonomy exposed by the hour services.
//
// Purpose
// - One closed set of failure kinds that every transport can map 1:1.
//
// Responsibilities
// - Convert port errors (store, pagination) into the taxonomy.
// - Tell callers which failures are worth retrying.

use crate::shared::core::pagination::PaginationError;
use crate::shared::infrastructure::store::StoreError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    #[error("no owner identity on the request")]
    Unauthenticated,

    #[error("record belongs to another owner")]
    PermissionDenied,

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("internal: {0}")]
    Internal(String),
}

impl ServiceError {
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Only store unavailability is transient.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Unavailable(_))
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::Unauthenticated => "UNAUTHENTICATED",
            Self::PermissionDenied => "PERMISSION_DENIED",
            Self::InvalidArgument(_) => "INVALID_ARGUMENT",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Unavailable(_) => "UNAVAILABLE",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl From<StoreError> for ServiceError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::Unavailable(message) => Self::Unavailable(message),
            StoreError::NotFound { entity, id } => Self::NotFound(format!("{entity} {id}")),
            StoreError::OwnerMismatch { .. } => Self::PermissionDenied,
            StoreError::Conflict(message) => Self::Internal(message),
        }
    }
}

impl From<PaginationError> for ServiceError {
    fn from(error: PaginationError) -> Self {
        Self::InvalidArgument(error.to_string())
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;
