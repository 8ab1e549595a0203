use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("backend error: {0}")]
    Unavailable(String),

    #[error("{entity} {id} does not exist")]
    NotFound { entity: &'static str, id: String },

    #[error("{entity} {id} belongs to another owner")]
    OwnerMismatch { entity: &'static str, id: String },

    #[error("conflict: {0}")]
    Conflict(String),
}
