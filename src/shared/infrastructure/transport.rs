// Edge glue shared by the HTTP and GraphQL adapters.
//
// Responsibilities
// - Read the caller identity from the request headers.
// - Map the service error taxonomy onto HTTP statuses and GraphQL error codes.

use crate::shared::core::errors::ServiceError;
use crate::shared::core::identity::owner_from_raw;
use crate::shared::core::pagination::Cursor;
use crate::shared::core::primitives::OwnerId;
use async_graphql::ErrorExtensions;
use axum::{
    Json,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::{debug, warn};

pub const OWNER_HEADER: &str = "x-user-id";

pub fn owner_from_headers(headers: &HeaderMap) -> Option<OwnerId> {
    owner_from_raw(
        headers
            .get(OWNER_HEADER)
            .and_then(|value| value.to_str().ok()),
    )
}

/// Cursors travel over HTTP as the JSON text of a previous `next_cursor`.
pub fn cursor_from_param(raw: Option<&str>) -> Result<Option<Cursor>, ServiceError> {
    raw.filter(|value| !value.trim().is_empty())
        .map(|value| {
            serde_json::from_str::<Cursor>(value)
                .map_err(|_| ServiceError::invalid(format!("malformed cursor {value:?}")))
        })
        .transpose()
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub message: String,
}

impl ServiceError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Unauthenticated => StatusCode::UNAUTHORIZED,
            Self::PermissionDenied => StatusCode::FORBIDDEN,
            Self::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            warn!(code = self.code(), error = %self, "request failed");
        } else {
            debug!(code = self.code(), error = %self, "request rejected");
        }
        let body = ErrorBody {
            code: self.code(),
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// async-graphql converts any `Display` into an error, so the code extension
/// has to be attached explicitly.
pub fn to_gql_error(error: ServiceError) -> async_graphql::Error {
    let code = error.code();
    async_graphql::Error::new(error.to_string()).extend_with(|_, extensions| {
        extensions.set("code", code);
    })
}
