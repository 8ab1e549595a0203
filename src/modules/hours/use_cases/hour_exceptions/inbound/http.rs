use axum::{
    Json,
    extract::{Query, State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::modules::hours::adapters::inbound::views::{CursorPageView, HourExceptionView};
use crate::modules::hours::core::date_filter::parse_day;
use crate::modules::hours::core::hour_entry::decimal_from_transport;
use crate::modules::hours::core::hour_exception::{ExceptionCategory, HourExceptionType};
use crate::modules::hours::use_cases::hour_exceptions::command::CreateHourException;
use crate::shared::core::errors::ServiceError;
use crate::shared::infrastructure::transport::{cursor_from_param, owner_from_headers};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct CreateHourExceptionBody {
    pub date: String,
    pub hours: f64,
    pub kind: HourExceptionType,
}

impl TryFrom<CreateHourExceptionBody> for CreateHourException {
    type Error = ServiceError;

    fn try_from(body: CreateHourExceptionBody) -> Result<Self, Self::Error> {
        Ok(Self {
            date: parse_day(&body.date)?,
            hours: decimal_from_transport(body.hours)?,
            kind: body.kind,
        })
    }
}

#[derive(Deserialize)]
pub struct ListHourExceptionsParams {
    pub cursor: Option<String>,
    pub limit: Option<i64>,
    pub category: Option<ExceptionCategory>,
}

pub async fn create(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Json<CreateHourExceptionBody>, JsonRejection>,
) -> Result<Response, ServiceError> {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return Ok(StatusCode::UNPROCESSABLE_ENTITY.into_response()),
    };
    let owner = owner_from_headers(&headers);
    let exception = state
        .hour_exceptions
        .create(owner.as_ref(), CreateHourException::try_from(body)?)
        .await?;
    Ok((StatusCode::CREATED, Json(HourExceptionView::from(exception))).into_response())
}

pub async fn list_infinite(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<ListHourExceptionsParams>,
) -> Result<Json<CursorPageView<HourExceptionView>>, ServiceError> {
    let owner = owner_from_headers(&headers);
    let cursor = cursor_from_param(params.cursor.as_deref())?;
    let slice = state
        .hour_exceptions
        .list_infinite(owner.as_ref(), cursor, params.limit, params.category)
        .await?;
    Ok(Json(slice.into()))
}
