use axum::{
    Json,
    extract::{Path, Query, State},
    http::HeaderMap,
};
use serde::Deserialize;

use crate::modules::hours::adapters::inbound::views::{
    CursorPageView, HourView, OffsetPageView, TagTotalView,
};
use crate::modules::hours::core::date_filter::{DateFilter, parse_day};
use crate::shared::core::errors::ServiceError;
use crate::shared::core::primitives::HourId;
use crate::shared::infrastructure::transport::{cursor_from_param, owner_from_headers};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ListHoursParams {
    pub date: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}

#[derive(Deserialize)]
pub struct ListHoursInfiniteParams {
    pub date: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub cursor: Option<String>,
    pub limit: Option<i64>,
}

#[derive(Deserialize)]
pub struct CalendarParams {
    pub from: String,
    pub to: String,
}

pub fn parse_hour_id(raw: &str) -> Result<HourId, ServiceError> {
    HourId::parse(raw).ok_or_else(|| ServiceError::invalid(format!("malformed hour id {raw:?}")))
}

pub async fn list_paged(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<ListHoursParams>,
) -> Result<Json<OffsetPageView<HourView>>, ServiceError> {
    let owner = owner_from_headers(&headers);
    let filter = DateFilter::from_parts(
        params.date.as_deref(),
        params.from.as_deref(),
        params.to.as_deref(),
    )?;
    let page = state
        .list_hours
        .list_paged(
            owner.as_ref(),
            filter,
            params.page.unwrap_or(1),
            params.page_size.unwrap_or(state.default_page_size),
        )
        .await?;
    Ok(Json(page.into()))
}

pub async fn list_infinite(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<ListHoursInfiniteParams>,
) -> Result<Json<CursorPageView<HourView>>, ServiceError> {
    let owner = owner_from_headers(&headers);
    let filter = DateFilter::from_parts(
        params.date.as_deref(),
        params.from.as_deref(),
        params.to.as_deref(),
    )?;
    let cursor = cursor_from_param(params.cursor.as_deref())?;
    let slice = state
        .list_hours
        .list_infinite(owner.as_ref(), filter, cursor, params.limit)
        .await?;
    Ok(Json(slice.into()))
}

pub async fn calendar(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<CalendarParams>,
) -> Result<Json<Vec<HourView>>, ServiceError> {
    let owner = owner_from_headers(&headers);
    let rows = state
        .list_hours
        .range_for_calendar(owner.as_ref(), parse_day(&params.from)?, parse_day(&params.to)?)
        .await?;
    Ok(Json(rows.into_iter().map(HourView::from).collect()))
}

pub async fn single(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<HourView>, ServiceError> {
    let owner = owner_from_headers(&headers);
    let entry = state
        .list_hours
        .single(owner.as_ref(), parse_hour_id(&id)?)
        .await?;
    Ok(Json(entry.into()))
}

pub async fn tag_totals(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<TagTotalView>>, ServiceError> {
    let owner = owner_from_headers(&headers);
    let totals = state.list_hours.tag_totals(owner.as_ref()).await?;
    Ok(Json(totals.into_iter().map(TagTotalView::from).collect()))
}
