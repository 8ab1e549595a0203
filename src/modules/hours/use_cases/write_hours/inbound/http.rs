use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::modules::hours::adapters::inbound::views::HourView;
use crate::modules::hours::core::date_filter::parse_day;
use crate::modules::hours::core::hour_entry::decimal_from_transport;
use crate::modules::hours::use_cases::list_hours::inbound::http::parse_hour_id;
use crate::modules::hours::use_cases::write_hours::command::{CreateHour, EditHour};
use crate::shared::core::errors::ServiceError;
use crate::shared::core::primitives::{HourId, ProjectId, TagId};
use crate::shared::infrastructure::transport::owner_from_headers;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct CreateHourBody {
    pub value: f64,
    pub date: String,
    pub description: String,
    pub project_id: String,
    #[serde(default)]
    pub tag_ids: Vec<String>,
}

#[derive(Deserialize)]
pub struct EditHourBody {
    pub value: f64,
    pub date: String,
    pub description: String,
    pub project_id: String,
    #[serde(default)]
    pub tag_ids: Vec<String>,
    #[serde(default)]
    pub existing_tag_ids: Vec<String>,
}

fn tag_ids(raw: Vec<String>) -> Vec<TagId> {
    raw.into_iter().map(TagId::new).collect()
}

impl TryFrom<CreateHourBody> for CreateHour {
    type Error = ServiceError;

    fn try_from(body: CreateHourBody) -> Result<Self, Self::Error> {
        Ok(Self {
            value: decimal_from_transport(body.value)?,
            date: parse_day(&body.date)?,
            description: body.description,
            project_id: ProjectId::new(body.project_id),
            tag_ids: tag_ids(body.tag_ids),
        })
    }
}

impl EditHourBody {
    pub fn into_command(self, id: HourId) -> Result<EditHour, ServiceError> {
        Ok(EditHour {
            id,
            value: decimal_from_transport(self.value)?,
            date: parse_day(&self.date)?,
            description: self.description,
            project_id: ProjectId::new(self.project_id),
            tag_ids: tag_ids(self.tag_ids),
            existing_tag_ids: tag_ids(self.existing_tag_ids),
        })
    }
}

pub async fn create(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Json<CreateHourBody>, JsonRejection>,
) -> Result<Response, ServiceError> {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return Ok(StatusCode::UNPROCESSABLE_ENTITY.into_response()),
    };
    let owner = owner_from_headers(&headers);
    let entry = state
        .write_hours
        .create(owner.as_ref(), CreateHour::try_from(body)?)
        .await?;
    Ok((StatusCode::CREATED, Json(HourView::from(entry))).into_response())
}

pub async fn edit(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    body: Result<Json<EditHourBody>, JsonRejection>,
) -> Result<Response, ServiceError> {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return Ok(StatusCode::UNPROCESSABLE_ENTITY.into_response()),
    };
    let owner = owner_from_headers(&headers);
    let command = body.into_command(parse_hour_id(&id)?)?;
    let entry = state.write_hours.edit(owner.as_ref(), command).await?;
    Ok(Json(HourView::from(entry)).into_response())
}

pub async fn delete(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<StatusCode, ServiceError> {
    let owner = owner_from_headers(&headers);
    state
        .write_hours
        .delete(owner.as_ref(), parse_hour_id(&id)?)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
