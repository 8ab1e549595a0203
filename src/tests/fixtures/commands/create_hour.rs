// Shared test fixture for the CreateHour command.
// Defaults come from json/create_hour.json; override single fields per test.

use crate::modules::hours::core::hour_entry::decimal_from_transport;
use crate::modules::hours::use_cases::write_hours::command::CreateHour;
use crate::shared::core::primitives::{ProjectId, TagId};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

const CREATE_HOUR_JSON: &str = include_str!("json/create_hour.json");

// JSON -> DTO (transport shape)
#[derive(Debug, Clone, Deserialize)]
pub struct CreateHourDto {
    pub value: f64,
    pub date: NaiveDate,
    pub description: String,
    pub project_id: String,
    pub tag_ids: Vec<String>,
}

pub struct CreateHourBuilder {
    inner: CreateHour,
}

impl CreateHourBuilder {
    pub fn new() -> Self {
        let dto: CreateHourDto = serde_json::from_str(CREATE_HOUR_JSON).unwrap();
        Self {
            inner: CreateHour {
                value: decimal_from_transport(dto.value).unwrap(),
                date: dto.date,
                description: dto.description,
                project_id: ProjectId::new(dto.project_id),
                tag_ids: dto.tag_ids.into_iter().map(TagId::new).collect(),
            },
        }
    }

    pub fn value(mut self, v: Decimal) -> Self {
        self.inner.value = v;
        self
    }

    pub fn date(mut self, v: NaiveDate) -> Self {
        self.inner.date = v;
        self
    }

    pub fn description(mut self, v: impl Into<String>) -> Self {
        self.inner.description = v.into();
        self
    }

    pub fn project_id(mut self, v: &str) -> Self {
        self.inner.project_id = ProjectId::new(v);
        self
    }

    pub fn tag_ids(mut self, v: &[&str]) -> Self {
        self.inner.tag_ids = v.iter().map(|id| TagId::new(*id)).collect();
        self
    }

    pub fn build(self) -> CreateHour {
        self.inner
    }
}
