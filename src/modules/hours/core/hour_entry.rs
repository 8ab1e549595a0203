// Hour entry aggregate and the field rules shared by create and edit.
//
// Responsibilities
// - Enforce value > 0, a non-empty description and a project reference.
// - Keep value as a decimal. Conversion to floating point happens in transport views only.

use crate::shared::core::errors::ServiceError;
use crate::shared::core::primitives::{HourId, OwnerId, ProjectId, TagId};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use std::collections::BTreeSet;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HourValidationError {
    #[error("value must be bigger than 0, got {0}")]
    NonPositiveValue(Decimal),

    #[error("value is not a finite number")]
    NotANumber,

    #[error("description is required")]
    MissingDescription,

    #[error("project is required")]
    MissingProject,
}

impl From<HourValidationError> for ServiceError {
    fn from(error: HourValidationError) -> Self {
        Self::InvalidArgument(error.to_string())
    }
}

/// Converts a transport number into a decimal, rejecting NaN and infinities.
pub fn decimal_from_transport(value: f64) -> Result<Decimal, HourValidationError> {
    Decimal::try_from(value).map_err(|_| HourValidationError::NotANumber)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HourFields {
    pub value: Decimal,
    pub date: NaiveDate,
    pub description: String,
    pub project_id: ProjectId,
}

impl HourFields {
    pub fn new(
        value: Decimal,
        date: NaiveDate,
        description: impl Into<String>,
        project_id: ProjectId,
    ) -> Result<Self, HourValidationError> {
        let description = description.into();
        if value <= Decimal::ZERO {
            return Err(HourValidationError::NonPositiveValue(value));
        }
        if description.trim().is_empty() {
            return Err(HourValidationError::MissingDescription);
        }
        if project_id.as_str().trim().is_empty() {
            return Err(HourValidationError::MissingProject);
        }
        Ok(Self {
            value,
            date,
            description,
            project_id,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HourEntry {
    pub id: HourId,
    pub owner: OwnerId,
    pub value: Decimal,
    pub date: NaiveDate,
    pub description: String,
    pub project_id: ProjectId,
    pub tag_ids: BTreeSet<TagId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl HourEntry {
    pub fn new(
        id: HourId,
        owner: OwnerId,
        fields: HourFields,
        tag_ids: BTreeSet<TagId>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            owner,
            value: fields.value,
            date: fields.date,
            description: fields.description,
            project_id: fields.project_id,
            tag_ids,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_owned_by(&self, owner: &OwnerId) -> bool {
        &self.owner == owner
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub id: TagId,
    pub name: String,
}

/// Display-level sum of an owner's hours linked to one tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagTotal {
    pub tag: Tag,
    pub hours: Decimal,
}
