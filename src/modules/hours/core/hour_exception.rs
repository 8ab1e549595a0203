// Hour exceptions: time off, vacation and holiday work.
//
// Purpose
// - Record non-standard time, disjoint from ordinary hour entries.
//
// Responsibilities
// - Keep the exception type a closed enum.
// - Derive the working/non-working split from one exhaustive match.

use crate::shared::core::errors::ServiceError;
use crate::shared::core::primitives::{ExceptionId, OwnerId};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HourExceptionType {
    TimeOff,
    Vacation,
    HolidayWork,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExceptionCategory {
    /// Time away from work.
    NonWorking,
    /// Work on a day that is normally off.
    ExtraWorking,
}

impl HourExceptionType {
    pub const ALL: [HourExceptionType; 3] = [Self::TimeOff, Self::Vacation, Self::HolidayWork];

    pub fn category(self) -> ExceptionCategory {
        match self {
            Self::TimeOff | Self::Vacation => ExceptionCategory::NonWorking,
            Self::HolidayWork => ExceptionCategory::ExtraWorking,
        }
    }
}

impl ExceptionCategory {
    pub fn members(self) -> Vec<HourExceptionType> {
        HourExceptionType::ALL
            .into_iter()
            .filter(|kind| kind.category() == self)
            .collect()
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HourExceptionError {
    #[error("hours must be bigger than 0, got {0}")]
    NonPositiveHours(Decimal),
}

impl From<HourExceptionError> for ServiceError {
    fn from(error: HourExceptionError) -> Self {
        Self::InvalidArgument(error.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HourException {
    pub id: ExceptionId,
    pub owner: OwnerId,
    pub date: NaiveDate,
    pub hours: Decimal,
    pub kind: HourExceptionType,
    pub created_at: DateTime<Utc>,
}

impl HourException {
    pub fn new(
        owner: OwnerId,
        date: NaiveDate,
        hours: Decimal,
        kind: HourExceptionType,
        now: DateTime<Utc>,
    ) -> Result<Self, HourExceptionError> {
        if hours <= Decimal::ZERO {
            return Err(HourExceptionError::NonPositiveHours(hours));
        }
        Ok(Self {
            id: ExceptionId::generate(),
            owner,
            date,
            hours,
            kind,
            created_at: now,
        })
    }
}
