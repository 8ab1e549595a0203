// Port for the persistent store behind the hour services.
//
// Purpose
// - Describe what the services need (filtered counts, ordered windows, atomic
//   write batches) without naming a database.
//
// Boundaries
// - Adapters implement this trait. The in-memory adapter backs tests and the
//   development binary.

use crate::modules::hours::core::date_filter::DatePredicate;
use crate::modules::hours::core::hour_entry::{HourEntry, HourFields, Tag};
use crate::modules::hours::core::hour_exception::{HourException, HourExceptionType};
use crate::shared::core::pagination::FetchWindow;
use crate::shared::core::primitives::{HourId, OwnerId, ProjectId, TagId};
use crate::shared::infrastructure::store::StoreError;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use std::collections::BTreeSet;

/// Stored shape of an hour entry. Tag links live in their own table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HourRow {
    pub id: HourId,
    pub owner: OwnerId,
    pub value: Decimal,
    pub date: NaiveDate,
    pub description: String,
    pub project_id: ProjectId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl HourRow {
    pub fn into_entry(self, tag_ids: BTreeSet<TagId>) -> HourEntry {
        HourEntry {
            id: self.id,
            owner: self.owner,
            value: self.value,
            date: self.date,
            description: self.description,
            project_id: self.project_id,
            tag_ids,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl From<&HourEntry> for HourRow {
    fn from(entry: &HourEntry) -> Self {
        Self {
            id: entry.id,
            owner: entry.owner.clone(),
            value: entry.value,
            date: entry.date,
            description: entry.description.clone(),
            project_id: entry.project_id.clone(),
            created_at: entry.created_at,
            updated_at: entry.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HourQuery {
    pub owner: OwnerId,
    pub date: Option<DatePredicate>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExceptionQuery {
    pub owner: OwnerId,
    /// `None` matches every type.
    pub kinds: Option<Vec<HourExceptionType>>,
}

/// One statement of an atomic write batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    InsertHour(HourRow),
    UpdateHour {
        id: HourId,
        owner: OwnerId,
        fields: HourFields,
        updated_at: DateTime<Utc>,
    },
    /// Cascades to the entry's tag links.
    DeleteHour { id: HourId, owner: OwnerId },
    /// Linking a pair that already exists is a conflict.
    LinkTag { hour_id: HourId, tag_id: TagId },
    /// Unlinking a pair that does not exist is a no-op.
    UnlinkTag { hour_id: HourId, tag_id: TagId },
    InsertException(HourException),
}

#[async_trait]
pub trait HourStore: Send + Sync {
    async fn count_hours(&self, query: &HourQuery) -> Result<u64, StoreError>;

    /// Rows ordered by date descending, then id descending. The order is part
    /// of the contract: pagination depends on it. `None` returns every match.
    async fn find_hours(
        &self,
        query: &HourQuery,
        window: Option<FetchWindow>,
    ) -> Result<Vec<HourEntry>, StoreError>;

    async fn find_hour(&self, id: HourId) -> Result<Option<HourEntry>, StoreError>;

    async fn count_exceptions(&self, query: &ExceptionQuery) -> Result<u64, StoreError>;

    /// Same ordering contract as `find_hours`.
    async fn find_exceptions(
        &self,
        query: &ExceptionQuery,
        window: FetchWindow,
    ) -> Result<Vec<HourException>, StoreError>;

    async fn list_tags(&self) -> Result<Vec<Tag>, StoreError>;

    /// Applies every mutation in order, or none of them.
    async fn commit(&self, batch: Vec<Mutation>) -> Result<(), StoreError>;
}
