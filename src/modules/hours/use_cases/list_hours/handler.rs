// Read side of the hour service.
//
// Purpose
// - Resolve owner and date filters, window the store through the pagination
//   planner, and hand back decimal-valued entries.
//
// Responsibilities
// - Every read is restricted to the calling owner.
// - Validate pages and filters before the first store call.
// - Count and fetch are separate calls. Writes landing between two page
//   requests can make a later page repeat or miss a row.

use crate::modules::hours::adapters::outbound::hour_store::{HourQuery, HourStore};
use crate::modules::hours::core::date_filter::DateFilter;
use crate::modules::hours::core::hour_entry::{HourEntry, TagTotal};
use crate::shared::core::errors::{ServiceError, ServiceResult};
use crate::shared::core::identity::require_owner;
use crate::shared::core::pagination::{Cursor, CursorPage, CursorPlan, OffsetPage, OffsetPlan};
use crate::shared::core::primitives::{HourId, OwnerId};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::debug;

pub struct ListHoursHandler<TStore>
where
    TStore: HourStore + 'static,
{
    store: Arc<TStore>,
    default_limit: u64,
}

impl<TStore> ListHoursHandler<TStore>
where
    TStore: HourStore + 'static,
{
    pub fn new(store: Arc<TStore>, default_limit: u64) -> Self {
        Self {
            store,
            default_limit,
        }
    }

    fn query(owner: &OwnerId, filter: Option<DateFilter>) -> HourQuery {
        HourQuery {
            owner: owner.clone(),
            date: filter.map(DateFilter::to_predicate),
        }
    }

    #[tracing::instrument(skip(self))]
    pub async fn list_paged(
        &self,
        owner: Option<&OwnerId>,
        filter: Option<DateFilter>,
        page: i64,
        page_size: i64,
    ) -> ServiceResult<OffsetPage<HourEntry>> {
        let owner = require_owner(owner)?;
        let plan = OffsetPlan::new(page, page_size)?;
        let query = Self::query(owner, filter);

        let total = self.store.count_hours(&query).await?;
        let rows = self.store.find_hours(&query, Some(plan.window())).await?;
        debug!(total, returned = rows.len(), "listed hour page");

        Ok(OffsetPage {
            rows,
            meta: plan.meta(total),
        })
    }

    #[tracing::instrument(skip(self))]
    pub async fn list_infinite(
        &self,
        owner: Option<&OwnerId>,
        filter: Option<DateFilter>,
        cursor: Option<Cursor>,
        client_limit: Option<i64>,
    ) -> ServiceResult<CursorPage<HourEntry>> {
        let owner = require_owner(owner)?;
        let plan = CursorPlan::new(cursor, client_limit, self.default_limit)?;
        let query = Self::query(owner, filter);

        let total = self.store.count_hours(&query).await?;
        let rows = self.store.find_hours(&query, Some(plan.window())).await?;
        debug!(total, page = plan.page(), returned = rows.len(), "listed hour slice");

        Ok(CursorPage {
            rows,
            next_cursor: plan.next_cursor(total),
        })
    }

    #[tracing::instrument(skip(self))]
    pub async fn range_for_calendar(
        &self,
        owner: Option<&OwnerId>,
        from: NaiveDate,
        to: NaiveDate,
    ) -> ServiceResult<Vec<HourEntry>> {
        let owner = require_owner(owner)?;
        let filter = DateFilter::range(from, to)?;
        let rows = self
            .store
            .find_hours(&Self::query(owner, Some(filter)), None)
            .await?;
        Ok(rows)
    }

    #[tracing::instrument(skip(self))]
    pub async fn single(&self, owner: Option<&OwnerId>, id: HourId) -> ServiceResult<HourEntry> {
        let owner = require_owner(owner)?;
        let entry = self
            .store
            .find_hour(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("hour {id}")))?;
        if !entry.is_owned_by(owner) {
            return Err(ServiceError::PermissionDenied);
        }
        Ok(entry)
    }

    /// Sums the owner's hour values per tag. Tags without hours report zero.
    #[tracing::instrument(skip(self))]
    pub async fn tag_totals(&self, owner: Option<&OwnerId>) -> ServiceResult<Vec<TagTotal>> {
        let owner = require_owner(owner)?;
        let tags = self.store.list_tags().await?;
        let entries = self.store.find_hours(&Self::query(owner, None), None).await?;

        Ok(tags
            .into_iter()
            .map(|tag| {
                let hours = entries
                    .iter()
                    .filter(|entry| entry.tag_ids.contains(&tag.id))
                    .map(|entry| entry.value)
                    .sum::<Decimal>();
                TagTotal { tag, hours }
            })
            .collect())
    }
}
