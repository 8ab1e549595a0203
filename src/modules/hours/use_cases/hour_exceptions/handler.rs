use crate::modules::hours::adapters::outbound::hour_store::{ExceptionQuery, HourStore, Mutation};
use crate::modules::hours::core::hour_exception::{ExceptionCategory, HourException};
use crate::modules::hours::use_cases::hour_exceptions::command::CreateHourException;
use crate::shared::core::errors::ServiceResult;
use crate::shared::core::identity::require_owner;
use crate::shared::core::pagination::{Cursor, CursorPage, CursorPlan};
use crate::shared::core::primitives::OwnerId;
use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, info};

pub struct HourExceptionsHandler<TStore>
where
    TStore: HourStore + 'static,
{
    store: Arc<TStore>,
    default_limit: u64,
}

impl<TStore> HourExceptionsHandler<TStore>
where
    TStore: HourStore + 'static,
{
    pub fn new(store: Arc<TStore>, default_limit: u64) -> Self {
        Self {
            store,
            default_limit,
        }
    }

    #[tracing::instrument(skip(self))]
    pub async fn create(
        &self,
        owner: Option<&OwnerId>,
        command: CreateHourException,
    ) -> ServiceResult<HourException> {
        let owner = require_owner(owner)?;
        let exception = HourException::new(
            owner.clone(),
            command.date,
            command.hours,
            command.kind,
            Utc::now(),
        )?;
        self.store
            .commit(vec![Mutation::InsertException(exception.clone())])
            .await?;
        info!(exception_id = %exception.id, kind = ?exception.kind, "hour exception created");
        Ok(exception)
    }

    /// Cursor slice of the owner's exceptions, optionally limited to one category.
    #[tracing::instrument(skip(self))]
    pub async fn list_infinite(
        &self,
        owner: Option<&OwnerId>,
        cursor: Option<Cursor>,
        client_limit: Option<i64>,
        category: Option<ExceptionCategory>,
    ) -> ServiceResult<CursorPage<HourException>> {
        let owner = require_owner(owner)?;
        let plan = CursorPlan::new(cursor, client_limit, self.default_limit)?;
        let query = ExceptionQuery {
            owner: owner.clone(),
            kinds: category.map(ExceptionCategory::members),
        };

        let total = self.store.count_exceptions(&query).await?;
        let rows = self.store.find_exceptions(&query, plan.window()).await?;
        debug!(total, page = plan.page(), returned = rows.len(), "listed hour exceptions");

        Ok(CursorPage {
            rows,
            next_cursor: plan.next_cursor(total),
        })
    }
}
