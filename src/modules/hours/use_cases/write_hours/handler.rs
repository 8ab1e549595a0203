use crate::modules::hours::adapters::outbound::hour_store::{HourRow, HourStore, Mutation};
use crate::modules::hours::core::hour_entry::{HourEntry, HourFields};
use crate::modules::hours::core::tag_reconciler::reconcile;
use crate::modules::hours::use_cases::write_hours::command::{CreateHour, EditHour};
use crate::shared::core::errors::{ServiceError, ServiceResult};
use crate::shared::core::identity::require_owner;
use crate::shared::core::primitives::{HourId, OwnerId, TagId};
use chrono::Utc;
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::info;

pub struct WriteHoursHandler<TStore>
where
    TStore: HourStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> WriteHoursHandler<TStore>
where
    TStore: HourStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    /// Inserts the entry and one link per distinct tag in a single batch.
    #[tracing::instrument(skip(self, command), fields(date = %command.date))]
    pub async fn create(
        &self,
        owner: Option<&OwnerId>,
        command: CreateHour,
    ) -> ServiceResult<HourEntry> {
        let owner = require_owner(owner)?;
        let fields = HourFields::new(
            command.value,
            command.date,
            command.description,
            command.project_id,
        )?;
        let tag_ids: BTreeSet<TagId> = command.tag_ids.into_iter().collect();
        let entry = HourEntry::new(HourId::generate(), owner.clone(), fields, tag_ids, Utc::now());

        let mut batch = vec![Mutation::InsertHour(HourRow::from(&entry))];
        batch.extend(entry.tag_ids.iter().map(|tag_id| Mutation::LinkTag {
            hour_id: entry.id,
            tag_id: tag_id.clone(),
        }));
        self.store.commit(batch).await?;

        info!(hour_id = %entry.id, tags = entry.tag_ids.len(), "hour created");
        Ok(entry)
    }

    /// Updates the fields and applies the tag diff against the caller's view
    /// of the current tags. Links are not re-read inside the batch, so two
    /// interleaved edits may act on a stale tag set.
    ///
    /// The returned entry is built from the row read before the write and the
    /// committed batch. Once the batch is in, nothing else can fail the edit.
    #[tracing::instrument(skip(self, command), fields(hour_id = %command.id))]
    pub async fn edit(&self, owner: Option<&OwnerId>, command: EditHour) -> ServiceResult<HourEntry> {
        let owner = require_owner(owner)?;
        let fields = HourFields::new(
            command.value,
            command.date,
            command.description,
            command.project_id,
        )?;
        let existing: BTreeSet<TagId> = command.existing_tag_ids.into_iter().collect();
        let desired: BTreeSet<TagId> = command.tag_ids.into_iter().collect();
        let diff = reconcile(&existing, &desired);
        if !diff.is_disjoint() {
            return Err(ServiceError::Internal(
                "tag reconciliation produced overlapping link and unlink sets".into(),
            ));
        }

        let stored = self
            .store
            .find_hour(command.id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("hour {}", command.id)))?;
        if !stored.is_owned_by(owner) {
            return Err(ServiceError::PermissionDenied);
        }

        let updated_at = Utc::now();
        let mut batch = vec![Mutation::UpdateHour {
            id: command.id,
            owner: owner.clone(),
            fields: fields.clone(),
            updated_at,
        }];
        batch.extend(diff.to_unlink.iter().map(|tag_id| Mutation::UnlinkTag {
            hour_id: command.id,
            tag_id: tag_id.clone(),
        }));
        batch.extend(diff.to_link.iter().map(|tag_id| Mutation::LinkTag {
            hour_id: command.id,
            tag_id: tag_id.clone(),
        }));
        self.store.commit(batch).await?;

        info!(
            linked = diff.to_link.len(),
            unlinked = diff.to_unlink.len(),
            "hour edited"
        );
        let tag_ids = diff.apply_to(&stored.tag_ids);
        Ok(HourEntry {
            value: fields.value,
            date: fields.date,
            description: fields.description,
            project_id: fields.project_id,
            tag_ids,
            updated_at,
            ..stored
        })
    }

    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, owner: Option<&OwnerId>, id: HourId) -> ServiceResult<()> {
        let owner = require_owner(owner)?;
        self.store
            .commit(vec![Mutation::DeleteHour {
                id,
                owner: owner.clone(),
            }])
            .await?;
        info!(hour_id = %id, "hour deleted");
        Ok(())
    }
}
