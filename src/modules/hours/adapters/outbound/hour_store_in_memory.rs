// In memory implementation of the HourStore port.
//
// Purpose
// - Exercise the hour services without a database.
//
// Responsibilities
// - Keep hours, tag links, exceptions and the referenced projects and tags in maps.
// - Apply a write batch to a working copy and swap it in only when every mutation succeeded.
// - Simulate an unreachable backend with an offline switch.

use crate::modules::hours::adapters::outbound::hour_store::{
    ExceptionQuery, HourQuery, HourRow, HourStore, Mutation,
};
use crate::modules::hours::core::hour_entry::{HourEntry, Project, Tag};
use crate::modules::hours::core::hour_exception::HourException;
use crate::shared::core::pagination::FetchWindow;
use crate::shared::core::primitives::{ExceptionId, HourId, OwnerId, ProjectId, TagId};
use crate::shared::infrastructure::store::StoreError;
use std::collections::{BTreeSet, HashMap};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use tokio::sync::RwLock;

#[derive(Debug, Clone, Default)]
struct Tables {
    hours: HashMap<HourId, HourRow>,
    links: BTreeSet<(HourId, TagId)>,
    exceptions: HashMap<ExceptionId, HourException>,
    projects: HashMap<ProjectId, Project>,
    tags: HashMap<TagId, Tag>,
}

impl Tables {
    fn tag_ids_of(&self, id: HourId) -> BTreeSet<TagId> {
        self.links
            .iter()
            .filter(|(hour_id, _)| *hour_id == id)
            .map(|(_, tag_id)| tag_id.clone())
            .collect()
    }

    fn entry(&self, row: &HourRow) -> HourEntry {
        row.clone().into_entry(self.tag_ids_of(row.id))
    }

    fn owned_row(&mut self, id: HourId, owner: &OwnerId) -> Result<&mut HourRow, StoreError> {
        let row = self.hours.get_mut(&id).ok_or_else(|| StoreError::NotFound {
            entity: "hour",
            id: id.to_string(),
        })?;
        if &row.owner != owner {
            return Err(StoreError::OwnerMismatch {
                entity: "hour",
                id: id.to_string(),
            });
        }
        Ok(row)
    }

    fn ensure_project(&self, id: &ProjectId) -> Result<(), StoreError> {
        if self.projects.contains_key(id) {
            Ok(())
        } else {
            Err(StoreError::NotFound {
                entity: "project",
                id: id.to_string(),
            })
        }
    }

    fn apply(&mut self, mutation: Mutation) -> Result<(), StoreError> {
        match mutation {
            Mutation::InsertHour(row) => {
                self.ensure_project(&row.project_id)?;
                if self.hours.contains_key(&row.id) {
                    return Err(StoreError::Conflict(format!("hour {} already exists", row.id)));
                }
                self.hours.insert(row.id, row);
            }
            Mutation::UpdateHour {
                id,
                owner,
                fields,
                updated_at,
            } => {
                self.owned_row(id, &owner)?;
                self.ensure_project(&fields.project_id)?;
                let row = self.owned_row(id, &owner)?;
                row.value = fields.value;
                row.date = fields.date;
                row.description = fields.description;
                row.project_id = fields.project_id;
                row.updated_at = updated_at;
            }
            Mutation::DeleteHour { id, owner } => {
                self.owned_row(id, &owner)?;
                self.hours.remove(&id);
                self.links.retain(|(hour_id, _)| *hour_id != id);
            }
            Mutation::LinkTag { hour_id, tag_id } => {
                if !self.hours.contains_key(&hour_id) {
                    return Err(StoreError::NotFound {
                        entity: "hour",
                        id: hour_id.to_string(),
                    });
                }
                if !self.tags.contains_key(&tag_id) {
                    return Err(StoreError::NotFound {
                        entity: "tag",
                        id: tag_id.to_string(),
                    });
                }
                if !self.links.insert((hour_id, tag_id.clone())) {
                    return Err(StoreError::Conflict(format!(
                        "hour {hour_id} is already linked to tag {tag_id}"
                    )));
                }
            }
            Mutation::UnlinkTag { hour_id, tag_id } => {
                self.links.remove(&(hour_id, tag_id));
            }
            Mutation::InsertException(exception) => {
                self.exceptions.insert(exception.id, exception);
            }
        }
        Ok(())
    }
}

fn windowed<T>(items: Vec<T>, window: Option<FetchWindow>) -> Vec<T> {
    match window {
        Some(FetchWindow { skip, take }) => items
            .into_iter()
            .skip(usize::try_from(skip).unwrap_or(usize::MAX))
            .take(usize::try_from(take).unwrap_or(usize::MAX))
            .collect(),
        None => items,
    }
}

#[derive(Default)]
pub struct InMemoryHourStore {
    tables: RwLock<Tables>,
    is_offline: AtomicBool,
    calls: AtomicUsize,
}

impl InMemoryHourStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_project(mut self, id: &str, name: &str) -> Self {
        let project = Project {
            id: ProjectId::new(id),
            name: name.to_string(),
        };
        self.tables
            .get_mut()
            .projects
            .insert(project.id.clone(), project);
        self
    }

    pub fn with_tag(mut self, id: &str, name: &str) -> Self {
        let tag = Tag {
            id: TagId::new(id),
            name: name.to_string(),
        };
        self.tables.get_mut().tags.insert(tag.id.clone(), tag);
        self
    }

    pub fn toggle_offline(&self) {
        self.is_offline.fetch_xor(true, Ordering::SeqCst);
    }

    /// Number of port calls served so far, offline or not.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub async fn link_count(&self) -> usize {
        self.tables.read().await.links.len()
    }

    fn begin(&self) -> Result<(), StoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.is_offline.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("Hour store offline".into()));
        }
        Ok(())
    }

    fn matching_rows<'a>(tables: &'a Tables, query: &HourQuery) -> Vec<&'a HourRow> {
        let mut rows: Vec<&HourRow> = tables
            .hours
            .values()
            .filter(|row| row.owner == query.owner)
            .filter(|row| query.date.is_none_or(|predicate| predicate.matches(row.date)))
            .collect();
        rows.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
        rows
    }

    fn matching_exceptions<'a>(
        tables: &'a Tables,
        query: &ExceptionQuery,
    ) -> Vec<&'a HourException> {
        let mut rows: Vec<&HourException> = tables
            .exceptions
            .values()
            .filter(|row| row.owner == query.owner)
            .filter(|row| {
                query
                    .kinds
                    .as_ref()
                    .is_none_or(|kinds| kinds.contains(&row.kind))
            })
            .collect();
        rows.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
        rows
    }
}

#[async_trait::async_trait]
impl HourStore for InMemoryHourStore {
    async fn count_hours(&self, query: &HourQuery) -> Result<u64, StoreError> {
        self.begin()?;
        let guard = self.tables.read().await;
        Ok(Self::matching_rows(&guard, query).len() as u64)
    }

    async fn find_hours(
        &self,
        query: &HourQuery,
        window: Option<FetchWindow>,
    ) -> Result<Vec<HourEntry>, StoreError> {
        self.begin()?;
        let guard = self.tables.read().await;
        let entries: Vec<HourEntry> = Self::matching_rows(&guard, query)
            .into_iter()
            .map(|row| guard.entry(row))
            .collect();
        Ok(windowed(entries, window))
    }

    async fn find_hour(&self, id: HourId) -> Result<Option<HourEntry>, StoreError> {
        self.begin()?;
        let guard = self.tables.read().await;
        Ok(guard.hours.get(&id).map(|row| guard.entry(row)))
    }

    async fn count_exceptions(&self, query: &ExceptionQuery) -> Result<u64, StoreError> {
        self.begin()?;
        let guard = self.tables.read().await;
        Ok(Self::matching_exceptions(&guard, query).len() as u64)
    }

    async fn find_exceptions(
        &self,
        query: &ExceptionQuery,
        window: FetchWindow,
    ) -> Result<Vec<HourException>, StoreError> {
        self.begin()?;
        let guard = self.tables.read().await;
        let rows: Vec<HourException> = Self::matching_exceptions(&guard, query)
            .into_iter()
            .cloned()
            .collect();
        Ok(windowed(rows, Some(window)))
    }

    async fn list_tags(&self) -> Result<Vec<Tag>, StoreError> {
        self.begin()?;
        let guard = self.tables.read().await;
        let mut tags: Vec<Tag> = guard.tags.values().cloned().collect();
        tags.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(tags)
    }

    async fn commit(&self, batch: Vec<Mutation>) -> Result<(), StoreError> {
        self.begin()?;
        let mut guard = self.tables.write().await;
        let mut working = guard.clone();
        for mutation in batch {
            working.apply(mutation)?;
        }
        *guard = working;
        Ok(())
    }
}
