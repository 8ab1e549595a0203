// Seeded in-memory store shared by handler, inbound and e2e tests.

use crate::modules::hours::adapters::outbound::hour_store::{HourRow, HourStore, Mutation};
use crate::modules::hours::adapters::outbound::hour_store_in_memory::InMemoryHourStore;
use crate::shared::core::primitives::{HourId, OwnerId, ProjectId, TagId};
use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;

pub const OWNER: &str = "user-fixed-0001";

pub fn march(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, day).unwrap()
}

/// One project (`p-1`) and four tags (`t1`..`t4`).
pub fn seeded_store() -> InMemoryHourStore {
    InMemoryHourStore::new()
        .with_project("p-1", "Internal")
        .with_tag("t1", "Meeting")
        .with_tag("t2", "Review")
        .with_tag("t3", "Planning")
        .with_tag("t4", "Support")
}

/// Writes one 1.5 hour entry per March day, each tagged `t1`, and returns their ids.
pub async fn seed_hours(
    store: &InMemoryHourStore,
    owner: &str,
    days: impl IntoIterator<Item = u32>,
) -> Vec<HourId> {
    let now = Utc::now();
    let mut ids = Vec::new();
    let mut batch = Vec::new();
    for day in days {
        let row = HourRow {
            id: HourId::generate(),
            owner: OwnerId::new(owner),
            value: Decimal::new(15, 1),
            date: march(day),
            description: format!("Work on March {day}"),
            project_id: ProjectId::new("p-1"),
            created_at: now,
            updated_at: now,
        };
        let hour_id = row.id;
        ids.push(hour_id);
        batch.push(Mutation::InsertHour(row));
        batch.push(Mutation::LinkTag {
            hour_id,
            tag_id: TagId::new("t1"),
        });
    }
    store.commit(batch).await.unwrap();
    ids
}
