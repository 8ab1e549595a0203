use crate::modules::hours::adapters::outbound::hour_store_in_memory::InMemoryHourStore;
use crate::modules::hours::core::date_filter::DateFilter;
use crate::modules::hours::use_cases::list_hours::handler::ListHoursHandler;
use crate::modules::hours::use_cases::write_hours::command::EditHour;
use crate::modules::hours::use_cases::write_hours::handler::WriteHoursHandler;
use crate::shared::core::errors::ServiceError;
use crate::shared::core::primitives::{OwnerId, TagId};
use crate::tests::fixtures::commands::create_hour::CreateHourBuilder;
use crate::tests::fixtures::store::{OWNER, march, seeded_store};
use rust_decimal::Decimal;
use std::collections::BTreeSet;
use std::sync::Arc;

fn handlers() -> (
    Arc<InMemoryHourStore>,
    WriteHoursHandler<InMemoryHourStore>,
    ListHoursHandler<InMemoryHourStore>,
) {
    let store = Arc::new(seeded_store());
    let write = WriteHoursHandler::new(store.clone());
    let list = ListHoursHandler::new(store.clone(), 10);
    (store, write, list)
}

#[tokio::test]
async fn pages_through_twelve_entries_logged_in_march() {
    let (_, write, list) = handlers();
    let owner = OwnerId::new(OWNER);
    for day in 1..=12 {
        write
            .create(
                Some(&owner),
                CreateHourBuilder::new()
                    .date(march(day))
                    .description(format!("Day {day}"))
                    .build(),
            )
            .await
            .unwrap();
    }
    let march_only = || Some(DateFilter::range(march(1), march(31)).unwrap());

    let first = list.list_paged(Some(&owner), march_only(), 1, 10).await.unwrap();
    assert_eq!(first.rows.len(), 10);
    assert_eq!(first.meta.next, Some(2));
    assert_eq!(first.rows[0].date, march(12));

    let second = list.list_paged(Some(&owner), march_only(), 2, 10).await.unwrap();
    assert_eq!(second.rows.len(), 2);
    assert_eq!(second.meta.next, None);
    assert_eq!(second.rows[1].date, march(1));
}

#[tokio::test]
async fn reconciles_tags_from_t1_t2_t3_to_t2_t4() {
    let (_, write, list) = handlers();
    let owner = OwnerId::new(OWNER);
    let created = write
        .create(
            Some(&owner),
            CreateHourBuilder::new().tag_ids(&["t1", "t2", "t3"]).build(),
        )
        .await
        .unwrap();

    write
        .edit(
            Some(&owner),
            EditHour {
                id: created.id,
                value: created.value,
                date: created.date,
                description: created.description.clone(),
                project_id: created.project_id.clone(),
                tag_ids: vec![TagId::new("t2"), TagId::new("t4")],
                existing_tag_ids: created.tag_ids.iter().cloned().collect(),
            },
        )
        .await
        .unwrap();

    let reloaded = list.single(Some(&owner), created.id).await.unwrap();
    assert_eq!(
        reloaded.tag_ids,
        BTreeSet::from([TagId::new("t2"), TagId::new("t4")])
    );
}

#[tokio::test]
async fn rejects_a_zero_value_before_any_store_call() {
    let (store, write, _) = handlers();
    let result = write
        .create(
            Some(&OwnerId::new(OWNER)),
            CreateHourBuilder::new().value(Decimal::ZERO).build(),
        )
        .await;
    assert!(matches!(result, Err(ServiceError::InvalidArgument(_))));
    assert_eq!(store.call_count(), 0);
}

#[tokio::test]
async fn keeps_owners_apart() {
    let (_, write, list) = handlers();
    let alice = OwnerId::new(OWNER);
    let bob = OwnerId::new("user-fixed-0002");
    let alices = write
        .create(Some(&alice), CreateHourBuilder::new().build())
        .await
        .unwrap();
    write
        .create(Some(&bob), CreateHourBuilder::new().build())
        .await
        .unwrap();

    let bobs_view = list.list_paged(Some(&bob), None, 1, 10).await.unwrap();
    assert_eq!(bobs_view.meta.count, 1);
    assert!(bobs_view.rows.iter().all(|row| row.owner == bob));
    assert_eq!(
        list.single(Some(&bob), alices.id).await,
        Err(ServiceError::PermissionDenied)
    );
    assert_eq!(
        write.delete(Some(&bob), alices.id).await,
        Err(ServiceError::PermissionDenied)
    );
}

#[tokio::test]
async fn reports_an_offline_store_as_retryable() {
    let (store, write, list) = handlers();
    store.toggle_offline();
    let owner = OwnerId::new(OWNER);

    let read = list.list_infinite(Some(&owner), None, None, None).await;
    let written = write
        .create(Some(&owner), CreateHourBuilder::new().build())
        .await;
    assert!(read.unwrap_err().is_retryable());
    assert!(written.unwrap_err().is_retryable());

    store.toggle_offline();
    assert!(list.list_infinite(Some(&owner), None, None, None).await.is_ok());
}
