// Transport shapes for hour entries and exceptions.
//
// Decimal values become f64 here and nowhere else. The precision loss is
// accepted: these numbers are for display and display-level sums only.

use crate::modules::hours::core::hour_entry::{HourEntry, TagTotal};
use crate::modules::hours::core::hour_exception::{
    ExceptionCategory, HourException, HourExceptionType,
};
use crate::shared::core::pagination::{Cursor, CursorPage, OffsetPage, PageMeta};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;

pub fn decimal_to_transport(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourView {
    pub id: String,
    pub owner_id: String,
    pub value: f64,
    pub date: NaiveDate,
    pub description: String,
    pub project_id: String,
    pub tag_ids: Vec<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<HourEntry> for HourView {
    fn from(entry: HourEntry) -> Self {
        Self {
            id: entry.id.to_string(),
            owner_id: entry.owner.to_string(),
            value: decimal_to_transport(entry.value),
            date: entry.date,
            description: entry.description,
            project_id: entry.project_id.to_string(),
            tag_ids: entry.tag_ids.iter().map(ToString::to_string).collect(),
            created_at: entry.created_at.timestamp_millis(),
            updated_at: entry.updated_at.timestamp_millis(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourExceptionView {
    pub id: String,
    pub owner_id: String,
    pub date: NaiveDate,
    pub hours: f64,
    pub kind: HourExceptionType,
    pub category: ExceptionCategory,
    pub created_at: i64,
}

impl From<HourException> for HourExceptionView {
    fn from(exception: HourException) -> Self {
        Self {
            id: exception.id.to_string(),
            owner_id: exception.owner.to_string(),
            date: exception.date,
            hours: decimal_to_transport(exception.hours),
            kind: exception.kind,
            category: exception.kind.category(),
            created_at: exception.created_at.timestamp_millis(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TagTotalView {
    pub tag_id: String,
    pub name: String,
    pub hours: f64,
}

impl From<TagTotal> for TagTotalView {
    fn from(total: TagTotal) -> Self {
        Self {
            tag_id: total.tag.id.to_string(),
            name: total.tag.name,
            hours: decimal_to_transport(total.hours),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OffsetPageView<T> {
    pub rows: Vec<T>,
    #[serde(flatten)]
    pub meta: PageMeta,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CursorPageView<T> {
    pub rows: Vec<T>,
    pub next_cursor: Option<Cursor>,
}

impl<T, V: From<T>> From<OffsetPage<T>> for OffsetPageView<V> {
    fn from(page: OffsetPage<T>) -> Self {
        Self {
            rows: page.rows.into_iter().map(V::from).collect(),
            meta: page.meta,
        }
    }
}

impl<T, V: From<T>> From<CursorPage<T>> for CursorPageView<V> {
    fn from(page: CursorPage<T>) -> Self {
        Self {
            rows: page.rows.into_iter().map(V::from).collect(),
            next_cursor: page.next_cursor,
        }
    }
}

#[cfg(test)]
mod views_tests {
    use super::*;
    use crate::shared::core::primitives::{HourId, OwnerId, ProjectId, TagId};
    use chrono::{TimeZone, Utc};
    use rstest::rstest;
    use std::collections::BTreeSet;

    #[rstest]
    #[case(Decimal::new(75, 1), 7.5)]
    #[case(Decimal::new(1, 2), 0.01)]
    #[case(Decimal::new(3, 0), 3.0)]
    fn it_should_convert_decimals_to_floats(#[case] value: Decimal, #[case] expected: f64) {
        assert!((decimal_to_transport(value) - expected).abs() < f64::EPSILON);
    }

    #[rstest]
    fn it_should_render_an_hour_entry_for_transport() {
        let at = Utc.with_ymd_and_hms(2024, 3, 4, 9, 0, 0).unwrap();
        let entry = HourEntry {
            id: HourId::generate(),
            owner: OwnerId::new("u-1"),
            value: Decimal::new(25, 1),
            date: NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
            description: "Review".into(),
            project_id: ProjectId::new("p-1"),
            tag_ids: BTreeSet::from([TagId::new("t2"), TagId::new("t1")]),
            created_at: at,
            updated_at: at,
        };
        let json = serde_json::to_value(HourView::from(entry)).unwrap();
        assert_eq!(json["value"], serde_json::json!(2.5));
        assert_eq!(json["date"], serde_json::json!("2024-03-04"));
        assert_eq!(json["tag_ids"], serde_json::json!(["t1", "t2"]));
        assert_eq!(json["created_at"], serde_json::json!(at.timestamp_millis()));
    }

    #[rstest]
    fn it_should_flatten_page_meta_next_to_rows() {
        let page = OffsetPage::<HourEntry> {
            rows: vec![],
            meta: PageMeta {
                page: 1,
                count: 0,
                next: None,
                previous: None,
            },
        };
        let json = serde_json::to_value(OffsetPageView::<HourView>::from(page)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"rows": [], "page": 1, "count": 0, "next": null, "previous": null})
        );
    }
}
