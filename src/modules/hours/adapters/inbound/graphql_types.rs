use async_graphql::{Enum, InputObject, SimpleObject};

use crate::modules::hours::adapters::inbound::views::{
    CursorPageView, HourExceptionView, HourView, OffsetPageView, TagTotalView,
};
use crate::modules::hours::core::hour_exception::{ExceptionCategory, HourExceptionType};
use crate::shared::core::pagination::Cursor;

#[derive(SimpleObject, Clone)]
#[graphql(name = "Hour")]
pub struct GqlHour {
    pub id: String,
    pub owner_id: String,
    pub value: f64,
    pub date: String,
    pub description: String,
    pub project_id: String,
    pub tag_ids: Vec<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<HourView> for GqlHour {
    fn from(v: HourView) -> Self {
        Self {
            id: v.id,
            owner_id: v.owner_id,
            value: v.value,
            date: v.date.to_string(),
            description: v.description,
            project_id: v.project_id,
            tag_ids: v.tag_ids,
            created_at: v.created_at,
            updated_at: v.updated_at,
        }
    }
}

#[derive(SimpleObject, Clone)]
#[graphql(name = "HourPage")]
pub struct GqlHourPage {
    pub rows: Vec<GqlHour>,
    pub page: u64,
    pub count: u64,
    pub next: Option<u64>,
    pub previous: Option<u64>,
}

impl From<OffsetPageView<HourView>> for GqlHourPage {
    fn from(v: OffsetPageView<HourView>) -> Self {
        Self {
            rows: v.rows.into_iter().map(Into::into).collect(),
            page: v.meta.page,
            count: v.meta.count,
            next: v.meta.next,
            previous: v.meta.previous,
        }
    }
}

#[derive(SimpleObject, Clone, Copy)]
#[graphql(name = "Cursor")]
pub struct GqlCursor {
    pub page: i64,
    pub limit: Option<i64>,
}

impl From<Cursor> for GqlCursor {
    fn from(c: Cursor) -> Self {
        Self {
            page: c.page,
            limit: c.limit,
        }
    }
}

/// Echo of a `nextCursor` value.
#[derive(InputObject, Clone, Copy)]
#[graphql(name = "CursorInput")]
pub struct GqlCursorInput {
    pub page: i64,
    pub limit: Option<i64>,
}

impl From<GqlCursorInput> for Cursor {
    fn from(c: GqlCursorInput) -> Self {
        Self {
            page: c.page,
            limit: c.limit,
        }
    }
}

#[derive(SimpleObject, Clone)]
#[graphql(name = "HourSlice")]
pub struct GqlHourSlice {
    pub rows: Vec<GqlHour>,
    pub next_cursor: Option<GqlCursor>,
}

impl From<CursorPageView<HourView>> for GqlHourSlice {
    fn from(v: CursorPageView<HourView>) -> Self {
        Self {
            rows: v.rows.into_iter().map(Into::into).collect(),
            next_cursor: v.next_cursor.map(Into::into),
        }
    }
}

#[derive(SimpleObject, Clone)]
#[graphql(name = "TagTotal")]
pub struct GqlTagTotal {
    pub tag_id: String,
    pub name: String,
    pub hours: f64,
}

impl From<TagTotalView> for GqlTagTotal {
    fn from(v: TagTotalView) -> Self {
        Self {
            tag_id: v.tag_id,
            name: v.name,
            hours: v.hours,
        }
    }
}

#[derive(Enum, Clone, Copy, PartialEq, Eq)]
#[graphql(name = "HourExceptionType")]
pub enum GqlHourExceptionType {
    TimeOff,
    Vacation,
    HolidayWork,
}

impl From<HourExceptionType> for GqlHourExceptionType {
    fn from(v: HourExceptionType) -> Self {
        match v {
            HourExceptionType::TimeOff => Self::TimeOff,
            HourExceptionType::Vacation => Self::Vacation,
            HourExceptionType::HolidayWork => Self::HolidayWork,
        }
    }
}

impl From<GqlHourExceptionType> for HourExceptionType {
    fn from(v: GqlHourExceptionType) -> Self {
        match v {
            GqlHourExceptionType::TimeOff => Self::TimeOff,
            GqlHourExceptionType::Vacation => Self::Vacation,
            GqlHourExceptionType::HolidayWork => Self::HolidayWork,
        }
    }
}

#[derive(Enum, Clone, Copy, PartialEq, Eq)]
#[graphql(name = "ExceptionCategory")]
pub enum GqlExceptionCategory {
    NonWorking,
    ExtraWorking,
}

impl From<ExceptionCategory> for GqlExceptionCategory {
    fn from(v: ExceptionCategory) -> Self {
        match v {
            ExceptionCategory::NonWorking => Self::NonWorking,
            ExceptionCategory::ExtraWorking => Self::ExtraWorking,
        }
    }
}

impl From<GqlExceptionCategory> for ExceptionCategory {
    fn from(v: GqlExceptionCategory) -> Self {
        match v {
            GqlExceptionCategory::NonWorking => Self::NonWorking,
            GqlExceptionCategory::ExtraWorking => Self::ExtraWorking,
        }
    }
}

#[derive(SimpleObject, Clone)]
#[graphql(name = "HourException")]
pub struct GqlHourException {
    pub id: String,
    pub owner_id: String,
    pub date: String,
    pub hours: f64,
    pub kind: GqlHourExceptionType,
    pub category: GqlExceptionCategory,
    pub created_at: i64,
}

impl From<HourExceptionView> for GqlHourException {
    fn from(v: HourExceptionView) -> Self {
        Self {
            id: v.id,
            owner_id: v.owner_id,
            date: v.date.to_string(),
            hours: v.hours,
            kind: v.kind.into(),
            category: v.category.into(),
            created_at: v.created_at,
        }
    }
}

#[derive(SimpleObject, Clone)]
#[graphql(name = "HourExceptionSlice")]
pub struct GqlHourExceptionSlice {
    pub rows: Vec<GqlHourException>,
    pub next_cursor: Option<GqlCursor>,
}

impl From<CursorPageView<HourExceptionView>> for GqlHourExceptionSlice {
    fn from(v: CursorPageView<HourExceptionView>) -> Self {
        Self {
            rows: v.rows.into_iter().map(Into::into).collect(),
            next_cursor: v.next_cursor.map(Into::into),
        }
    }
}
