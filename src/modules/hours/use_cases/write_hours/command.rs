use crate::shared::core::primitives::{HourId, ProjectId, TagId};
use chrono::NaiveDate;
use rust_decimal::Decimal;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateHour {
    pub value: Decimal,
    pub date: NaiveDate,
    pub description: String,
    pub project_id: ProjectId,
    pub tag_ids: Vec<TagId>,
}

/// `existing_tag_ids` is the tag set the client last saw. The handler diffs
/// it against `tag_ids` and never reads links back before writing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditHour {
    pub id: HourId,
    pub value: Decimal,
    pub date: NaiveDate,
    pub description: String,
    pub project_id: ProjectId,
    pub tag_ids: Vec<TagId>,
    pub existing_tag_ids: Vec<TagId>,
}
