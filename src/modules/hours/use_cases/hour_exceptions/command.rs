use crate::modules::hours::core::hour_exception::HourExceptionType;
use chrono::NaiveDate;
use rust_decimal::Decimal;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateHourException {
    pub date: NaiveDate,
    pub hours: Decimal,
    pub kind: HourExceptionType,
}
