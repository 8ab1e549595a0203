// Date filters for hour queries.
//
// Purpose
// - Model "one day" or "inclusive range" and resolve it into the predicate the
//   store evaluates.
//
// Responsibilities
// - Parse transport dates (YYYY-MM-DD) and reject inverted or partial ranges.
// - Compare by calendar day only.

use crate::shared::core::errors::ServiceError;
use chrono::NaiveDate;
use thiserror::Error;

const DAY_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DateFilterError {
    #[error("malformed date {0:?}, expected YYYY-MM-DD")]
    Malformed(String),

    #[error("range start {from} is after range end {to}")]
    Inverted { from: NaiveDate, to: NaiveDate },

    #[error("a range needs both from and to")]
    IncompleteRange,

    #[error("give either a single date or a range, not both")]
    Ambiguous,
}

impl From<DateFilterError> for ServiceError {
    fn from(error: DateFilterError) -> Self {
        Self::InvalidArgument(error.to_string())
    }
}

pub fn parse_day(raw: &str) -> Result<NaiveDate, DateFilterError> {
    NaiveDate::parse_from_str(raw.trim(), DAY_FORMAT)
        .map_err(|_| DateFilterError::Malformed(raw.to_string()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFilter {
    Day(NaiveDate),
    Range { from: NaiveDate, to: NaiveDate },
}

impl DateFilter {
    pub fn range(from: NaiveDate, to: NaiveDate) -> Result<Self, DateFilterError> {
        if from > to {
            return Err(DateFilterError::Inverted { from, to });
        }
        Ok(Self::Range { from, to })
    }

    /// Builds an optional filter from the loose fields transports carry.
    pub fn from_parts(
        date: Option<&str>,
        from: Option<&str>,
        to: Option<&str>,
    ) -> Result<Option<Self>, DateFilterError> {
        match (date, from, to) {
            (None, None, None) => Ok(None),
            (Some(day), None, None) => Ok(Some(Self::Day(parse_day(day)?))),
            (None, Some(from), Some(to)) => Self::range(parse_day(from)?, parse_day(to)?).map(Some),
            (None, _, _) => Err(DateFilterError::IncompleteRange),
            (Some(_), _, _) => Err(DateFilterError::Ambiguous),
        }
    }

    pub fn to_predicate(self) -> DatePredicate {
        match self {
            Self::Day(day) => DatePredicate::Equals(day),
            Self::Range { from, to } => DatePredicate::Between { from, to },
        }
    }
}

/// Store-level date predicate. `Between` is inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatePredicate {
    Equals(NaiveDate),
    Between { from: NaiveDate, to: NaiveDate },
}

impl DatePredicate {
    pub fn matches(&self, date: NaiveDate) -> bool {
        match self {
            Self::Equals(day) => date == *day,
            Self::Between { from, to } => (*from..=*to).contains(&date),
        }
    }
}

#[cfg(test)]
mod date_filter_tests {
    use super::*;
    use rstest::rstest;

    fn day(raw: &str) -> NaiveDate {
        parse_day(raw).unwrap()
    }

    #[rstest]
    fn it_should_resolve_a_single_day_to_equality() {
        let filter = DateFilter::from_parts(Some("2024-03-05"), None, None).unwrap();
        assert_eq!(
            filter.map(DateFilter::to_predicate),
            Some(DatePredicate::Equals(day("2024-03-05")))
        );
    }

    #[rstest]
    fn it_should_resolve_a_range_to_an_inclusive_predicate() {
        let predicate = DateFilter::from_parts(None, Some("2024-03-01"), Some("2024-03-31"))
            .unwrap()
            .unwrap()
            .to_predicate();
        assert!(predicate.matches(day("2024-03-01")));
        assert!(predicate.matches(day("2024-03-31")));
        assert!(!predicate.matches(day("2024-02-29")));
        assert!(!predicate.matches(day("2024-04-01")));
    }

    #[rstest]
    fn it_should_resolve_nothing_to_no_filter() {
        assert_eq!(DateFilter::from_parts(None, None, None), Ok(None));
    }

    #[rstest]
    #[case("2024-13-01")]
    #[case("05/03/2024")]
    #[case("")]
    fn it_should_reject_malformed_dates(#[case] raw: &str) {
        assert_eq!(
            DateFilter::from_parts(Some(raw), None, None),
            Err(DateFilterError::Malformed(raw.to_string()))
        );
    }

    #[rstest]
    fn it_should_reject_an_inverted_range() {
        let result = DateFilter::from_parts(None, Some("2024-04-01"), Some("2024-03-01"));
        assert!(matches!(result, Err(DateFilterError::Inverted { .. })));
    }

    #[rstest]
    #[case(None, Some("2024-03-01"), None, DateFilterError::IncompleteRange)]
    #[case(None, None, Some("2024-03-01"), DateFilterError::IncompleteRange)]
    #[case(Some("2024-03-01"), Some("2024-03-01"), None, DateFilterError::Ambiguous)]
    fn it_should_reject_partial_or_mixed_filters(
        #[case] date: Option<&str>,
        #[case] from: Option<&str>,
        #[case] to: Option<&str>,
        #[case] expected: DateFilterError,
    ) {
        assert_eq!(DateFilter::from_parts(date, from, to), Err(expected));
    }

    #[rstest]
    fn it_should_accept_a_one_day_range() {
        let d = day("2024-03-05");
        assert_eq!(DateFilter::range(d, d), Ok(DateFilter::Range { from: d, to: d }));
    }
}
