// Pagination planner: logical page <-> physical fetch window.
//
// Purpose
// - Turn a page number (offset mode) or an opaque cursor (infinite mode) into a
//   skip/take window, and produce next/previous markers from a total count.
//
// Responsibilities
// - Validate page and size inputs before any store call.
// - Never perform input or output.
//
// Consistency
// - Markers are computed from a total count taken in a separate store call. If
//   rows are written between two page requests, a later page may repeat or miss
//   rows. That is accepted; correctness holds for a stable total only.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_PAGE_SIZE: u64 = 10;
/// Sizes travel as signed integers over both transports.
pub const MAX_PAGE_SIZE: u64 = i64::MAX as u64;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PaginationError {
    #[error("page size must be greater than 0, got {0}")]
    NonPositivePageSize(i64),

    #[error("page must be 1 or greater, got {0}")]
    NonPositivePage(i64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchWindow {
    pub skip: u64,
    pub take: u64,
}

impl FetchWindow {
    fn for_page(page: u64, size: u64) -> Self {
        Self {
            skip: (page - 1).saturating_mul(size),
            take: size,
        }
    }
}

fn max_pages(total_count: u64, size: u64) -> u64 {
    total_count.div_ceil(size)
}

fn positive_page(page: i64) -> Result<u64, PaginationError> {
    u64::try_from(page)
        .ok()
        .filter(|p| *p > 0)
        .ok_or(PaginationError::NonPositivePage(page))
}

fn positive_size(size: i64) -> Result<u64, PaginationError> {
    u64::try_from(size)
        .ok()
        .filter(|s| *s > 0)
        .ok_or(PaginationError::NonPositivePageSize(size))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    pub page: u64,
    pub count: u64,
    pub next: Option<u64>,
    pub previous: Option<u64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OffsetPage<T> {
    pub rows: Vec<T>,
    pub meta: PageMeta,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CursorPage<T> {
    pub rows: Vec<T>,
    pub next_cursor: Option<Cursor>,
}

/// Offset mode, used where the sort key (the day) is not unique and cannot
/// back a resumable cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OffsetPlan {
    page: u64,
    page_size: u64,
}

impl OffsetPlan {
    pub fn new(requested_page: i64, page_size: i64) -> Result<Self, PaginationError> {
        let page_size = positive_size(page_size)?;
        let page = positive_page(requested_page)?;
        Ok(Self { page, page_size })
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn window(&self) -> FetchWindow {
        FetchWindow::for_page(self.page, self.page_size)
    }

    pub fn meta(&self, total_count: u64) -> PageMeta {
        let next = self.page + 1;
        PageMeta {
            page: self.page,
            count: total_count,
            next: (next <= max_pages(total_count, self.page_size)).then_some(next),
            previous: (self.page > 1).then(|| self.page - 1),
        }
    }
}

/// Opaque continuation token. Clients echo `nextCursor` back unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cursor {
    pub page: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
}

impl Default for Cursor {
    fn default() -> Self {
        Self {
            page: 1,
            limit: None,
        }
    }
}

/// Infinite mode. The effective limit is the cursor's, then the client's,
/// then the configured default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorPlan {
    page: u64,
    limit: u64,
}

impl CursorPlan {
    pub fn new(
        cursor: Option<Cursor>,
        client_limit: Option<i64>,
        default_limit: u64,
    ) -> Result<Self, PaginationError> {
        let cursor = cursor.unwrap_or_default();
        let limit = match cursor.limit.or(client_limit) {
            Some(limit) => positive_size(limit)?,
            None => default_limit.clamp(1, MAX_PAGE_SIZE),
        };
        let page = positive_page(cursor.page)?;
        Ok(Self { page, limit })
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }

    pub fn window(&self) -> FetchWindow {
        FetchWindow::for_page(self.page, self.limit)
    }

    pub fn next_cursor(&self, total_count: u64) -> Option<Cursor> {
        (max_pages(total_count, self.limit) > self.page).then(|| Cursor {
            page: i64::try_from(self.page + 1).unwrap_or(i64::MAX),
            limit: Some(i64::try_from(self.limit).unwrap_or(i64::MAX)),
        })
    }
}
