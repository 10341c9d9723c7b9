use crate::app::AppError;

pub const POSTS_PER_PAGE: i64 = 4;

/// A validated, 1-based page of a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: i64,
    pub per_page: i64,
    pub total: i64,
}

impl Pagination {
    /// Fails with `NotFound` for pages outside `1..=pages()`.
    /// Page 1 always exists so an empty listing can still be shown.
    pub fn new(page: i64, per_page: i64, total: i64) -> Result<Pagination, AppError> {
        if per_page < 1 {
            return Err(AppError::BadRequest);
        }

        let pagination = Pagination { page, per_page, total };
        if page < 1 || (page > 1 && page > pagination.pages()) {
            return Err(AppError::NotFound);
        }

        Ok(pagination)
    }

    /** Number of pages needed for every row, zero when there are none */
    pub fn pages(&self) -> i64 {
        (self.total + self.per_page - 1) / self.per_page
    }

    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.per_page
    }

    pub fn prev(&self) -> Option<i64> {
        if self.page > 1 {
            Some(self.page - 1)
        } else {
            None
        }
    }

    pub fn next(&self) -> Option<i64> {
        if self.page < self.pages() {
            Some(self.page + 1)
        } else {
            None
        }
    }
}
