use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

/// Highest page number accepted; keeps `(page - 1) * per_page` well inside `i64`.
pub const MAX_PAGE: i64 = 1_000_000;

/// Optional paging for list endpoints. Without either field the full table is returned.
#[derive(Debug, Default, Clone, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct Pagination {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

impl Pagination {
    pub fn normalize(&self) -> (i64, i64, i64) {
        let page = self.page.unwrap_or(1).clamp(1, MAX_PAGE);
        let per_page = self.per_page.unwrap_or(20).clamp(1, 100);
        let offset = (page - 1) * per_page;
        (page, per_page, offset)
    }

    /// `(page, per_page, offset)` when the caller asked for a page at all.
    pub fn window(&self) -> Option<(i64, i64, i64)> {
        if self.page.is_none() && self.per_page.is_none() {
            return None;
        }
        Some(self.normalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_params_means_no_window() {
        assert_eq!(Pagination::default().window(), None);
    }

    #[test]
    fn clamps_page_and_size() {
        let p = Pagination {
            page: Some(0),
            per_page: Some(500),
        };
        assert_eq!(p.window(), Some((1, 100, 0)));

        let p = Pagination {
            page: Some(3),
            per_page: None,
        };
        assert_eq!(p.window(), Some((3, 20, 40)));
    }

    #[test]
    fn huge_page_is_capped_instead_of_overflowing() {
        let p = Pagination {
            page: Some(i64::MAX),
            per_page: Some(100),
        };
        assert_eq!(
            p.window(),
            Some((MAX_PAGE, 100, (MAX_PAGE - 1) * 100))
        );

        let p = Pagination {
            page: Some(i64::MIN),
            per_page: Some(i64::MAX),
        };
        assert_eq!(p.window(), Some((1, 100, 0)));
    }
}
