//! Pagination for the catalog list pages
//!
//! Pages are 1-indexed. `?page=last` selects the last page; anything that is
//! not a number in `1..=num_pages` is a 404. An empty catalog still has one
//! (empty) page.

use serde::Deserialize;
use shared::error::{AppError, AppResult};

use crate::db::repository::CatalogRepository;

pub const PRODUCTS_PER_PAGE: i64 = 15;
pub const SUPPLIERS_PER_PAGE: i64 = 15;
pub const EMPLOYEES_PER_PAGE: i64 = 12;

/// `?page=` query parameter
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageRequest {
    Number(i64),
    Last,
}

impl PageRequest {
    /// `None` when the parameter is not a page reference
    pub fn parse(raw: Option<&str>) -> Option<Self> {
        match raw.map(str::trim) {
            None | Some("") => Some(PageRequest::Number(1)),
            Some("last") => Some(PageRequest::Last),
            Some(n) => n.parse().ok().map(PageRequest::Number),
        }
    }
}

/// Pagination metadata for one list page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: i64,
    pub per_page: i64,
    pub total_count: i64,
    pub num_pages: i64,
    /// Offset for SQL LIMIT/OFFSET
    pub offset: i64,
}

impl Pagination {
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.num_pages
    }

    pub fn has_other_pages(&self) -> bool {
        self.num_pages > 1
    }
}

/// Resolve a page request against a total, `None` when out of range
pub fn paginate(total_count: i64, per_page: i64, request: PageRequest) -> Option<Pagination> {
    let num_pages = ((total_count + per_page - 1) / per_page).max(1);
    let page = match request {
        PageRequest::Last => num_pages,
        PageRequest::Number(n) if (1..=num_pages).contains(&n) => n,
        PageRequest::Number(_) => return None,
    };

    Some(Pagination {
        page,
        per_page,
        total_count,
        num_pages,
        offset: (page - 1) * per_page,
    })
}

/// One page of entities plus its metadata
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub pagination: Pagination,
}

/// Load the requested page from any catalog repository
pub async fn fetch_page<R: CatalogRepository>(
    repo: &R,
    query: &PageQuery,
    per_page: i64,
) -> AppResult<Page<R::Entity>> {
    let invalid = || AppError::not_found(format!("page {}", query.page.as_deref().unwrap_or("")));

    let request = PageRequest::parse(query.page.as_deref()).ok_or_else(invalid)?;
    let total = repo.count().await?;
    let pagination = paginate(total, per_page, request).ok_or_else(invalid)?;
    let items = repo.list(pagination.per_page, pagination.offset).await?;

    Ok(Page { items, pagination })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_page_request() {
        assert_eq!(PageRequest::parse(None), Some(PageRequest::Number(1)));
        assert_eq!(PageRequest::parse(Some("")), Some(PageRequest::Number(1)));
        assert_eq!(PageRequest::parse(Some("3")), Some(PageRequest::Number(3)));
        assert_eq!(PageRequest::parse(Some("last")), Some(PageRequest::Last));
        assert_eq!(PageRequest::parse(Some("abc")), None);
        assert_eq!(PageRequest::parse(Some("1.5")), None);
    }

    #[test]
    fn test_paginate_normal() {
        let p = paginate(40, 15, PageRequest::Number(2)).unwrap();
        assert_eq!(p.num_pages, 3);
        assert_eq!(p.offset, 15);
        assert!(p.has_previous());
        assert!(p.has_next());
    }

    #[test]
    fn test_paginate_last() {
        let p = paginate(40, 15, PageRequest::Last).unwrap();
        assert_eq!(p.page, 3);
        assert_eq!(p.offset, 30);
        assert!(!p.has_next());
    }

    #[test]
    fn test_paginate_out_of_range() {
        assert!(paginate(40, 15, PageRequest::Number(4)).is_none());
        assert!(paginate(40, 15, PageRequest::Number(0)).is_none());
        assert!(paginate(40, 15, PageRequest::Number(-1)).is_none());
    }

    #[test]
    fn test_paginate_empty() {
        let p = paginate(0, 12, PageRequest::Number(1)).unwrap();
        assert_eq!(p.num_pages, 1);
        assert_eq!(p.offset, 0);
        assert!(!p.has_other_pages());
        assert!(paginate(0, 12, PageRequest::Number(2)).is_none());
    }

    #[test]
    fn test_paginate_exact_boundary() {
        let p = paginate(24, 12, PageRequest::Last).unwrap();
        assert_eq!(p.num_pages, 2);
        assert_eq!(p.offset, 12);
    }
}
