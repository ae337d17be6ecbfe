// src/utils/pagination.rs

use axum::extract::{Query, rejection::QueryRejection};
use serde::Deserialize;

/// Number of questions on one page.
pub const PAGE_SIZE: usize = 10;

/// `?page=N` query parameter.
/// Kept as a raw string so that garbage input falls back to page 1 instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<String>,
}

impl PageParams {
    /// 1-based page number. Missing, non-numeric and non-positive values mean page 1.
    pub fn page(&self) -> usize {
        self.page
            .as_deref()
            .and_then(|p| p.trim().parse::<usize>().ok())
            .filter(|p| *p >= 1)
            .unwrap_or(1)
    }
}

/// Page requested by a query string that may not have decoded
/// (e.g. `?page=1&page=2`). An undecodable query means page 1.
pub fn requested_page(query: Result<Query<PageParams>, QueryRejection>) -> usize {
    match query {
        Ok(Query(params)) => params.page(),
        Err(rejection) => {
            tracing::debug!("Ignoring undecodable query string: {}", rejection.body_text());
            PageParams::default().page()
        }
    }
}

/// Returns items `[(page - 1) * PAGE_SIZE, page * PAGE_SIZE)`, clamped to the slice.
/// A page past the end yields an empty slice.
pub fn paginate<T>(items: &[T], page: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(PAGE_SIZE);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(PAGE_SIZE).min(items.len());
    &items[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(raw: Option<&str>) -> PageParams {
        PageParams {
            page: raw.map(str::to_string),
        }
    }

    #[test]
    fn page_defaults_to_one() {
        assert_eq!(params(None).page(), 1);
        assert_eq!(params(Some("abc")).page(), 1);
        assert_eq!(params(Some("0")).page(), 1);
        assert_eq!(params(Some("-3")).page(), 1);
        assert_eq!(params(Some("")).page(), 1);
    }

    #[test]
    fn page_parses_numbers() {
        assert_eq!(params(Some("2")).page(), 2);
        assert_eq!(params(Some(" 7 ")).page(), 7);
    }

    fn query(uri: &str) -> Result<Query<PageParams>, QueryRejection> {
        Query::try_from_uri(&uri.parse().unwrap())
    }

    #[test]
    fn undecodable_query_falls_back_to_first_page() {
        assert_eq!(requested_page(query("http://localhost/questions?page=1&page=2")), 1);
        assert_eq!(requested_page(query("http://localhost/questions?page=3")), 3);
        assert_eq!(requested_page(query("http://localhost/questions")), 1);
    }

    #[test]
    fn pages_are_exact_windows() {
        let items: Vec<u32> = (0..25).collect();

        for n in 0..=25usize {
            let data = &items[..n];
            for page in 1..=5usize {
                let got = paginate(data, page);
                let start = ((page - 1) * PAGE_SIZE).min(n);
                let end = (page * PAGE_SIZE).min(n);
                assert!(got.len() <= PAGE_SIZE);
                assert_eq!(got, &data[start..end], "n={} page={}", n, page);
            }
        }
    }

    #[test]
    fn empty_input_has_empty_first_page() {
        let items: Vec<u32> = Vec::new();
        assert!(paginate(&items, 1).is_empty());
    }

    #[test]
    fn page_beyond_range_is_empty() {
        let items: Vec<u32> = (0..12).collect();
        assert_eq!(paginate(&items, 2), &[10, 11]);
        assert!(paginate(&items, 3).is_empty());
        assert!(paginate(&items, usize::MAX).is_empty());
    }
}
