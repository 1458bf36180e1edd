//! Page-number pagination.
//!
//! Collection endpoints answer with `{ count, next, previous, results }`
//! where `next`/`previous` are absolute links to neighbouring pages.
//! The first page is addressed without a `page` parameter.

use serde::Serialize;

use super::error::AppError;

/// Default number of items per page.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

const PAGE_PARAM: &str = "page";

/// A requested page, resolved from the query string of the incoming request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// 1-based page number
    pub page: u32,
    pub page_size: u32,
    /// `scheme://host/path` of the request, without query string
    base_url: String,
    /// Decoded query parameters other than `page`, re-encoded into links
    extra_query: Vec<(String, String)>,
}

impl PageRequest {
    /// Resolve a page request from the raw pieces of a request.
    ///
    /// An unparsable or zero `page` value is rejected the same way as an
    /// out-of-range page.
    pub fn from_parts(
        host: &str,
        path: &str,
        query: Option<&str>,
        page_size: u32,
    ) -> Result<Self, AppError> {
        let params: Vec<(String, String)> = serde_urlencoded::from_str(query.unwrap_or_default())
            .map_err(|e| AppError::BadRequest(format!("Invalid query string: {}", e)))?;

        let mut page = 1;
        let mut extra_query = Vec::new();

        for (key, value) in params {
            if key == PAGE_PARAM {
                page = value
                    .parse::<u32>()
                    .ok()
                    .filter(|p| *p >= 1)
                    .ok_or_else(invalid_page)?;
            } else {
                extra_query.push((key, value));
            }
        }

        Ok(Self {
            page,
            page_size: page_size.max(1),
            base_url: format!("http://{}{}", host, path),
            extra_query,
        })
    }

    /// SQL `LIMIT` for this page.
    pub fn limit(&self) -> i64 {
        i64::from(self.page_size)
    }

    /// SQL `OFFSET` for this page.
    pub fn offset(&self) -> i64 {
        i64::from(self.page - 1) * i64::from(self.page_size)
    }

    /// Wrap one page of results, checking the page is within range.
    pub fn into_page<T>(self, count: i64, results: Vec<T>) -> Result<Page<T>, AppError> {
        if self.page > 1 && self.offset() >= count {
            return Err(invalid_page());
        }

        let has_next = self.offset() + (results.len() as i64) < count;
        let next = has_next.then(|| self.link(self.page + 1)).transpose()?;
        let previous = (self.page > 1)
            .then(|| self.link(self.page - 1))
            .transpose()?;

        Ok(Page {
            count,
            next,
            previous,
            results,
        })
    }

    fn link(&self, page: u32) -> Result<String, AppError> {
        let mut params = self.extra_query.clone();
        if page > 1 {
            params.push((PAGE_PARAM.to_string(), page.to_string()));
        }

        if params.is_empty() {
            return Ok(self.base_url.clone());
        }

        let query = serde_urlencoded::to_string(&params)
            .map_err(|e| AppError::Internal(format!("Failed to encode page link: {}", e)))?;
        Ok(format!("{}?{}", self.base_url, query))
    }
}

fn invalid_page() -> AppError {
    AppError::NotFound("Invalid page.".into())
}

/// Paginated response body
#[derive(Debug, Serialize)]
pub struct Page<T> {
    pub count: i64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<T>,
}

impl<T> Page<T> {
    /// Convert the results while keeping the page metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            count: self.count,
            next: self.next,
            previous: self.previous,
            results: self.results.into_iter().map(f).collect(),
        }
    }
}
