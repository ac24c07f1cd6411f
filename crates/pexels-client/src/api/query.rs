use std::fmt::Write;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

pub const DEFAULT_PER_PAGE: u32 = 10;
pub const DEFAULT_PAGE: u32 = 1;

/// Characters left untouched by URI component encoding.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Pagination controls. Unset (or zero) values fall back to
/// [`DEFAULT_PER_PAGE`] and [`DEFAULT_PAGE`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Paging {
    pub per_page: Option<u32>,
    pub page: Option<u32>,
}

impl Paging {
    pub fn new(per_page: Option<u32>, page: Option<u32>) -> Self {
        Self { per_page, page }
    }

    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }
}

/// Width (pixels) and duration (seconds) filters for the video endpoints.
///
/// Unset or zero bounds are left out of the query entirely.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VideoBounds {
    pub min_width: Option<u32>,
    pub max_width: Option<u32>,
    pub min_duration: Option<u32>,
    pub max_duration: Option<u32>,
}

impl VideoBounds {
    pub fn min_width(mut self, px: u32) -> Self {
        self.min_width = Some(px);
        self
    }

    pub fn max_width(mut self, px: u32) -> Self {
        self.max_width = Some(px);
        self
    }

    pub fn min_duration(mut self, secs: u32) -> Self {
        self.min_duration = Some(secs);
        self
    }

    pub fn max_duration(mut self, secs: u32) -> Self {
        self.max_duration = Some(secs);
        self
    }

    fn pairs(&self) -> [(&'static str, Option<u32>); 4] {
        [
            ("min_width", self.min_width),
            ("max_width", self.max_width),
            ("min_duration", self.min_duration),
            ("max_duration", self.max_duration),
        ]
    }
}

/// Zero counts as "not supplied", matching the behavior existing callers
/// of the Pexels wrappers depend on.
fn supplied(value: Option<u32>) -> Option<u32> {
    value.filter(|&n| n != 0)
}

/// Build `<base>?<query string>` for a listing endpoint.
///
/// Parameters are emitted in a fixed order: `query`, `per_page`, `page`,
/// then any bounds. An empty or missing `query` leaves an empty leading
/// segment, so the string reads `<base>?&per_page=..`.
pub fn prepare_url(
    base: &str,
    query: Option<&str>,
    paging: Paging,
    bounds: Option<VideoBounds>,
) -> String {
    let mut url = format!("{base}?");

    if let Some(q) = query.filter(|q| !q.is_empty()) {
        url.push_str("query=");
        url.extend(utf8_percent_encode(q, COMPONENT));
    }

    let per_page = supplied(paging.per_page).unwrap_or(DEFAULT_PER_PAGE);
    let page = supplied(paging.page).unwrap_or(DEFAULT_PAGE);
    // Writing into a String cannot fail.
    let _ = write!(url, "&per_page={per_page}&page={page}");

    for (name, value) in bounds.iter().flat_map(VideoBounds::pairs) {
        if let Some(v) = supplied(value) {
            let _ = write!(url, "&{name}={v}");
        }
    }

    url
}
