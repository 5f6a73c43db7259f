//! Outbound link health via HTTP HEAD.

use url::Url;

use crate::{
    extract::{FetchError, Fetcher, Page},
    report::TestRecord,
};

/// Absolute http(s) links discovered on the page, deduplicated in
/// first-seen order.
#[must_use]
pub fn discover(page: &Page) -> Vec<Url> {
    page.links()
}

/// Polls one URL with an HTTP HEAD and records the outcome.
///
/// A status below 400 passes; an error status or a transport failure fails,
/// with the status code or error text in the comments so transient network
/// conditions remain distinguishable from genuine dead links.
#[must_use]
pub fn check(fetcher: &dyn Fetcher, url: &Url) -> TestRecord {
    match fetcher.head_status(url) {
        Ok(status) => TestRecord::new(
            url.as_str(),
            "URL Status Check",
            status < 400,
            format!("Status Code: {status}"),
        ),
        Err(FetchError::Transport { source, .. }) => TestRecord::new(
            url.as_str(),
            "URL Status Check",
            false,
            format!("Request failed: {source}"),
        ),
        Err(error) => TestRecord::new(
            url.as_str(),
            "URL Status Check",
            false,
            format!("Request failed: {error}"),
        ),
    }
}

/// Checks every discovered link sequentially.
#[must_use]
pub fn run(page: &Page, fetcher: &dyn Fetcher) -> Vec<TestRecord> {
    discover(page)
        .iter()
        .map(|url| check(fetcher, url))
        .collect()
}
