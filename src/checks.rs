//! The acceptance checks.
//!
//! Each check is a pure evaluation over data already extracted from a
//! [`Page`] (only the URL-status check talks to the network, through the
//! [`Fetcher`] seam), so every one of them can be exercised on canned HTML.

/// Currency widget integrity.
pub mod currency;
/// `<h1>` presence and heading sequence.
pub mod headings;
/// Image `alt` attributes.
pub mod images;
/// Outbound link health.
pub mod links;
/// Embedded `ScriptData` metadata.
pub mod script_data;

use crate::{
    domain::{CheckKind, SequencePolicy},
    extract::{Fetcher, Page},
    report::TestRecord,
    Error,
};

/// Runs one check against an already-fetched page.
///
/// # Errors
///
/// Returns [`Error::Precondition`] if extracted data violated a check
/// precondition; URL checks surface transport problems per record rather
/// than failing the whole check.
pub fn run(
    kind: CheckKind,
    page: &Page,
    fetcher: &dyn Fetcher,
    policy: SequencePolicy,
) -> Result<Vec<TestRecord>, Error> {
    match kind {
        CheckKind::H1 => Ok(vec![headings::h1_presence(page)]),
        CheckKind::HeadingSequence => Ok(vec![headings::sequence(page, policy)?]),
        CheckKind::ImageAlt => Ok(images::run(page)),
        CheckKind::UrlStatus => Ok(links::run(page, fetcher)),
        CheckKind::CurrencyFilter => Ok(currency::run(page)),
        CheckKind::ScriptData => Ok(script_data::run(page)),
    }
}

#[cfg(test)]
mod tests {
    use url::Url;

    use super::*;
    use crate::extract::FetchError;

    /// Fetcher that answers every HEAD with 200 and refuses to fetch bodies.
    struct AlwaysUp;

    impl Fetcher for AlwaysUp {
        fn fetch(&self, url: &Url) -> Result<String, FetchError> {
            Err(FetchError::Status {
                url: url.clone(),
                status: 404,
            })
        }

        fn head_status(&self, _url: &Url) -> Result<u16, FetchError> {
            Ok(200)
        }
    }

    const FIXTURE: &str = concat!(
        "<h1>Listing</h1><h2>Rooms</h2><h3>Extras</h3>",
        "<h4>d</h4><h5>e</h5><h6>f</h6>",
        r#"<img src="hero.png" alt="hero">"#,
        r#"<a href="/about">about</a>"#,
        r#"<div id="js-currency-sort-footer"><ul class="select-ul">"#,
        r#"<li data-currency-country="US"><p>$</p></li></ul></div>"#,
        r#"<span class="js-price-value">$99</span>"#,
        r#"<script>var ScriptData = {"SiteName":"Example"};</script>"#,
    );

    #[test]
    fn every_check_runs_over_the_fixture_page() {
        let page = Page::parse(Url::parse("https://example.com/").unwrap(), FIXTURE);

        for kind in CheckKind::ALL {
            let records = run(kind, &page, &AlwaysUp, SequencePolicy::Strict).unwrap();
            assert!(!records.is_empty(), "{kind} produced no records");
            assert!(
                records.iter().all(|record| record.passed),
                "{kind} failed on the fixture page"
            );
        }
    }

    #[test]
    fn order_only_policy_reaches_the_sequence_check() {
        let page = Page::parse(
            Url::parse("https://example.com/").unwrap(),
            "<h1>a</h1><h2>b</h2><h4>gap</h4>",
        );

        let strict = run(
            CheckKind::HeadingSequence,
            &page,
            &AlwaysUp,
            SequencePolicy::Strict,
        )
        .unwrap();
        assert!(!strict[0].passed);

        let order_only = run(
            CheckKind::HeadingSequence,
            &page,
            &AlwaysUp,
            SequencePolicy::OrderOnly,
        )
        .unwrap();
        assert!(order_only[0].passed);
    }
}
