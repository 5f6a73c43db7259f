//! Page retrieval and element extraction.
//!
//! Collection is separated from evaluation: a [`Fetcher`] retrieves raw HTML,
//! a [`Page`] answers element queries over the parsed document, and the
//! checks in [`crate::checks`] stay pure over what was extracted.

/// The [`Fetcher`] trait and its blocking HTTP implementation.
pub mod fetch;
/// Parsed pages and selector-based extraction.
pub mod page;

pub use fetch::{FetchError, Fetcher, HttpFetcher};
pub use page::{CurrencyOption, ImageElement, Page, ScriptData};
