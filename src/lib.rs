//! Browser-free acceptance auditing for a property-listing website.
//!
//! Pages are fetched over plain HTTP, parsed offline, and evaluated by pure
//! checks whose results are written to spreadsheet-style reports. The core
//! component is the heading sequence validator in [`domain::sequence`].

pub mod domain;
pub use domain::{CheckKind, Config, HeadingLevel, SequencePolicy, SequenceReport};

/// Page retrieval and element extraction.
pub mod extract;
pub use extract::{Fetcher, HttpFetcher, Page};

/// The acceptance checks.
pub mod checks;

/// Report records and sinks.
pub mod report;
pub use report::{CsvSink, JsonSink, ReportSink, TestRecord};

mod error;
pub use error::Error;
