use crate::{domain::PreconditionError, extract::FetchError, report::SinkError};

/// Everything that can go wrong while running an audit.
///
/// The taxonomy is deliberately small and closed: transient extraction
/// conditions (a network timeout, a dead page) are distinguishable from
/// logic defects (a precondition violation) and from report persistence
/// problems.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The target page could not be fetched.
    #[error(transparent)]
    Extraction(#[from] FetchError),

    /// Extracted data violated a check precondition.
    #[error(transparent)]
    Precondition(#[from] PreconditionError),

    /// A report could not be persisted.
    #[error(transparent)]
    Report(#[from] SinkError),
}
