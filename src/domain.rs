//! Core audit domain: heading levels, sequence validation, and configuration.

/// Audit configuration and the set of known checks.
pub mod config;
/// Heading levels and tag-name parsing.
pub mod heading;
/// The heading sequence validator.
pub mod sequence;

pub use config::{CheckKind, Config};
pub use heading::{HeadingLevel, InvalidHeadingError};
pub use sequence::{
    PreconditionError, SequencePolicy, SequenceReport, check_sequence, validate_tags,
};
