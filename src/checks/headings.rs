//! Heading checks: `<h1>` presence and the `h1`–`h6` sequence.

use crate::{
    domain::{PreconditionError, SequencePolicy, validate_tags},
    extract::Page,
    report::TestRecord,
};

/// Checks that the page has at least one `<h1>`.
#[must_use]
pub fn h1_presence(page: &Page) -> TestRecord {
    let count = page.h1_count();
    let comments = if count == 0 {
        "No H1 tag found".to_string()
    } else {
        format!("Found {count} H1 tags")
    };
    TestRecord::new(page.url().as_str(), "H1 Tag Existence", count > 0, comments)
}

/// Checks the heading sequence under the given policy.
///
/// # Errors
///
/// Returns [`PreconditionError`] if the extractor handed over a tag name
/// outside `h1`–`h6`, which indicates a defect in the selector, not a page
/// problem.
pub fn sequence(page: &Page, policy: SequencePolicy) -> Result<TestRecord, PreconditionError> {
    let report = validate_tags(&page.heading_tags())?;
    Ok(TestRecord::new(
        page.url().as_str(),
        "HTML Tag Sequence Test (H1-H6)",
        report.is_valid(policy),
        report.summary(policy),
    ))
}
