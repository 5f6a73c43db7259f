//! Heading sequence validation.
//!
//! Given the heading levels of a page in document order, decides whether the
//! levels appear in non-decreasing order and which expected levels are absent.
//! The check scans the *reference* order (`h1`→`h6`), not the input order: for
//! each expected level it asks whether that level's first occurrence comes
//! after the latest occurrence already accounted for. This differs from a
//! naive consecutive-pair scan on inputs with repeats or gaps.

use std::str::FromStr;

use super::heading::HeadingLevel;

/// Policy deciding what a valid heading sequence requires.
///
/// Both variants were observed as the intended contract at different points;
/// the choice is a documented knob, not something to resolve silently.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SequencePolicy {
    /// Valid only when every level `h1`–`h6` is present *and* in order.
    #[default]
    Strict,
    /// Valid when the levels that do appear are in order; gaps are allowed.
    OrderOnly,
}

impl SequencePolicy {
    /// Maps the `require_no_gaps` configuration flag onto a policy.
    #[must_use]
    pub const fn from_require_no_gaps(require_no_gaps: bool) -> Self {
        if require_no_gaps {
            Self::Strict
        } else {
            Self::OrderOnly
        }
    }
}

/// Outcome of checking one observed heading sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceReport {
    observed: Vec<HeadingLevel>,
    missing: Vec<HeadingLevel>,
    violations: Vec<HeadingLevel>,
}

impl SequenceReport {
    /// The normalized input, one entry per heading element in document order.
    #[must_use]
    pub fn observed(&self) -> &[HeadingLevel] {
        &self.observed
    }

    /// Levels in `h1`–`h6` absent from the observed sequence.
    ///
    /// Ascending and free of duplicates by construction.
    #[must_use]
    pub fn missing(&self) -> &[HeadingLevel] {
        &self.missing
    }

    /// Levels whose first occurrence broke monotonicity relative to the
    /// furthest occurrence already accounted for.
    #[must_use]
    pub fn violations(&self) -> &[HeadingLevel] {
        &self.violations
    }

    /// True when no level occurred out of order.
    #[must_use]
    pub fn is_ordered(&self) -> bool {
        self.violations.is_empty()
    }

    /// True when every level `h1`–`h6` occurred at least once.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }

    /// Whether the sequence is valid under the given policy.
    #[must_use]
    pub fn is_valid(&self, policy: SequencePolicy) -> bool {
        match policy {
            SequencePolicy::Strict => self.is_ordered() && self.is_complete(),
            SequencePolicy::OrderOnly => self.is_ordered(),
        }
    }

    /// Human-readable summary suitable for a report comment.
    #[must_use]
    pub fn summary(&self, policy: SequencePolicy) -> String {
        if self.is_valid(policy) {
            return "Tag sequence is correct.".to_string();
        }

        let mut parts = Vec::new();
        if !self.missing.is_empty() && policy == SequencePolicy::Strict {
            parts.push(format!("Missing tags: {}", join_levels(&self.missing)));
        }
        if !self.violations.is_empty() {
            parts.push(format!("Broken sequence: {}", join_levels(&self.observed)));
        }
        parts.join(" ")
    }
}

fn join_levels(levels: &[HeadingLevel]) -> String {
    levels
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Checks an observed heading sequence against the reference order `h1`→`h6`.
///
/// For each expected level, the first-occurrence index within `levels` must
/// not precede the furthest first-occurrence index already accounted for.
/// A level that never occurs is reported as missing, never as a violation.
/// Total and side-effect-free for every input.
#[must_use]
pub fn check_sequence(levels: &[HeadingLevel]) -> SequenceReport {
    let mut missing = Vec::new();
    let mut violations = Vec::new();
    // Sentinel below any valid index; tracks the furthest in-order occurrence.
    let mut last_index = None;

    for expected in HeadingLevel::ALL {
        match levels.iter().position(|&level| level == expected) {
            Some(index) => {
                if last_index.is_some_and(|last| index < last) {
                    violations.push(expected);
                } else {
                    last_index = Some(index);
                }
            }
            None => missing.push(expected),
        }
    }

    SequenceReport {
        observed: levels.to_vec(),
        missing,
        violations,
    }
}

/// Error returned when a supplied tag name is not a heading tag.
///
/// A value outside `h1`–`h6` indicates a defect in the caller's extraction
/// logic, so validation fails fast rather than coercing or skipping.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unrecognised heading tag '{value}' at position {position}")]
pub struct PreconditionError {
    /// The offending tag name, as supplied.
    pub value: String,
    /// Zero-based position of the offending entry in the input.
    pub position: usize,
}

/// Validates a sequence of heading tag names as extracted from a page.
///
/// Tag names are matched case-insensitively (`"H2"` and `"h2"` are
/// equivalent).
///
/// # Errors
///
/// Returns [`PreconditionError`] identifying the first entry that is not a
/// heading tag name.
pub fn validate_tags<S: AsRef<str>>(tags: &[S]) -> Result<SequenceReport, PreconditionError> {
    let levels = tags
        .iter()
        .enumerate()
        .map(|(position, tag)| {
            HeadingLevel::from_str(tag.as_ref()).map_err(|_| PreconditionError {
                value: tag.as_ref().to_string(),
                position,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(check_sequence(&levels))
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::domain::heading::HeadingLevel::{H1, H2, H3, H4, H5, H6};

    #[test]
    fn complete_sequence_is_valid_under_both_policies() {
        let report = validate_tags(&["h1", "h2", "h3", "h4", "h5", "h6"]).unwrap();
        assert!(report.missing().is_empty());
        assert!(report.violations().is_empty());
        assert!(report.is_valid(SequencePolicy::Strict));
        assert!(report.is_valid(SequencePolicy::OrderOnly));
    }

    #[test]
    fn single_missing_level_fails_strict_only() {
        let report = validate_tags(&["h1", "h2", "h4", "h5", "h6"]).unwrap();
        assert_eq!(report.missing(), &[H3]);
        assert!(report.violations().is_empty());
        assert!(!report.is_valid(SequencePolicy::Strict));
        assert!(report.is_valid(SequencePolicy::OrderOnly));
    }

    #[test]
    fn out_of_order_level_is_a_violation() {
        // h1 first occurs at index 1, so h2's occurrence at index 0 is out of
        // order; h3 at index 2 is fine.
        let report = validate_tags(&["h2", "h1", "h3"]).unwrap();
        assert_eq!(report.violations(), &[H2]);
        assert_eq!(report.missing(), &[H4, H5, H6]);
        assert!(!report.is_valid(SequencePolicy::Strict));
        assert!(!report.is_valid(SequencePolicy::OrderOnly));
    }

    #[test]
    fn empty_input_has_all_levels_missing() {
        let report = check_sequence(&[]);
        assert_eq!(report.missing(), &[H1, H2, H3, H4, H5, H6]);
        assert!(report.violations().is_empty());
        assert!(!report.is_valid(SequencePolicy::Strict));
        // Vacuously ordered.
        assert!(report.is_valid(SequencePolicy::OrderOnly));
    }

    #[test]
    fn repeated_levels_do_not_break_ordering() {
        let report = validate_tags(&["h1", "h2", "h2", "h3", "h4", "h5", "h6"]).unwrap();
        assert!(report.missing().is_empty());
        assert!(report.violations().is_empty());
        assert!(report.is_valid(SequencePolicy::Strict));
    }

    #[test]
    fn case_insensitive_input() {
        let upper = validate_tags(&["H1", "H2", "H3", "H4", "H5", "H6"]).unwrap();
        let lower = validate_tags(&["h1", "h2", "h3", "h4", "h5", "h6"]).unwrap();
        assert_eq!(upper, lower);
    }

    #[test]
    fn first_occurrence_decides_ordering() {
        // h2 first occurs at index 0 even though it also appears after h1.
        let report = validate_tags(&["h2", "h1", "h2"]).unwrap();
        assert_eq!(report.violations(), &[H2]);
    }

    #[test]
    fn violation_does_not_advance_the_ordering_cursor() {
        // h1 at index 2, h2 at index 0, h3 at index 1. h2 is a violation
        // against h1's index; the cursor stays at 2, so h3 is one too.
        let report = validate_tags(&["h2", "h3", "h1"]).unwrap();
        assert_eq!(report.violations(), &[H2, H3]);
    }

    #[test]
    fn absent_level_is_reported_once_and_never_as_violation() {
        let report = validate_tags(&["h3", "h1"]).unwrap();
        assert_eq!(report.missing(), &[H2, H4, H5, H6]);
        assert_eq!(report.violations(), &[H3]);
    }

    // Totality over a sample of well-formed inputs, including degenerate ones.
    #[test_case(&[]; "empty")]
    #[test_case(&["h6"]; "single deepest")]
    #[test_case(&["h6", "h5", "h4", "h3", "h2", "h1"]; "fully reversed")]
    #[test_case(&["h1", "h1", "h1"]; "all repeats")]
    #[test_case(&["H3", "h3", "H1"]; "mixed case")]
    fn validate_is_total_for_well_formed_input(tags: &[&str]) {
        let report = validate_tags(tags).unwrap();
        assert_eq!(report.observed().len(), tags.len());
    }

    #[test]
    fn non_heading_tag_fails_fast_with_position() {
        let err = validate_tags(&["h1", "div", "h2"]).unwrap_err();
        assert_eq!(
            err,
            PreconditionError {
                value: "div".to_string(),
                position: 1
            }
        );
        assert_eq!(
            err.to_string(),
            "unrecognised heading tag 'div' at position 1"
        );
    }

    #[test]
    fn summary_reports_correct_sequence() {
        let report = validate_tags(&["h1", "h2", "h3", "h4", "h5", "h6"]).unwrap();
        assert_eq!(
            report.summary(SequencePolicy::Strict),
            "Tag sequence is correct."
        );
    }

    #[test]
    fn summary_reports_missing_and_broken() {
        let report = validate_tags(&["h2", "h1", "h3"]).unwrap();
        assert_eq!(
            report.summary(SequencePolicy::Strict),
            "Missing tags: h4, h5, h6 Broken sequence: h2, h1, h3"
        );
    }

    #[test]
    fn summary_ignores_gaps_under_order_only_policy() {
        let report = validate_tags(&["h1", "h2", "h4"]).unwrap();
        assert_eq!(
            report.summary(SequencePolicy::OrderOnly),
            "Tag sequence is correct."
        );
    }

    #[test]
    fn policy_from_flag() {
        assert_eq!(
            SequencePolicy::from_require_no_gaps(true),
            SequencePolicy::Strict
        );
        assert_eq!(
            SequencePolicy::from_require_no_gaps(false),
            SequencePolicy::OrderOnly
        );
    }
}
