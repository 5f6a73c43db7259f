//! Extraction of the embedded `ScriptData` page metadata.

use crate::{extract::Page, report::TestRecord};

/// Scrapes the inline `ScriptData` blocks and records what was found.
///
/// Passes iff at least one field could be extracted; the comments list every
/// extracted field so the record doubles as the scraped dataset.
#[must_use]
pub fn run(page: &Page) -> Vec<TestRecord> {
    let data = page.script_data();
    let target = page.url().as_str();

    if data.is_empty() {
        return vec![TestRecord::new(
            target,
            "Script Data Extraction",
            false,
            "No ScriptData block found",
        )];
    }

    let fields = [
        ("SiteUrl", &data.site_url),
        ("SiteName", &data.site_name),
        ("Browser", &data.browser),
        ("CountryCode", &data.country_code),
        ("IP", &data.ip),
        ("CampaignId", &data.campaign_id),
    ];
    let comments = fields
        .iter()
        .filter_map(|(key, value)| value.as_ref().map(|value| format!("{key}={value}")))
        .collect::<Vec<_>>()
        .join("; ");

    vec![TestRecord::new(
        target,
        "Script Data Extraction",
        true,
        comments,
    )]
}
