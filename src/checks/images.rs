//! Image accessibility: every image must carry a non-empty `alt` attribute.

use crate::{extract::Page, report::TestRecord};

/// One record per `<img>` element on the page.
///
/// Pages without any images produce a single failing record, since an image
/// check that inspected nothing is more likely a broken page than a pass.
#[must_use]
pub fn run(page: &Page) -> Vec<TestRecord> {
    let images = page.images();
    if images.is_empty() {
        return vec![TestRecord::new(
            page.url().as_str(),
            "Image Alt Attribute",
            false,
            "No images found on the page",
        )];
    }

    images
        .into_iter()
        .map(|image| {
            let target = image.src.clone().unwrap_or_else(|| "N/A".to_string());
            let passed = image.has_alt_text();
            let comments = if passed {
                "Alt attribute is present."
            } else {
                "Alt attribute is missing."
            };
            TestRecord::new(target, "Image Alt Attribute", passed, comments)
        })
        .collect()
}
