//! Report records and sinks.
//!
//! Every check produces a flat list of [`TestRecord`]s; a [`ReportSink`]
//! persists one named batch per check, spreadsheet-style, under the
//! configured report directory.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::Serialize;

/// One row of a report: a single test case against a single target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestRecord {
    /// What the case ran against (page URL, image source, link target).
    pub target: String,
    /// Name of the test case.
    pub testcase: String,
    /// Whether the case passed.
    pub passed: bool,
    /// Free-text commentary on the outcome.
    pub comments: String,
}

impl TestRecord {
    /// Builds a record.
    #[must_use]
    pub fn new(
        target: impl Into<String>,
        testcase: impl Into<String>,
        passed: bool,
        comments: impl Into<String>,
    ) -> Self {
        Self {
            target: target.into(),
            testcase: testcase.into(),
            passed,
            comments: comments.into(),
        }
    }
}

/// Error raised while persisting a report.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    /// The report directory could not be created or the file written.
    #[error("failed to write report file: {0}")]
    Io(#[from] io::Error),

    /// A record could not be serialized as CSV.
    #[error("failed to serialize report as CSV: {0}")]
    Csv(#[from] csv::Error),

    /// A record could not be serialized as JSON.
    #[error("failed to serialize report as JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Persists a named batch of records.
pub trait ReportSink {
    /// Writes `records` under `name`, returning the path written.
    ///
    /// # Errors
    ///
    /// Returns [`SinkError`] if the report cannot be serialized or written.
    fn write(&self, name: &str, records: &[TestRecord]) -> Result<PathBuf, SinkError>;
}

fn report_path(dir: &Path, name: &str, extension: &str) -> PathBuf {
    let timestamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
    dir.join(format!("{name}_{timestamp}.{extension}"))
}

/// Writes one CSV file per check, with a header row.
#[derive(Debug)]
pub struct CsvSink {
    dir: PathBuf,
}

impl CsvSink {
    /// A sink writing into `dir`. The directory is created on first write.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl ReportSink for CsvSink {
    fn write(&self, name: &str, records: &[TestRecord]) -> Result<PathBuf, SinkError> {
        fs::create_dir_all(&self.dir)?;
        let path = report_path(&self.dir, name, "csv");

        let mut writer = csv::Writer::from_path(&path)?;
        for record in records {
            writer.serialize(record)?;
        }
        writer.flush()?;

        Ok(path)
    }
}

/// Writes one pretty-printed JSON file per check.
#[derive(Debug)]
pub struct JsonSink {
    dir: PathBuf,
}

impl JsonSink {
    /// A sink writing into `dir`. The directory is created on first write.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl ReportSink for JsonSink {
    fn write(&self, name: &str, records: &[TestRecord]) -> Result<PathBuf, SinkError> {
        fs::create_dir_all(&self.dir)?;
        let path = report_path(&self.dir, name, "json");

        let json = serde_json::to_string_pretty(records)?;
        fs::write(&path, json)?;

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<TestRecord> {
        vec![
            TestRecord::new("https://example.com/", "H1 Tag Existence", true, "Found 1"),
            TestRecord::new(
                "https://example.com/a",
                "URL Status Check",
                false,
                "Status Code: 404",
            ),
        ]
    }

    #[test]
    fn csv_sink_writes_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let sink = CsvSink::new(dir.path());

        let path = sink.write("url-status", &sample()).unwrap();
        assert_eq!(path.extension().unwrap(), "csv");

        let content = fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(lines.next(), Some("target,testcase,passed,comments"));
        assert_eq!(content.lines().count(), 3);
        assert!(content.contains("Status Code: 404"));
    }

    #[test]
    fn csv_sink_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let sink = CsvSink::new(dir.path().join("nested/reports"));
        let path = sink.write("h1", &sample()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn json_sink_roundtrips() {
        let dir = tempfile::tempdir().unwrap();
        let sink = JsonSink::new(dir.path());

        let records = sample();
        let path = sink.write("image-alt", &records).unwrap();

        let parsed: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), records.len());
        assert_eq!(parsed[0]["passed"], serde_json::Value::Bool(true));
    }

    #[test]
    fn empty_batch_still_writes_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let sink = CsvSink::new(dir.path());
        let path = sink.write("script-data", &[]).unwrap();
        assert!(path.exists());
    }
}
