use std::{
    fmt,
    path::{Path, PathBuf},
    time::Duration,
};

use serde::{Deserialize, Serialize};
use url::Url;

/// The acceptance checks this tool knows how to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CheckKind {
    /// At least one `<h1>` is present on the page.
    H1,
    /// Heading levels appear in reference order without gaps.
    HeadingSequence,
    /// Every image carries a non-empty `alt` attribute.
    ImageAlt,
    /// Every outbound link answers an HTTP HEAD with a non-error status.
    UrlStatus,
    /// The currency widget is intact and matches the displayed price.
    CurrencyFilter,
    /// The inline `ScriptData` block can be extracted.
    ScriptData,
}

impl CheckKind {
    /// All checks, in the order they are run by default.
    pub const ALL: [Self; 6] = [
        Self::H1,
        Self::HeadingSequence,
        Self::ImageAlt,
        Self::UrlStatus,
        Self::CurrencyFilter,
        Self::ScriptData,
    ];

    /// Stable kebab-case name, used in config files and report filenames.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::H1 => "h1",
            Self::HeadingSequence => "heading-sequence",
            Self::ImageAlt => "image-alt",
            Self::UrlStatus => "url-status",
            Self::CurrencyFilter => "currency-filter",
            Self::ScriptData => "script-data",
        }
    }
}

impl fmt::Display for CheckKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Audit configuration.
///
/// An explicit value passed to whichever component needs it; there is no
/// process-wide settings singleton.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// The page the audit runs against.
    target_url: Url,

    /// Directory reports are written into.
    report_dir: PathBuf,

    /// The checks to run, in order.
    checks: Vec<CheckKind>,

    /// Whether a valid heading sequence also requires all six levels to be
    /// present. When `false`, only ordering is checked.
    pub require_no_gaps: bool,

    /// HTTP timeout in seconds, applied to page fetches and HEAD polls.
    timeout_secs: u64,

    /// User agent sent with every request.
    user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target_url: default_target_url(),
            report_dir: PathBuf::from("test_reports"),
            checks: CheckKind::ALL.to_vec(),
            require_no_gaps: true,
            timeout_secs: 10,
            user_agent: concat!("site-audit/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

fn default_target_url() -> Url {
    Url::parse("https://www.alojamiento.io/").expect("literal URL is valid")
}

impl Config {
    /// Loads the configuration from a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the TOML content is
    /// invalid.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file: {e}"))?;
        toml::from_str(&content).map_err(|e| format!("Failed to parse config file: {e}"))
    }

    /// Saves the configuration to a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be serialized to TOML or
    /// if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let content =
            toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize config: {e}"))?;
        std::fs::write(path, content).map_err(|e| format!("Failed to write config file: {e}"))
    }

    /// The page the audit runs against.
    #[must_use]
    pub const fn target_url(&self) -> &Url {
        &self.target_url
    }

    /// Replaces the target URL (e.g. from a CLI override).
    pub fn set_target_url(&mut self, url: Url) {
        self.target_url = url;
    }

    /// Directory reports are written into.
    #[must_use]
    pub fn report_dir(&self) -> &Path {
        &self.report_dir
    }

    /// The checks to run, in order.
    #[must_use]
    pub fn checks(&self) -> &[CheckKind] {
        &self.checks
    }

    /// HTTP timeout applied to page fetches and HEAD polls.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// User agent sent with every request.
    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}
