use std::process;

use clap::Parser;
use siteaudit::{Config, checks::images};
use tracing::instrument;
use url::Url;

#[derive(Debug, Parser)]
#[command(about = "Check that every image carries a non-empty alt attribute")]
pub struct Command {
    /// Audit this URL instead of the configured target
    #[arg(long, value_name = "URL")]
    url: Option<Url>,

    /// Only print failing images
    #[arg(long)]
    failures_only: bool,
}

impl Command {
    #[instrument(level = "debug", skip(self, config))]
    pub fn run(self, mut config: Config) -> anyhow::Result<()> {
        let (page, _fetcher) = super::fetch_page(&mut config, self.url)?;

        let records = images::run(&page);
        if self.failures_only {
            let failures: Vec<_> = records
                .iter()
                .filter(|record| !record.passed)
                .cloned()
                .collect();
            super::print_records(&failures);
        } else {
            super::print_records(&records);
        }

        if super::summarize(&records) > 0 {
            process::exit(2);
        }

        Ok(())
    }
}
