use std::process;

use clap::Parser;
use indicatif::ProgressBar;
use siteaudit::{Config, checks::links};
use tracing::instrument;
use url::Url;

#[derive(Debug, Parser)]
#[command(about = "HEAD-poll every outbound link on the target page")]
pub struct Command {
    /// Audit this URL instead of the configured target
    #[arg(long, value_name = "URL")]
    url: Option<Url>,

    /// Only print broken links
    #[arg(long)]
    failures_only: bool,
}

impl Command {
    #[instrument(level = "debug", skip(self, config))]
    pub fn run(self, mut config: Config) -> anyhow::Result<()> {
        let (page, fetcher) = super::fetch_page(&mut config, self.url)?;

        let urls = links::discover(&page);
        tracing::info!(count = urls.len(), "discovered links");

        // Sequential on purpose; the bar makes the wait legible.
        let bar = ProgressBar::new(urls.len() as u64);
        let records: Vec<_> = urls
            .iter()
            .map(|url| {
                let record = links::check(&fetcher, url);
                bar.inc(1);
                record
            })
            .collect();
        bar.finish_and_clear();

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
