use std::process;

use clap::Parser;
use siteaudit::{Config, SequencePolicy, checks::headings};
use tracing::instrument;
use url::Url;

#[derive(Debug, Parser)]
#[command(about = "Check heading presence and sequence on the target page")]
pub struct Command {
    /// Audit this URL instead of the configured target
    #[arg(long, value_name = "URL")]
    url: Option<Url>,

    /// Only require heading order; allow missing levels
    #[arg(long)]
    order_only: bool,
}

impl Command {
    #[instrument(level = "debug", skip(self, config))]
    pub fn run(self, mut config: Config) -> anyhow::Result<()> {
        let (page, _fetcher) = super::fetch_page(&mut config, self.url)?;

        let policy = if self.order_only {
            SequencePolicy::OrderOnly
        } else {
            SequencePolicy::from_require_no_gaps(config.require_no_gaps)
        };

        let records = vec![headings::h1_presence(&page), headings::sequence(&page, policy)?];
        super::print_records(&records);

        if super::summarize(&records) > 0 {
            process::exit(2);
        }

        Ok(())
    }
}
