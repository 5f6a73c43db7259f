use std::process;

use clap::Parser;
use siteaudit::{Config, checks::currency};
use tracing::instrument;
use url::Url;

#[derive(Debug, Parser)]
#[command(about = "Check the currency widget and displayed price")]
pub struct Command {
    /// Audit this URL instead of the configured target
    #[arg(long, value_name = "URL")]
    url: Option<Url>,
}

impl Command {
    #[instrument(level = "debug", skip(self, config))]
    pub fn run(self, mut config: Config) -> anyhow::Result<()> {
        let (page, _fetcher) = super::fetch_page(&mut config, self.url)?;

        let records = currency::run(&page);
        super::print_records(&records);

        if super::summarize(&records) > 0 {
            process::exit(2);
        }

        Ok(())
    }
}
