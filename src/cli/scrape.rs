use std::process;

use clap::Parser;
use siteaudit::{Config, checks::script_data};
use tracing::instrument;
use url::Url;

#[derive(Debug, Parser)]
#[command(about = "Extract the embedded ScriptData metadata")]
pub struct Command {
    /// Audit this URL instead of the configured target
    #[arg(long, value_name = "URL")]
    url: Option<Url>,

    /// Print the extracted fields as JSON instead of a report line
    #[arg(long)]
    json: bool,
}

impl Command {
    #[instrument(level = "debug", skip(self, config))]
    pub fn run(self, mut config: Config) -> anyhow::Result<()> {
        let (page, _fetcher) = super::fetch_page(&mut config, self.url)?;

        if self.json {
            let data = page.script_data();
            println!("{}", serde_json::to_string_pretty(&data)?);
            if data.is_empty() {
                process::exit(2);
            }
            return Ok(());
        }

        let records = script_data::run(&page);
        super::print_records(&records);

        if super::summarize(&records) > 0 {
            process::exit(2);
        }

        Ok(())
    }
}
