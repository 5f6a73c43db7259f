use std::process;

use clap::Parser;
use siteaudit::{Config, CsvSink, JsonSink, ReportSink, SequencePolicy, checks};
use tracing::instrument;
use url::Url;

use super::terminal::Colorize;

#[derive(Debug, Parser, Default)]
#[command(about = "Run every configured check and write a report per check")]
pub struct Run {
    /// Audit this URL instead of the configured target
    #[arg(long, value_name = "URL")]
    url: Option<Url>,

    /// Report format
    #[arg(long, value_name = "FORMAT", default_value = "csv")]
    output: OutputFormat,

    /// Suppress per-case output, printing only the per-check summary
    #[arg(long, short)]
    quiet: bool,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Csv,
    Json,
}

impl Run {
    #[instrument(level = "debug", skip(self, config))]
    pub fn run(self, mut config: Config) -> anyhow::Result<()> {
        let (page, fetcher) = super::fetch_page(&mut config, self.url)?;
        let policy = SequencePolicy::from_require_no_gaps(config.require_no_gaps);

        println!("Auditing {}", page.url().as_str().info());

        let sink: Box<dyn ReportSink> = match self.output {
            OutputFormat::Csv => Box::new(CsvSink::new(config.report_dir())),
            OutputFormat::Json => Box::new(JsonSink::new(config.report_dir())),
        };

        let mut failed = 0;
        for &kind in config.checks() {
            let records = checks::run(kind, &page, &fetcher, policy)?;
            let path = sink.write(kind.name(), &records)?;

            let check_failed = records.iter().filter(|record| !record.passed).count();
            failed += check_failed;

            let status = if check_failed == 0 {
                "PASS".success()
            } else {
                "FAIL".warning()
            };
            println!(
                "{status} {kind}: {}/{} cases passed {}",
                records.len() - check_failed,
                records.len(),
                format!("-> {}", path.display()).dim()
            );
            if !self.quiet && check_failed > 0 {
                for record in records.iter().filter(|record| !record.passed) {
                    println!("     {} {}", record.target.as_str().dim(), record.comments);
                }
            }
        }

        if failed > 0 {
            process::exit(2);
        }

        Ok(())
    }
}
