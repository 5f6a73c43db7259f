use std::path::{Path, PathBuf};

mod currency;
mod headings;
mod images;
mod init;
mod links;
mod run;
mod scrape;
mod terminal;

use clap::ArgAction;
use siteaudit::{Config, Fetcher, HttpFetcher, Page, TestRecord};
use terminal::Colorize;
use url::Url;

/// Default location of the configuration file.
const DEFAULT_CONFIG_PATH: &str = "site-audit.toml";

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to the configuration file
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        let config = load_config(self.config.as_deref())?;

        self.command
            .unwrap_or_else(|| Command::Run(run::Run::default()))
            .run(config)
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

#[derive(Debug, clap::Parser)]
enum Command {
    /// Run every configured check and write reports
    Run(run::Run),
    /// Check heading presence and sequence on the target page
    Headings(headings::Command),
    /// Check image alt attributes on the target page
    Images(images::Command),
    /// Check the status of every outbound link on the target page
    Links(links::Command),
    /// Check the currency widget on the target page
    Currency(currency::Command),
    /// Extract the embedded ScriptData metadata from the target page
    Scrape(scrape::Command),
    /// Write a default configuration file
    Init(init::Command),
}

impl Command {
    fn run(self, config: Config) -> anyhow::Result<()> {
        match self {
            Self::Run(cmd) => cmd.run(config),
            Self::Headings(cmd) => cmd.run(config),
            Self::Images(cmd) => cmd.run(config),
            Self::Links(cmd) => cmd.run(config),
            Self::Currency(cmd) => cmd.run(config),
            Self::Scrape(cmd) => cmd.run(config),
            Self::Init(cmd) => cmd.run(&config),
        }
    }
}

/// Loads the configuration from the given path, the default path, or falls
/// back to built-in defaults when no file exists.
fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    match path {
        Some(path) => Config::load(path).map_err(anyhow::Error::msg),
        None => {
            let default = Path::new(DEFAULT_CONFIG_PATH);
            if default.exists() {
                Config::load(default).map_err(anyhow::Error::msg)
            } else {
                Ok(Config::default())
            }
        }
    }
}

/// Fetches the page the audit runs against, honouring a per-command URL
/// override.
fn fetch_page(config: &mut Config, url: Option<Url>) -> anyhow::Result<(Page, HttpFetcher)> {
    if let Some(url) = url {
        config.set_target_url(url);
    }

    let fetcher = HttpFetcher::new(config.timeout(), config.user_agent())?;
    let target = config.target_url().clone();
    tracing::info!(%target, "fetching page");
    let html = fetcher.fetch(&target)?;
    Ok((Page::parse(target, &html), fetcher))
}

/// Prints one line per record, colored by outcome.
fn print_records(records: &[TestRecord]) {
    for record in records {
        let status = if record.passed {
            "PASS".success()
        } else {
            "FAIL".warning()
        };
        println!(
            "{status} {} {}",
            record.testcase,
            record.target.as_str().dim()
        );
        if !record.comments.is_empty() {
            println!("     {}", record.comments);
        }
    }
}

/// Prints a summary line and returns the number of failing records.
fn summarize(records: &[TestRecord]) -> usize {
    let failed = records.iter().filter(|record| !record.passed).count();
    let total = records.len();
    if failed == 0 {
        println!("{}", format!("{total}/{total} cases passed").success());
    } else {
        println!(
            "{}",
            format!("{}/{total} cases passed, {failed} failed", total - failed).warning()
        );
    }
    failed
}
