use std::path::PathBuf;

use clap::Parser;
use tracing::instrument;

use super::DEFAULT_CONFIG_PATH;

#[derive(Debug, Parser)]
#[command(about = "Write a default configuration file")]
pub struct Command {
    /// Where to write the configuration
    #[arg(long, value_name = "FILE", default_value = DEFAULT_CONFIG_PATH)]
    path: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    force: bool,
}

impl Command {
    #[instrument(skip(config))]
    pub fn run(self, config: &siteaudit::Config) -> anyhow::Result<()> {
        if self.path.exists() && !self.force {
            anyhow::bail!(
                "Configuration file already exists at {} (use --force to overwrite)",
                self.path.display()
            );
        }

        config.save(&self.path).map_err(anyhow::Error::msg)?;

        println!("Wrote configuration to {}", self.path.display());
        println!();
        println!("Next steps:");
        println!("  saudit run            # Run every configured check");
        println!("  saudit headings -v    # Inspect the heading sequence");

        Ok(())
    }
}
