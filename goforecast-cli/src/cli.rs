use clap::{Parser, Subcommand};
use goforecast_core::{Config, ForecastError, LookupService, render_forecast};
use tracing::debug;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "goforecast",
    version,
    about = "goforecast looks up the current weather based upon a partial address; e.g., a zip code."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Look up weather for a partial or whole address.
    #[command(visible_alias = "l")]
    Lookup {
        /// Address or zip code; quote it if it contains spaces.
        address: Option<String>,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Lookup { address } => {
                let address = address.ok_or(ForecastError::MissingArgument("address"))?;

                let config = Config::load()?;
                debug!(?config, "Loaded configuration");

                let service = LookupService::from_config(&config)?;
                let forecast = service.lookup(&address).await?;

                let stdout = std::io::stdout();
                render_forecast(&mut stdout.lock(), &forecast, &address)?;
            }
        }

        Ok(())
    }
}
