use clap::{Parser, Subcommand};
use nowcast_core::{Config, IpLocationSource, WeatherApiClient};

use crate::app::Session;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "nowcast", version, about = "Current weather for a city or your location")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the WeatherAPI.com key used for requests.
    Configure,

    /// Show current weather for a city, then exit.
    Show {
        /// City name, e.g. "Paris".
        city: String,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Some(Command::Configure) => configure(),
            Some(Command::Show { city }) => {
                let session = Session::new(client_from_config()?);
                session.submit(&city).await;
                session.render();
                Ok(())
            }
            None => {
                let session = Session::new(client_from_config()?);
                session.run(IpLocationSource).await
            }
        }
    }
}

fn client_from_config() -> anyhow::Result<WeatherApiClient> {
    let config = Config::load()?;
    Ok(WeatherApiClient::new(config.resolved_api_key()?))
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let key = inquire::Password::new("WeatherAPI.com key:").without_confirmation().prompt()?;

    config.set_api_key(key);
    config.save()?;

    println!("Saved key to {}", Config::config_file_path()?.display());
    Ok(())
}
