use std::sync::Arc;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use tracing::debug;

use pogoda_core::{Config, LoadingObserver, WeatherClient, WeatherPresenter};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "pogoda", version, about = "Погода по названию города")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key.
    Configure,

    /// Show current weather for a city.
    Show {
        /// City name, free text.
        city: String,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { city } => show(&city).await,
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = inquire::Text::new("OpenWeather API key:")
        .prompt()
        .context("Failed to read API key from prompt")?;

    config.set_api_key(api_key.trim().to_string());
    config.save()?;

    println!("Ключ сохранён: {}", Config::config_file_path()?.display());
    Ok(())
}

/// Mirrors the activity indicator of the original screen on stderr.
struct Spinner;

impl LoadingObserver for Spinner {
    fn loading_changed(&self, is_loading: bool) {
        if is_loading {
            eprintln!("Загрузка...");
        }
    }
}

async fn show(city: &str) -> anyhow::Result<()> {
    let config = Config::load()?;
    let api_key = config.require_api_key()?;
    debug!("requesting weather for {city:?}");

    let client =
        WeatherClient::new(api_key.to_string()).with_observer(Arc::new(Spinner));

    match client.fetch_weather(city).await {
        Ok(record) => {
            let mut presenter = WeatherPresenter::new();
            presenter.set_record(record);
            print_weather(&presenter);
            Ok(())
        }
        Err(err) => bail!("{err}"),
    }
}

fn print_weather(presenter: &WeatherPresenter) {
    println!("{}", presenter.city_name());
    println!("{}", presenter.formatted_temperature());
    println!("{}", presenter.weather_description());
    println!("Влажность: {}", presenter.formatted_humidity());
    println!("Скорость ветра: {}", presenter.formatted_wind_speed());
}
