use anyhow::Result;
use clap::{Parser, Subcommand};
use inquire::{InquireError, Text};
use widget_core::{Config, WeatherWidget, provider_from_config};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-widget", version, about = "Weather widget")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the WeatherAPI.com API key.
    Configure,

    /// Show current weather for a city and exit.
    Show {
        /// City or location name.
        city: String,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Some(Command::Configure) => configure(),
            Some(Command::Show { city }) => show(&city).await,
            None => interactive().await,
        }
    }
}

fn configure() -> Result<()> {
    let mut config = Config::load()?;

    let key = Text::new("WeatherAPI.com API key:").prompt()?;
    config.set_api_key(key.trim().to_string());
    config.save()?;

    println!("Saved configuration to {}", Config::config_file_path()?.display());
    Ok(())
}

async fn show(city: &str) -> Result<()> {
    let mut widget = widget_from_config()?;

    widget.edit_query(city);
    widget.submit().await;
    print_lines(&widget);

    Ok(())
}

/// The default mode: prompt, submit, render, repeat. A failed search leaves
/// the widget interactive, so the loop only ends when the user bails out.
async fn interactive() -> Result<()> {
    let mut widget = widget_from_config()?;

    loop {
        let line = match Text::new("Enter a city name:").prompt() {
            Ok(line) => line,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(err) => return Err(err.into()),
        };

        widget.edit_query(line);
        widget.submit().await;
        print_lines(&widget);
    }

    Ok(())
}

fn widget_from_config() -> Result<WeatherWidget> {
    let config = Config::load()?;
    let provider = provider_from_config(&config)?;

    Ok(WeatherWidget::new(provider))
}

fn print_lines(widget: &WeatherWidget) {
    for line in widget.display_lines() {
        println!("{line}");
    }
}
