use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use inquire::{InquireError, Password, PasswordDisplayMode, Select, Text, validator::Validation};
use skyview_core::{
    Config, Controller, LookupTicket, WeatherClient, provider_from_config, validate,
};

use crate::render;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "skyview", version, about = "City weather lookup")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Configure the OpenWeather API key and default city.
    Configure,

    /// Show current conditions and the 7-day forecast for a city.
    Show {
        /// City name; the configured default city if absent.
        city: Option<String>,

        /// Open the details of the Nth forecast day (1-based).
        #[arg(long)]
        day: Option<usize>,

        /// Print the report as JSON instead of text.
        #[arg(long)]
        json: bool,
    },

    /// Search cities and open forecast days interactively.
    Browse,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { city, day, json } => show(city, day, json).await,
            Command::Browse => browse().await,
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let key = Password::new("OpenWeather API key:")
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .with_help_message("Leave empty to keep the current key")
        .prompt()
        .context("Failed to read API key")?;
    if !key.trim().is_empty() {
        config.set_api_key(&key);
    }

    let city = Text::new("Default city:")
        .with_default(&config.default_city)
        .with_validator(|input: &str| {
            Ok(match validate(input) {
                Ok(_) => Validation::Valid,
                Err(err) => Validation::Invalid(err.to_string().into()),
            })
        })
        .prompt()
        .context("Failed to read default city")?;
    config.default_city = city.trim().to_string();

    let path = config.save()?;
    println!("Saved configuration to {}", path.display());

    Ok(())
}

async fn show(city: Option<String>, day: Option<usize>, json: bool) -> anyhow::Result<()> {
    let config = Config::load()?;
    let mut controller = Controller::new(city.unwrap_or_else(|| config.default_city.clone()));

    let ticket = controller.submit()?;
    let client = WeatherClient::new(provider_from_config(&config)?);
    lookup(&mut controller, &client, ticket).await;

    if let Some(msg) = controller.state().error() {
        bail!("{msg}");
    }

    if let Some(n) = day {
        if n == 0 || controller.select_day(n - 1).is_none() {
            bail!("No forecast for day {n}; pick a day between 1 and the number of days shown.");
        }
    }

    if json {
        let report = &controller.state().report;
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        print!("{}", render::render_view(controller.state(), controller.background()));
    }

    Ok(())
}

const SEARCH: &str = "Search a city";
const DETAILS: &str = "Show a forecast day";
const CLOSE: &str = "Close details";
const QUIT: &str = "Quit";

async fn browse() -> anyhow::Result<()> {
    let config = Config::load()?;
    let client = WeatherClient::new(provider_from_config(&config)?);
    let mut controller = Controller::new(config.default_city.clone());

    if let Some(ticket) = controller.mount() {
        lookup(&mut controller, &client, ticket).await;
    }
    print!("{}", render::render_view(controller.state(), controller.background()));

    loop {
        let mut actions = vec![SEARCH];
        if controller.state().report.is_some() {
            actions.push(DETAILS);
        }
        if controller.state().selected.is_some() {
            actions.push(CLOSE);
        }
        actions.push(QUIT);

        let Some(action) = prompt_or_quit(Select::new("What next?", actions).prompt())? else {
            break;
        };

        match action {
            SEARCH => {
                let Some(text) = prompt_or_quit(
                    Text::new("City:").with_initial_value(&controller.state().city_input).prompt(),
                )?
                else {
                    continue;
                };
                controller.edit_input(text);
                if let Ok(ticket) = controller.submit() {
                    lookup(&mut controller, &client, ticket).await;
                }
            }
            DETAILS => {
                let days: Vec<String> = controller
                    .state()
                    .report
                    .iter()
                    .flat_map(|r| r.daily.iter().map(|d| d.day_name.clone()))
                    .collect();
                if days.is_empty() {
                    println!("No forecast days to show.");
                    continue;
                }
                let Some(picked) = prompt_or_quit(Select::new("Day:", days).raw_prompt())? else {
                    continue;
                };
                controller.select_day(picked.index);
            }
            CLOSE => controller.dismiss(),
            _ => break,
        }

        print!("{}", render::render_view(controller.state(), controller.background()));
    }

    Ok(())
}

/// Run one lookup and settle it on the controller.
async fn lookup(controller: &mut Controller, client: &WeatherClient, ticket: LookupTicket) {
    eprintln!("Loading {}...", ticket.city());
    let result = client.fetch_conditions_and_forecast(ticket.city()).await;
    controller.settle(&ticket, result);
}

/// Map Esc / Ctrl-C on a prompt to `None`.
fn prompt_or_quit<T>(answer: Result<T, InquireError>) -> anyhow::Result<Option<T>> {
    match answer {
        Ok(value) => Ok(Some(value)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(err) => Err(err).context("Prompt failed"),
    }
}
