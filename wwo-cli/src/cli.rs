use anyhow::{Context, bail};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use inquire::{Confirm, Password, PasswordDisplayMode};
use serde::Serialize;
use tracing::debug;
use wwo_core::{Config, Options, Outcome, WwoClient};

use crate::output;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "wwo", version, about = "World Weather Online CLI")]
pub struct Cli {
    /// API key to use instead of the configured one.
    #[arg(long, global = true)]
    pub key: Option<String>,

    /// Print the decoded report as JSON.
    #[arg(long, global = true)]
    pub json: bool,

    /// Extra query option passed to the API as-is, e.g. `-o tp=24`.
    #[arg(short = 'o', long = "option", value_parser = parse_option, global = true)]
    pub options: Vec<(String, String)>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the API key and transport settings.
    Configure,

    #[command(flatten)]
    Report(ReportCommand),
}

#[derive(Debug, Subcommand)]
pub enum ReportCommand {
    /// Show current conditions and the local forecast.
    Show {
        /// Place name, postcode or "lat,lon".
        location: String,

        /// Number of forecast days; 0 shows current conditions only.
        #[arg(long)]
        days: Option<u32>,
    },

    /// Show the marine forecast.
    Marine {
        location: String,

        /// Include tide times.
        #[arg(long)]
        tide: bool,
    },

    /// Show the ski forecast.
    Ski { location: String },

    /// Show past local weather.
    Past {
        location: String,

        /// First day, YYYY-MM-DD.
        #[arg(long)]
        date: NaiveDate,

        /// Last day, YYYY-MM-DD.
        #[arg(long)]
        enddate: Option<NaiveDate>,
    },

    /// Show past marine weather.
    PastMarine {
        location: String,

        /// First day, YYYY-MM-DD.
        #[arg(long)]
        date: NaiveDate,

        /// Last day, YYYY-MM-DD.
        #[arg(long)]
        enddate: Option<NaiveDate>,

        /// Include tide times.
        #[arg(long)]
        tide: bool,
    },

    /// Search for locations.
    Search {
        query: String,

        /// Include each result's UTC offset.
        #[arg(long)]
        timezone: bool,
    },

    /// Show the UTC offset of a location.
    Timezone { location: String },
}

fn parse_option(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(k, v)| (k.to_owned(), v.to_owned()))
        .ok_or_else(|| format!("expected key=value, got '{raw}'"))
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let Cli { key, json, options, command } = self;

        match command {
            Command::Configure => configure(),
            Command::Report(report) => fetch(report, key, options.into_iter().collect(), json).await,
        }
    }
}

async fn fetch(command: ReportCommand, key: Option<String>, extra: Options, json: bool) -> anyhow::Result<()> {
    let mut config = Config::load()?;
    if let Some(key) = key {
        config.set_api_key(key);
    }
    let client = WwoClient::from_config(&config)?;
    let mut options = config.options_with(&extra);
    debug!(?command, ?options, "running report command");

    match command {
        ReportCommand::Show { location, days } => {
            if let Some(days) = days {
                options.insert("num_of_days".into(), days.to_string());
                if days == 0 {
                    options.insert("fx".into(), "no".into());
                }
            }
            let report = finish(client.get_local(&location, &options).await, &location)?;
            emit(json, &report, output::local)
        }
        ReportCommand::Marine { location, tide } => {
            if tide {
                options.insert("tide".into(), "yes".into());
            }
            let report = finish(client.get_marine(&location, &options).await, &location)?;
            emit(json, &report, output::marine)
        }
        ReportCommand::Ski { location } => {
            let report = finish(client.get_ski(&location, &options).await, &location)?;
            emit(json, &report, output::ski)
        }
        ReportCommand::Past { location, date, enddate } => {
            insert_date_range(&mut options, date, enddate)?;
            let report = finish(client.get_past_local(&location, &options).await, &location)?;
            emit(json, &report, output::past)
        }
        ReportCommand::PastMarine { location, date, enddate, tide } => {
            insert_date_range(&mut options, date, enddate)?;
            if tide {
                options.insert("tide".into(), "yes".into());
            }
            let report = finish(client.get_past_marine(&location, &options).await, &location)?;
            emit(json, &report, output::marine)
        }
        ReportCommand::Search { query, timezone } => {
            if timezone {
                options.insert("timezone".into(), "yes".into());
            }
            let report = finish(client.get_search(&query, &options).await, &query)?;
            emit(json, &report, output::search)
        }
        ReportCommand::Timezone { location } => {
            let report = finish(client.get_time_zone(&location, &options).await, &location)?;
            emit(json, &report, output::time_zone)
        }
    }
}

fn insert_date_range(options: &mut Options, date: NaiveDate, enddate: Option<NaiveDate>) -> anyhow::Result<()> {
    if let Some(end) = enddate {
        if end < date {
            bail!("--enddate {end} is before --date {date}");
        }
        options.insert("enddate".into(), end.format("%Y-%m-%d").to_string());
    }
    options.insert("date".into(), date.format("%Y-%m-%d").to_string());
    Ok(())
}

fn finish<R>(outcome: Outcome<R>, location: &str) -> anyhow::Result<R> {
    outcome
        .into_result()
        .with_context(|| format!("Failed to fetch weather for '{location}'"))
}

fn emit<R: Serialize>(json: bool, report: &R, text: fn(&R)) -> anyhow::Result<()> {
    if json {
        let rendered = serde_json::to_string_pretty(report).context("Failed to render report as JSON")?;
        println!("{rendered}");
    } else {
        text(report);
    }
    Ok(())
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let key = Password::new("World Weather Online API key:")
        .without_confirmation()
        .with_display_mode(PasswordDisplayMode::Masked)
        .prompt()
        .context("Failed to read API key")?;
    if key.trim().is_empty() {
        bail!("API key must not be empty");
    }
    config.set_api_key(key.trim().to_owned());

    config.insecure = Confirm::new("Use plain http instead of https?")
        .with_default(config.insecure)
        .prompt()
        .context("Failed to read transport setting")?;

    config.save()?;
    println!("Saved configuration to {}", Config::config_file_path()?.display());

    Ok(())
}
