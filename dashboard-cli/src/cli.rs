use anyhow::{Context, bail};
use clap::{ArgAction, Parser, Subcommand};
use dashboard_core::{
    Config, HttpTravelSource, Resource, fetch::endpoint_url, get_dashboard_data,
};
use inquire::Text;
use tracing::info;

use crate::output;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "dashboard", version, about = "City travel dashboard CLI")]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show destination, weather and airport for a city.
    Show {
        /// City to search for; defaults to the configured default query.
        query: Option<String>,

        /// Server hosting the travel endpoints.
        #[arg(long, env = "DASHBOARD_BASE_URL")]
        base_url: Option<String>,

        /// Print the record as JSON instead of prose.
        #[arg(long)]
        json: bool,
    },

    /// Interactively set the base URL and default query.
    Configure,

    /// Print the location of the config file.
    ConfigPath,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Show { query, base_url, json } => {
                let config = Config::load()?.with_base_url(base_url);
                show(&config, query.as_deref(), json).await
            }
            Command::Configure => configure(),
            Command::ConfigPath => {
                println!("{}", Config::config_file_path()?.display());
                Ok(())
            }
        }
    }
}

async fn show(config: &Config, query: Option<&str>, json: bool) -> anyhow::Result<()> {
    let query = config.resolve_query(query);
    let source = HttpTravelSource::from_config(config);
    info!(%query, base_url = source.base_url(), "fetching dashboard");

    let data = get_dashboard_data(&source, &query).await;
    info!("Dashboard data: {data:?}");

    let Some(city) = data else {
        bail!("City '{query}' is not available in the database");
    };

    if json {
        println!("{}", output::to_json(&city)?);
    } else {
        print!("{}", output::describe(&city));
    }

    Ok(())
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let base_url = Text::new("Base URL of the travel API:")
        .with_default(&config.base_url)
        .prompt()
        .context("Failed to read base URL")?;
    endpoint_url(&base_url, Resource::Destinations, "")?;

    let default_query = Text::new("Default city to search for:")
        .with_default(&config.default_query)
        .prompt()
        .context("Failed to read default query")?;

    config.base_url = base_url.trim().to_string();
    config.default_query = default_query.trim().to_string();
    config.save()?;

    println!("Saved configuration to {}", Config::config_file_path()?.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn show_accepts_optional_query_and_flags() {
        let cli = Cli::try_parse_from([
            "dashboard",
            "-vv",
            "show",
            "cape town",
            "--base-url",
            "http://127.0.0.1:9",
            "--json",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        match cli.command {
            Command::Show { query, base_url, json } => {
                assert_eq!(query.as_deref(), Some("cape town"));
                assert_eq!(base_url.as_deref(), Some("http://127.0.0.1:9"));
                assert!(json);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[tokio::test]
    async fn show_reports_missing_city_when_server_is_down() {
        let config = Config { base_url: "http://127.0.0.1:9".into(), ..Config::default() };

        let err = show(&config, Some("atlantis"), false).await.unwrap_err();

        assert_eq!(err.to_string(), "City 'atlantis' is not available in the database");
    }
}
