use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use std::{fs, io, path::PathBuf};
use wxpanel_core::{
    Config, CurrentReading, Location, OneCallClient, WeatherSource, bearing_to_compass, format,
    parse,
};

use crate::panel;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "wxpanel", version, about = "Current weather panel for a fixed location")]
pub struct Cli {
    /// Log debug output to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the API key and location, prompting for anything not given.
    Configure {
        #[arg(long)]
        api_key: Option<String>,

        #[arg(long, allow_negative_numbers = true)]
        lat: Option<f64>,

        #[arg(long, allow_negative_numbers = true)]
        lon: Option<f64>,
    },

    /// Fetch current conditions and print the panel.
    Show {
        /// OpenWeather API key; overrides the config file.
        #[arg(long, env = "WXPANEL_API_KEY", hide_env_values = true)]
        api_key: Option<String>,

        #[arg(long, allow_negative_numbers = true, requires = "lon")]
        lat: Option<f64>,

        #[arg(long, allow_negative_numbers = true, requires = "lat")]
        lon: Option<f64>,

        /// Also print the raw response body.
        #[arg(long)]
        raw: bool,

        /// Print the display strings as JSON instead of the panel.
        #[arg(long)]
        json: bool,

        /// Download the condition icon to this path.
        #[arg(long, value_name = "PATH")]
        icon_out: Option<PathBuf>,
    },

    /// Render a saved response body ("-" reads stdin).
    Render {
        file: PathBuf,

        #[arg(long)]
        json: bool,
    },

    /// Print the compass label for a bearing in degrees.
    Compass {
        #[arg(allow_negative_numbers = true)]
        degrees: f64,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure { api_key, lat, lon } => configure(api_key, lat, lon),
            Command::Show { api_key, lat, lon, raw, json, icon_out } => {
                let mut config = Config::load()?;
                if api_key.is_some() {
                    config.api_key = api_key;
                }
                if let (Some(lat), Some(lon)) = (lat, lon) {
                    config.location = Some(Location::new(lat, lon)?);
                }
                show(&config, raw, json, icon_out).await
            }
            Command::Render { file, json } => {
                let body = if file.as_os_str() == "-" {
                    io::read_to_string(io::stdin()).context("Failed to read response from stdin")?
                } else {
                    fs::read_to_string(&file)
                        .with_context(|| format!("Failed to read {}", file.display()))?
                };
                let reading = read_response(&body)?;
                print_display(&reading, json)
            }
            Command::Compass { degrees } => match bearing_to_compass(degrees) {
                Some(label) => {
                    println!("{label}");
                    Ok(())
                }
                None => {
                    bail!("Bearing {degrees} has no compass label (expected 0 <= degrees < 360)")
                }
            },
        }
    }
}

fn configure(api_key: Option<String>, lat: Option<f64>, lon: Option<f64>) -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = match api_key {
        Some(key) => key,
        None => {
            let saved = config.api_key.as_deref().filter(|k| !k.trim().is_empty());
            let mut prompt = inquire::Password::new("OpenWeather API key:").without_confirmation();
            if saved.is_some() {
                prompt = prompt.with_help_message("Leave empty to keep the saved key");
            }
            let entered = prompt.prompt().context("Failed to read API key")?;
            keep_or_replace_key(&entered, saved)
        }
    };
    let latitude = match lat {
        Some(lat) => lat,
        None => prompt_coordinate("Latitude:", config.location.map(|l| l.latitude))?,
    };
    let longitude = match lon {
        Some(lon) => lon,
        None => prompt_coordinate("Longitude:", config.location.map(|l| l.longitude))?,
    };

    config.api_key = Some(api_key.trim().to_string());
    config.location = Some(Location::new(latitude, longitude)?);
    config.require_api_key()?;

    let path = config.save()?;
    tracing::info!(path = %path.display(), "saved configuration");
    println!("Configuration saved to {}", path.display());
    Ok(())
}

/// An empty answer keeps the saved key, if there is one.
fn keep_or_replace_key(entered: &str, saved: Option<&str>) -> String {
    match (entered.trim(), saved) {
        ("", Some(saved)) => saved.to_string(),
        (entered, _) => entered.to_string(),
    }
}

fn prompt_coordinate(message: &str, current: Option<f64>) -> anyhow::Result<f64> {
    let mut prompt =
        inquire::CustomType::<f64>::new(message).with_error_message("Please type a number");
    if let Some(current) = current {
        prompt = prompt.with_default(current);
    }
    prompt.prompt().with_context(|| format!("Failed to read {message}"))
}

async fn show(
    config: &Config,
    raw: bool,
    json: bool,
    icon_out: Option<PathBuf>,
) -> anyhow::Result<()> {
    let location = config.require_location()?;
    let api_key = config.require_api_key()?.to_string();
    let client = OneCallClient::new(api_key, config.endpoints.clone());

    let body = client.fetch_current(&location).await?;
    if raw {
        println!("{body}");
    }

    let reading = read_response(&body)?;
    print_display(&reading, json)?;

    // Second fetch only after the first has been rendered.
    if let Some(path) = icon_out {
        let bytes = client.fetch_icon(&reading.conditions.icon).await?;
        fs::write(&path, bytes)
            .with_context(|| format!("Failed to write icon to {}", path.display()))?;
        println!("Icon saved to {}", path.display());
    }

    Ok(())
}

fn read_response(body: &str) -> anyhow::Result<CurrentReading> {
    parse(body).map_err(|err| {
        tracing::warn!(error = %err, "response could not be parsed");
        anyhow::Error::new(err).context("Weather response could not be displayed")
    })
}

fn print_display(reading: &CurrentReading, json: bool) -> anyhow::Result<()> {
    let display = format(reading);
    if json {
        let out = serde_json::to_string_pretty(&display).context("Failed to serialize display")?;
        println!("{out}");
    } else {
        print!("{}", panel::render(&display));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn show_accepts_negative_longitude() {
        let cli =
            Cli::try_parse_from(["wxpanel", "show", "--lat", "30.22", "--lon", "-95.36"]).unwrap();
        match cli.command {
            Command::Show { lat, lon, .. } => {
                assert_eq!(lat, Some(30.22));
                assert_eq!(lon, Some(-95.36));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn show_requires_both_coordinates() {
        assert!(Cli::try_parse_from(["wxpanel", "show", "--lat", "30.22"]).is_err());
    }

    #[test]
    fn verbose_is_global() {
        let cli = Cli::try_parse_from(["wxpanel", "compass", "185", "-v"]).unwrap();
        assert!(cli.verbose);
    }

    #[tokio::test]
    async fn compass_out_of_range_is_an_error() {
        let cli = Cli::try_parse_from(["wxpanel", "compass", "--", "-5"]).unwrap();
        let err = cli.run().await.unwrap_err();
        assert!(err.to_string().contains("no compass label"));
    }

    #[test]
    fn empty_key_answer_keeps_saved_key() {
        assert_eq!(keep_or_replace_key("", Some("SAVED")), "SAVED");
        assert_eq!(keep_or_replace_key("   ", Some("SAVED")), "SAVED");
        assert_eq!(keep_or_replace_key(" NEW ", Some("SAVED")), "NEW");
        assert_eq!(keep_or_replace_key("NEW", None), "NEW");
        assert_eq!(keep_or_replace_key("", None), "");
    }

    #[test]
    fn unparsable_response_keeps_parse_error() {
        let err = read_response(r#"{"current":{"temp":70}}"#).unwrap_err();
        assert_eq!(
            err.downcast_ref::<wxpanel_core::ParseError>(),
            Some(&wxpanel_core::ParseError::MissingField("feels_like"))
        );
    }
}
