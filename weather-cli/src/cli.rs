use anyhow::{Context, anyhow};
use chrono::Local;
use clap::{Parser, Subcommand};
use inquire::{Password, PasswordDisplayMode, Text};
use wxfetch_core::{
    Config, LocationConfig, ProviderName, Weather,
    model::{Condition, Temperature},
    provider::fetcher_from_config,
};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "wxfetch", version, about = "Fetch weather from templated provider APIs")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Configure credentials for a specific provider.
    Configure {
        /// Provider id, e.g. "openweathermap" or "weatherbit".
        provider: String,
    },

    /// Show current weather and forecast.
    Show {
        /// Id of a location from the config file. Flags override its values.
        location: Option<String>,

        /// Provider id; defaults to the location's or the configured default.
        #[arg(long)]
        provider: Option<String>,

        #[arg(long, allow_hyphen_values = true)]
        lat: Option<f64>,

        #[arg(long, allow_hyphen_values = true)]
        lon: Option<f64>,

        /// Provider-specific unit system, e.g. "metric", "si" or "M".
        #[arg(long)]
        units: Option<String>,

        #[arg(long)]
        language: Option<String>,
    },

    /// List supported providers and whether they are configured.
    Providers,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure { provider } => configure(&provider),
            Command::Show { location, provider, lat, lon, units, language } => {
                let config = Config::load()?;

                let mut loc = match &location {
                    Some(id) => config
                        .location(id)
                        .cloned()
                        .ok_or_else(|| anyhow!("Unknown location '{id}' in {}", config_path()))?,
                    None => LocationConfig {
                        location_id: "adhoc".into(),
                        ..LocationConfig::default()
                    },
                };
                loc.latitude = lat.or(loc.latitude);
                loc.longitude = lon.or(loc.longitude);
                loc.measurement_units = units.or(loc.measurement_units);
                if let Some(language) = language {
                    loc.language = language;
                }

                let id = match provider {
                    Some(p) => ProviderName::try_from(p.as_str())?,
                    None => config.provider_for_location(&loc)?,
                };

                show(&config, id, &loc).await
            }
            Command::Providers => {
                let config = Config::load()?;
                let default = config.default_provider_id().ok();

                for id in ProviderName::all() {
                    let configured =
                        if config.is_provider_configured(*id) { "configured" } else { "-" };
                    let marker = if default == Some(*id) { " (default)" } else { "" };
                    println!("{id:<20} {configured}{marker}");
                }
                Ok(())
            }
        }
    }
}

fn configure(provider: &str) -> anyhow::Result<()> {
    let id = ProviderName::try_from(provider)?;
    let mut config = Config::load()?;

    let api_key = Password::new(&format!("API key for {id}:"))
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    let api_key2 = Text::new("Secondary key (leave empty if not needed):")
        .prompt()
        .context("Failed to read secondary key")?;
    let api_key2 = Some(api_key2.trim().to_string()).filter(|k| !k.is_empty());

    config.upsert_provider_keys(id, api_key.trim().to_string(), api_key2);
    config.save()?;

    println!("Saved credentials for {id} to {}", config_path());
    Ok(())
}

async fn show(config: &Config, id: ProviderName, location: &LocationConfig) -> anyhow::Result<()> {
    let fetcher = fetcher_from_config(id, config);

    let weather = fetcher.get_weather(location).await?;

    if let Some(error) = &weather.error {
        return Err(anyhow!("{id}: {error}"));
    }

    print_weather(location, &weather);
    Ok(())
}

fn print_weather(location: &LocationConfig, weather: &Weather) {
    println!("{} via {}", location.location_id, weather.provider);
    println!(
        "  now      {}{}",
        format_temperature(&weather.temperature),
        format_condition(&weather.condition)
    );

    if let Some(humidity) = weather.atmosphere.humidity {
        println!("  humidity {humidity:.0}%");
    }
    if let Some(speed) = weather.wind.speed {
        println!("  wind     {speed:.1}");
    }

    for forecast in &weather.forecast {
        let day = forecast.day.map(|d| format!("day +{d}")).unwrap_or_else(|| "day ?".into());
        println!(
            "  {day:<8} {}{}",
            format_temperature(&forecast.temperature),
            format_condition(&forecast.condition)
        );
    }

    if let Some(updated) = weather.condition.last_update {
        println!("  updated  {}", updated.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S"));
    }
}

fn format_temperature(t: &Temperature) -> String {
    match (t.current, t.min, t.max) {
        (Some(cur), _, _) => format!("{cur:.1}°"),
        (None, Some(min), Some(max)) => format!("{min:.1}°..{max:.1}°"),
        (None, None, Some(max)) => format!("max {max:.1}°"),
        (None, Some(min), None) => format!("min {min:.1}°"),
        (None, None, None) => "n/a".to_string(),
    }
}

fn format_condition(c: &Condition) -> String {
    c.text.as_deref().map(|text| format!("  {text}")).unwrap_or_default()
}

fn config_path() -> String {
    Config::config_file_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| "config file".to_string())
}
