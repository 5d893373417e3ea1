use clap::Parser;
use serde::Deserialize;

use crate::error::Result;

const DEFAULT_CONFIG_PATH: &str = "config/wanderlist.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Path to an alternative dataset JSON; the embedded seed otherwise.
    pub dataset: Option<String>,
    /// Name of the trip to open on start; the most recent trip otherwise.
    pub trip: Option<String>,
    /// Log level for the session log file.
    pub log: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dataset: None,
            trip: None,
            log: "info".to_string(),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "wanderlist", disable_version_flag = true)]
struct Args {
    /// Optional config file path (TOML).
    #[arg(long)]
    config: Option<String>,
    /// Override the dataset JSON path.
    #[arg(long)]
    dataset: Option<String>,
    /// Override the trip to open (by name).
    #[arg(long)]
    trip: Option<String>,
    /// Override the log level.
    #[arg(long)]
    log: Option<String>,
}

pub fn load() -> Result<AppConfig> {
    let args = Args::parse();

    let config_path = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
    let mut builder = config::Config::builder();
    builder = builder.add_source(config::File::with_name(config_path).required(false));
    builder = builder.add_source(config::Environment::with_prefix("WANDERLIST"));
    let mut settings: AppConfig = builder.build()?.try_deserialize()?;

    if let Some(dataset) = args.dataset {
        settings.dataset = Some(dataset);
    }
    if let Some(trip) = args.trip {
        settings.trip = Some(trip);
    }
    if let Some(log) = args.log {
        settings.log = log;
    }

    Ok(settings)
}
