use crate::logging::consts::DEFAULT_LOG_FILTER;
use crate::search::consts::DEFAULT_GEOCODER_URL;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use url::Url;

pub mod commands;

#[derive(Debug, Parser)]
#[command(version, about = "Drop pins on a map and keep them between runs.")]
pub struct Args {
    /// JSON file the pins are kept in.
    #[arg(long)]
    #[arg(default_value = "pins.json")]
    pub store: PathBuf,
    #[arg(long)]
    #[arg(default_value = DEFAULT_LOG_FILTER)]
    pub log_filter: String,
    /// Base URL of the Nominatim instance used for place search.
    #[arg(long)]
    #[arg(default_value = DEFAULT_GEOCODER_URL)]
    pub geocoder_url: Url,
    #[arg(long)]
    #[arg(default_value = concat!("pinmap/", env!("CARGO_PKG_VERSION")))]
    pub user_agent: String,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the saved pins, one JSON record per line.
    List,
    /// Save a pin.
    Add {
        #[arg(long, allow_negative_numbers = true, value_parser = finite_degrees)]
        lat: f64,
        #[arg(long, allow_negative_numbers = true, value_parser = finite_degrees)]
        lng: f64,
        #[arg(long)]
        label: Option<String>,
    },
    /// Delete every saved pin.
    Clear {
        /// Confirm the deletion.
        #[arg(long)]
        yes: bool,
    },
    /// Interactive map session.
    Shell {
        /// NDJSON file of `{"latitude": .., "longitude": ..}` fixes replayed as location updates.
        #[arg(long)]
        location_feed: Option<PathBuf>,
        #[arg(long)]
        #[arg(default_value_t = 1000)]
        feed_interval_ms: u64,
    },
}

fn finite_degrees(value: &str) -> Result<f64, String> {
    value
        .parse::<f64>()
        .ok()
        .filter(|degrees| degrees.is_finite())
        .ok_or_else(|| format!("`{value}` is not a finite number of degrees"))
}
