//! [`Args`] definitions.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Booking price calculator.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,

    /// Output [`Format`] of the price breakdown.
    #[arg(short, long, value_enum, default_value_t)]
    pub format: Format,

    /// Path to the JSON file with the booking to price.
    pub request: PathBuf,
}

impl Args {
    /// Parses command line arguments.
    ///
    /// # Errors
    ///
    /// Errors if failed to parse command line arguments.
    pub fn parse() -> Result<Self, clap::Error> {
        <Self as Parser>::try_parse()
    }
}

/// Output format of a price breakdown.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum Format {
    /// Aligned human-readable table.
    #[default]
    Text,

    /// JSON document.
    Json,
}
