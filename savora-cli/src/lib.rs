//! Command-line front end for the Savora recommendation pipeline.
//!
//! Loads a JSON array of places, applies the business filters, and prints
//! a ranked (or randomly ordered) shortlist as JSON. Scoring runs
//! anonymously against a great-circle travel-time estimate, so the tool
//! works without any network access.
#![forbid(unsafe_code)]

mod estimate;

pub use estimate::GreatCircleDurations;

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use geo::Coord;
use savora_core::Place;
use savora_scorer::{pipeline, FilterOptions, UnregisteredScorer};
use thiserror::Error;

/// Run the Savora CLI with the current process arguments and environment.
///
/// # Errors
///
/// Returns a [`CliError`] when argument parsing fails, the places file
/// cannot be read or decoded, or the shortlist cannot be rendered.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Recommend(args) => run_recommend(&args),
    }
}

fn run_recommend(args: &RecommendArgs) -> Result<(), CliError> {
    let places = load_places(&args.places)?;
    let shortlist = build_shortlist(places, args);
    let rendered = serde_json::to_string_pretty(&shortlist)
        .map_err(|source| CliError::RenderOutput { source })?;
    println!("{rendered}");
    Ok(())
}

fn build_shortlist(places: Vec<Place>, args: &RecommendArgs) -> Vec<Place> {
    let options = FilterOptions::new(args.min_rating)
        .with_require_website(args.require_website)
        .with_dedupe_branches(args.dedupe_branches);
    if args.random {
        pipeline::recommend_random(places, &options, args.limit)
    } else {
        let durations = GreatCircleDurations::with_speed(args.average_speed_kmh);
        let scorer = UnregisteredScorer::new(Arc::new(durations));
        let location = Coord {
            x: args.longitude,
            y: args.latitude,
        };
        pipeline::recommend(places, location, &scorer, &options, args.limit)
    }
}

fn load_places(path: &PathBuf) -> Result<Vec<Place>, CliError> {
    let text = fs::read_to_string(path).map_err(|source| CliError::ReadPlaces {
        path: path.clone(),
        source,
    })?;
    parse_places(&text).map_err(|source| CliError::ParsePlaces {
        path: path.clone(),
        source,
    })
}

fn parse_places(text: &str) -> Result<Vec<Place>, serde_json::Error> {
    serde_json::from_str(text)
}

#[derive(Debug, Parser)]
#[command(
    name = "savora",
    about = "Rank and shortlist places from a JSON candidate list",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Produce a shortlist from a JSON array of places.
    Recommend(RecommendArgs),
}

/// CLI arguments for the `recommend` subcommand.
#[derive(Debug, Clone, Parser)]
#[command(
    long_about = "Read places from a JSON file, filter them by rating, web \
                 presence, and branch duplication, then print the top of \
                 the scored ordering. Flags can also come from SAVORA_* \
                 environment variables.",
    about = "Produce a shortlist from a JSON array of places"
)]
struct RecommendArgs {
    /// Path to the JSON array of places.
    #[arg(long, value_name = "path", env = "SAVORA_PLACES")]
    places: PathBuf,
    /// Lowest acceptable rating.
    #[arg(long, value_name = "rating", default_value_t = 1.0, env = "SAVORA_MIN_RATING")]
    min_rating: f32,
    /// Maximum number of places in the shortlist.
    #[arg(long, value_name = "count", default_value_t = 10, env = "SAVORA_LIMIT")]
    limit: usize,
    /// Drop places with neither a website nor a provider page.
    #[arg(long, env = "SAVORA_REQUIRE_WEBSITE")]
    require_website: bool,
    /// Keep only the first-seen place per exact name.
    #[arg(long, env = "SAVORA_DEDUPE_BRANCHES")]
    dedupe_branches: bool,
    /// Shuffle the survivors instead of scoring them.
    #[arg(long)]
    random: bool,
    /// User longitude in degrees.
    #[arg(
        long,
        value_name = "degrees",
        default_value_t = 0.0,
        allow_negative_numbers = true,
        env = "SAVORA_LONGITUDE"
    )]
    longitude: f64,
    /// User latitude in degrees.
    #[arg(
        long,
        value_name = "degrees",
        default_value_t = 0.0,
        allow_negative_numbers = true,
        env = "SAVORA_LATITUDE"
    )]
    latitude: f64,
    /// Average driving speed for the travel-time estimate.
    #[arg(
        long,
        value_name = "kmh",
        default_value_t = 30.0,
        env = "SAVORA_AVERAGE_SPEED_KMH"
    )]
    average_speed_kmh: f64,
}

/// Errors emitted by the Savora CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// The places file could not be read from disk.
    #[error("failed to read places from {path:?}: {source}")]
    ReadPlaces {
        /// Path the CLI attempted to read.
        path: PathBuf,
        /// Underlying filesystem error.
        source: std::io::Error,
    },
    /// The places file is not a valid JSON array of places.
    #[error("failed to parse places from {path:?}: {source}")]
    ParsePlaces {
        /// Path the CLI attempted to parse.
        path: PathBuf,
        /// Underlying JSON error.
        source: serde_json::Error,
    },
    /// The shortlist could not be serialised for output.
    #[error("failed to render the shortlist: {source}")]
    RenderOutput {
        /// Underlying JSON error.
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests;
