//! Jukebox Marathon - a birthday-paradox simulation over a song catalog
//!
//! Draws songs uniformly at random (with replacement) from a fixed catalog
//! until one repeats, over many independent trials, then reports per-song
//! play statistics.

mod config;
mod core;
mod error;
mod models;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use crate::config::SimConfig;
use crate::core::{loader, stats, Simulation};
use crate::models::Report;

/// Jukebox Marathon - how many songs play before one repeats?
#[derive(Parser, Debug)]
#[command(name = "jukebox-marathon")]
#[command(version = "0.1.0")]
#[command(about = "Birthday-paradox Monte Carlo simulation over a song catalog")]
struct Args {
    /// Path to the <SEP>-delimited song file
    file: PathBuf,

    /// Number of trials to run
    #[arg(long)]
    trials: Option<usize>,

    /// RNG seed, fixed for reproducibility
    #[arg(long)]
    seed: Option<u64>,

    /// Path to a JSON config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the report as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Suppress the progress bar
    #[arg(long)]
    quiet: bool,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // initialize logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::new(log_level);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .init();

    let config = SimConfig::load(args.config.as_deref())?.with_overrides(args.trials, args.seed);
    config.validate()?;
    info!(
        "Configured for {} trials with seed {}",
        config.trial_count, config.seed
    );

    println!("Loading the jukebox with songs:");
    println!(
        "\tReading songs from {} into jukebox...",
        args.file.display()
    );
    let catalog = loader::load_catalog(&args.file)?;
    println!("\tJukebox is loaded with {} songs", catalog.len());
    println!("\tFirst song in jukebox: {}", catalog.first());
    println!("\tLast song in jukebox: {}", catalog.last());

    println!("Running the simulation. The jukebox starts rockin'!");
    let started = Instant::now();
    let mut rng = StdRng::seed_from_u64(config.seed);
    let counter = Simulation::from_config(&config)
        .with_progress(!args.quiet && !args.json)
        .run(&catalog, &mut rng)?;
    let elapsed = started.elapsed();

    println!("\tPrinting first 5 songs played...");
    for song in catalog.preview(5) {
        println!("\t\t{}", song);
    }
    println!(
        "\tSimulation took {:.3} second/s to run",
        elapsed.as_secs_f64()
    );

    let report = stats::build_report(&catalog, &counter, config.trial_count)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_statistics(&report);
    }

    Ok(())
}

/// Print the statistics block in the classic console format
fn print_statistics(report: &Report) {
    println!("Displaying simulation statistics:");
    println!("\tNumber of simulations run: {}", report.trial_count);
    println!("\tTotal number of songs played: {}", report.total_plays);
    println!(
        "\tAverage number of songs played per simulation to get duplicate: {}",
        report.average_plays
    );
    println!(
        "\tMost played song: \"{}\" by \"{}\"",
        report.most_played.song.title, report.most_played.song.artist
    );
    println!(
        "\tAll songs alphabetically by \"{}\":",
        report.most_played.song.artist
    );
    for played in &report.top_artist_songs {
        println!("\t\t\"{}\" with {} plays", played.song.title, played.plays);
    }
}
