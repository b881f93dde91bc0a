#![warn(clippy::pedantic)]

mod config;
mod render;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use color_eyre::eyre::eyre;
use cube_core::{Cube, invert_sequence};
use env_logger::TimestampPrecision;
use itertools::Itertools;
use log::{LevelFilter, info};
use owo_colors::OwoColorize;

use config::CliConfig;
use render::Renderer;

/// Scrambles and displays a 3x3x3 cube
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The configuration file to use, in TOML format.
    #[arg(long, short = 'c', value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (can be repeated)
    #[arg(short, long, action = ArgAction::Count)]
    log_level: u8,

    /// Print facelet letters instead of colors
    #[arg(long)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a solved cube.
    Show,
    /// Scramble a solved cube with random quarter turns and print it.
    Scramble {
        /// How many quarter turns to apply. Defaults to the configured length.
        #[arg(short = 'n', long)]
        length: Option<usize>,
        /// Seed for the move generator, for reproducible scrambles.
        #[arg(short, long)]
        seed: Option<u64>,
        /// Undo the scramble afterwards and check that the cube is solved again.
        #[arg(long)]
        verify: bool,
    },
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(match cli.log_level {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .format_timestamp(Some(TimestampPrecision::Millis))
        .init();

    let mut config = match &cli.config {
        Some(path) => CliConfig::load(path)?,
        None => CliConfig::default(),
    };
    if cli.no_color {
        config.color = false;
    }
    info!("Using configuration {config:?}");

    let renderer = Renderer::new(&config);

    match cli.command {
        Commands::Show => print!("{}", renderer.render(&Cube::new())),
        Commands::Scramble {
            length,
            seed,
            verify,
        } => {
            let length = length.unwrap_or(config.scramble_length);
            let mut rng = match seed.or(config.seed) {
                Some(seed) => fastrand::Rng::with_seed(seed),
                None => fastrand::Rng::new(),
            };

            let mut cube = Cube::new();
            let moves = cube.scramble(length, &mut rng);
            println!("{}", moves.iter().join(" "));
            print!("{}", renderer.render(&cube));

            if verify {
                cube.apply_all(&invert_sequence(&moves));
                if !cube.is_solved() {
                    return Err(eyre!("Undoing the scramble did not restore a solved cube"));
                }
                eprintln!("{}", "Undoing the scramble restored a solved cube".green());
            }
        }
    }

    Ok(())
}
