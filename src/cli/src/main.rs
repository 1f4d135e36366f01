#![warn(clippy::pedantic)]

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use color_eyre::owo_colors::OwoColorize;
use env_logger::TimestampPrecision;
use humancube::{
    AugmentParams, RecordStats, SampleSet, augment, record::load_records,
};
use log::{LevelFilter, info};

/// Curates training data from human Rubik's cube solve reconstructions
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Increase logging verbosity (can be repeated)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    log_level: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Report how many reconstructions are usable
    Stats {
        /// JSON array of reconstructed solves
        data: PathBuf,
    },
    /// Build an augmented sample set from reconstructions
    Augment {
        /// JSON array of reconstructed solves
        data: PathBuf,
        /// Where to write the sample set
        #[arg(short, long)]
        output: PathBuf,
        /// Augmentation parameters in TOML format; flags override it
        #[arg(short, long, value_name = "AUGMENT_CONFIG")]
        config: Option<PathBuf>,
        /// Number of crossover samples to generate
        #[arg(long)]
        crossover: Option<usize>,
        /// Number of last layer cases per F2L solve
        #[arg(long)]
        ll_cases: Option<usize>,
        /// Add samples that start with the cross already built
        #[arg(long)]
        cross_skips: bool,
        /// Add samples that start after the first move
        #[arg(long)]
        first_skips: bool,
        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print the move vocabulary of the usable reconstructions
    Vocab {
        /// JSON array of reconstructed solves
        data: PathBuf,
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

    match cli.command {
        Commands::Stats { data } => {
            println!("{}", RecordStats::of(&load_records(data)?));
        }
        Commands::Augment {
            data,
            output,
            config,
            crossover,
            ll_cases,
            cross_skips,
            first_skips,
            seed,
        } => {
            let mut params = match config {
                Some(path) => AugmentParams::from_toml_file(path)?,
                None => AugmentParams::default(),
            };
            if let Some(crossover) = crossover {
                params.crossover = crossover;
            }
            if let Some(ll_cases) = ll_cases {
                params.ll_cases = ll_cases;
            }
            params.cross_skips |= cross_skips;
            params.first_skips |= first_skips;

            let mut rng = seed.map_or_else(fastrand::Rng::new, fastrand::Rng::with_seed);
            let mut set = SampleSet::load_records(data)?;
            let seed_size = set.len();
            augment(&mut set, &params, &mut rng)?;
            set.save(&output)?;
            info!("Wrote {} samples to {}", set.len(), output.display());
            println!(
                "{} {} samples from {} solves",
                "Saved".green(),
                set.len(),
                seed_size
            );
        }
        Commands::Vocab { data } => {
            let set = SampleSet::load_records(data)?;
            for (index, token) in set.vocabulary().iter() {
                println!("{:>4} {}", index.get().dimmed(), &**token);
            }
        }
    }

    Ok(())
}
