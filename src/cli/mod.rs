use clap::builder::RangedU64ValueParser;
use clap::{Parser, Subcommand};
use num_bigint::BigInt;

use crate::config::Config;

#[derive(Parser)]
#[command(name = "rexplode", version, about = "Enumerate the strings a regular expression matches")]
#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct Cli {
    /// Ceiling for the unbounded end of `*`, `+` and `{m,}` (overrides config)
    #[arg(long, global = true, value_parser = clap::value_parser!(u32).range(1..))]
    pub max_repeat: Option<u32>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Settings given on the command line, as the topmost config layer.
    pub fn overrides(&self) -> Config {
        let (seed, limit) = match &self.command {
            Commands::All(args) => (None, args.limit),
            Commands::Random(args) => (args.seed, None),
            Commands::Count(_) | Commands::Index(_) => (None, None),
        };
        Config {
            max_repeat: self.max_repeat,
            seed,
            limit,
        }
    }
}

#[derive(Subcommand)]
#[cfg_attr(test, derive(Debug, PartialEq))]
pub enum Commands {
    /// Print every matching string in enumeration order
    All(AllArgs),
    /// Print the number of matching strings
    Count(CountArgs),
    /// Print uniformly sampled matching strings
    Random(RandomArgs),
    /// Print the strings at the given enumeration positions
    Index(IndexArgs),
}

#[derive(clap::Args)]
#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct AllArgs {
    /// Pattern to enumerate
    pub pattern: String,

    /// Stop after this many strings
    #[arg(long, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    pub limit: Option<usize>,
}

#[derive(clap::Args)]
#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct CountArgs {
    /// Pattern to count
    pub pattern: String,
}

#[derive(clap::Args)]
#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct RandomArgs {
    /// Pattern to sample from
    pub pattern: String,

    /// Number of samples to draw
    #[arg(short = 'n', long, default_value_t = 1)]
    pub samples: usize,

    /// Seed for reproducible sampling
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(clap::Args)]
#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct IndexArgs {
    /// Pattern to index into
    pub pattern: String,

    /// Zero-based positions in enumeration order
    #[arg(required = true, allow_negative_numbers = true)]
    pub indices: Vec<BigInt>,
}
