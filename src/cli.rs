use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use log::LevelFilter;

use crate::sampler::{SearchParameters, WindowSelection};

#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    /// The amount of logging to write to stderr.
    #[arg(long, global = true, value_enum, default_value_t = CliLogLevel::Info)]
    pub log_level: CliLogLevel,

    #[command(subcommand)]
    pub command: CliCommands,
}

#[derive(Subcommand)]
pub enum CliCommands {
    /// Search for the best motif set in a file of equal-length DNA sequences.
    Search(SearchCommand),

    /// Print the consensus, score and profile of a file of motifs.
    Score(ScoreCommand),
}

#[derive(Args)]
pub struct SearchCommand {
    /// A plain-text file with one DNA sequence per line.
    #[arg(long, short)]
    pub input: PathBuf,

    /// The length of the motif.
    #[arg(short, long = "motif-length")]
    pub k: usize,

    /// The number of sampling steps per restart.
    #[arg(long, short = 'n', default_value_t = SearchParameters::DEFAULT_ITERATIONS)]
    pub iterations: usize,

    /// The number of independent restarts.
    #[arg(long, short, default_value_t = SearchParameters::DEFAULT_REPEATS)]
    pub repeats: usize,

    /// The seed of the random number generator.
    #[arg(long, default_value_t = 0)]
    pub random_seed: u64,

    /// How the window of the left-out sequence is chosen in each step.
    #[arg(long, value_enum, default_value_t = CliWindowSelection::ArgMax)]
    pub selection: CliWindowSelection,

    /// Compute window probabilities in log space, for long motifs.
    #[arg(long)]
    pub log_space: bool,

    /// Prefix each motif with its offset in its sequence.
    #[arg(long)]
    pub show_offsets: bool,
}

#[derive(Args)]
pub struct ScoreCommand {
    /// A plain-text file with one motif per line.
    #[arg(long, short)]
    pub input: PathBuf,

    /// Rescale each profile row to sum to one.
    #[arg(long)]
    pub normalize: bool,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum CliWindowSelection {
    /// Take the most probable window.
    #[value(name = "argmax")]
    ArgMax,
    /// Draw a window weighted by its probability (textbook Gibbs sampling).
    Weighted,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum CliLogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LevelFilter {
    fn from(log_level: CliLogLevel) -> Self {
        match log_level {
            CliLogLevel::Off => LevelFilter::Off,
            CliLogLevel::Error => LevelFilter::Error,
            CliLogLevel::Warn => LevelFilter::Warn,
            CliLogLevel::Info => LevelFilter::Info,
            CliLogLevel::Debug => LevelFilter::Debug,
            CliLogLevel::Trace => LevelFilter::Trace,
        }
    }
}

impl From<CliWindowSelection> for WindowSelection {
    fn from(selection: CliWindowSelection) -> Self {
        match selection {
            CliWindowSelection::ArgMax => WindowSelection::ArgMax,
            CliWindowSelection::Weighted => WindowSelection::Weighted,
        }
    }
}

impl SearchCommand {
    pub fn search_parameters(&self) -> SearchParameters {
        let mut parameters = SearchParameters::new(self.k);
        parameters.iterations = self.iterations;
        parameters.repeats = self.repeats;
        parameters.selection = self.selection.into();
        parameters.log_space = self.log_space;
        parameters
    }
}
