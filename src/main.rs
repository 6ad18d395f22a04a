use std::io::{self, BufWriter, Write};

use clap::Parser;
use cli::{Cli, CliCommands, ScoreCommand, SearchCommand};
use dna::{Base, DnaSequence};
use error::Result;
use input::{read_sequence_file, validate_motifs};
use log::info;
use motif_set::MotifSet;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;
use sampler::RestartDriver;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

mod cli;
mod count_matrix;
mod dna;
mod error;
mod input;
mod motif_set;
mod profile;
mod sampler;

fn main() {
    let cli = Cli::parse();

    if let Err(error) = TermLogger::init(
        cli.log_level.into(),
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("Could not initialise logging: {error}");
    }

    match cli.command {
        CliCommands::Search(search_command) => search(search_command),
        CliCommands::Score(score_command) => score(score_command),
    }
    .unwrap_or_else(|error| {
        eprintln!("Error: {error}");
        std::process::exit(1);
    });
}

fn search(search_command: SearchCommand) -> Result<()> {
    // Load and verify sequences.
    let sequences = read_sequence_file(&search_command.input)?;
    let driver = RestartDriver::new(&sequences, search_command.search_parameters())?;
    let parameters = driver.parameters();
    info!(
        "Searching for motifs of length {} in {} sequences of length {}",
        parameters.motif_length,
        sequences.len(),
        sequences[0].len(),
    );

    // Initialise random number generator.
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(search_command.random_seed);

    let best = driver.run(&mut rng);

    let mut output = BufWriter::new(io::stdout().lock());
    for motif in best.motif_set().motifs() {
        if search_command.show_offsets {
            writeln!(output, "{}\t{motif}", motif.offset())?;
        } else {
            writeln!(output, "{motif}")?;
        }
    }
    let consensus: DnaSequence = best.motif_set().counts().consensus().into_iter().collect();
    writeln!(output, "consensus: {consensus}")?;
    writeln!(output, "score: {}", best.score())?;
    output.flush()?;

    Ok(())
}

fn score(score_command: ScoreCommand) -> Result<()> {
    let motifs = read_sequence_file(&score_command.input)?;
    let motif_length = validate_motifs(&motifs)?;
    let motif_set = MotifSet::from_offsets(&motifs, std::iter::repeat(0), motif_length);

    let counts = motif_set.counts();
    info!(
        "Scoring {} motifs of length {motif_length}",
        counts.motif_count()
    );
    let profile = if score_command.normalize {
        motif_set.profile().normalized()
    } else {
        motif_set.profile()
    };

    let mut output = BufWriter::new(io::stdout().lock());
    let consensus: DnaSequence = counts.consensus().into_iter().collect();
    writeln!(output, "consensus: {consensus}")?;
    writeln!(output, "score: {}", counts.score())?;

    write!(output, "position")?;
    for base in Base::ALL {
        write!(output, "\t{base}")?;
    }
    writeln!(output, "\ttotal")?;
    for (position, (count_row, probability_row)) in
        counts.rows().iter().zip(profile.rows()).enumerate()
    {
        write!(output, "{position}")?;
        for (count, probability) in count_row.iter().zip(probability_row) {
            write!(output, "\t{count}:{probability:.4}")?;
        }
        writeln!(output, "\t{:.4}", profile.row_total(position))?;
    }
    output.flush()?;

    Ok(())
}
