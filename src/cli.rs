use clap::{Args, Parser, Subcommand, ValueEnum};
use log::LevelFilter;

#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity of diagnostic output.
    #[arg(long, default_value = "info")]
    pub log_level: LevelFilter,

    #[command(subcommand)]
    pub command: CliCommands,
}

#[derive(Subcommand)]
pub enum CliCommands {
    /// Check whether a pattern occurs in a single sequence.
    Exists(ExistsCommand),

    /// Index a set of sequences and report those matching a pattern.
    Search(SearchCommand),

    /// Run the built-in demonstration scenarios.
    Demo,
}

#[derive(Args)]
pub struct ExistsCommand {
    /// Sequence of concrete bases (ACGT).
    pub sequence: String,

    /// Pattern in IUPAC nucleotide code.
    pub pattern: String,

    /// Search algorithm to use.
    #[arg(long, value_enum, default_value_t = CliAlgorithm::SlidingWindow)]
    pub algorithm: CliAlgorithm,
}

#[derive(Args)]
pub struct SearchCommand {
    /// Pattern in IUPAC nucleotide code.
    pub pattern: String,

    /// Sequences to index and search.
    #[arg(required = true)]
    pub sequences: Vec<String>,

    /// Length of the index n-grams.
    #[arg(short, long, default_value_t = 4)]
    pub n: usize,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum CliAlgorithm {
    Naive,
    PrefixFunction,
    SlidingWindow,
}
