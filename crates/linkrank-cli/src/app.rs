//! CLI argument definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "linkrank")]
#[command(
    author,
    version,
    about = "Rank the pages of an HTML corpus by link structure"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "cli")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Estimate page ranks for a corpus
    Rank(RankArgs),

    /// Show the normalized link graph of a corpus
    Links(LinksArgs),
}

#[derive(Args)]
pub struct RankArgs {
    /// Corpus directory of HTML pages
    pub corpus: PathBuf,

    /// Damping factor in (0, 1)
    #[arg(short, long)]
    pub damping: Option<f64>,

    /// Random-walk sample count
    #[arg(short = 'n', long)]
    pub samples: Option<usize>,

    /// Convergence tolerance for the iterative estimator
    #[arg(long)]
    pub tolerance: Option<f64>,

    /// Sweep bound for the iterative estimator
    #[arg(long)]
    pub max_iterations: Option<usize>,

    /// Estimator to run
    #[arg(short, long, value_enum, default_value = "both")]
    pub method: RankMethod,
}

#[derive(Args)]
pub struct LinksArgs {
    /// Corpus directory of HTML pages
    pub corpus: PathBuf,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RankMethod {
    Both,
    Sample,
    Iterate,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Cli,
    Json,
    Csv,
}
