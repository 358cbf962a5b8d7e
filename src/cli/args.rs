//! CLI argument definitions using clap derive

use clap::{Parser, Subcommand, ValueEnum};

use crate::cli::commands::{
    edit::EditArgs, history::HistoryArgs, import::ImportArgs, init::InitArgs, list::ListArgs,
    new::NewArgs, show::ShowArgs, stats::StatsArgs, update::UpdateArgs,
};

#[derive(Parser)]
#[command(name = "mvd")]
#[command(author, version, about = "Media Vehicle Directory")]
#[command(
    long_about = "A Unix-style toolkit for browsing and editing media vehicle advertising listings as plain text files."
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(clap::Args, Clone, Debug)]
pub struct GlobalOpts {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "auto")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new MVD directory project
    Init(InitArgs),

    /// Create a new media vehicle listing
    New(NewArgs),

    /// List vehicles with search, filtering and sorting
    List(ListArgs),

    /// Show a vehicle's details
    Show(ShowArgs),

    /// Apply field changes to a vehicle, recording a version entry
    Update(UpdateArgs),

    /// Edit a vehicle file in your editor, recording a version entry
    Edit(EditArgs),

    /// Show a vehicle's version history
    History(HistoryArgs),

    /// Directory-wide statistics
    Stats(StatsArgs),

    /// Bulk-import vehicles from a CSV file
    Import(ImportArgs),
}

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pick a sensible format per command
    Auto,
    /// Aligned columns for terminals
    Tsv,
    Json,
    Yaml,
    Csv,
    /// Markdown table
    Md,
    /// IDs only, one per line
    Id,
}
