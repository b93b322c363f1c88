//! CLI argument definitions using clap derive

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::cli::commands::{
    add::AddArgs,
    completions::CompletionsArgs,
    edit::EditArgs,
    list::ListArgs,
    rm::RmArgs,
    show::ShowArgs,
    suggest::SuggestArgs,
};

#[derive(Parser)]
#[command(name = "wardrobe")]
#[command(author, version, about = "Personal clothing inventory manager")]
#[command(long_about = "A small CLI that keeps a catalog of clothing items in a local SQLite database, with type-ahead suggestions learned from the values you have already stored.")]
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

    /// Catalog database file (default: platform data dir)
    #[arg(long, global = true, env = "WARDROBE_DB")]
    pub db: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add an item to the catalog
    Add(AddArgs),

    /// List catalog items
    List(ListArgs),

    /// Show a single item
    Show(ShowArgs),

    /// Edit an item's fields
    Edit(EditArgs),

    /// Delete an item
    Rm(RmArgs),

    /// Print suggestion lists for type, color, and vibe
    Suggest(SuggestArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Automatically detect based on context (pretty for show, tsv for list)
    #[default]
    Auto,
    /// YAML format (full fidelity)
    Yaml,
    /// Tab-separated values (for piping)
    Tsv,
    /// JSON format (for programming)
    Json,
    /// CSV format (for spreadsheets)
    Csv,
    /// Markdown tables
    Md,
    /// Just IDs, one per line
    Id,
}
