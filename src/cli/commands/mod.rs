//! CLI command implementations

pub mod add;
pub mod completions;
pub mod edit;
pub mod list;
pub mod rm;
pub mod show;
pub mod suggest;

use clap::ValueEnum;
use console::style;
use miette::Result;

use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::catalog::CatalogStore;
use crate::core::config::Config;
use crate::core::forms::{Ack, AckKind};

/// Open the catalog honoring `--db`, `WARDROBE_DB`, and the config file
pub(crate) fn open_store(global: &GlobalOpts) -> Result<CatalogStore> {
    let config = Config::load();
    let path = config.resolve_db_path(global.db.as_deref());
    CatalogStore::open(&path)
}

/// Resolve `auto` against the configured default format
pub(crate) fn resolve_format(global: &GlobalOpts) -> OutputFormat {
    if global.format != OutputFormat::Auto {
        return global.format;
    }
    Config::load()
        .default_format
        .as_deref()
        .and_then(|s| OutputFormat::from_str(s, true).ok())
        .unwrap_or(OutputFormat::Auto)
}

/// Print an acknowledgment line unless `--quiet`
pub(crate) fn print_ack(ack: &Ack, quiet: bool) {
    if quiet {
        return;
    }
    let prefix = match ack.kind {
        AckKind::Success => style("✓").green().bold(),
        AckKind::Warning => style("!").yellow().bold(),
    };
    println!("{} {}", prefix, ack.message);
}
