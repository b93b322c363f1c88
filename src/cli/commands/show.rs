//! `wardrobe show` - show a single item

use clap::Args;
use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::commands::{open_store, resolve_format};
use crate::cli::helpers::display_or_dash;
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::forms::FormController;

#[derive(Args)]
pub struct ShowArgs {
    /// Item id
    pub id: i64,
}

pub fn run(args: ShowArgs, global: &GlobalOpts) -> Result<()> {
    let store = open_store(global)?;
    let controller = FormController::new(&store);
    let item = controller.resolve(args.id)?;

    match resolve_format(global) {
        OutputFormat::Yaml => {
            print!("{}", serde_yml::to_string(&item).into_diagnostic()?);
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&item).into_diagnostic()?;
            println!("{}", json);
        }
        OutputFormat::Id => {
            println!("{}", item.id);
        }
        _ => {
            // Pretty format (default)
            println!("{}", style("─".repeat(60)).dim());
            println!("{}: {}", style("ID").bold(), style(item.id).cyan());
            println!("{}: {}", style("Name").bold(), style(&item.name).yellow());
            println!("{}: {}", style("Type").bold(), display_or_dash(&item.kind));
            println!("{}: {}", style("Color").bold(), display_or_dash(&item.color));
            println!("{}: {}", style("Vibe").bold(), display_or_dash(&item.vibe));
            println!("{}", style("─".repeat(60)).dim());
        }
    }

    Ok(())
}
