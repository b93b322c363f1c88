//! `wardrobe list` - list catalog items

use clap::Args;
use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::commands::{open_store, resolve_format};
use crate::cli::helpers::{display_or_dash, escape_csv, truncate_str};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::catalog::WardrobeItem;
use crate::core::forms::FormController;

#[derive(Args)]
pub struct ListArgs {
    /// Print only the number of items
    #[arg(long)]
    pub count: bool,
}

pub fn run(args: ListArgs, global: &GlobalOpts) -> Result<()> {
    let store = open_store(global)?;

    if args.count {
        println!("{}", store.count()?);
        return Ok(());
    }

    let controller = FormController::new(&store);
    let view = controller.view()?;

    let format = match resolve_format(global) {
        OutputFormat::Auto => OutputFormat::Tsv,
        f => f,
    };

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&view.items).into_diagnostic()?;
            println!("{}", json);
        }
        OutputFormat::Yaml => {
            print!("{}", serde_yml::to_string(&view.items).into_diagnostic()?);
        }
        OutputFormat::Csv => {
            println!("id,name,type,color,vibe");
            for item in &view.items {
                println!(
                    "{},{},{},{},{}",
                    item.id,
                    escape_csv(&item.name),
                    escape_csv(&item.kind),
                    escape_csv(&item.color),
                    escape_csv(&item.vibe)
                );
            }
        }
        OutputFormat::Tsv => {
            if view.items.is_empty() {
                println!("No items found.");
                return Ok(());
            }

            print_table(&view.items);
        }
        OutputFormat::Id => {
            for item in &view.items {
                println!("{}", item.id);
            }
        }
        OutputFormat::Md => {
            println!("| ID | Name | Type | Color | Vibe |");
            println!("|---|---|---|---|---|");
            for item in &view.items {
                println!(
                    "| {} | {} | {} | {} | {} |",
                    item.id, item.name, item.kind, item.color, item.vibe
                );
            }
        }
        OutputFormat::Auto => unreachable!(),
    }

    Ok(())
}

fn print_table(items: &[WardrobeItem]) {
    println!(
        "{:<6} {:<28} {:<12} {:<12} {:<12}",
        style("ID").bold(),
        style("NAME").bold(),
        style("TYPE").bold(),
        style("COLOR").bold(),
        style("VIBE").bold()
    );
    println!("{}", "-".repeat(75));

    for item in items {
        println!(
            "{:<6} {:<28} {:<12} {:<12} {:<12}",
            item.id,
            truncate_str(&item.name, 28),
            truncate_str(display_or_dash(&item.kind), 12),
            truncate_str(display_or_dash(&item.color), 12),
            truncate_str(display_or_dash(&item.vibe), 12)
        );
    }

    println!();
    println!("{} item(s) found", style(items.len()).cyan());
}
