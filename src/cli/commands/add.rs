//! `wardrobe add` - add an item to the catalog

use clap::Args;
use console::style;
use miette::{IntoDiagnostic, Result};
use std::io::Write;

use crate::cli::commands::{open_store, print_ack};
use crate::cli::prompt;
use crate::cli::GlobalOpts;
use crate::core::catalog::ItemFields;
use crate::core::forms::{AddOutcome, FormController};

#[derive(Args)]
pub struct AddArgs {
    /// Item name
    #[arg(long, short = 'n')]
    pub name: Option<String>,

    /// Garment type (e.g. Top, Bottom)
    #[arg(long = "type", short = 't', value_name = "TYPE")]
    pub kind: Option<String>,

    /// Color
    #[arg(long, short = 'c')]
    pub color: Option<String>,

    /// Vibe (e.g. Casual, Formal)
    #[arg(long)]
    pub vibe: Option<String>,

    /// Interactive mode: prompt for each field with suggestions
    #[arg(long, short = 'i')]
    pub interactive: bool,
}

pub fn run(args: AddArgs, global: &GlobalOpts) -> Result<()> {
    let store = open_store(global)?;
    let controller = FormController::new(&store);

    if args.interactive {
        return run_interactive(&controller, global);
    }

    let name = args
        .name
        .ok_or_else(|| miette::miette!("Name is required (use --name or -i for interactive)"))?;

    let fields = ItemFields::new(
        &name,
        args.kind.as_deref().unwrap_or(""),
        args.color.as_deref().unwrap_or(""),
        args.vibe.as_deref().unwrap_or(""),
    );

    let response = controller.submit_add(fields)?;
    match response.outcome {
        AddOutcome::Added(item) => {
            if let Some(ack) = &response.ack {
                print_ack(ack, global.quiet);
            }
            if !global.quiet {
                println!("  id: {}", style(item.id).cyan());
            }
        }
        // empty --name: the submission is dropped without output
        AddOutcome::Rejected => {}
    }

    Ok(())
}

fn run_interactive(controller: &FormController, global: &GlobalOpts) -> Result<()> {
    loop {
        let view = controller.view()?;

        println!("{}", style("Add a wardrobe item").bold());

        // re-prompts while empty, so the controller never sees a blank name
        let name = prompt::input_required("Name", None)?;
        let kind = prompt::input_suggested("Type", &view.type_options, None)?;
        let color = prompt::input_suggested("Color", &view.color_options, None)?;
        let vibe = prompt::input_suggested("Vibe", &view.vibe_options, None)?;

        let response = controller.submit_add(ItemFields::new(&name, &kind, &color, &vibe))?;
        if let Some(ack) = &response.ack {
            print_ack(ack, global.quiet);
        }

        print!("Add another item? [y/N] ");
        std::io::stdout().flush().into_diagnostic()?;
        let mut input = String::new();
        std::io::stdin().read_line(&mut input).into_diagnostic()?;
        if !input.trim().eq_ignore_ascii_case("y") {
            break;
        }
        println!();
    }

    Ok(())
}
