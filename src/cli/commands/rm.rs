//! `wardrobe rm` - delete an item

use clap::Args;
use miette::{IntoDiagnostic, Result};
use std::io::Write;

use crate::cli::commands::{open_store, print_ack};
use crate::cli::GlobalOpts;
use crate::core::forms::FormController;

#[derive(Args)]
pub struct RmArgs {
    /// Item id
    pub id: i64,

    /// Skip the confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

pub fn run(args: RmArgs, global: &GlobalOpts) -> Result<()> {
    let store = open_store(global)?;
    let controller = FormController::new(&store);
    let item = controller.resolve(args.id)?;

    // Confirm if not --yes
    if !args.yes {
        print!("Delete '{}' (id {})? [y/N] ", item.name, item.id);
        std::io::stdout().flush().into_diagnostic()?;
        let mut input = String::new();
        std::io::stdin().read_line(&mut input).into_diagnostic()?;
        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    let response = controller.submit_delete(args.id)?;
    print_ack(&response.ack, global.quiet);

    Ok(())
}
