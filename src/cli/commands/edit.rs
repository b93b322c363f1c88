//! `wardrobe edit` - edit an item's fields

use clap::Args;
use miette::Result;

use crate::cli::commands::{open_store, print_ack};
use crate::cli::prompt;
use crate::cli::GlobalOpts;
use crate::core::catalog::ItemFields;
use crate::core::forms::{FormController, SaveOutcome};

#[derive(Args)]
pub struct EditArgs {
    /// Item id
    pub id: i64,

    /// New name
    #[arg(long, short = 'n')]
    pub name: Option<String>,

    /// New garment type
    #[arg(long = "type", short = 't', value_name = "TYPE")]
    pub kind: Option<String>,

    /// New color
    #[arg(long, short = 'c')]
    pub color: Option<String>,

    /// New vibe
    #[arg(long)]
    pub vibe: Option<String>,

    /// Interactive mode: prompt for each field, pre-filled with current values
    #[arg(long, short = 'i')]
    pub interactive: bool,
}

pub fn run(args: EditArgs, global: &GlobalOpts) -> Result<()> {
    let store = open_store(global)?;
    let controller = FormController::new(&store);
    let current = controller.resolve(args.id)?;

    let fields = if args.interactive {
        let view = controller.view()?;
        let name = prompt::input_required("Name", Some(&current.name))?;
        let kind = prompt::input_suggested("Type", &view.type_options, Some(&current.kind))?;
        let color = prompt::input_suggested("Color", &view.color_options, Some(&current.color))?;
        let vibe = prompt::input_suggested("Vibe", &view.vibe_options, Some(&current.vibe))?;
        ItemFields::new(&name, &kind, &color, &vibe)
    } else {
        // unspecified flags keep the stored values
        ItemFields::new(
            args.name.as_deref().unwrap_or(&current.name),
            args.kind.as_deref().unwrap_or(&current.kind),
            args.color.as_deref().unwrap_or(&current.color),
            args.vibe.as_deref().unwrap_or(&current.vibe),
        )
    };

    let response = controller.submit_save(args.id, fields)?;
    match response.outcome {
        SaveOutcome::Saved(_) => {
            if let Some(ack) = &response.ack {
                print_ack(ack, global.quiet);
            }
        }
        // empty --name "": the submission is dropped without output
        SaveOutcome::Rejected => {}
    }

    Ok(())
}
