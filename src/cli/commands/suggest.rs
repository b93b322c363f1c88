//! `wardrobe suggest` - print suggestion lists

use clap::{Args, ValueEnum};
use miette::Result;
use tabled::{builder::Builder, settings::Style};

use crate::cli::commands::open_store;
use crate::cli::GlobalOpts;
use crate::core::catalog::SuggestField;

#[derive(Args)]
pub struct SuggestArgs {
    /// Field to list; omit for a combined table of all three
    #[arg(value_enum)]
    pub field: Option<FieldArg>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum FieldArg {
    Type,
    Color,
    Vibe,
}

impl From<FieldArg> for SuggestField {
    fn from(field: FieldArg) -> Self {
        match field {
            FieldArg::Type => SuggestField::Type,
            FieldArg::Color => SuggestField::Color,
            FieldArg::Vibe => SuggestField::Vibe,
        }
    }
}

pub fn run(args: SuggestArgs, global: &GlobalOpts) -> Result<()> {
    let store = open_store(global)?;

    // One field: plain list, one value per line, for piping
    if let Some(field) = args.field {
        for value in store.suggestions(field.into())? {
            println!("{}", value);
        }
        return Ok(());
    }

    let types = store.suggestions(SuggestField::Type)?;
    let colors = store.suggestions(SuggestField::Color)?;
    let vibes = store.suggestions(SuggestField::Vibe)?;
    let rows = types.len().max(colors.len()).max(vibes.len());

    let mut builder = Builder::default();
    builder.push_record(["Type", "Color", "Vibe"]);
    for i in 0..rows {
        builder.push_record([
            types.get(i).map(String::as_str).unwrap_or(""),
            colors.get(i).map(String::as_str).unwrap_or(""),
            vibes.get(i).map(String::as_str).unwrap_or(""),
        ]);
    }

    let table = builder.build().with(Style::markdown()).to_string();
    println!("{}", table);

    Ok(())
}
