use clap::Parser;
use miette::Result;
use wardrobe::cli::{Cli, Commands};

fn main() -> Result<()> {
    // Reset SIGPIPE to default behavior (terminate silently) for proper Unix piping.
    // Without this, piping to `head`, `grep -q`, etc. causes a panic on broken pipe.
    // This is standard practice for CLI tools that output to stdout.
    #[cfg(unix)]
    {
        unsafe {
            libc::signal(libc::SIGPIPE, libc::SIG_DFL);
        }
    }
    // Install miette's fancy error handler for beautiful diagnostics
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))?;

    let cli = Cli::parse();
    let global = cli.global;

    match cli.command {
        Commands::Add(args) => wardrobe::cli::commands::add::run(args, &global),
        Commands::List(args) => wardrobe::cli::commands::list::run(args, &global),
        Commands::Show(args) => wardrobe::cli::commands::show::run(args, &global),
        Commands::Edit(args) => wardrobe::cli::commands::edit::run(args, &global),
        Commands::Rm(args) => wardrobe::cli::commands::rm::run(args, &global),
        Commands::Suggest(args) => wardrobe::cli::commands::suggest::run(args, &global),
        Commands::Completions(args) => wardrobe::cli::commands::completions::run(args),
    }
}
