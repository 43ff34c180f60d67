use clap::Parser;
use comicscript::cli::{Cli, Commands, Context};
use comicscript::output::Printer;
use miette::Result;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = cli.config.as_deref();
    match cli.command {
        Commands::Parse(args) => comicscript::cli::parse::run(args, &Context::load(config)?)?,
        Commands::Check(args) => comicscript::cli::check::run(args, &Context::load(config)?)?,
        Commands::Prompt(args) => comicscript::cli::prompt::run(args, &Context::load(config)?)?,
        Commands::Convert(args) => comicscript::cli::convert::run(args, &Context::load(config)?)?,
        Commands::Init(args) => comicscript::cli::init::run(args, &Printer::new())?,
        Commands::Completions(args) => comicscript::cli::completions::run(args)?,
    }

    Ok(())
}

/// Log to stderr. `RUST_LOG` wins; otherwise warnings, or debug with `-v`.
fn init_logging(verbose: bool) {
    let default = if verbose { "comicscript=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
