// bases/download_cli/src/main.rs
mod app;
mod args;
mod output;

use app::App;
use args::Args;
use clap::Parser;
use color_eyre::Result;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let app = App::new(args);

    if let Err(error) = app.run() {
        app.print_error(&error);
        std::process::exit(1);
    }
    Ok(())
}
