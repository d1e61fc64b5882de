use calculator_cli::{Args, init_tracing};
use clap::Parser;
use std::process;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = args.resolve_config()?;
    init_tracing(args.verbose, &config);
    if let Some(path) = &args.config {
        tracing::debug!("Loaded configuration from {}", path.display());
    }

    let stdout = std::io::stdout();
    calculator_cli::run(&args, &config, &mut stdout.lock())
}
