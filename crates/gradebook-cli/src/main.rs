//! gradebook CLI — prints the student score report.

use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "gradebook", version, about = "Student score report")]
struct Cli {
    /// Output format: text, json, markdown
    #[arg(long, default_value = "text")]
    format: String,

    /// Skip the bonus pass
    #[arg(long)]
    no_bonus: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("gradebook=warn")),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = commands::report::execute(cli.format, cli.no_bonus) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
