mod cli;
mod extract_cmd;
mod run_cmd;
mod shared;

use clap::Parser;
use cli::Cli;
use tracing_subscriber::EnvFilter;

fn main() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("docjoin=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        cli::Commands::Run {
            ref file_a,
            ref file_b,
            ref mode,
            ref format,
            column_threshold,
            text_threshold,
            ref format_a,
            ref format_b,
        } => run_cmd::run(
            file_a,
            file_b,
            mode,
            format,
            column_threshold,
            text_threshold,
            format_a.as_ref(),
            format_b.as_ref(),
        ),
        cli::Commands::Extract {
            ref file,
            ref format,
            ref input_format,
        } => extract_cmd::run(file, format, input_format.as_ref()),
    };

    if let Err(code) = result {
        std::process::exit(code);
    }
}
