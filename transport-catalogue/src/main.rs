use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use transport_catalogue::requests::{self, RequestError};

/// Answer the queries in a transit request document.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Request document to read (stdin if omitted)
    input: Option<PathBuf>,

    /// Where to write the responses (stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Pretty-print the response array
    #[arg(long)]
    pretty: bool,
}

fn run(cli: &Cli) -> Result<(), RequestError> {
    let input: Box<dyn io::Read> = match &cli.input {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(io::stdin().lock()),
    };
    let output: Box<dyn io::Write> = match &cli.output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(io::stdout().lock()),
    };
    requests::run(input, output, cli.pretty)
}

fn main() -> ExitCode {
    // Logs go to stderr; stdout carries the JSON answer
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
