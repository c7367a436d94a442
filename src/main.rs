use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use exactpoly::{InputDocument, Report, solve};
use tracing::{Level, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "exactpoly")]
#[command(about = "Reconstruct a polynomial from k points with exact arithmetic and verify it against all points", long_about = None)]
struct Cli {
    /// Input JSON document. Reads stdin when omitted
    input: Option<PathBuf>,

    /// Override the required sample count `keys.k`
    #[arg(short, long)]
    k: Option<i64>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: Format,

    /// Indicate log levels by adding additional `-v` arguments. Eg. `-vvv` gives trace output
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Only log errors. Cannot be used alongside `-v`
    #[arg(short, long, action = ArgAction::SetTrue, conflicts_with = "verbose")]
    quiet: bool,
}

impl Cli {
    fn log_level(&self) -> Level {
        if self.quiet {
            Level::ERROR
        } else {
            match self.verbose {
                0 => Level::WARN,
                1 => Level::INFO,
                2 => Level::DEBUG,
                _ => Level::TRACE,
            }
        }
    }

    fn read_document(&self) -> Result<InputDocument> {
        let document = match &self.input {
            Some(path) => {
                let file = File::open(path)
                    .with_context(|| format!("failed to open {}", path.display()))?;
                InputDocument::from_reader(BufReader::new(file))?
            }
            None => InputDocument::from_reader(io::stdin().lock())?,
        };
        Ok(document)
    }

    fn execute(self) -> Result<()> {
        let document = self.read_document()?;
        let k = self.k.unwrap_or(document.sample_count);
        info!(points = document.points.len(), k, "loaded input");

        let (interpolation, verification) = solve(&document.points, k)?;
        let report = Report::new(&interpolation.polynomial, &verification);

        match self.format {
            Format::Text => println!("{report}"),
            Format::Json => println!("{}", report.to_json()?),
        }
        Ok(())
    }
}

fn setup_tracing(log_level: Level) {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            log_level,
        ))
        .init();
}

fn main() {
    let cli = Cli::parse();
    setup_tracing(cli.log_level());

    if let Err(err) = cli.execute() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}
