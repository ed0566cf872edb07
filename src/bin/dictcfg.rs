//! `dictcfg` CLI: convert a config file to JSON.
//!
//! ## Usage
//!
//! ```sh
//! # Pretty JSON to a file
//! dictcfg settings.cfg settings.json
//!
//! # Compact JSON to stdout, with debug logging on stderr
//! dictcfg settings.cfg --compact -vv
//! ```

use std::fs;
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{Level, info};

use dictcfg::{ConfigError, export};

#[derive(Parser)]
#[command(
    name = "dictcfg",
    version,
    about = "Convert constant/dictionary config files to JSON"
)]
struct Cli {
    /// Config file to read
    input: PathBuf,

    /// Output file (writes to stdout if omitted)
    output: Option<PathBuf>,

    /// Emit single-line JSON instead of pretty-printed
    #[arg(long)]
    compact: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, conflicts_with = "quiet")]
    verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn log_level(&self) -> Level {
        if self.quiet {
            return Level::ERROR;
        }
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.log_level())
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    if let Err(e) = run(&cli) {
        match e.downcast_ref::<ConfigError>() {
            Some(ConfigError::Parse(parse_err)) => {
                eprintln!("syntax error: {}", parse_err);
            }
            _ => eprintln!("Error: {:#}", e),
        }
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let input = fs::read_to_string(&cli.input)
        .with_context(|| format!("failed to read input file {}", cli.input.display()))?;

    let doc = dictcfg::parse(&input).map_err(ConfigError::from)?;
    info!(keys = doc.len(), "parsed {}", cli.input.display());

    let json = export::to_json_string(&doc, !cli.compact)?;

    match &cli.output {
        Some(path) => {
            fs::write(path, json)
                .with_context(|| format!("failed to write output file {}", path.display()))?;
            info!("wrote {}", path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}
