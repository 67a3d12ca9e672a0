mod hash;
mod process;
mod ranges;

use clap::{Parser, Subcommand};
use scipstore_core::CorrelateConfig;
use std::path::PathBuf;

pub use process::{DocumentReport, ProcessReport};

#[derive(Parser)]
#[command(
    name = "scipstore",
    version,
    about = "Canonicalize, hash and compact SCIP code-intelligence indexes",
    long_about = "scipstore turns a SCIP index into canonical, content-addressed documents \
                  with per-symbol range sets, ready for deduplicated storage."
)]
pub struct Cli {
    /// Also write logs to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Correlate an index into an in-memory store and report the result
    #[command(
        long_about = "Decodes the index, processes every document and writes the results into \
                      an in-memory store with the same dedup rules as the production store. \
                      Prints one row per stored document followed by totals."
    )]
    Process {
        /// Path to a serialized SCIP index
        #[arg(value_name = "INDEX")]
        path: PathBuf,
        /// Upload identifier the documents are linked to
        #[arg(long, default_value_t = 1)]
        upload_id: i64,
        /// Processed documents allowed to wait unconsumed
        #[arg(long, default_value_t = 1)]
        handoff_capacity: usize,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the content hash of every document in an index
    Hash {
        /// Path to a serialized SCIP index
        #[arg(value_name = "INDEX")]
        path: PathBuf,
    },
    /// Decode a hex-encoded range buffer
    Ranges {
        /// Encoded buffer as hex digits
        #[arg(value_name = "HEX")]
        hex: String,
    },
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let _guard = scipstore_core::logging::init_logging("cli", cli.verbose);

    match cli.command {
        Commands::Process {
            path,
            upload_id,
            handoff_capacity,
            json,
        } => {
            let config = CorrelateConfig::default().with_handoff_capacity(handoff_capacity);
            let rt = tokio::runtime::Runtime::new()?;
            let report = rt.block_on(process::run(&path, upload_id, &config))?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", report.render());
            }
            Ok(())
        }
        Commands::Hash { path } => {
            for line in hash::run(&path)? {
                println!("{line}");
            }
            Ok(())
        }
        Commands::Ranges { hex } => {
            println!("{}", ranges::run(&hex)?);
            Ok(())
        }
    }
}
