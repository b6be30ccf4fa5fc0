//! Shelflink CLI - convert library book records between physical and online form

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "shelflink")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a physical book record to its online representation
    ToOnline {
        /// Input file containing a Book JSON document, or `-` for stdin
        input: String,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Pretty-print the output JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Convert an online book record back to a physical one
    ToBook {
        /// Input file containing an OnlineBook JSON document, or `-` for stdin
        input: String,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Pretty-print the output JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Display information about a record document
    Info {
        /// Input file containing a Book or OnlineBook JSON document, or `-` for stdin
        input: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "shelflink_cli=debug,shelflink_core=debug"
    } else {
        "shelflink_cli=info"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::ToOnline {
            input,
            output,
            pretty,
        } => commands::to_online(&input, output.as_deref(), pretty),

        Commands::ToBook {
            input,
            output,
            pretty,
        } => commands::to_book(&input, output.as_deref(), pretty),

        Commands::Info { input, json } => commands::info(&input, json),
    }
}
