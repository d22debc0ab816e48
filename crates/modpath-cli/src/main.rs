//! modpath CLI - check, escape, and sort module paths and versions.

use clap::{Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

mod commands;
mod error;
mod output;

use commands::{canonical, check, escape, sort, split};

#[derive(Parser)]
#[command(name = "modpath")]
#[command(about = "Module path and version checking, escaping, and sorting")]
struct Cli {
    /// Log filter directive (e.g. `debug`, `modpath=trace`)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a path, or a module path and version pair
    Check {
        /// Path to check
        path: String,
        /// Version to check against the module path
        version: Option<String>,
        /// Path dialect
        #[arg(long, value_enum, default_value_t = check::Kind::Module)]
        kind: check::Kind,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Split a module path into prefix and major-version suffix
    Split {
        /// Module path
        path: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the escaped form of a module path or version
    Escape {
        /// Module path (or version with --version)
        input: String,
        /// Treat the input as a version
        #[arg(long)]
        version: bool,
    },
    /// Print the module path or version for an escaped form
    Unescape {
        /// Escaped module path (or version with --version)
        input: String,
        /// Treat the input as a version
        #[arg(long)]
        version: bool,
    },
    /// Print the canonical form of a semantic version
    Canonical {
        /// Version to canonicalize
        version: String,
    },
    /// Sort module versions read from a file or stdin
    Sort {
        /// Input file, one `path@version` or `path version` per line (stdin if omitted)
        input: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let filter = EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let result = match cli.command {
        Commands::Check {
            path,
            version,
            kind,
            json,
        } => check::run(path, version, kind, json),
        Commands::Split { path, json } => split::run(path, json),
        Commands::Escape { input, version } => escape::run(input, version),
        Commands::Unescape { input, version } => escape::run_unescape(input, version),
        Commands::Canonical { version } => canonical::run(version),
        Commands::Sort { input, json } => sort::run(input, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
