//! Futsal CLI
//!
//! Simulates a match from a JSON request (or built-in demo squads) and prints
//! the result.

#[cfg(feature = "cli")]
use anyhow::Result;
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "futsal_cli")]
#[command(about = "Simulate futsal matches from the command line", long_about = None)]
struct Cli {
    /// Log engine decisions (debug level)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(clap::Args)]
struct OutputArgs {
    /// Print the full event log
    #[arg(long)]
    events: bool,

    /// Print the result as pretty JSON instead of a text summary
    #[arg(long)]
    pretty: bool,

    /// Also write the result JSON to this file
    #[arg(long)]
    out: Option<PathBuf>,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Simulate a match described by a JSON request file
    Simulate {
        /// MatchRequest JSON file
        #[arg(long)]
        input: PathBuf,

        /// Override the request seed
        #[arg(long)]
        seed: Option<u64>,

        /// Engine config file (JSON, or YAML by extension)
        #[arg(long)]
        config: Option<PathBuf>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Simulate a match between two built-in demo squads
    Demo {
        #[arg(long, default_value_t = 1)]
        seed: u64,

        #[command(flatten)]
        output: OutputArgs,
    },
}

#[cfg(feature = "cli")]
fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let (request, output) = match cli.command {
        Commands::Simulate { input, seed, config, output } => {
            let mut request = futsal_cli::load_request(&input)?;
            if let Some(seed) = seed {
                request.seed = seed;
            }
            if let Some(path) = config {
                request.config = Some(futsal_cli::load_config(&path)?);
            }
            (request, output)
        }
        Commands::Demo { seed, output } => (futsal_cli::demo_request(seed), output),
    };

    log::info!(
        "[CLI] {} vs {} (seed {})",
        request.home.team.name,
        request.away.team.name,
        request.seed
    );
    let result = futsal_core::simulate_match(&request)?;
    let json = serde_json::to_string(&result)?;

    if let Some(path) = &output.out {
        futsal_cli::write_output(path, &json)?;
        log::info!("[CLI] result written to {}", path.display());
    }

    if output.pretty {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", futsal_cli::render_summary(&result));
        println!("checksum {}", futsal_cli::result_checksum(&json));
    }
    if output.events {
        println!("\n{}", futsal_cli::render_events(&result));
    }

    Ok(())
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("futsal_cli is not available. Enable the 'cli' feature to use it.");
    std::process::exit(1);
}
