use anyhow::Result;
use clap::{Parser, Subcommand};
use hit_counter_core::DatabaseConfig;
use hit_counter_storage::PgStorage;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "hit-counter")]
#[command(about = "Per-session page hit counter backed by PostgreSQL", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the schema if needed and serve HTTP
    Serve {
        #[arg(short, long, default_value = "8080")]
        port: u16,
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,
    },
    /// Create the hit_count table if it does not exist
    InitSchema,
    /// Print the recorded hits of a session without counting a visit
    Hits {
        session_id: String,
        /// Print every hit record instead of the count
        #[arg(long)]
        history: bool,
    },
}

/// Open the fixed-size pool described by the `HIT_COUNTER_*` environment variables.
pub(crate) async fn connect_storage() -> Result<PgStorage> {
    let config = DatabaseConfig::from_env()?;
    Ok(PgStorage::connect(&config).await?)
}

/// `RUST_LOG` when set and valid, `info` otherwise.
fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter(env_filter()).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port, host } => commands::serve::run(port, host).await,
        Commands::InitSchema => commands::init_schema::run().await,
        Commands::Hits { session_id, history } => commands::hits::run(&session_id, history).await,
    }
}
