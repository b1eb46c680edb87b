use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tokio::io::BufReader;

use quiz_system::console::Console;
use quiz_system::db;
use quiz_system::telemetry::init_tracing;

const DEFAULT_DB_PATH: &str = "quiz_system.db";

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Database path, falls back to DB_PATH and then ./quiz_system.db
    #[clap(long)]
    db_path: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    init_tracing();
    let cli = Cli::parse();
    let db_path = cli
        .db_path
        .or_else(|| dotenv::var("DB_PATH").ok().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_PATH));

    let pool = db::establish_connection(&db_path)
        .await
        .with_context(|| format!("Cannot connect to DB at {}", db_path.display()))?;
    tracing::info!("Connected to the database at {}", db_path.display());

    // a broken schema leaves the console usable, each operation reports its own failure
    if let Err(err) = db::initialize_schema(&pool).await {
        tracing::error!("Failed to create tables: {err}");
    }

    let stdin = BufReader::new(tokio::io::stdin());
    let mut console = Console::new(pool.clone(), stdin, tokio::io::stdout());
    console.run().await?;
    pool.close().await;
    Ok(())
}
