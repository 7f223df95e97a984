mod config;

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use rand::Rng;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

use profilesmith_core::redact_dsn;
use profilesmith_export::{Exporter, ExportError, canonicalize};
use profilesmith_generate::{GenerateError, ProfileGenerator};
use profilesmith_store::{PostgresStore, Store, StoreError};

use config::{Config, ConfigError};

#[derive(Debug, Error)]
enum CliError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("generation error: {0}")]
    Generate(#[from] GenerateError),
    #[error("store error: {0}")]
    Store(#[from] StoreError),
    #[error("export error: {0}")]
    Export(#[from] ExportError),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),
}

#[derive(Parser, Debug)]
#[command(
    name = "profilesmith",
    version,
    about = "Generate, store, and export synthetic retail customer profiles"
)]
struct Cli {
    /// Number of profiles to generate.
    #[arg(long, default_value_t = 10)]
    num_profiles: u64,
    /// Directory for exported JSON documents.
    #[arg(long, default_value = "results")]
    out_dir: PathBuf,
    /// Seed for reproducible generation.
    #[arg(long)]
    seed: Option<u64>,
    /// Lower bound of the pacing delay between iterations, in seconds.
    #[arg(long, default_value_t = 1.0)]
    delay_min: f64,
    /// Upper bound of the pacing delay between iterations, in seconds.
    /// Zero disables pacing.
    #[arg(long, default_value_t = 5.0)]
    delay_max: f64,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    init_logging();
    let cli = Cli::parse();
    run(cli).await
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    if cli.delay_min < 0.0 || cli.delay_max < cli.delay_min {
        return Err(CliError::InvalidArguments(
            "delay bounds must satisfy 0 <= delay-min <= delay-max".to_string(),
        ));
    }

    let config = Config::from_env()?;
    let dsn = config.dsn();

    let run_id = Uuid::new_v4().to_string();
    tracing::info!(
        run_id = %run_id,
        profiles = cli.num_profiles,
        connection = %redact_dsn(&dsn),
        "run started"
    );

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(10))
        .connect(&dsn)
        .await?;

    let store = PostgresStore::new(pool);
    store.initialize().await?;

    let exporter = Exporter::new(&cli.out_dir)?;
    let mut generator = match cli.seed {
        Some(seed) => ProfileGenerator::with_seed(seed),
        None => ProfileGenerator::new(),
    };

    let mut inserted = 0_u64;
    let mut exported = 0_u64;
    let mut skipped = 0_u64;

    for iteration in 0..cli.num_profiles {
        if iteration > 0 {
            pace(cli.delay_min, cli.delay_max).await;
        }

        let profile = generator.generate()?;

        let customer_id = match store.insert_profile(&profile).await {
            Ok(customer_id) => customer_id,
            Err(err) => {
                skipped += 1;
                tracing::error!(
                    customer_id = %profile.customer_id(),
                    error = %err,
                    "insert failed, skipping profile"
                );
                continue;
            }
        };
        inserted += 1;

        let document = canonicalize(&profile, chrono::Utc::now());
        match exporter.export(&document) {
            Ok(path) => {
                exported += 1;
                tracing::info!(
                    customer_id = %customer_id,
                    path = %path.display(),
                    "profile stored and exported"
                );
            }
            Err(err) => {
                skipped += 1;
                tracing::error!(
                    customer_id = %customer_id,
                    error = %err,
                    "export failed, skipping profile"
                );
            }
        }
    }

    tracing::info!(run_id = %run_id, inserted, exported, skipped, "run finished");
    Ok(())
}

async fn pace(delay_min: f64, delay_max: f64) {
    if delay_max <= 0.0 {
        return;
    }
    let seconds = rand::rng().random_range(delay_min..=delay_max);
    tracing::debug!(seconds, "pacing delay");
    tokio::time::sleep(Duration::from_secs_f64(seconds)).await;
}
