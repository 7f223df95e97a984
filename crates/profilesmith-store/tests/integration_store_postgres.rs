//! Live-database integration tests.
//!
//! Requires a reachable PostgreSQL instance; set `TEST_DATABASE_URL` or
//! `DATABASE_URL` before running.

use anyhow::{Context, Result};
use sqlx::postgres::PgPoolOptions;
use std::env;

use profilesmith_generate::ProfileGenerator;
use profilesmith_store::{PostgresStore, Store, StoreError};

fn database_url() -> Result<String> {
    env::var("TEST_DATABASE_URL")
        .or_else(|_| env::var("DATABASE_URL"))
        .context("set TEST_DATABASE_URL or DATABASE_URL for integration tests")
}

async fn connect() -> Result<PostgresStore> {
    let db_url = database_url()?;
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .acquire_timeout(std::time::Duration::from_secs(10))
        .connect(&db_url)
        .await
        .context("connecting to Postgres")?;
    Ok(PostgresStore::new(pool))
}

#[tokio::test]
async fn insert_then_fetch_round_trips() -> Result<()> {
    let store = connect().await?;
    store.initialize().await?;

    let mut generator = ProfileGenerator::new();
    let profile = generator.generate()?;

    let customer_id = store.insert_profile(&profile).await?;
    assert_eq!(customer_id, profile.system_data.customer_id);

    let stored = store.fetch_profile(&customer_id).await?;
    assert_eq!(stored, profile, "stored profile should round-trip");

    Ok(())
}

#[tokio::test]
async fn duplicate_insert_is_rejected_atomically() -> Result<()> {
    let store = connect().await?;
    store.initialize().await?;

    let mut generator = ProfileGenerator::new();
    let profile = generator.generate()?;
    store.insert_profile(&profile).await?;

    let err = store
        .insert_profile(&profile)
        .await
        .expect_err("duplicate customer id must violate the primary key");
    assert!(matches!(err, StoreError::Db(_)));

    // The failed transaction must not have touched the original rows.
    let stored = store.fetch_profile(profile.customer_id()).await?;
    assert_eq!(stored, profile);

    Ok(())
}

#[tokio::test]
async fn fetch_unknown_customer_is_not_found() -> Result<()> {
    let store = connect().await?;
    store.initialize().await?;

    let err = store
        .fetch_profile("000000000")
        .await
        .expect_err("unknown id should not resolve");
    assert!(matches!(err, StoreError::NotFound(_)));

    Ok(())
}
