use anyhow::{Context, Result};
use server_core::config::Config;
use server_core::seed;
use sqlx::PgPool;

#[tokio::main]
async fn main() -> Result<()> {
    // Load config
    let config = Config::from_env()?;

    // Connect to database
    let pool = PgPool::connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;

    println!("✓ Connected to database");
    println!("🌱 Starting database seed...");

    let summary = seed::run(&pool).await?;
    println!("   Inserted {} organizations", summary.organizations);
    println!("   Inserted {} opportunities", summary.listings);

    // Nudge the API server so cached listing views pick up the fresh rows.
    // Best effort: a missing server is an operator hint, not a failure.
    if seed::notify_revalidate(&config.revalidate_url).await {
        println!("   Cache revalidated, refresh the page to see listings");
    } else {
        println!("   ⚠ API server not reachable, start it and refresh to see listings");
    }

    println!("✨ Seed complete!");

    Ok(())
}
