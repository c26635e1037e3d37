//! Application configuration loaded from environment variables.
//!
//! `DATABASE_URL` is required; `PORT` and `REVALIDATE_URL` are defaulted.

use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub revalidate_url: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Reads a `.env` file when present (development convenience).
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            database_url: env::var("DATABASE_URL").context("DATABASE_URL must be set")?,
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            revalidate_url: env::var("REVALIDATE_URL")
                .unwrap_or_else(|_| "http://localhost:8080/api/revalidate".to_string()),
        })
    }
}
