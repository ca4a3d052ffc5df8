use std::env;
use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub service_port: u16,
    pub service_host: String,
    pub debug: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let service_port = env::var("PORT")
            .unwrap_or_else(|_| "5000".to_string())
            .parse::<u16>()
            .context("PORT must be a valid port number (0-65535)")?;

        let service_host = env::var("HOST")
            .unwrap_or_else(|_| "0.0.0.0".to_string());

        // Only the exact string "True" turns debug on
        let debug = env::var("DEBUG").map(|v| v == "True").unwrap_or(false);

        Ok(Config {
            service_port,
            service_host,
            debug,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.service_host, self.service_port)
    }

    /// Default log filter used when RUST_LOG is not set
    pub fn default_log_filter(&self) -> &'static str {
        if self.debug { "debug" } else { "info" }
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Debug mode: {}", self.debug);
        tracing::info!("  Service listening on: {}", self.bind_addr());
    }
}
