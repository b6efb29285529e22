use std::env;
use std::path::PathBuf;
use anyhow::{Context, Result};

pub const DEFAULT_API_GATEWAY_URL: &str = "http://localhost:8080";
pub const DEFAULT_JWT_SECRET_KEY: &str = "bbp-secret-key-2025";
pub const DEFAULT_PORT: u16 = 8004;

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the API gateway the pages call from the browser
    pub api_gateway_url: String,
    /// Signing secret reserved for server-side auth integration
    pub jwt_secret_key: String,
    pub service_port: u16,
    pub service_host: String,
    /// Directory mounted under /static
    pub static_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let api_gateway_url = env::var("API_GATEWAY_URL")
            .unwrap_or_else(|_| DEFAULT_API_GATEWAY_URL.to_string());

        let jwt_secret_key = env::var("JWT_SECRET_KEY")
            .unwrap_or_else(|_| DEFAULT_JWT_SECRET_KEY.to_string());

        let service_port = match env::var("PORT") {
            Ok(port) => port
                .parse::<u16>()
                .context("PORT must be a valid port number (0-65535)")?,
            Err(_) => DEFAULT_PORT,
        };

        let service_host = env::var("SERVICE_HOST")
            .unwrap_or_else(|_| "0.0.0.0".to_string());

        let static_dir = env::var("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("static"));

        Ok(Config {
            api_gateway_url,
            jwt_secret_key,
            service_port,
            service_host,
            static_dir,
        })
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.service_host, self.service_port)
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  API gateway: {}", self.api_gateway_url);
        tracing::info!("  JWT secret: {}", self.masked_secret());
        tracing::info!("  Static files: {}", self.static_dir.display());
        tracing::info!("  Service listening on: {}", self.listen_addr());
    }

    fn masked_secret(&self) -> &'static str {
        if self.jwt_secret_key == DEFAULT_JWT_SECRET_KEY {
            "default (set JWT_SECRET_KEY in production)"
        } else {
            "********"
        }
    }
}
