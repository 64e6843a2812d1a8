//! Application configuration
//!
//! Read once at startup from environment variables (with `.env` support via
//! dotenvy in `main`). Invalid values fail startup instead of surfacing later.

use std::env;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use crate::error::AppError;

/// Runtime configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Address to bind the HTTP server to
    pub host: IpAddr,
    pub port: u16,
    /// Optional JSON file overriding the built-in price book
    pub price_book_path: Option<PathBuf>,
    /// Directory served under /static
    pub static_dir: PathBuf,
}

impl Config {
    /// Read configuration from the environment.
    pub fn from_env() -> Result<Self, AppError> {
        let host = match env::var("KOLESO_HOST") {
            Ok(raw) => raw.parse::<IpAddr>().map_err(|_| {
                AppError::Config(format!("KOLESO_HOST is not a valid IP address: {}", raw))
            })?,
            Err(_) => IpAddr::from([127, 0, 0, 1]),
        };

        let port = match env::var("KOLESO_PORT") {
            Ok(raw) => raw.parse::<u16>().map_err(|_| {
                AppError::Config(format!("KOLESO_PORT is not a valid port: {}", raw))
            })?,
            Err(_) => 8080,
        };

        let price_book_path = env::var("KOLESO_PRICE_BOOK")
            .ok()
            .filter(|raw| !raw.is_empty())
            .map(PathBuf::from);

        let static_dir = env::var("KOLESO_STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("static"));

        Ok(Self {
            host,
            port,
            price_book_path,
            static_dir,
        })
    }

    /// Socket address the server listens on
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
