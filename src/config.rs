//! Server configuration.
//!
//! All settings come from environment variables with sensible defaults,
//! read once at startup:
//! - `HOST` - bind address (default `0.0.0.0`)
//! - `PORT` - listen port (default `8080`)

/// Runtime configuration for the HTTP server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address to bind the listener to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Config {
    /// Build a config from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let host = std::env::var("HOST").unwrap_or(defaults.host);
        let port = match std::env::var("PORT") {
            Ok(raw) => match raw.parse() {
                Ok(port) => port,
                Err(_) => {
                    tracing::warn!("Invalid PORT value {:?}, using {}", raw, defaults.port);
                    defaults.port
                }
            },
            Err(_) => defaults.port,
        };

        Self { host, port }
    }
}
