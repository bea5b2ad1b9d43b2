// Configuration module entry point
// Loads and exposes the startup configuration

mod state;
mod types;

use std::net::SocketAddr;

// Re-export public types
pub use state::AppState;
pub use types::{AppConfig, Config, HttpConfig, LoggingConfig, PerformanceConfig, ServerConfig};

/// Environment variable overriding the reported contact email.
pub const OFFICIAL_EMAIL_ENV: &str = "OFFICIAL_EMAIL";

const DEFAULT_OFFICIAL_EMAIL: &str = "aditya0266.be23@chitkara.edu.in";

impl Config {
    /// Load configuration from the default "config.toml" location.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from the specified file path (without extension),
    /// layered with `SERVER_*` environment variables and built-in defaults.
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("SERVER"))
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080)?
            .set_default("app.official_email", DEFAULT_OFFICIAL_EMAIL)?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("logging.access_log_format", "combined")?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 30)?
            .set_default("http.server_name", "bfhl/0.1")?
            .set_default("http.enable_cors", true)?
            .set_default("http.max_body_size", 1_048_576)? // 1MB
            .build()?;

        let mut cfg: Self = settings.try_deserialize()?;

        // OFFICIAL_EMAIL is part of the public contract and carries no
        // prefix, so it is checked explicitly and wins over file and
        // prefixed-environment sources.
        if let Ok(email) = std::env::var(OFFICIAL_EMAIL_ENV) {
            cfg.app.official_email = email;
        }

        Ok(cfg)
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = Config::load_from("missing-config-file").unwrap();
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.server.port, 8080);
        assert!(cfg.server.workers.is_none());
        assert!(cfg.logging.access_log);
        assert_eq!(cfg.logging.access_log_format, "combined");
        assert!(cfg.http.enable_cors);
        assert_eq!(cfg.http.max_body_size, 1_048_576);
        assert!(cfg.performance.max_connections.is_none());
    }

    #[test]
    fn test_socket_addr() {
        let cfg = Config::load_from("missing-config-file").unwrap();
        let addr = cfg.get_socket_addr().unwrap();
        assert_eq!(addr.port(), 8080);
    }
}
