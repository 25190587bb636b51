/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | DATABASE_URL | sqlite:sales.db | SQLite database location |
/// | HTTP_PORT / PORT | 5000 | HTTP listen port (`HTTP_PORT` wins) |
/// | HTTP_HOST | 0.0.0.0 | HTTP listen address |
/// | ENVIRONMENT | development | Runtime environment |
/// | DB_MAX_CONNECTIONS | 5 | Pool size |
/// | LOG_LEVEL | info | Default log filter when `RUST_LOG` is unset |
/// | LOG_DIR | (unset) | Also write daily log files into this directory |
///
/// # Example
///
/// ```ignore
/// DATABASE_URL=sqlite:/data/sales.db HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub database_url: String,
    pub http_host: String,
    pub http_port: u16,
    /// development | staging | production
    pub environment: String,
    pub db_max_connections: u32,
    pub log_level: String,
    pub log_dir: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset or unparseable values fall back to their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            database_url: non_empty("DATABASE_URL").unwrap_or_else(|| "sqlite:sales.db".into()),
            http_host: non_empty("HTTP_HOST").unwrap_or_else(|| "0.0.0.0".into()),
            http_port: non_empty("HTTP_PORT")
                .or_else(|| non_empty("PORT"))
                .and_then(|p| p.trim().parse().ok())
                .unwrap_or(5000),
            environment: non_empty("ENVIRONMENT").unwrap_or_else(|| "development".into()),
            db_max_connections: non_empty("DB_MAX_CONNECTIONS")
                .and_then(|v| v.trim().parse().ok())
                .filter(|n| *n > 0)
                .unwrap_or(5),
            log_level: non_empty("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_dir: non_empty("LOG_DIR"),
        }
    }

    /// `host:port` to bind
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.http_host, self.http_port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_with(vars: &[(&str, &str)]) -> Config {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.database_url, "sqlite:sales.db");
        assert_eq!(config.bind_addr(), "0.0.0.0:5000");
        assert_eq!(config.db_max_connections, 5);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_dir, None);
        assert_eq!(config.environment, "development");
    }

    #[test]
    fn test_http_port_wins_over_port() {
        assert_eq!(config_with(&[("PORT", "8000")]).http_port, 8000);
        assert_eq!(
            config_with(&[("PORT", "8000"), ("HTTP_PORT", "9000")]).http_port,
            9000
        );
    }

    #[test]
    fn test_unparseable_values_use_defaults() {
        let config = config_with(&[
            ("HTTP_PORT", "not-a-port"),
            ("DB_MAX_CONNECTIONS", "0"),
            ("LOG_DIR", "  "),
        ]);
        assert_eq!(config.http_port, 5000);
        assert_eq!(config.db_max_connections, 5);
        assert_eq!(config.log_dir, None);
    }

    #[test]
    fn test_environment_is_read() {
        let config = config_with(&[("ENVIRONMENT", "production")]);
        assert_eq!(config.environment, "production");
    }
}
