use std::env;
use std::net::SocketAddr;
use std::time::Duration;

const DEFAULT_DATABASE_URL: &str = "sqlite://recipes.db?mode=rwc";
const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 10_000;

/// Runtime configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    /// Time budget for pipeline work per request.
    pub request_budget: Duration,
}

impl Config {
    /// Load configuration from the environment, falling back to defaults
    /// suitable for local development. Unparseable values fall back too.
    #[must_use]
    pub fn from_env() -> Self {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());
        let bind_addr = env::var("BIND_ADDR")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 3000)));
        let request_budget = env::var("REQUEST_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map_or(Duration::from_millis(DEFAULT_REQUEST_TIMEOUT_MS), Duration::from_millis);

        Self {
            database_url,
            bind_addr,
            request_budget,
        }
    }
}
