use std::env;
use std::str::FromStr;
use std::time::Duration;

const DEFAULT_DATABASE: &str = "youthchain";

/// Runtime configuration, read from the environment (and `.env` via dotenv).
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub cors_origins: Vec<String>,
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub uri: String,
    /// Explicit database name. When `None` the name in the URI is used,
    /// falling back to `youthchain`.
    pub name: Option<String>,
    pub max_pool_size: u32,
    pub min_pool_size: u32,
    pub connect_timeout: Duration,
    pub server_selection_timeout: Duration,
    pub query_timeout: Duration,
}

impl DatabaseConfig {
    pub fn default_name() -> &'static str {
        DEFAULT_DATABASE
    }
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = parse_var("PORT", 8000u16)?;

        let cors_origins = env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let database = DatabaseConfig {
            uri: env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            name: env::var("MONGODB_DATABASE").ok().filter(|s| !s.is_empty()),
            max_pool_size: parse_var("MONGODB_MAX_POOL_SIZE", 20u32)?,
            min_pool_size: parse_var("MONGODB_MIN_POOL_SIZE", 2u32)?,
            connect_timeout: Duration::from_secs(parse_var("MONGODB_CONNECT_TIMEOUT_SECS", 5u64)?),
            server_selection_timeout: Duration::from_secs(parse_var(
                "MONGODB_SERVER_SELECTION_TIMEOUT_SECS",
                5u64,
            )?),
            query_timeout: Duration::from_secs(parse_var("MONGODB_QUERY_TIMEOUT_SECS", 10u64)?),
        };

        if database.min_pool_size > database.max_pool_size {
            return Err(format!(
                "MONGODB_MIN_POOL_SIZE ({}) must not exceed MONGODB_MAX_POOL_SIZE ({})",
                database.min_pool_size, database.max_pool_size
            ));
        }

        Ok(Self { host, port, cors_origins, database })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_var<T: FromStr>(key: &str, default: T) -> Result<T, String> {
    match env::var(key) {
        Ok(raw) => parse_value(key, &raw),
        Err(_) => Ok(default),
    }
}

fn parse_value<T: FromStr>(key: &str, raw: &str) -> Result<T, String> {
    raw.trim()
        .parse()
        .map_err(|_| format!("Invalid value for {}: '{}'", key, raw))
}
