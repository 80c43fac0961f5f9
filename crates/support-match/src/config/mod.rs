use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub recommender: RecommenderConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig { log_level },
            recommender: RecommenderConfig::from_env()?,
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Optional remote recommender. Matching stays catalog-only when `url` is unset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommenderConfig {
    pub url: Option<String>,
    pub timeout: Duration,
}

impl RecommenderConfig {
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(10_000);

    fn from_env() -> Result<Self, ConfigError> {
        let url = match env::var("RECOMMENDER_URL") {
            Ok(raw) if !raw.trim().is_empty() => Some(parse_endpoint(raw.trim())?),
            _ => None,
        };

        let timeout = match env::var("RECOMMENDER_TIMEOUT_MS") {
            Ok(raw) => match raw.trim().parse::<u64>() {
                Ok(millis) if millis > 0 => Duration::from_millis(millis),
                _ => return Err(ConfigError::InvalidRecommenderTimeout { value: raw }),
            },
            Err(_) => Self::DEFAULT_TIMEOUT,
        };

        Ok(Self { url, timeout })
    }
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self {
            url: None,
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }
}

fn parse_endpoint(raw: &str) -> Result<String, ConfigError> {
    match reqwest::Url::parse(raw) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(url.to_string()),
        _ => Err(ConfigError::InvalidRecommenderUrl {
            value: raw.to_string(),
        }),
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidRecommenderUrl { value: String },
    InvalidRecommenderTimeout { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidRecommenderUrl { value } => {
                write!(f, "RECOMMENDER_URL must be an http(s) URL, got '{value}'")
            }
            ConfigError::InvalidRecommenderTimeout { value } => write!(
                f,
                "RECOMMENDER_TIMEOUT_MS must be a positive number of milliseconds, got '{value}'"
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidPort
            | ConfigError::InvalidRecommenderUrl { .. }
            | ConfigError::InvalidRecommenderTimeout { .. } => None,
        }
    }
}
