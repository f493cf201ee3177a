//! Configuration management for the studio dashboard.
//!
//! Loads configuration from environment variables (and a `.env` file when
//! present):
//! - HTTP listener address
//! - Record store base URL, session cookie and application ids
//! - Log output format

use std::env;
use std::sync::OnceLock;

use studio_models::Collection;

/// Global configuration instance
static CONFIG: OnceLock<Config> = OnceLock::new();

/// Get the global configuration
pub fn config() -> &'static Config {
    CONFIG.get_or_init(Config::from_env)
}

/// Initialize configuration (call once at startup)
pub fn init() -> &'static Config {
    config()
}

pub const DEFAULT_RECORDS_BASE_URL: &str = "https://ci04.ci.xist4c.de/rest";
pub const DEFAULT_COURSES_APP_ID: &str = "6899d0d3ca4dc3817f92802b";
pub const DEFAULT_INSTRUCTORS_APP_ID: &str = "6899d0d63370f71550c5aea6";
pub const DEFAULT_PARTICIPANTS_APP_ID: &str = "6899d0d7ab6cda2d36ea30f4";

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub records: RecordsConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct RecordsConfig {
    pub base_url: String,
    /// Raw `Cookie` header value carrying the record store session.
    pub session_cookie: Option<String>,
    /// No timeout when unset.
    pub timeout_secs: Option<u64>,
    pub apps: AppIds,
}

/// Application identifier of each collection in the record store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppIds {
    pub courses: String,
    pub instructors: String,
    pub participants: String,
}

impl AppIds {
    pub fn get(&self, collection: Collection) -> &str {
        match collection {
            Collection::Courses => &self.courses,
            Collection::Instructors => &self.instructors,
            Collection::Participants => &self.participants,
        }
    }
}

impl Default for AppIds {
    fn default() -> Self {
        Self {
            courses: DEFAULT_COURSES_APP_ID.to_string(),
            instructors: DEFAULT_INSTRUCTORS_APP_ID.to_string(),
            participants: DEFAULT_PARTICIPANTS_APP_ID.to_string(),
        }
    }
}

impl RecordsConfig {
    /// Config pointing at `base_url` with default application ids.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            session_cookie: None,
            timeout_secs: None,
            apps: AppIds::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown log format: {}", s)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub format: LogFormat,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            server: ServerConfig {
                host: env_or("HOST", "0.0.0.0"),
                port: env_or("PORT", "8080").parse().unwrap_or(8080),
            },
            records: RecordsConfig {
                base_url: env_or("RECORDS_BASE_URL", DEFAULT_RECORDS_BASE_URL),
                session_cookie: env::var("RECORDS_SESSION_COOKIE")
                    .ok()
                    .filter(|v| !v.is_empty()),
                timeout_secs: env::var("RECORDS_TIMEOUT_SECS")
                    .ok()
                    .and_then(|v| v.parse().ok()),
                apps: AppIds {
                    courses: env_or("COURSES_APP_ID", DEFAULT_COURSES_APP_ID),
                    instructors: env_or("INSTRUCTORS_APP_ID", DEFAULT_INSTRUCTORS_APP_ID),
                    participants: env_or("PARTICIPANTS_APP_ID", DEFAULT_PARTICIPANTS_APP_ID),
                },
            },
            logging: LoggingConfig {
                format: env_or("LOG_FORMAT", "pretty")
                    .parse()
                    .unwrap_or(LogFormat::Pretty),
            },
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_parsing() {
        assert_eq!("json".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert_eq!("PRETTY".parse::<LogFormat>().unwrap(), LogFormat::Pretty);
        assert!("xml".parse::<LogFormat>().is_err());
    }

    #[test]
    fn test_app_ids_per_collection() {
        let apps = AppIds::default();
        assert_eq!(apps.get(Collection::Courses), DEFAULT_COURSES_APP_ID);
        assert_eq!(apps.get(Collection::Instructors), DEFAULT_INSTRUCTORS_APP_ID);
        assert_eq!(apps.get(Collection::Participants), DEFAULT_PARTICIPANTS_APP_ID);
    }
}
