use super::duration;
use log::LevelFilter;
use serde::{de, Deserialize, Deserializer};
use std::{fmt, str::FromStr, time::Duration};

pub const DEFAULT_PROVIDER_URL: &str = "https://dynamicdns.park-your-domain.com";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Clone, Deserialize)]
pub struct Config {
    #[serde(deserialize_with = "duration::deserialize_positive")]
    pub update_period: Duration,

    pub host: String,

    pub domain_name: String,

    pub ddns_password: String,

    #[serde(default)]
    pub log_level: LogLevel,

    #[serde(default = "default_provider_url")]
    pub provider_url: String,

    #[serde(
        default = "default_request_timeout",
        deserialize_with = "duration::deserialize_positive"
    )]
    pub request_timeout: Duration,
}

fn default_provider_url() -> String {
    DEFAULT_PROVIDER_URL.to_string()
}

fn default_request_timeout() -> Duration {
    DEFAULT_REQUEST_TIMEOUT
}

// Keeps the DDNS password out of debug output.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("update_period", &self.update_period)
            .field("host", &self.host)
            .field("domain_name", &self.domain_name)
            .field("ddns_password", &"<redacted>")
            .field("log_level", &self.log_level)
            .field("provider_url", &self.provider_url)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = String;

    // Case-insensitive. An empty level means info, and the panic/fatal levels
    // other loggers use collapse to error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "" | "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" | "dpanic" | "panic" | "fatal" => Ok(LogLevel::Error),
            other => Err(format!("unrecognized log level {other:?}")),
        }
    }
}

impl<'de> Deserialize<'de> for LogLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(raw) => raw.parse().map_err(de::Error::custom),
            None => Ok(LogLevel::default()),
        }
    }
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => LevelFilter::Trace,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Error => LevelFilter::Error,
        }
    }
}
