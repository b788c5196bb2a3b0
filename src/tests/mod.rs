mod updater;

use crate::config::{models::LogLevel, Config};
use std::time::Duration;

pub(crate) fn config_for(provider_url: &str) -> Config {
    Config {
        update_period: Duration::from_secs(300),
        host: "@".to_string(),
        domain_name: "example.com".to_string(),
        ddns_password: "0123456789abcdef".to_string(),
        log_level: LogLevel::Info,
        provider_url: provider_url.to_string(),
        request_timeout: Duration::from_secs(5),
    }
}

/// Returns a local URL that refuses connections.
pub(crate) fn refused_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}
