use std::time::Duration;

use log::debug;

/// Configuration constants for the Ambassador admin API
pub mod api {
    /// List endpoint path
    pub const LIST_PATH: &str = "/ambassador/admin/list-microservice-endpoint";

    /// Update endpoint path
    pub const UPDATE_PATH: &str = "/ambassador/admin/update-microservice-endpoint";
}

/// Default values for the CLI
pub mod defaults {
    /// Default demo environment host[:port]
    pub const DEMO_FQDN: &str = "dev-ambassador-22.birdeye.internal:8080";

    /// Default QA environment host[:port]
    pub const QA_FQDN: &str = "qa-ambassador-1.birdeye.internal:8080";

    /// Default URL scheme
    pub const SCHEME: &str = "http";

    /// Default log level
    pub const LOG_LEVEL: &str = "warn";
}

/// Constants for Armor health-check URL derivation
pub mod armor {
    /// Internal domain Armor hosts live under
    pub const DOMAIN: &str = "birdeye.internal";

    /// Port assumed when the Ambassador fqdn carries none
    pub const DEFAULT_PORT: &str = "8080";

    /// Health-check path on Armor hosts
    pub const HEALTH_PATH: &str = "/health/check";
}

/// Environment variable names for overrides (all optional)
pub mod env {
    pub const LOG: &str = "AMBCTL_LOG";
    pub const DEMO_FQDN: &str = "AMBCTL_DEMO_FQDN";
    pub const QA_FQDN: &str = "AMBCTL_QA_FQDN";
    pub const SCHEME: &str = "AMBCTL_SCHEME";
    pub const LIST_PATH: &str = "AMBCTL_LIST_PATH";
    pub const UPDATE_PATH: &str = "AMBCTL_UPDATE_PATH";
    pub const CONNECT_TIMEOUT: &str = "AMBCTL_CONNECT_TIMEOUT";
    pub const TIMEOUT: &str = "AMBCTL_TIMEOUT";
}

/// Fixed per-call timeouts (seconds)
pub mod timeouts {
    pub const CONNECT_SECS: u64 = 5;
    pub const OVERALL_SECS: u64 = 20;
}

/// Resolved runtime settings
///
/// Every field has a default; environment variables override individually.
#[derive(Debug, Clone)]
pub struct Settings {
    pub demo_fqdn: String,
    pub qa_fqdn: String,
    pub scheme: String,
    pub list_path: String,
    pub update_path: String,
    pub connect_timeout: Duration,
    pub timeout: Duration,
}

impl Settings {
    /// Resolve settings from environment variables with fallback to defaults
    pub fn from_env() -> Self {
        let settings = Self {
            demo_fqdn: env_or(env::DEMO_FQDN, defaults::DEMO_FQDN),
            qa_fqdn: env_or(env::QA_FQDN, defaults::QA_FQDN),
            scheme: env_or(env::SCHEME, defaults::SCHEME),
            list_path: env_or(env::LIST_PATH, api::LIST_PATH),
            update_path: env_or(env::UPDATE_PATH, api::UPDATE_PATH),
            connect_timeout: Duration::from_secs(env_secs_or(
                env::CONNECT_TIMEOUT,
                timeouts::CONNECT_SECS,
            )),
            timeout: Duration::from_secs(env_secs_or(env::TIMEOUT, timeouts::OVERALL_SECS)),
        };
        debug!("Resolved settings: {:?}", settings);
        settings
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            demo_fqdn: defaults::DEMO_FQDN.to_string(),
            qa_fqdn: defaults::QA_FQDN.to_string(),
            scheme: defaults::SCHEME.to_string(),
            list_path: api::LIST_PATH.to_string(),
            update_path: api::UPDATE_PATH.to_string(),
            connect_timeout: Duration::from_secs(timeouts::CONNECT_SECS),
            timeout: Duration::from_secs(timeouts::OVERALL_SECS),
        }
    }
}

fn env_or(var: &str, default: &str) -> String {
    match std::env::var(var) {
        Ok(value) if !value.trim().is_empty() => value,
        _ => default.to_string(),
    }
}

fn env_secs_or(var: &str, default: u64) -> u64 {
    std::env::var(var)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_paths_format() {
        assert!(api::LIST_PATH.starts_with('/'));
        assert!(api::UPDATE_PATH.starts_with('/'));
    }

    #[test]
    fn test_default_fqdns_carry_no_scheme() {
        assert!(!defaults::DEMO_FQDN.starts_with("http://"));
        assert!(!defaults::QA_FQDN.starts_with("http://"));
    }

    #[test]
    fn test_default_settings() {
        let s = Settings::default();
        assert_eq!(s.scheme, "http");
        assert_eq!(s.connect_timeout, Duration::from_secs(5));
        assert_eq!(s.timeout, Duration::from_secs(20));
        assert_eq!(s.list_path, api::LIST_PATH);
    }

    #[test]
    fn test_env_secs_or_ignores_missing_var() {
        assert_eq!(env_secs_or("AMBCTL_TEST_NO_SUCH_VAR", 7), 7);
    }
}
