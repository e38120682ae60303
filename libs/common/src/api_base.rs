//! API base-URL resolution for server-side callers
//!
//! Server-rendered pages call back into the HTTP API with absolute URLs,
//! and the reachable root differs between the hosting platform, a custom
//! domain, and local development. The resolver is a pure function over an
//! explicit configuration struct so it stays unit-testable; the
//! environment is read in one place and memoized for the process lifetime.

use std::env;
use std::sync::OnceLock;
use std::time::Duration;

/// Advisory timeout for HTTP clients built on top of the resolved base URL
pub const API_TIMEOUT: Duration = Duration::from_secs(10);

/// Deployment context the resolver branches on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Production,
    Development,
}

/// Inputs for resolving the externally reachable API root
#[derive(Debug, Clone)]
pub struct ApiBaseConfig {
    pub environment: Environment,
    /// Host assigned by the hosting platform (bare host, no scheme)
    pub platform_host: Option<String>,
    /// Public base URL configured for the deployment
    pub public_base_url: Option<String>,
    /// Explicit API base override used outside production
    pub api_base_override: Option<String>,
}

impl ApiBaseConfig {
    /// Read the deployment environment.
    ///
    /// The variable names are shared with the frontend deployment
    /// (`NODE_ENV`, `VERCEL_URL`, `NEXT_PUBLIC_BASE_URL`,
    /// `NEXT_PUBLIC_API_BASE_URL`) so both sides agree on the API root.
    /// Empty values count as absent.
    pub fn from_env() -> Self {
        let environment = if env::var("NODE_ENV").as_deref() == Ok("production") {
            Environment::Production
        } else {
            Environment::Development
        };

        Self {
            environment,
            platform_host: non_empty(env::var("VERCEL_URL").ok()),
            public_base_url: non_empty(env::var("NEXT_PUBLIC_BASE_URL").ok()),
            api_base_override: non_empty(env::var("NEXT_PUBLIC_API_BASE_URL").ok()),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Resolve the base URL for absolute API calls.
///
/// In production the platform-assigned host wins, then the host of the
/// configured public base URL (scheme forced to https), then the relative
/// `/api` path. Outside production an explicit override is used verbatim,
/// defaulting to the local development server.
pub fn resolve_api_base(config: &ApiBaseConfig) -> String {
    match config.environment {
        Environment::Production => {
            if let Some(host) = &config.platform_host {
                format!("https://{}/api", host)
            } else if let Some(host) = config.public_base_url.as_deref().and_then(url_host) {
                format!("https://{}/api", host)
            } else {
                "/api".to_string()
            }
        }
        Environment::Development => config
            .api_base_override
            .clone()
            .unwrap_or_else(|| "http://localhost:3000/api".to_string()),
    }
}

/// Extract the host (with optional port) from a URL-ish string.
fn url_host(url: &str) -> Option<&str> {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);
    let host = rest.split(['/', '?', '#']).next().unwrap_or("");
    (!host.is_empty()).then_some(host)
}

static API_BASE: OnceLock<String> = OnceLock::new();

/// The resolved base URL, memoized for the process lifetime.
///
/// Environment variables do not change while the process runs, so the
/// resolution happens once.
pub fn api_base() -> &'static str {
    API_BASE.get_or_init(|| resolve_api_base(&ApiBaseConfig::from_env()))
}

/// Build an HTTP client with the advisory timeout applied.
pub fn http_client() -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder().timeout(API_TIMEOUT).build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn config(environment: Environment) -> ApiBaseConfig {
        ApiBaseConfig {
            environment,
            platform_host: None,
            public_base_url: None,
            api_base_override: None,
        }
    }

    #[test]
    fn test_production_platform_host() {
        let mut cfg = config(Environment::Production);
        cfg.platform_host = Some("my-app.example.com".to_string());
        assert_eq!(resolve_api_base(&cfg), "https://my-app.example.com/api");
    }

    #[test]
    fn test_production_platform_host_wins_over_public_base() {
        let mut cfg = config(Environment::Production);
        cfg.platform_host = Some("my-app.example.com".to_string());
        cfg.public_base_url = Some("https://shop.example.com".to_string());
        assert_eq!(resolve_api_base(&cfg), "https://my-app.example.com/api");
    }

    #[test]
    fn test_production_public_base_url_forces_https_and_drops_path() {
        let mut cfg = config(Environment::Production);
        cfg.public_base_url = Some("http://shop.example.com/store".to_string());
        assert_eq!(resolve_api_base(&cfg), "https://shop.example.com/api");
    }

    #[test]
    fn test_production_public_base_url_keeps_port() {
        let mut cfg = config(Environment::Production);
        cfg.public_base_url = Some("https://shop.example.com:8443".to_string());
        assert_eq!(resolve_api_base(&cfg), "https://shop.example.com:8443/api");
    }

    #[test]
    fn test_production_without_hosts_falls_back_to_relative_path() {
        let cfg = config(Environment::Production);
        assert_eq!(resolve_api_base(&cfg), "/api");

        let mut empty_base = config(Environment::Production);
        empty_base.public_base_url = Some("https://".to_string());
        assert_eq!(resolve_api_base(&empty_base), "/api");
    }

    #[test]
    fn test_development_override_is_used_verbatim() {
        let mut cfg = config(Environment::Development);
        cfg.api_base_override = Some("http://127.0.0.1:4000/api".to_string());
        assert_eq!(resolve_api_base(&cfg), "http://127.0.0.1:4000/api");
    }

    #[test]
    fn test_development_defaults_to_localhost() {
        let cfg = config(Environment::Development);
        assert_eq!(resolve_api_base(&cfg), "http://localhost:3000/api");
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let mut cfg = config(Environment::Production);
        cfg.public_base_url = Some("https://shop.example.com".to_string());
        assert_eq!(resolve_api_base(&cfg), resolve_api_base(&cfg));
    }

    #[test]
    fn test_api_timeout_is_ten_seconds() {
        assert_eq!(API_TIMEOUT, Duration::from_secs(10));
    }

    #[test]
    fn test_http_client_builds() {
        assert!(http_client().is_ok());
    }

    #[test]
    fn test_url_host_extraction() {
        assert_eq!(url_host("https://a.example.com/x/y"), Some("a.example.com"));
        assert_eq!(url_host("http://a.example.com:8080"), Some("a.example.com:8080"));
        assert_eq!(url_host("a.example.com"), Some("a.example.com"));
        assert_eq!(url_host("https://"), None);
        assert_eq!(url_host(""), None);
    }

    #[test]
    #[serial]
    fn test_config_from_env_reads_deployment_variables() {
        unsafe {
            std::env::set_var("NODE_ENV", "production");
            std::env::set_var("VERCEL_URL", "my-app.example.com");
            std::env::set_var("NEXT_PUBLIC_BASE_URL", "  ");
            std::env::remove_var("NEXT_PUBLIC_API_BASE_URL");
        }

        let cfg = ApiBaseConfig::from_env();
        assert_eq!(cfg.environment, Environment::Production);
        assert_eq!(cfg.platform_host.as_deref(), Some("my-app.example.com"));
        assert_eq!(cfg.public_base_url, None, "blank values count as absent");
        assert_eq!(cfg.api_base_override, None);

        unsafe {
            std::env::remove_var("NODE_ENV");
            std::env::remove_var("VERCEL_URL");
            std::env::remove_var("NEXT_PUBLIC_BASE_URL");
        }
    }

    #[test]
    #[serial]
    fn test_config_from_env_defaults_to_development() {
        unsafe {
            std::env::remove_var("NODE_ENV");
            std::env::remove_var("VERCEL_URL");
            std::env::remove_var("NEXT_PUBLIC_BASE_URL");
            std::env::remove_var("NEXT_PUBLIC_API_BASE_URL");
        }

        let cfg = ApiBaseConfig::from_env();
        assert_eq!(cfg.environment, Environment::Development);
        assert_eq!(resolve_api_base(&cfg), "http://localhost:3000/api");
    }

    // The memoized accessor is exercised by exactly one test so the value
    // it latches is deterministic within this test binary.
    #[test]
    #[serial]
    fn test_api_base_accessor_is_memoized() {
        unsafe {
            std::env::remove_var("NODE_ENV");
            std::env::remove_var("NEXT_PUBLIC_API_BASE_URL");
        }

        let first = api_base();
        assert_eq!(first, "http://localhost:3000/api");

        // A later environment change must not affect the memoized value.
        unsafe {
            std::env::set_var("NEXT_PUBLIC_API_BASE_URL", "http://other:9999/api");
        }
        assert_eq!(api_base(), first);
        unsafe {
            std::env::remove_var("NEXT_PUBLIC_API_BASE_URL");
        }
    }
}
