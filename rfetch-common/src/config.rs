// rfetch-common/src/config.rs
use std::env;
use std::time::Duration;

use tracing::debug;

use super::error::Result;

const DEFAULT_USER_AGENT: &str = "rfetch (Rust; +https://github.com/oxidize/rfetch)";
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_MAX_REDIRECTS: usize = 10;

/// Transport-level client configuration. Per-request concerns (method,
/// headers, body, timeout) live in `FetchOptions` instead; nothing here
/// affects how a response is interpreted.
#[derive(Debug, Clone)]
pub struct Config {
    pub user_agent: String,
    pub connect_timeout: Duration,
    pub max_redirects: usize,
}

impl Config {
    pub fn load() -> Result<Self> {
        debug!("Loading rfetch configuration");

        let user_agent = env::var("RFETCH_USER_AGENT")
            .ok()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| {
                debug!(
                    "RFETCH_USER_AGENT not set or empty, falling back to default: {}",
                    DEFAULT_USER_AGENT
                );
                DEFAULT_USER_AGENT.to_string()
            });

        let connect_timeout_secs = match env::var("RFETCH_CONNECT_TIMEOUT_SECS") {
            Ok(raw) => match raw.parse::<u64>() {
                Ok(secs) => secs,
                Err(e) => {
                    debug!(
                        "Ignoring invalid RFETCH_CONNECT_TIMEOUT_SECS '{}': {}",
                        raw, e
                    );
                    DEFAULT_CONNECT_TIMEOUT_SECS
                }
            },
            Err(_) => DEFAULT_CONNECT_TIMEOUT_SECS,
        };

        let max_redirects = match env::var("RFETCH_MAX_REDIRECTS") {
            Ok(raw) => match raw.parse::<usize>() {
                Ok(n) => n,
                Err(e) => {
                    debug!("Ignoring invalid RFETCH_MAX_REDIRECTS '{}': {}", raw, e);
                    DEFAULT_MAX_REDIRECTS
                }
            },
            Err(_) => DEFAULT_MAX_REDIRECTS,
        };

        debug!("Configuration loaded successfully.");
        Ok(Self {
            user_agent,
            connect_timeout: Duration::from_secs(connect_timeout_secs),
            max_redirects,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::load().expect("Failed to load default configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test to avoid racing on process environment with parallel tests.
    #[test]
    fn environment_overrides_and_fallbacks() {
        env::remove_var("RFETCH_USER_AGENT");
        env::remove_var("RFETCH_CONNECT_TIMEOUT_SECS");
        env::remove_var("RFETCH_MAX_REDIRECTS");

        let config = Config::load().unwrap();
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
        assert_eq!(
            config.connect_timeout,
            Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS)
        );
        assert_eq!(config.max_redirects, DEFAULT_MAX_REDIRECTS);

        env::set_var("RFETCH_USER_AGENT", "custom-agent/1.0");
        env::set_var("RFETCH_CONNECT_TIMEOUT_SECS", "5");
        env::set_var("RFETCH_MAX_REDIRECTS", "not-a-number");

        let config = Config::load().unwrap();
        assert_eq!(config.user_agent, "custom-agent/1.0");
        assert_eq!(config.connect_timeout, Duration::from_secs(5));
        assert_eq!(config.max_redirects, DEFAULT_MAX_REDIRECTS);

        env::remove_var("RFETCH_USER_AGENT");
        env::remove_var("RFETCH_CONNECT_TIMEOUT_SECS");
        env::remove_var("RFETCH_MAX_REDIRECTS");
    }
}
