//! Client configuration loaded from the process environment.
use std::env;

use runtime::OrchestratorConfig;

const DEFAULT_API_URL: &str = "https://dragonsofmugloar.com";

/// Configuration required to wire the transport and orchestrator.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub api_url: String,
    pub orchestrator: OrchestratorConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            orchestrator: OrchestratorConfig::default(),
        }
    }
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `MUGLOAR_API_URL` - API root (default: `https://dragonsofmugloar.com`)
    /// - `CLIENT_EVENT_CAPACITY` - Event broadcast buffer (default: 64)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(url) = env::var("MUGLOAR_API_URL") {
            if !url.is_empty() {
                config.api_url = url;
            }
        }

        if let Some(capacity) = read_env::<usize>("CLIENT_EVENT_CAPACITY") {
            config.orchestrator.event_capacity = capacity.max(1);
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
