use std::time::Duration;

use crate::config::constants::REMOTE_POLL;

pub struct ApiEndpoints {
    pub performance: &'static str,
    pub influencers: &'static str,
    pub query: &'static str,
}

pub struct ClientDefaults {
    pub fetch_timeout_ms: u64,
}

pub struct ApiDefaults {
    pub base_url: &'static str,
    pub ws_url: &'static str,
    pub endpoints: ApiEndpoints,
    pub client: ClientDefaults,
}

pub const API: ApiDefaults = ApiDefaults {
    base_url: "https://echo-production-6fef.up.railway.app",
    ws_url: "wss://echo-production-6fef.up.railway.app/ws",
    endpoints: ApiEndpoints {
        performance: "/api/performance",
        influencers: "/api/influencers",
        query: "/api/query",
    },
    client: ClientDefaults {
        // Polls are best-effort: abort the in-flight request rather than
        // letting a slow backend stall the cycle.
        fetch_timeout_ms: 3000,
    },
};

/// Runtime API settings, resolved once at process start. URLs come from the
/// environment (`ECHO_API_URL` / `ECHO_WS_URL`); everything else is the
/// compile-time default.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub ws_url: String,
    pub fetch_timeout: Duration,
    pub poll_interval: Duration,
}

impl ApiConfig {
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("ECHO_API_URL").unwrap_or_else(|_| API.base_url.to_string());
        let ws_url = std::env::var("ECHO_WS_URL").unwrap_or_else(|_| API.ws_url.to_string());

        Self {
            base_url,
            ws_url,
            fetch_timeout: Duration::from_millis(API.client.fetch_timeout_ms),
            poll_interval: REMOTE_POLL,
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
