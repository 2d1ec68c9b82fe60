use std::env;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 5000;
const PREDICT_PATH: &str = "/predict_twin";

/// Environment variable overriding the prediction service host.
pub const HOST_ENV: &str = "FORESIGHT_API_HOST";
/// Environment variable overriding the prediction service port.
pub const PORT_ENV: &str = "FORESIGHT_API_PORT";

/// Where the prediction service lives.
///
/// The path is part of the contract; host and port are deployment
/// configuration, so they are the only values the environment can
/// override.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
    pub http_path: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            http_path: PREDICT_PATH.to_string(),
        }
    }
}

impl ApiConfig {
    /// Defaults with `FORESIGHT_API_HOST` / `FORESIGHT_API_PORT` applied.
    #[must_use]
    pub fn from_env() -> Self {
        Self::default().with_overrides(env::var(HOST_ENV).ok(), env::var(PORT_ENV).ok())
    }

    /// Apply host/port overrides. Blank hosts and unparseable ports are
    /// ignored in favour of the current values.
    #[must_use]
    pub fn with_overrides(mut self, host: Option<String>, port: Option<String>) -> Self {
        if let Some(host) = host
            && !host.trim().is_empty()
        {
            self.host = host.trim().to_string();
        }

        if let Some(port) = port
            && let Ok(port) = port.trim().parse::<u16>()
        {
            self.port = port;
        }

        self
    }

    #[must_use]
    pub fn endpoint(&self) -> String {
        format!(
            "http://{}:{}{}",
            self.host,
            self.port,
            normalize_endpoint_path(&self.http_path)
        )
    }
}

/// Guarantee a leading slash and no trailing one; the service routes the
/// bare path.
fn normalize_endpoint_path(path: &str) -> String {
    let mut value = path.trim().trim_end_matches('/').to_string();
    if !value.starts_with('/') {
        value.insert(0, '/');
    }
    value
}
