//! Server settings read from the environment.

/// Bind address for the web server. Override with env: HOST, PORT.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    /// 0.0.0.0:8080 so the app is reachable from outside the host.
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_vars(std::env::var("HOST").ok(), std::env::var("PORT").ok())
    }

    /// Build from raw values; missing or unparsable ones fall back to the defaults.
    pub fn from_vars(host: Option<String>, port: Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            host: host.unwrap_or(defaults.host),
            port: port
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
        }
    }
}
