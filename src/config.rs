use crate::error::{config_error, env_error, AppResult};
use dotenvy::dotenv;
use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use url::Url;

/// Default port for the web server
pub const DEFAULT_PORT: u16 = 3000;

/// Default locale for page strings
pub const DEFAULT_LOCALE: &str = "en";

/// Main configuration structure for the front-end
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL prepended to every API path. Empty means paths are absolute.
    pub api_base_url: String,
    /// Address the web server listens on
    pub host: IpAddr,
    /// Port the web server listens on
    pub port: u16,
    /// Locale used to render page strings
    pub locale: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
            locale: DEFAULT_LOCALE.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from the environment (and `.env` if present)
    pub fn load() -> AppResult<Self> {
        // Load .env file if it exists
        dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base_url = normalize_base_url(&lookup("API_BASE_URL").unwrap_or_default())?;

        let host = match lookup("HOST") {
            Some(host) => host
                .trim()
                .parse::<IpAddr>()
                .map_err(|_| env_error("HOST"))?,
            None => IpAddr::V4(Ipv4Addr::LOCALHOST),
        };

        let port = match lookup("PORT") {
            Some(port) => port.trim().parse::<u16>().map_err(|_| env_error("PORT"))?,
            None => DEFAULT_PORT,
        };

        let locale = lookup("UI_LOCALE")
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty())
            .unwrap_or_else(|| DEFAULT_LOCALE.to_string());

        Ok(Config {
            api_base_url,
            host,
            port,
            locale,
        })
    }

    /// Socket address the server binds to
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Trims a trailing slash and rejects bases that are not absolute http(s) URLs
fn normalize_base_url(raw: &str) -> AppResult<String> {
    let base = raw.trim().trim_end_matches('/');
    if base.is_empty() {
        return Ok(String::new());
    }

    let url = Url::parse(base)
        .map_err(|e| config_error(&format!("API_BASE_URL `{}` is not a valid URL: {}", base, e)))?;

    // `localhost:5000` parses with `localhost` as the scheme
    if !matches!(url.scheme(), "http" | "https") {
        return Err(config_error(&format!(
            "API_BASE_URL `{}` must start with http:// or https://",
            base
        )));
    }

    Ok(base.to_string())
}
