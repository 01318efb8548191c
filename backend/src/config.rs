//! Server configuration, read once at startup.
//!
//! Values come from the process environment (after loading an optional `.env`
//! file). A full [`SiteConfig`] may be supplied as JSON through
//! `LANDING_SITE_CONFIG`; the individual `LEAD_*` variables are applied on top
//! of it. Unparseable values are logged and ignored, but the resulting site
//! configuration must pass [`SiteConfig::validate`] or startup is aborted.

use std::fs;

use common::model::site_config::{ConfigError, SiteConfig};
use log::{info, warn};

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub open_browser: bool,
    pub site: SiteConfig,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Ok(path) = dotenvy::dotenv() {
            info!("Loaded environment from {}", path.display());
        }
        Self::load(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    pub fn load(var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut site = match var("LANDING_SITE_CONFIG") {
            Some(path) => read_site_file(&path),
            None => SiteConfig::default(),
        };

        if let Some(url) = var("LEAD_ENDPOINT_URL") {
            site.endpoint_url = url;
        }
        if let Some(ms) = parse_var(&var, "LEAD_TIMEOUT_MS") {
            site.timeout_ms = ms;
        }
        if let Some(ms) = parse_var(&var, "LEAD_DISMISS_MS") {
            site.dismiss_ms = ms;
        }
        if let Some(tz) = var("LEAD_TIMEZONE") {
            site.timezone = tz;
        }
        if let Some(phone) = var("LANDING_PHONE") {
            site.phone = phone;
        }

        site.validate()?;

        Ok(Self {
            host: var("LANDING_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: parse_var(&var, "LANDING_PORT").unwrap_or(DEFAULT_PORT),
            open_browser: parse_var(&var, "LANDING_OPEN_BROWSER").unwrap_or(true),
            site,
        })
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

fn read_site_file(path: &str) -> SiteConfig {
    let parsed = fs::read_to_string(path)
        .map_err(|e| e.to_string())
        .and_then(|raw| serde_json::from_str::<SiteConfig>(&raw).map_err(|e| e.to_string()));
    match parsed {
        Ok(site) => {
            info!("Site configuration loaded from {}", path);
            site
        }
        Err(e) => {
            warn!("Ignoring site configuration {}: {}", path, e);
            SiteConfig::default()
        }
    }
}

fn parse_var<T: std::str::FromStr>(var: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    let raw = var(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("Ignoring {}={:?}: not a valid value", key, raw);
            None
        }
    }
}
