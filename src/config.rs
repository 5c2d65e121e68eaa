use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::NewsletterError;

pub const DEFAULT_HTTP_PORT: u16 = 3000;
const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 60;
const DEFAULT_STATIC_DIR: &str = "static";

#[derive(Debug, Clone)]
pub struct Settings {
    /// HTTP server port (bound on all interfaces)
    pub http_port: u16,
    /// How often the newsletter is regenerated
    pub refresh_interval: Duration,
    /// Directory holding the `js/` and `img/` asset folders
    pub static_dir: PathBuf,
}

impl Settings {
    /// Validates the settings and returns an error if invalid.
    pub fn validate(&self) -> Result<(), NewsletterError> {
        validate_port(self.http_port)?;
        if self.refresh_interval.is_zero() {
            return Err(NewsletterError::Config(
                "Refresh interval cannot be 0".into(),
            ));
        }
        if self.static_dir.as_os_str().to_string_lossy().trim().is_empty() {
            return Err(NewsletterError::Config(
                "Static directory cannot be empty".into(),
            ));
        }
        Ok(())
    }

    /// Build settings from a variable lookup, falling back to defaults for unset values.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, NewsletterError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let http_port = parse_or(&lookup, "PORT", DEFAULT_HTTP_PORT)?;
        let refresh_secs = parse_or(
            &lookup,
            "REFRESH_INTERVAL_SECS",
            DEFAULT_REFRESH_INTERVAL_SECS,
        )?;
        let static_dir = lookup("STATIC_DIR").unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string());

        let settings = Settings {
            http_port,
            refresh_interval: Duration::from_secs(refresh_secs),
            static_dir: PathBuf::from(static_dir),
        };

        // Validate settings before returning
        settings.validate()?;

        Ok(settings)
    }
}

/// Validates that the port is in valid range (1-65535).
fn validate_port(port: u16) -> Result<(), NewsletterError> {
    if port == 0 {
        return Err(NewsletterError::Config("Port cannot be 0".into()));
    }
    Ok(())
}

fn parse_or<F, T>(lookup: &F, name: &str, default: T) -> Result<T, NewsletterError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(name) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|e| NewsletterError::Config(format!("Invalid {name} value {raw:?}: {e}"))),
        None => Ok(default),
    }
}

/// Load settings from the process environment.
pub fn get_configuration() -> Result<Settings, NewsletterError> {
    Settings::from_lookup(|name| env::var(name).ok())
}

/// The port the server listens on, as configured through `PORT`.
pub fn http_port_from_env() -> u16 {
    env::var("PORT")
        .ok()
        .and_then(|raw| raw.trim().parse().ok())
        .unwrap_or(DEFAULT_HTTP_PORT)
}
