use anyhow::{Context, Result};
use std::env;
use url::Url;

/// Runtime configuration, read once at startup from the environment
/// (a local `.env` file is honored in development).
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub slot_service_base_url: Url,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let base_url = env::var("SLOT_SERVICE_BASE_URL")
            .context("SLOT_SERVICE_BASE_URL is not set")?;
        let slot_service_base_url =
            Url::parse(&base_url).context("SLOT_SERVICE_BASE_URL is not a valid URL")?;

        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

        Ok(Config {
            bind_addr,
            slot_service_base_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_base_url_and_defaults_bind_addr() {
        // SAFETY: no other test in this binary touches these variables.
        unsafe {
            env::set_var("SLOT_SERVICE_BASE_URL", "https://upstream.test/api/availability");
            env::remove_var("BIND_ADDR");
        }

        let config = Config::from_env().unwrap();
        assert_eq!(
            config.slot_service_base_url.as_str(),
            "https://upstream.test/api/availability"
        );
        assert_eq!(config.bind_addr, "0.0.0.0:8080");
    }
}
