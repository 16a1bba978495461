use anyhow::Result;
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;
use validator::Validate;

pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
pub const DEFAULT_DIST_DIR: &str = "workspace/frontend/dist";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Optional settings file, looked up in the working directory
const CONFIG_FILE: &str = "aptitude-report";

/// Server settings
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct Settings {
    /// Address the static server binds to
    #[validate(length(min = 1))]
    pub bind_address: String,
    /// Trunk build output served to browsers
    pub dist_dir: PathBuf,
    #[validate(range(min = 1, max = 600))]
    pub request_timeout_secs: u64,
}

impl Settings {
    /// Defaults, then `aptitude-report.{toml,yaml,json}`, then `REPORT_*`
    /// environment variables (a `.env` file is loaded first).
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_sources(Environment::with_prefix("REPORT").try_parsing(true))
    }

    fn from_sources(environment: Environment) -> Result<Self> {
        let settings: Settings = Config::builder()
            .set_default("bind_address", DEFAULT_BIND_ADDRESS)?
            .set_default("dist_dir", DEFAULT_DIST_DIR)?
            .set_default("request_timeout_secs", DEFAULT_REQUEST_TIMEOUT_SECS as i64)?
            .add_source(File::with_name(CONFIG_FILE).required(false))
            .add_source(environment)
            .build()?
            .try_deserialize()?;

        settings.validate()?;
        tracing::debug!("Loaded settings: {:?}", settings);
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn environment(vars: &[(&str, &str)]) -> Environment {
        let source: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Environment::with_prefix("REPORT")
            .try_parsing(true)
            .source(Some(source))
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::from_sources(environment(&[])).unwrap();
        assert_eq!(settings.bind_address, DEFAULT_BIND_ADDRESS);
        assert_eq!(settings.dist_dir, PathBuf::from(DEFAULT_DIST_DIR));
        assert_eq!(settings.request_timeout_secs, DEFAULT_REQUEST_TIMEOUT_SECS);
    }

    #[test]
    fn test_environment_overrides_defaults() {
        let settings = Settings::from_sources(environment(&[
            ("REPORT_BIND_ADDRESS", "127.0.0.1:9000"),
            ("REPORT_REQUEST_TIMEOUT_SECS", "5"),
        ]))
        .unwrap();
        assert_eq!(settings.bind_address, "127.0.0.1:9000");
        assert_eq!(settings.request_timeout_secs, 5);
    }

    #[test]
    fn test_rejects_zero_timeout() {
        let result = Settings::from_sources(environment(&[("REPORT_REQUEST_TIMEOUT_SECS", "0")]));
        assert!(result.is_err());
    }
}
