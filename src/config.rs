use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::Result;

const CONFIG_PATH: &str = "config.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Substituted into enrichment text that references company technologies
    pub company_name: String,
    pub cleaned_output: String,
    pub summary_output: String,
    pub probe_timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            company_name: "Your Company".to_string(),
            cleaned_output: "Cleaned_Tools.csv".to_string(),
            summary_output: "Tools_Summary.csv".to_string(),
            probe_timeout_seconds: 6,
        }
    }
}

impl Config {
    /// Reads `config.toml` when present, falling back to defaults, then
    /// applies the `COMPANY_NAME` environment override.
    pub fn load() -> Result<Self> {
        let mut config = Self::read_file(Path::new(CONFIG_PATH))?;

        if let Ok(name) = std::env::var("COMPANY_NAME") {
            if !name.trim().is_empty() {
                config.company_name = name;
            }
        }

        Ok(config)
    }

    /// A missing file means defaults; an existing-but-unreadable file is an
    /// error, not a silent fallback.
    fn read_file(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(content) => Ok(toml::from_str(&content)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Config::default()),
            Err(e) => Err(e.into()),
        }
    }
}
