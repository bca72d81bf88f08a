use std::collections::BTreeMap;
use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::error::{ConfigValidationError, SquatError};
use crate::core::hash::sha256_hex;

pub mod schema;

/// Reference strings and thresholds for one classification run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Legitimate domain label mapped to the suffixes it is served from.
    pub domain: BTreeMap<String, Vec<String>>,
    pub domain_threshold: f64,
    pub domain_keywords: Vec<String>,
    pub domain_keywords_threshold: f64,
    pub path: Vec<String>,
    pub path_threshold: f64,
    #[serde(default = "default_split")]
    pub path_split: bool,
    pub query: Vec<String>,
    pub query_threshold: f64,
    #[serde(default = "default_split")]
    pub query_split: bool,
}

impl Config {
    /// Validate a generic document against the schema, then build the config.
    pub fn from_value(value: Value) -> Result<Self, SquatError> {
        schema::validate(&value)?;
        let cfg: Config = serde_json::from_value(value)?;
        Ok(cfg)
    }

    /// Re-check the invariants of a config that was built in code.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.domain.is_empty() {
            return Err(ConfigValidationError::new(
                "/domain",
                "should have at least 1 property",
            ));
        }
        let thresholds = [
            ("domain_threshold", self.domain_threshold),
            ("domain_keywords_threshold", self.domain_keywords_threshold),
            ("path_threshold", self.path_threshold),
            ("query_threshold", self.query_threshold),
        ];
        for (key, value) in thresholds {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigValidationError::new(
                    format!("/{}", key),
                    format!("{} is outside the range [0, 1]", value),
                ));
            }
        }
        Ok(())
    }

    /// Stable SHA-256 of the canonical JSON form.
    pub fn fingerprint(&self) -> Result<String, SquatError> {
        let json = serde_json::to_string(self)?;
        Ok(sha256_hex(json.as_bytes()))
    }
}

fn default_split() -> bool {
    true
}

/// Load a config from `.toml` or JSON (any other extension).
pub fn load_config(path: &Path) -> Result<Config, SquatError> {
    let content = fs::read_to_string(path)?;
    let is_toml = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("toml"))
        .unwrap_or(false);
    let value = if is_toml {
        parse_toml(&content)?
    } else {
        serde_json::from_str(&content)?
    };
    let cfg = Config::from_value(value)?;
    tracing::debug!(
        "config loaded from {}: {} domains, {} keywords, {} paths, {} query names",
        path.display(),
        cfg.domain.len(),
        cfg.domain_keywords.len(),
        cfg.path.len(),
        cfg.query.len()
    );
    Ok(cfg)
}

fn parse_toml(content: &str) -> Result<Value, SquatError> {
    let doc: toml::Value = toml::from_str(content)?;
    Ok(serde_json::to_value(doc)?)
}
