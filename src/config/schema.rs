//! Structural schema for classifier configuration documents.
//!
//! Runs on the generic `serde_json::Value` form so JSON and TOML sources get
//! identical error messages before serde ever sees them.

use serde_json::{Map, Value};

use crate::core::error::ConfigValidationError;

pub const THRESHOLD_KEYS: [&str; 4] = [
    "domain_threshold",
    "domain_keywords_threshold",
    "path_threshold",
    "query_threshold",
];

pub const STRING_LIST_KEYS: [&str; 3] = ["domain_keywords", "path", "query"];

pub const FLAG_KEYS: [&str; 2] = ["path_split", "query_split"];

pub fn validate(value: &Value) -> Result<(), ConfigValidationError> {
    let root = value
        .as_object()
        .ok_or_else(|| ConfigValidationError::new("", "config must be an object"))?;

    validate_domain(root)?;
    for key in THRESHOLD_KEYS {
        validate_threshold(root, key)?;
    }
    for key in STRING_LIST_KEYS {
        let list = required(root, key)?;
        validate_string_list(list, &format!("/{}", key))?;
    }
    for key in FLAG_KEYS {
        if let Some(flag) = root.get(key) {
            if !flag.is_boolean() {
                return Err(ConfigValidationError::new(
                    format!("/{}", key),
                    format!("{} is not of type 'boolean'", flag),
                ));
            }
        }
    }
    Ok(())
}

fn required<'a>(
    root: &'a Map<String, Value>,
    key: &str,
) -> Result<&'a Value, ConfigValidationError> {
    root.get(key).ok_or_else(|| {
        ConfigValidationError::new("", format!("'{}' is a required property", key))
    })
}

fn validate_domain(root: &Map<String, Value>) -> Result<(), ConfigValidationError> {
    let domain = required(root, "domain")?;
    let map = domain.as_object().ok_or_else(|| {
        ConfigValidationError::new("/domain", format!("{} is not of type 'object'", domain))
    })?;
    if map.is_empty() {
        return Err(ConfigValidationError::new(
            "/domain",
            "should have at least 1 property",
        ));
    }
    for (name, suffixes) in map {
        validate_string_list(suffixes, &format!("/domain/{}", name))?;
    }
    Ok(())
}

fn validate_threshold(root: &Map<String, Value>, key: &str) -> Result<(), ConfigValidationError> {
    let path = format!("/{}", key);
    let value = required(root, key)?;
    let number = value
        .as_f64()
        .ok_or_else(|| {
            ConfigValidationError::new(&path, format!("{} is not of type 'number'", value))
        })?;
    if number < 0.0 {
        return Err(ConfigValidationError::new(
            path,
            format!("{} is less than the minimum of 0", value),
        ));
    }
    if number > 1.0 {
        return Err(ConfigValidationError::new(
            path,
            format!("{} is greater than the maximum of 1", value),
        ));
    }
    Ok(())
}

fn validate_string_list(value: &Value, path: &str) -> Result<(), ConfigValidationError> {
    let items = value
        .as_array()
        .ok_or_else(|| {
            ConfigValidationError::new(path, format!("{} is not of type 'array'", value))
        })?;
    for (idx, item) in items.iter().enumerate() {
        if !item.is_string() {
            return Err(ConfigValidationError::new(
                format!("{}/{}", path, idx),
                format!("{} is not of type 'string'", item),
            ));
        }
    }
    Ok(())
}
