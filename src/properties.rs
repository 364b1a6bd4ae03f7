//! Assembling the property set for a `select` run.
//!
//! Properties come from an optional JSON/YAML file and from repeated
//! `--property KEY=VALUE` flags, the flags winning. Flag values are strings;
//! `KEY:=JSON` takes a typed JSON scalar instead.

use rackforge_common::{load_document, Error, Result};
use serde_json::{Map, Value};
use std::path::Path;

/// Parse a `KEY=VALUE` or `KEY:=JSON` property argument.
///
/// `KEY=VALUE` always yields a string, so `mtm=7E02` stays `"7E02"`.
/// `KEY:=JSON` parses the value as a JSON scalar (`cores:=32`, `vpd:=true`).
pub fn parse_property(arg: &str) -> Result<(String, Value)> {
    let (key, raw) = arg
        .split_once('=')
        .ok_or_else(|| Error::invalid_input(format!("expected KEY=VALUE, got '{}'", arg)))?;

    let (key, typed) = match key.strip_suffix(':') {
        Some(key) => (key.trim(), true),
        None => (key.trim(), false),
    };
    if key.is_empty() {
        return Err(Error::invalid_input(format!("empty property name in '{}'", arg)));
    }

    if !typed {
        return Ok((key.to_string(), Value::String(raw.to_string())));
    }

    match serde_json::from_str::<Value>(raw) {
        Ok(value) if !value.is_array() && !value.is_object() => Ok((key.to_string(), value)),
        Ok(_) => Err(Error::invalid_input(format!(
            "property '{}' must be a JSON scalar, got '{}'",
            key, raw
        ))),
        Err(e) => Err(Error::invalid_input(format!(
            "property '{}' is not valid JSON: {}",
            key, e
        ))),
    }
}

/// Build the property set from an optional file plus overrides.
///
/// A file that does not hold a mapping is passed through untouched (the
/// selector reads it as empty) unless overrides need to be merged into it.
pub fn build_properties(file: Option<&Path>, overrides: &[String]) -> Result<Value> {
    let base = match file {
        Some(path) => load_document::<Value>(path)?,
        None => Value::Object(Map::new()),
    };

    if overrides.is_empty() {
        if !base.is_object() {
            tracing::warn!("Property set is not a mapping; no condition can match");
        }
        return Ok(base);
    }

    let Value::Object(mut properties) = base else {
        return Err(Error::invalid_input(
            "property file must hold a mapping to combine it with --property",
        ));
    };

    for arg in overrides {
        let (key, value) = parse_property(arg)?;
        tracing::debug!("Property {} = {}", key, value);
        properties.insert(key, value);
    }

    Ok(Value::Object(properties))
}
