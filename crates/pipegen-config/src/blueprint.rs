//! Blueprint document parsing.

use crate::{ConfigError, ConfigResult};
use pipegen_core::Blueprint;
use serde_yaml::{Mapping, Value};
use std::path::Path;
use tracing::debug;

/// Read and parse a blueprint file.
pub fn read_blueprint(path: impl AsRef<Path>) -> ConfigResult<Blueprint> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = content.len(), "read blueprint");

    parse_blueprint(&content)
}

/// Parse a blueprint from YAML text.
pub fn parse_blueprint(yaml: &str) -> ConfigResult<Blueprint> {
    let doc: Value = serde_yaml::from_str(yaml).map_err(ConfigError::Parse)?;
    let map = doc.as_mapping().ok_or(ConfigError::NotAMapping)?;
    blueprint_from_mapping(map)
}

/// Build a blueprint from an already-parsed mapping.
///
/// Required fields are checked before anything else is extracted, so a
/// missing field is always reported as [`ConfigError::MissingField`].
/// A required field whose value is null counts as missing.
pub fn blueprint_from_mapping(map: &Mapping) -> ConfigResult<Blueprint> {
    for field in ["project_name", "language", "deploy_method", "environments"] {
        if !has_value(map, field) {
            return Err(ConfigError::MissingField(field.to_string()));
        }
    }

    Ok(Blueprint {
        project_name: get_scalar(map, "project_name")?,
        language: get_scalar(map, "language")?,
        deploy_method: get_scalar(map, "deploy_method")?,
        environments: get_string_list(map, "environments")?,
        // Absent and null both mean "no test templates"
        test_types: if has_value(map, "test_type") {
            get_string_list(map, "test_type")?
        } else {
            Vec::new()
        },
    })
}

// Helper functions for extracting values from YAML mappings

fn has_value(map: &Mapping, name: &str) -> bool {
    map.get(name).is_some_and(|v| !v.is_null())
}

fn get_scalar(map: &Mapping, name: &str) -> ConfigResult<String> {
    let value = map
        .get(name)
        .ok_or_else(|| ConfigError::MissingField(name.to_string()))?;

    scalar_text(value).ok_or_else(|| ConfigError::InvalidValue {
        field: name.to_string(),
        message: format!("expected a scalar, found {}", kind(value)),
    })
}

fn get_string_list(map: &Mapping, name: &str) -> ConfigResult<Vec<String>> {
    let value = map
        .get(name)
        .ok_or_else(|| ConfigError::MissingField(name.to_string()))?;

    let items = value
        .as_sequence()
        .ok_or_else(|| ConfigError::InvalidValue {
            field: name.to_string(),
            message: format!("expected a sequence, found {}", kind(value)),
        })?;

    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            scalar_text(item).ok_or_else(|| ConfigError::InvalidValue {
                field: format!("{}[{}]", name, i),
                message: format!("expected a scalar, found {}", kind(item)),
            })
        })
        .collect()
}

/// Textual form of a string, number or boolean. `42` becomes `"42"`.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Tagged(tagged) => scalar_text(&tagged.value),
        Value::Null | Value::Sequence(_) | Value::Mapping(_) => None,
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}
