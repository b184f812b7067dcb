use anyhow::Context;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::path::Path;

use crate::error::{CoreError, CoreResult};
use crate::models::{Enrollment, Lesson};

/// Keys under which list endpoints wrap lesson records.
const LESSON_KEYS: &[&str] = &["lessons", "results", "data"];

/// Keys under which list endpoints wrap enrollment records.
const ENROLLMENT_KEYS: &[&str] = &["enrollments", "results", "data"];

const PREVIEW_LEN: usize = 200;

/// Parse a lessons payload from a file
pub fn parse_lessons_json(json_path: &Path) -> anyhow::Result<Vec<Lesson>> {
    let json_content = std::fs::read_to_string(json_path)
        .with_context(|| format!("Failed to read JSON file: {}", json_path.display()))?;

    parse_lessons_json_str(&json_content)
        .with_context(|| format!("Failed to parse lessons from {}", json_path.display()))
}

/// Parse an enrollments payload from a file
pub fn parse_enrollments_json(json_path: &Path) -> anyhow::Result<Vec<Enrollment>> {
    let json_content = std::fs::read_to_string(json_path)
        .with_context(|| format!("Failed to read JSON file: {}", json_path.display()))?;

    parse_enrollments_json_str(&json_content)
        .with_context(|| format!("Failed to parse enrollments from {}", json_path.display()))
}

/// Parse lessons from a JSON string.
///
/// Accepts a bare array, or an object wrapping the array under `lessons`,
/// `results` or `data`. `null` (at the top level or under the key) is an
/// empty list.
pub fn parse_lessons_json_str(json_str: &str) -> CoreResult<Vec<Lesson>> {
    parse_records(json_str, LESSON_KEYS)
}

/// Parse enrollments from a JSON string.
///
/// Accepts a bare array, or an object wrapping the array under
/// `enrollments`, `results` or `data`. `null` is an empty list.
pub fn parse_enrollments_json_str(json_str: &str) -> CoreResult<Vec<Enrollment>> {
    parse_records(json_str, ENROLLMENT_KEYS)
}

fn parse_records<T: DeserializeOwned>(json_str: &str, keys: &[&str]) -> CoreResult<Vec<T>> {
    let json_value: Value = serde_json::from_str(json_str).map_err(|e| {
        CoreError::InvalidJson(format!("{}. Input starts with: {}", e, preview(json_str)))
    })?;

    let (records, prefix) = match json_value {
        Value::Null => return Ok(Vec::new()),
        Value::Array(_) => (json_value, String::new()),
        Value::Object(mut map) => {
            let Some(key) = keys.iter().find(|k| map.contains_key(**k)) else {
                return Err(CoreError::Parse {
                    path: ".".to_string(),
                    message: format!(
                        "expected one of the keys {:?}, found {:?}",
                        keys,
                        map.keys().collect::<Vec<_>>()
                    ),
                });
            };
            match map.remove(*key) {
                Some(Value::Null) | None => return Ok(Vec::new()),
                Some(inner) => (inner, (*key).to_string()),
            }
        }
        other => {
            return Err(CoreError::Parse {
                path: ".".to_string(),
                message: format!("expected an array or object, found {}", kind(&other)),
            })
        }
    };

    serde_path_to_error::deserialize::<_, Vec<T>>(records).map_err(|e| {
        match CoreError::from_path_error(e) {
            CoreError::Parse { path, message } if !prefix.is_empty() => CoreError::Parse {
                // "." means the wrapped value itself
                path: if path == "." {
                    prefix.clone()
                } else {
                    format!("{}{}", prefix, path)
                },
                message,
            },
            err => err,
        }
    })
}

fn preview(json_str: &str) -> String {
    if json_str.chars().count() > PREVIEW_LEN {
        let head: String = json_str.chars().take(PREVIEW_LEN).collect();
        format!("{}...", head)
    } else {
        json_str.to_string()
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
