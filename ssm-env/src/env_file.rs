//! Conversion of a JSON object into `.env` lines.
//!
//! Strings are written raw and every other JSON value as its compact JSON
//! text. Nothing is quoted or escaped, so entries that a shell-style reader
//! would misparse are written unchanged and reported with a warning.

use std::{
    fs::OpenOptions,
    io::{self, BufWriter, Write},
    path::Path,
};

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::error::ExportError;

/// Key/value pairs in the order they appeared in the parsed JSON object.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EnvMapping {
    entries: Map<String, Value>,
}

impl EnvMapping {
    /// Parses `raw` as a JSON object. `parameter` only labels the error.
    pub fn parse(parameter: &str, raw: &str) -> Result<Self, ExportError> {
        let value: Value =
            serde_json::from_str(raw).map_err(|e| ExportError::MalformedValue {
                parameter: parameter.to_string(),
                reason: format!("value is not valid JSON: {}", e),
            })?;

        match value {
            Value::Object(entries) => Ok(Self { entries }),
            other => Err(ExportError::MalformedValue {
                parameter: parameter.to_string(),
                reason: format!("expected a JSON object, found {}", json_type_name(&other)),
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries with their values already stringified.
    pub fn iter(&self) -> impl Iterator<Item = (&str, String)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), render_value(value)))
    }

    /// Full file content, one `key=value\n` line per entry.
    pub fn render(&self) -> String {
        self.iter()
            .map(|(key, value)| format!("{}={}\n", key, value))
            .collect()
    }
}

pub fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn is_unsafe_key(key: &str) -> bool {
    key.is_empty() || key.contains('=') || key.chars().any(char::is_whitespace)
}

fn spans_lines(value: &str) -> bool {
    value.contains('\n') || value.contains('\r')
}

fn warn_on_unsafe_entry(key: &str, value: &str) {
    if is_unsafe_key(key) {
        warn!(key, "Key is not a valid .env variable name; written unchanged");
    }
    if spans_lines(value) {
        warn!(key, "Value spans multiple lines; .env readers will split it");
    }
}

/// Creates or truncates `path` and writes every entry. The file is opened only
/// here, so callers that fail earlier never touch it. A failure midway leaves
/// the partially written file in place.
pub fn write_env_file(path: &Path, mapping: &EnvMapping) -> Result<(), ExportError> {
    let io_error = |source: io::Error| ExportError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .map_err(io_error)?;

    let mut writer = BufWriter::new(file);
    for (key, value) in mapping.iter() {
        warn_on_unsafe_entry(key, &value);
        writeln!(writer, "{}={}", key, value).map_err(io_error)?;
    }
    writer.flush().map_err(io_error)?;

    debug!(path = %path.display(), entries = mapping.len(), "Environment file written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_render_keeps_json_order() {
        let mapping = EnvMapping::parse("/p", r#"{"B":"2","A":"1","C":"3"}"#).unwrap();
        assert_eq!(mapping.render(), "B=2\nA=1\nC=3\n");
    }

    #[test]
    fn test_render_value_types() {
        let mapping = EnvMapping::parse(
            "/p",
            r#"{"S":"text","N":42,"F":1.5,"T":true,"Z":null,"L":[1,"a"],"O":{"k":"v"}}"#,
        )
        .unwrap();

        assert_eq!(
            mapping.render(),
            "S=text\nN=42\nF=1.5\nT=true\nZ=null\nL=[1,\"a\"]\nO={\"k\":\"v\"}\n"
        );
    }

    #[test]
    fn test_strings_are_not_quoted_or_escaped() {
        let mapping =
            EnvMapping::parse("/p", r#"{"URL":"postgres://u:p@h/db?x=1","Q":"say \"hi\""}"#)
                .unwrap();
        assert_eq!(mapping.render(), "URL=postgres://u:p@h/db?x=1\nQ=say \"hi\"\n");
    }

    #[test]
    fn test_parse_rejects_non_object() {
        for raw in [r#""5""#, "[1,2]", "5", "null", "true"] {
            let err = EnvMapping::parse("/p", raw).unwrap_err();
            assert_eq!(err.kind(), "MalformedValueError", "input {raw}");
        }
    }

    #[test]
    fn test_parse_rejects_invalid_json() {
        let err = EnvMapping::parse("/app/env", "not json").unwrap_err();
        match err {
            ExportError::MalformedValue { parameter, reason } => {
                assert_eq!(parameter, "/app/env");
                assert!(reason.contains("not valid JSON"));
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_empty_object_is_empty_mapping() {
        let mapping = EnvMapping::parse("/p", "{}").unwrap();
        assert!(mapping.is_empty());
        assert_eq!(mapping.render(), "");
    }

    #[test]
    fn test_write_truncates_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".env");
        fs::write(&path, "OLD=value\nSTALE=1\nLONGER_THAN_NEW_CONTENT=yes\n").unwrap();

        let mapping = EnvMapping::parse("/p", r#"{"A":"1"}"#).unwrap();
        write_env_file(&path, &mapping).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "A=1\n");
    }

    #[test]
    fn test_write_reads_back_with_dotenvy() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".env");

        let mapping = EnvMapping::parse("/p", r#"{"HOST":"localhost","PORT":5432}"#).unwrap();
        write_env_file(&path, &mapping).unwrap();

        let vars: Vec<(String, String)> = dotenvy::from_path_iter(&path)
            .unwrap()
            .map(|item| item.unwrap())
            .collect();
        assert_eq!(
            vars,
            vec![
                ("HOST".to_string(), "localhost".to_string()),
                ("PORT".to_string(), "5432".to_string()),
            ]
        );
    }

    #[test]
    fn test_write_keeps_unsafe_entries_unchanged() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".env");

        let mapping = EnvMapping::parse("/p", r#"{"A=B":"x","K":"line1\nline2","":"e"}"#).unwrap();
        write_env_file(&path, &mapping).unwrap();

        assert_eq!(fs::read(&path).unwrap(), b"A=B=x\nK=line1\nline2\n=e\n");
    }

    #[test]
    fn test_unsafe_entry_detection() {
        assert!(is_unsafe_key("A=B"));
        assert!(is_unsafe_key(""));
        assert!(is_unsafe_key("MY KEY"));
        assert!(!is_unsafe_key("DATABASE_URL"));

        assert!(spans_lines("line1\nline2"));
        assert!(spans_lines("crlf\r"));
        assert!(!spans_lines("postgres://u:p@h/db?x=1"));
    }

    #[test]
    fn test_write_into_missing_directory_is_io_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join(".env");

        let mapping = EnvMapping::parse("/p", r#"{"A":"1"}"#).unwrap();
        let err = write_env_file(&path, &mapping).unwrap_err();

        assert_eq!(err.kind(), "IOError");
        assert!(!path.exists());
    }
}
