//! Reading JSON documents and JSON-valued arguments.

use std::io::Read;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use crate::error::CliError;

/// Path meaning "read standard input".
pub const STDIN: &str = "-";

/// Read and parse the JSON document at `path` (`-` for stdin).
pub fn read_document(path: &Path) -> Result<Value, CliError> {
    let text = if path == Path::new(STDIN) {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|source| CliError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        buf
    } else {
        std::fs::read_to_string(path).map_err(|source| CliError::Io {
            path: path.to_path_buf(),
            source,
        })?
    };
    debug!(path = %path.display(), bytes = text.len(), "read input");
    parse_document(&text, path)
}

/// Parse `text` as JSON, attributing errors to `path`.
pub fn parse_document(text: &str, path: &Path) -> Result<Value, CliError> {
    serde_json::from_str(text).map_err(|source| CliError::Json {
        path: PathBuf::from(path),
        source,
    })
}

/// Interpret a command-line argument as JSON, falling back to a string.
///
/// `3` is a number and `"3"` a string, while a bare `hi` (not valid JSON)
/// becomes the string `"hi"`.
pub fn parse_literal(arg: &str) -> Value {
    serde_json::from_str(arg).unwrap_or_else(|_| Value::String(arg.to_string()))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn literals_prefer_json() {
        assert_eq!(parse_literal("3"), json!(3));
        assert_eq!(parse_literal("-4"), json!(-4));
        assert_eq!(parse_literal("\"3\""), json!("3"));
        assert_eq!(parse_literal("true"), json!(true));
        assert_eq!(parse_literal("null"), json!(null));
        assert_eq!(parse_literal("[1,2]"), json!([1, 2]));
    }

    #[test]
    fn non_json_literals_become_strings() {
        assert_eq!(parse_literal("hi"), json!("hi"));
        assert_eq!(parse_literal("female"), json!("female"));
        assert_eq!(parse_literal(""), json!(""));
    }

    #[test]
    fn invalid_document_reports_path() {
        let err = parse_document("{not json", Path::new("data.json")).unwrap_err();
        assert!(err.to_string().starts_with("invalid JSON in data.json"));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = read_document(Path::new("/nonexistent/input.json")).unwrap_err();
        assert!(matches!(err, CliError::Io { .. }));
    }
}
