use std::fmt;
use std::path::PathBuf;

/// An error that stops a `lodown` invocation.
///
/// Library calls never fail; everything here comes from reading input,
/// loading configuration, or parsing command-line arguments.
#[derive(Debug)]
pub enum CliError {
    /// A file or stdin could not be read.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Input was not valid JSON.
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// `lodown.toml` could not be read or parsed.
    Config(String),
    /// A `--where` condition could not be parsed.
    InvalidCondition(String),
    /// Any other unusable argument.
    InvalidArgument(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read {}: {source}", path.display())
            }
            Self::Json { path, source } => {
                write!(f, "invalid JSON in {}: {source}", path.display())
            }
            Self::Config(msg) => write!(f, "invalid configuration: {msg}"),
            Self::InvalidCondition(cond) => write!(
                f,
                "invalid condition `{cond}`: expected `field`, `field=VALUE` or `field!=VALUE`"
            ),
            Self::InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            _ => None,
        }
    }
}
