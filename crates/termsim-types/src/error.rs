//! Error types for termsim.

use std::io;

/// Errors produced by the virtual shell.
///
/// Filesystem variants carry the offending path. Command handlers turn them
/// into GNU-style text at the command boundary, so none of these ever reach
/// the caller of `Shell::execute` as a fault.
#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    #[error("{0}: No such file or directory")]
    NoSuchPath(String),

    #[error("{0}: Not a directory")]
    NotADirectory(String),

    #[error("{0}: Is a directory")]
    IsADirectory(String),

    #[error("{0}: File exists")]
    AlreadyExists(String),

    #[error("{0}: Directory not empty")]
    NotEmpty(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("{0}: Name or service not known (restricted domain)")]
    DomainRestricted(String),

    #[error("rate limit exceeded: try again in {0} seconds")]
    RateLimited(u64),

    #[error("command timed out after {0} ms")]
    Timeout(u64),

    #[error("{0}: command not found")]
    UnknownCommand(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ShellError {
    /// The bare reason phrase, without the path prefix.
    ///
    /// Used to build messages such as `mkdir: cannot create directory 'x': File exists`.
    pub fn reason(&self) -> String {
        match self {
            Self::NoSuchPath(_) => "No such file or directory".to_string(),
            Self::NotADirectory(_) => "Not a directory".to_string(),
            Self::IsADirectory(_) => "Is a directory".to_string(),
            Self::AlreadyExists(_) => "File exists".to_string(),
            Self::NotEmpty(_) => "Directory not empty".to_string(),
            Self::InvalidArgument(msg) => msg.clone(),
            other => other.to_string(),
        }
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, ShellError>;
