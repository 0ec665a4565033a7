use std::path::PathBuf;

/// Errors from building a disk row out of untrusted input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DiskError {
    #[error("invalid light disk count {0} (must be > 0 and double to a valid row length)")]
    InvalidLightCount(usize),

    #[error("unknown disk token '{token}' at position {position} (expected 'L' or 'D')")]
    UnknownToken { position: usize, token: String },

    #[error("disk row is empty")]
    EmptyRow,

    #[error("disk row has odd length {0}")]
    OddLength(usize),

    #[error("disk row is unbalanced: {light} light, {dark} dark")]
    Unbalanced { light: usize, dark: usize },
}

/// Errors from reading or validating a `disks.toml` file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
