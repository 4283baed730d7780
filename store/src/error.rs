use std::io;

use midiconf_core::keys::UnknownKeyError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0}")]
    UnknownKey(#[from] UnknownKeyError),

    #[error("Config key {key} expects a {expected} value")]
    TypeMismatch {
        key: &'static str,
        expected: &'static str,
    },

    #[error("Invalid value {value} for {key}")]
    InvalidFloat { key: &'static str, value: f32 },

    #[error("IO error: {0}")]
    IOError(#[from] io::Error),

    #[error("Parsing error: {0}")]
    ParseError(#[from] serde_json::Error),
}
