use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("PORT must be a number between 1 and 65535, got {0:?}")]
    InvalidPort(String),
    #[error("BASE_PATH {0:?} must be a plain path like /portfolio")]
    InvalidBasePath(String),
}
