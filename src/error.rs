use thiserror::Error;

#[derive(Error, Debug)]
pub enum MansyntaxError {
    #[error("Config error: {0}")]
    Config(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MansyntaxError>;

// Helper conversions
impl From<config::ConfigError> for MansyntaxError {
    fn from(e: config::ConfigError) -> Self { Self::Config(e.to_string()) }
}
