use thiserror::Error;

#[derive(Error, Debug)]
pub enum LinkbirdError {
    #[error("Fetch failed: {0}")]
    Fetch(String),

    #[error("Sign-in rejected: {0}")]
    AuthRejected(String),

    #[error("Invalid record {id}: {reason}")]
    Invariant { id: String, reason: String },

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LinkbirdError>;
