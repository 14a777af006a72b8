use thiserror::Error;

/// Result type used throughout the application
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for ipfsx
#[derive(Error, Debug)]
pub enum Error {
    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] super::config::ConfigError),

    /// A string that does not parse as a content identifier
    #[error("Invalid CID: {0}")]
    InvalidCid(String),

    /// Invalid arguments
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Errors talking to the IPFS daemon
    #[error("IPFS API error: {0}")]
    Api(String),

    /// A path or object that does not exist
    #[error("Not found: {0}")]
    NotFound(String),
}
