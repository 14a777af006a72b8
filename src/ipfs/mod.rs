// IPFS daemon integration
// Thin wrapper around the HTTP RPC API of a local Kubo-compatible daemon

mod client;
mod config;

pub use client::IpfsClient;
pub use config::IpfsConfig;

use crate::core::Error;

/// Convert an IPFS API error into a crate error
pub(crate) fn convert_error(error: impl std::error::Error) -> Error {
    Error::Api(error.to_string())
}
