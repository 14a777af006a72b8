//! ipfsx: a command-line utility that wraps an IPFS node. Computes CIDs for
//! local files and directories, uploads content to a running daemon, and
//! downloads content by CID.

pub mod commands;
pub mod core;
pub mod dag;
pub mod ipfs;
pub mod progress;
pub mod utils;

// Re-export main components for easier consumption
pub use crate::core::{AppConfig, ConfigError, Error, Result};
pub use crate::dag::{path_cid, raw_cid, unixfs_cid};
pub use crate::ipfs::{IpfsClient, IpfsConfig};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");
