use std::path::{Path, PathBuf};

use cid::Cid;
use tracing::debug;

use crate::core::{Error, Result};
use crate::ipfs::{IpfsClient, IpfsConfig};
use crate::utils;

/// Implements the `download` command: fetch object bytes for a CID from the
/// daemon and write them to a local file
pub struct DownloadCommand {
    /// CID of the object to fetch
    cid: String,
    /// Output file path
    output: PathBuf,
    /// Daemon settings
    config: IpfsConfig,
}

impl DownloadCommand {
    /// Create a new download command
    pub fn new(cid: impl Into<String>, output: impl AsRef<Path>, config: IpfsConfig) -> Self {
        Self {
            cid: cid.into(),
            output: output.as_ref().to_path_buf(),
            config,
        }
    }

    /// Execute the download command
    pub async fn execute(&self) -> Result<()> {
        let cid = Cid::try_from(self.cid.as_str())
            .map_err(|e| Error::InvalidCid(format!("{}: {}", self.cid, e)))?;

        // Create the output directory if it doesn't exist
        if let Some(parent) = self.output.parent() {
            if !parent.as_os_str().is_empty() {
                utils::ensure_dir_exists(parent)?;
            }
        }

        let client = IpfsClient::connect(self.config.clone()).await?;
        let written = client.get_to_file(&cid, &self.output).await?;
        debug!("downloaded {} bytes for {}", written, cid);

        println!("File downloaded to: {}", self.output.display());
        Ok(())
    }
}
