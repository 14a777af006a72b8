use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::core::{Error, Result};
use crate::ipfs::{IpfsClient, IpfsConfig};
use crate::progress;
use crate::utils;

/// Implements the `upload` command: send a file or directory to the IPFS
/// daemon's add endpoint
pub struct UploadCommand {
    /// Path to upload
    path: PathBuf,
    /// Whether directories may be uploaded recursively
    recursive: bool,
    /// Skip pinning the uploaded content
    no_pin: bool,
    /// Daemon settings
    config: IpfsConfig,
}

impl UploadCommand {
    /// Create a new upload command
    pub fn new(path: impl AsRef<Path>, recursive: bool, no_pin: bool, config: IpfsConfig) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            recursive,
            no_pin,
            config,
        }
    }

    /// Execute the upload command
    pub async fn execute(&self) -> Result<()> {
        let meta = fs::metadata(&self.path).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                Error::NotFound(format!("file does not exist: {}", self.path.display()))
            } else {
                Error::Io(e)
            }
        })?;

        if meta.is_dir() && !self.recursive {
            return Err(Error::InvalidArgument(
                "path is a directory, use --recursive to upload directories".to_string(),
            ));
        }

        let mut config = self.config.clone();
        if self.no_pin {
            config.pin_uploads = false;
        }
        let client = IpfsClient::connect(config).await?;

        let spinner = progress::spinner("Uploading to IPFS daemon");
        let result = if meta.is_dir() {
            client.add_directory(&self.path).await
        } else {
            client.add_file(&self.path).await
        };
        spinner.finish_and_clear();
        let cid = result?;

        if meta.is_dir() {
            println!("Directory uploaded. CID: {}", cid);
        } else {
            println!("File uploaded. CID: {}", cid);
        }

        match utils::tree_size(&self.path) {
            Ok(size) => println!("Content size: {} bytes", size),
            Err(e) => warn!("could not determine content size: {}", e),
        }

        Ok(())
    }
}
