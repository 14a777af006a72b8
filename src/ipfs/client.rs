use std::io::Cursor;
use std::path::Path;

use bytes::Bytes;
use cid::Cid;
use futures::TryStreamExt;
use ipfs_api_backend_hyper::request::Add;
use ipfs_api_backend_hyper::{IpfsApi, IpfsClient as ApiClient, TryFromUri};
use tokio::io::AsyncWriteExt;
use tracing::debug;

use super::config::IpfsConfig;
use super::convert_error;
use crate::core::{Error, Result};
use crate::progress;
use crate::utils;

/// Client for interacting with the IPFS daemon
pub struct IpfsClient {
    /// The underlying IPFS API client
    api: ApiClient,

    /// IPFS configuration
    config: IpfsConfig,
}

impl IpfsClient {
    /// Connect to the daemon configured in `config` and verify it is
    /// reachable by asking for its version
    pub async fn connect(config: IpfsConfig) -> Result<Self> {
        let api_url = utils::parse_api_url(&config.api_url)?;

        let api = ApiClient::from_str(api_url.as_str())
            .map_err(|e| Error::InvalidArgument(format!("invalid API URL {}: {}", api_url, e)))?;

        let version = api.version().await.map_err(|e| {
            Error::Api(format!(
                "failed to connect to IPFS daemon at {}: {}",
                config.api_url, e
            ))
        })?;
        debug!("connected to IPFS daemon version {}", version.version);

        Ok(Self { api, config })
    }

    /// Add a single file to the daemon, honoring the pin and CID version
    /// settings. Returns the CID reported by the daemon.
    pub async fn add_file(&self, path: impl AsRef<Path>) -> Result<String> {
        let path = path.as_ref();
        let data = tokio::fs::read(path).await?;

        let options = Add::builder()
            .pin(self.config.pin_uploads)
            .cid_version(self.config.cid_version as u32)
            .build();

        let response = self
            .api
            .add_with_options(Cursor::new(data), options)
            .await
            .map_err(convert_error)?;
        debug!("added {} as {}", path.display(), response.hash);

        Ok(response.hash)
    }

    /// Recursively add a directory tree to the daemon, returning the root
    /// CID. The daemon reports nested entries first and the root last.
    pub async fn add_directory(&self, path: impl AsRef<Path>) -> Result<String> {
        let path = path.as_ref();

        let responses = self.api.add_path(path).await.map_err(convert_error)?;
        let root = responses.last().ok_or_else(|| {
            Error::Api(format!("daemon returned no entries for {}", path.display()))
        })?;

        if self.config.pin_uploads {
            self.pin(&root.hash).await?;
        }

        Ok(root.hash.clone())
    }

    /// Fetch the full object bytes for a CID
    pub async fn get(&self, cid: &Cid) -> Result<Bytes> {
        let data = self
            .api
            .cat(&cid.to_string())
            .map_ok(|chunk| chunk.to_vec())
            .try_concat()
            .await
            .map_err(convert_error)?;

        Ok(Bytes::from(data))
    }

    /// Stream object bytes for a CID straight into a file, reporting byte
    /// progress. Returns the number of bytes written.
    pub async fn get_to_file(&self, cid: &Cid, path: impl AsRef<Path>) -> Result<u64> {
        let path = path.as_ref();
        let mut file = tokio::fs::File::create(path).await?;

        let bar = progress::byte_counter("Downloading");
        let cid_str = cid.to_string();
        let mut stream = Box::pin(self.api.cat(&cid_str));
        let mut written = 0u64;
        while let Some(chunk) = stream.try_next().await.map_err(convert_error)? {
            file.write_all(&chunk).await?;
            written += chunk.len() as u64;
            bar.set_position(written);
        }
        file.flush().await?;
        bar.finish_and_clear();
        debug!("wrote {} bytes to {}", written, path.display());

        Ok(written)
    }

    /// Pin an object on the daemon
    pub async fn pin(&self, hash: &str) -> Result<()> {
        self.api
            .pin_add(hash, true)
            .await
            .map_err(|e| Error::Api(format!("failed to pin object {}: {}", hash, e)))?;

        Ok(())
    }

    /// Unpin an object from the daemon
    pub async fn unpin(&self, hash: &str) -> Result<()> {
        self.api
            .pin_rm(hash, true)
            .await
            .map_err(|e| Error::Api(format!("failed to unpin object {}: {}", hash, e)))?;

        Ok(())
    }

    /// Get information about the connected IPFS node
    pub async fn node_info(&self) -> Result<String> {
        let id = self.api.id(None).await.map_err(convert_error)?;

        Ok(format!(
            "ID: {}\nAddresses: {}\nAgent Version: {}",
            id.id,
            id.addresses.join(", "),
            id.agent_version
        ))
    }

    /// Check whether a block exists on the daemon
    pub async fn exists(&self, hash: &str) -> bool {
        self.api.block_stat(hash).await.is_ok()
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &IpfsConfig {
        &self.config
    }
}
