use std::path::{Path, PathBuf};

use crate::core::Result;
use crate::dag;

/// Implements the `cid` command: compute the CID v1 of a file or directory
/// locally, without contacting the daemon
pub struct CidCommand {
    /// Path to hash
    path: PathBuf,
    /// Hash as a UnixFS file node (dag-pb) instead of raw bytes
    unixfs: bool,
}

impl CidCommand {
    /// Create a new cid command
    pub fn new(path: impl AsRef<Path>, unixfs: bool) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            unixfs,
        }
    }

    /// Execute the cid command
    pub fn execute(&self) -> Result<()> {
        let cid = dag::path_cid(&self.path, self.unixfs)?;
        println!("CID v1: {}", cid);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Error;

    #[test]
    fn hashes_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("note.txt");
        std::fs::write(&path, b"hello world").unwrap();

        assert!(CidCommand::new(&path, false).execute().is_ok());
        assert!(CidCommand::new(&path, true).execute().is_ok());
    }

    #[test]
    fn missing_path_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        match CidCommand::new(dir.path().join("absent"), false).execute() {
            Err(Error::NotFound(_)) => {}
            other => panic!("expected NotFound, got {:?}", other),
        }
    }
}
