use std::fs;
use std::path::Path;

use crate::core::{Error, Result};

/// Ensure a directory exists, creating it if necessary
pub fn ensure_dir_exists(dir: impl AsRef<Path>) -> Result<()> {
    let dir = dir.as_ref();
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    } else if !dir.is_dir() {
        return Err(Error::InvalidArgument(format!(
            "path exists but is not a directory: {}",
            dir.display()
        )));
    }
    Ok(())
}

/// Total size in bytes of a file, or of all regular files under a directory
pub fn tree_size(path: impl AsRef<Path>) -> Result<u64> {
    fn walk(path: &Path, total: &mut u64) -> Result<()> {
        let meta = fs::symlink_metadata(path)?;
        if meta.is_dir() {
            for entry in fs::read_dir(path)? {
                walk(&entry?.path(), total)?;
            }
        } else if meta.is_file() {
            *total += meta.len();
        }
        Ok(())
    }

    let mut total = 0;
    walk(path.as_ref(), &mut total)?;
    Ok(total)
}

/// Validate a daemon API URL, rejecting non-HTTP schemes
pub fn parse_api_url(raw: &str) -> Result<url::Url> {
    let parsed = url::Url::parse(raw)
        .map_err(|e| Error::InvalidArgument(format!("invalid API URL {}: {}", raw, e)))?;

    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(Error::InvalidArgument(format!(
            "unsupported API URL scheme {}: expected http or https",
            other
        ))),
    }
}
