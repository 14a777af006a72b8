//! Content identifier computation.
//!
//! CIDs are computed locally, without a daemon. The raw flavor hashes the
//! bytes as-is under the raw multicodec; the UnixFS flavor hashes the
//! marshaled UnixFS file-node message under the dag-pb multicodec.

mod unixfs;

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use cid::Cid;
use multihash::{Code, MultihashDigest};

use crate::core::{Error, Result};

/// Multicodec for raw bytes
const RAW_CODEC: u64 = 0x55;
/// Multicodec for dag-pb nodes
const DAG_PB_CODEC: u64 = 0x70;

/// CID v1 with the raw codec over the bytes as-is
pub fn raw_cid(data: &[u8]) -> Cid {
    Cid::new_v1(RAW_CODEC, Code::Sha2_256.digest(data))
}

/// CID v1 with the dag-pb codec over the marshaled UnixFS file node
pub fn unixfs_cid(data: &[u8]) -> Cid {
    Cid::new_v1(DAG_PB_CODEC, Code::Sha2_256.digest(&unixfs::file_node(data)))
}

/// Compute the CID v1 for a file or directory tree.
///
/// Directories are reduced to a deterministic fingerprint first; see
/// [`directory_fingerprint`].
pub fn path_cid(path: impl AsRef<Path>, unixfs: bool) -> Result<Cid> {
    let path = path.as_ref();
    let meta = fs::metadata(path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            Error::NotFound(format!("no such file or directory: {}", path.display()))
        } else {
            Error::Io(e)
        }
    })?;

    let data = if meta.is_dir() {
        directory_fingerprint(path)?
    } else {
        fs::read(path)?
    };

    Ok(if unixfs {
        unixfs_cid(&data)
    } else {
        raw_cid(&data)
    })
}

/// Deterministic fingerprint of a directory tree.
///
/// Regular files are visited in sorted relative-path order, each
/// contributing `<relative path><bytes>` to one buffer. Keyed on relative
/// paths so the same tree hashes identically wherever it is rooted.
/// Symlinks and other non-regular entries are skipped.
fn directory_fingerprint(root: &Path) -> Result<Vec<u8>> {
    let mut files = Vec::new();
    collect_files(root, root, &mut files)?;
    files.sort();

    let mut buf = Vec::new();
    for rel in &files {
        buf.extend_from_slice(rel.as_bytes());
        buf.extend_from_slice(&fs::read(root.join(rel))?);
    }
    Ok(buf)
}

/// Collect relative paths of all regular files under `dir`, with `/` as the
/// separator regardless of platform
fn collect_files(root: &Path, dir: &Path, out: &mut Vec<String>) -> Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let file_type = entry.file_type()?;
        let path = entry.path();

        if file_type.is_dir() {
            collect_files(root, &path, out)?;
        } else if file_type.is_file() {
            let rel = path
                .strip_prefix(root)
                .unwrap_or(&path)
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/");
            out.push(rel);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(
        b"hello world".as_slice(),
        "bafkreifzjut3te2nhyekklss27nh3k72ysco7y32koao5eei66wof36n5e"
    )]
    #[case(
        b"".as_slice(),
        "bafkreihdwdcefgh4dqkjv67uzcmw7ojee6xedzdetojuzjevtenxquvyku"
    )]
    fn raw_cid_vectors(#[case] data: &[u8], #[case] expected: &str) {
        assert_eq!(raw_cid(data).to_string(), expected);
    }

    #[rstest]
    #[case(
        b"hello world".as_slice(),
        "bafybeihplkqjere6rno3iupsxmbssrkekvybw532guvazgiq2de3z6shla"
    )]
    #[case(
        b"".as_slice(),
        "bafybeid5xhurnqh3e46vbkc57th4n3fap3rzv47l6ts6i6wid6n6lxh64m"
    )]
    fn unixfs_cid_vectors(#[case] data: &[u8], #[case] expected: &str) {
        assert_eq!(unixfs_cid(data).to_string(), expected);
    }

    #[test]
    fn identical_bytes_identical_cid() {
        assert_eq!(raw_cid(b"same content"), raw_cid(b"same content"));
        assert_ne!(raw_cid(b"same content"), raw_cid(b"other content"));
    }

    #[test]
    fn file_cid_matches_byte_cid() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.bin");
        fs::write(&path, b"hello world").unwrap();

        assert_eq!(path_cid(&path, false).unwrap(), raw_cid(b"hello world"));
        assert_eq!(path_cid(&path, true).unwrap(), unixfs_cid(b"hello world"));
    }

    #[test]
    fn missing_path_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        match path_cid(dir.path().join("absent"), false) {
            Err(Error::NotFound(_)) => {}
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    fn write_tree(root: &Path) {
        fs::create_dir_all(root.join("sub")).unwrap();
        fs::write(root.join("a.txt"), b"alpha").unwrap();
        fs::write(root.join("sub").join("b.txt"), b"beta").unwrap();
    }

    #[test]
    fn directory_cid_known_vector() {
        let dir = tempfile::tempdir().unwrap();
        write_tree(dir.path());

        // a.txt|alpha + sub/b.txt|beta, sorted by relative path
        assert_eq!(
            path_cid(dir.path(), false).unwrap().to_string(),
            "bafkreiehapkl5ucoznj24hfozql5usxz7aqajealrthi23z2v3vhq3ctna"
        );
    }

    #[test]
    fn directory_cid_is_location_independent() {
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();
        write_tree(first.path());
        write_tree(&second.path().join("deeply").join("nested"));

        assert_eq!(
            path_cid(first.path(), false).unwrap(),
            path_cid(second.path().join("deeply").join("nested"), false).unwrap()
        );
    }

    #[test]
    fn directory_cid_sees_renames_and_content_changes() {
        let base = tempfile::tempdir().unwrap();
        write_tree(base.path());
        let base_cid = path_cid(base.path(), false).unwrap();

        let renamed = tempfile::tempdir().unwrap();
        write_tree(renamed.path());
        fs::rename(renamed.path().join("a.txt"), renamed.path().join("c.txt")).unwrap();
        assert_ne!(base_cid, path_cid(renamed.path(), false).unwrap());

        let edited = tempfile::tempdir().unwrap();
        write_tree(edited.path());
        fs::write(edited.path().join("a.txt"), b"ALPHA").unwrap();
        assert_ne!(base_cid, path_cid(edited.path(), false).unwrap());
    }
}
