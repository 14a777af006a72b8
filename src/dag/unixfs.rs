//! Minimal UnixFS file-node encoding.
//!
//! Marshals the UnixFS `Data` message for a flat file node (type, data,
//! filesize) as standard protobuf tag/varint/length-delimited fields. This
//! is the only message shape the crate ever produces.

/// UnixFS node type for regular files
const TYPE_FILE: u64 = 2;

// Wire tags: field number << 3 | wire type
const TYPE_TAG: u8 = 0x08; // field 1, varint
const DATA_TAG: u8 = 0x12; // field 2, length-delimited
const FILESIZE_TAG: u8 = 0x18; // field 3, varint

/// Marshal the UnixFS `Data` message for a file node holding `data`.
///
/// The data field is omitted for empty content; filesize is always present.
pub(crate) fn file_node(data: &[u8]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(data.len() + 16);
    buf.push(TYPE_TAG);
    put_uvarint(&mut buf, TYPE_FILE);
    if !data.is_empty() {
        buf.push(DATA_TAG);
        put_uvarint(&mut buf, data.len() as u64);
        buf.extend_from_slice(data);
    }
    buf.push(FILESIZE_TAG);
    put_uvarint(&mut buf, data.len() as u64);
    buf
}

/// Append an unsigned LEB128 varint
fn put_uvarint(buf: &mut Vec<u8>, mut value: u64) {
    while value >= 0x80 {
        buf.push((value as u8) | 0x80);
        value >>= 7;
    }
    buf.push(value as u8);
}
