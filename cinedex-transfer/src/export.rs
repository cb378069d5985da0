//! Export movie records to an indented JSON file.

use std::io;
use std::path::Path;

use cinedex_catalog::MovieRecord;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::error::TransferError;

const INDENT: &[u8] = b"    ";

/// Render records as a JSON array with four-space indentation.
///
/// Non-ASCII text is written as-is, not `\u` escaped.
pub fn export_string(records: &[MovieRecord]) -> Result<String, TransferError> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut ser = Serializer::with_formatter(&mut buf, formatter);
    records
        .serialize(&mut ser)
        .map_err(|e| TransferError::Io(e.into()))?;
    buf.push(b'\n');
    String::from_utf8(buf)
        .map_err(|e| TransferError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
}

/// Write records to `path`, replacing any existing file.
///
/// Returns the number of records written.
pub fn export_file(path: &Path, records: &[MovieRecord]) -> Result<usize, TransferError> {
    let json = export_string(records)?;
    std::fs::write(path, json)?;
    log::debug!("Wrote {} movie(s) to {}", records.len(), path.display());
    Ok(records.len())
}
