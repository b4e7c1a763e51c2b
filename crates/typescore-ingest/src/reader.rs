//! Loading table text from disk.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{IngestError, Result};

/// Maximum file size accepted for scoring (500 MB default).
pub const MAX_INPUT_FILE_SIZE: u64 = 500 * 1024 * 1024;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Check file size before loading.
pub fn check_file_size(path: &Path) -> Result<()> {
    check_file_size_with_limit(path, MAX_INPUT_FILE_SIZE)
}

/// Check file size against a custom limit.
pub fn check_file_size_with_limit(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| IngestError::open(path, e))?;

    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }

    Ok(())
}

/// Reject byte order marks of encodings other than UTF-8.
pub fn validate_encoding(path: &Path) -> Result<()> {
    let mut file = File::open(path).map_err(|e| IngestError::open(path, e))?;

    let mut buffer = [0u8; 2];
    let bytes_read = file.read(&mut buffer).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    check_bom(path, &buffer[..bytes_read])
}

fn check_bom(path: &Path, head: &[u8]) -> Result<()> {
    let encoding = match head {
        [0xFF, 0xFE, ..] => "UTF-16 LE",
        [0xFE, 0xFF, ..] => "UTF-16 BE",
        _ => return Ok(()),
    };
    Err(IngestError::UnsupportedEncoding {
        path: path.to_path_buf(),
        encoding,
    })
}

/// Read a whole file as UTF-8 text, dropping a leading UTF-8 byte order mark.
pub fn read_text(path: &Path) -> Result<String> {
    read_text_with_limit(path, MAX_INPUT_FILE_SIZE)
}

/// [`read_text`] with a custom size limit.
pub fn read_text_with_limit(path: &Path, max_size: u64) -> Result<String> {
    check_file_size_with_limit(path, max_size)?;

    let mut bytes = std::fs::read(path).map_err(|e| IngestError::open(path, e))?;
    check_bom(path, &bytes)?;
    if bytes.starts_with(UTF8_BOM) {
        bytes.drain(..UTF8_BOM.len());
    }

    let text = String::from_utf8(bytes).map_err(|source| IngestError::InvalidUtf8 {
        path: path.to_path_buf(),
        source,
    })?;

    if text.is_empty() {
        warn!(path = %path.display(), "input file is empty");
    }
    debug!(path = %path.display(), bytes = text.len(), "read input file");
    Ok(text)
}
