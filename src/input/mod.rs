// Tue Aug 25 2026 - Alex

use crate::linkmap::LinkMapError;
use encoding_rs::MACINTOSH;
use std::fs;
use std::path::{Path, PathBuf};

/// File name used when the report target is a directory, kept from the
/// original tool so existing workflows keep finding their output.
pub const REPORT_FILE_NAME: &str = "LPLinkMap.txt";

/// Reads a link map file and decodes it as Mac Roman.
///
/// ld64 writes raw filesystem bytes into the map, which are not always
/// valid UTF-8; the single-byte decode accepts every input byte, so a
/// stray high byte in a path cannot fail the read. Downstream code only
/// ever sees UTF-8.
pub fn read_link_map(path: &Path) -> Result<String, LinkMapError> {
    let bytes = fs::read(path)?;
    let (text, _, _) = MACINTOSH.decode(&bytes);
    Ok(text.into_owned())
}

/// Writes the report UTF-8 encoded. A directory target gets
/// `LPLinkMap.txt` created inside it; anything else is treated as the
/// destination file. Returns the path actually written.
pub fn write_report(report: &str, target: &Path) -> Result<PathBuf, LinkMapError> {
    let path = if target.is_dir() {
        target.join(REPORT_FILE_NAME)
    } else {
        target.to_path_buf()
    };
    fs::write(&path, report.as_bytes())?;
    Ok(path)
}
