//! Whole-file JSON persistence for a month's records.

use crate::errors::AppResult;
use crate::models::Record;
use std::fs;
use std::path::Path;

/// Load the records stored at `path`.
///
/// A missing or zero-length file is an empty collection.
pub fn load_records(path: &Path) -> AppResult<Vec<Record>> {
    match fs::metadata(path) {
        Ok(meta) if meta.is_file() && meta.len() > 0 => {}
        Ok(_) => return Ok(Vec::new()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    }

    let content = fs::read_to_string(path)?;
    let records: Vec<Record> = serde_json::from_str(&content)?;
    Ok(records)
}

/// Replace the file at `path` with the full collection.
///
/// Written to a sibling temp file first and renamed over the target.
pub fn write_records(path: &Path, records: &[Record]) -> AppResult<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }

    let mut json = serde_json::to_string_pretty(records)?;
    json.push('\n');

    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

/// Remove the backing file; absence is not an error.
pub fn remove_records(path: &Path) -> AppResult<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}
