// src/file.rs

use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::csv::write_records;
use crate::error::ScrapeError;
use crate::session::SessionRecord;

/// Create/truncate `path` (and its parent dir) and write all records.
/// Returns the path written to.
pub fn write_sessions(path: &Path, records: &[SessionRecord]) -> Result<PathBuf, ScrapeError> {
    let fail = |source: io::Error| ScrapeError::WriteFailure { path: path.to_path_buf(), source };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent).map_err(fail)?;
        }
    }

    let file = File::create(path).map_err(fail)?; // truncate/overwrite
    let mut out = BufWriter::new(file);
    write_records(&mut out, records).map_err(fail)?;
    out.flush().map_err(fail)?;
    Ok(path.to_path_buf())
}

pub fn ensure_directory(dir: &Path) -> io::Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("Path exists but is not a directory: {}", dir.display()),
        ));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
