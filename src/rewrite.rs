//! Whole-file read and replace.
//!
//! Both tools read a file completely, transform it in memory and write the
//! result back in one go. Writes land in a temporary file next to the
//! destination which is then renamed over it, so a failed run never leaves a
//! half-written file behind. A symlinked destination is written through: the
//! file it points at is replaced and the link stays.

use crate::error::RewriteError;
use std::fs;
use std::io::Write;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;
use tempfile::NamedTempFile;

const NEW_FILE_MODE: u32 = 0o644;

pub fn read_text(path: &Path) -> Result<String, RewriteError> {
    fs::read_to_string(path).map_err(|source| RewriteError::Read {
        path: path.to_path_buf(),
        source,
    })
}

pub fn write_atomic(path: &Path, contents: &[u8]) -> Result<(), RewriteError> {
    let write_err = |source| RewriteError::Write {
        path: path.to_path_buf(),
        source,
    };

    let target = match fs::symlink_metadata(path) {
        Ok(meta) if meta.file_type().is_symlink() => fs::canonicalize(path).map_err(write_err)?,
        _ => path.to_path_buf(),
    };
    let path = target.as_path();

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
    tmp.write_all(contents).map_err(write_err)?;
    tmp.as_file().sync_all().map_err(write_err)?;

    // Keep the mode of the file being replaced; tempfiles are created 0600
    let permissions = match fs::metadata(path) {
        Ok(meta) => meta.permissions(),
        Err(_) => fs::Permissions::from_mode(NEW_FILE_MODE),
    };
    fs::set_permissions(tmp.path(), permissions).map_err(write_err)?;

    tmp.persist(path).map_err(|e| write_err(e.error))?;
    log::debug!("wrote {} ({} bytes)", path.display(), contents.len());
    Ok(())
}
