//! File writing helpers for help artifacts.

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::{Dir, OpenOptions};
use std::io::Write;

use crate::error::MamlgenError;

/// Ensures a directory exists and returns a handle to it.
///
/// # Errors
///
/// Returns an error when the directory can be neither opened nor created.
pub fn ensure_dir(path: &Utf8Path) -> Result<Dir, MamlgenError> {
    match Dir::open_ambient_dir(path, ambient_authority()) {
        Ok(dir) => Ok(dir),
        Err(open_err) if open_err.kind() == std::io::ErrorKind::NotFound => {
            Dir::create_ambient_dir_all(path, ambient_authority()).map_err(|io_err| {
                MamlgenError::Io {
                    path: path.to_path_buf(),
                    source: io_err,
                }
            })?;
            Dir::open_ambient_dir(path, ambient_authority()).map_err(|io_err| MamlgenError::Io {
                path: path.to_path_buf(),
                source: io_err,
            })
        }
        Err(open_err) => Err(MamlgenError::Io {
            path: path.to_path_buf(),
            source: open_err,
        }),
    }
}

/// Writes one help artifact into `dir`, truncating any existing file.
///
/// Content is written verbatim; the renderer already fixes CRLF line
/// endings. Returns the full path of the written file.
///
/// # Errors
///
/// Returns an error when the file cannot be created or written.
pub fn write_artifact(
    dir: &Dir,
    root: &Utf8Path,
    file_name: &str,
    content: &str,
) -> Result<Utf8PathBuf, MamlgenError> {
    let full_path = root.join(file_name);
    let mut file = dir
        .open_with(
            file_name,
            OpenOptions::new().write(true).create(true).truncate(true),
        )
        .map_err(|io_err| MamlgenError::Io {
            path: full_path.clone(),
            source: io_err,
        })?;

    file.write_all(content.as_bytes())
        .map_err(|io_err| MamlgenError::Io {
            path: full_path.clone(),
            source: io_err,
        })?;

    Ok(full_path)
}
