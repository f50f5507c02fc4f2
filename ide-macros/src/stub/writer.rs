//! Stub artifact writer using `cap_std` for filesystem operations.

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::{Dir, OpenOptions};
use std::io::Write;

use crate::error::IdeMacrosError;

/// Writes one stub artifact, creating parent directories as needed.
///
/// The target is truncated and rewritten in full; a failure part-way
/// through leaves whatever bytes made it to disk, but the error
/// propagates so the run reports failure rather than success.
///
/// # Errors
///
/// Returns [`IdeMacrosError::Io`] when the target cannot be created,
/// opened, or written.
pub fn write_stub(path: &Utf8Path, content: &str) -> Result<Utf8PathBuf, IdeMacrosError> {
    let parent = match path.parent() {
        Some(dir) if !dir.as_str().is_empty() => dir,
        _ => Utf8Path::new("."),
    };
    let file_name = path.file_name().ok_or_else(|| IdeMacrosError::Io {
        path: path.to_path_buf(),
        source: std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "artifact path has no file name",
        ),
    })?;

    let dir = ensure_dir(parent)?;
    let mut file = dir
        .open_with(
            file_name,
            OpenOptions::new().write(true).create(true).truncate(true),
        )
        .map_err(|io_err| IdeMacrosError::Io {
            path: path.to_path_buf(),
            source: io_err,
        })?;

    file.write_all(content.as_bytes())
        .map_err(|io_err| IdeMacrosError::Io {
            path: path.to_path_buf(),
            source: io_err,
        })?;

    Ok(path.to_path_buf())
}

fn ensure_dir(path: &Utf8Path) -> Result<Dir, IdeMacrosError> {
    match Dir::open_ambient_dir(path, ambient_authority()) {
        Ok(dir) => Ok(dir),
        Err(open_err) if open_err.kind() == std::io::ErrorKind::NotFound => {
            Dir::create_ambient_dir_all(path, ambient_authority()).map_err(|io_err| {
                IdeMacrosError::Io {
                    path: path.to_path_buf(),
                    source: io_err,
                }
            })?;
            Dir::open_ambient_dir(path, ambient_authority()).map_err(|io_err| IdeMacrosError::Io {
                path: path.to_path_buf(),
                source: io_err,
            })
        }
        Err(open_err) => Err(IdeMacrosError::Io {
            path: path.to_path_buf(),
            source: open_err,
        }),
    }
}
