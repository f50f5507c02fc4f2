//! Filesystem helpers shared across `ide-macros` modules.

use std::io::Read;

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;

/// Reads a file to a string through a capability-scoped directory
/// handle. Callers wrap the I/O error into their own taxonomy.
pub fn read_file(path: &Utf8Path) -> std::io::Result<String> {
    let parent = match path.parent() {
        Some(dir) if !dir.as_str().is_empty() => dir,
        _ => Utf8Path::new("."),
    };
    let file_name = path.file_name().ok_or_else(|| {
        std::io::Error::new(std::io::ErrorKind::InvalidInput, "path has no file name")
    })?;
    let dir = Dir::open_ambient_dir(parent, ambient_authority())?;
    let mut file = dir.open(file_name)?;
    let mut content = String::new();
    file.read_to_string(&mut content)?;
    Ok(content)
}
