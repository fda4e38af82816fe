//! Utility functions
use std::{
    fs,
    io::{self, BufRead, BufReader, Write},
    path::Path,
};

use crate::error::Result;

/// The legacy GPIO class directory.
///
/// Pin attribute paths are built below here by number, a configured
/// property path only contributes that number. Tests build their pins
/// below scratch directories instead, so keep this the only place naming
/// the real tree.
pub(crate) const GPIO_PATH: &str = "/sys/class/gpio";

/// Read the attribute at `path`.
///
/// Sysfs attributes are single-line text files. Everything up to the first
/// newline is returned, trimmed of surrounding whitespace. Anything past the
/// first newline is ignored.
///
/// # Errors
///
/// - If `path` can't be opened or read
/// - [`io::ErrorKind::UnexpectedEof`] if the file holds no line at all
pub(crate) fn read_line(path: &Path) -> Result<String> {
    let mut line = String::new();
    let read = BufReader::new(fs::File::open(path)?).read_line(&mut line)?;
    if read == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "empty attribute").into());
    }
    let line = line.trim();
    log::trace!("read {}: `{}`", path.display(), line);
    Ok(line.to_owned())
}

/// Overwrite the attribute at `path` with `value`.
///
/// The previous contents are replaced whole. No newline is appended, sysfs
/// stores accept values either way.
///
/// # Errors
///
/// - If `path` doesn't exist or can't be written
pub(crate) fn write_line(path: &Path, value: &str) -> Result<()> {
    log::trace!("write {}: `{}`", path.display(), value);
    let mut file = fs::OpenOptions::new().write(true).truncate(true).open(path)?;
    file.write_all(value.as_bytes())?;
    Ok(())
}
