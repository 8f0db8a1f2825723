//! Shared delimited-file plumbing for the parts and admins files.

use std::fs::{self, File};
use std::io;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Terminator, WriterBuilder};
use tempfile::NamedTempFile;

/// Open a headerless, flexible record reader.
///
/// Returns `Ok(None)` when the file does not exist.
pub fn open_reader(path: &Path) -> io::Result<Option<csv::Reader<File>>> {
    match File::open(path) {
        Ok(file) => Ok(Some(
            ReaderBuilder::new()
                .has_headers(false)
                .flexible(true)
                .from_reader(file),
        )),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e),
    }
}

/// 1-based line number a record started on (0 if unknown).
pub fn line_of(record: &StringRecord) -> u64 {
    record.position().map_or(0, csv::Position::line)
}

/// Replace the file at `path` with the records produced by `write`.
///
/// Records go to a temporary file in the same directory which is then renamed
/// over `path`, so readers see either the old contents or the new ones. An
/// existing file's permissions carry over to the replacement.
pub fn replace_with<F>(path: &Path, write: F) -> csv::Result<()>
where
    F: FnOnce(&mut csv::Writer<&File>) -> csv::Result<()>,
{
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let tmp = NamedTempFile::new_in(dir)?;

    {
        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(tmp.as_file());
        write(&mut writer)?;
        writer.flush()?;
    }

    match fs::metadata(path) {
        Ok(meta) => tmp.as_file().set_permissions(meta.permissions())?,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(e.into()),
    }

    tmp.persist(path).map_err(|e| csv::Error::from(e.error))?;
    Ok(())
}
