use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// I/O failure while loading a source file.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The file could not be opened (missing, permissions, ...).
    #[error("could not open `{}`: {source}", path.display())]
    Open { path: PathBuf, source: io::Error },
    /// The file size could not be determined.
    #[error("could not stat `{}`: {source}", path.display())]
    Metadata { path: PathBuf, source: io::Error },
    /// Reading the contents failed part way.
    #[error("could not read `{}`: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    /// Fewer bytes arrived than the file reported.
    #[error("short read on `{}`: expected {expected} byte(s), got {actual}", path.display())]
    ShortRead {
        path: PathBuf,
        expected: u64,
        actual: u64,
    },
}

impl SourceError {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Open { path, .. }
            | Self::Metadata { path, .. }
            | Self::Read { path, .. }
            | Self::ShortRead { path, .. } => path,
        }
    }
}

/// Read a whole source file into memory.
///
/// The number of bytes read must equal the size reported when the file
/// was opened; anything less is a [`SourceError::ShortRead`].
pub fn read_source(path: &Path) -> Result<Vec<u8>, SourceError> {
    let file = File::open(path).map_err(|source| SourceError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let expected = file
        .metadata()
        .map_err(|source| SourceError::Metadata {
            path: path.to_path_buf(),
            source,
        })?
        .len();

    let bytes = read_sized(path, file, expected)?;
    log::debug!("read {} byte(s) from {}", bytes.len(), path.display());
    Ok(bytes)
}

/// Read at most `expected` bytes from `reader`, failing if fewer arrive.
fn read_sized(path: &Path, reader: impl Read, expected: u64) -> Result<Vec<u8>, SourceError> {
    let mut bytes = Vec::with_capacity(usize::try_from(expected).unwrap_or_default());
    reader
        .take(expected)
        .read_to_end(&mut bytes)
        .map_err(|source| SourceError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    let actual = bytes.len() as u64;
    if actual < expected {
        return Err(SourceError::ShortRead {
            path: path.to_path_buf(),
            expected,
            actual,
        });
    }
    Ok(bytes)
}
