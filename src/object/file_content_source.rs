use std::convert::AsRef;
use std::fs::{self, File};
use std::io::{self, BufReader, Error, ErrorKind};
use std::path::{Path, PathBuf};

use super::{ContentSource, ContentSourceOpenResult};

/// Implements `ContentSource` to read content from a file on disk.
pub struct FileContentSource {
    path: PathBuf,
    len: usize,
}

impl FileContentSource {
    /// Create a `FileContentSource` for a file that exists
    /// already on disk.
    pub fn new<P: AsRef<Path>>(path: P) -> io::Result<FileContentSource> {
        let m = fs::metadata(&path)?;
        if !m.is_file() {
            return Err(Error::new(ErrorKind::NotFound, "not a single file"));
        }

        Ok(FileContentSource {
            len: m.len() as usize,
            path: path.as_ref().to_owned(),
        })
    }
}

impl ContentSource for FileContentSource {
    fn len(&self) -> usize {
        self.len
    }

    fn open<'a>(&'a self) -> ContentSourceOpenResult<'a> {
        let f = File::open(&self.path)?;
        Ok(Box::new(BufReader::new(f)))
    }
}
