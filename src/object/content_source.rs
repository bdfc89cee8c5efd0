use std::io::{BufRead, Cursor, Result};
use std::vec::Vec;

/// A specialized `Result` type for `ContentSource` operations.
pub type ContentSourceResult<T> = Result<T>;

/// The result type returned when opening a `ContentSource` for reading.
pub type ContentSourceOpenResult<'a> = ContentSourceResult<Box<dyn BufRead + 'a>>;

/// Trait used for reading object content from various sources.
pub trait ContentSource {
    /// Returns the length (in bytes) of the content.
    fn len(&self) -> usize;

    /// Returns true if the content is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a `BufRead` struct which can be used for reading the content.
    fn open<'a>(&'a self) -> ContentSourceOpenResult<'a>;
}

impl ContentSource for Vec<u8> {
    fn len(&self) -> usize {
        self.len()
    }

    fn open<'a>(&'a self) -> ContentSourceOpenResult<'a> {
        Ok(Box::new(Cursor::new(self)))
    }
}

impl ContentSource for String {
    fn len(&self) -> usize {
        self.len()
    }

    fn open<'a>(&'a self) -> ContentSourceOpenResult<'a> {
        Ok(Box::new(Cursor::new(self.as_bytes())))
    }
}
