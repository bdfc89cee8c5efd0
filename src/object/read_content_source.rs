use std::io::{self, Cursor, Error, ErrorKind, Read};

use super::{ContentSource, ContentSourceOpenResult};

/// Implements [`ContentSource`] to read content from
/// an arbitrary [`Read`] struct (often `stdin`).
///
/// This is not intended for heavy-weight production use.
/// Since minigit isn't optimized to perform single-pass reading
/// of content, it buffers the [`Read`] content so as to allow
/// multiple reads.
///
/// For safety, it will fail if the source content exceeds an
/// arbitrary limit (currently 20MB).
///
/// [`ContentSource`]: trait.ContentSource.html
/// [`Read`]: https://doc.rust-lang.org/std/io/trait.Read.html
pub struct ReadContentSource {
    content: Vec<u8>,
}

const MAX_SIZE: usize = 20 * 1024 * 1024;

impl ReadContentSource {
    /// Create a `ReadContentSource` for an arbitrary [`Read`] struct.
    ///
    /// [`Read`]: https://doc.rust-lang.org/std/io/trait.Read.html
    pub fn new<R: Read>(r: R) -> io::Result<ReadContentSource> {
        let mut content: Vec<u8> = Vec::new();

        let mut take = r.take(MAX_SIZE as u64 + 1);
        let size = take.read_to_end(&mut content)?;
        if size > MAX_SIZE {
            Err(Error::new(
                ErrorKind::InvalidData,
                format!("read beyond {} byte limit", MAX_SIZE),
            ))
        } else {
            Ok(ReadContentSource { content })
        }
    }
}

impl ContentSource for ReadContentSource {
    fn len(&self) -> usize {
        self.content.len()
    }

    fn open<'a>(&'a self) -> ContentSourceOpenResult<'a> {
        Ok(Box::new(Cursor::new(&self.content)))
    }
}
