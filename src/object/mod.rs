//! Represents the concept of an "object": an immutable sequence of bytes
//! identified by the digest of those bytes.

mod content_source;
pub use content_source::{ContentSource, ContentSourceOpenResult, ContentSourceResult};

mod file_content_source;
pub use file_content_source::FileContentSource;

mod id;
pub use id::{Id, ParseIdError};

mod read_content_source;
pub use read_content_source::ReadContentSource;

/// Describes a single object stored (or about to be stored) in a repository.
///
/// This struct is constructed, modified, and shared as a working description of
/// how to find and describe an object before it gets written to a repository.
pub struct Object {
    id: Id,
    content_source: Box<dyn ContentSource>,
}

impl Object {
    /// Create a new Object.
    ///
    /// Computes the object's ID from its content. The content source is
    /// read once, streaming, so this may fail with an I/O error.
    pub fn new(content_source: Box<dyn ContentSource>) -> ContentSourceResult<Object> {
        let id = Id::from_content_source(content_source.as_ref())?;

        Ok(Object { id, content_source })
    }

    /// Return the ID of the object.
    pub fn id(&self) -> &Id {
        &self.id
    }

    /// Return the size (in bytes) of the object.
    pub fn len(&self) -> usize {
        self.content_source.len()
    }

    /// Returns true if the object is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a `BufRead` struct which can be used for reading the content.
    pub fn open<'a>(&'a self) -> ContentSourceOpenResult<'a> {
        self.content_source.open()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Read;

    #[test]
    fn empty_vec() {
        let v = vec![];
        let o = Object::new(Box::new(v)).unwrap();

        // MD5 of empty input.
        assert_eq!(o.id().to_string(), "d41d8cd98f00b204e9800998ecf8427e");
        assert_eq!(o.len(), 0);
        assert!(o.is_empty());

        let mut buf = [0; 10];
        let mut f = o.open().unwrap();

        let r = f.read(&mut buf);
        assert!(r.is_ok());
        assert_eq!(r.unwrap(), 0);
    }

    #[test]
    fn vec_with_content() {
        let v: Vec<u8> = b"example".to_vec();
        let o = Object::new(Box::new(v)).unwrap();

        assert_eq!(o.id().to_string(), "1a79a4d60de6718e8e5b326e338ae533");
        assert_eq!(o.len(), 7);
        assert!(!o.is_empty());

        let mut buf = [0; 20];
        let mut f = o.open().unwrap();

        let r = f.read(&mut buf);
        assert!(r.is_ok());
        assert_eq!(r.unwrap(), 7);
        assert_eq!(&buf[..7], b"example");
    }

    #[test]
    fn str_with_content() {
        let s = "Hello, MiniGit!".to_string();
        let o = Object::new(Box::new(s)).unwrap();

        assert_eq!(o.id().to_string(), "df9fd0134753be4cc96c44fc063e6667");
        assert_eq!(o.len(), 15);
    }

    #[test]
    fn same_content_same_id() {
        let o1 = Object::new(Box::new(b"x".to_vec())).unwrap();
        let o2 = Object::new(Box::new(b"x".to_vec())).unwrap();

        assert_eq!(o1.id(), o2.id());
    }
}
