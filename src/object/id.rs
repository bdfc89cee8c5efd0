use std::fmt::{self, Write};
use std::io::Read;
use std::str::FromStr;

extern crate thiserror;
use thiserror::Error;

use md5::{Digest, Md5};

use super::ContentSource;

/// An error which can be returned when parsing an object ID.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum ParseIdError {
    /// Value being parsed is empty.
    #[error("cannot parse object ID from empty string")]
    Empty,

    /// Contains an invalid digit.
    ///
    /// Among other causes, this variant will be constructed when parsing a string that
    /// contains an upper-case hex digit.
    #[error("value contains invalid digit `{0}`")]
    InvalidDigit(char),

    /// ID string is too large to store in target integer type.
    #[error("value is more than 32 digits long")]
    Overflow,

    /// ID string is too small to store in target integer type.
    #[error("value is less than 32 digits long")]
    Underflow,
}

/// An object ID is a string that identifies an object within a repository.
/// It is stored as a 16-byte digest, but can also be represented as 32 hex digits.
///
/// The all-zero ID is accepted as a valid lookup key; looking it up in a
/// store that never wrote it reports object-not-found, not a parse error.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Id {
    id: Vec<u8>,
}

impl Id {
    /// Create a new ID from a 16-byte slice.
    ///
    /// It is an error if the slice contains anything other than 16 bytes.
    pub fn new(id: &[u8]) -> Result<Id, ParseIdError> {
        match id.len() {
            16 => Ok(Id { id: id.to_vec() }),
            0 => Err(ParseIdError::Empty),
            n if n < 16 => Err(ParseIdError::Underflow),
            _ => Err(ParseIdError::Overflow),
        }
    }

    /// Convert a 32-character hex ID to an object ID.
    ///
    /// It is an error if the ID contains anything other than 32 lowercase hex digits.
    pub fn from_hex<T: AsRef<[u8]>>(id: T) -> Result<Id, ParseIdError> {
        let hex = id.as_ref();

        match hex.len() {
            32 => {
                let byte_chunks = hex.chunks(2);

                let nybbles = byte_chunks.map(|pair| -> Result<u8, ParseIdError> {
                    Ok(digit_value(pair[0])? << 4 | digit_value(pair[1])?)
                });

                let id: Result<Vec<u8>, ParseIdError> = nybbles.collect();
                id.map(|id| Id { id })
            }
            0 => Err(ParseIdError::Empty),
            n if n < 32 => Err(ParseIdError::Underflow),
            _ => Err(ParseIdError::Overflow),
        }
    }

    /// Compute the ID for the given content.
    ///
    /// The digest is a pure function of the content bytes: the same
    /// content always produces the same ID, regardless of when or how
    /// often it is hashed. (No timestamp or other salt is mixed in.)
    pub fn from_content_source(
        content_source: &dyn ContentSource,
    ) -> std::io::Result<Id> {
        let mut hasher = Md5::new();

        {
            let mut reader = content_source.open()?;
            let mut buf = [0; 8192];
            let mut n = 1;

            while n > 0 {
                n = reader.read(&mut buf)?;
                if n > 0 {
                    hasher.update(&buf[..n]);
                }
            }
        }

        let final_hash = hasher.finalize();
        #[allow(deprecated)]
        let id: &[u8] = final_hash.as_slice();

        // We use unwrap here because the hasher is guaranteed
        // to return a 16-byte slice.
        Ok(Id::new(id).unwrap())
    }
}

impl FromStr for Id {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Id::from_hex(s.as_bytes())
    }
}

static CHARS: &[u8] = b"0123456789abcdef";

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &byte in self.id.iter() {
            f.write_char(CHARS[(byte >> 4) as usize].into())?;
            f.write_char(CHARS[(byte & 0xf) as usize].into())?;
        }

        Ok(())
    }
}

fn digit_value(c: u8) -> Result<u8, ParseIdError> {
    match c {
        b'0'..=b'9' => Ok(c - b'0'),
        b'a'..=b'f' => Ok(c - b'a' + 10),
        _ => Err(ParseIdError::InvalidDigit(c as char)),
    }
}
