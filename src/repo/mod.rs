//! Represents an abstract minigit repository.
//!
//! ## Design Goals
//!
//! Minigit intends to allow repositories to be stored in multiple different
//! mechanisms. While it includes built-in support for local on-disk
//! repositories (see `minigit::repo::on_disk`), you could envision
//! repositories stored entirely in memory, or on a remote file system or
//! database.

mod error;
pub use error::{Error, Result};

pub mod on_disk;
pub use on_disk::OnDisk;

use crate::object::{Id, Object};

/// A struct that implements the `Repo` trait represents a particular mechanism
/// for storing and accessing a minigit repo.
///
/// The methods on this trait represent the most primitive operations
/// which must be defined for a given storage architecture: writing an
/// object's content under its digest and retrieving that content by
/// digest later. Everything else a version-control tool does (trees,
/// commits, branches, merges) is built on top of these.
pub trait Repo {
    /// Write the object's content verbatim into the store.
    ///
    /// Returns the object's ID on success. If the content could not be
    /// persisted, no ID is returned.
    ///
    /// Objects are write-once by convention: writing to an ID that
    /// already exists replaces the previous content (last writer wins).
    fn put_object(&mut self, object: &Object) -> Result<Id>;

    /// Read back the exact bytes previously written for the given ID.
    ///
    /// Fails with [`Error::ObjectNotFound`] when no object exists for
    /// the ID, distinct from other I/O failures.
    ///
    /// [`Error::ObjectNotFound`]: enum.Error.html#variant.ObjectNotFound
    fn get_object(&self, id: &Id) -> Result<Vec<u8>>;
}
