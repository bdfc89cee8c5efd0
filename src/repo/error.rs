use std::io;
use std::path::PathBuf;

extern crate thiserror;
use thiserror::Error;

use crate::object::{Id, ParseIdError};

/// Describes the potential error conditions that might arise from minigit `Repo` operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("work dir doesn't exist `{0}`")]
    WorkDirDoesntExist(PathBuf),

    #[error("minigit dir doesn't exist `{0}`")]
    RepoDirDoesntExist(PathBuf),

    /// A required directory could not be created. Reported per path;
    /// initialization fails overall if any required directory is missing.
    #[error("unable to create directory `{path}`")]
    PathCreation { path: PathBuf, source: io::Error },

    /// The HEAD file could not be written. Fatal to `init`: the
    /// repository is unusable without it.
    #[error("unable to write HEAD file `{path}`")]
    HeadWrite { path: PathBuf, source: io::Error },

    /// The destination object file could not be written. No digest is
    /// surfaced as valid when this occurs.
    #[error("unable to write object `{id}`")]
    ObjectWrite { id: Id, source: io::Error },

    /// The requested digest has no corresponding object file.
    /// Distinguished from generic I/O failure so callers can branch on
    /// "missing" vs "broken."
    #[error("object `{0}` not found")]
    ObjectNotFound(Id),

    #[error(transparent)]
    ParseIdError(#[from] ParseIdError),

    #[error(transparent)]
    IoError(#[from] io::Error),
}

/// A specialized `Result` type for minigit `Repo` operations.
pub type Result<T> = std::result::Result<T, Error>;
