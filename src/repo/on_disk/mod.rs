//! A repository that stores content on the local file system.
//!
//! Content lives in a `.minigit` folder inside the working directory:
//!
//! ```text
//! .minigit/
//!   HEAD                     "ref: refs/heads/main"
//!   objects/<digest>         raw content, one file per object
//!   refs/heads/main          empty until the first commit is recorded
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use super::{Error, Repo, Result};
use crate::object::{Id, Object};

/// Name of the branch that `HEAD` points at after initialization.
const DEFAULT_BRANCH: &str = "main";

/// Implementation of `minigit::repo::Repo` that stores content on the local file system.
#[derive(Debug)]
pub struct OnDisk {
    work_dir: PathBuf,
    minigit_dir: PathBuf,
}

impl OnDisk {
    /// Create an on-disk minigit repository.
    ///
    /// `work_dir` should be the top-level working directory. A `.minigit`
    /// directory should exist at this path. Use the `init` function to create
    /// an empty on-disk repository if necessary.
    pub fn new(work_dir: &Path) -> Result<Self> {
        let work_dir = work_dir.to_path_buf();
        if !work_dir.exists() {
            return Err(Error::WorkDirDoesntExist(work_dir));
        }

        let minigit_dir = work_dir.join(".minigit");
        if !minigit_dir.exists() {
            return Err(Error::RepoDirDoesntExist(minigit_dir));
        }

        Ok(OnDisk {
            work_dir,
            minigit_dir,
        })
    }

    /// Creates a new, empty minigit repository on the local file system.
    ///
    /// Initialization is idempotent and non-destructive: running it on an
    /// existing repository recreates any missing directories, resets `HEAD`
    /// to point at `main`, and leaves existing branch pointer files alone.
    pub fn init(work_dir: &Path) -> Result<Self> {
        let minigit_dir = work_dir.join(".minigit");

        // Re-init is a no-op for the root itself. If the root is missing and
        // can't be created there is no point attempting the sub-paths.
        if !minigit_dir.is_dir() {
            fs::create_dir_all(&minigit_dir).map_err(|source| Error::PathCreation {
                path: minigit_dir.clone(),
                source,
            })?;
        }

        create_store_dirs(&minigit_dir)?;
        create_head(&minigit_dir)?;
        create_default_branch(&minigit_dir)?;

        Ok(OnDisk {
            work_dir: work_dir.to_path_buf(),
            minigit_dir,
        })
    }

    /// Return the working directory for this repo.
    pub fn work_dir(&self) -> &Path {
        self.work_dir.as_path()
    }

    /// Return the path to the `.minigit` directory.
    pub fn minigit_dir(&self) -> &Path {
        self.minigit_dir.as_path()
    }

    fn objects_dir(&self) -> PathBuf {
        self.minigit_dir.join("objects")
    }
}

impl Repo for OnDisk {
    fn put_object(&mut self, object: &Object) -> Result<Id> {
        let id = object.id().clone();
        let objects_dir = self.objects_dir();
        let object_path = objects_dir.join(id.to_string());

        write_object_file(&objects_dir, &object_path, object).map_err(|source| {
            Error::ObjectWrite {
                id: object.id().clone(),
                source,
            }
        })?;

        Ok(id)
    }

    fn get_object(&self, id: &Id) -> Result<Vec<u8>> {
        let object_path = self.objects_dir().join(id.to_string());

        match fs::read(&object_path) {
            Ok(content) => Ok(content),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                Err(Error::ObjectNotFound(id.clone()))
            }
            Err(err) => Err(err.into()),
        }
    }
}

fn create_store_dirs(minigit_dir: &Path) -> Result<()> {
    // Attempt every directory even if one fails, then report the first
    // failure: initialization fails overall if any required path is missing.
    let mut first_failure = None;

    for dir in &["objects", "refs", "refs/heads"] {
        let path = minigit_dir.join(dir);
        if let Err(source) = fs::create_dir_all(&path) {
            if first_failure.is_none() {
                first_failure = Some(Error::PathCreation { path, source });
            }
        }
    }

    match first_failure {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

fn create_head(minigit_dir: &Path) -> Result<()> {
    let head_path = minigit_dir.join("HEAD");
    let head_txt = format!("ref: refs/heads/{}\n", DEFAULT_BRANCH);

    // HEAD is rewritten on every init, even when a different branch was
    // active before; branch pointer files are never touched.
    fs::write(&head_path, head_txt).map_err(|source| Error::HeadWrite {
        path: head_path,
        source,
    })
}

fn create_default_branch(minigit_dir: &Path) -> Result<()> {
    let branch_path = minigit_dir.join("refs/heads").join(DEFAULT_BRANCH);

    // An empty branch pointer is valid and means "no commits yet". An
    // existing pointer may already hold a digest, so never truncate it.
    if !branch_path.exists() {
        fs::write(&branch_path, b"")?;
    }

    Ok(())
}

fn write_object_file(objects_dir: &Path, object_path: &Path, object: &Object) -> io::Result<()> {
    // Write to a uniquely named temp file in the objects directory, then
    // rename into place so a reader never observes a partial object.
    let mut temp = NamedTempFile::new_in(objects_dir)?;

    {
        let mut reader = object.open()?;
        io::copy(&mut reader, &mut temp)?;
    }

    temp.persist(object_path).map_err(|err| err.error)?;
    Ok(())
}
