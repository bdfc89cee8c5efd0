use std::{env, path::Path};

use crate::repo::{OnDisk, Result};

// Discover a minigit repo starting from the given path.
//
// For now this handles only the most simple case where there is a
// `.minigit` directory nested directly within the given path.
pub(crate) fn from_path<P: AsRef<Path>>(path: P) -> Result<OnDisk> {
    OnDisk::new(path.as_ref())
}

// Discover a minigit repo starting from the current working directory.
pub(crate) fn from_current_dir() -> Result<OnDisk> {
    let path = env::current_dir()?;
    from_path(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::repo::Error;

    #[test]
    fn simple_case() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path();

        OnDisk::init(path).unwrap();

        let repo = from_path(path).unwrap();
        assert_eq!(repo.work_dir(), path);
    }

    #[test]
    fn work_dir_doesnt_exist() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut path = temp_dir.path().to_path_buf();
        path.push("nope");

        let err = from_path(&path).unwrap_err();
        if let Error::WorkDirDoesntExist(err_path) = err {
            assert_eq!(err_path, path);
        } else {
            panic!("Unexpected error response: {:?}", err);
        }
    }

    #[test]
    fn minigit_dir_doesnt_exist() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path();

        let mut minigit_dir = path.to_path_buf();
        minigit_dir.push(".minigit"); // but we don't create it

        let err = from_path(&path).unwrap_err();
        if let Error::RepoDirDoesntExist(err_path) = err {
            assert_eq!(err_path, minigit_dir.as_path());
        } else {
            panic!("Unexpected error response: {:?}", err);
        }
    }
}
