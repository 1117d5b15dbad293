//-
// Copyright (c) 2026, the Emlport authors
//
// This file is part of Emlport.
//
// Emlport is free software: you can  redistribute it and/or modify it under the
// terms of  the GNU General Public  License as published by  the Free Software
// Foundation, either version  3 of the License, or (at  your option) any later
// version.
//
// Emlport is distributed  in the hope that  it will be useful,  but WITHOUT ANY
// WARRANTY; without  even the implied  warranty of MERCHANTABILITY  or FITNESS
// FOR  A PARTICULAR  PURPOSE.  See the  GNU General  Public  License for  more
// details.
//
// You should have received a copy of the GNU General Public License along with
// Emlport. If not, see <http://www.gnu.org/licenses/>.

//! Miscellaneous functions for working with files.

use std::ffi::OsString;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::support::error::Error;

/// Create the directory at `path`, which must not already exist.
///
/// Any failure, including the directory already existing, is reported as
/// `Error::DirectoryCreate`.
pub fn create_dir_new(path: impl AsRef<Path>) -> Result<(), Error> {
    let path = path.as_ref();
    fs::create_dir(path).map_err(|e| Error::DirectoryCreate(path.to_owned(), e))
}

/// Write `data` into the file at `path`, replacing anything already there.
///
/// Returns whether a file previously existed at `path`.
pub fn spit(path: impl AsRef<Path>, data: &[u8]) -> io::Result<bool> {
    let path = path.as_ref();
    let replaced = path.exists();
    let mut file = fs::File::create(path)?;
    file.write_all(data)?;
    Ok(replaced)
}

/// List the immediate subdirectories of `path`, ordered by name.
///
/// Anything that is not a directory (after following symlinks) is skipped.
pub fn list_subdirs(
    path: impl AsRef<Path>,
) -> io::Result<Vec<(OsString, PathBuf)>> {
    let mut dirs = Vec::new();
    for entry in fs::read_dir(path)? {
        let entry = entry?;
        let child = entry.path();
        if child.is_dir() {
            dirs.push((entry.file_name(), child));
        }
    }

    dirs.sort();
    Ok(dirs)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn create_dir_new_refuses_existing() {
        let tmpdir = tempfile::TempDir::new().unwrap();
        let path = tmpdir.path().join("foo");

        create_dir_new(&path).unwrap();
        assert!(path.is_dir());
        assert_matches!(Err(Error::DirectoryCreate(..)), create_dir_new(&path));
    }

    #[test]
    fn spit_reports_replacement() {
        let tmpdir = tempfile::TempDir::new().unwrap();
        let path = tmpdir.path().join("a.eml");

        assert!(!spit(&path, b"first").unwrap());
        assert!(spit(&path, b"second").unwrap());
        assert_eq!(b"second".to_vec(), fs::read(&path).unwrap());
    }

    #[test]
    fn list_subdirs_skips_files() {
        let tmpdir = tempfile::TempDir::new().unwrap();
        fs::create_dir(tmpdir.path().join("b")).unwrap();
        fs::create_dir(tmpdir.path().join("a")).unwrap();
        fs::write(tmpdir.path().join("c"), b"not a dir").unwrap();

        let names = list_subdirs(tmpdir.path())
            .unwrap()
            .into_iter()
            .map(|(name, _)| name)
            .collect::<Vec<_>>();
        assert_eq!(vec![OsString::from("a"), OsString::from("b")], names);
    }
}
