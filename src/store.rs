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

//! Read-only access to a single Maildir (or Maildir++ sub-folder).

use std::ffi::{OsStr, OsString};
use std::fs;
use std::os::unix::ffi::OsStrExt;
use std::path::{Path, PathBuf};

use crate::support::error::Error;
use crate::support::file_ops;

/// A maildir opened for reading.
#[derive(Debug)]
pub struct MailStore {
    path: PathBuf,
}

/// One message as stored in a maildir.
#[derive(Debug)]
pub struct RawMessage {
    /// The file the message was read from.
    pub path: PathBuf,
    /// The exact stored bytes of the message.
    pub data: Vec<u8>,
}

/// A Maildir++ sub-folder of a maildir.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Folder {
    /// The folder name, without the leading `.` of its directory.
    pub name: OsString,
    pub path: PathBuf,
}

impl MailStore {
    /// Open the maildir at `path`.
    ///
    /// Fails with `Error::StoreOpen` unless `path` is a directory containing
    /// `cur` and `new` subdirectories.
    pub fn open(path: &Path) -> Result<Self, Error> {
        if !path.is_dir() {
            return Err(Error::StoreOpen(
                path.to_owned(),
                "not a directory".to_owned(),
            ));
        }

        for sub in &["cur", "new"] {
            if !path.join(sub).is_dir() {
                return Err(Error::StoreOpen(
                    path.to_owned(),
                    format!("missing {}/ directory", sub),
                ));
            }
        }

        Ok(Self {
            path: path.to_owned(),
        })
    }

    /// List the message files in `cur`, then those in `new`, each ordered by
    /// name.
    ///
    /// Any file not starting with `.` counts, whether or not its name carries
    /// the `:2,` info suffix.
    pub fn message_paths(&self) -> Result<Vec<PathBuf>, Error> {
        let mut paths = Vec::new();
        for sub in &["cur", "new"] {
            let mut found = Vec::new();
            for entry in fs::read_dir(self.path.join(sub))? {
                let entry = entry?;
                let path = entry.path();
                if is_hidden(&entry.file_name()) || path.is_dir() {
                    continue;
                }

                found.push(path);
            }

            found.sort();
            paths.extend(found);
        }

        Ok(paths)
    }

    /// Iterate over every message in `cur` and `new`, reading each one in
    /// full when it is reached.
    pub fn messages(
        &self,
    ) -> Result<impl Iterator<Item = Result<RawMessage, Error>>, Error> {
        Ok(self.message_paths()?.into_iter().map(
            |path| -> Result<RawMessage, Error> {
                let data = fs::read(&path)?;
                Ok(RawMessage { path, data })
            },
        ))
    }

    /// List the sub-folders of this maildir, ordered by name.
    ///
    /// A sub-folder is any directory (or symlink to one) whose name is `.`
    /// followed by at least one more byte.
    pub fn folders(&self) -> Result<Vec<Folder>, Error> {
        let mut folders = Vec::new();
        for (name, path) in file_ops::list_subdirs(&self.path)? {
            let name = name.as_bytes();
            if name.len() < 2 || !is_hidden(OsStr::from_bytes(name)) {
                continue;
            }

            folders.push(Folder {
                name: OsStr::from_bytes(&name[1..]).to_owned(),
                path,
            });
        }

        Ok(folders)
    }
}

fn is_hidden(name: &OsStr) -> bool {
    name.as_bytes().starts_with(b".")
}

#[cfg(test)]
pub mod test_support {
    use std::fs;
    use std::path::Path;

    /// Create an empty maildir at `path`.
    pub fn make_maildir(path: &Path) {
        for sub in &["cur", "new", "tmp"] {
            fs::create_dir_all(path.join(sub)).unwrap();
        }
    }

    /// Drop a message into the `cur` directory of the maildir at `path`.
    pub fn deliver(path: &Path, id: &str, data: &[u8]) {
        fs::write(path.join("cur").join(format!("{}:2,S", id)), data).unwrap();
    }
}

#[cfg(test)]
mod test {
    use std::collections::BTreeSet;
    use std::os::unix::fs::symlink;

    use super::test_support::*;
    use super::*;

    fn folder_names(store: &MailStore) -> Vec<OsString> {
        store
            .folders()
            .unwrap()
            .into_iter()
            .map(|f| f.name)
            .collect()
    }

    #[test]
    fn open_requires_maildir_layout() {
        let tmpdir = tempfile::TempDir::new().unwrap();
        let root = tmpdir.path();

        assert_matches!(
            Err(Error::StoreOpen(..)),
            MailStore::open(&root.join("nx"))
        );

        fs::create_dir(root.join("half")).unwrap();
        fs::create_dir(root.join("half/cur")).unwrap();
        assert_matches!(
            Err(Error::StoreOpen(..)),
            MailStore::open(&root.join("half"))
        );

        make_maildir(&root.join("Maildir"));
        assert!(MailStore::open(&root.join("Maildir")).is_ok());
    }

    #[test]
    fn reads_cur_and_new() {
        let tmpdir = tempfile::TempDir::new().unwrap();
        let md = tmpdir.path().join("Maildir");
        make_maildir(&md);
        deliver(&md, "1.a.host", b"Subject: one\r\n\r\none");
        fs::write(md.join("new/2.b.host"), b"Subject: two\r\n\r\ntwo").unwrap();
        fs::write(md.join("tmp/3.c.host"), b"partial").unwrap();

        let store = MailStore::open(&md).unwrap();
        let contents = store
            .messages()
            .unwrap()
            .map(|m| m.unwrap().data)
            .collect::<BTreeSet<_>>();
        assert_eq!(
            vec![
                b"Subject: one\r\n\r\none".to_vec(),
                b"Subject: two\r\n\r\ntwo".to_vec(),
            ]
            .into_iter()
            .collect::<BTreeSet<_>>(),
            contents
        );
    }

    #[test]
    fn cur_files_need_no_info_suffix() {
        let tmpdir = tempfile::TempDir::new().unwrap();
        let md = tmpdir.path().join("Maildir");
        make_maildir(&md);
        fs::write(md.join("cur/1234.host"), b"Subject: hi\r\n\r\n").unwrap();
        fs::write(md.join("cur/.hidden"), b"not a message").unwrap();
        fs::create_dir(md.join("cur/stray")).unwrap();
        deliver(&md, "5678.host", b"Subject: flagged\r\n\r\n");

        let store = MailStore::open(&md).unwrap();
        assert_eq!(
            vec![md.join("cur/1234.host"), md.join("cur/5678.host:2,S")],
            store.message_paths().unwrap()
        );

        let messages = store
            .messages()
            .unwrap()
            .collect::<Result<Vec<_>, _>>()
            .unwrap();
        assert_eq!(b"Subject: hi\r\n\r\n".to_vec(), messages[0].data);
    }

    #[test]
    fn lists_maildirplusplus_folders() {
        let tmpdir = tempfile::TempDir::new().unwrap();
        let md = tmpdir.path().join("Maildir");
        make_maildir(&md);
        make_maildir(&md.join(".Work"));
        make_maildir(&md.join(".Archive"));
        fs::create_dir(md.join("NotAFolder")).unwrap();
        fs::write(md.join(".notadir"), b"").unwrap();

        let store = MailStore::open(&md).unwrap();
        assert_eq!(
            vec![OsString::from("Archive"), OsString::from("Work")],
            folder_names(&store)
        );
        assert_eq!(md.join(".Work"), store.folders().unwrap()[1].path);
    }

    #[test]
    fn symlinked_folders_are_followed() {
        let tmpdir = tempfile::TempDir::new().unwrap();
        let md = tmpdir.path().join("Maildir");
        make_maildir(&md);
        make_maildir(&tmpdir.path().join("elsewhere"));
        symlink(tmpdir.path().join("elsewhere"), md.join(".Linked")).unwrap();

        let store = MailStore::open(&md).unwrap();
        assert_eq!(vec![OsString::from("Linked")], folder_names(&store));
        assert!(MailStore::open(&store.folders().unwrap()[0].path).is_ok());
    }

    #[test]
    fn non_utf8_folder_names_keep_their_bytes() {
        let tmpdir = tempfile::TempDir::new().unwrap();
        let md = tmpdir.path().join("Maildir");
        make_maildir(&md);
        make_maildir(&md.join(OsStr::from_bytes(b".Caf\xe9")));

        let store = MailStore::open(&md).unwrap();
        let folders = store.folders().unwrap();
        assert_eq!(1, folders.len());
        assert_eq!(OsStr::from_bytes(b"Caf\xe9"), folders[0].name);
        assert!(MailStore::open(&folders[0].path).is_ok());
    }
}
