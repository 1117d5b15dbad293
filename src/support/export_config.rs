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

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::Error;

/// Options controlling an export.
///
/// These can be given in a TOML file passed with `--config`. Every field is
/// optional; command-line flags take precedence over the file.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct ExportConfig {
    /// The name of directories which are to be treated as maildirs rather
    /// than mirrored as plain directories.
    pub marker: String,

    /// Subjects longer than this many characters are truncated when deriving
    /// file names, and have `…` appended.
    pub max_subject_chars: usize,

    /// The subject used for messages with no `Subject` header.
    pub no_subject: String,

    /// The most verbose level to log at: one of `off`, `error`, `warn`,
    /// `info`, `debug`, or `trace`.
    pub log_level: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            marker: "Maildir".to_owned(),
            max_subject_chars: 100,
            no_subject: "(no subject)".to_owned(),
            log_level: "info".to_owned(),
        }
    }
}

impl ExportConfig {
    /// Load the configuration from the TOML file at `path`.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let data = fs::read(path)
            .map_err(|e| Error::Config(path.to_owned(), e.to_string()))?;
        let config: Self = toml::from_slice(&data)
            .map_err(|e| Error::Config(path.to_owned(), e.to_string()))?;
        config.validate(path)?;
        Ok(config)
    }

    pub fn log_level_filter(&self) -> Option<log::LevelFilter> {
        self.log_level.parse().ok()
    }

    fn validate(&self, path: &Path) -> Result<(), Error> {
        let bad = |what: &str| Err(Error::Config(path.to_owned(), what.to_owned()));

        if self.marker.is_empty() || self.marker.contains('/') {
            return bad("marker must be a plain directory name");
        }
        if 0 == self.max_subject_chars {
            return bad("max_subject_chars must be positive");
        }
        if self.log_level_filter().is_none() {
            return bad("unknown log_level");
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn defaults_fill_missing_fields() {
        let tmpdir = tempfile::TempDir::new().unwrap();
        let path = tmpdir.path().join("emlport.toml");
        fs::write(&path, "marker = \"Mail\"\n").unwrap();

        let config = ExportConfig::load(&path).unwrap();
        assert_eq!("Mail", config.marker);
        assert_eq!(100, config.max_subject_chars);
        assert_eq!("(no subject)", config.no_subject);
        assert_eq!(Some(log::LevelFilter::Info), config.log_level_filter());
    }

    #[test]
    fn invalid_files_rejected() {
        let tmpdir = tempfile::TempDir::new().unwrap();
        let path = tmpdir.path().join("emlport.toml");

        fs::write(&path, "max_subject_chars = \"lots\"\n").unwrap();
        assert_matches!(Err(Error::Config(..)), ExportConfig::load(&path));

        fs::write(&path, "max_subject_chars = 0\n").unwrap();
        assert_matches!(Err(Error::Config(..)), ExportConfig::load(&path));

        fs::write(&path, "log_level = \"loud\"\n").unwrap();
        assert_matches!(Err(Error::Config(..)), ExportConfig::load(&path));

        assert_matches!(
            Err(Error::Config(..)),
            ExportConfig::load(&tmpdir.path().join("nx.toml"))
        );
    }
}
