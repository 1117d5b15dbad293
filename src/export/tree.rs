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

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use super::exporter::MessageExporter;
use super::ExportStats;
use crate::support::error::Error;
use crate::support::export_config::ExportConfig;
use crate::support::file_ops;
use crate::support::log_prefix::LogPrefix;

/// Mirrors a directory tree, exporting every maildir found within it.
pub struct TreeReplicator<'a> {
    log_prefix: LogPrefix,
    config: &'a ExportConfig,
}

impl<'a> TreeReplicator<'a> {
    pub fn new(log_prefix: LogPrefix, config: &'a ExportConfig) -> Self {
        Self { log_prefix, config }
    }

    /// Replicate `source_root` as a new directory of the same name under
    /// `dest_root`.
    ///
    /// If that directory already exists, it is deleted first when `overwrite`
    /// is true; otherwise this fails with `Error::DestinationExists` before
    /// anything is written.
    pub fn run(
        &self,
        source_root: &Path,
        dest_root: &Path,
        overwrite: bool,
    ) -> Result<ExportStats, Error> {
        if !source_root.is_dir() {
            return Err(Error::InvalidInput(
                source_root.to_owned(),
                "source path is not a directory",
            ));
        }

        if !dest_root.is_dir() {
            return Err(Error::InvalidInput(
                dest_root.to_owned(),
                "destination path is not a directory",
            ));
        }

        let base = base_name(source_root)?;
        let dest_dir = dest_root.join(&base);
        if dest_root
            .canonicalize()?
            .join(&base)
            .starts_with(source_root.canonicalize()?)
        {
            return Err(Error::InvalidInput(
                dest_dir,
                "destination would be inside the source tree",
            ));
        }

        if fs::symlink_metadata(&dest_dir).is_ok() {
            if !overwrite {
                return Err(Error::DestinationExists(dest_dir));
            }

            warn!(
                "{} Destination dir {} already exists, deleting it",
                self.log_prefix,
                dest_dir.display()
            );
            if dest_dir.is_dir() {
                fs::remove_dir_all(&dest_dir)?;
            } else {
                fs::remove_file(&dest_dir)?;
            }
        }

        debug!("{} Creating {}", self.log_prefix, dest_dir.display());
        file_ops::create_dir_new(&dest_dir)?;

        let mut stats = ExportStats {
            directories: 1,
            ..ExportStats::default()
        };
        self.mirror(source_root, &dest_dir, &mut stats)?;
        Ok(stats)
    }

    fn mirror(
        &self,
        source_dir: &Path,
        dest_dir: &Path,
        stats: &mut ExportStats,
    ) -> Result<(), Error> {
        for (name, path) in file_ops::list_subdirs(source_dir)? {
            if name.as_os_str() == OsStr::new(&self.config.marker) {
                info!(
                    "{} Processing maildir {} into {}",
                    self.log_prefix,
                    path.display(),
                    dest_dir.display()
                );
                *stats += MessageExporter::new(
                    LogPrefix::for_store("maildir", &path),
                    self.config,
                    &path,
                )
                .export(dest_dir)?;
                continue;
            }

            let sub_dest = dest_dir.join(&name);
            info!(
                "{} Recreating directory {} as {}",
                self.log_prefix,
                path.display(),
                sub_dest.display()
            );
            file_ops::create_dir_new(&sub_dest)?;
            stats.directories += 1;
            self.mirror(&path, &sub_dest, stats)?;
        }

        Ok(())
    }
}

/// The final component of `path`, resolving things like `.` through the file
/// system if necessary.
fn base_name(path: &Path) -> Result<PathBuf, Error> {
    if let Some(name) = path.file_name() {
        return Ok(PathBuf::from(name));
    }

    path.canonicalize()?
        .file_name()
        .map(PathBuf::from)
        .ok_or_else(|| {
            Error::InvalidInput(
                path.to_owned(),
                "source path has no directory name",
            )
        })
}
