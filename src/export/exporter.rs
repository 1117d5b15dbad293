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

use std::path::{Path, PathBuf};

use log::{debug, error};

use super::file_name::{file_name, sanitise_subject};
use super::ExportStats;
use crate::mime::date::message_date;
use crate::mime::encoded_word::decode_header_text;
use crate::mime::header::MessageHeaders;
use crate::store::{MailStore, RawMessage};
use crate::support::error::Error;
use crate::support::export_config::ExportConfig;
use crate::support::file_ops;
use crate::support::log_prefix::LogPrefix;

/// Exports one maildir, and all its sub-folders, into a directory of EML
/// files.
pub struct MessageExporter<'a> {
    log_prefix: LogPrefix,
    config: &'a ExportConfig,
    source: PathBuf,
}

impl<'a> MessageExporter<'a> {
    pub fn new(
        log_prefix: LogPrefix,
        config: &'a ExportConfig,
        source: impl Into<PathBuf>,
    ) -> Self {
        Self {
            log_prefix,
            config,
            source: source.into(),
        }
    }

    /// Write every message of the maildir into `dest`, which must already
    /// exist, and recreate each sub-folder as a subdirectory of `dest`.
    ///
    /// The first failure aborts the export; whatever was already written is
    /// left in place.
    pub fn export(&self, dest: &Path) -> Result<ExportStats, Error> {
        let mut stats = ExportStats {
            stores: 1,
            ..ExportStats::default()
        };
        self.export_folder(&self.log_prefix, &self.source, dest, &mut stats)?;
        Ok(stats)
    }

    fn export_folder(
        &self,
        log_prefix: &LogPrefix,
        source: &Path,
        dest: &Path,
        stats: &mut ExportStats,
    ) -> Result<(), Error> {
        debug!(
            "{} Processing folder {} into {}",
            log_prefix,
            source.display(),
            dest.display()
        );

        let store = MailStore::open(source)?;
        for message in store.messages()? {
            self.export_message(log_prefix, message?, dest, stats)?;
        }

        for folder in store.folders()? {
            let sub_dest = dest.join(&folder.name);
            file_ops::create_dir_new(&sub_dest)?;
            stats.folders += 1;

            self.export_folder(
                &log_prefix.with_folder(&folder.name.to_string_lossy()),
                &folder.path,
                &sub_dest,
                stats,
            )?;
        }

        Ok(())
    }

    fn export_message(
        &self,
        log_prefix: &LogPrefix,
        message: RawMessage,
        dest: &Path,
        stats: &mut ExportStats,
    ) -> Result<(), Error> {
        let name = match derive_file_name(&message.data, self.config) {
            Ok(name) => name,
            Err(e) => {
                error!(
                    "{} Cannot name {}: {}",
                    log_prefix,
                    message.path.display(),
                    e
                );
                return Err(e);
            }
        };

        let path = dest.join(&name);
        if file_ops::spit(&path, &message.data)? {
            debug!(
                "{} {} replaced an earlier message named {:?}",
                log_prefix,
                message.path.display(),
                name
            );
            stats.replaced += 1;
        }
        stats.messages += 1;

        Ok(())
    }
}

/// Derive the file name under which the message `data` is exported.
pub fn derive_file_name(
    data: &[u8],
    config: &ExportConfig,
) -> Result<String, Error> {
    let headers = MessageHeaders::parse(data);
    let subject = match headers.raw_value("Subject") {
        None => config.no_subject.clone(),
        Some(raw) => decode_header_text(raw)?,
    };
    let date = message_date(headers.raw_value("Date"));

    Ok(file_name(
        &date,
        &sanitise_subject(&subject, config.max_subject_chars),
    ))
}
