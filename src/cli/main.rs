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

use std::path::PathBuf;

use log::{info, LevelFilter};
use structopt::StructOpt;

use crate::export::tree::TreeReplicator;
use crate::support::export_config::ExportConfig;
use crate::support::log_prefix::LogPrefix;
use crate::support::sysexits::*;

/// Export every maildir within a directory tree as individual EML files.
///
/// A directory named after SOURCE is created inside DEST. Every plain
/// directory beneath SOURCE is recreated there; files outside of maildirs are
/// not copied.
///
/// A directory whose name is the maildir marker ("Maildir" by default) is
/// read as a maildir instead. Each of its messages is written, byte for byte,
/// into the directory that contains the maildir, under a name of the form
///
///   YYYY-MM-DD HH:MM:SS Subject.eml
///
/// using the date and time written in the message's Date header and a
/// cleaned-up copy of its subject. Maildir++ sub-folders (".Work" and so on) become
/// subdirectories ("Work") exported the same way.
///
/// Messages whose names come out identical overwrite each other.
#[derive(StructOpt)]
#[structopt(max_term_width = 80)]
pub(super) struct Command {
    /// Delete the destination directory first if it already exists.
    #[structopt(short, long)]
    pub(super) force: bool,

    /// Treat directories with this name as maildirs [default: Maildir]
    #[structopt(long)]
    pub(super) marker: Option<String>,

    /// Read export options from this TOML file. Options given on the command
    /// line take precedence.
    #[structopt(long, parse(from_os_str))]
    pub(super) config: Option<PathBuf>,

    /// Log every folder and every name collision.
    #[structopt(short, long)]
    pub(super) verbose: bool,

    /// Only log warnings and errors.
    #[structopt(short, long, conflicts_with = "verbose")]
    pub(super) quiet: bool,

    /// The root of the tree to export.
    #[structopt(parse(from_os_str))]
    pub(super) source: PathBuf,

    /// The directory in which to create the exported tree.
    #[structopt(parse(from_os_str))]
    pub(super) dest: PathBuf,
}

impl Command {
    /// Produce the effective configuration: the config file if one was given,
    /// with command-line options layered on top.
    fn export_config(&self) -> ExportConfig {
        let mut config = match self.config {
            None => ExportConfig::default(),
            Some(ref path) => match ExportConfig::load(path) {
                Ok(config) => config,
                Err(e) => {
                    // Logging isn't set up yet, since the config decides the
                    // level
                    eprintln!("{}", e);
                    EX_CONFIG.exit()
                }
            },
        };

        if let Some(ref marker) = self.marker {
            config.marker = marker.clone();
        }

        if self.verbose {
            config.log_level = LevelFilter::Debug.to_string();
        } else if self.quiet {
            config.log_level = LevelFilter::Warn.to_string();
        }

        config
    }
}

pub fn main() {
    // Clap exits with status 1 instead of EX_USAGE if we use the more concise
    // API
    let cmd = Command::from_clap(&match Command::clap().get_matches_safe() {
        Ok(matches) => matches,
        Err(
            e @ clap::Error {
                kind: clap::ErrorKind::HelpDisplayed,
                ..
            },
        )
        | Err(
            e @ clap::Error {
                kind: clap::ErrorKind::VersionDisplayed,
                ..
            },
        ) => {
            println!("{}", e.message);
            return;
        }
        Err(e) => {
            eprintln!("{}", e.message);
            EX_USAGE.exit()
        }
    });

    let config = cmd.export_config();
    crate::init_simple_log(
        config.log_level_filter().unwrap_or(LevelFilter::Info),
    );

    let replicator = TreeReplicator::new(LogPrefix::new("tree"), &config);
    match replicator.run(&cmd.source, &cmd.dest, cmd.force) {
        Ok(stats) => info!("Export complete: {}", stats),
        Err(e) => die!(Sysexit::from(&e), "Export failed: {}", e),
    }
}
