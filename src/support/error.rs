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

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{}: {}", .0.display(), .1)]
    InvalidInput(PathBuf, &'static str),
    #[error("Destination directory {} already exists", .0.display())]
    DestinationExists(PathBuf),
    #[error("Cannot open maildir {}: {}", .0.display(), .1)]
    StoreOpen(PathBuf, String),
    #[error("Unsupported header value shape: {0}")]
    UnsupportedHeaderShape(String),
    #[error("Header is not valid {0}")]
    MalformedHeader(String),
    #[error("Cannot create directory {}: {}", .0.display(), .1)]
    DirectoryCreate(PathBuf, #[source] io::Error),
    #[error("Bad configuration in {}: {}", .0.display(), .1)]
    Config(PathBuf, String),
    #[error(transparent)]
    Io(#[from] io::Error),
}
