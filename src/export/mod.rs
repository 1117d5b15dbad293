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

use std::fmt;
use std::ops::AddAssign;

pub mod exporter;
pub mod file_name;
pub mod tree;

/// Counts of what an export produced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExportStats {
    /// Plain directories recreated, including the top-level one.
    pub directories: usize,
    /// Maildirs exported, not counting their sub-folders.
    pub stores: usize,
    /// Maildir sub-folders exported.
    pub folders: usize,
    /// Message files written.
    pub messages: usize,
    /// Message files which replaced an earlier message of the same name.
    pub replaced: usize,
}

impl AddAssign for ExportStats {
    fn add_assign(&mut self, other: Self) {
        self.directories += other.directories;
        self.stores += other.stores;
        self.folders += other.folders;
        self.messages += other.messages;
        self.replaced += other.replaced;
    }
}

impl fmt::Display for ExportStats {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} directories, {} maildirs, {} folders, {} messages",
            self.directories, self.stores, self.folders, self.messages
        )?;
        if self.replaced > 0 {
            write!(f, " ({} overwritten by name collisions)", self.replaced)?;
        }
        Ok(())
    }
}
