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
use std::path::Path;

/// Text included at the start of every log statement a component emits.
///
/// Each component is handed its own prefix when it is constructed. Scoping
/// down into a particular maildir, then into its folders, produces a new
/// prefix; the parent's is never mutated.
#[derive(Clone, Debug)]
pub struct LogPrefix {
    component: &'static str,
    store: Option<String>,
    folders: Vec<String>,
}

impl LogPrefix {
    pub fn new(component: &'static str) -> Self {
        Self {
            component,
            store: None,
            folders: Vec::new(),
        }
    }

    /// Create a prefix for work within the maildir at `path`.
    pub fn for_store(component: &'static str, path: &Path) -> Self {
        Self {
            component,
            store: Some(sanitise(path.display().to_string(), 256)),
            folders: Vec::new(),
        }
    }

    /// Derive a prefix for work within the sub-folder `folder` of whatever
    /// this prefix currently refers to.
    pub fn with_folder(&self, folder: &str) -> Self {
        let mut child = self.clone();
        child.folders.push(sanitise(folder.to_owned(), 64));
        child
    }
}

impl fmt::Display for LogPrefix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.component)?;
        if let Some(ref store) = self.store {
            write!(f, "[{}", store)?;
            if !self.folders.is_empty() {
                write!(f, ":{}", self.folders.join("/"))?;
            }
            write!(f, "]")?;
        }

        Ok(())
    }
}

fn sanitise(mut s: String, max_chars: usize) -> String {
    s.retain(|c| !c.is_control());
    if let Some((truncate_len, _)) = s.char_indices().nth(max_chars) {
        s.truncate(truncate_len);
    }

    s
}
