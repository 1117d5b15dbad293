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

use chrono::prelude::*;

/// Characters replaced by `_` in subjects.
const REPLACED: &[char] =
    &['*', '.', '"', '/', '\\', '[', ']', ':', ';', '|'];

/// Appended to subjects which had to be truncated.
const ELLIPSIS: char = '…';

/// Make `subject` usable as part of a file name.
///
/// Path separators and characters that are troublesome on common file
/// systems become `_`, and ASCII control characters are deleted outright. If
/// more than `max_chars` characters remain, only the first `max_chars` are
/// kept and `…` is appended.
///
/// The result may be empty.
pub fn sanitise_subject(subject: &str, max_chars: usize) -> String {
    let mut safe = subject
        .chars()
        .filter(|&c| c > '\x1F')
        .map(|c| if REPLACED.contains(&c) { '_' } else { c })
        .collect::<String>();

    if let Some((truncate_len, _)) = safe.char_indices().nth(max_chars) {
        safe.truncate(truncate_len);
        safe.push(ELLIPSIS);
    }

    safe
}

/// Assemble the file name for a message from its date and already sanitised
/// subject.
pub fn file_name(date: &NaiveDateTime, safe_subject: &str) -> String {
    format!("{} {}.eml", date.format("%Y-%m-%d %H:%M:%S"), safe_subject)
}
