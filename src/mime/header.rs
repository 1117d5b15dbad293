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

use mailparse::{MailHeader, MailHeaderMap};

/// The header block of a raw message.
pub struct MessageHeaders<'a> {
    headers: Vec<MailHeader<'a>>,
}

impl<'a> MessageHeaders<'a> {
    /// Parse the header block at the start of `data`.
    ///
    /// A message whose header block cannot be parsed is treated as having no
    /// headers at all, so it still exports under the fallback subject and
    /// date.
    pub fn parse(data: &'a [u8]) -> Self {
        Self {
            headers: mailparse::parse_headers(data)
                .map(|(headers, _)| headers)
                .unwrap_or_default(),
        }
    }

    /// Return the raw value of the first header named `name`.
    ///
    /// Leading whitespace and the trailing line ending are removed. Returns
    /// `None` if the header is absent or its value is empty.
    pub fn raw_value(&self, name: &str) -> Option<&[u8]> {
        let value = self.headers.get_first_header(name)?.get_value_raw();
        let start = value
            .iter()
            .position(|b| !b" \t\r\n".contains(b))
            .unwrap_or(value.len());
        let end = value
            .iter()
            .rposition(|b| !b"\r\n".contains(b))
            .map_or(0, |end| end + 1);

        if start >= end {
            None
        } else {
            Some(&value[start..end])
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn finds_first_header_case_insensitively() {
        let headers = MessageHeaders::parse(
            b"From: a@example.com\r\n\
              subject: first\r\n\
              Subject: second\r\n\
              \r\n\
              Subject: body\r\n",
        );
        assert_eq!(Some(&b"first"[..]), headers.raw_value("Subject"));
        assert_eq!(None, headers.raw_value("Date"));
    }

    #[test]
    fn empty_values_are_absent() {
        let headers = MessageHeaders::parse(b"Subject:   \r\nX: y\r\n\r\n");
        assert_eq!(None, headers.raw_value("Subject"));
    }

    #[test]
    fn keeps_folding() {
        let headers =
            MessageHeaders::parse(b"Subject: foo\r\n bar\r\nX: y\r\n\r\nbody");
        let value = headers.raw_value("Subject").unwrap();
        assert!(value.starts_with(b"foo"));
        assert!(value.ends_with(b"bar"));
    }
}
