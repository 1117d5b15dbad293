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

use std::time::UNIX_EPOCH;

use chrono::prelude::*;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Anything outside the date and time fields is ignored
    static ref DATE_TIME: Regex = Regex::new(
        r"(?i)\b(\d{1,2})\s+(jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\.?\s+(\d{2,4})\s+(\d{1,2}):(\d{2})(?::(\d{2}))?\b"
    )
    .unwrap();
}

const MONTHS: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct",
    "nov", "dec",
];

/// The date used for messages whose `Date` header is missing or unparsable:
/// the UNIX epoch, in local time.
pub fn fallback_date() -> NaiveDateTime {
    DateTime::<Local>::from(UNIX_EPOCH).naive_local()
}

/// Determine the date and time of a message from the raw value of its `Date`
/// header.
///
/// The result is the calendar date and clock time as written in the header.
/// The zone is not applied, so the same message gets the same time on every
/// host.
pub fn message_date(raw: Option<&[u8]>) -> NaiveDateTime {
    raw.map(String::from_utf8_lossy)
        .and_then(|value| parse_date_time(&value))
        .unwrap_or_else(fallback_date)
}

/// Leniently parse an RFC 5322 date.
///
/// Seconds are optional. Two-digit years are taken as 1969 to 2068, and
/// three-digit years as they are.
fn parse_date_time(value: &str) -> Option<NaiveDateTime> {
    let captures = DATE_TIME.captures(value)?;
    let number = |ix: usize| -> Option<u32> {
        captures.get(ix).map_or(Some(0), |m| m.as_str().parse().ok())
    };

    let month_name = captures.get(2).unwrap().as_str().to_ascii_lowercase();
    let month = MONTHS.iter().position(|&m| m == month_name)? as u32 + 1;

    let mut year = number(3)? as i32;
    if year < 100 {
        year += if year > 68 { 1900 } else { 2000 };
    }

    NaiveDate::from_ymd_opt(year, month, number(1)?)?.and_hms_opt(
        number(4)?,
        number(5)?,
        number(6)?,
    )
}

#[cfg(test)]
mod test {
    use super::*;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap()
    }

    #[test]
    fn parses_rfc5322_dates() {
        let expected = at(2003, 7, 1, 10, 52, 37);
        assert_eq!(
            expected,
            message_date(Some(b"Tue, 1 Jul 2003 10:52:37 +0200"))
        );
        // Day of week is optional
        assert_eq!(expected, message_date(Some(b"1 Jul 2003 10:52:37 +0200")));
        assert_eq!(expected, message_date(Some(b"01 JUL 2003 10:52:37 -0700")));
    }

    #[test]
    fn keeps_header_clock_time_regardless_of_zone() {
        assert_eq!(
            message_date(Some(b"Tue, 1 Jul 2003 10:52:37 +0200")),
            message_date(Some(b"Tue, 1 Jul 2003 10:52:37 -1100"))
        );
    }

    #[test]
    fn seconds_are_optional() {
        assert_eq!(
            at(2003, 7, 1, 10, 52, 0),
            message_date(Some(b"Tue, 01 Jul 2003 10:52 +0200"))
        );
        assert_eq!(
            at(2003, 7, 1, 10, 52, 0),
            message_date(Some(b"1 Jul 2003 10:52"))
        );
    }

    #[test]
    fn obsolete_forms() {
        // Two-digit years
        assert_eq!(
            at(1999, 12, 31, 23, 59, 59),
            message_date(Some(b"Fri, 31 Dec 99 23:59:59 GMT"))
        );
        assert_eq!(
            at(2003, 7, 1, 10, 52, 37),
            message_date(Some(b"Tue, 1 Jul 03 10:52:37 +0200"))
        );
        // Named zones and trailing comments
        assert_eq!(
            at(2003, 7, 1, 10, 52, 37),
            message_date(Some(b"Tue, 1 Jul 2003 10:52:37 EDT"))
        );
        assert_eq!(
            at(2020, 6, 1, 12, 0, 0),
            message_date(Some(b"Mon, 1 Jun 2020 12:00:00 +0000 (UTC)"))
        );
        // Full month names and folding whitespace
        assert_eq!(
            at(2020, 6, 1, 12, 0, 0),
            message_date(Some(b"Mon,\r\n 1   June 2020  12:00:00 +0000"))
        );
    }

    #[test]
    fn missing_and_garbage_dates_share_fallback() {
        assert_eq!(fallback_date(), message_date(None));
        assert_eq!(fallback_date(), message_date(Some(b"next tuesday")));
        assert_eq!(fallback_date(), message_date(Some(b"\xff\xfe")));
        // Fields out of range
        assert_eq!(
            fallback_date(),
            message_date(Some(b"31 Feb 2020 10:00:00 +0000"))
        );
        assert_eq!(
            fallback_date(),
            message_date(Some(b"1 Jan 2020 25:00:00 +0000"))
        );
        assert_eq!(
            Local.timestamp_opt(0, 0).unwrap().naive_local(),
            fallback_date()
        );
    }
}
