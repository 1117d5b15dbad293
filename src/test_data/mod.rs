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

/// Base64 encoded-word subject "Hello", dated 2020-06-01 12:00:00 +0000.
pub static ENCODED_SUBJECT: &[u8] = include_bytes!("encoded_subject.eml");

/// Neither `Subject` nor `Date`.
pub static NO_HEADERS: &[u8] = include_bytes!("no_headers.eml");

/// Subject "Bad date" with a `Date` header that is not a date.
pub static BAD_DATE: &[u8] = include_bytes!("bad_date.eml");

/// Subject in a charset nobody has heard of, containing the Latin-1 byte for
/// "é"; dated 2019-12-31 23:00:00 +0000. The body also has raw 8-bit data.
pub static UNKNOWN_CHARSET: &[u8] = include_bytes!("unknown_charset.eml");
