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

use std::borrow::Cow;
use std::str;

use encoding_rs::Encoding;
use lazy_static::lazy_static;
use regex::Regex;

use crate::support::error::Error;

lazy_static! {
    static ref ENCODED_WORD: Regex =
        Regex::new(r"=\?([^?]*?)\?([qQbB])\?(.*?)\?=").unwrap();
}

/// The charset label given to header values which contain raw 8-bit data
/// outside of any encoded word.
pub const UNKNOWN_8BIT: &str = "unknown-8bit";

/// One run of a header value after RFC 2047 splitting.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DecodedWord {
    /// Text from outside any encoded word: the whole value of a header with
    /// none, or a run between or around them.
    Text(String),
    /// Raw bytes. `charset` is the (lower-cased) charset declared by the
    /// encoded word the bytes came from, `unknown-8bit` for a header value
    /// that is not UTF-8, or `None` if nothing is known about them.
    Bytes {
        content: Vec<u8>,
        charset: Option<String>,
    },
}

/// Split the raw value of a header into its decoded words.
///
/// Adjacent encoded words with the same charset are merged before any
/// charset decoding, since a multi-byte character may be split across them.
/// Whitespace between two encoded words is dropped. Each physical line of a
/// folded header is split separately; unencoded runs that end up adjacent
/// across a line boundary are joined with a single space.
///
/// Fails with `Error::UnsupportedHeaderShape` if a base64 encoded word has a
/// payload that cannot be decoded.
pub fn decode_header(raw: &[u8]) -> Result<Vec<DecodedWord>, Error> {
    let value = match str::from_utf8(raw) {
        Ok(value) => value,
        Err(_) => {
            return Ok(vec![DecodedWord::Bytes {
                content: raw.to_vec(),
                charset: Some(UNKNOWN_8BIT.to_owned()),
            }]);
        }
    };

    if !ENCODED_WORD.is_match(value) {
        return Ok(vec![DecodedWord::Text(value.to_owned())]);
    }

    let mut words = Vec::<Word>::new();
    for line in value.lines() {
        let mut first = true;
        let mut start = 0;
        for captures in ENCODED_WORD.captures_iter(line) {
            let whole = captures.get(0).unwrap();
            push_unencoded(&mut words, &line[start..whole.start()], &mut first);
            start = whole.end();

            let charset = captures.get(1).unwrap().as_str();
            // RFC 2231 permits a language suffix on the charset
            let charset = charset.split('*').next().unwrap_or(charset);
            words.push(Word::Encoded {
                charset: charset.to_ascii_lowercase(),
                content: decode_xfer(
                    captures.get(2).unwrap().as_str(),
                    captures.get(3).unwrap().as_str(),
                )?,
            });
        }
        push_unencoded(&mut words, &line[start..], &mut first);
    }

    Ok(collapse(drop_interword_space(words)))
}

enum Word<'a> {
    Unencoded(&'a str),
    Encoded { charset: String, content: Vec<u8> },
}

impl<'a> Word<'a> {
    fn is_encoded(&self) -> bool {
        matches!(*self, Word::Encoded { .. })
    }
}

fn push_unencoded<'a>(words: &mut Vec<Word<'a>>, text: &'a str, first: &mut bool) {
    let text = if *first { text.trim_start() } else { text };
    *first = false;
    if !text.is_empty() {
        words.push(Word::Unencoded(text));
    }
}

fn drop_interword_space(words: Vec<Word>) -> Vec<Word> {
    let mut kept: Vec<Word> = Vec::with_capacity(words.len());
    for word in words {
        if word.is_encoded() && kept.len() >= 2 {
            let n = kept.len();
            let between_encoded = kept[n - 2].is_encoded()
                && matches!(
                    kept[n - 1],
                    Word::Unencoded(s) if s.chars().all(char::is_whitespace)
                );
            if between_encoded {
                kept.pop();
            }
        }
        kept.push(word);
    }
    kept
}

fn collapse(words: Vec<Word>) -> Vec<DecodedWord> {
    let mut collapsed = Vec::<DecodedWord>::new();
    for word in words {
        match word {
            Word::Unencoded(text) => {
                if let Some(DecodedWord::Text(last)) = collapsed.last_mut() {
                    last.push(' ');
                    last.push_str(text);
                    continue;
                }

                collapsed.push(DecodedWord::Text(text.to_owned()));
            }

            Word::Encoded { charset, content } => {
                if let Some(DecodedWord::Bytes {
                    content: last_content,
                    charset: Some(last_charset),
                }) = collapsed.last_mut()
                {
                    if *last_charset == charset {
                        last_content.extend_from_slice(&content);
                        continue;
                    }
                }

                collapsed.push(DecodedWord::Bytes {
                    content,
                    charset: Some(charset),
                });
            }
        }
    }
    collapsed
}

fn decode_xfer(xfer: &str, content: &str) -> Result<Vec<u8>, Error> {
    match xfer {
        "q" | "Q" => Ok(q_decode(content.as_bytes())),
        _ => {
            // Be forgiving of encoders that drop the trailing padding
            let mut padded = Cow::Borrowed(content);
            if 0 != content.len() % 4 {
                let missing = 4 - content.len() % 4;
                padded.to_mut().push_str(&"==="[..missing]);
            }
            base64::decode(padded.as_bytes()).map_err(|_| {
                Error::UnsupportedHeaderShape(format!(
                    "undecodable base64 encoded word {:?}",
                    content
                ))
            })
        }
    }
}

/// Decode the "Q" encoding of RFC 2047.
///
/// `_` stands for ASCII space regardless of charset. Malformed `=` escapes are
/// passed through untransformed.
fn q_decode(content: &[u8]) -> Vec<u8> {
    let mut decoded = Vec::with_capacity(content.len());
    let mut i = 0;
    while i < content.len() {
        match content[i] {
            b'_' => decoded.push(b' '),
            b'=' if i + 2 < content.len() => {
                match str::from_utf8(&content[i + 1..i + 3])
                    .ok()
                    .filter(|hex| hex.bytes().all(|b| b.is_ascii_hexdigit()))
                    .and_then(|hex| u8::from_str_radix(hex, 16).ok())
                {
                    Some(b) => {
                        decoded.push(b);
                        i += 3;
                        continue;
                    }
                    None => decoded.push(b'='),
                }
            }
            b => decoded.push(b),
        }
        i += 1;
    }
    decoded
}

impl DecodedWord {
    /// Convert this word into text.
    ///
    /// Bytes without a charset, or whose charset is one of the `unknown-*`
    /// placeholders, are treated as ASCII, with every other byte becoming
    /// U+FFFD. Bytes in a charset `encoding_rs` does not recognise are decoded
    /// as UTF-8 with replacement. Only bytes which are malformed in a
    /// recognised charset are an error.
    pub fn into_text(self) -> Result<String, Error> {
        match self {
            DecodedWord::Text(text) => Ok(text),
            DecodedWord::Bytes {
                content,
                charset: None,
            } => Ok(ascii_lossy(&content)),
            DecodedWord::Bytes {
                content,
                charset: Some(charset),
            } => {
                if charset.to_ascii_lowercase().starts_with("unknown") {
                    return Ok(ascii_lossy(&content));
                }

                match Encoding::for_label_no_replacement(charset.as_bytes()) {
                    None => Ok(String::from_utf8_lossy(&content).into_owned()),
                    Some(encoding) => encoding
                        .decode_without_bom_handling_and_without_replacement(
                            &content,
                        )
                        .map(Cow::into_owned)
                        .ok_or(Error::MalformedHeader(charset)),
                }
            }
        }
    }
}

fn ascii_lossy(content: &[u8]) -> String {
    content
        .iter()
        .map(|&b| if b.is_ascii() { b as char } else { '\u{FFFD}' })
        .collect()
}

/// Decode a whole header value into text, applying `DecodedWord::into_text`
/// to each word.
pub fn decode_header_text(raw: &[u8]) -> Result<String, Error> {
    let mut text = String::new();
    for word in decode_header(raw)? {
        text.push_str(&word.into_text()?);
    }
    Ok(text)
}
