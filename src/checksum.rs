//! Checksum verification.
//!
//! The sentence parsers only extract the checksum. Callers that want
//! verification run [`verify_checksum`] before parsing, or let the
//! [`SentenceReader`](crate::reader::SentenceReader) do it with
//! [`ChecksumMode::Verify`].

use crate::err::ParseError;
use crate::sentence::frame;

/// Whether checksums are verified before a sentence is parsed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ChecksumMode {
    /// The checksum is extracted but never compared.
    #[default]
    Ignore,
    /// Sentences whose checksum does not match are rejected with
    /// `ParseError::Checksum`.
    Verify,
}

/// XOR of all bytes in `body`, the part of a sentence between `'$'` and `'*'`.
pub fn checksum(body: &str) -> u8 {
    body.bytes().fold(0u8, |acc, b| acc ^ b)
}

/// Compares the transmitted checksum of `line` against the one computed from
/// its content and returns it if both match.
pub fn verify_checksum(line: &str) -> Result<u8, ParseError> {
    let frame = frame(line, "NMEA 0183")?;
    // frame guarantees `$` at the start and `*hh` at the end
    let body = &line[1..line.len() - frame.checksum.len()];
    let expected = checksum(body);
    let found = u8::from_str_radix(&frame.checksum[1..], 16).map_err(|_| ParseError::Shape("NMEA 0183"))?;

    if expected != found {
        return Err(ParseError::Checksum(expected, found));
    }
    Ok(found)
}
