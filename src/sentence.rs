//! Framing shared by all sentence parsers and dispatch on the sentence type.

use arrayvec::ArrayVec;
use chrono::NaiveTime;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::err::ParseError;
use crate::gga::{self, GgaSentence};
use crate::zda::{self, ZdaSentence};

/// Maximum length of an NMEA 0183 sentence, which also bounds its field count.
pub const MAX_FIELDS: usize = 82;

static FRAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\$([A-Z]{5}),([^*]*)(\*[0-9A-Fa-f]{2})$").unwrap());

static TIME_OF_DAY: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{6}(?:\.\d+)?$").unwrap());

/// The three parts of `$TTSSS,payload*hh`.
#[derive(Debug)]
pub(crate) struct Frame<'a> {
    pub talker: &'a str,
    pub payload: &'a str,
    /// `*hh`, including the asterisk.
    pub checksum: &'a str,
}

/// Matches the whole line against the generic sentence grammar.
/// `kind` names the grammar in the returned `ParseError::Shape`.
pub(crate) fn frame<'a>(line: &'a str, kind: &'static str) -> Result<Frame<'a>, ParseError> {
    if !line.starts_with('$') {
        return Err(ParseError::MissingDelimiter);
    }
    let caps = FRAME.captures(line).ok_or(ParseError::Shape(kind))?;
    match (caps.get(1), caps.get(2), caps.get(3)) {
        (Some(talker), Some(payload), Some(checksum)) => Ok(Frame {
            talker: talker.as_str(),
            payload: payload.as_str(),
            checksum: checksum.as_str(),
        }),
        _ => Err(ParseError::Shape(kind)),
    }
}

/// Splits the payload on commas without allocating.
pub(crate) fn split_fields(payload: &str) -> Result<ArrayVec<&str, MAX_FIELDS>, ParseError> {
    let mut fields = ArrayVec::new();
    for field in payload.split(',') {
        fields
            .try_push(field)
            .map_err(|_| ParseError::TooManyFields(MAX_FIELDS))?;
    }
    Ok(fields)
}

/// Parses a time of day in the format `hhmmss` with an optional fraction of
/// a second, e.g. `123519` or `123519.25`.
pub(crate) fn parse_time(raw: &str) -> Result<NaiveTime, ParseError> {
    if !TIME_OF_DAY.is_match(raw) {
        return Err(ParseError::MalformedTime(raw.to_owned()));
    }
    NaiveTime::parse_from_str(raw, "%H%M%S%.f").map_err(|_| ParseError::MalformedTime(raw.to_owned()))
}

/// Any of the sentences this crate understands.
#[derive(Debug, Clone, PartialEq)]
pub enum Sentence {
    Gga(GgaSentence),
    Zda(ZdaSentence),
}

/// Parses `line` with the parser matching its sentence type.
///
/// The sentence type is the part of the talker id after the two letter
/// talker, so `$GPGGA` and `$GNGGA` are both handed to the GGA parser.
/// Everything except `GGA` and `ZDA` yields
/// `ParseError::UnexpectedSentenceType`.
pub fn parse_sentence(line: &str) -> Result<Sentence, ParseError> {
    if !line.starts_with('$') {
        return Err(ParseError::MissingDelimiter);
    }
    let talker = line.get(1..6).ok_or(ParseError::Shape("NMEA 0183"))?;
    match talker.get(2..) {
        Some("GGA") => gga::parse_gga(line).map(Sentence::Gga),
        Some("ZDA") => zda::parse_zda(line).map(Sentence::Zda),
        _ => Err(ParseError::UnexpectedSentenceType(talker.to_owned())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn frame_parts() {
        let f = frame("$GPZDA,201530.00,04,07,2002,00,00*60", "ZDA").unwrap();
        assert_eq!(f.talker, "GPZDA");
        assert_eq!(f.payload, "201530.00,04,07,2002,00,00");
        assert_eq!(f.checksum, "*60");
    }

    #[test]
    fn frame_rejects_bad_shapes() {
        assert_matches!(frame("GPGGA,1*00", "GGA"), Err(ParseError::MissingDelimiter));
        assert_matches!(frame("$GPGG,1*00", "GGA"), Err(ParseError::Shape("GGA")));
        assert_matches!(frame("$gpgga,1*00", "GGA"), Err(ParseError::Shape(_)));
        assert_matches!(frame("$GPGGA,1*0", "GGA"), Err(ParseError::Shape(_)));
        assert_matches!(frame("$GPGGA,1*0G", "GGA"), Err(ParseError::Shape(_)));
        assert_matches!(frame("$GPGGA,1*00 ", "GGA"), Err(ParseError::Shape(_)));
        assert_matches!(frame("$GPGGA,1*00\r\n", "GGA"), Err(ParseError::Shape(_)));
        assert_matches!(frame("$GPGGA,1*2*00", "GGA"), Err(ParseError::Shape(_)));
        assert_matches!(frame("$GPGGA,1", "GGA"), Err(ParseError::Shape(_)));
    }

    #[test]
    fn split_keeps_empty_fields() {
        let fields = split_fields("a,,b,").unwrap();
        assert_eq!(fields.as_slice(), &["a", "", "b", ""]);
    }

    #[test]
    fn split_is_bounded() {
        let payload = ",".repeat(MAX_FIELDS - 1);
        assert_eq!(split_fields(&payload).unwrap().len(), MAX_FIELDS);

        let payload = ",".repeat(MAX_FIELDS);
        assert_matches!(split_fields(&payload), Err(ParseError::TooManyFields(MAX_FIELDS)));
    }

    #[test]
    fn time_with_and_without_fraction() {
        let t = parse_time("123519").unwrap();
        assert_eq!((t.hour(), t.minute(), t.second(), t.nanosecond()), (12, 35, 19, 0));

        let t = parse_time("001043.25").unwrap();
        assert_eq!((t.hour(), t.minute(), t.second()), (0, 10, 43));
        assert_eq!(t.nanosecond(), 250_000_000);
    }

    #[test]
    fn malformed_times() {
        for raw in ["", "12351", "1235190", "12:35:19", "123519.", "246000", "126000.00", "1235a9"] {
            assert_matches!(parse_time(raw), Err(ParseError::MalformedTime(_)), "{}", raw);
        }
    }

    #[test]
    fn dispatch_by_sentence_type() {
        let gga = "$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47";
        assert_matches!(parse_sentence(gga), Ok(Sentence::Gga(_)));

        let zda = "$GNZDA,201530.00,04,07,2002,00,00*60";
        assert_matches!(parse_sentence(zda), Ok(Sentence::Zda(_)));

        assert_matches!(
            parse_sentence("$GPRMC,123519,A*00"),
            Err(ParseError::UnexpectedSentenceType(ref t)) if t == "GPRMC"
        );
        assert_matches!(parse_sentence("GPGGA,123519*00"), Err(ParseError::MissingDelimiter));
        assert_matches!(parse_sentence("$GP"), Err(ParseError::Shape(_)));
    }
}
