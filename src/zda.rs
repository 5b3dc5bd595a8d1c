//! This module provides a parser for the *ZDA* sentence of the *NMEA 0183*
//! protocol.
//!
//! ```text
//!         1         2  3  4    5  6
//!         |         |  |  |    |  |
//!  $--ZDA,hhmmss.ss,xx,xx,xxxx,xx,xx*hh
//! ```

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::err::{Field, ParseError};
use crate::sentence::parse_time;

static ZDA: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^\$(?P<talker>GPZDA|GNZDA),(?P<time>\d{6}\.\d{1,2}),(?P<day>\d{2}),(?P<month>\d{2}),(?P<year>\d{4}),(?P<zone_hours>[-+]?\d{1,2}),(?P<zone_minutes>\d{2})(?P<checksum>\*[0-9A-Fa-f]{2})$",
    )
    .unwrap()
});

/// This represents a correct ZDA sentence and can be created by [`parse_zda`].
#[derive(Debug, Clone, PartialEq)]
pub struct ZdaSentence {
    /// Sentence id including the leading `$`, either `$GPZDA` or `$GNZDA`.
    pub id: String,
    /// Date and time transmitted by the receiver.
    pub utc: DateTime<Utc>,
    /// Local zone hours as transmitted, usually `-13..=13`.
    pub local_zone_offset_hours: i8,
    /// Local zone minutes as transmitted.
    pub local_zone_offset_minutes: u8,
    /// Checksum including the leading `*`. It is not verified.
    pub checksum: String,
}

/// Parse a ZDA sentence.
///
/// Unlike GGA, ZDA carries its own date, so the result does not depend on
/// the system clock. The local zone is passed through without range checks.
pub fn parse_zda(line: &str) -> Result<ZdaSentence, ParseError> {
    if !line.starts_with('$') {
        return Err(ParseError::MissingDelimiter);
    }
    let caps = ZDA.captures(line).ok_or(ParseError::Shape("ZDA"))?;
    let group = |name: &str| caps.name(name).map_or("", |m| m.as_str());

    let time = parse_time(group("time"))?;

    let day = convert!(group("day"), Field::Day, u32)?;
    let month = convert!(group("month"), Field::Month, u32)?;
    let year = convert!(group("year"), Field::Year, i32)?;
    let date =
        NaiveDate::from_ymd_opt(year, month, day).ok_or(ParseError::MalformedDate(day, month, year))?;

    Ok(ZdaSentence {
        id: format!("${}", group("talker")),
        utc: Utc.from_utc_datetime(&date.and_time(time)),
        local_zone_offset_hours: convert!(group("zone_hours"), Field::ZoneHours, i8)?,
        local_zone_offset_minutes: convert!(group("zone_minutes"), Field::ZoneMinutes, u8)?,
        checksum: group("checksum").to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn gpzda() {
        let s = parse_zda("$GPZDA,201530.00,04,07,2002,00,00*60").unwrap();

        assert_eq!(s.id, "$GPZDA");
        assert_eq!(s.utc, Utc.with_ymd_and_hms(2002, 7, 4, 20, 15, 30).unwrap());
        assert_eq!(s.local_zone_offset_hours, 0);
        assert_eq!(s.local_zone_offset_minutes, 0);
        assert_eq!(s.checksum, "*60");
    }

    #[test]
    fn gnzda_has_the_same_shape() {
        let gp = parse_zda("$GPZDA,132502.25,11,07,2025,+03,30*4f").unwrap();
        let gn = parse_zda("$GNZDA,132502.25,11,07,2025,+03,30*4f").unwrap();

        assert_eq!(gn.id, "$GNZDA");
        assert_eq!(gp.utc, gn.utc);
        assert_eq!(gn.utc.nanosecond(), 250_000_000);
        assert_eq!(gn.local_zone_offset_hours, 3);
        assert_eq!(gn.local_zone_offset_minutes, 30);
        assert_eq!(gn.checksum, "*4f");
    }

    #[test]
    fn other_talkers_are_rejected() {
        for line in [
            "$GLZDA,201530.00,04,07,2002,00,00*60",
            "$GPGGA,201530.00,04,07,2002,00,00*60",
            "$gpzda,201530.00,04,07,2002,00,00*60",
        ] {
            assert_matches!(parse_zda(line), Err(ParseError::Shape("ZDA")), "{}", line);
        }
    }

    #[test]
    fn missing_delimiter() {
        assert_matches!(
            parse_zda("GPZDA,201530.00,04,07,2002,00,00*60"),
            Err(ParseError::MissingDelimiter)
        );
    }

    #[test]
    fn zone_offsets_are_not_range_checked() {
        let s = parse_zda("$GPZDA,101112.13,12,11,2025,-13,45*00").unwrap();
        assert_eq!(s.local_zone_offset_hours, -13);
        assert_eq!(s.local_zone_offset_minutes, 45);

        let s = parse_zda("$GPZDA,101112.13,12,11,2025,99,99*00").unwrap();
        assert_eq!(s.local_zone_offset_hours, 99);
        assert_eq!(s.local_zone_offset_minutes, 99);

        let s = parse_zda("$GPZDA,101112.13,12,11,2025,5,00*00").unwrap();
        assert_eq!(s.local_zone_offset_hours, 5);
    }

    #[test]
    fn shape_deviations() {
        let cases = [
            // no fraction
            "$GPZDA,201530,04,07,2002,00,00*60",
            // three fraction digits
            "$GPZDA,201530.000,04,07,2002,00,00*60",
            // single digit day
            "$GPZDA,201530.00,4,07,2002,00,00*60",
            // two digit year
            "$GPZDA,201530.00,04,07,02,00,00*60",
            // three digit zone hours
            "$GPZDA,201530.00,04,07,2002,100,00*60",
            // single digit zone minutes
            "$GPZDA,201530.00,04,07,2002,00,0*60",
            // empty fields
            "$GPZDA,201530.00,,,,,*60",
            // bad checksum digits
            "$GPZDA,201530.00,04,07,2002,00,00*6Z",
            // trailing garbage
            "$GPZDA,201530.00,04,07,2002,00,00*60\r\n",
        ];
        for line in cases.iter() {
            assert_matches!(parse_zda(line), Err(ParseError::Shape(_)), "{}", line);
        }
    }

    #[test]
    fn impossible_dates() {
        assert_matches!(
            parse_zda("$GPZDA,201530.00,00,07,2002,00,00*60"),
            Err(ParseError::MalformedDate(0, 7, 2002))
        );
        assert_matches!(
            parse_zda("$GPZDA,201530.00,30,02,2024,00,00*60"),
            Err(ParseError::MalformedDate(30, 2, 2024))
        );
        assert_matches!(
            parse_zda("$GPZDA,201530.00,04,13,2002,00,00*60"),
            Err(ParseError::MalformedDate(4, 13, 2002))
        );
        assert!(parse_zda("$GPZDA,120000.00,29,02,2024,01,00*00").is_ok());
    }

    #[test]
    fn impossible_times() {
        assert_matches!(
            parse_zda("$GPZDA,256030.00,04,07,2002,00,00*60"),
            Err(ParseError::MalformedTime(ref t)) if t == "256030.00"
        );
    }
}
